/// Main application entry point for SpotLight.
/// Builds the services once and hands them to the view tree through context.
use leptos::*;
use leptos::logging::log;
use crate::api::Services;
use crate::config::ServiceConfig;
use crate::models::business::Business;
use crate::query::{use_local_search, SearchOptions};
use crate::utils::formatters::format_rating;

#[component]
pub fn App() -> impl IntoView {
    let services = Services::local(&ServiceConfig::default());
    provide_context(services.clone());

    let businesses = services.businesses.clone();
    let loaded = create_local_resource(
        || (),
        move |_| {
            let businesses = businesses.clone();
            async move {
                let all = businesses.get_all().await;
                log!("[APP] Loaded {} businesses", all.len());
                all
            }
        },
    );
    let data = Signal::derive(move || loaded.get().unwrap_or_default());

    let search = use_local_search(
        data,
        ["name", "category", "address"],
        SearchOptions::default(),
    );

    view! {
        <div>
            <h1>{ "SpotLight" }</h1>
            <input
                type="search"
                placeholder="Search businesses, categories..."
                prop:value=move || search.query()
                on:input=move |e| search.set_query(event_target_value(&e))
            />
            <select on:change=move |e| search.set_sort_by(event_target_value(&e))>
                <option value="">{ "Default order" }</option>
                <option value="rating">{ "Rating" }</option>
                <option value="reviewCount">{ "Reviews" }</option>
                <option value="name">{ "Name" }</option>
            </select>
            <Show when=move || search.has_active_filters()>
                <button on:click=move |_| search.clear_all_filters()>{ "Clear all" }</button>
            </Show>
            <p>{ move || format!("{} businesses found", search.result_count()) }</p>
            <ul>
                <For
                    each=move || search.filtered_data()
                    key=|business: &Business| business.id
                    children=|business: Business| view! {
                        <li>
                            <strong>{ business.name }</strong>
                            " - " { business.category }
                            " - " { format_rating(business.rating, 5.0) }
                        </li>
                    }
                />
            </ul>
        </div>
    }
}
