use super::engine::{FilterValue, Filters, SearchEngine, SearchOptions, SearchState};
use super::field::Queryable;
use leptos::*;

/// Reactive search/filter/sort state over a collection.
///
/// The filtered view is a memo: it recomputes whenever the data, the query,
/// the filters, or the sort key change.
pub struct LocalSearch<T: 'static> {
    query: RwSignal<String>,
    filters: RwSignal<Filters>,
    sort_by: RwSignal<Option<String>>,
    filtered: Memo<Vec<T>>,
}

impl<T: 'static> Clone for LocalSearch<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for LocalSearch<T> {}

pub fn use_local_search<T, I, S>(
    data: impl Into<MaybeSignal<Vec<T>>>,
    search_fields: I,
    options: SearchOptions,
) -> LocalSearch<T>
where
    T: Queryable + Clone + PartialEq + 'static,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let data = data.into();
    let engine = SearchEngine::new(search_fields, options);
    let query = create_rw_signal(String::new());
    let filters = create_rw_signal(Filters::new());
    let sort_by = create_rw_signal(None::<String>);

    let filtered = create_memo(move |_| {
        let state = snapshot(query, filters, sort_by);
        data.with(|items| engine.apply(items, &state))
    });

    LocalSearch {
        query,
        filters,
        sort_by,
        filtered,
    }
}

fn snapshot(
    query: RwSignal<String>,
    filters: RwSignal<Filters>,
    sort_by: RwSignal<Option<String>>,
) -> SearchState {
    SearchState {
        query: query.get(),
        filters: filters.get(),
        sort_by: sort_by.get(),
    }
}

impl<T: Clone + 'static> LocalSearch<T> {
    pub fn query(&self) -> String {
        self.query.get()
    }

    pub fn set_query(&self, query: impl Into<String>) {
        self.query.set(query.into());
    }

    pub fn filters(&self) -> Filters {
        self.filters.get()
    }

    pub fn set_filters(&self, filters: Filters) {
        self.filters.set(filters);
    }

    pub fn update_filter(&self, key: impl Into<String>, value: impl Into<FilterValue>) {
        let (key, value) = (key.into(), value.into());
        self.filters.update(|filters| {
            filters.insert(key, value);
        });
    }

    pub fn clear_filter(&self, key: &str) {
        self.filters.update(|filters| {
            filters.remove(key);
        });
    }

    pub fn sort_by(&self) -> Option<String> {
        self.sort_by.get()
    }

    /// An empty key clears the sort.
    pub fn set_sort_by(&self, key: impl Into<String>) {
        let key = key.into();
        self.sort_by.set(if key.is_empty() { None } else { Some(key) });
    }

    /// Resets query, filters and sort together.
    pub fn clear_all_filters(&self) {
        batch(|| {
            self.filters.set(Filters::new());
            self.query.set(String::new());
            self.sort_by.set(None);
        });
    }

    pub fn filtered(&self) -> Memo<Vec<T>> {
        self.filtered
    }

    pub fn filtered_data(&self) -> Vec<T> {
        self.filtered.get()
    }

    pub fn result_count(&self) -> usize {
        self.filtered.with(Vec::len)
    }

    pub fn has_active_filters(&self) -> bool {
        snapshot(self.query, self.filters, self.sort_by).has_active_filters()
    }
}
