#[cfg(feature = "csr")]
pub fn main() {
    // a client-side main function is required for using `trunk serve`
    // to run: `trunk serve --open --features csr`
    use spotlight::app::App;

    console_error_panic_hook::set_once();

    leptos::mount_to_body(App);
}

#[cfg(not(feature = "csr"))]
pub fn main() {
    // no native entry point; the app only runs in the browser
    // see lib.rs for the hydrate entry point
}
