mod app;
mod components;
mod format;
mod pages;
mod session;
mod state;
mod storage;

use leptos::*;

use crate::app::App;

/// Backend API base URL, e.g. `http://localhost:5001/api`. Supplied at
/// build time; the dev default matches the local backend.
pub fn api_base_url() -> &'static str {
    option_env!("LEADBOARD_API_URL").unwrap_or("http://localhost:5001/api")
}

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    mount_to_body(|| view! { <App/> });
}
