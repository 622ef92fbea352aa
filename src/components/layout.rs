//! Application chrome: the sidebar navigation and the page header.

use leptos::*;
use leptos_router::{use_location, A};

use crate::format::page_title;
use crate::session::use_session;

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">"LeadBoard"</div>
            <nav class="sidebar-nav">
                <A href="/" exact=true>
                    "Dashboard"
                </A>
                <A href="/leads">"Leads"</A>
                <A href="/sources">"Sources"</A>
                <A href="/bitrix">"Bitrix Status"</A>
                <A href="/settings">"Settings"</A>
            </nav>
        </aside>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let logout_session = session.clone();
    let location = use_location();
    let title = move || page_title(&location.pathname.get());
    let welcome = move || {
        session
            .user()
            .map(|user| {
                let who = user.name.unwrap_or(user.email);
                format!("Welcome, {}", who)
            })
            .unwrap_or_default()
    };

    view! {
        <header class="header">
            <h1 class="header-title">{title}</h1>
            <div class="header-right">
                <span class="header-welcome">{welcome}</span>
                <button class="btn btn-secondary" on:click=move |_| logout_session.logout()>
                    "Logout"
                </button>
            </div>
        </header>
    }
}
