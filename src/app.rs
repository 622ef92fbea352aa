//! Root component: builds the API client, provides the session, and wires
//! the routes behind the auth gate.

use std::sync::Arc;

use leptos::*;
use leptos_router::{Outlet, Redirect, Route, Router, Routes};

use leadboard_client::config::TOKEN_STORAGE_KEY;
use leadboard_client::ApiClient;

use crate::api_base_url;
use crate::components::common::Loader;
use crate::components::layout::{Header, Sidebar};
use crate::pages::bitrix::BitrixPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::lead_detail::LeadDetailPage;
use crate::pages::leads::LeadsPage;
use crate::pages::login::LoginPage;
use crate::pages::settings::SettingsPage;
use crate::pages::sources::SourcesPage;
use crate::session::{Session, SessionState};
use crate::storage::{self, BrowserStore};

#[component]
pub fn App() -> impl IntoView {
    let store = Arc::new(BrowserStore::new(TOKEN_STORAGE_KEY));
    let api = ApiClient::new(api_base_url(), store.clone())
        // The hook fires outside the router, so a hard navigation it is.
        .on_unauthorized(|| storage::redirect_to("/login"));

    provide_context(api.clone());
    Session::provide(api, store);

    view! {
        <Router>
            <Routes>
                <Route path="/login" view=LoginPage/>
                <Route path="/" view=Shell>
                    <Route path="" view=DashboardPage/>
                    <Route path="leads" view=LeadsPage/>
                    <Route path="leads/:id" view=LeadDetailPage/>
                    <Route path="sources" view=SourcesPage/>
                    <Route path="bitrix" view=BitrixPage/>
                    <Route path="settings" view=SettingsPage/>
                </Route>
            </Routes>
        </Router>
    }
}

/// Auth gate plus the sidebar/header chrome around every protected page.
#[component]
fn Shell() -> impl IntoView {
    let session = crate::session::use_session();

    view! {
        {move || match session.state.get() {
            SessionState::Checking => view! {
                <div class="fullscreen-loader">
                    <Loader text="Checking session..."/>
                </div>
            }
            .into_view(),
            SessionState::Anonymous => view! { <Redirect path="/login"/> }.into_view(),
            SessionState::Authenticated(_) => view! {
                <div class="app-shell">
                    <Sidebar/>
                    <div class="app-main">
                        <Header/>
                        <main class="app-content">
                            <Outlet/>
                        </main>
                    </div>
                </div>
            }
            .into_view(),
        }}
    }
}
