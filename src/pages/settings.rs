//! Settings page. Password change is not wired to a backend endpoint yet,
//! so the form renders disabled with a notice.

use leptos::*;

use crate::components::common::{Alert, AlertKind};
use crate::session::use_session;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let session = use_session();
    let email = move || session.user().map(|u| u.email).unwrap_or_default();

    view! {
        <section class="page page-settings">
            <div class="card">
                <h2>"Account"</h2>
                <div class="form-field">
                    <label for="settings-email">"Email"</label>
                    <input id="settings-email" type="email" prop:value=email disabled/>
                </div>
            </div>
            <div class="card">
                <h2>"Change password"</h2>
                <Alert
                    kind=AlertKind::Warning
                    message="Password changes are not available yet."
                />
                <div class="form-field">
                    <label for="settings-current">"Current password"</label>
                    <input id="settings-current" type="password" disabled/>
                </div>
                <div class="form-field">
                    <label for="settings-new">"New password"</label>
                    <input id="settings-new" type="password" disabled/>
                </div>
                <button class="btn btn-primary" disabled>
                    "Update password"
                </button>
            </div>
        </section>
    }
}
