//! Login page. Authenticated visitors are bounced straight to the
//! dashboard.

use leptos::*;
use leptos_router::use_navigate;

use crate::components::common::{Alert, AlertKind};
use crate::session::use_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    {
        let session = session.clone();
        let navigate = navigate.clone();
        create_effect(move |_| {
            if session.is_authenticated() {
                navigate("/", Default::default());
            }
        });
    }

    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = session.error;
    let pending = session.pending;

    let submit = {
        let session = session.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let session = session.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                if session.login(&email.get_untracked(), &password.get_untracked()).await.is_ok() {
                    navigate("/", Default::default());
                }
            });
        }
    };

    view! {
        <div class="login-screen">
            <form class="login-card" on:submit=submit>
                <h1>"LeadBoard"</h1>
                <p class="login-subtitle">"Sign in to the admin dashboard"</p>
                {move || {
                    error
                        .get()
                        .map(|message| view! { <Alert kind=AlertKind::Error message=message/> })
                }}
                <div class="form-field">
                    <label for="login-email">"Email"</label>
                    <input
                        id="login-email"
                        type="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-field">
                    <label for="login-password">"Password"</label>
                    <input
                        id="login-password"
                        type="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </div>
                <button class="btn btn-primary" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
