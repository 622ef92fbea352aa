//! Shared alert and loader widgets.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Success,
    Warning,
}

impl AlertKind {
    fn class(&self) -> &'static str {
        match self {
            AlertKind::Error => "alert alert-error",
            AlertKind::Success => "alert alert-success",
            AlertKind::Warning => "alert alert-warning",
        }
    }
}

#[component]
pub fn Alert(kind: AlertKind, #[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class=kind.class() role="alert">
            <p>{message}</p>
        </div>
    }
}

#[component]
pub fn Loader(#[prop(into)] text: String) -> impl IntoView {
    view! {
        <div class="loader">
            <div class="loader-spinner"></div>
            <span>{text}</span>
        </div>
    }
}
