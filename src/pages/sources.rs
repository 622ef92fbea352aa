//! Sources page: create form on the left, configured-source list on the
//! right, edit in a modal.

use leptos::*;

use leadboard_client::sources::{Source, SourcePayload};
use leadboard_client::ApiClient;

use crate::api_base_url;
use crate::components::common::{Alert, AlertKind, Loader};
use crate::components::sources::{SourceEditModal, SourceForm, SourceList};
use crate::state::use_sources;

#[component]
pub fn SourcesPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let state = use_sources(api);

    let pending = create_rw_signal(false);
    let editing = create_rw_signal(Option::<Source>::None);

    let on_create = {
        let state = state.clone();
        Callback::new(move |payload: SourcePayload| {
            let state = state.clone();
            pending.set(true);
            spawn_local(async move {
                // The list error signal carries any failure message.
                let _ = state.add(&payload).await;
                pending.set(false);
            });
        })
    };

    let on_update = {
        let state = state.clone();
        Callback::new(move |payload: SourcePayload| {
            let Some(source) = editing.get_untracked() else {
                return;
            };
            let state = state.clone();
            pending.set(true);
            spawn_local(async move {
                if state.update(&source.id, &payload).await.is_ok() {
                    editing.set(None);
                }
                pending.set(false);
            });
        })
    };

    let on_delete = {
        let state = state.clone();
        Callback::new(move |id: String| {
            let state = state.clone();
            spawn_local(async move {
                let _ = state.delete(&id).await;
            });
        })
    };

    let sources = state.sources;
    let is_loading = state.is_loading;
    let error = state.error;

    view! {
        <section class="page page-sources">
            {move || {
                error
                    .get()
                    .map(|message| view! { <Alert kind=AlertKind::Error message=message/> })
            }}
            <div class="sources-layout">
                <div class="card">
                    <h2>"Add source"</h2>
                    <SourceForm submit_label="Create source" on_submit=on_create pending=pending/>
                </div>
                <div class="card">
                    <h2>"Configured sources"</h2>
                    <Show
                        when=move || !is_loading.get()
                        fallback=|| view! { <Loader text="Loading sources..."/> }
                    >
                        <SourceList
                            sources=sources
                            api_base_url=api_base_url()
                            on_edit=Callback::new(move |source| editing.set(Some(source)))
                            on_delete=on_delete
                        />
                    </Show>
                </div>
            </div>
            {move || {
                editing
                    .get()
                    .map(|source| {
                        view! {
                            <SourceEditModal
                                source=source
                                on_submit=on_update
                                on_close=Callback::new(move |_| editing.set(None))
                                pending=pending
                            />
                        }
                    })
            }}
        </section>
    }
}
