//! Source management widgets: the create/edit form, the configured-source
//! list with webhook URLs, and the edit modal.

use leptos::*;

use leadboard_client::sources::{Platform, Source, SourceConfig, SourcePayload};

use crate::format::format_date;
use crate::storage;

fn none_if_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[component]
pub fn SourceForm(
    #[prop(optional)] initial: Option<Source>,
    #[prop(into)] submit_label: String,
    #[prop(into)] on_submit: Callback<SourcePayload>,
    #[prop(into)] pending: Signal<bool>,
) -> impl IntoView {
    let name = create_rw_signal(
        initial.as_ref().map(|s| s.name.clone()).unwrap_or_default(),
    );
    let platform = create_rw_signal(
        initial
            .as_ref()
            .map(|s| s.platform)
            .unwrap_or(Platform::Elementor),
    );
    let sheet_id = create_rw_signal(
        initial
            .as_ref()
            .and_then(|s| s.config.sheet_id.clone())
            .unwrap_or_default(),
    );
    let sheet_name = create_rw_signal(
        initial
            .as_ref()
            .and_then(|s| s.config.sheet_name.clone())
            .unwrap_or_default(),
    );
    let pipeline_id = create_rw_signal(
        initial
            .as_ref()
            .and_then(|s| s.config.bitrix_pipeline_id.clone())
            .unwrap_or_default(),
    );
    let local_error = create_rw_signal(Option::<String>::None);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = name.get();
        if name.trim().is_empty() {
            local_error.set(Some("Name is required.".to_string()));
            return;
        }
        local_error.set(None);
        on_submit.call(SourcePayload {
            name,
            platform: platform.get(),
            config: SourceConfig {
                sheet_id: none_if_empty(sheet_id.get()),
                sheet_name: none_if_empty(sheet_name.get()),
                bitrix_pipeline_id: none_if_empty(pipeline_id.get()),
            },
        });
    };

    view! {
        <form class="source-form" on:submit=submit>
            {move || {
                local_error
                    .get()
                    .map(|message| view! { <p class="form-error">{message}</p> })
            }}
            <div class="form-field">
                <label for="source-name">"Name"</label>
                <input
                    id="source-name"
                    type="text"
                    placeholder="Website - Dubai Hills"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </div>
            <div class="form-field">
                <label for="source-platform">"Platform"</label>
                <select
                    id="source-platform"
                    prop:value=move || platform.get().as_str().to_string()
                    on:change=move |ev| {
                        if let Some(p) = Platform::from_param(&event_target_value(&ev)) {
                            platform.set(p);
                        }
                    }
                >
                    {Platform::ALL
                        .iter()
                        .map(|p| view! { <option value=p.as_str()>{p.label()}</option> })
                        .collect_view()}
                </select>
            </div>
            <div class="form-field">
                <label for="source-sheet-id">"Google Sheet ID"</label>
                <input
                    id="source-sheet-id"
                    type="text"
                    prop:value=move || sheet_id.get()
                    on:input=move |ev| sheet_id.set(event_target_value(&ev))
                />
            </div>
            <div class="form-field">
                <label for="source-sheet-name">"Sheet name"</label>
                <input
                    id="source-sheet-name"
                    type="text"
                    prop:value=move || sheet_name.get()
                    on:input=move |ev| sheet_name.set(event_target_value(&ev))
                />
            </div>
            <div class="form-field">
                <label for="source-pipeline">"Bitrix pipeline ID"</label>
                <input
                    id="source-pipeline"
                    type="text"
                    prop:value=move || pipeline_id.get()
                    on:input=move |ev| pipeline_id.set(event_target_value(&ev))
                />
            </div>
            <button class="btn btn-primary" type="submit" disabled=move || pending.get()>
                {move || if pending.get() { "Saving...".to_string() } else { submit_label.clone() }}
            </button>
        </form>
    }
}

#[component]
pub fn SourceList(
    #[prop(into)] sources: Signal<Vec<Source>>,
    #[prop(into)] api_base_url: String,
    #[prop(into)] on_edit: Callback<Source>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="source-list">
            {move || {
                let items = sources.get();
                if items.is_empty() {
                    view! { <p class="list-empty">"No sources configured yet."</p> }.into_view()
                } else {
                    items
                        .into_iter()
                        .map(|source| {
                            view! {
                                <SourceItem
                                    source=source
                                    api_base_url=api_base_url.clone()
                                    on_edit=on_edit
                                    on_delete=on_delete
                                />
                            }
                        })
                        .collect_view()
                }
            }}
        </div>
    }
}

#[component]
fn SourceItem(
    source: Source,
    #[prop(into)] api_base_url: String,
    #[prop(into)] on_edit: Callback<Source>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let webhook = source.webhook_url(&api_base_url);
    let delete_id = source.id.clone();
    let name_for_confirm = source.name.clone();
    let edit_source = source.clone();

    view! {
        <div class="source-item">
            <div class="source-item-head">
                <h3>{source.name.clone()}</h3>
                <span class="source-platform">{source.platform.label()}</span>
            </div>
            <dl class="source-item-meta">
                <dt>"Webhook URL"</dt>
                <dd>
                    <code class="webhook-url">{webhook}</code>
                </dd>
                <dt>"Leads"</dt>
                <dd>{source.lead_count}</dd>
                <dt>"Created"</dt>
                <dd>{format_date(Some(&source.created_at))}</dd>
            </dl>
            <div class="source-item-actions">
                <button class="btn btn-secondary" on:click=move |_| on_edit.call(edit_source.clone())>
                    "Edit"
                </button>
                <button
                    class="btn btn-danger"
                    on:click=move |_| {
                        let prompt = format!("Delete source \"{}\"?", name_for_confirm);
                        if storage::confirm(&prompt) {
                            on_delete.call(delete_id.clone());
                        }
                    }
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn SourceEditModal(
    source: Source,
    #[prop(into)] on_submit: Callback<SourcePayload>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] pending: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.call(())>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <div class="modal-head">
                    <h2>"Edit source"</h2>
                    <button class="modal-close" on:click=move |_| on_close.call(())>
                        "\u{00d7}"
                    </button>
                </div>
                <SourceForm
                    initial=source
                    submit_label="Save changes"
                    on_submit=on_submit
                    pending=pending
                />
            </div>
        </div>
    }
}
