//! Bitrix integration page: connection status, a manual test trigger, and
//! the recent Bitrix error log.

use leptos::*;

use leadboard_client::bitrix::{BitrixErrorEntry, BitrixStatus, BitrixTestResult};
use leadboard_client::ApiClient;

use crate::components::common::{Alert, AlertKind, Loader};
use crate::format::{format_date, format_time};

#[component]
pub fn BitrixPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let status = create_rw_signal(BitrixStatus::default());
    let errors = create_rw_signal(Vec::<BitrixErrorEntry>::new());
    let is_loading = create_rw_signal(true);
    let error = create_rw_signal(Option::<String>::None);
    let test_result = create_rw_signal(Option::<BitrixTestResult>::None);
    let testing = create_rw_signal(false);

    {
        let api = api.clone();
        spawn_local(async move {
            let bitrix = api.bitrix();
            let (status_result, errors_result) = futures::join!(bitrix.status(), bitrix.errors());
            match (status_result, errors_result) {
                (Ok(s), Ok(entries)) => {
                    status.set(s);
                    errors.set(entries);
                }
                (Err(err), _) | (_, Err(err)) => {
                    error.set(Some(err.message_or("Failed to fetch Bitrix status.")));
                }
            }
            is_loading.set(false);
        });
    }

    let run_test = Callback::new(move |_: ()| {
        let api = api.clone();
        testing.set(true);
        test_result.set(None);
        spawn_local(async move {
            match api.bitrix().test().await {
                Ok(result) => test_result.set(Some(result)),
                Err(err) => {
                    test_result.set(Some(BitrixTestResult {
                        success: false,
                        message: Some(err.message_or("Test request failed.")),
                    }));
                }
            }
            testing.set(false);
        });
    });

    view! {
        <section class="page page-bitrix">
            {move || {
                error
                    .get()
                    .map(|message| view! { <Alert kind=AlertKind::Error message=message/> })
            }}
            <Show
                when=move || !is_loading.get()
                fallback=|| view! { <Loader text="Loading Bitrix status..."/> }
            >
                <div class="card">
                    <h2>"Connection"</h2>
                    <dl class="detail-grid">
                        <div class="detail-item">
                            <dt>"Status"</dt>
                            <dd>
                                {move || {
                                    if status.get().connected {
                                        view! { <span class="badge badge-success">"Connected"</span> }
                                    } else {
                                        view! { <span class="badge badge-failed">"Disconnected"</span> }
                                    }
                                }}
                            </dd>
                        </div>
                        <div class="detail-item">
                            <dt>"Webhook"</dt>
                            <dd>
                                {move || {
                                    if status.get().webhook_configured {
                                        "Configured"
                                    } else {
                                        "Not configured"
                                    }
                                }}
                            </dd>
                        </div>
                        <div class="detail-item">
                            <dt>"Last checked"</dt>
                            <dd>
                                {move || {
                                    format_date(status.get().last_checked.as_ref())
                                }}
                            </dd>
                        </div>
                    </dl>
                    <button
                        class="btn btn-primary"
                        disabled=move || testing.get()
                        on:click=move |_| run_test.call(())
                    >
                        {move || if testing.get() { "Testing..." } else { "Test connection" }}
                    </button>
                    {move || {
                        test_result
                            .get()
                            .map(|result| {
                                let kind = if result.success {
                                    AlertKind::Success
                                } else {
                                    AlertKind::Error
                                };
                                let message = result.message.unwrap_or_else(|| {
                                    if result.success {
                                        "Connection test succeeded.".to_string()
                                    } else {
                                        "Connection test failed.".to_string()
                                    }
                                });
                                view! { <Alert kind=kind message=message/> }
                            })
                    }}
                </div>
                <div class="card">
                    <h2>"Recent errors"</h2>
                    {move || {
                        let entries = errors.get();
                        if entries.is_empty() {
                            view! { <p class="list-empty">"No Bitrix errors recorded."</p> }
                                .into_view()
                        } else {
                            view! {
                                <ul class="error-log">
                                    {entries
                                        .into_iter()
                                        .map(|entry| {
                                            let when = entry
                                                .created_at
                                                .map(|ts| format!(
                                                    "{} {}",
                                                    format_date(Some(&ts)),
                                                    format_time(&ts)
                                                ))
                                                .unwrap_or_else(|| "N/A".to_string());
                                            let lead = entry
                                                .lead_id
                                                .map(|id| format!("lead {}", id))
                                                .unwrap_or_default();
                                            view! {
                                                <li>
                                                    <span class="error-when">{when}</span>
                                                    <span class="error-job">{lead}</span>
                                                    <span class="error-message">{entry.message}</span>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            }
                            .into_view()
                        }
                    }}
                </div>
            </Show>
        </section>
    }
}
