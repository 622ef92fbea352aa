//! Lead detail page: contact and provenance fields, job history, error
//! log, raw payload, and the retry action.

use leptos::*;
use leptos_router::use_params_map;

use leadboard_client::leads::{ErrorRecord, Job, JobStatus, Lead, LeadStatus};
use leadboard_client::ApiClient;

use crate::components::common::{Alert, AlertKind, Loader};
use crate::components::lead_table::StatusBadge;
use crate::format::{format_date, format_time};
use crate::state::use_lead_detail;
use crate::storage;

#[component]
fn DetailItem(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="detail-item">
            <dt>{label}</dt>
            <dd>{value}</dd>
        </div>
    }
}

fn or_dash(value: Option<&String>) -> String {
    value.cloned().unwrap_or_else(|| "-".to_string())
}

/// The retry control always renders; it is only clickable for a failed
/// lead with no retry in flight.
fn retry_disabled(pending: bool, status: LeadStatus) -> bool {
    pending || status != LeadStatus::Failed
}

fn job_status_class(status: JobStatus) -> &'static str {
    match status {
        JobStatus::Queued => "badge badge-queued",
        JobStatus::Processing => "badge badge-processing",
        JobStatus::Completed => "badge badge-success",
        JobStatus::Failed => "badge badge-failed",
    }
}

#[component]
fn JobHistory(#[prop(into)] jobs: Signal<Vec<Job>>) -> impl IntoView {
    view! {
        <div class="card">
            <h2>"Job history"</h2>
            {move || {
                let items = jobs.get();
                if items.is_empty() {
                    view! { <p class="list-empty">"No jobs for this lead."</p> }.into_view()
                } else {
                    view! {
                        <table>
                            <thead>
                                <tr>
                                    <th>"Type"</th>
                                    <th>"Status"</th>
                                    <th>"Attempts"</th>
                                    <th>"Next run"</th>
                                    <th>"Last error"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {items
                                    .into_iter()
                                    .map(|job| {
                                        view! {
                                            <tr>
                                                <td>{job.job_type}</td>
                                                <td>
                                                    <span class=job_status_class(job.status)>
                                                        {format!("{:?}", job.status)}
                                                    </span>
                                                </td>
                                                <td>{job.attempts}</td>
                                                <td>{format_date(job.run_at.as_ref())}</td>
                                                <td class="job-error">{or_dash(job.last_error.as_ref())}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_view()
                }
            }}
        </div>
    }
}

#[component]
fn ErrorLog(#[prop(into)] errors: Signal<Vec<ErrorRecord>>) -> impl IntoView {
    view! {
        <Show when=move || !errors.get().is_empty()>
            <div class="card card-errors">
                <h2>"Error log"</h2>
                <ul class="error-log">
                    {move || {
                        errors
                            .get()
                            .into_iter()
                            .map(|entry| {
                                let when = entry
                                    .created_at
                                    .map(|ts| format!("{} {}", format_date(Some(&ts)), format_time(&ts)))
                                    .unwrap_or_else(|| "N/A".to_string());
                                view! {
                                    <li>
                                        <span class="error-when">{when}</span>
                                        <span class="error-job">{or_dash(entry.job_type.as_ref())}</span>
                                        <span class="error-message">{entry.message}</span>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </div>
        </Show>
    }
}

#[component]
fn RawPayload(#[prop(into)] lead: Signal<Option<Lead>>) -> impl IntoView {
    view! {
        <div class="card">
            <h2>"Raw payload"</h2>
            <pre class="raw-payload">
                {move || {
                    lead.get()
                        .map(|l| {
                            serde_json::to_string_pretty(&l.payload)
                                .unwrap_or_else(|_| "{}".to_string())
                        })
                        .unwrap_or_default()
                }}
            </pre>
        </div>
    }
}

#[component]
pub fn LeadDetailPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let params = use_params_map();
    let id = create_memo(move |_| params.with(|p| p.get("id").cloned()));
    let state = use_lead_detail(api.clone(), id);

    let retry_pending = create_rw_signal(false);
    let retry = Callback::new(move |_: ()| {
        let Some(lead_id) = id.get_untracked() else {
            return;
        };
        if !storage::confirm("Retry all failed jobs for this lead?") {
            return;
        }
        let api = api.clone();
        retry_pending.set(true);
        spawn_local(async move {
            match api.leads().retry(&lead_id).await {
                Ok(()) => state.refresh.call(()),
                Err(err) => storage::alert(&err.message_or("Failed to retry lead.")),
            }
            retry_pending.set(false);
        });
    });

    view! {
        <section class="page page-lead-detail">
            {move || {
                state
                    .error
                    .get()
                    .map(|message| view! { <Alert kind=AlertKind::Error message=message/> })
            }}
            <Show
                when=move || !state.is_loading.get()
                fallback=|| view! { <Loader text="Loading lead..."/> }
            >
                {move || {
                    state
                        .lead
                        .get()
                        .map(|lead| {
                            let source_name = lead
                                .source_id
                                .as_ref()
                                .and_then(|s| s.name())
                                .map(str::to_string)
                                .or_else(|| lead.source.clone())
                                .unwrap_or_else(|| "-".to_string());
                            let status = lead.status;
                            view! {
                                <div class="card">
                                    <div class="detail-head">
                                        <h2>{format!("LEAD#{}", lead.lead_id)}</h2>
                                        <StatusBadge status=status/>
                                        <button
                                            class="btn btn-primary"
                                            disabled=move || retry_disabled(retry_pending.get(), status)
                                            on:click=move |_| retry.call(())
                                        >
                                            "Retry failed jobs"
                                        </button>
                                    </div>
                                    <dl class="detail-grid">
                                        <DetailItem label="Name" value=or_dash(lead.name.as_ref())/>
                                        <DetailItem label="Phone" value=or_dash(lead.phone.as_ref())/>
                                        <DetailItem label="Email" value=or_dash(lead.email.as_ref())/>
                                        <DetailItem
                                            label="User type"
                                            value=or_dash(lead.user_type.as_ref())
                                        />
                                        <DetailItem
                                            label="Property type"
                                            value=or_dash(lead.property_type.as_ref())
                                        />
                                        <DetailItem label="Budget" value=or_dash(lead.budget.as_ref())/>
                                        <DetailItem
                                            label="Bedrooms"
                                            value=or_dash(lead.bedrooms.as_ref())
                                        />
                                        <DetailItem label="Source" value=source_name/>
                                        <DetailItem
                                            label="Site"
                                            value=or_dash(lead.site_name.as_ref())
                                        />
                                        <DetailItem
                                            label="Form"
                                            value=or_dash(lead.form_name.as_ref())
                                        />
                                        <DetailItem
                                            label="Campaign"
                                            value=or_dash(lead.campaign_name.as_ref())
                                        />
                                        <DetailItem
                                            label="UTM source"
                                            value=lead
                                                .utm
                                                .as_ref()
                                                .and_then(|u| u.source.clone())
                                                .unwrap_or_else(|| "-".to_string())
                                        />
                                        <DetailItem
                                            label="Received"
                                            value=format!(
                                                "{} {}",
                                                format_date(Some(&lead.created_at)),
                                                format_time(&lead.created_at)
                                            )
                                        />
                                        <DetailItem
                                            label="Received (UAE)"
                                            value=lead
                                                .timestamp_uae
                                                .as_ref()
                                                .map(|ts| format!(
                                                    "{} {}",
                                                    format_date(Some(ts)),
                                                    format_time(ts)
                                                ))
                                                .unwrap_or_else(|| "N/A".to_string())
                                        />
                                    </dl>
                                </div>
                            }
                        })
                }}
                <JobHistory jobs=state.jobs/>
                <ErrorLog errors=state.errors/>
                <RawPayload lead=state.lead/>
            </Show>
        </section>
    }
}
