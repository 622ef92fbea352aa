//! Dashboard page: KPI cards, the leads-over-time chart, and the
//! leads-by-source breakdown.

use leptos::*;

use leadboard_client::ApiClient;

use crate::components::chart::LeadChart;
use crate::components::common::{Alert, AlertKind, Loader};
use crate::state::use_dashboard;

#[component]
fn KpiCard(#[prop(into)] label: String, #[prop(into)] value: Signal<u64>) -> impl IntoView {
    view! {
        <div class="kpi-card">
            <span class="kpi-value">{move || value.get()}</span>
            <span class="kpi-label">{label}</span>
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let state = use_dashboard(api);

    view! {
        <section class="page page-dashboard">
            {move || {
                state
                    .error
                    .get()
                    .map(|message| view! { <Alert kind=AlertKind::Error message=message/> })
            }}
            <Show
                when=move || !state.is_loading.get()
                fallback=|| view! { <Loader text="Loading dashboard..."/> }
            >
                <div class="kpi-grid">
                    <KpiCard
                        label="Leads today"
                        value=Signal::derive(move || state.kpis.get().leads_today)
                    />
                    <KpiCard
                        label="Leads in the last 24h"
                        value=Signal::derive(move || state.kpis.get().leads_last24h)
                    />
                    <KpiCard
                        label="Failed jobs"
                        value=Signal::derive(move || state.kpis.get().failed_jobs)
                    />
                </div>
                <div class="card">
                    <h2>"Leads over time (28 days)"</h2>
                    <LeadChart series=state.series/>
                </div>
                <div class="card">
                    <h2>"Leads by source"</h2>
                    <table class="source-breakdown">
                        <thead>
                            <tr>
                                <th>"Source"</th>
                                <th>"Leads"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let rows = state.kpis.get().leads_by_source;
                                if rows.is_empty() {
                                    view! {
                                        <tr>
                                            <td class="table-empty" colspan="2">
                                                "No leads recorded yet."
                                            </td>
                                        </tr>
                                    }
                                    .into_view()
                                } else {
                                    rows.into_iter()
                                        .map(|row| {
                                            let name = row
                                                .name
                                                .unwrap_or_else(|| "(deleted source)".to_string());
                                            view! {
                                                <tr>
                                                    <td>{name}</td>
                                                    <td>{row.count}</td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()
                                }
                            }}
                        </tbody>
                    </table>
                </div>
            </Show>
        </section>
    }
}
