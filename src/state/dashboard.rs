//! Controller for the dashboard page: KPI snapshot plus time series,
//! fetched concurrently and treated as one unit.

use leptos::*;

use leadboard_client::reports::{DashboardKpis, SeriesPoint, SeriesQuery};
use leadboard_client::ApiClient;

#[derive(Clone, Copy)]
pub struct DashboardState {
    pub kpis: RwSignal<DashboardKpis>,
    pub series: RwSignal<Vec<SeriesPoint>>,
    pub is_loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub refresh: Callback<()>,
}

/// Fan out both report calls and only settle once both are done; either
/// failure reports a single error, no partial rendering.
pub fn use_dashboard(api: ApiClient) -> DashboardState {
    let kpis = create_rw_signal(DashboardKpis::default());
    let series = create_rw_signal(Vec::new());
    let is_loading = create_rw_signal(true);
    let error = create_rw_signal(None);

    let refresh = Callback::new(move |_: ()| {
        is_loading.set(true);
        error.set(None);

        let api = api.clone();
        spawn_local(async move {
            let reports = api.reports();
            let series_query = SeriesQuery::default();
            let (kpi_result, series_result) = futures::join!(
                reports.kpis(),
                reports.leads_over_time(&series_query)
            );

            match (kpi_result, series_result) {
                (Ok(snapshot), Ok(points)) => {
                    kpis.set(snapshot);
                    series.set(points);
                }
                (Err(err), _) | (_, Err(err)) => {
                    error.set(Some(err.message_or("Failed to fetch dashboard data.")));
                }
            }
            is_loading.set(false);
        });
    });

    refresh.call(());

    DashboardState {
        kpis,
        series,
        is_loading,
        error,
        refresh,
    }
}
