//! Reports: dashboard KPIs and the leads-over-time series.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::fetch::Transport;

/// Aggregate dashboard KPIs. Read-only, derived by the backend.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardKpis {
    pub leads_today: u64,
    pub leads_last24h: u64,
    pub failed_jobs: u64,
    pub leads_by_source: Vec<SourceCount>,
}

/// Per-source lead count. The aggregation keys by source name, which may be
/// null for leads whose source was deleted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SourceCount {
    #[serde(rename = "_id")]
    pub name: Option<String>,
    pub count: u64,
}

/// One time bucket of the leads-over-time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub date: String,
    pub count: u64,
}

/// Query for the time series: a period like `24h`/`7d`/`28d` and a bucket
/// granularity of `hour` or `day`.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesQuery {
    pub period: String,
    pub group_by: String,
}

impl Default for SeriesQuery {
    fn default() -> Self {
        // The dashboard chart shows the last 28 days in day buckets.
        Self {
            period: "28d".to_string(),
            group_by: "day".to_string(),
        }
    }
}

impl SeriesQuery {
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        vec![
            ("period".to_string(), self.period.clone()),
            ("groupBy".to_string(), self.group_by.clone()),
        ]
    }
}

/// Accessor group for `/reports`.
pub struct ReportsApi<'a> {
    pub(crate) transport: &'a Transport,
}

impl ReportsApi<'_> {
    /// GET `/reports/kpis`
    pub async fn kpis(&self) -> Result<DashboardKpis, Error> {
        let envelope = self
            .transport
            .request(Method::GET, "/reports/kpis")
            .execute_enveloped::<DashboardKpis>()
            .await?;
        Ok(envelope.data)
    }

    /// GET `/reports/leads-over-time`
    pub async fn leads_over_time(&self, query: &SeriesQuery) -> Result<Vec<SeriesPoint>, Error> {
        let envelope = self
            .transport
            .request(Method::GET, "/reports/leads-over-time")
            .query_pairs(query.to_pairs())
            .execute_enveloped::<Vec<SeriesPoint>>()
            .await?;
        Ok(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kpis_default_to_zeroes_and_empty_sources() {
        let kpis: DashboardKpis = serde_json::from_value(serde_json::json!({
            "leadsToday": 4,
            "leadsLast24h": 10,
            "failedJobs": 2,
            "leadsBySource": []
        }))
        .unwrap();
        assert_eq!(kpis.leads_today, 4);
        assert_eq!(kpis.leads_last24h, 10);
        assert_eq!(kpis.failed_jobs, 2);
        assert!(kpis.leads_by_source.is_empty());
    }

    #[test]
    fn series_query_defaults_to_28_days_by_day() {
        let pairs = SeriesQuery::default().to_pairs();
        assert!(pairs.contains(&("period".to_string(), "28d".to_string())));
        assert!(pairs.contains(&("groupBy".to_string(), "day".to_string())));
    }
}
