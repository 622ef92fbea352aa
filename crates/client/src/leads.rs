//! Leads: the listing query object, the lead/job wire types, and the
//! `/leads` accessor group.

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::Error;
use crate::fetch::Transport;
use crate::types::Page;

/// Lifecycle status of a lead. Lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    Queued,
    Processing,
    Success,
    Failed,
    Duplicate,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 5] = [
        LeadStatus::Queued,
        LeadStatus::Processing,
        LeadStatus::Success,
        LeadStatus::Failed,
        LeadStatus::Duplicate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::Queued => "queued",
            LeadStatus::Processing => "processing",
            LeadStatus::Success => "success",
            LeadStatus::Failed => "failed",
            LeadStatus::Duplicate => "duplicate",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeadStatus::Queued => "Queued",
            LeadStatus::Processing => "Processing",
            LeadStatus::Success => "Success",
            LeadStatus::Failed => "Failed",
            LeadStatus::Duplicate => "Duplicate",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_str() == value)
    }
}

/// Status of a downstream job. Uppercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum JobStatus {
    Queued,
    Processing,
    Completed,
    Failed,
}

/// Sort direction for lead listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Preset or custom date-range selector for lead listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRange {
    All,
    Last24h,
    Last7d,
    Last14d,
    Last28d,
    Custom,
}

impl DateRange {
    pub const ALL: [DateRange; 6] = [
        DateRange::All,
        DateRange::Last24h,
        DateRange::Last7d,
        DateRange::Last14d,
        DateRange::Last28d,
        DateRange::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DateRange::All => "all",
            DateRange::Last24h => "24h",
            DateRange::Last7d => "7d",
            DateRange::Last14d => "14d",
            DateRange::Last28d => "28d",
            DateRange::Custom => "custom",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.as_str() == value)
    }
}

/// Query state for the leads listing. Client-local, never persisted.
///
/// Callers always construct a fresh value when changing the query; the list
/// controller re-fetches on every replacement.
#[derive(Debug, Clone, PartialEq)]
pub struct LeadQuery {
    pub page: u32,
    pub limit: u32,
    pub sort: String,
    pub order: SortOrder,
    pub status: Option<LeadStatus>,
    pub source_id: Option<String>,
    pub date_range: DateRange,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

impl Default for LeadQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: crate::config::DEFAULT_PAGE_LIMIT,
            sort: "createdAt".to_string(),
            order: SortOrder::Desc,
            status: None,
            source_id: None,
            date_range: DateRange::All,
            date_from: None,
            date_to: None,
        }
    }
}

impl LeadQuery {
    /// Serialize to query-string pairs.
    ///
    /// `dateFrom`/`dateTo` are emitted only when the range is `custom`; any
    /// other selection drops them even if they are set.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("limit".to_string(), self.limit.to_string()),
            ("sort".to_string(), self.sort.clone()),
            ("order".to_string(), self.order.as_str().to_string()),
        ];
        if let Some(status) = self.status {
            pairs.push(("status".to_string(), status.as_str().to_string()));
        }
        if let Some(source_id) = &self.source_id {
            pairs.push(("sourceId".to_string(), source_id.clone()));
        }
        if self.date_range != DateRange::All {
            pairs.push(("dateRange".to_string(), self.date_range.as_str().to_string()));
        }
        if self.date_range == DateRange::Custom {
            if let Some(from) = &self.date_from {
                pairs.push(("dateFrom".to_string(), from.clone()));
            }
            if let Some(to) = &self.date_to {
                pairs.push(("dateTo".to_string(), to.clone()));
            }
        }
        pairs
    }

    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    /// New page size; resets to the first page.
    pub fn with_limit(&self, limit: u32) -> Self {
        Self {
            limit,
            page: 1,
            ..self.clone()
        }
    }
}

/// UTM attribution captured with the original submission.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Utm {
    pub source: Option<String>,
    pub medium: Option<String>,
    pub campaign: Option<String>,
}

/// A lead's source reference: a bare id in listings, a populated object on
/// the detail endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceRef {
    Id(String),
    Populated(SourceSummary),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

impl SourceRef {
    pub fn id(&self) -> &str {
        match self {
            SourceRef::Id(id) => id,
            SourceRef::Populated(summary) => &summary.id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            SourceRef::Id(_) => None,
            SourceRef::Populated(summary) => Some(summary.name.as_str()),
        }
    }
}

/// A lead, passed through from the backend verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    #[serde(rename = "_id")]
    pub id: String,
    /// Human-readable sequence number, rendered as `LEAD#<n>`
    pub lead_id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_type: Option<String>,
    #[serde(default)]
    pub property_type: Option<String>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub bedrooms: Option<String>,
    #[serde(default)]
    pub source_id: Option<SourceRef>,
    /// Platform name, e.g. "elementor"
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub site_name: Option<String>,
    #[serde(default)]
    pub form_name: Option<String>,
    #[serde(default)]
    pub campaign_name: Option<String>,
    #[serde(default)]
    pub utm: Option<Utm>,
    pub status: LeadStatus,
    pub created_at: DateTime<Utc>,
    /// Received time in the platform's fixed timezone
    #[serde(default)]
    pub timestamp_uae: Option<DateTime<Utc>>,
    /// Opaque capture of the original submission
    #[serde(default)]
    pub payload: serde_json::Value,
}

/// A downstream job (CRM push, spreadsheet append) attached to one lead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(rename = "_id")]
    pub id: String,
    /// e.g. "push_to_bitrix", "append_to_sheets"; passed through verbatim
    #[serde(rename = "type")]
    pub job_type: String,
    pub status: JobStatus,
    #[serde(default)]
    pub attempts: u32,
    #[serde(default)]
    pub run_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_error: Option<String>,
}

/// An error-log record attached to a lead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub job_type: Option<String>,
    pub message: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Everything the detail page needs, fetched in one call.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LeadBundle {
    pub lead: Lead,
    #[serde(default)]
    pub jobs: Vec<Job>,
    #[serde(default)]
    pub errors: Vec<ErrorRecord>,
}

/// Payload for manually adding a lead from the dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLead {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub source_id: String,
}

/// Accessor group for `/leads`.
pub struct LeadsApi<'a> {
    pub(crate) transport: &'a Transport,
}

impl LeadsApi<'_> {
    /// GET `/leads` with the given query
    pub async fn list(&self, query: &LeadQuery) -> Result<Page<Lead>, Error> {
        let envelope = self
            .transport
            .request(Method::GET, "/leads")
            .query_pairs(query.to_pairs())
            .execute_enveloped::<Vec<Lead>>()
            .await?;
        Ok(Page {
            items: envelope.data,
            pagination: envelope.pagination.unwrap_or_default(),
        })
    }

    /// GET `/leads/:id` — the lead plus its jobs and error records
    pub async fn get(&self, id: &str) -> Result<LeadBundle, Error> {
        let envelope = self
            .transport
            .request(Method::GET, &format!("/leads/{}", id))
            .execute_enveloped::<LeadBundle>()
            .await?;
        Ok(envelope.data)
    }

    /// POST `/leads` — manually add a lead
    pub async fn create(&self, lead: &NewLead) -> Result<Lead, Error> {
        let envelope = self
            .transport
            .request(Method::POST, "/leads")
            .json(lead)?
            .execute_enveloped::<Lead>()
            .await?;
        Ok(envelope.data)
    }

    /// POST `/leads/:id/retry` — retry all failed jobs for the lead
    pub async fn retry(&self, id: &str) -> Result<(), Error> {
        self.transport
            .request(Method::POST, &format!("/leads/{}/retry", id))
            .json(&json!({}))?
            .execute_empty()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(pairs: &[(String, String)], key: &str) -> Option<String> {
        pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
    }

    #[test]
    fn default_query_serializes_documented_defaults() {
        let pairs = LeadQuery::default().to_pairs();
        assert_eq!(pair(&pairs, "page").as_deref(), Some("1"));
        assert_eq!(pair(&pairs, "limit").as_deref(), Some("20"));
        assert_eq!(pair(&pairs, "sort").as_deref(), Some("createdAt"));
        assert_eq!(pair(&pairs, "order").as_deref(), Some("desc"));
        assert_eq!(pair(&pairs, "status"), None);
        assert_eq!(pair(&pairs, "sourceId"), None);
        assert_eq!(pair(&pairs, "dateRange"), None);
    }

    #[test]
    fn non_custom_range_never_emits_dates() {
        let query = LeadQuery {
            date_range: DateRange::Last7d,
            date_from: Some("2025-11-01".into()),
            date_to: Some("2025-11-08".into()),
            ..LeadQuery::default()
        };
        let pairs = query.to_pairs();
        assert_eq!(pair(&pairs, "dateRange").as_deref(), Some("7d"));
        assert_eq!(pair(&pairs, "dateFrom"), None);
        assert_eq!(pair(&pairs, "dateTo"), None);
    }

    #[test]
    fn custom_range_emits_both_dates() {
        let query = LeadQuery {
            date_range: DateRange::Custom,
            date_from: Some("2025-11-01".into()),
            date_to: Some("2025-11-08".into()),
            ..LeadQuery::default()
        };
        let pairs = query.to_pairs();
        assert_eq!(pair(&pairs, "dateRange").as_deref(), Some("custom"));
        assert_eq!(pair(&pairs, "dateFrom").as_deref(), Some("2025-11-01"));
        assert_eq!(pair(&pairs, "dateTo").as_deref(), Some("2025-11-08"));
    }

    #[test]
    fn status_and_source_filters_are_emitted() {
        let query = LeadQuery {
            status: Some(LeadStatus::Failed),
            source_id: Some("64abc".into()),
            ..LeadQuery::default()
        };
        let pairs = query.to_pairs();
        assert_eq!(pair(&pairs, "status").as_deref(), Some("failed"));
        assert_eq!(pair(&pairs, "sourceId").as_deref(), Some("64abc"));
    }

    #[test]
    fn with_limit_resets_page() {
        let query = LeadQuery::default().with_page(4).with_limit(50);
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 50);
    }

    #[test]
    fn lead_decodes_with_populated_source() {
        let lead: Lead = serde_json::from_value(serde_json::json!({
            "_id": "64f",
            "leadId": 1042,
            "name": "Jane",
            "sourceId": { "_id": "src1", "name": "Website - Dubai Hills" },
            "source": "elementor",
            "status": "failed",
            "createdAt": "2025-11-08T10:00:00Z",
            "payload": { "utm_source": "google" }
        }))
        .unwrap();
        assert_eq!(lead.lead_id, 1042);
        assert_eq!(lead.status, LeadStatus::Failed);
        assert_eq!(
            lead.source_id.as_ref().and_then(|s| s.name()),
            Some("Website - Dubai Hills")
        );
    }

    #[test]
    fn job_status_is_uppercase_on_the_wire() {
        let job: Job = serde_json::from_value(serde_json::json!({
            "_id": "j1",
            "type": "push_to_bitrix",
            "status": "FAILED",
            "attempts": 3,
            "lastError": "pipeline not found"
        }))
        .unwrap();
        assert_eq!(job.status, JobStatus::Failed);
        assert_eq!(job.last_error.as_deref(), Some("pipeline not found"));
    }
}
