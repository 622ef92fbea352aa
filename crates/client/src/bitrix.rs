//! Bitrix CRM integration: status, connection test, recent errors.
//! Read-only plus a test trigger; all real work happens on the backend.

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::Deserialize;

use crate::error::Error;
use crate::fetch::Transport;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BitrixStatus {
    pub connected: bool,
    pub webhook_configured: bool,
    pub last_checked: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BitrixTestResult {
    pub success: bool,
    pub message: Option<String>,
}

/// One Bitrix-related entry from the backend's error log.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BitrixErrorEntry {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub lead_id: Option<String>,
    pub message: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Accessor group for `/bitrix`.
pub struct BitrixApi<'a> {
    pub(crate) transport: &'a Transport,
}

impl BitrixApi<'_> {
    /// GET `/bitrix/status`
    pub async fn status(&self) -> Result<BitrixStatus, Error> {
        let envelope = self
            .transport
            .request(Method::GET, "/bitrix/status")
            .execute_enveloped::<BitrixStatus>()
            .await?;
        Ok(envelope.data)
    }

    /// POST `/bitrix/test` — trigger a test connection to the Bitrix webhook
    pub async fn test(&self) -> Result<BitrixTestResult, Error> {
        let envelope = self
            .transport
            .request(Method::POST, "/bitrix/test")
            .execute_enveloped::<BitrixTestResult>()
            .await?;
        Ok(envelope.data)
    }

    /// GET `/bitrix/errors` — recent Bitrix-related error-log entries
    pub async fn errors(&self) -> Result<Vec<BitrixErrorEntry>, Error> {
        let envelope = self
            .transport
            .request(Method::GET, "/bitrix/errors")
            .execute_enveloped::<Vec<BitrixErrorEntry>>()
            .await?;
        Ok(envelope.data)
    }
}
