//! Sources: ingestion-channel wire types and the `/sources` accessor group.

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::fetch::Transport;

/// Ingestion platform a source receives submissions from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Elementor,
    Meta,
    Tiktok,
    Snapchat,
    Manual,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::Elementor,
        Platform::Meta,
        Platform::Tiktok,
        Platform::Snapchat,
        Platform::Manual,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Elementor => "elementor",
            Platform::Meta => "meta",
            Platform::Tiktok => "tiktok",
            Platform::Snapchat => "snapchat",
            Platform::Manual => "manual",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Platform::Elementor => "Elementor",
            Platform::Meta => "Meta (Facebook)",
            Platform::Tiktok => "TikTok",
            Platform::Snapchat => "Snapchat",
            Platform::Manual => "Manual",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.as_str() == value)
    }
}

/// Per-source integration configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SourceConfig {
    pub sheet_id: Option<String>,
    pub sheet_name: Option<String>,
    pub bitrix_pipeline_id: Option<String>,
}

/// One configured ingestion channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub platform: Platform,
    /// Opaque token used to build the webhook URL
    #[serde(default)]
    pub identifier_token: String,
    #[serde(default)]
    pub config: SourceConfig,
    #[serde(default)]
    pub lead_count: u64,
    pub created_at: DateTime<Utc>,
}

impl Source {
    /// The webhook URL an external form posts submissions to.
    pub fn webhook_url(&self, api_base_url: &str) -> String {
        format!(
            "{}/webhooks/{}?token={}",
            api_base_url.trim_end_matches('/'),
            self.platform.as_str(),
            self.identifier_token
        )
    }
}

/// Create/update payload for a source.
#[derive(Debug, Clone, Serialize)]
pub struct SourcePayload {
    pub name: String,
    pub platform: Platform,
    pub config: SourceConfig,
}

/// Accessor group for `/sources`.
pub struct SourcesApi<'a> {
    pub(crate) transport: &'a Transport,
}

impl SourcesApi<'_> {
    /// GET `/sources`
    pub async fn list(&self) -> Result<Vec<Source>, Error> {
        let envelope = self
            .transport
            .request(Method::GET, "/sources")
            .execute_enveloped::<Vec<Source>>()
            .await?;
        Ok(envelope.data)
    }

    /// POST `/sources`
    pub async fn create(&self, payload: &SourcePayload) -> Result<Source, Error> {
        let envelope = self
            .transport
            .request(Method::POST, "/sources")
            .json(payload)?
            .execute_enveloped::<Source>()
            .await?;
        Ok(envelope.data)
    }

    /// PUT `/sources/:id`
    pub async fn update(&self, id: &str, payload: &SourcePayload) -> Result<Source, Error> {
        let envelope = self
            .transport
            .request(Method::PUT, &format!("/sources/{}", id))
            .json(payload)?
            .execute_enveloped::<Source>()
            .await?;
        Ok(envelope.data)
    }

    /// DELETE `/sources/:id`
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        self.transport
            .request(Method::DELETE, &format!("/sources/{}", id))
            .execute_empty()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn webhook_url_is_built_from_platform_and_token() {
        let source: Source = serde_json::from_value(serde_json::json!({
            "_id": "src1",
            "name": "Website - Dubai Hills",
            "platform": "elementor",
            "identifierToken": "tok_8f3a",
            "leadCount": 12,
            "createdAt": "2025-10-01T08:00:00Z"
        }))
        .unwrap();
        assert_eq!(
            source.webhook_url("http://localhost:5001/api/"),
            "http://localhost:5001/api/webhooks/elementor?token=tok_8f3a"
        );
    }

    #[test]
    fn source_config_defaults_when_absent() {
        let source: Source = serde_json::from_value(serde_json::json!({
            "_id": "src2",
            "name": "TikTok Campaign",
            "platform": "tiktok",
            "createdAt": "2025-10-01T08:00:00Z"
        }))
        .unwrap();
        assert_eq!(source.config, SourceConfig::default());
        assert_eq!(source.lead_count, 0);
    }
}
