//! HTTP request plumbing shared by every resource accessor.
//!
//! All credential handling lives here: the persisted bearer token is
//! attached to every outgoing request, and a 401 response clears the token
//! store and fires the `on_unauthorized` hook before the error is handed
//! back to the caller. Nothing else in the client touches credentials.

use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use url::Url;

use crate::config::ClientOptions;
use crate::error::Error;
use crate::store::TokenStore;
use crate::types::Envelope;

/// Shared connection state behind [`ApiClient`](crate::ApiClient).
pub(crate) struct Transport {
    pub http: Client,
    /// Base URL without a trailing slash, e.g. `http://localhost:5001/api`
    pub base_url: String,
    pub store: Arc<dyn TokenStore>,
    pub on_unauthorized: Option<Arc<dyn Fn() + Send + Sync>>,
    pub options: ClientOptions,
}

impl Transport {
    pub fn request(&self, method: Method, path: &str) -> FetchBuilder<'_> {
        FetchBuilder {
            transport: self,
            method,
            path: path.to_string(),
            query: Vec::new(),
            body: None,
        }
    }
}

/// Body shape the backend uses for error responses.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Helper for building and executing one HTTP request
pub(crate) struct FetchBuilder<'a> {
    transport: &'a Transport,
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<serde_json::Value>,
}

impl FetchBuilder<'_> {
    /// Add query parameters to the request
    pub fn query_pairs(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    /// Add a JSON body to the request
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, Error> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    async fn send(&self) -> Result<reqwest::Response, Error> {
        let url = Url::parse(&format!("{}{}", self.transport.base_url, self.path))?;

        let mut req = self
            .transport
            .http
            .request(self.method.clone(), url.clone())
            .header("Content-Type", "application/json")
            .header("X-Client-Info", &self.transport.options.client_info);

        if let Some(token) = self.transport.store.load() {
            req = req.bearer_auth(token);
        }
        if !self.query.is_empty() {
            req = req.query(&self.query);
        }
        if let Some(body) = &self.body {
            req = req.json(body);
        }

        log::debug!("{} {}", self.method, url);
        let response = req.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            // The only place credential invalidation happens: drop the token,
            // let the app force navigation to the login view, then re-raise
            // so the original caller's failure path still runs.
            log::warn!("{} {} returned 401, clearing credentials", self.method, url);
            self.transport.store.clear();
            if let Some(hook) = &self.transport.on_unauthorized {
                hook();
            }
            return Err(Error::Unauthorized);
        }

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| format!("request failed with status {}", status));
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }

    /// Execute the request and parse the response body as plain JSON
    pub async fn execute<T: DeserializeOwned>(self) -> Result<T, Error> {
        let response = self.send().await?;
        Ok(response.json::<T>().await?)
    }

    /// Execute the request and parse the response body as the standard
    /// `{ data, pagination?, message? }` envelope
    pub async fn execute_enveloped<T: DeserializeOwned>(self) -> Result<Envelope<T>, Error> {
        let response = self.send().await?;
        Ok(response.json::<Envelope<T>>().await?)
    }

    /// Execute the request and discard the response body
    pub async fn execute_empty(self) -> Result<(), Error> {
        self.send().await?;
        Ok(())
    }
}
