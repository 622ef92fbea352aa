//! Leadboard API Client
//!
//! Typed REST client for the lead-management backend, shared by the
//! dashboard SPA (compiled to wasm) and native test code. One configured
//! transport attaches the persisted bearer token to every request and
//! invalidates credentials on a 401; per-resource accessor groups build the
//! requests and decode the backend's `{ data, pagination?, message? }`
//! envelope exactly once.

pub mod auth;
pub mod bitrix;
pub mod config;
pub mod error;
mod fetch;
pub mod leads;
pub mod reports;
pub mod sources;
pub mod store;
pub mod types;

use reqwest::Client;
use std::sync::Arc;

use crate::auth::AuthApi;
use crate::bitrix::BitrixApi;
use crate::config::ClientOptions;
use crate::fetch::Transport;
use crate::leads::LeadsApi;
use crate::reports::ReportsApi;
use crate::sources::SourcesApi;
use crate::store::TokenStore;

/// The main entry point for the leadboard API client.
///
/// Cheap to clone; all clones share one HTTP connection pool and one token
/// store.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<Transport>,
}

impl ApiClient {
    /// Create a new client against `base_url` (e.g.
    /// `http://localhost:5001/api`), reading/clearing the bearer token
    /// through `store`.
    pub fn new(base_url: &str, store: Arc<dyn TokenStore>) -> Self {
        Self::new_with_options(base_url, store, ClientOptions::default())
    }

    /// Create a new client with custom options.
    pub fn new_with_options(
        base_url: &str,
        store: Arc<dyn TokenStore>,
        options: ClientOptions,
    ) -> Self {
        Self {
            transport: Arc::new(Transport {
                http: Client::new(),
                base_url: base_url.trim_end_matches('/').to_string(),
                store,
                on_unauthorized: None,
                options,
            }),
        }
    }

    /// Install a hook that fires after a 401 has cleared the token store.
    /// The app uses this to force a full-page redirect to the login route.
    pub fn on_unauthorized(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        let transport = Arc::get_mut(&mut self.transport)
            .expect("on_unauthorized must be set before the client is cloned");
        transport.on_unauthorized = Some(Arc::new(hook));
        self
    }

    /// The configured API base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.transport.base_url
    }

    /// Accessors for `/auth`
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi {
            transport: &self.transport,
        }
    }

    /// Accessors for `/leads`
    pub fn leads(&self) -> LeadsApi<'_> {
        LeadsApi {
            transport: &self.transport,
        }
    }

    /// Accessors for `/sources`
    pub fn sources(&self) -> SourcesApi<'_> {
        SourcesApi {
            transport: &self.transport,
        }
    }

    /// Accessors for `/reports`
    pub fn reports(&self) -> ReportsApi<'_> {
        ReportsApi {
            transport: &self.transport,
        }
    }

    /// Accessors for `/bitrix`
    pub fn bitrix(&self) -> BitrixApi<'_> {
        BitrixApi {
            transport: &self.transport,
        }
    }
}

/// A convenience module for common imports
pub mod prelude {
    pub use crate::auth::User;
    pub use crate::config::{ClientOptions, TOKEN_STORAGE_KEY};
    pub use crate::error::Error;
    pub use crate::leads::{DateRange, Lead, LeadQuery, LeadStatus, SortOrder};
    pub use crate::sources::{Platform, Source, SourceConfig, SourcePayload};
    pub use crate::store::TokenStore;
    pub use crate::types::{Page, PageInfo};
    pub use crate::ApiClient;
}
