//! Controller for the sources list and its CRUD actions.
//!
//! Mutations never patch the local list: each one performs the call, then
//! unconditionally re-fetches, so the list always reflects the backend.

use leptos::*;

use leadboard_client::sources::{Source, SourcePayload};
use leadboard_client::ApiClient;

#[derive(Clone)]
pub struct SourcesState {
    api: ApiClient,
    pub sources: RwSignal<Vec<Source>>,
    pub is_loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl SourcesState {
    pub async fn refetch(&self) {
        self.is_loading.set(true);
        self.error.set(None);
        match self.api.sources().list().await {
            Ok(sources) => self.sources.set(sources),
            Err(err) => self
                .error
                .set(Some(err.message_or("Failed to fetch sources."))),
        }
        self.is_loading.set(false);
    }

    /// Record the page-level error and hand the message back so the form
    /// can display its own inline copy.
    fn fail(&self, err: leadboard_client::error::Error, fallback: &str) -> String {
        let message = err.message_or(fallback);
        self.error.set(Some(message.clone()));
        message
    }

    pub async fn add(&self, payload: &SourcePayload) -> Result<(), String> {
        match self.api.sources().create(payload).await {
            Ok(_) => {
                self.refetch().await;
                Ok(())
            }
            Err(err) => Err(self.fail(err, "Failed to create source.")),
        }
    }

    pub async fn update(&self, id: &str, payload: &SourcePayload) -> Result<(), String> {
        match self.api.sources().update(id, payload).await {
            Ok(_) => {
                self.refetch().await;
                Ok(())
            }
            Err(err) => Err(self.fail(err, "Failed to update source.")),
        }
    }

    pub async fn delete(&self, id: &str) -> Result<(), String> {
        match self.api.sources().delete(id).await {
            Ok(()) => {
                self.refetch().await;
                Ok(())
            }
            Err(err) => Err(self.fail(err, "Failed to delete source.")),
        }
    }
}

pub fn use_sources(api: ApiClient) -> SourcesState {
    let state = SourcesState {
        api,
        sources: create_rw_signal(Vec::new()),
        is_loading: create_rw_signal(true),
        error: create_rw_signal(None),
    };

    let initial = state.clone();
    spawn_local(async move {
        initial.refetch().await;
    });

    state
}
