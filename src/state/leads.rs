//! List controller for the leads table.

use leptos::*;

use leadboard_client::leads::{Lead, LeadQuery};
use leadboard_client::types::PageInfo;
use leadboard_client::ApiClient;

/// Fetch state for the leads listing. Signals are `Copy`, so the whole
/// controller can move into event handlers freely.
#[derive(Clone, Copy)]
pub struct LeadsState {
    pub leads: RwSignal<Vec<Lead>>,
    pub page_info: RwSignal<PageInfo>,
    pub is_loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    /// The current query. Replace it (never mutate in place) to re-fetch.
    pub filters: RwSignal<LeadQuery>,
}

/// Create the controller and start fetching. Every replacement of
/// `filters` triggers a fetch; a request-generation counter makes sure a
/// slow response for an older query can never overwrite the state of a
/// newer one.
pub fn use_leads(api: ApiClient) -> LeadsState {
    let state = LeadsState {
        leads: create_rw_signal(Vec::new()),
        page_info: create_rw_signal(PageInfo::default()),
        is_loading: create_rw_signal(true),
        error: create_rw_signal(None),
        filters: create_rw_signal(LeadQuery::default()),
    };

    let generation = store_value(0u64);

    create_effect(move |_| {
        let query = state.filters.get();
        let current = generation.with_value(|g| g + 1);
        generation.set_value(current);

        state.is_loading.set(true);
        state.error.set(None);

        let api = api.clone();
        spawn_local(async move {
            let result = api.leads().list(&query).await;
            if generation.with_value(|g| *g) != current {
                // A newer query has been issued since; drop this response.
                return;
            }
            match result {
                Ok(page) => {
                    state.leads.set(page.items);
                    state.page_info.set(page.pagination);
                }
                // Keep the previous rows in place (stale-while-error).
                Err(err) => state.error.set(Some(err.message_or("Failed to fetch leads."))),
            }
            state.is_loading.set(false);
        });
    });

    state
}
