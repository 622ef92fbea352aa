//! Controller for a single lead's detail page.

use leptos::*;

use leadboard_client::leads::{ErrorRecord, Job, Lead};
use leadboard_client::ApiClient;

#[derive(Clone, Copy)]
pub struct LeadDetailState {
    pub lead: RwSignal<Option<Lead>>,
    pub jobs: RwSignal<Vec<Job>>,
    pub errors: RwSignal<Vec<ErrorRecord>>,
    pub is_loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    /// Re-fetch everything, e.g. after a retry has been accepted.
    pub refresh: Callback<()>,
}

/// Fetch the lead plus its jobs and error records in one call. Fails fast
/// with an explicit error when no id is present in the route.
pub fn use_lead_detail(api: ApiClient, id: Memo<Option<String>>) -> LeadDetailState {
    let lead = create_rw_signal(None);
    let jobs = create_rw_signal(Vec::new());
    let errors = create_rw_signal(Vec::new());
    let is_loading = create_rw_signal(true);
    let error = create_rw_signal(None);

    let refresh = Callback::new(move |_: ()| {
        let Some(lead_id) = id.get_untracked() else {
            error.set(Some("No lead id provided.".to_string()));
            is_loading.set(false);
            return;
        };

        is_loading.set(true);
        error.set(None);

        let api = api.clone();
        spawn_local(async move {
            match api.leads().get(&lead_id).await {
                Ok(bundle) => {
                    lead.set(Some(bundle.lead));
                    jobs.set(bundle.jobs);
                    errors.set(bundle.errors);
                }
                Err(err) => error.set(Some(err.message_or("Failed to fetch lead details."))),
            }
            is_loading.set(false);
        });
    });

    create_effect(move |_| {
        id.track();
        refresh.call(());
    });

    LeadDetailState {
        lead,
        jobs,
        errors,
        is_loading,
        error,
        refresh,
    }
}
