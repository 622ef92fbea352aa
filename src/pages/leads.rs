//! Leads listing page: filter bar, table, pagination.
//!
//! Every filter, page, or limit change replaces the whole query on the
//! controller; filter changes always reset to the first page.

use leptos::*;

use leadboard_client::leads::{DateRange, LeadQuery};
use leadboard_client::ApiClient;

use crate::components::common::{Alert, AlertKind, Loader};
use crate::components::filter_bar::{FilterChange, LeadFilterBar};
use crate::components::lead_table::LeadTable;
use crate::state::{use_leads, use_sources};

#[component]
pub fn LeadsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let leads = use_leads(api.clone());
    let sources = use_sources(api.clone());

    let on_filter = Callback::new(move |change: FilterChange| {
        let current = leads.filters.get_untracked();
        leads.filters.set(LeadQuery {
            page: 1,
            status: change.status,
            source_id: change.source_id,
            date_range: change.date_range.unwrap_or(DateRange::All),
            date_from: change.date_from,
            date_to: change.date_to,
            ..current
        });
    });

    let on_page = Callback::new(move |page: u32| {
        let current = leads.filters.get_untracked();
        leads.filters.set(current.with_page(page));
    });

    let on_limit = Callback::new(move |limit: u32| {
        let current = leads.filters.get_untracked();
        leads.filters.set(current.with_limit(limit));
    });

    view! {
        <section class="page page-leads">
            <LeadFilterBar sources=sources.sources on_change=on_filter/>
            {move || {
                leads
                    .error
                    .get()
                    .map(|message| view! { <Alert kind=AlertKind::Error message=message/> })
            }}
            <Show when=move || leads.is_loading.get()>
                <Loader text="Loading leads..."/>
            </Show>
            <LeadTable
                leads=leads.leads
                page_info=leads.page_info
                on_page_change=on_page
                on_limit_change=on_limit
                api=api
            />
        </section>
    }
}
