//! Filter controls for the leads listing.
//!
//! Selections are staged locally and only reach the listing when Apply is
//! clicked. Clear resets the staged values and applies the empty filter set
//! immediately.

use leptos::*;

use leadboard_client::leads::{DateRange, LeadStatus};
use leadboard_client::sources::Source;

/// A committed filter selection, already normalized: custom dates survive
/// only when the range is `Custom`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterChange {
    pub status: Option<LeadStatus>,
    pub source_id: Option<String>,
    pub date_range: Option<DateRange>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

fn none_if_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Normalize staged form values into a committed change.
pub fn build_change(
    status: &str,
    source_id: &str,
    date_range: &str,
    date_from: &str,
    date_to: &str,
) -> FilterChange {
    let range = DateRange::from_param(date_range).filter(|r| *r != DateRange::All);
    let custom = range == Some(DateRange::Custom);
    FilterChange {
        status: LeadStatus::from_param(status),
        source_id: none_if_empty(source_id.to_string()),
        date_range: range,
        date_from: custom.then(|| none_if_empty(date_from.to_string())).flatten(),
        date_to: custom.then(|| none_if_empty(date_to.to_string())).flatten(),
    }
}

#[component]
pub fn LeadFilterBar(
    #[prop(into)] sources: Signal<Vec<Source>>,
    #[prop(into)] on_change: Callback<FilterChange>,
) -> impl IntoView {
    let status = create_rw_signal(String::new());
    let source_id = create_rw_signal(String::new());
    let date_range = create_rw_signal("all".to_string());
    let date_from = create_rw_signal(String::new());
    let date_to = create_rw_signal(String::new());

    let apply = move |_| {
        on_change.call(build_change(
            &status.get(),
            &source_id.get(),
            &date_range.get(),
            &date_from.get(),
            &date_to.get(),
        ));
    };

    let clear = move |_| {
        status.set(String::new());
        source_id.set(String::new());
        date_range.set("all".to_string());
        date_from.set(String::new());
        date_to.set(String::new());
        on_change.call(FilterChange::default());
    };

    view! {
        <div class="filter-bar">
            <div class="filter-field">
                <label for="filter-status">"Status"</label>
                <select
                    id="filter-status"
                    prop:value=move || status.get()
                    on:change=move |ev| status.set(event_target_value(&ev))
                >
                    <option value="">"All statuses"</option>
                    {LeadStatus::ALL
                        .iter()
                        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                        .collect_view()}
                </select>
            </div>
            <div class="filter-field">
                <label for="filter-source">"Source"</label>
                <select
                    id="filter-source"
                    prop:value=move || source_id.get()
                    on:change=move |ev| source_id.set(event_target_value(&ev))
                >
                    <option value="">"All sources"</option>
                    {move || {
                        sources
                            .get()
                            .into_iter()
                            .map(|source| {
                                view! { <option value=source.id.clone()>{source.name.clone()}</option> }
                            })
                            .collect_view()
                    }}
                </select>
            </div>
            <div class="filter-field">
                <label for="filter-range">"Date range"</label>
                <select
                    id="filter-range"
                    prop:value=move || date_range.get()
                    on:change=move |ev| date_range.set(event_target_value(&ev))
                >
                    <option value="all">"All time"</option>
                    <option value="24h">"Last 24 hours"</option>
                    <option value="7d">"Last 7 days"</option>
                    <option value="14d">"Last 14 days"</option>
                    <option value="28d">"Last 28 days"</option>
                    <option value="custom">"Custom"</option>
                </select>
            </div>
            <Show when=move || date_range.get() == "custom">
                <div class="filter-field">
                    <label for="filter-from">"From"</label>
                    <input
                        id="filter-from"
                        type="date"
                        prop:value=move || date_from.get()
                        on:input=move |ev| date_from.set(event_target_value(&ev))
                    />
                </div>
                <div class="filter-field">
                    <label for="filter-to">"To"</label>
                    <input
                        id="filter-to"
                        type="date"
                        prop:value=move || date_to.get()
                        on:input=move |ev| date_to.set(event_target_value(&ev))
                    />
                </div>
            </Show>
            <div class="filter-actions">
                <button class="btn btn-primary" on:click=apply>
                    "Apply"
                </button>
                <button class="btn btn-secondary" on:click=clear>
                    "Clear"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selections_build_the_default_change() {
        assert_eq!(build_change("", "", "all", "", ""), FilterChange::default());
    }

    #[test]
    fn preset_ranges_drop_staged_dates() {
        let change = build_change("failed", "src1", "7d", "2025-11-01", "2025-11-08");
        assert_eq!(change.status, Some(LeadStatus::Failed));
        assert_eq!(change.source_id.as_deref(), Some("src1"));
        assert_eq!(change.date_range, Some(DateRange::Last7d));
        assert_eq!(change.date_from, None);
        assert_eq!(change.date_to, None);
    }

    #[test]
    fn custom_range_keeps_the_dates() {
        let change = build_change("", "", "custom", "2025-11-01", "2025-11-08");
        assert_eq!(change.date_range, Some(DateRange::Custom));
        assert_eq!(change.date_from.as_deref(), Some("2025-11-01"));
        assert_eq!(change.date_to.as_deref(), Some("2025-11-08"));
    }

    #[test]
    fn unknown_status_values_are_ignored() {
        let change = build_change("bogus", "", "all", "", "");
        assert_eq!(change.status, None);
    }
}
