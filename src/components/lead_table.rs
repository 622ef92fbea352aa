//! The leads table: column visibility, status badges, and the per-row
//! retry action.
//!
//! Retry is optimistic: the row flips to Queued as soon as the user
//! confirms, and flips back to Failed if the call fails.

use leptos::*;

use leadboard_client::leads::{Lead, LeadStatus};
use leadboard_client::types::PageInfo;
use leadboard_client::ApiClient;

use crate::components::pagination::{CompactPagination, RecordsSelector};
use crate::format::format_date;
use crate::storage;

/// Every column the table can render. Closed set; visibility toggles are
/// per-column booleans keyed by this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadColumn {
    LeadId,
    Date,
    Name,
    Contact,
    UserType,
    PropertyType,
    Budget,
    Bedrooms,
    Source,
    Status,
    UtmSource,
    Actions,
}

impl LeadColumn {
    pub const ALL: [LeadColumn; 12] = [
        LeadColumn::LeadId,
        LeadColumn::Date,
        LeadColumn::Name,
        LeadColumn::Contact,
        LeadColumn::UserType,
        LeadColumn::PropertyType,
        LeadColumn::Budget,
        LeadColumn::Bedrooms,
        LeadColumn::Source,
        LeadColumn::Status,
        LeadColumn::UtmSource,
        LeadColumn::Actions,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            LeadColumn::LeadId => "Lead ID",
            LeadColumn::Date => "Date",
            LeadColumn::Name => "Name",
            LeadColumn::Contact => "Contact",
            LeadColumn::UserType => "User Type",
            LeadColumn::PropertyType => "Property Type",
            LeadColumn::Budget => "Budget",
            LeadColumn::Bedrooms => "Bedrooms",
            LeadColumn::Source => "Source",
            LeadColumn::Status => "Status",
            LeadColumn::UtmSource => "UTM Source",
            LeadColumn::Actions => "Actions",
        }
    }

    pub fn default_visible(&self) -> bool {
        matches!(
            self,
            LeadColumn::LeadId
                | LeadColumn::Date
                | LeadColumn::Name
                | LeadColumn::Contact
                | LeadColumn::Source
                | LeadColumn::Status
                | LeadColumn::Actions
        )
    }
}

/// Which columns are currently shown.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnVisibility {
    visible: Vec<LeadColumn>,
}

impl Default for ColumnVisibility {
    fn default() -> Self {
        Self {
            visible: LeadColumn::ALL
                .iter()
                .copied()
                .filter(LeadColumn::default_visible)
                .collect(),
        }
    }
}

impl ColumnVisibility {
    pub fn is_visible(&self, column: LeadColumn) -> bool {
        self.visible.contains(&column)
    }

    pub fn toggle(&mut self, column: LeadColumn) {
        if let Some(pos) = self.visible.iter().position(|c| *c == column) {
            self.visible.remove(pos);
        } else {
            self.visible.push(column);
        }
    }

    /// Columns in table order, filtered to the visible set.
    pub fn ordered(&self) -> Vec<LeadColumn> {
        LeadColumn::ALL
            .iter()
            .copied()
            .filter(|c| self.is_visible(*c))
            .collect()
    }
}

/// Replace the status of the lead with the given id. Returns the previous
/// status if the lead was found.
pub fn apply_status(leads: &mut [Lead], id: &str, status: LeadStatus) -> Option<LeadStatus> {
    let lead = leads.iter_mut().find(|l| l.id == id)?;
    let previous = lead.status;
    lead.status = status;
    Some(previous)
}

#[component]
pub fn StatusBadge(status: LeadStatus) -> impl IntoView {
    view! {
        <span class=format!("badge badge-{}", status.as_str())>{status.label()}</span>
    }
}

#[component]
pub fn ColumnSettings(visibility: RwSignal<ColumnVisibility>) -> impl IntoView {
    let open = create_rw_signal(false);
    view! {
        <div class="column-settings">
            <button class="btn btn-secondary" on:click=move |_| open.update(|o| *o = !*o)>
                "Columns"
            </button>
            <Show when=move || open.get()>
                <div class="column-settings-menu">
                    {LeadColumn::ALL
                        .iter()
                        .map(|column| {
                            let column = *column;
                            view! {
                                <label class="column-settings-item">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || visibility.with(|v| v.is_visible(column))
                                        on:change=move |_| visibility.update(|v| v.toggle(column))
                                    />
                                    {column.header()}
                                </label>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

fn cell_text(value: Option<&String>) -> String {
    value.cloned().unwrap_or_else(|| "-".to_string())
}

#[component]
fn LeadRow(
    lead: Lead,
    leads: RwSignal<Vec<Lead>>,
    #[prop(into)] columns: Signal<Vec<LeadColumn>>,
    api: ApiClient,
) -> impl IntoView {
    let id = lead.id.clone();
    let initial_status = lead.status;
    let status = create_memo({
        let id = id.clone();
        move |_| {
            leads.with(|all| {
                all.iter()
                    .find(|l| l.id == id)
                    .map(|l| l.status)
                    .unwrap_or(initial_status)
            })
        }
    });

    let retry = {
        let id = id.clone();
        move |_| {
            if !storage::confirm("Retry all failed jobs for this lead?") {
                return;
            }
            let id = id.clone();
            let api = api.clone();
            let previous = leads
                .try_update(|all| apply_status(all, &id, LeadStatus::Queued))
                .flatten();
            spawn_local(async move {
                if let Err(err) = api.leads().retry(&id).await {
                    let restore = previous.unwrap_or(LeadStatus::Failed);
                    leads.update(|all| {
                        apply_status(all, &id, restore);
                    });
                    storage::alert(&err.message_or("Failed to retry lead."));
                }
            });
        }
    };

    let detail_href = format!("/leads/{}", lead.id);
    let lead_view = lead.clone();

    view! {
        <tr>
            {move || {
                columns
                    .get()
                    .into_iter()
                    .map(|column| render_cell(column, &lead_view, status, &detail_href, retry.clone()))
                    .collect_view()
            }}
        </tr>
    }
}

fn render_cell(
    column: LeadColumn,
    lead: &Lead,
    status: Memo<LeadStatus>,
    detail_href: &str,
    retry: impl Fn(leptos::ev::MouseEvent) + 'static,
) -> View {
    match column {
        LeadColumn::LeadId => view! {
            <td>
                <a class="lead-link" href=detail_href.to_string()>
                    {format!("LEAD#{}", lead.lead_id)}
                </a>
            </td>
        }
        .into_view(),
        LeadColumn::Date => view! { <td>{format_date(Some(&lead.created_at))}</td> }.into_view(),
        LeadColumn::Name => view! { <td>{cell_text(lead.name.as_ref())}</td> }.into_view(),
        LeadColumn::Contact => {
            let phone = cell_text(lead.phone.as_ref());
            let email = cell_text(lead.email.as_ref());
            view! {
                <td>
                    <div class="contact-cell">
                        <span>{phone}</span>
                        <span class="contact-email">{email}</span>
                    </div>
                </td>
            }
            .into_view()
        }
        LeadColumn::UserType => view! { <td>{cell_text(lead.user_type.as_ref())}</td> }.into_view(),
        LeadColumn::PropertyType => {
            view! { <td>{cell_text(lead.property_type.as_ref())}</td> }.into_view()
        }
        LeadColumn::Budget => view! { <td>{cell_text(lead.budget.as_ref())}</td> }.into_view(),
        LeadColumn::Bedrooms => view! { <td>{cell_text(lead.bedrooms.as_ref())}</td> }.into_view(),
        LeadColumn::Source => {
            let name = lead
                .source_id
                .as_ref()
                .and_then(|s| s.name())
                .map(str::to_string)
                .or_else(|| lead.source.clone())
                .unwrap_or_else(|| "-".to_string());
            view! { <td>{name}</td> }.into_view()
        }
        LeadColumn::Status => view! {
            <td>{move || view! { <StatusBadge status=status.get()/> }}</td>
        }
        .into_view(),
        LeadColumn::UtmSource => {
            let utm = lead
                .utm
                .as_ref()
                .and_then(|u| u.source.clone())
                .unwrap_or_else(|| "-".to_string());
            view! { <td>{utm}</td> }.into_view()
        }
        LeadColumn::Actions => view! {
            <td>
                <button
                    class="btn btn-small"
                    disabled=move || status.get() != LeadStatus::Failed
                    on:click=retry
                >
                    "Retry"
                </button>
            </td>
        }
        .into_view(),
    }
}

#[component]
pub fn LeadTable(
    leads: RwSignal<Vec<Lead>>,
    #[prop(into)] page_info: Signal<PageInfo>,
    #[prop(into)] on_page_change: Callback<u32>,
    #[prop(into)] on_limit_change: Callback<u32>,
    api: ApiClient,
) -> impl IntoView {
    let visibility = create_rw_signal(ColumnVisibility::default());
    let columns = Signal::derive(move || visibility.with(|v| v.ordered()));

    view! {
        <div class="lead-table">
            <div class="lead-table-toolbar">
                <ColumnSettings visibility=visibility/>
            </div>
            <table>
                <thead>
                    <tr>
                        {move || {
                            columns
                                .get()
                                .into_iter()
                                .map(|column| view! { <th>{column.header()}</th> })
                                .collect_view()
                        }}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = leads.get();
                        if rows.is_empty() {
                            view! {
                                <tr>
                                    <td class="table-empty" colspan=columns.get().len()>
                                        "No leads found."
                                    </td>
                                </tr>
                            }
                            .into_view()
                        } else {
                            rows.into_iter()
                                .map(|lead| {
                                    view! {
                                        <LeadRow lead=lead leads=leads columns=columns api=api.clone()/>
                                    }
                                })
                                .collect_view()
                        }
                    }}
                </tbody>
            </table>
            <TableFooter
                page_info=page_info
                on_page_change=on_page_change
                on_limit_change=on_limit_change
            />
        </div>
    }
}

#[component]
pub fn TableFooter(
    #[prop(into)] page_info: Signal<PageInfo>,
    #[prop(into)] on_page_change: Callback<u32>,
    #[prop(into)] on_limit_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="table-footer">
            <span class="table-count">
                {move || {
                    let info = page_info.get();
                    format!(
                        "Page {} of {} ({} leads)",
                        info.current_page, info.total_pages.max(1), info.total_leads
                    )
                }}
            </span>
            <CompactPagination
                current_page=Signal::derive(move || page_info.get().current_page)
                total_pages=Signal::derive(move || page_info.get().total_pages)
                on_page_change=on_page_change
            />
            <RecordsSelector
                current_limit=Signal::derive(move || page_info.get().limit)
                on_limit_change=on_limit_change
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn lead(id: &str, status: LeadStatus) -> Lead {
        serde_json::from_value(serde_json::json!({
            "_id": id,
            "leadId": 1,
            "status": status,
            "createdAt": Utc::now(),
            "payload": {}
        }))
        .unwrap()
    }

    #[test]
    fn default_visibility_matches_the_compact_layout() {
        let visibility = ColumnVisibility::default();
        assert!(visibility.is_visible(LeadColumn::LeadId));
        assert!(visibility.is_visible(LeadColumn::Status));
        assert!(visibility.is_visible(LeadColumn::Actions));
        assert!(!visibility.is_visible(LeadColumn::Budget));
        assert!(!visibility.is_visible(LeadColumn::UtmSource));
    }

    #[test]
    fn toggling_hides_and_restores_a_column() {
        let mut visibility = ColumnVisibility::default();
        visibility.toggle(LeadColumn::Name);
        assert!(!visibility.is_visible(LeadColumn::Name));
        visibility.toggle(LeadColumn::Name);
        assert!(visibility.is_visible(LeadColumn::Name));
    }

    #[test]
    fn ordered_columns_keep_table_order_after_toggles() {
        let mut visibility = ColumnVisibility::default();
        visibility.toggle(LeadColumn::Budget);
        let ordered = visibility.ordered();
        let budget = ordered.iter().position(|c| *c == LeadColumn::Budget);
        let status = ordered.iter().position(|c| *c == LeadColumn::Status);
        assert!(budget.unwrap() < status.unwrap());
    }

    #[test]
    fn apply_status_returns_the_previous_status() {
        let mut leads = vec![lead("a", LeadStatus::Failed), lead("b", LeadStatus::Success)];
        let previous = apply_status(&mut leads, "a", LeadStatus::Queued);
        assert_eq!(previous, Some(LeadStatus::Failed));
        assert_eq!(leads[0].status, LeadStatus::Queued);
        assert_eq!(leads[1].status, LeadStatus::Success);
    }

    #[test]
    fn apply_status_is_a_no_op_for_unknown_ids() {
        let mut leads = vec![lead("a", LeadStatus::Failed)];
        assert_eq!(apply_status(&mut leads, "missing", LeadStatus::Queued), None);
        assert_eq!(leads[0].status, LeadStatus::Failed);
    }
}
