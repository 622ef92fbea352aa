//! Compact pager: First / Prev / a window of three pages / Next / Last,
//! plus a records-per-page selector. Page turns bubble up through
//! callbacks; the parent re-fetches.

use leptos::*;

pub const PAGE_SIZES: [u32; 5] = [10, 20, 25, 50, 100];

/// Whether the backward (First/Prev) and forward (Next/Last) controls are
/// inert, as `(at_first, at_last)`.
pub fn pager_bounds(current: u32, total: u32) -> (bool, bool) {
    (current <= 1, current >= total)
}

/// The window of page numbers to render around the current page.
pub fn page_window(current: u32, total: u32) -> Vec<u32> {
    if total == 0 {
        return Vec::new();
    }
    let mut start = current.saturating_sub(1).max(1);
    let mut end = (current + 1).min(total);
    if current == 1 {
        end = total.min(3);
    }
    if current == total {
        start = total.saturating_sub(2).max(1);
    }
    (start..=end).collect()
}

#[component]
pub fn CompactPagination(
    #[prop(into)] current_page: Signal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    #[prop(into)] on_page_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <div class="pagination">
                <button
                    class="page-btn"
                    disabled=move || pager_bounds(current_page.get(), total_pages.get()).0
                    on:click=move |_| on_page_change.call(1)
                >
                    "First"
                </button>
                <button
                    class="page-btn"
                    disabled=move || pager_bounds(current_page.get(), total_pages.get()).0
                    on:click=move |_| on_page_change.call(current_page.get() - 1)
                >
                    "Prev"
                </button>
                {move || {
                    let window = page_window(current_page.get(), total_pages.get());
                    let leading_gap = window.first().is_some_and(|first| *first > 1);
                    let trailing_gap = window.last().is_some_and(|last| *last < total_pages.get());
                    view! {
                        <Show when=move || leading_gap>
                            <span class="page-ellipsis">"..."</span>
                        </Show>
                        {window
                            .into_iter()
                            .map(|page| {
                                view! {
                                    <button
                                        class="page-btn"
                                        class=("page-current", move || current_page.get() == page)
                                        on:click=move |_| on_page_change.call(page)
                                    >
                                        {page}
                                    </button>
                                }
                            })
                            .collect_view()}
                        <Show when=move || trailing_gap>
                            <span class="page-ellipsis">"..."</span>
                        </Show>
                    }
                }}
                <button
                    class="page-btn"
                    disabled=move || pager_bounds(current_page.get(), total_pages.get()).1
                    on:click=move |_| on_page_change.call(current_page.get() + 1)
                >
                    "Next"
                </button>
                <button
                    class="page-btn"
                    disabled=move || pager_bounds(current_page.get(), total_pages.get()).1
                    on:click=move |_| on_page_change.call(total_pages.get())
                >
                    "Last"
                </button>
            </div>
        </Show>
    }
}

#[component]
pub fn RecordsSelector(
    #[prop(into)] current_limit: Signal<u32>,
    #[prop(into)] on_limit_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="records-selector">
            <label for="records">"Records:"</label>
            <select
                id="records"
                on:change=move |ev| {
                    if let Ok(limit) = event_target_value(&ev).parse::<u32>() {
                        on_limit_change.call(limit);
                    }
                }
            >
                {PAGE_SIZES
                    .iter()
                    .copied()
                    .map(|size| {
                        view! {
                            <option value=size.to_string() selected=move || current_limit.get() == size>
                                {size.to_string()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_shows_up_to_three_pages() {
        assert_eq!(page_window(1, 5), vec![1, 2, 3]);
        assert_eq!(page_window(1, 2), vec![1, 2]);
        assert_eq!(page_window(1, 1), vec![1]);
    }

    #[test]
    fn middle_pages_center_the_window() {
        assert_eq!(page_window(4, 9), vec![3, 4, 5]);
    }

    #[test]
    fn last_page_shows_the_trailing_three() {
        assert_eq!(page_window(5, 5), vec![3, 4, 5]);
        assert_eq!(page_window(2, 2), vec![1, 2]);
    }

    #[test]
    fn zero_pages_yields_an_empty_window() {
        assert!(page_window(1, 0).is_empty());
    }

    #[test]
    fn forward_controls_go_inert_only_on_the_last_page() {
        assert_eq!(pager_bounds(1, 5), (true, false));
        assert_eq!(pager_bounds(3, 5), (false, false));
        assert_eq!(pager_bounds(5, 5), (false, true));
    }
}
