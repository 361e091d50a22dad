use crate::shared::icons::icon;
use leptos::prelude::*;

/// PaginationControls component - reusable pagination controls
///
/// Prev/next arrows around a sliding window of up to five numbered page
/// buttons. Pages are numbered from 1.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    // Window of up to five page numbers centered on the current page
    let page_numbers = move || {
        let total = total_pages.get();
        let current = current_page.get();
        let count = total.min(5);
        (0..count)
            .map(|i| {
                if total <= 5 || current <= 3 {
                    i + 1
                } else if current >= total - 2 {
                    total - 4 + i
                } else {
                    current - 2 + i
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="pagination-controls" style="display: flex; align-items: center; gap: 6px;">
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() <= 1
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            {move || {
                page_numbers()
                    .into_iter()
                    .map(|page| {
                        let is_current = move || current_page.get() == page;
                        view! {
                            <button
                                class=move || {
                                    if is_current() {
                                        "pagination-btn pagination-btn--current"
                                    } else {
                                        "pagination-btn"
                                    }
                                }
                                on:click=move |_| on_page_change.run(page)
                            >
                                {page.to_string()}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || current_page.get() >= total_pages.get()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}
