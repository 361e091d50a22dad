//! Sortable table header cell

use crate::shared::list_utils::get_sort_indicator;
use leptos::prelude::*;

/// Header cell that drives column sorting.
///
/// Shows the sort indicator (▲/▼ on the active column, ⇅ elsewhere) and
/// reports clicks through `on_sort`.
#[component]
pub fn SortableHeaderCell(
    /// Header label
    #[prop(into)]
    label: String,

    /// Field key this column sorts by
    #[prop(into)]
    sort_field: String,

    /// Currently active sort field
    #[prop(into)]
    current_sort_field: Signal<String>,

    /// Current sort direction
    #[prop(into)]
    sort_ascending: Signal<bool>,

    /// Callback with the field key when the header is clicked
    on_sort: Callback<String>,
) -> impl IntoView {
    let sort_field_for_click = sort_field.clone();
    let sort_field_for_indicator = sort_field.clone();

    view! {
        <th
            class="table__header table__header--sortable"
            style="cursor: pointer; user-select: none; text-align: left; padding: 8px 12px; white-space: nowrap;"
            on:click=move |_| on_sort.run(sort_field_for_click.clone())
        >
            {label}
            <span class="table__sort-indicator">
                {move || {
                    get_sort_indicator(
                        &current_sort_field.get(),
                        &sort_field_for_indicator,
                        sort_ascending.get(),
                    )
                }}
            </span>
        </th>
    }
}
