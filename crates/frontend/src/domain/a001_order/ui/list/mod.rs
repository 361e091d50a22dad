//! Orders list screen

pub mod add_modal;
pub mod state;
pub mod status;

use crate::shared::components::table::{SelectionState, SortableHeaderCell, TableHeaderCheckbox};
use crate::shared::components::{PaginationControls, TableCheckbox};
use crate::shared::dom_utils::dismiss_on_outside_mousedown;
use crate::shared::icons::{avatar, avatar_kind, icon};
use crate::shared::list_utils::SearchInput;
use crate::shared::theme::ThemeToggle;
use add_modal::AddOrderModal;
use contracts::domain::a001_order::{Order, OrderId, OrdersSnapshot};
use contracts::shared::validation::validate_search_query;
use leptos::logging::log;
use leptos::prelude::*;
use state::{create_state, STATUS_FILTER_ALL};
use status::StatusCell;

/// Sortable columns: header label + field key.
const COLUMNS: &[(&str, &str)] = &[
    ("Order ID", "order_no"),
    ("User", "user"),
    ("Project", "project"),
    ("Address", "address"),
    ("Date", "date"),
    ("Status", "status"),
];

#[component]
pub fn OrderList(snapshot: OrdersSnapshot) -> impl IntoView {
    let state = create_state(snapshot);
    log!(
        "order browser initialized with {} records",
        state.with_untracked(|s| s.orders.len())
    );

    let (show_add_modal, set_show_add_modal) = signal(false);

    // The dropdown closes on any press outside its `.filter-dropdown` scope;
    // the listener lives only while the dropdown is open.
    let show_filter_dropdown = RwSignal::new(false);
    dismiss_on_outside_mousedown(show_filter_dropdown, ".filter-dropdown");

    let get_paged = move || state.with(|s| s.paged());
    let get_filtered_count = move || state.with(|s| s.filtered_sorted().len());

    let current_sort_field = Signal::derive(move || state.with(|s| s.sort_field.clone()));
    let sort_ascending = Signal::derive(move || state.with(|s| s.sort_ascending));
    let current_page = Signal::derive(move || state.with(|s| s.page));
    let total_pages = Signal::derive(move || get_paged().total_pages);

    let selection_state = Signal::derive(move || {
        state.with(|s| {
            let filtered = s.filtered_sorted();
            if filtered.is_empty() {
                return SelectionState::None;
            }
            let selected_count = filtered
                .iter()
                .filter(|order| s.selected_ids.contains(&order.id))
                .count();
            if selected_count == 0 {
                SelectionState::None
            } else if selected_count == filtered.len() {
                SelectionState::All
            } else {
                SelectionState::Some
            }
        })
    });

    let handle_search = Callback::new(move |term: String| {
        let query = validate_search_query(&term);
        state.update(|s| s.set_search_term(query));
    });

    let handle_sort = Callback::new(move |field: String| {
        state.update(|s| s.toggle_sort(&field));
    });

    let handle_select_all = Callback::new(move |_checked: bool| {
        state.update(|s| s.toggle_select_all());
    });

    let handle_page_change = Callback::new(move |page: usize| {
        state.update(|s| s.set_page(page));
    });

    let select_status = move |status: String| {
        state.update(|s| s.set_status_filter(status));
        show_filter_dropdown.set(false);
    };

    let handle_add_order = Callback::new(move |order: Order| {
        log!("adding order {}", order.order_no);
        state.update(|s| s.add_order(order));
    });

    view! {
        <div class="order-list" style="background: #f8f9fa; padding: 16px; border-radius: 12px; font-family: Inter, sans-serif;">
            // Header row: title, actions, search
            <div style="display: flex; align-items: center; justify-content: space-between; gap: 12px; flex-wrap: wrap; margin-bottom: 12px;">
                <div style="display: flex; align-items: center; gap: 8px;">
                    <h1 style="margin: 0 8px 0 0; font-size: 1.2rem; font-weight: 600;">
                        {state.with_untracked(|s| s.title.clone())}
                    </h1>

                    <button
                        class="toolbar-btn"
                        style="background: none; border: 1px solid #ddd; border-radius: 8px; padding: 6px; cursor: pointer; display: inline-flex; align-items: center;"
                        title="Add order"
                        on:click=move |_| set_show_add_modal.set(true)
                    >
                        {icon("plus")}
                    </button>

                    // Status filter dropdown
                    <div class="filter-dropdown" style="position: relative;">
                        <button
                            class="toolbar-btn"
                            style="background: none; border: 1px solid #ddd; border-radius: 8px; padding: 6px; cursor: pointer; display: inline-flex; align-items: center; gap: 2px;"
                            title="Filter by status"
                            on:click=move |_| show_filter_dropdown.update(|open| *open = !*open)
                        >
                            {icon("filter")}
                            {icon("chevron-down")}
                        </button>

                        <Show when=move || show_filter_dropdown.get()>
                            <div
                                class="filter-dropdown__menu"
                                style="position: absolute; top: 100%; left: 0; margin-top: 6px; width: 190px; background: white; border: 1px solid #e9ecef; border-radius: 8px; box-shadow: 0 4px 12px rgba(0,0,0,0.12); padding: 6px; z-index: 10;"
                            >
                                <div style="font-size: 13px; font-weight: 500; padding: 4px 8px; color: #495057;">
                                    "Filter by Status"
                                </div>
                                <button
                                    class=move || filter_item_class(
                                        state.with(|s| s.status_filter == STATUS_FILTER_ALL),
                                    )
                                    on:click=move |_| select_status(STATUS_FILTER_ALL.to_string())
                                >
                                    "All Statuses"
                                </button>
                                {move || {
                                    state
                                        .with(|s| s.unique_statuses())
                                        .into_iter()
                                        .map(|status_value| {
                                            let for_click = status_value.clone();
                                            let for_class = status_value.clone();
                                            view! {
                                                <button
                                                    class=move || filter_item_class(
                                                        state.with(|s| s.status_filter == for_class),
                                                    )
                                                    on:click=move |_| select_status(for_click.clone())
                                                >
                                                    {status_value}
                                                </button>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </div>
                        </Show>
                    </div>

                    <ThemeToggle />
                </div>

                <SearchInput
                    value=Signal::derive(move || state.with(|s| s.search_term.clone()))
                    on_change=handle_search
                />
            </div>

            // Table
            <div style="background: white; border: 1px solid #e9ecef; border-radius: 8px; overflow-x: auto;">
                <table class="table" style="width: 100%; border-collapse: collapse; font-size: 14px;">
                    <thead>
                        <tr style="border-bottom: 1px solid #e9ecef; color: #6c757d;">
                            <TableHeaderCheckbox state=selection_state on_change=handle_select_all />
                            {COLUMNS
                                .iter()
                                .map(|(label, field)| {
                                    view! {
                                        <SortableHeaderCell
                                            label=*label
                                            sort_field=*field
                                            current_sort_field=current_sort_field
                                            sort_ascending=sort_ascending
                                            on_sort=handle_sort
                                        />
                                    }
                                })
                                .collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        <Show
                            when=move || !get_paged().records.is_empty()
                            fallback=|| {
                                view! {
                                    <tr>
                                        <td colspan="7" style="padding: 40px; text-align: center; color: #6c757d;">
                                            <h3 style="margin: 0 0 4px; font-size: 1rem;">"No orders found"</h3>
                                            <div style="font-size: 13px;">
                                                "Try adjusting your search or filter criteria"
                                            </div>
                                        </td>
                                    </tr>
                                }
                            }
                        >
                            <For
                                each=move || get_paged().records
                                key=|order| order.id
                                children=move |order: Order| {
                                    view! { <OrderRow order=order state=state /> }
                                }
                            />
                        </Show>
                    </tbody>
                </table>
            </div>

            // Footer: range summary + pagination
            <Show when=move || (get_filtered_count() > 0)>
                <div style="display: flex; align-items: center; justify-content: space-between; padding: 10px 4px 0;">
                    <span style="font-size: 13px; color: #6c757d;">
                        {move || {
                            let page = get_paged();
                            let total = get_filtered_count();
                            format!(
                                "Showing {}-{} of {} orders",
                                page.start_index + 1,
                                page.end_index.min(total),
                                total
                            )
                        }}
                    </span>
                    <PaginationControls
                        current_page=current_page
                        total_pages=total_pages
                        on_page_change=handle_page_change
                    />
                </div>
            </Show>

            <Show when=move || show_add_modal.get()>
                <AddOrderModal
                    on_add=handle_add_order
                    on_close=Callback::new(move |_| set_show_add_modal.set(false))
                />
            </Show>
        </div>
    }
}

fn filter_item_class(is_active: bool) -> &'static str {
    if is_active {
        "filter-dropdown__item filter-dropdown__item--active"
    } else {
        "filter-dropdown__item"
    }
}

/// One table row.
#[component]
fn OrderRow(
    order: Order,
    state: RwSignal<state::OrderListState>,
) -> impl IntoView {
    let id: OrderId = order.id;

    let checked = Signal::derive(move || state.with(|s| s.selected_ids.contains(&id)));
    let handle_toggle = Callback::new(move |_checked: bool| {
        state.update(|s| s.toggle_selected(id));
    });

    view! {
        <tr class="table__row" style="border-bottom: 1px solid #f1f3f5;">
            <TableCheckbox checked=checked on_change=handle_toggle />
            <td class="table__cell" style="padding: 8px 12px;">{order.order_no.clone()}</td>
            <td class="table__cell" style="padding: 8px 12px;">
                <span style="display: inline-flex; align-items: center; gap: 8px;">
                    {avatar(avatar_kind(&order.user))}
                    {order.user.clone()}
                </span>
            </td>
            <td class="table__cell" style="padding: 8px 12px;">{order.project.clone()}</td>
            <td class="table__cell" style="padding: 8px 12px;">{order.address.clone()}</td>
            <td class="table__cell" style="padding: 8px 12px;">
                <span style="display: inline-flex; align-items: center; gap: 6px; color: #495057;">
                    {icon("calendar")}
                    {order.date.clone()}
                </span>
            </td>
            <StatusCell
                status=Signal::derive({
                    let status = order.status.clone();
                    move || status.clone()
                })
                color_tag=Signal::derive({
                    let color = order.status_color.clone();
                    move || color.clone()
                })
            />
        </tr>
    }
}
