use crate::shared::date_utils::date_sort_key;
use crate::shared::list_utils::{filter_list, paginate, sort_list, PageView, Searchable, Sortable};
use chrono::Utc;
use contracts::domain::a001_order::{Order, OrderId, OrdersSnapshot};
use leptos::prelude::*;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Sentinel status filter matching every record
pub const STATUS_FILTER_ALL: &str = "all";

/// Fixed page size of the order table
pub const PAGE_SIZE: usize = 10;

impl Searchable for Order {
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.to_lowercase();
        [
            &self.order_no,
            &self.user,
            &self.project,
            &self.address,
            &self.status,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

impl Sortable for Order {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        let cmp = match field {
            "order_no" => self.order_no_numeric().cmp(&other.order_no_numeric()),
            "date" => {
                let now = Utc::now();
                date_sort_key(&self.date, now).cmp(&date_sort_key(&other.date, now))
            }
            "user" => self.user.to_lowercase().cmp(&other.user.to_lowercase()),
            "project" => self.project.to_lowercase().cmp(&other.project.to_lowercase()),
            "address" => self.address.to_lowercase().cmp(&other.address.to_lowercase()),
            "status" => self.status.to_lowercase().cmp(&other.status.to_lowercase()),
            _ => Ordering::Equal,
        };
        // Tie-break on the id keeps the comparator total, so equal keys come
        // out in one reproducible order regardless of sort stability.
        cmp.then_with(|| self.id.cmp(&other.id))
    }
}

/// State of the order list screen.
///
/// The record store (`orders`) only ever grows by prepending through
/// [`OrderListState::add_order`]; everything the table shows is derived from
/// it synchronously.
#[derive(Clone, Debug)]
pub struct OrderListState {
    pub title: String,
    pub orders: Vec<Order>,
    pub search_term: String,
    pub status_filter: String,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub selected_ids: HashSet<OrderId>,
    pub page: usize,
    pub page_size: usize,
}

impl OrderListState {
    /// Build the state from the externally supplied snapshot. There is no
    /// default-empty constructor: a missing snapshot must fail upstream, not
    /// degrade into an empty table here.
    pub fn from_snapshot(snapshot: OrdersSnapshot) -> Self {
        Self {
            title: snapshot.title,
            orders: snapshot.data,
            search_term: String::new(),
            status_filter: STATUS_FILTER_ALL.to_string(),
            sort_field: String::new(),
            sort_ascending: true,
            selected_ids: HashSet::new(),
            page: 1,
            page_size: PAGE_SIZE,
        }
    }

    /// Change the search term. Narrowing the view moves the user back to the
    /// first page.
    pub fn set_search_term(&mut self, term: String) {
        self.search_term = term;
        self.page = 1;
    }

    /// Change the status filter ([`STATUS_FILTER_ALL`] or an exact status).
    /// Resets to the first page like a search change.
    pub fn set_status_filter(&mut self, status: String) {
        self.status_filter = status;
        self.page = 1;
    }

    /// Toggle sorting on a column: the active field flips direction, a new
    /// field starts ascending. Pagination stays where it is.
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field.to_string();
            self.sort_ascending = true;
        }
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Toggle one row in or out of the selection.
    pub fn toggle_selected(&mut self, id: OrderId) {
        if !self.selected_ids.remove(&id) {
            self.selected_ids.insert(id);
        }
    }

    /// Select every record passing the current filter, or clear the selection
    /// if exactly that set is already selected.
    ///
    /// The selection is a plain id set captured at this moment: ids that fall
    /// out of a later filter change stay selected and are not reconciled.
    pub fn toggle_select_all(&mut self) {
        let filtered_ids: HashSet<OrderId> =
            self.filtered_sorted().iter().map(|order| order.id).collect();
        if self.selected_ids == filtered_ids {
            self.selected_ids.clear();
        } else {
            self.selected_ids = filtered_ids;
        }
    }

    /// Prepend a new order to the record store.
    pub fn add_order(&mut self, order: Order) {
        self.orders.insert(0, order);
    }

    /// Distinct status values present in the store, in first-seen order.
    pub fn unique_statuses(&self) -> Vec<String> {
        let mut statuses = Vec::new();
        for order in &self.orders {
            if !statuses.contains(&order.status) {
                statuses.push(order.status.clone());
            }
        }
        statuses
    }

    /// The filtered-and-sorted view of the store.
    ///
    /// A record passes when the search term (empty, or a case-insensitive
    /// substring of order no / user / project / address / status) and the
    /// status filter (the sentinel, or an exact case-sensitive match) both
    /// hold. Without an active sort field, records keep store order.
    pub fn filtered_sorted(&self) -> Vec<Order> {
        let by_status: Vec<Order> = self
            .orders
            .iter()
            .filter(|order| {
                self.status_filter == STATUS_FILTER_ALL || order.status == self.status_filter
            })
            .cloned()
            .collect();

        let mut result = filter_list(by_status, &self.search_term);

        if !self.sort_field.is_empty() {
            sort_list(&mut result, &self.sort_field, self.sort_ascending);
        }

        result
    }

    /// The current page of the filtered-and-sorted view.
    pub fn paged(&self) -> PageView<Order> {
        paginate(&self.filtered_sorted(), self.page, self.page_size)
    }
}

/// Create state within component scope instead of thread-local.
/// This ensures state is properly disposed when the component unmounts.
pub fn create_state(snapshot: OrdersSnapshot) -> RwSignal<OrderListState> {
    RwSignal::new(OrderListState::from_snapshot(snapshot))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(no: &str, user: &str, status: &str, date: &str) -> Order {
        Order {
            id: OrderId::new_v4(),
            order_no: no.to_string(),
            user: user.to_string(),
            project: "Landing Page".to_string(),
            address: "Meadow Lane Oakland".to_string(),
            date: date.to_string(),
            status: status.to_string(),
            status_color: "purple".to_string(),
        }
    }

    fn snapshot(data: Vec<Order>) -> OrdersSnapshot {
        OrdersSnapshot {
            title: "Order List".to_string(),
            data,
        }
    }

    fn state_with(data: Vec<Order>) -> OrderListState {
        OrderListState::from_snapshot(snapshot(data))
    }

    fn sample() -> OrderListState {
        state_with(vec![
            order("#CM9804", "John Doe", "In Progress", "Just now"),
            order("#CM9801", "Jane Smith", "Completed", "Yesterday"),
            order("#CM9803", "Bob Johnson", "Pending", "Feb 2, 2023"),
            order("#CM9802", "Kate Morrison", "Completed", "1 hour ago"),
        ])
    }

    #[test]
    fn search_matches_substring_across_fields() {
        let mut state = sample();
        state.set_search_term("John".to_string());

        let users: Vec<_> = state
            .filtered_sorted()
            .into_iter()
            .map(|o| o.user)
            .collect();
        assert_eq!(users, vec!["John Doe", "Bob Johnson"]);
    }

    #[test]
    fn search_is_case_insensitive_and_covers_every_field() {
        let mut state = sample();

        state.set_search_term("cm9801".to_string());
        assert_eq!(state.filtered_sorted().len(), 1);

        state.set_search_term("landing".to_string());
        assert_eq!(state.filtered_sorted().len(), 4);

        state.set_search_term("pending".to_string());
        assert_eq!(state.filtered_sorted()[0].status, "Pending");
    }

    #[test]
    fn status_filter_is_exact_and_case_sensitive() {
        let mut state = sample();

        state.set_status_filter("Completed".to_string());
        assert_eq!(state.filtered_sorted().len(), 2);

        state.set_status_filter("completed".to_string());
        assert!(state.filtered_sorted().is_empty());

        state.set_status_filter(STATUS_FILTER_ALL.to_string());
        assert_eq!(state.filtered_sorted().len(), 4);
    }

    #[test]
    fn search_and_status_predicates_combine() {
        let mut state = sample();
        state.set_search_term("john".to_string());
        state.set_status_filter("Completed".to_string());
        assert!(state.filtered_sorted().is_empty());

        state.set_search_term("kate".to_string());
        let users: Vec<_> = state
            .filtered_sorted()
            .into_iter()
            .map(|o| o.user)
            .collect();
        assert_eq!(users, vec!["Kate Morrison"]);
    }

    #[test]
    fn order_no_sorts_numerically() {
        let mut state = sample();
        state.toggle_sort("order_no");

        let nos: Vec<_> = state
            .filtered_sorted()
            .into_iter()
            .map(|o| o.order_no)
            .collect();
        assert_eq!(nos, vec!["#CM9801", "#CM9802", "#CM9803", "#CM9804"]);

        state.toggle_sort("order_no");
        let nos: Vec<_> = state
            .filtered_sorted()
            .into_iter()
            .map(|o| o.order_no)
            .collect();
        assert_eq!(nos, vec!["#CM9804", "#CM9803", "#CM9802", "#CM9801"]);
    }

    #[test]
    fn date_sorts_by_derived_timestamp() {
        let mut state = sample();
        state.toggle_sort("date");

        let dates: Vec<_> = state
            .filtered_sorted()
            .into_iter()
            .map(|o| o.date)
            .collect();
        assert_eq!(dates, vec!["Feb 2, 2023", "Yesterday", "1 hour ago", "Just now"]);
    }

    #[test]
    fn unparseable_dates_sort_first_ascending() {
        let mut state = state_with(vec![
            order("#CM9801", "Jane Smith", "Completed", "Just now"),
            order("#CM9802", "John Doe", "Completed", "garbage"),
        ]);
        state.toggle_sort("date");
        assert_eq!(state.filtered_sorted()[0].date, "garbage");
    }

    #[test]
    fn text_fields_sort_case_insensitively() {
        let mut state = state_with(vec![
            order("#CM9801", "bob", "Completed", "Just now"),
            order("#CM9802", "Alice", "Completed", "Just now"),
        ]);
        state.toggle_sort("user");
        assert_eq!(state.filtered_sorted()[0].user, "Alice");
    }

    #[test]
    fn no_sort_field_keeps_store_order() {
        let state = sample();
        let nos: Vec<_> = state
            .filtered_sorted()
            .into_iter()
            .map(|o| o.order_no)
            .collect();
        assert_eq!(nos, vec!["#CM9804", "#CM9801", "#CM9803", "#CM9802"]);
    }

    #[test]
    fn equal_sort_keys_fall_back_to_id_order() {
        let a = order("#CM9801", "Same Name", "Completed", "Just now");
        let b = order("#CM9802", "Same Name", "Completed", "Just now");
        let expected_first = a.id.min(b.id);

        let mut state = state_with(vec![a, b]);
        state.toggle_sort("user");
        assert_eq!(state.filtered_sorted()[0].id, expected_first);

        // Deterministic regardless of the store order of the equal pair
        state.orders.reverse();
        assert_eq!(state.filtered_sorted()[0].id, expected_first);
    }

    #[test]
    fn changing_filters_resets_the_page_but_sorting_does_not() {
        let mut state = sample();
        state.set_page(2);

        state.toggle_sort("user");
        assert_eq!(state.page, 2);

        state.set_search_term("a".to_string());
        assert_eq!(state.page, 1);

        state.set_page(2);
        state.set_status_filter("Completed".to_string());
        assert_eq!(state.page, 1);
    }

    #[test]
    fn pagination_slices_the_filtered_view() {
        let orders: Vec<Order> = (1..=25)
            .map(|i| {
                order(
                    &format!("#CM{:04}", i),
                    "Jane Smith",
                    "Completed",
                    "Just now",
                )
            })
            .collect();
        let mut state = state_with(orders);

        let page = state.paged();
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.records.len(), 10);

        state.set_page(3);
        let page = state.paged();
        assert_eq!(page.start_index, 20);
        assert_eq!(page.end_index, 30);
        assert_eq!(page.records.len(), 5);

        state.set_page(9);
        assert!(state.paged().records.is_empty());
    }

    #[test]
    fn added_orders_land_at_the_head_of_the_store_and_view() {
        let mut state = sample();
        let new_order = order("#CM9900", "Andi Lane", "In Progress", "Just now");
        let new_id = new_order.id;

        state.add_order(new_order);
        assert_eq!(state.orders[0].id, new_id);
        assert_eq!(state.filtered_sorted()[0].id, new_id);
        assert_eq!(state.paged().records[0].id, new_id);
    }

    #[test]
    fn toggle_selected_flips_membership() {
        let mut state = sample();
        let id = state.orders[0].id;

        state.toggle_selected(id);
        assert!(state.selected_ids.contains(&id));

        state.toggle_selected(id);
        assert!(!state.selected_ids.contains(&id));
    }

    #[test]
    fn select_all_toggles_between_full_filtered_set_and_empty() {
        let mut state = sample();

        state.toggle_select_all();
        assert_eq!(state.selected_ids.len(), 4);

        state.toggle_select_all();
        assert!(state.selected_ids.is_empty());

        state.toggle_select_all();
        assert_eq!(state.selected_ids.len(), 4);
    }

    #[test]
    fn select_all_is_scoped_to_the_filtered_view() {
        let mut state = sample();
        state.set_status_filter("Completed".to_string());

        state.toggle_select_all();
        assert_eq!(state.selected_ids.len(), 2);

        // A partial selection is replaced, not cleared
        state.set_status_filter(STATUS_FILTER_ALL.to_string());
        state.toggle_select_all();
        assert_eq!(state.selected_ids.len(), 4);
    }

    #[test]
    fn selection_keeps_ids_that_fall_outside_a_changed_filter() {
        let mut state = sample();
        state.set_status_filter("Completed".to_string());
        state.toggle_select_all();
        let selected = state.selected_ids.clone();

        state.set_status_filter("Pending".to_string());
        assert_eq!(state.selected_ids, selected);
    }

    #[test]
    fn unique_statuses_keep_first_seen_order() {
        let state = sample();
        assert_eq!(
            state.unique_statuses(),
            vec!["In Progress", "Completed", "Pending"]
        );
    }

    #[test]
    fn derived_views_are_pure_in_the_state() {
        let state = sample();
        assert_eq!(state.filtered_sorted(), state.filtered_sorted());
        assert_eq!(state.paged(), state.paged());
    }
}
