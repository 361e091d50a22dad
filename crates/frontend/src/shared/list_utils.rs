/// Generic helpers for list screens (search, sort, pagination, UI components)
use crate::shared::icons::icon;
use leptos::prelude::*;
use std::cmp::Ordering;
use wasm_bindgen::JsCast;

/// Trait for data types that support free-text search
pub trait Searchable {
    /// Whether the record matches the search query
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Trait for data types that support column sorting
pub trait Sortable {
    /// Compare two records by the given field key
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Filter a list by a search query. An empty query keeps everything.
pub fn filter_list<T: Searchable + Clone>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.trim().is_empty() {
        return items;
    }

    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Sort a list by the given field key
pub fn sort_list<T: Sortable>(items: &mut Vec<T>, field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending { cmp } else { cmp.reverse() }
    });
}

/// One page of a list plus the derived page metadata.
///
/// Pages are numbered from 1. `end_index` is exclusive and may run past the
/// list; `records` is always clipped to what actually exists.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<T> {
    pub total_pages: usize,
    pub start_index: usize,
    pub end_index: usize,
    pub records: Vec<T>,
}

/// Slice one page out of a list. A page past the end yields an empty slice.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> PageView<T> {
    let total_pages = (items.len() + page_size - 1) / page_size;
    let start_index = page.saturating_sub(1) * page_size;
    let end_index = start_index + page_size;

    let records = if start_index >= items.len() {
        Vec::new()
    } else {
        items[start_index..end_index.min(items.len())].to_vec()
    };

    PageView {
        total_pages,
        start_index,
        end_index,
        records,
    }
}

/// Sort indicator for a column header
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending { " ▲" } else { " ▼" }
    } else {
        " ⇅"
    }
}

/// Search input with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Current filter value (for display)
    #[prop(into)]
    value: Signal<String>,
    /// Callback invoked with the debounced filter value
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search".to_string()
    } else {
        placeholder
    };

    // Local input state (before debounce)
    let (input_value, set_input_value) = signal(String::new());

    let debounce_timeout = StoredValue::new(None::<i32>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        // Cancel the previous timer if one is pending
        if let Some(timeout_id) = debounce_timeout.get_value() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(timeout_id);
            }
        }

        let window = web_sys::window().expect("no window");
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            on_change.run(new_value.clone());
        }) as Box<dyn Fn()>);

        let timeout_id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref::<js_sys::Function>(),
                300,
            )
            .expect("setTimeout failed");

        closure.forget();
        debounce_timeout.set_value(Some(timeout_id));
    };

    let clear_filter = move |_| {
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    view! {
        <div class="search-input" style="position: relative; display: inline-flex; align-items: center;">
            <span style="position: absolute; left: 8px; display: inline-flex; color: #8a8a8a;">
                {icon("search")}
            </span>
            <input
                type="text"
                placeholder={placeholder}
                style=move || format!(
                    "width: 250px; padding: 6px 32px 6px 30px; border: 1px solid #ddd; border-radius: 8px; font-size: 14px; background: {};",
                    if is_filter_active() { "#fffbea" } else { "white" }
                )
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    handle_input_change(val);
                }
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button
                        style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; align-items: center; color: #666; line-height: 1;"
                        on:click=clear_filter
                        title="Clear"
                    >
                        {icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}
