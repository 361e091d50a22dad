//! Select-all checkbox for the table header

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// How much of the visible rows is currently selected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectionState {
    None,
    Some,
    All,
}

/// Header checkbox toggling between "select all" and "clear all".
///
/// Shows three states: unchecked, checked and indeterminate (the last one set
/// through the DOM property, it has no HTML attribute).
#[component]
pub fn TableHeaderCheckbox(
    /// Selection state of the visible rows
    #[prop(into)]
    state: Signal<SelectionState>,

    /// Callback when toggled (true = select all, false = clear all)
    on_change: Callback<bool>,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move |_| {
        if let Some(input) = checkbox_ref.get() {
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(matches!(state.get(), SelectionState::Some));
            }
        }
    });

    view! {
        <th class="table__header table__header--checkbox" style="padding: 8px 12px;">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || matches!(state.get(), SelectionState::All)
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    on_change.run(checked);
                }
            />
        </th>
    }
}
