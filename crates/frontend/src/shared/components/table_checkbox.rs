use leptos::prelude::*;

/// Checkbox cell for a table row.
///
/// Renders a `<td>` with the checkbox inside. Clicking the checkbox does not
/// trigger the row click (stop_propagation).
#[component]
pub fn TableCheckbox(
    /// Checkbox state signal
    checked: Signal<bool>,
    /// Callback invoked when the state changes
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <td
            class="table__cell table__cell--checkbox"
            on:click=|e| e.stop_propagation()
        >
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=checked
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    on_change.run(checked);
                }
            />
        </td>
    }
}
