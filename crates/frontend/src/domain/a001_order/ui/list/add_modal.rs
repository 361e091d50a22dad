//! Add-order modal form

use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use contracts::domain::a001_order::{Order, OrderId};
use contracts::shared::validation::{sanitize_string, ValidationRules};
use leptos::prelude::*;

/// Status palette offered by the form: label + color tag pairs.
const STATUS_OPTIONS: &[(&str, &str)] = &[
    ("In Progress", "purple"),
    ("Completed", "green"),
    ("Pending", "blue"),
    ("Cancelled", "orange"),
];

fn color_for_status(status: &str) -> &'static str {
    STATUS_OPTIONS
        .iter()
        .find(|(label, _)| *label == status)
        .map(|(_, color)| *color)
        .unwrap_or("purple")
}

/// Modal form creating a new order record.
///
/// All text fields are required; values are sanitized before the record is
/// built. The new record carries a fresh id and the date "Just now".
#[component]
pub fn AddOrderModal(
    /// Called with the new record on submit
    on_add: Callback<Order>,
    /// Called when the modal should close
    on_close: Callback<()>,
) -> impl IntoView {
    let (order_no, set_order_no) = signal(String::new());
    let (user, set_user) = signal(String::new());
    let (project, set_project) = signal(String::new());
    let (address, set_address) = signal(String::new());
    let (status, set_status) = signal("In Progress".to_string());

    let (order_no_error, set_order_no_error) = signal(None::<String>);
    let (user_error, set_user_error) = signal(None::<String>);
    let (project_error, set_project_error) = signal(None::<String>);
    let (address_error, set_address_error) = signal(None::<String>);

    let validate = move || {
        let rules = ValidationRules::required();
        let checks = [
            (order_no.get(), "Order ID", set_order_no_error),
            (user.get(), "User name", set_user_error),
            (project.get(), "Project name", set_project_error),
            (address.get(), "Address", set_address_error),
        ];

        let mut ok = true;
        for (value, label, set_error) in checks {
            match rules.validate_string(&value, label) {
                Ok(()) => set_error.set(None),
                Err(message) => {
                    set_error.set(Some(message));
                    ok = false;
                }
            }
        }
        ok
    };

    let handle_submit = move |_| {
        if !validate() {
            return;
        }

        let chosen_status = status.get();
        let order = Order {
            id: OrderId::new_v4(),
            order_no: sanitize_string(&order_no.get()),
            user: sanitize_string(&user.get()),
            project: sanitize_string(&project.get()),
            address: sanitize_string(&address.get()),
            date: "Just now".to_string(),
            status_color: color_for_status(&chosen_status).to_string(),
            status: chosen_status,
        };

        on_add.run(order);
        on_close.run(());
    };

    let field_style = "width: 100%; padding: 8px 10px; border: 1px solid #ddd; border-radius: 8px; font-size: 14px; box-sizing: border-box;";
    let label_style = "display: block; margin: 10px 0 4px; font-size: 13px; font-weight: 500; color: #495057;";
    let error_style = "color: #d64545; font-size: 12px; margin-top: 3px;";

    let error_view = move |error: ReadSignal<Option<String>>| {
        move || {
            error.get().map(|message| {
                view! { <div class="form-error" style=error_style>{message}</div> }
            })
        }
    };

    view! {
        <ModalFrame
            on_close=on_close
            modal_style={"background: white; border-radius: 12px; padding: 20px; width: 420px; max-width: calc(100vw - 40px);".to_string()}
        >
            <div style="display: flex; align-items: center; justify-content: space-between; margin-bottom: 8px;">
                <h2 style="margin: 0; font-size: 1.1rem; font-weight: 600;">"Add New Order"</h2>
                <button
                    style="background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; color: #666;"
                    title="Close"
                    on:click=move |_| on_close.run(())
                >
                    {icon("x")}
                </button>
            </div>

            <label style=label_style>"Order ID"</label>
            <input
                type="text"
                style=field_style
                placeholder="#CM0000"
                prop:value=move || order_no.get()
                on:input=move |ev| {
                    set_order_no.set(event_target_value(&ev));
                    set_order_no_error.set(None);
                }
            />
            {error_view(order_no_error)}

            <label style=label_style>"User"</label>
            <input
                type="text"
                style=field_style
                prop:value=move || user.get()
                on:input=move |ev| {
                    set_user.set(event_target_value(&ev));
                    set_user_error.set(None);
                }
            />
            {error_view(user_error)}

            <label style=label_style>"Project"</label>
            <input
                type="text"
                style=field_style
                prop:value=move || project.get()
                on:input=move |ev| {
                    set_project.set(event_target_value(&ev));
                    set_project_error.set(None);
                }
            />
            {error_view(project_error)}

            <label style=label_style>"Address"</label>
            <input
                type="text"
                style=field_style
                prop:value=move || address.get()
                on:input=move |ev| {
                    set_address.set(event_target_value(&ev));
                    set_address_error.set(None);
                }
            />
            {error_view(address_error)}

            <label style=label_style>"Status"</label>
            <select
                style=field_style
                on:change=move |ev| set_status.set(event_target_value(&ev))
                prop:value=move || status.get()
            >
                {STATUS_OPTIONS
                    .iter()
                    .map(|(label, _)| {
                        view! {
                            <option value={label.to_string()} selected=move || status.get() == *label>
                                {label.to_string()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>

            <div style="display: flex; justify-content: flex-end; gap: 8px; margin-top: 16px;">
                <button
                    style="background: none; border: 1px solid #ddd; border-radius: 8px; padding: 8px 14px; font-size: 14px; cursor: pointer;"
                    on:click=move |_| on_close.run(())
                >
                    "Cancel"
                </button>
                <button
                    style="background: #1C1C1C; color: white; border: none; border-radius: 8px; padding: 8px 14px; font-size: 14px; cursor: pointer;"
                    on:click=handle_submit
                >
                    "Add Order"
                </button>
            </div>
        </ModalFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_form_status_has_a_palette_color() {
        assert_eq!(color_for_status("In Progress"), "purple");
        assert_eq!(color_for_status("Completed"), "green");
        assert_eq!(color_for_status("Pending"), "blue");
        assert_eq!(color_for_status("Cancelled"), "orange");
    }

    #[test]
    fn unknown_status_falls_back_to_the_default_color() {
        assert_eq!(color_for_status("Archived"), "purple");
    }
}
