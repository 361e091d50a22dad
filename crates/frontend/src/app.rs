use crate::domain::a001_order::seed;
use crate::domain::a001_order::ui::OrderList;
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // The record collection arrives as a fully materialized snapshot; a
    // malformed one aborts startup instead of rendering an empty browser.
    let snapshot = seed::demo_snapshot();

    view! {
        <ThemeProvider>
            <OrderList snapshot=snapshot />
        </ThemeProvider>
    }
}
