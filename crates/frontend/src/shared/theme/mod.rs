//! Light/dark theme context
//!
//! The status palette resolves its colors per theme, so the theme lives in a
//! context provided at the top of the app.

use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
    }

    pub fn toggle(&self) {
        self.theme.update(|theme| {
            *theme = match theme {
                Theme::Light => Theme::Dark,
                Theme::Dark => Theme::Light,
            }
        });
    }
}

/// Provide the theme context to the whole app.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let theme = RwSignal::new(Theme::Light);
    provide_context(ThemeContext { theme });

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
        .expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Light/dark toggle button.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            class="theme-toggle"
            style="background: none; border: 1px solid #ddd; border-radius: 8px; padding: 6px; cursor: pointer; display: inline-flex; align-items: center;"
            title="Toggle theme"
            on:click=move |_| ctx.toggle()
        >
            {move || {
                if ctx.theme.get().is_dark() {
                    icon("sun")
                } else {
                    icon("moon")
                }
            }}
        </button>
    }
}
