//! Status palette for the order table

use crate::shared::theme::{use_theme, Theme};
use leptos::prelude::*;

/// Hex color for a status color tag. The gray tone depends on the theme;
/// an unknown tag has no mapping and the caller renders unstyled.
pub fn status_color(tag: &str, theme: Theme) -> Option<&'static str> {
    match tag {
        "purple" => Some("#8A8CD9"),
        "green" => Some("#4AA785"),
        "blue" => Some("#59A8D4"),
        "orange" => Some("#FFC555"),
        "gray" => Some(if theme.is_dark() {
            "#FFFFFF66"
        } else {
            "#1C1C1C66"
        }),
        _ => None,
    }
}

/// Status cell: a colored dot next to the status label.
#[component]
pub fn StatusCell(
    /// Status label
    #[prop(into)]
    status: Signal<String>,
    /// Status color tag
    #[prop(into)]
    color_tag: Signal<String>,
) -> impl IntoView {
    let ctx = use_theme();

    let resolved = move || status_color(&color_tag.get(), ctx.theme.get());

    view! {
        <td class="table__cell table__cell--status" style="padding: 8px 12px;">
            <span style="display: inline-flex; align-items: center; gap: 6px;">
                <span
                    class="status-dot"
                    style=move || {
                        let color = resolved().unwrap_or("currentColor");
                        format!(
                            "width: 6px; height: 6px; border-radius: 50%; display: inline-block; background: {};",
                            color
                        )
                    }
                ></span>
                <span style=move || {
                    match resolved() {
                        Some(color) => format!("color: {};", color),
                        None => String::new(),
                    }
                }>
                    {move || status.get()}
                </span>
            </span>
        </td>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_resolve_to_hex_colors() {
        assert_eq!(status_color("purple", Theme::Light), Some("#8A8CD9"));
        assert_eq!(status_color("green", Theme::Dark), Some("#4AA785"));
    }

    #[test]
    fn gray_depends_on_the_theme() {
        assert_eq!(status_color("gray", Theme::Light), Some("#1C1C1C66"));
        assert_eq!(status_color("gray", Theme::Dark), Some("#FFFFFF66"));
    }

    #[test]
    fn unknown_tags_have_no_mapping() {
        assert_eq!(status_color("teal", Theme::Light), None);
        assert_eq!(status_color("", Theme::Dark), None);
    }
}
