use leptos::prelude::*;

pub fn icon(name: &str) -> AnyView {
    match name {
        "search" => view! {
            <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <circle cx="11" cy="11" r="8"/>
                <path d="m21 21-4.35-4.35"/>
            </svg>
        }.into_any(),
        "filter" => view! {
            <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <polygon points="22 3 2 3 10 12.46 10 19 14 21 14 12.46 22 3"/>
            </svg>
        }.into_any(),
        "plus" => view! {
            <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <path d="M12 5v14"/>
                <path d="M5 12h14"/>
            </svg>
        }.into_any(),
        "x" => view! {
            <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <path d="M18 6 6 18"/>
                <path d="m6 6 12 12"/>
            </svg>
        }.into_any(),
        "calendar" => view! {
            <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <rect x="3" y="4" width="18" height="18" rx="2"/>
                <path d="M16 2v4"/>
                <path d="M8 2v4"/>
                <path d="M3 10h18"/>
            </svg>
        }.into_any(),
        "chevron-down" => view! {
            <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <polyline points="6 9 12 15 18 9"/>
            </svg>
        }.into_any(),
        "chevron-left" => view! {
            <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <polyline points="15 18 9 12 15 6"/>
            </svg>
        }.into_any(),
        "chevron-right" => view! {
            <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <polyline points="9 18 15 12 9 6"/>
            </svg>
        }.into_any(),
        "moon" => view! {
            <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"/>
            </svg>
        }.into_any(),
        "sun" => view! {
            <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <circle cx="12" cy="12" r="4"/>
                <path d="M12 2v2"/>
                <path d="M12 20v2"/>
                <path d="m4.93 4.93 1.41 1.41"/>
                <path d="m17.66 17.66 1.41 1.41"/>
                <path d="M2 12h2"/>
                <path d="M20 12h2"/>
                <path d="m6.34 17.66-1.41 1.41"/>
                <path d="m19.07 4.93-1.41 1.41"/>
            </svg>
        }.into_any(),
        _ => view! {
            <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <circle cx="12" cy="12" r="10"/>
                <path d="M12 8v4l3 3"/>
            </svg>
        }.into_any(),
    }
}

/// Round avatar glyph for a user row. The variant picks the head/shoulder
/// accent color so adjacent rows do not all look identical.
pub fn avatar(variant: &str) -> AnyView {
    let accent = match variant {
        "woman" => "#E5C5A5",
        "woman-two" => "#B1A0C7",
        "man" => "#95A4FC",
        "man-two" => "#A8C5DA",
        _ => "#C6C7F8",
    };
    view! {
        <svg width="24" height="24" viewBox="0 0 24 24" aria-hidden="true">
            <circle cx="12" cy="12" r="12" fill=accent opacity="0.35"/>
            <circle cx="12" cy="9" r="4" fill=accent/>
            <path d="M4 21a8 8 0 0 1 16 0" fill=accent/>
        </svg>
    }
    .into_any()
}

/// Avatar variant for a user name; unknown names fall back to the neutral
/// "user" glyph.
pub fn avatar_kind(user_name: &str) -> &'static str {
    match user_name {
        "Natali Craig" => "woman",
        "Kate Morrison" => "woman-two",
        "Drew Cano" => "man",
        "Orlando Diggs" => "man-two",
        "Andi Lane" => "woman",
        "Sarah Johnson" => "woman-two",
        "Michael Brown" => "man",
        "Emily Davis" => "woman",
        "David Wilson" => "man-two",
        "Lisa Anderson" => "woman-two",
        "Robert Taylor" => "man",
        "Jennifer Martinez" => "woman",
        "Christopher Lee" => "man-two",
        "Amanda Garcia" => "woman-two",
        "Matthew Rodriguez" => "man",
        "Ashley White" => "woman",
        "Daniel Thompson" => "man-two",
        "Jessica Clark" => "woman-two",
        "Andrew Lewis" => "man",
        "Stephanie Walker" => "woman",
        "Kevin Hall" => "man-two",
        "Nicole Allen" => "woman-two",
        "Ryan Young" => "man",
        "Michelle King" => "woman",
        "Brandon Wright" => "man-two",
        "Rachel Lopez" => "woman-two",
        "Tyler Hill" => "man",
        "Samantha Scott" => "woman",
        _ => "user",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_users_map_to_a_variant() {
        assert_eq!(avatar_kind("Natali Craig"), "woman");
        assert_eq!(avatar_kind("Drew Cano"), "man");
    }

    #[test]
    fn unknown_users_fall_back_to_neutral() {
        assert_eq!(avatar_kind("Somebody Else"), "user");
    }
}
