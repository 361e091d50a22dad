//! Input validation and sanitization for user-entered fields

/// Validation rules for a form field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min_length: None,
            max_length: None,
        }
    }

    /// Create validation rules for a required field
    pub const fn required() -> Self {
        Self {
            required: true,
            min_length: None,
            max_length: None,
        }
    }

    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        if self.required && value.trim().is_empty() {
            return Err(format!("{} is required", field_label));
        }

        if let Some(min) = self.min_length {
            if value.chars().count() < min {
                return Err(format!(
                    "{} must contain at least {} characters",
                    field_label, min
                ));
            }
        }

        if let Some(max) = self.max_length {
            if value.chars().count() > max {
                return Err(format!(
                    "{} must not exceed {} characters",
                    field_label, max
                ));
            }
        }

        Ok(())
    }
}

/// Sanitize a string by dropping markup and dangerous characters.
///
/// Script blocks are removed entirely (body included); other tags are
/// stripped keeping their inner text; the remaining `<>'"&` characters are
/// dropped and the result is trimmed.
pub fn sanitize_string(input: &str) -> String {
    let without_tags = strip_tags(&strip_script_blocks(input));
    without_tags
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | '\'' | '"' | '&'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Sanitize a search query and cap it at 100 characters
pub fn validate_search_query(query: &str) -> String {
    let sanitized = sanitize_string(query);
    if sanitized.chars().count() > 100 {
        sanitized.chars().take(100).collect()
    } else {
        sanitized
    }
}

/// Remove complete `<...>` spans, keeping their inner text out of the tag.
/// A `<` with no closing `>` is left for the stray-character filter.
fn strip_tags(input: &str) -> String {
    let mut out = String::new();
    let mut rest = input;
    while let Some(i) = rest.find('<') {
        match rest[i..].find('>') {
            Some(j) => {
                out.push_str(&rest[..i]);
                rest = &rest[i + j + 1..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}

/// Remove `<script>...</script>` spans, ASCII case-insensitive.
fn strip_script_blocks(input: &str) -> String {
    const OPEN: &[u8] = b"<script";
    const CLOSE: &[u8] = b"</script>";

    let mut out = String::new();
    let mut pos = 0;
    while let Some(start) = find_ascii_ci(input.as_bytes(), OPEN, pos) {
        out.push_str(&input[pos..start]);
        match find_ascii_ci(input.as_bytes(), CLOSE, start) {
            Some(end) => pos = end + CLOSE.len(),
            None => return out,
        }
    }
    out.push_str(&input[pos..]);
    out
}

/// Byte offset of `needle` in `haystack` at or after `from`, ignoring ASCII
/// case. Needles are ASCII, so returned offsets land on char boundaries.
fn find_ascii_ci(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if from + needle.len() > haystack.len() {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|w| w.eq_ignore_ascii_case(needle))
        .map(|i| from + i)
}
