//! Contact-field validation rules.
//!
//! Each rule returns the fixed, field-specific message the form shows inline
//! when the value is rejected. Values are trimmed with browser whitespace
//! semantics before any check runs.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

pub const NAME_REQUIRED: &str = "Please enter your name";
pub const EMAIL_REQUIRED: &str = "Please enter your email";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const SUBJECT_REQUIRED: &str = "Please enter a subject";
pub const MESSAGE_REQUIRED: &str = "Please enter your message";

/// Whitespace as matched by `\s` and stripped by `String.prototype.trim`.
#[must_use]
pub fn is_js_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Trim leading and trailing whitespace from raw input.
#[must_use]
pub fn trim_input(value: &str) -> &str {
    value.trim_matches(is_js_whitespace)
}

/// Reject values that are empty after trimming.
///
/// # Errors
///
/// Returns `message` when the trimmed value is empty.
pub fn validate_required(value: &str, message: &'static str) -> Result<(), &'static str> {
    if trim_input(value).is_empty() { Err(message) } else { Ok(()) }
}

/// Reject empty or malformed email addresses.
///
/// # Errors
///
/// Returns [`EMAIL_REQUIRED`] for blank input and [`EMAIL_INVALID`] when the
/// trimmed value is not shaped like `local@domain.tld`.
pub fn validate_email(value: &str) -> Result<(), &'static str> {
    let trimmed = trim_input(value);
    if trimmed.is_empty() {
        return Err(EMAIL_REQUIRED);
    }
    if !is_valid_email(trimmed) {
        return Err(EMAIL_INVALID);
    }
    Ok(())
}

/// Match `^[^\s@]+@[^\s@]+\.[^\s@]+$`.
///
/// Exactly one `@`, no whitespace anywhere, a non-empty local part, and a
/// domain containing a `.` with at least one character on each side.
#[must_use]
pub fn is_valid_email(candidate: &str) -> bool {
    let excluded = |c: char| c == '@' || is_js_whitespace(c);
    let Some((local, domain)) = candidate.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.chars().any(excluded) || domain.chars().any(excluded) {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
