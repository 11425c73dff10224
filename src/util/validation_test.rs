use super::*;

// =============================================================
// validate_required
// =============================================================

#[test]
fn validate_required_rejects_blank_values() {
    for blank in ["", " ", "\t\n", "\u{a0}\u{3000}", "\u{feff}"] {
        assert_eq!(validate_required(blank, NAME_REQUIRED), Err(NAME_REQUIRED), "{blank:?}");
    }
}

#[test]
fn validate_required_accepts_non_blank_values() {
    assert_eq!(validate_required("Ada", SUBJECT_REQUIRED), Ok(()));
    assert_eq!(validate_required("  x  ", SUBJECT_REQUIRED), Ok(()));
}

#[test]
fn validate_required_reports_configured_message() {
    assert_eq!(validate_required("", MESSAGE_REQUIRED), Err("Please enter your message"));
}

// =============================================================
// validate_email
// =============================================================

#[test]
fn validate_email_empty_requires_email() {
    assert_eq!(validate_email(""), Err("Please enter your email"));
    assert_eq!(validate_email("   "), Err("Please enter your email"));
}

#[test]
fn validate_email_rejects_malformed_address() {
    assert_eq!(validate_email("not-an-email"), Err("Please enter a valid email address"));
}

#[test]
fn validate_email_accepts_plain_address() {
    assert_eq!(validate_email("user@example.com"), Ok(()));
}

#[test]
fn validate_email_checks_trimmed_value() {
    assert_eq!(validate_email("  user@example.com \n"), Ok(()));
}

// =============================================================
// is_valid_email
// =============================================================

#[test]
fn is_valid_email_requires_dot_inside_domain() {
    assert!(is_valid_email("a@b.c"));
    assert!(is_valid_email("a@b.c.d"));
    assert!(is_valid_email("a@.b.c"));
    assert!(!is_valid_email("a@bc"));
    assert!(!is_valid_email("a@.bc"));
    assert!(!is_valid_email("a@bc."));
}

#[test]
fn is_valid_email_rejects_extra_at_and_whitespace() {
    assert!(!is_valid_email("a@b@c.d"));
    assert!(!is_valid_email("@b.c"));
    assert!(!is_valid_email("a b@c.d"));
    assert!(!is_valid_email("a@c .d"));
}

#[test]
fn is_valid_email_allows_non_ascii_non_space_characters() {
    assert!(is_valid_email("jos\u{e9}@caf\u{e9}.fr"));
}

#[test]
fn trim_input_keeps_inner_whitespace() {
    assert_eq!(trim_input("\u{feff} a b \u{a0}"), "a b");
}
