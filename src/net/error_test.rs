use super::*;

#[test]
fn banner_message_prefers_server_message() {
    let err = SubmitError::Rejected { message: Some("Mailbox full".to_owned()) };
    assert_eq!(err.banner_message(), "Mailbox full");

    let err = SubmitError::Status { status: 422, message: Some("Bad email".to_owned()) };
    assert_eq!(err.banner_message(), "Bad email");
}

#[test]
fn banner_message_falls_back_to_generic_text() {
    let cases = [
        SubmitError::Transport("offline".to_owned()),
        SubmitError::Status { status: 500, message: None },
        SubmitError::Decode("expected value".to_owned()),
        SubmitError::Rejected { message: None },
        SubmitError::Rejected { message: Some(String::new()) },
        SubmitError::Unavailable,
    ];
    for err in cases {
        assert_eq!(err.banner_message(), GENERIC_ERROR_MESSAGE, "{err:?}");
    }
}

#[test]
fn display_includes_status_code() {
    let err = SubmitError::Status { status: 503, message: None };
    assert_eq!(err.to_string(), "contact endpoint returned status 503");
}
