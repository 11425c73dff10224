use super::*;

#[test]
fn default_submitter_posts_to_contact_path() {
    assert_eq!(HttpSubmitter::default().endpoint(), "/contact");
}

#[test]
fn classify_response_accepts_2xx_body() {
    let body = Ok(ContactResponse::accepted());
    assert_eq!(classify_response(200, body), Ok(ContactResponse::accepted()));
}

#[test]
fn classify_response_keeps_unsuccessful_body_for_caller() {
    let body = Ok(ContactResponse { success: false, message: None });
    assert_eq!(classify_response(201, body), Ok(ContactResponse { success: false, message: None }));
}

#[test]
fn classify_response_reports_undecodable_2xx_body() {
    let result = classify_response(200, Err("expected value at line 1".to_owned()));
    assert_eq!(result, Err(SubmitError::Decode("expected value at line 1".to_owned())));
}

#[test]
fn classify_response_carries_message_from_error_status() {
    let body = Ok(ContactResponse { success: false, message: Some("Rate limited".to_owned()) });
    assert_eq!(
        classify_response(429, body),
        Err(SubmitError::Status { status: 429, message: Some("Rate limited".to_owned()) })
    );
}

#[test]
fn classify_response_error_status_without_body() {
    assert_eq!(
        classify_response(502, Err("eof".to_owned())),
        Err(SubmitError::Status { status: 502, message: None })
    );
}

#[cfg(not(feature = "csr"))]
#[test]
fn http_submitter_is_unavailable_natively() {
    let request = ContactRequest::default();
    let result = futures::executor::block_on(HttpSubmitter::default().submit(&request));
    assert_eq!(result, Err(SubmitError::Unavailable));
}
