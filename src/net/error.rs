//! Contact submission failures.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is surfaced to the visitor as one banner line: the
//! server's own message when it sent a non-empty one, otherwise a generic
//! retry prompt. No failure is retried automatically.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Banner text used when the server gave no usable message.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

/// Error returned by a contact submitter.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The request never produced a response.
    #[error("contact request failed: {0}")]
    Transport(String),
    /// The endpoint answered with a non-2xx status.
    #[error("contact endpoint returned status {status}")]
    Status { status: u16, message: Option<String> },
    /// A 2xx response whose body was not a contact response.
    #[error("invalid contact response: {0}")]
    Decode(String),
    /// The endpoint answered `success: false`.
    #[error("contact submission rejected")]
    Rejected { message: Option<String> },
    /// Real submission requested outside a browser build.
    #[error("contact endpoint is only reachable from the browser")]
    Unavailable,
}

impl SubmitError {
    /// Text for the error banner.
    #[must_use]
    pub fn banner_message(&self) -> String {
        match self {
            Self::Status { message: Some(message), .. } | Self::Rejected { message: Some(message) }
                if !message.is_empty() =>
            {
                message.clone()
            }
            _ => GENERIC_ERROR_MESSAGE.to_owned(),
        }
    }
}
