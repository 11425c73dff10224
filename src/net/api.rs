//! HTTP submitter for the contact endpoint.
//!
//! Client-side (csr): real `POST` via `gloo-net`.
//! Native builds: returns [`SubmitError::Unavailable`] since the request is
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses still have their body parsed so a server-provided
//! `message` reaches the error banner.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::SubmitError;
use super::submission::Submitter;
use super::types::{ContactRequest, ContactResponse};

/// Path the contact form posts to when no endpoint is configured explicitly.
pub const DEFAULT_CONTACT_ENDPOINT: &str = "/contact";

/// Submits the contact form to a real endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpSubmitter {
    endpoint: String,
}

impl HttpSubmitter {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpSubmitter {
    fn default() -> Self {
        Self::new(DEFAULT_CONTACT_ENDPOINT)
    }
}

impl Submitter for HttpSubmitter {
    async fn submit(&self, request: &ContactRequest) -> Result<ContactResponse, SubmitError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .json(request)
                .map_err(|e| SubmitError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| SubmitError::Transport(e.to_string()))?;
            let status = resp.status();
            let body = resp.json::<ContactResponse>().await.map_err(|e| e.to_string());
            classify_response(status, body)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&self.endpoint, request);
            Err(SubmitError::Unavailable)
        }
    }
}

/// Map an HTTP status and parsed body onto the submission outcome.
#[cfg(any(test, feature = "csr"))]
fn classify_response(status: u16, body: Result<ContactResponse, String>) -> Result<ContactResponse, SubmitError> {
    let ok = (200..300).contains(&status);
    match (ok, body) {
        (true, Ok(response)) => Ok(response),
        (true, Err(reason)) => Err(SubmitError::Decode(reason)),
        (false, Ok(response)) => Err(SubmitError::Status { status, message: response.message }),
        (false, Err(_)) => Err(SubmitError::Status { status, message: None }),
    }
}
