//! Wire DTOs for the contact endpoint.
//!
//! DESIGN
//! ======
//! Shapes match `POST /contact`: a flat JSON body of the four form fields,
//! answered by `{ success, message? }`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use super::error::SubmitError;

/// Body of `POST /contact`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Response from `POST /contact`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    /// Optional server-provided text, shown on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ContactResponse {
    #[must_use]
    pub fn accepted() -> Self {
        Self { success: true, message: None }
    }

    /// Treat `success: false` as an error carrying the server's message.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Rejected`] when `success` is false.
    pub fn into_result(self) -> Result<Self, SubmitError> {
        if self.success { Ok(self) } else { Err(SubmitError::Rejected { message: self.message }) }
    }
}
