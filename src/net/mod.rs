//! Contact submission networking.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the `POST /contact` wire schema, `api` performs the real
//! request, `submission` sequences the UI around whichever submitter is
//! configured, and `error` maps failures onto banner text.

pub mod api;
pub mod error;
pub mod submission;
pub mod types;
