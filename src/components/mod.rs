//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the contact form and projects gallery while
//! reading/writing shared state from Leptos context providers.

pub mod contact_form;
pub mod project_gallery;
pub mod project_modal;
