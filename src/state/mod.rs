//! Client-side state modules.
//!
//! DESIGN
//! ======
//! The contact form and the projects gallery are independent; each owns one
//! state struct provided to components as an `RwSignal` via context.

pub mod contact;
pub mod gallery;
