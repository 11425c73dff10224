//! Utility helpers shared across portfolio UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate validation rules and browser concerns from state
//! and component logic so both can be tested natively.

pub mod reveal;
pub mod validation;
pub mod visibility;
