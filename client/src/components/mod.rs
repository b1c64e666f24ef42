//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared auth/navigation state from Leptos context providers
//! installed by `app::App`.

pub mod route_gate;
pub mod sign_out_button;
