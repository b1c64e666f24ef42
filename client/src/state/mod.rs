//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern so pages and the route gate depend only on the
//! small model they read.

pub mod auth;
pub mod navigation;
