//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its own form/session orchestration; access control is left
//! to the route gate that wraps it.

pub mod auth;
pub mod dashboard;
pub mod profile;
pub mod verify;

use leptos::prelude::*;

use self::auth::AuthPage;
use self::dashboard::DashboardPage;
use self::profile::ProfilePage;
use self::verify::VerifyPage;
use crate::routes::Page;

/// Render the page bound to a route table entry.
pub fn render(page: Page) -> AnyView {
    match page {
        Page::Auth => view! { <AuthPage/> }.into_any(),
        Page::Verify => view! { <VerifyPage/> }.into_any(),
        Page::Dashboard => view! { <DashboardPage/> }.into_any(),
        Page::Profile => view! { <ProfilePage/> }.into_any(),
    }
}
