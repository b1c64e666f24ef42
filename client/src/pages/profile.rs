//! Profile page showing the signed-in account.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::sign_out_button::SignOutButton;
use crate::routes::AppRoute;
use crate::state::auth::AuthState;

/// Label for the cached verification flag.
pub(crate) fn verification_label(verified: bool) -> &'static str {
    if verified { "Verified" } else { "Not verified" }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let email = move || auth.get().email().map(str::to_owned).unwrap_or_else(|| "(none)".to_owned());
    let uid = move || auth.get().session.map(|s| s.uid).unwrap_or_default();
    let status = move || verification_label(auth.get().is_verified());

    view! {
        <div class="profile-page">
            <header class="profile-page__header">
                <h1>"Profile"</h1>
                <nav class="profile-page__nav">
                    <A href=AppRoute::Dashboard.path()>"Dashboard"</A>
                    <SignOutButton/>
                </nav>
            </header>
            <dl class="profile-page__details">
                <dt>"Email"</dt>
                <dd>{email}</dd>
                <dt>"User ID"</dt>
                <dd>{uid}</dd>
                <dt>"Email status"</dt>
                <dd>{status}</dd>
            </dl>
        </div>
    }
}
