//! Dashboard page for verified users.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::sign_out_button::SignOutButton;
use crate::routes::AppRoute;
use crate::state::auth::AuthState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = move || auth.get().email().map(str::to_owned).unwrap_or_default();

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Dashboard"</h1>
                <nav class="dashboard-page__nav">
                    <A href=AppRoute::Profile.path()>"Profile"</A>
                    <SignOutButton/>
                </nav>
            </header>
            <p class="dashboard-page__welcome">"Welcome, " {email} "."</p>
        </div>
    }
}
