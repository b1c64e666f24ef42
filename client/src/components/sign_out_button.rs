//! Sign-out button shared by the signed-in pages.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::identity::firebase::FirebaseIdentity;
use crate::routes::AppRoute;

/// Clears the session and returns to the sign-in page.
#[component]
pub fn SignOutButton() -> impl IntoView {
    let identity = expect_context::<FirebaseIdentity>();
    let navigate = use_navigate();

    let on_click = move |_| {
        identity.sign_out();
        navigate(AppRoute::Auth.path(), NavigateOptions::default());
    };

    view! {
        <button class="btn btn--secondary" on:click=on_click>
            "Sign out"
        </button>
    }
}
