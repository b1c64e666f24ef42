//! Verification-pending page.
//!
//! Shown to signed-in users whose email is not verified yet. "I've verified"
//! simply heads back to the dashboard; the guard reloads the session on the
//! way and sends the user back here if the provider still says unverified.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::sign_out_button::SignOutButton;
use crate::identity::firebase::FirebaseIdentity;
use crate::routes::AppRoute;

#[component]
pub fn VerifyPage() -> impl IntoView {
    let identity = expect_context::<FirebaseIdentity>();
    let auth = identity.auth();
    let navigate = use_navigate();

    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let email = move || auth.get().email().map(str::to_owned).unwrap_or_default();

    let on_resend = move |_| {
        if busy.get() {
            return;
        }
        let Some(session) = auth.get_untracked().session else {
            return;
        };
        busy.set(true);
        info.set("Sending...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let identity = identity.clone();
            leptos::task::spawn_local(async move {
                match identity.send_verification_email(&session).await {
                    Ok(()) => info.set("Verification email sent.".to_owned()),
                    Err(e) => info.set(e.user_message()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&identity, session);
        }
    };

    let on_continue = move |_| {
        navigate(AppRoute::Dashboard.path(), NavigateOptions::default());
    };

    view! {
        <div class="verify-page">
            <div class="auth-card">
                <h1>"Check your inbox"</h1>
                <p>
                    "We sent a verification link to "
                    <strong>{email}</strong>
                    ". Open it, then come back here."
                </p>
                <div class="auth-card__actions">
                    <button class="btn btn--primary" on:click=on_continue>
                        "I've verified my email"
                    </button>
                    <button class="btn btn--secondary" on:click=on_resend disabled=move || busy.get()>
                        "Resend email"
                    </button>
                    <SignOutButton/>
                </div>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
