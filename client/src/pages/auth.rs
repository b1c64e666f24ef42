//! Sign-in page with an email + password form and a create-account mode.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::identity::firebase::FirebaseIdentity;
use crate::routes::AppRoute;

pub(crate) const MIN_PASSWORD_LEN: usize = 6;

/// Which form action the page submits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    pub(crate) fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }

    /// Where to go after the provider accepts the form. The guard makes the
    /// final call, so a fresh unverified sign-in bound for the dashboard still
    /// ends on `/verify`.
    pub(crate) fn next_route(self) -> AppRoute {
        match self {
            Self::SignIn => AppRoute::Dashboard,
            Self::SignUp => AppRoute::Verify,
        }
    }

    fn submit_label(self) -> &'static str {
        match self {
            Self::SignIn => "Sign in",
            Self::SignUp => "Create account",
        }
    }

    fn toggle_label(self) -> &'static str {
        match self {
            Self::SignIn => "Need an account? Create one",
            Self::SignUp => "Already registered? Sign in",
        }
    }

    fn pending_message(self) -> &'static str {
        match self {
            Self::SignIn => "Signing in...",
            Self::SignUp => "Creating account...",
        }
    }
}

/// Trim the email and check both fields before calling the provider.
pub(crate) fn validate_credentials(email: &str, password: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    Ok(email.to_owned())
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let identity = expect_context::<FirebaseIdentity>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let mode = RwSignal::new(AuthMode::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = match validate_credentials(&email.get(), &password.get()) {
            Ok(value) => value,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        let password_value = password.get();
        let mode_value = mode.get();
        busy.set(true);
        info.set(mode_value.pending_message().to_owned());

        #[cfg(feature = "hydrate")]
        {
            let identity = identity.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = match mode_value {
                    AuthMode::SignIn => identity.sign_in(&email_value, &password_value).await,
                    AuthMode::SignUp => identity.sign_up(&email_value, &password_value).await,
                };
                busy.set(false);
                match result {
                    Ok(_) => {
                        password.set(String::new());
                        info.set(String::new());
                        navigate(mode_value.next_route().path(), NavigateOptions::default());
                    }
                    Err(e) => info.set(e.user_message()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&identity, &navigate, email_value, password_value);
        }
    };

    let on_toggle = move |_| {
        mode.update(|m| *m = m.toggled());
        info.set(String::new());
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Wabisabi"</h1>
                <p class="auth-card__subtitle">{move || mode.get().submit_label()}</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || mode.get().submit_label()}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <button class="btn btn--link" type="button" on:click=on_toggle disabled=move || busy.get()>
                    {move || mode.get().toggle_label()}
                </button>
            </div>
        </div>
    }
}
