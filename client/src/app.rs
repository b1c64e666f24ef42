//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
    hooks::use_location,
};

use crate::components::route_gate::RouteGate;
use crate::config::IdentityConfig;
use crate::guard::NavigationGuard;
use crate::identity::firebase::FirebaseIdentity;
use crate::pages;
use crate::routes::{AppRoute, RouteTarget, canonical_redirect};
use crate::state::{auth::AuthState, navigation::NavigationState};

/// The guard as wired into the app: backed by the Firebase provider.
pub type AppGuard = NavigationGuard<FirebaseIdentity>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides auth/navigation state, the identity provider, and the guard, then
/// binds the route table to the router.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = IdentityConfig::from_build_env();
    match &config {
        Ok(cfg) => log::debug!("identity provider endpoint {} (project {:?})", cfg.endpoint, cfg.project_id),
        Err(e) => log::error!("identity provider not configured: {e}"),
    }

    let auth = RwSignal::new(AuthState::default());
    let nav = RwSignal::new(NavigationState::default());
    let identity = FirebaseIdentity::new(config, auth);

    provide_context(auth);
    provide_context(nav);
    provide_context(identity.clone());
    provide_context::<AppGuard>(NavigationGuard::new(identity));

    view! {
        <Stylesheet id="leptos" href="/pkg/wabisabi.css"/>
        <Title text="Wabisabi"/>

        <Router>
            <main>
                <Routes fallback=unmatched>
                    <Route path=StaticSegment(AppRoute::Root.segment()) view=|| routed(AppRoute::Root)/>
                    <Route path=StaticSegment(AppRoute::Auth.segment()) view=|| routed(AppRoute::Auth)/>
                    <Route path=StaticSegment(AppRoute::Verify.segment()) view=|| routed(AppRoute::Verify)/>
                    <Route path=StaticSegment(AppRoute::Dashboard.segment()) view=|| routed(AppRoute::Dashboard)/>
                    <Route path=StaticSegment(AppRoute::Profile.segment()) view=|| routed(AppRoute::Profile)/>
                </Routes>
            </main>
        </Router>
    }
}

/// View for one route table entry: a redirect, or the page behind the guard.
fn routed(route: AppRoute) -> AnyView {
    match route.descriptor().target {
        RouteTarget::Redirect(to) => view! { <Redirect path=to.path()/> }.into_any(),
        RouteTarget::Page(page) => view! {
            <RouteGate route=route>
                {move || pages::render(page)}
            </RouteGate>
        }
        .into_any(),
    }
}

/// Fallback for paths the router did not match. Table paths written in
/// another form (`/dashboard/`) are sent to their canonical path, where the
/// guard runs as usual.
fn unmatched() -> AnyView {
    let path = use_location().pathname.get_untracked();
    match canonical_redirect(&path) {
        Some(route) => view! { <Redirect path=route.path()/> }.into_any(),
        None => view! { <p class="not-found">"Page not found."</p> }.into_any(),
    }
}
