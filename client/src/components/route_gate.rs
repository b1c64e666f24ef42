//! Route gate: runs the navigation guard for a routed page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page route renders through this component. The guard resolves once
//! per mount; `Allow` renders the page, a redirect replaces the current
//! history entry with the guard's target. The guard only runs in the browser,
//! so SSR output is the pending placeholder.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppGuard;
use crate::guard::{GuardOutcome, NavigationRequest};
use crate::routes::AppRoute;
use crate::state::navigation::NavigationState;

#[component]
pub fn RouteGate(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let guard = expect_context::<AppGuard>();
    let nav = expect_context::<RwSignal<NavigationState>>();
    let navigate = use_navigate();

    let decision = LocalResource::new(move || {
        let guard = guard.clone();
        let source = nav.get_untracked().current;
        async move { guard.resolve(NavigationRequest::new(route).with_source(source)).await }
    });

    Effect::new(move || match decision.get() {
        Some(GuardOutcome::Redirect(next)) => {
            navigate(next.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
        Some(GuardOutcome::Allow) => nav.set(NavigationState { current: Some(route) }),
        None => {}
    });

    view! {
        <Suspense fallback=|| view! { <p class="route-gate__pending">"Checking session..."</p> }>
            {move || (decision.get() == Some(GuardOutcome::Allow)).then(|| children())}
        </Suspense>
    }
}
