//! Last route the guard let through.

use crate::routes::AppRoute;

/// Provided via context as `RwSignal<NavigationState>`; supplies the source
/// route of the next navigation request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub current: Option<AppRoute>,
}
