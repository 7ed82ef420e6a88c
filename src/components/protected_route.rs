// ============================================================================
// ROUTE GUARD
// ============================================================================
// A pure function of the ambient session decides between the loading
// placeholder, a replace-redirect to /signin (carrying the origin), and the
// protected subtree. The guard never touches the network.
// ============================================================================

use serde::{Deserialize, Serialize};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::loading::Loading;
use crate::context::use_session;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GuardOutcome {
    Loading,
    RedirectToSignin,
    Allow,
}

impl GuardOutcome {
    pub fn evaluate(bootstrapping: bool, signed_in: bool) -> Self {
        if bootstrapping {
            GuardOutcome::Loading
        } else if !signed_in {
            GuardOutcome::RedirectToSignin
        } else {
            GuardOutcome::Allow
        }
    }
}

/// Query attached to the sign-in redirect so the flow can return the
/// operator to the page they originally requested.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct RedirectQuery {
    #[serde(default)]
    pub from: String,
}

#[derive(Properties, PartialEq)]
pub struct ProtectedRouteProps {
    pub children: Children,
}

#[function_component(ProtectedRoute)]
pub fn protected_route(props: &ProtectedRouteProps) -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let location = use_location();

    let outcome = GuardOutcome::evaluate(session.bootstrapping, session.user.is_some());
    let from = location
        .as_ref()
        .map(|location| location.path().to_string())
        .unwrap_or_else(|| "/".to_string());

    use_effect_with((outcome, from), move |(outcome, from)| {
        if *outcome == GuardOutcome::RedirectToSignin {
            if let Some(navigator) = navigator {
                // Replace, not push: back-navigation must not land on the
                // guarded page again.
                let query = RedirectQuery { from: from.clone() };
                if let Err(err) = navigator.replace_with_query(&Route::Signin, &query) {
                    log::error!("Redirect to signin failed: {:?}", err);
                }
            }
        }
        || ()
    });

    match outcome {
        GuardOutcome::Allow => html! { <>{ props.children.clone() }</> },
        GuardOutcome::Loading | GuardOutcome::RedirectToSignin => html! { <Loading /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bootstrapping_always_blocks_regardless_of_identity() {
        assert_eq!(GuardOutcome::evaluate(true, false), GuardOutcome::Loading);
        assert_eq!(GuardOutcome::evaluate(true, true), GuardOutcome::Loading);
    }

    #[test]
    fn anonymous_after_bootstrap_redirects() {
        assert_eq!(
            GuardOutcome::evaluate(false, false),
            GuardOutcome::RedirectToSignin
        );
    }

    #[test]
    fn signed_in_renders_protected_content() {
        assert_eq!(GuardOutcome::evaluate(false, true), GuardOutcome::Allow);
    }
}
