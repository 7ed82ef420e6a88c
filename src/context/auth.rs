// ============================================================================
// AUTH CONTEXT - session bootstrap and ambient identity
// ============================================================================
// One "who am I" request per provider mount decides between Authenticated
// and Anonymous; afterwards the identity only changes through an explicit
// sign-out or a fresh successful sign-in. Descendants consume the session
// through use_session() instead of prop threading.
// ============================================================================

use yew::prelude::*;

use crate::components::loading::Loading;
use crate::models::User;
use crate::services::auth_service;

/// Bootstrapping -> {Authenticated, Anonymous}; bootstrapping never
/// re-enters true.
#[derive(Clone, PartialEq, Debug)]
pub struct SessionState {
    pub user: Option<User>,
    pub bootstrapping: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            user: None,
            bootstrapping: true,
        }
    }

    /// First identity check resolved, with or without an identity.
    pub fn resolved(mut self, user: Option<User>) -> Self {
        self.user = user;
        self.bootstrapping = false;
        self
    }

    /// Explicit identity change (sign-out clears, sign-in replaces).
    pub fn with_user(mut self, user: Option<User>) -> Self {
        self.user = user;
        self
    }
}

/// Ambient session handed to descendants. Only the provider (bootstrap) and
/// the `set_user` callback may write the identity.
#[derive(Clone, PartialEq)]
pub struct Session {
    pub user: Option<User>,
    pub bootstrapping: bool,
    pub set_user: Callback<Option<User>>,
}

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let state = use_state(SessionState::new);

    // Session bootstrap, exactly once per provider mount.
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let user = match auth_service::fetch_me().await {
                    Ok(user) => {
                        log::info!("Session bootstrap: signed in as {}", user.email);
                        Some(user)
                    }
                    Err(err) => {
                        log::info!("Session bootstrap: anonymous ({})", err);
                        None
                    }
                };
                state.set((*state).clone().resolved(user));
            });
            || ()
        });
    }

    let set_user = {
        let state = state.clone();
        Callback::from(move |user: Option<User>| {
            state.set((*state).clone().with_user(user));
        })
    };

    let session = Session {
        user: state.user.clone(),
        bootstrapping: state.bootstrapping,
        set_user,
    };

    html! {
        <ContextProvider<Session> context={session}>
            if state.bootstrapping {
                <Loading />
            } else {
                { props.children.clone() }
            }
        </ContextProvider<Session>>
    }
}

#[hook]
pub fn use_session() -> Session {
    use_context::<Session>().expect("use_session called outside AuthProvider")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: "u1".into(),
            name: Some("Operator".into()),
            email: "ops@example.com".into(),
        }
    }

    #[test]
    fn starts_bootstrapping_and_anonymous() {
        let state = SessionState::new();
        assert!(state.bootstrapping);
        assert!(state.user.is_none());
    }

    #[test]
    fn bootstrap_resolution_is_final() {
        let state = SessionState::new().resolved(Some(user()));
        assert!(!state.bootstrapping);
        assert!(state.user.is_some());

        // Later identity changes never re-enter bootstrapping.
        let signed_out = state.with_user(None);
        assert!(!signed_out.bootstrapping);
        assert!(signed_out.user.is_none());

        let signed_in = signed_out.with_user(Some(user()));
        assert!(!signed_in.bootstrapping);
        assert!(signed_in.user.is_some());
    }

    #[test]
    fn failed_bootstrap_resolves_to_anonymous() {
        let state = SessionState::new().resolved(None);
        assert!(!state.bootstrapping);
        assert!(state.user.is_none());
    }
}
