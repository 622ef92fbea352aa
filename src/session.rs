//! Authenticated-session lifecycle.
//!
//! One explicit session object provided through context: initialized from
//! the persisted token, validated against `/auth/me` on app load, replaced
//! by login/logout. Components never touch the token directly.

use std::sync::Arc;

use leptos::*;

use leadboard_client::auth::User;
use leadboard_client::store::TokenStore;
use leadboard_client::ApiClient;

/// Auth-gate state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// A persisted token exists and is being validated
    Checking,
    Authenticated(User),
    Anonymous,
}

#[derive(Clone)]
pub struct Session {
    api: ApiClient,
    store: Arc<dyn TokenStore>,
    pub state: RwSignal<SessionState>,
    /// Message from the most recent failed login
    pub error: RwSignal<Option<String>>,
    /// A login request is in flight
    pub pending: RwSignal<bool>,
}

impl Session {
    /// Build the session, kick off startup validation, and provide it
    /// through context.
    pub fn provide(api: ApiClient, store: Arc<dyn TokenStore>) -> Session {
        let has_token = store.load().is_some();
        let session = Session {
            api: api.clone(),
            store,
            state: create_rw_signal(if has_token {
                SessionState::Checking
            } else {
                SessionState::Anonymous
            }),
            error: create_rw_signal(None),
            pending: create_rw_signal(false),
        };

        if has_token {
            let validate = session.clone();
            spawn_local(async move {
                match validate.api.auth().me().await {
                    Ok(user) => validate.state.set(SessionState::Authenticated(user)),
                    Err(_) => {
                        // Invalid or expired token
                        validate.store.clear();
                        validate.state.set(SessionState::Anonymous);
                    }
                }
            });
        }

        provide_context(session.clone());
        session
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<(), String> {
        self.error.set(None);
        self.pending.set(true);
        let result = self.api.auth().login(email, password).await;
        self.pending.set(false);

        match result {
            Ok(response) => {
                self.store.save(&response.token);
                self.state.set(SessionState::Authenticated(response.user));
                Ok(())
            }
            Err(err) => {
                let message = err.message_or("Login failed");
                self.error.set(Some(message.clone()));
                Err(message)
            }
        }
    }

    pub fn logout(&self) {
        self.store.clear();
        self.state.set(SessionState::Anonymous);
    }

    pub fn user(&self) -> Option<User> {
        match self.state.get() {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state.get(), SessionState::Authenticated(_))
    }
}

/// Grab the session from context.
pub fn use_session() -> Session {
    expect_context::<Session>()
}
