// Authentication store.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::watch;
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::auth::session::{AuthOperation, Credentials, Login, SessionState};
use crate::error::{message_for, DomainError};
use crate::store::{EventClock, LatencyFloor};

/// Authentication collaborator. Owns token exchange and transport; returns a
/// structured error for every expected failure (bad credentials, locked
/// account, revoked Google token, ...).
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn sign_in(&self, credentials: &Credentials) -> Result<Login, DomainError>;

    async fn sign_in_with_google(&self, id_token: &str) -> Result<Login, DomainError>;

    async fn sign_out(&self, login: &Login) -> Result<(), DomainError>;
}

/// Operations a screen may dispatch against the session.
pub enum AuthAction {
    SignIn(Credentials),
    GoogleSignIn { id_token: String },
    SignOut,
    /// Converts a fresh sign-in into an acknowledged one so the welcome
    /// toast is shown exactly once. Local-only.
    AcknowledgeSignIn,
    Reset,
}

impl AuthAction {
    pub fn kind(&self) -> &'static str {
        match self {
            AuthAction::SignIn(_) => "sign_in",
            AuthAction::GoogleSignIn { .. } => "google_sign_in",
            AuthAction::SignOut => "sign_out",
            AuthAction::AcknowledgeSignIn => "acknowledge_sign_in",
            AuthAction::Reset => "reset",
        }
    }
}

impl fmt::Debug for AuthAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}

/// Session state container. Same commit discipline as `ResourceStore`, plus
/// the two-phase success described on [`SessionState`].
pub struct AuthStore {
    authenticator: Arc<dyn Authenticator>,
    latency: LatencyFloor,
    clock: EventClock,
    cell: watch::Sender<SessionState>,
}

impl AuthStore {
    pub fn new(authenticator: Arc<dyn Authenticator>, latency: LatencyFloor) -> Self {
        let (cell, _) = watch::channel(SessionState::Initial);
        Self {
            authenticator,
            latency,
            clock: EventClock::new(),
            cell,
        }
    }

    pub fn state(&self) -> SessionState {
        self.cell.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.cell.subscribe()
    }

    pub async fn dispatch(&self, action: AuthAction) {
        debug!(resource = "authentication", action = action.kind(), "dispatch");
        match action {
            AuthAction::SignIn(credentials) => {
                self.run_sign_in(AuthOperation::SignIn, credentials).await
            }
            AuthAction::GoogleSignIn { id_token } => self.run_google_sign_in(id_token).await,
            AuthAction::SignOut => self.run_sign_out().await,
            AuthAction::AcknowledgeSignIn => self.acknowledge_sign_in(),
            AuthAction::Reset => self.reset(),
        }
    }

    async fn run_sign_in(&self, operation: AuthOperation, credentials: Credentials) {
        let retained = self.state().login().cloned();
        self.commit(SessionState::Progress {
            operation,
            login: retained.clone(),
            event_time: Default::default(),
        });
        let started = Instant::now();
        let outcome = self.authenticator.sign_in(&credentials).await;
        self.finish_sign_in(operation, retained, started, outcome)
            .await;
    }

    async fn run_google_sign_in(&self, id_token: String) {
        let operation = AuthOperation::GoogleAuth;
        let retained = self.state().login().cloned();
        self.commit(SessionState::Progress {
            operation,
            login: retained.clone(),
            event_time: Default::default(),
        });
        let started = Instant::now();
        let outcome = self.authenticator.sign_in_with_google(&id_token).await;
        self.finish_sign_in(operation, retained, started, outcome)
            .await;
    }

    // Two-phase success: the intermediate commit clears spinners with no
    // session yet, the final commit carries it after the floor has elapsed.
    async fn finish_sign_in(
        &self,
        operation: AuthOperation,
        retained: Option<Login>,
        started: Instant,
        outcome: Result<Login, DomainError>,
    ) {
        match outcome {
            Ok(login) => {
                self.commit(SessionState::Success {
                    operation,
                    login: None,
                    event_time: Default::default(),
                });
                self.latency.settle(started).await;
                self.commit(SessionState::Success {
                    operation,
                    login: Some(login),
                    event_time: Default::default(),
                });
            }
            Err(error) => {
                warn!(code = %error.code, "sign-in failed");
                self.latency.settle(started).await;
                self.commit(SessionState::Fail {
                    operation,
                    login: retained,
                    failure: message_for(&error),
                    event_time: Default::default(),
                });
            }
        }
    }

    /// Valid only from a state holding a session; a second sign-out while
    /// one is already gone is a no-op.
    async fn run_sign_out(&self) {
        let login = match self.state().login().cloned() {
            Some(login) => login,
            None => {
                debug!("sign-out ignored, no session present");
                return;
            }
        };
        self.commit(SessionState::Progress {
            operation: AuthOperation::SignOut,
            login: Some(login.clone()),
            event_time: Default::default(),
        });
        let started = Instant::now();
        let outcome = self.authenticator.sign_out(&login).await;
        self.latency.settle(started).await;
        match outcome {
            Ok(()) => {
                self.commit(SessionState::Success {
                    operation: AuthOperation::SignOut,
                    login: None,
                    event_time: Default::default(),
                });
            }
            Err(error) => {
                warn!(code = %error.code, "sign-out failed");
                self.commit(SessionState::Fail {
                    operation: AuthOperation::SignOut,
                    login: Some(login),
                    failure: message_for(&error),
                    event_time: Default::default(),
                });
            }
        }
    }

    fn acknowledge_sign_in(&self) {
        let applies = matches!(
            &*self.cell.borrow(),
            SessionState::Success { login: Some(_), .. }
        );
        if !applies {
            debug!("acknowledge ignored, no signed-in session");
            return;
        }
        let stamp = self.clock.next();
        self.cell.send_modify(|state| {
            if let SessionState::Success {
                operation,
                event_time,
                ..
            } = state
            {
                *operation = AuthOperation::AcknowledgeSignIn;
                *event_time = stamp;
            }
        });
    }

    fn reset(&self) {
        self.cell.send_replace(SessionState::Initial);
        debug!(resource = "authentication", "reset to initial");
    }

    fn commit(&self, state: SessionState) {
        let state = state.with_event_time(self.clock.next());
        debug!(
            resource = "authentication",
            state = state.label(),
            event_time = state.event_time().0,
            "commit"
        );
        self.cell.send_replace(state);
    }
}
