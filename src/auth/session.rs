// Session state for the authentication resource.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Message;
use crate::store::EventTime;

/// Resolved session returned by the authentication collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Login {
    pub user_id: u64,
    pub email: String,
    pub display_name: String,
    pub roles: Vec<String>,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

// Keeps passwords out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Which action produced the current session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthOperation {
    SignIn,
    SignOut,
    AcknowledgeSignIn,
    GoogleAuth,
}

/// Lifecycle of the authentication resource.
///
/// A successful sign-in is committed in two phases: first
/// `Success { login: None }` (spinners clear, the old session stays absent),
/// then, after the latency floor, `Success { login: Some(..) }` with the
/// resolved session. Subscribers may observe both.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Initial,
    Progress {
        operation: AuthOperation,
        /// Session retained for display continuity, e.g. while a sign-out is
        /// in flight.
        login: Option<Login>,
        event_time: EventTime,
    },
    Success {
        operation: AuthOperation,
        login: Option<Login>,
        event_time: EventTime,
    },
    Fail {
        operation: AuthOperation,
        /// A failed operation never clears an existing session.
        login: Option<Login>,
        failure: Message,
        event_time: EventTime,
    },
}

impl SessionState {
    pub fn login(&self) -> Option<&Login> {
        match self {
            SessionState::Initial => None,
            SessionState::Progress { login, .. }
            | SessionState::Success { login, .. }
            | SessionState::Fail { login, .. } => login.as_ref(),
        }
    }

    pub fn operation(&self) -> Option<AuthOperation> {
        match self {
            SessionState::Initial => None,
            SessionState::Progress { operation, .. }
            | SessionState::Success { operation, .. }
            | SessionState::Fail { operation, .. } => Some(*operation),
        }
    }

    pub fn event_time(&self) -> EventTime {
        match self {
            SessionState::Initial => EventTime::default(),
            SessionState::Progress { event_time, .. }
            | SessionState::Success { event_time, .. }
            | SessionState::Fail { event_time, .. } => *event_time,
        }
    }

    pub fn failure(&self) -> Option<&Message> {
        match self {
            SessionState::Fail { failure, .. } => Some(failure),
            _ => None,
        }
    }

    pub fn is_progress(&self) -> bool {
        matches!(self, SessionState::Progress { .. })
    }

    /// Signed in and the one-time welcome was already shown.
    pub fn is_acknowledged(&self) -> bool {
        matches!(
            self,
            SessionState::Success {
                operation: AuthOperation::AcknowledgeSignIn,
                login: Some(_),
                ..
            }
        )
    }

    pub(crate) fn with_event_time(mut self, stamp: EventTime) -> Self {
        match &mut self {
            SessionState::Initial => {}
            SessionState::Progress { event_time, .. }
            | SessionState::Success { event_time, .. }
            | SessionState::Fail { event_time, .. } => *event_time = stamp,
        }
        self
    }

    pub fn label(&self) -> &'static str {
        match self {
            SessionState::Initial => "initial",
            SessionState::Progress { .. } => "progress",
            SessionState::Success { .. } => "success",
            SessionState::Fail { .. } => "fail",
        }
    }
}
