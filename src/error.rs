// Structured errors and user-facing message mapping.
//
// Repository collaborators report every expected failure as a `DomainError`
// value; they never panic for business errors. A malformed response (neither
// data nor error present) is a collaborator bug and is allowed to panic.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured error returned by a repository collaborator for an expected
/// failure mode (validation rejected server-side, record locked, version
/// conflict, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{code}")]
pub struct DomainError {
    /// Stable error code, e.g. `ACCOUNT_LOCKED` or `VERSION_CONFLICT`.
    pub code: String,
    /// Positional parameters for message interpolation.
    pub parameters: Vec<String>,
    /// Optional server-supplied message shown when no translation exists.
    pub fallback: Option<String>,
}

impl DomainError {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            parameters: Vec::new(),
            fallback: None,
        }
    }

    pub fn with_parameters(mut self, parameters: Vec<String>) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    /// Error used when a resource receives an action its repository does not
    /// implement. Submitting such an action is a caller error.
    pub fn unsupported(operation: &str) -> Self {
        Self::new("OPERATION_NOT_SUPPORTED").with_parameters(vec![operation.to_string()])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// User-facing message carried by a `Fail` state. The UI layer resolves the
/// key against its translation catalog and renders a toast or inline error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub key: String,
    pub severity: Severity,
    pub parameters: Vec<String>,
    /// Server-supplied text shown when the key has no translation.
    pub fallback: Option<String>,
}

/// Maps a domain error to its translation lookup key. Pure: the same
/// `(code, parameters)` always yields the same message.
pub fn message_for(error: &DomainError) -> Message {
    Message {
        key: format!("system.error.{}", error.code),
        severity: Severity::Error,
        parameters: error.parameters.clone(),
        fallback: error.fallback.clone(),
    }
}

/// Translation catalog seam. Lookup tables themselves live outside this
/// crate; tests supply small in-memory catalogs.
pub trait Translations {
    fn lookup(&self, key: &str) -> Option<String>;
}

/// Resolves the text shown to the user: translated message first, then the
/// error's fallback message, then the raw code verbatim.
pub fn display_text(message: &Message, catalog: &dyn Translations) -> String {
    if let Some(template) = catalog.lookup(&message.key) {
        return interpolate(&template, &message.parameters);
    }
    if let Some(fallback) = &message.fallback {
        return fallback.to_string();
    }
    message
        .key
        .strip_prefix("system.error.")
        .unwrap_or(&message.key)
        .to_string()
}

// Replaces `{0}`, `{1}`, ... with positional parameters.
fn interpolate(template: &str, parameters: &[String]) -> String {
    let mut text = template.to_string();
    for (index, parameter) in parameters.iter().enumerate() {
        text = text.replace(&format!("{{{index}}}"), parameter);
    }
    text
}
