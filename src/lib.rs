// Backoffice Core - client-side async resource state engine
// This exposes the state containers, action protocol, and wiring used by
// every screen that talks to a remote service.

pub mod auth;
pub mod config;
pub mod error;
pub mod resources;
pub mod store;
pub mod telemetry;

// Re-export key types for easy access
pub use auth::{
    AuthAction, AuthOperation, AuthStore, Authenticator, Credentials, Login, SessionState,
};
pub use config::EngineConfig;
pub use error::{display_text, message_for, DomainError, Message, Severity, Translations};
pub use resources::{AppRepositories, AppStores};
pub use store::{
    Action, EventTime, Invalidate, LatencyFloor, Page, Repository, ResourceState, ResourceStore,
    Snapshot, SortDirection, SortOrder, SuccessKind,
};
pub use telemetry::{dispatch_span, generate_correlation_id, init_telemetry};
