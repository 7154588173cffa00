// Authentication resource: its own state shape (session, operation type) and
// the two-phase sign-in success commit.

mod session;
mod store;

pub use session::{AuthOperation, Credentials, Login, SessionState};
pub use store::{AuthAction, AuthStore, Authenticator};
