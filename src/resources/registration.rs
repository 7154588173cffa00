// Self-service user registration: a create-only resource whose successful
// submission must show up in the user list on its next render.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::resources::users::{UserDetail, UserFilter};
use crate::store::{Repository, ResourceStore};

#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationPayload {
    pub display_name: String,
    pub email: String,
    pub password: String,
}

// Keeps passwords out of logs.
impl fmt::Debug for RegistrationPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationPayload")
            .field("display_name", &self.display_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

pub trait RegistrationDesk:
    Repository<
    Id = u64,
    Entity = UserDetail,
    Criteria = UserFilter,
    Payload = RegistrationPayload,
    Data = UserDetail,
>
{
}

impl<T> RegistrationDesk for T where
    T: Repository<
        Id = u64,
        Entity = UserDetail,
        Criteria = UserFilter,
        Payload = RegistrationPayload,
        Data = UserDetail,
    >
{
}

pub type RegistrationStore = ResourceStore<dyn RegistrationDesk>;
