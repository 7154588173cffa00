// User maintenance resources: the searchable account list and the single
// account detail screen.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::{Page, Repository, ResourceStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Suspended,
    Deleted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: u64,
    pub version: u64,
    pub display_name: String,
    pub email: String,
    pub status: UserStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDetail {
    pub id: u64,
    pub version: u64,
    pub display_name: String,
    pub email: String,
    pub status: UserStatus,
    pub roles: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserFilter {
    pub status: Vec<UserStatus>,
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPayload {
    pub display_name: String,
    pub email: String,
    pub status: UserStatus,
    pub roles: Vec<String>,
}

/// Repository behind the user list: search only.
pub trait UserDirectory:
    Repository<
    Id = u64,
    Entity = UserSummary,
    Criteria = UserFilter,
    Payload = UserPayload,
    Data = Page<UserSummary>,
>
{
}

impl<T> UserDirectory for T where
    T: Repository<
        Id = u64,
        Entity = UserSummary,
        Criteria = UserFilter,
        Payload = UserPayload,
        Data = Page<UserSummary>,
    >
{
}

/// Repository behind the user detail screen: get and update.
pub trait UserAccounts:
    Repository<
    Id = u64,
    Entity = UserDetail,
    Criteria = UserFilter,
    Payload = UserPayload,
    Data = UserDetail,
>
{
}

impl<T> UserAccounts for T where
    T: Repository<
        Id = u64,
        Entity = UserDetail,
        Criteria = UserFilter,
        Payload = UserPayload,
        Data = UserDetail,
    >
{
}

pub type UserListStore = ResourceStore<dyn UserDirectory>;
pub type UserDetailStore = ResourceStore<dyn UserAccounts>;
