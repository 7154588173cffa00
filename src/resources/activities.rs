// Activity maintenance resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::{Page, Repository, ResourceStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityStatus {
    Draft,
    Published,
    Archived,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivitySummary {
    pub id: u64,
    pub version: u64,
    pub title: String,
    pub status: ActivityStatus,
    pub starts_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityDetail {
    pub id: u64,
    pub version: u64,
    pub title: String,
    pub description: String,
    pub status: ActivityStatus,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub capacity: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityFilter {
    pub status: Vec<ActivityStatus>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityPayload {
    pub title: String,
    pub description: String,
    pub status: ActivityStatus,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub capacity: u32,
}

pub trait ActivityCatalog:
    Repository<
    Id = u64,
    Entity = ActivitySummary,
    Criteria = ActivityFilter,
    Payload = ActivityPayload,
    Data = Page<ActivitySummary>,
>
{
}

impl<T> ActivityCatalog for T where
    T: Repository<
        Id = u64,
        Entity = ActivitySummary,
        Criteria = ActivityFilter,
        Payload = ActivityPayload,
        Data = Page<ActivitySummary>,
    >
{
}

pub trait ActivityEditor:
    Repository<
    Id = u64,
    Entity = ActivityDetail,
    Criteria = ActivityFilter,
    Payload = ActivityPayload,
    Data = ActivityDetail,
>
{
}

impl<T> ActivityEditor for T where
    T: Repository<
        Id = u64,
        Entity = ActivityDetail,
        Criteria = ActivityFilter,
        Payload = ActivityPayload,
        Data = ActivityDetail,
    >
{
}

pub type ActivityListStore = ResourceStore<dyn ActivityCatalog>;
pub type ActivityDetailStore = ResourceStore<dyn ActivityEditor>;
