// Achievement maintenance resources. The approval list and the detail
// editor are paired: an approved or rejected achievement must show up with
// its new status the next time the approval queue renders, so detail
// mutations mark the list dirty.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::{Page, Repository, ResourceStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementSummary {
    pub id: u64,
    pub version: u64,
    pub title: String,
    pub owner: String,
    pub approval: ApprovalStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementDetail {
    pub id: u64,
    pub version: u64,
    pub title: String,
    pub description: String,
    pub owner: String,
    pub approval: ApprovalStatus,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AchievementFilter {
    pub approval: Vec<ApprovalStatus>,
    pub owner: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementPayload {
    pub title: String,
    pub description: String,
    pub approval: ApprovalStatus,
}

pub trait AchievementApprovals:
    Repository<
    Id = u64,
    Entity = AchievementSummary,
    Criteria = AchievementFilter,
    Payload = AchievementPayload,
    Data = Page<AchievementSummary>,
>
{
}

impl<T> AchievementApprovals for T where
    T: Repository<
        Id = u64,
        Entity = AchievementSummary,
        Criteria = AchievementFilter,
        Payload = AchievementPayload,
        Data = Page<AchievementSummary>,
    >
{
}

pub trait AchievementEditor:
    Repository<
    Id = u64,
    Entity = AchievementDetail,
    Criteria = AchievementFilter,
    Payload = AchievementPayload,
    Data = AchievementDetail,
>
{
}

impl<T> AchievementEditor for T where
    T: Repository<
        Id = u64,
        Entity = AchievementDetail,
        Criteria = AchievementFilter,
        Payload = AchievementPayload,
        Data = AchievementDetail,
    >
{
}

pub type AchievementApprovalStore = ResourceStore<dyn AchievementApprovals>;
pub type AchievementDetailStore = ResourceStore<dyn AchievementEditor>;
