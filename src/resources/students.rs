// Student record resource: a read-only detail screen.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::{Repository, ResourceStore};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentDetail {
    pub id: u64,
    pub version: u64,
    pub display_name: String,
    pub email: String,
    pub enrolled_at: DateTime<Utc>,
    pub achievement_count: u32,
}

/// Get-only repository; everything else stays rejected by the defaults.
pub trait StudentRecords:
    Repository<Id = u64, Entity = StudentDetail, Criteria = (), Payload = (), Data = StudentDetail>
{
}

impl<T> StudentRecords for T where
    T: Repository<Id = u64, Entity = StudentDetail, Criteria = (), Payload = (), Data = StudentDetail>
{
}

pub type StudentStore = ResourceStore<dyn StudentRecords>;
