// Collaborator contract for the remote repository behind each resource.

use std::fmt::Debug;

use async_trait::async_trait;

use crate::error::DomainError;
use crate::store::state::SortOrder;

/// Remote repository behind one resource. Implementations own all transport
/// concerns (authorization and tracing headers, serialization); the engine
/// only sees plain data in and `Data` or `DomainError` out.
///
/// Every method has a default body rejecting the operation, so a resource
/// implements exactly its fixed operation set: a list repository overrides
/// `find` (and possibly the mutations), a detail repository `get`/`update`,
/// a registration repository only `create`.
#[async_trait]
pub trait Repository: Send + Sync {
    type Id: Clone + PartialEq + Debug + Send + Sync + 'static;
    type Entity: Clone + PartialEq + Debug + Send + Sync + 'static;
    type Criteria: Clone + PartialEq + Debug + Send + Sync + 'static;
    type Payload: Debug + Send + Sync + 'static;
    /// What a fetch yields: `Page<Entity>` for list resources, the entity
    /// itself for detail resources.
    type Data: Clone + PartialEq + Debug + Send + Sync + 'static;

    /// Fetch a single entity by id.
    async fn get(&self, _id: &Self::Id) -> Result<Self::Data, DomainError> {
        Err(DomainError::unsupported("get"))
    }

    /// Fetch by criteria with an optional sort order.
    async fn find(
        &self,
        _criteria: &Self::Criteria,
        _ordering: Option<&SortOrder>,
    ) -> Result<Self::Data, DomainError> {
        Err(DomainError::unsupported("find"))
    }

    async fn create(&self, _payload: &Self::Payload) -> Result<Self::Data, DomainError> {
        Err(DomainError::unsupported("create"))
    }

    /// Update with the optimistic `version` observed on the last successful
    /// fetch; the server rejects stale versions.
    async fn update(
        &self,
        _id: &Self::Id,
        _version: u64,
        _payload: &Self::Payload,
    ) -> Result<Self::Data, DomainError> {
        Err(DomainError::unsupported("update"))
    }
}
