// State records for async resources.
//
// Each remote resource (user list, activity detail, ...) is described by a
// single tagged union over one snapshot shape. The record is replaced on
// every commit, never mutated in place; subscribers compare `event_time` to
// order what they observe.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Message;

/// Logical version of a committed state. Strictly increases on every commit
/// of a non-`Initial` state, so a stale async completion is recognizable by
/// carrying an older event time than the current record.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct EventTime(pub u64);

/// Per-store monotonic clock backing `EventTime`.
#[derive(Debug, Default)]
pub struct EventClock(AtomicU64);

impl EventClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> EventTime {
        EventTime(self.0.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

/// Why a `Success` state was committed. Lets a subscriber react to "a search
/// finished" differently from "a mutation finished" without diffing payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuccessKind {
    /// A single-entity fetch (or its refresh) completed.
    Get,
    /// A criteria search (or its refresh) completed.
    Search,
    /// A create or update mutation completed.
    Update,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Sort order last applied to a list resource; retained so `Refresh` can
/// reproduce the previous fetch without re-deriving anything from the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOrder {
    pub field: String,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// One page of a list resource, with the pagination metadata the server
/// reported for the criteria that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
}

/// Everything a non-`Initial` state carries. `I` is the entity id type, `E`
/// the selectable entity, `C` the search criteria, `D` the fetched data (a
/// `Page<E>` for list resources, the entity itself for detail resources).
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<I, E, C, D> {
    pub event_time: EventTime,
    pub committed_at: DateTime<Utc>,
    /// Last successfully fetched data; retained through `Progress` and `Fail`
    /// so the screen never blanks while an operation is in flight or failed.
    pub result: Option<D>,
    /// Currently highlighted entity. Owned by the record; changed only via
    /// the `Select` action, never as a side effect of a fetch.
    pub selected: Option<E>,
    /// Criteria of the last successful search, reused by `Refresh`.
    pub criteria: Option<C>,
    pub ordering: Option<SortOrder>,
    /// Id of the last successful single-entity fetch, reused by `Refresh`
    /// on detail resources.
    pub last_get: Option<I>,
    /// Cached `result` is stale and must be re-fetched before being trusted.
    pub dirty: bool,
}

impl<I, E, C, D> Default for Snapshot<I, E, C, D> {
    fn default() -> Self {
        Self {
            event_time: EventTime::default(),
            committed_at: Utc::now(),
            result: None,
            selected: None,
            criteria: None,
            ordering: None,
            last_get: None,
            dirty: false,
        }
    }
}

/// Lifecycle of one resource's current async operation. Exactly one variant
/// is active; `Fail` keeps the previous `result` visible and adds a message.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceState<I, E, C, D> {
    /// No operation attempted yet. `Reset` returns here; the variant carries
    /// nothing so a reset state is indistinguishable from a fresh one.
    Initial,
    /// An operation is in flight. The snapshot carries forward the previous
    /// result for display continuity.
    Progress(Snapshot<I, E, C, D>),
    Success {
        kind: SuccessKind,
        snapshot: Snapshot<I, E, C, D>,
    },
    Fail {
        snapshot: Snapshot<I, E, C, D>,
        failure: Message,
    },
}

impl<I, E, C, D> ResourceState<I, E, C, D> {
    pub fn snapshot(&self) -> Option<&Snapshot<I, E, C, D>> {
        match self {
            ResourceState::Initial => None,
            ResourceState::Progress(snapshot)
            | ResourceState::Success { snapshot, .. }
            | ResourceState::Fail { snapshot, .. } => Some(snapshot),
        }
    }

    pub fn snapshot_mut(&mut self) -> Option<&mut Snapshot<I, E, C, D>> {
        match self {
            ResourceState::Initial => None,
            ResourceState::Progress(snapshot)
            | ResourceState::Success { snapshot, .. }
            | ResourceState::Fail { snapshot, .. } => Some(snapshot),
        }
    }

    /// Same variant, replaced snapshot. Used by local-only transitions
    /// (select, mark-dirty) that must not change what the state means.
    pub fn with_snapshot(self, snapshot: Snapshot<I, E, C, D>) -> Self {
        match self {
            ResourceState::Initial => ResourceState::Initial,
            ResourceState::Progress(_) => ResourceState::Progress(snapshot),
            ResourceState::Success { kind, .. } => ResourceState::Success { kind, snapshot },
            ResourceState::Fail { failure, .. } => ResourceState::Fail { snapshot, failure },
        }
    }

    pub fn event_time(&self) -> EventTime {
        self.snapshot()
            .map(|snapshot| snapshot.event_time)
            .unwrap_or_default()
    }

    pub fn result(&self) -> Option<&D> {
        self.snapshot().and_then(|snapshot| snapshot.result.as_ref())
    }

    pub fn selected(&self) -> Option<&E> {
        self.snapshot()
            .and_then(|snapshot| snapshot.selected.as_ref())
    }

    pub fn is_dirty(&self) -> bool {
        self.snapshot()
            .map(|snapshot| snapshot.dirty)
            .unwrap_or(false)
    }

    pub fn is_progress(&self) -> bool {
        matches!(self, ResourceState::Progress(_))
    }

    pub fn success_kind(&self) -> Option<SuccessKind> {
        match self {
            ResourceState::Success { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&Message> {
        match self {
            ResourceState::Fail { failure, .. } => Some(failure),
            _ => None,
        }
    }

    /// Variant name for structured logging.
    pub fn label(&self) -> &'static str {
        match self {
            ResourceState::Initial => "initial",
            ResourceState::Progress(_) => "progress",
            ResourceState::Success { .. } => "success",
            ResourceState::Fail { .. } => "fail",
        }
    }
}
