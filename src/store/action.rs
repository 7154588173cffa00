// Action protocol.
//
// Everything a screen may ask of a resource is one `Action` variant, so
// "exactly one operation per dispatch" is enforced by the type instead of by
// convention.

use std::fmt;

use crate::store::repository::Repository;
use crate::store::state::SortOrder;

pub enum Action<R: Repository + ?Sized> {
    /// Fetch one entity by id (detail resources).
    Get { id: R::Id },
    /// Replace the criteria and fetch (list resources).
    Search {
        criteria: R::Criteria,
        ordering: Option<SortOrder>,
    },
    /// Repeat the last successful criteria/ordering (or last successful
    /// `Get` id). No-op when no fetch has succeeded yet.
    Refresh,
    /// Local-only: toggle the highlighted entity. Selecting the entity that
    /// is already selected clears the selection; `Select(None)` always
    /// clears.
    Select(Option<R::Entity>),
    /// Local-only: flag the cached result as stale. Dispatched by a paired
    /// resource after a mutation, never by the owning screen.
    MarkDirty,
    Create {
        payload: R::Payload,
    },
    Update {
        id: R::Id,
        version: u64,
        payload: R::Payload,
    },
    /// Discard everything and return to `Initial`.
    Reset,
}

impl<R: Repository + ?Sized> Action<R> {
    /// Operation name for structured logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Get { .. } => "get",
            Action::Search { .. } => "search",
            Action::Refresh => "refresh",
            Action::Select(_) => "select",
            Action::MarkDirty => "mark_dirty",
            Action::Create { .. } => "create",
            Action::Update { .. } => "update",
            Action::Reset => "reset",
        }
    }
}

impl<R: Repository + ?Sized> fmt::Debug for Action<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Get { id } => f.debug_struct("Get").field("id", id).finish(),
            Action::Search { criteria, ordering } => f
                .debug_struct("Search")
                .field("criteria", criteria)
                .field("ordering", ordering)
                .finish(),
            Action::Refresh => f.write_str("Refresh"),
            Action::Select(target) => f.debug_tuple("Select").field(target).finish(),
            Action::MarkDirty => f.write_str("MarkDirty"),
            Action::Create { payload } => {
                f.debug_struct("Create").field("payload", payload).finish()
            }
            Action::Update { id, version, payload } => f
                .debug_struct("Update")
                .field("id", id)
                .field("version", version)
                .field("payload", payload)
                .finish(),
            Action::Reset => f.write_str("Reset"),
        }
    }
}
