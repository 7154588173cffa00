// Transition engine.
//
// One `ResourceStore` per remote resource. The store owns the resource's
// state record, turns dispatched actions into collaborator calls and state
// commits, and publishes every commit through a watch channel the UI layer
// subscribes to.

pub mod action;
pub mod invalidation;
pub mod latency;
pub mod repository;
pub mod state;

use std::sync::{Arc, Mutex};

use chrono::Utc;
use tokio::sync::watch;
use tracing::{debug, trace, warn};

use crate::error::{message_for, DomainError};

pub use action::Action;
pub use invalidation::Invalidate;
pub use latency::LatencyFloor;
pub use repository::Repository;
pub use state::{
    EventClock, EventTime, Page, ResourceState, Snapshot, SortDirection, SortOrder, SuccessKind,
};

/// State record type of a store backed by repository `R`.
pub type StateOf<R> = ResourceState<
    <R as Repository>::Id,
    <R as Repository>::Entity,
    <R as Repository>::Criteria,
    <R as Repository>::Data,
>;

/// Snapshot type of a store backed by repository `R`.
pub type SnapshotOf<R> = Snapshot<
    <R as Repository>::Id,
    <R as Repository>::Entity,
    <R as Repository>::Criteria,
    <R as Repository>::Data,
>;

// What produced a fetch, recorded into the snapshot when the fetch
// succeeds so `Refresh` can replay it.
enum FetchOrigin<R: Repository + ?Sized> {
    Criteria {
        criteria: R::Criteria,
        ordering: Option<SortOrder>,
    },
    Id(R::Id),
}

/// Versioned state container plus transition engine for one resource.
///
/// Ordering: commits are full replacements and the last commit wins. Nothing
/// cancels an in-flight call and no generation token drops stale
/// completions; two concurrent searches both run to completion and whichever
/// commits later determines the record, regardless of dispatch order.
/// Subscribers that care compare `event_time`.
pub struct ResourceStore<R: Repository + ?Sized> {
    name: &'static str,
    repository: Arc<R>,
    latency: LatencyFloor,
    clock: EventClock,
    cell: watch::Sender<StateOf<R>>,
    mutation_listeners: Mutex<Vec<Arc<dyn Invalidate>>>,
}

impl<R: Repository + ?Sized> ResourceStore<R> {
    pub fn new(name: &'static str, repository: Arc<R>, latency: LatencyFloor) -> Self {
        let (cell, _) = watch::channel(ResourceState::Initial);
        Self {
            name,
            repository,
            latency,
            clock: EventClock::new(),
            cell,
            mutation_listeners: Mutex::new(Vec::new()),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Clone of the current state record.
    pub fn state(&self) -> StateOf<R> {
        self.cell.borrow().clone()
    }

    /// Receiver that observes every commit. The UI layer holds one per
    /// screen and re-renders on change.
    pub fn subscribe(&self) -> watch::Receiver<StateOf<R>> {
        self.cell.subscribe()
    }

    /// Wires `target` to be marked dirty after every successful mutation on
    /// this store. Called once during application wiring.
    pub fn invalidate_on_mutation(&self, target: Arc<dyn Invalidate>) {
        self.mutation_listeners.lock().unwrap().push(target);
    }

    /// Runs one action to completion. Every dispatch commits a terminal
    /// state: I/O actions commit `Progress` synchronously before the first
    /// await, then `Success` or `Fail`; local actions commit directly.
    pub async fn dispatch(&self, action: Action<R>) {
        debug!(resource = self.name, action = action.kind(), "dispatch");
        match action {
            Action::Get { id } => self.run_get(id).await,
            Action::Search { criteria, ordering } => self.run_search(criteria, ordering).await,
            Action::Refresh => self.run_refresh().await,
            Action::Select(target) => self.apply_select(target),
            Action::MarkDirty => self.mark_dirty(),
            Action::Create { payload } => self.run_create(payload).await,
            Action::Update {
                id,
                version,
                payload,
            } => self.run_update(id, version, payload).await,
            Action::Reset => self.reset(),
        }
    }

    /// Flags the cached result as stale without fetching. Only meaningful on
    /// a `Success` record; anything else is left alone.
    pub fn mark_dirty(&self) {
        let applies = matches!(&*self.cell.borrow(), ResourceState::Success { .. });
        if !applies {
            debug!(resource = self.name, "mark_dirty ignored outside success");
            return;
        }
        let event_time = self.clock.next();
        self.cell.send_modify(|current| {
            if let Some(snapshot) = current.snapshot_mut() {
                snapshot.dirty = true;
                snapshot.event_time = event_time;
                snapshot.committed_at = Utc::now();
            }
        });
        debug!(resource = self.name, event_time = event_time.0, "marked dirty");
    }

    async fn run_get(&self, id: R::Id) {
        let progress = self.commit_progress(self.carried_snapshot());
        let outcome = self.latency.apply(self.repository.get(&id)).await;
        self.finish(progress, SuccessKind::Get, outcome, Some(FetchOrigin::Id(id)));
    }

    async fn run_search(&self, criteria: R::Criteria, ordering: Option<SortOrder>) {
        let progress = self.commit_progress(self.carried_snapshot());
        let outcome = self
            .latency
            .apply(self.repository.find(&criteria, ordering.as_ref()))
            .await;
        self.finish(
            progress,
            SuccessKind::Search,
            outcome,
            Some(FetchOrigin::Criteria { criteria, ordering }),
        );
    }

    async fn run_refresh(&self) {
        let snapshot = match self.cell.borrow().snapshot() {
            Some(snapshot) => snapshot.clone(),
            None => {
                debug!(resource = self.name, "refresh ignored, nothing fetched yet");
                return;
            }
        };
        if let Some(criteria) = snapshot.criteria.clone() {
            let ordering = snapshot.ordering.clone();
            let progress = self.commit_progress(snapshot);
            let outcome = self
                .latency
                .apply(self.repository.find(&criteria, ordering.as_ref()))
                .await;
            self.finish(progress, SuccessKind::Search, outcome, None);
        } else if let Some(id) = snapshot.last_get.clone() {
            let progress = self.commit_progress(snapshot);
            let outcome = self.latency.apply(self.repository.get(&id)).await;
            self.finish(progress, SuccessKind::Get, outcome, None);
        } else {
            debug!(resource = self.name, "refresh ignored, no prior success");
        }
    }

    async fn run_create(&self, payload: R::Payload) {
        let progress = self.commit_progress(self.carried_snapshot());
        let outcome = self.latency.apply(self.repository.create(&payload)).await;
        self.finish_mutation(progress, outcome);
    }

    async fn run_update(&self, id: R::Id, version: u64, payload: R::Payload) {
        let progress = self.commit_progress(self.carried_snapshot());
        let outcome = self
            .latency
            .apply(self.repository.update(&id, version, &payload))
            .await;
        self.finish_mutation(progress, outcome);
    }

    fn apply_select(&self, target: Option<R::Entity>) {
        let current = self.state();
        let mut snapshot = match current.snapshot() {
            Some(snapshot) => snapshot.clone(),
            None => {
                debug!(resource = self.name, "select ignored on initial state");
                return;
            }
        };
        snapshot.selected = match target {
            Some(entity) if snapshot.selected.as_ref() == Some(&entity) => None,
            other => other,
        };
        self.commit(current.with_snapshot(snapshot));
    }

    fn reset(&self) {
        self.cell.send_replace(ResourceState::Initial);
        debug!(resource = self.name, "reset to initial");
    }

    // Previous snapshot carried into a new `Progress` so the screen keeps
    // its data while the operation is in flight.
    fn carried_snapshot(&self) -> SnapshotOf<R> {
        self.cell
            .borrow()
            .snapshot()
            .cloned()
            .unwrap_or_default()
    }

    fn commit_progress(&self, snapshot: SnapshotOf<R>) -> SnapshotOf<R> {
        match self.commit(ResourceState::Progress(snapshot)) {
            ResourceState::Progress(stamped) => stamped,
            _ => unreachable!("progress commit returns progress"),
        }
    }

    // Terminal states are built from the progress snapshot taken at dispatch
    // time, not from whatever the record became during the await. The fetch
    // origin is recorded only on success, so `Refresh` always replays the
    // last fetch that actually produced data and a failed fetch leaves the
    // previous origin in place.
    fn finish(
        &self,
        progress: SnapshotOf<R>,
        kind: SuccessKind,
        outcome: Result<R::Data, DomainError>,
        origin: Option<FetchOrigin<R>>,
    ) -> bool {
        match outcome {
            Ok(data) => {
                let mut snapshot = progress;
                match origin {
                    Some(FetchOrigin::Criteria { criteria, ordering }) => {
                        snapshot.criteria = Some(criteria);
                        snapshot.ordering = ordering;
                    }
                    Some(FetchOrigin::Id(id)) => snapshot.last_get = Some(id),
                    None => {}
                }
                snapshot.result = Some(data);
                snapshot.dirty = false;
                self.commit(ResourceState::Success { kind, snapshot });
                true
            }
            Err(error) => {
                warn!(
                    resource = self.name,
                    code = %error.code,
                    "collaborator reported failure"
                );
                self.commit(ResourceState::Fail {
                    snapshot: progress,
                    failure: message_for(&error),
                });
                false
            }
        }
    }

    fn finish_mutation(&self, progress: SnapshotOf<R>, outcome: Result<R::Data, DomainError>) {
        if self.finish(progress, SuccessKind::Update, outcome, None) {
            let listeners = self.mutation_listeners.lock().unwrap();
            for listener in listeners.iter() {
                listener.mark_dirty();
            }
        }
    }

    fn commit(&self, mut state: StateOf<R>) -> StateOf<R> {
        if let Some(snapshot) = state.snapshot_mut() {
            snapshot.event_time = self.clock.next();
            snapshot.committed_at = Utc::now();
        }
        trace!(
            resource = self.name,
            state = state.label(),
            event_time = state.event_time().0,
            "commit"
        );
        self.cell.send_replace(state.clone());
        state
    }
}

impl<R: Repository + ?Sized> Invalidate for ResourceStore<R> {
    fn mark_dirty(&self) {
        ResourceStore::mark_dirty(self);
    }
}
