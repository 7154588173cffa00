// Cross-resource invalidation.
//
// Pairings are hand-wired at construction time (detail store -> the list
// showing the same entities), not a generic pub/sub. The target observes
// `dirty` on its next render effect and issues its own `Refresh`, which
// clears the flag.

/// Receiving end of an invalidation pairing. Implemented by every
/// `ResourceStore`; `mark_dirty` is synchronous and never fetches.
pub trait Invalidate: Send + Sync {
    fn mark_dirty(&self);
}
