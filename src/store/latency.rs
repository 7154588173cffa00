// Latency normalization.
//
// Collaborator calls that are usually slow but occasionally resolve fast
// (warm cache) cause a jarring flash of the loading indicator. The floor
// pads fast completions up to a minimum duration. It only ever adds
// latency; a call slower than the floor is untouched.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;

#[derive(Debug, Clone, Copy)]
pub struct LatencyFloor {
    floor: Duration,
}

impl LatencyFloor {
    pub fn from_millis(millis: u64) -> Self {
        Self {
            floor: Duration::from_millis(millis),
        }
    }

    /// No padding at all; used by tests and by stores whose configuration
    /// sets a zero floor.
    pub fn none() -> Self {
        Self {
            floor: Duration::ZERO,
        }
    }

    pub fn duration(&self) -> Duration {
        self.floor
    }

    /// Awaits `call`, then sleeps whatever remains of the floor.
    pub async fn apply<T>(&self, call: impl Future<Output = T>) -> T {
        let started = Instant::now();
        let outcome = call.await;
        self.settle(started).await;
        outcome
    }

    /// Sleeps the remainder of the floor measured from `started`. Split out
    /// of `apply` for callers that commit an intermediate state between the
    /// call and the padded tail (two-phase sign-in).
    pub async fn settle(&self, started: Instant) {
        let elapsed = started.elapsed();
        if elapsed < self.floor {
            tokio::time::sleep(self.floor - elapsed).await;
        }
    }
}
