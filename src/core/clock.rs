use crate::domain::ports::Clock;
use std::time::Duration;

/// Production timer: defers to the runtime's timer wheel. Under a paused
/// test runtime the same impl is driven by `tokio::time::advance`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

impl Clock for TokioClock {
    async fn sleep(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}
