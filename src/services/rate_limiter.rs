use std::time::Duration;

use tokio::time::{sleep_until, Instant};

/// Enforces a minimum gap between the end of one unit of work and the start of the next.
#[derive(Debug)]
pub struct RateLimiter {
    min_interval: Duration,
    last_finished: Option<Instant>,
}

impl RateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        RateLimiter {
            min_interval,
            last_finished: None,
        }
    }

    pub async fn until_ready(&self) {
        if let Some(last) = self.last_finished {
            let Some(ready_at) = last.checked_add(self.min_interval) else {
                log::warn!("Pacing interval {:?} is out of range, not waiting", self.min_interval);
                return;
            };
            if ready_at > Instant::now() {
                log::trace!("Pacing for {:?}", ready_at - Instant::now());
                sleep_until(ready_at).await;
            }
        }
    }

    pub fn mark(&mut self) {
        self.last_finished = Some(Instant::now());
    }
}
