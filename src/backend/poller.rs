use std::time::Duration;

#[cfg(target_arch = "wasm32")]
use futures::StreamExt;

use crate::backend::api::{ApiError, EntityApi, NotificationFilter, NOTIFICATION_ENTITY};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
        }
    }
}

impl RetryPolicy {
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt);
        self.base_delay.saturating_mul(factor).min(self.max_delay)
    }
}

pub struct UnreadPoller {
    user_id: String,
    // First tick fires at once
    primed: bool,
    #[cfg(not(target_arch = "wasm32"))]
    interval: tokio::time::Interval,
    #[cfg(target_arch = "wasm32")]
    interval: gloo_timers::future::IntervalStream,
}

impl UnreadPoller {
    pub fn new(user_id: impl Into<String>, period: Duration) -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let interval = {
            let mut interval =
                tokio::time::interval_at(tokio::time::Instant::now() + period, period);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            interval
        };

        #[cfg(target_arch = "wasm32")]
        let interval = gloo_timers::future::IntervalStream::new(
            u32::try_from(period.as_millis()).unwrap_or(u32::MAX),
        );

        Self {
            user_id: user_id.into(),
            primed: false,
            interval,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub async fn tick(&mut self) {
        if !self.primed {
            self.primed = true;
            return;
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            self.interval.tick().await;
        }
        #[cfg(target_arch = "wasm32")]
        {
            self.interval.next().await;
        }
    }
}

/// Waits for the next scheduled query and returns whose count is due.
/// Never resolves while no poller is running.
pub async fn next_poll(poller: &mut Option<UnreadPoller>) -> String {
    match poller {
        Some(poller) => {
            poller.tick().await;
            poller.user_id.clone()
        }
        None => std::future::pending().await,
    }
}

pub async fn fetch_unread_count<E: EntityApi>(
    entities: &E,
    user_id: &str,
    retry: &RetryPolicy,
) -> Result<u32, ApiError> {
    let query = NotificationFilter::unread_for(user_id).to_query();
    let mut attempt = 0;

    loop {
        match entities.filter(NOTIFICATION_ENTITY, &query).await {
            Ok(records) => return Ok(u32::try_from(records.len()).unwrap_or(u32::MAX)),
            Err(e) if attempt < retry.max_retries => {
                let delay = retry.delay_for(attempt);
                tracing::debug!(user_id, attempt, ?delay, "unread count query failed, retrying: {}", e);
                super::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
