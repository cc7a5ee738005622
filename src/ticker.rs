use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDateTime;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::clock::Clock;

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(1000);
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

pub struct Ticker {
    shutdown_token: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Spawns the tick loop on the current tokio runtime. The first tick fires
    /// immediately. A zero period is raised to one millisecond.
    pub fn start<C, F>(period: Duration, clock: Arc<C>, mut on_tick: F) -> Self
    where
        C: Clock + ?Sized + 'static,
        F: FnMut(NaiveDateTime) + Send + 'static,
    {
        let period = period.max(MIN_TICK_INTERVAL);
        let shutdown_token = CancellationToken::new();
        let token = shutdown_token.clone();
        let handle = tokio::spawn(async move {
            let mut ticks = interval(period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            debug!(?period, "ticker started");
            loop {
                tokio::select! {
                    _ = token.cancelled() => {
                        debug!("ticker received shutdown signal");
                        break;
                    }
                    _ = ticks.tick() => {
                        on_tick(clock.now());
                    }
                }
            }
            debug!("ticker stopped");
        });
        Self {
            shutdown_token,
            handle: Some(handle),
        }
    }

    pub fn is_running(&self) -> bool {
        !self.shutdown_token.is_cancelled()
    }

    /// Cancels the loop and waits for it to finish.
    pub async fn stop(mut self) {
        self.shutdown_token.cancel();
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.shutdown_token.cancel();
    }
}
