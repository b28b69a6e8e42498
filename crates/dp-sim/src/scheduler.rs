// ABOUTME: Scheduler backed by the tokio runtime.
// ABOUTME: Frame callbacks run on the next yield, delayed callbacks after a real sleep.

use std::time::Duration;

use dp_layout::{Scheduler, Task};

/// Spawns onto the current `LocalSet`; must be used inside one.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    fn next_frame(&self, task: Task) {
        tokio::task::spawn_local(async move {
            tokio::task::yield_now().await;
            task();
        });
    }

    fn after(&self, delay: Duration, task: Task) {
        tokio::task::spawn_local(async move {
            tokio::time::sleep(delay).await;
            task();
        });
    }
}
