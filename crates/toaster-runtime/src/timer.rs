//! Delayed tasks keyed by generation.
//!
//! Every show and every dismiss bumps the manager's generation. A delayed
//! task records the generation it was armed under and acts only if that is
//! still current when it wakes, so a stale task can never touch newer state
//! even if it was already running when it got replaced. Aborting the task is
//! only there to release the sleeping future early.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// What a delayed task does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Dismiss the presented toast.
    AutoDismiss,
    /// Clear the config after the exit transition.
    GraceClear,
}

/// A scheduled task and the generation it belongs to.
#[derive(Debug)]
pub struct DelayedTask {
    kind: TimerKind,
    generation: u64,
    handle: JoinHandle<()>,
}

impl DelayedTask {
    /// Spawn `on_fire` after `delay` on the given runtime.
    pub fn spawn<F>(
        runtime: &Handle,
        kind: TimerKind,
        generation: u64,
        delay: Duration,
        on_fire: F,
    ) -> Self
    where
        F: FnOnce(TimerKind, u64) + Send + 'static,
    {
        let handle = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            on_fire(kind, generation);
        });

        Self {
            kind,
            generation,
            handle,
        }
    }

    pub fn kind(&self) -> TimerKind {
        self.kind
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Stop the task if it has not fired yet.
    pub fn cancel(self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_delay() {
        let fired = Arc::new(AtomicU64::new(0));
        let seen = fired.clone();

        let task = DelayedTask::spawn(
            &Handle::current(),
            TimerKind::AutoDismiss,
            7,
            Duration::from_secs(2),
            move |_, generation| seen.store(generation, Ordering::SeqCst),
        );
        assert_eq!(task.kind(), TimerKind::AutoDismiss);
        assert_eq!(task.generation(), 7);

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(2)).await;
        tokio::task::yield_now().await;
        assert_eq!(fired.load(Ordering::SeqCst), 7);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_firing() {
        let fired = Arc::new(AtomicU64::new(0));
        let seen = fired.clone();

        let task = DelayedTask::spawn(
            &Handle::current(),
            TimerKind::GraceClear,
            3,
            Duration::from_secs(1),
            move |_, generation| seen.store(generation, Ordering::SeqCst),
        );
        task.cancel();

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}
