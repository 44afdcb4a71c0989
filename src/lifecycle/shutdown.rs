//! Shutdown coordination for the server.

use std::future::Future;
use std::time::Duration;

use tokio::sync::broadcast;

/// Coordinator for graceful shutdown.
///
/// Provides a broadcast channel that all long-running tasks can subscribe to.
#[derive(Debug, Clone)]
pub struct Shutdown {
    /// Broadcast channel sender.
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of a bounded drain.
#[derive(Debug, PartialEq, Eq)]
pub enum Drain<T> {
    /// The drained work finished in time.
    Completed(T),
    /// The grace period ran out first.
    DeadlineElapsed,
}

/// Wait for `work` for at most `grace`.
///
/// This is a plain bounded wait: nothing is cancelled inside `work` when
/// the deadline passes, the caller decides what to abandon.
pub async fn drain_within<F>(work: F, grace: Duration) -> Drain<F::Output>
where
    F: Future,
{
    match tokio::time::timeout(grace, work).await {
        Ok(output) => Drain::Completed(output),
        Err(_) => Drain::DeadlineElapsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_trigger_reaches_all_subscribers() {
        let shutdown = Shutdown::new();
        let mut a = shutdown.subscribe();
        let mut b = shutdown.clone().subscribe();

        shutdown.trigger();
        assert!(a.recv().await.is_ok());
        assert!(b.recv().await.is_ok());
    }

    #[tokio::test]
    async fn test_drain_completes_before_deadline() {
        let outcome = drain_within(
            async {
                tokio::time::sleep(Duration::from_millis(10)).await;
                7
            },
            Duration::from_secs(5),
        )
        .await;
        assert_eq!(outcome, Drain::Completed(7));
    }

    #[tokio::test]
    async fn test_drain_deadline_elapses() {
        let outcome = drain_within(std::future::pending::<()>(), Duration::from_millis(50)).await;
        assert_eq!(outcome, Drain::DeadlineElapsed);
    }
}
