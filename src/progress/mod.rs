//! Progress channel between the pipeline worker and the foreground
//!
//! A one-directional, ordered queue. The worker is the only producer; the
//! foreground poll loop is the only consumer. Events are delivered in strict
//! FIFO order and are never dropped; capacity is effectively bounded by the
//! segment count, so the channel is unbounded.

use tokio::sync::mpsc;

/// Fixed foreground polling interval in milliseconds
pub const POLL_INTERVAL_MS: u64 = 100;

/// One event reported by the pipeline worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// Free-form human-readable status
    Status(String),
    /// Segment `completed` of `total` has been entered
    SegmentProgress { completed: usize, total: usize },
    /// Terminal: the job finished successfully
    Done { total: usize },
    /// Terminal: the job aborted
    Failed { reason: String },
}

impl ProgressEvent {
    /// True for events after which no further events will be produced
    pub fn is_terminal(&self) -> bool {
        matches!(self, ProgressEvent::Done { .. } | ProgressEvent::Failed { .. })
    }
}

pub type ProgressSender = mpsc::UnboundedSender<ProgressEvent>;
pub type ProgressReceiver = mpsc::UnboundedReceiver<ProgressEvent>;

/// Create the worker-to-foreground progress channel
pub fn channel() -> (ProgressSender, ProgressReceiver) {
    mpsc::unbounded_channel()
}

/// Drain every event currently queued, without blocking.
///
/// Returns the drained events in insertion order. Draining an already-empty
/// channel yields nothing, so repeated drains are idempotent.
pub fn drain(receiver: &mut ProgressReceiver) -> Vec<ProgressEvent> {
    let mut events = Vec::new();
    while let Ok(event) = receiver.try_recv() {
        events.push(event);
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn drain_preserves_insertion_order() {
        let (tx, mut rx) = channel();
        tx.send(ProgressEvent::Status("Downloading video...".into())).unwrap();
        tx.send(ProgressEvent::SegmentProgress { completed: 1, total: 2 }).unwrap();
        tx.send(ProgressEvent::Done { total: 2 }).unwrap();

        let events = drain(&mut rx);
        assert_eq!(events.len(), 3);
        assert_eq!(events[0], ProgressEvent::Status("Downloading video...".into()));
        assert_eq!(events[1], ProgressEvent::SegmentProgress { completed: 1, total: 2 });
        assert_eq!(events[2], ProgressEvent::Done { total: 2 });
    }

    #[tokio::test]
    async fn second_drain_of_drained_channel_is_empty() {
        let (tx, mut rx) = channel();
        tx.send(ProgressEvent::Done { total: 0 }).unwrap();

        assert_eq!(drain(&mut rx).len(), 1);
        assert!(drain(&mut rx).is_empty());
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test]
    async fn drain_of_never_used_channel_is_empty() {
        let (_tx, mut rx) = channel();
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn terminal_classification() {
        assert!(ProgressEvent::Done { total: 3 }.is_terminal());
        assert!(ProgressEvent::Failed { reason: "x".into() }.is_terminal());
        assert!(!ProgressEvent::Status("Ready".into()).is_terminal());
        assert!(!ProgressEvent::SegmentProgress { completed: 1, total: 3 }.is_terminal());
    }
}
