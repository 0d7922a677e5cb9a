//! One-way resize notifications to the activity-lifecycle side.
//!
//! The engine mutates geometry while the caller holds the hierarchy lock;
//! the lifecycle collaborator has its own lock. Notifications therefore go
//! through a queue and are consumed on another execution context, never
//! delivered inline.
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::models::{Rect, TaskId};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizeReason {
    /// Layout decided by the system (docked stack appearing, reparenting).
    System,
    /// Direct user action, like dragging a resize handle.
    User,
    /// The display rotated underneath the task.
    SystemScreenRotation,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResizeNotification {
    pub task_id: TaskId,
    pub reason: ResizeReason,
    pub bounds: Rect,
}

/// Sink for resize notifications. Implementations must not call back into
/// the engine synchronously.
pub trait ResizeNotifier {
    fn notify_task_resized(&self, notification: ResizeNotification);
}

/// Queue-backed notifier; the receiving half is drained elsewhere.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    sender: mpsc::UnboundedSender<ResizeNotification>,
}

impl ChannelNotifier {
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ResizeNotification>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl ResizeNotifier for ChannelNotifier {
    fn notify_task_resized(&self, notification: ResizeNotification) {
        if let Err(err) = self.sender.send(notification) {
            tracing::debug!("resize notification dropped, receiver is gone: {err}");
        }
    }
}
