//! The child collaborator of a task: a group of windows that move and resize
//! together. The engine only needs visibility flags, the primary window's
//! visible frame, and the resize/move callbacks; everything else about
//! windows lives outside this crate.
use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{Configurable, Rect};

/// Capabilities a concrete window-group type must expose to the engine.
pub trait WindowGroup:
    Configurable + Serialize + DeserializeOwned + Debug + Clone + PartialEq + Send + 'static
{
    /// The group is animating out and should be skipped by visibility
    /// queries.
    fn is_exiting(&self) -> bool;

    /// The client reports the group as hidden.
    fn is_hidden(&self) -> bool;

    /// A hide was requested but has not been applied yet.
    fn hidden_requested(&self) -> bool;

    /// Visible frame of the group's primary window, if it has one.
    fn visible_frame(&self) -> Option<Rect>;

    /// At least one window of this group is still alive.
    fn has_windows_alive(&self) -> bool;

    /// The owning task's size changed.
    fn on_resize(&mut self);

    /// The owning task moved without a size change.
    fn on_moved_by_resize(&mut self);
}

/// Window group double for engine tests.
#[cfg(test)]
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default)]
pub(crate) struct MockWindowGroup {
    pub id: i32,
    pub exiting: bool,
    pub hidden: bool,
    pub hide_requested: bool,
    pub frame: Option<Rect>,
    pub alive: bool,
    pub resize_count: u32,
    pub move_count: u32,
    pub configuration: crate::models::Configuration,
}

#[cfg(test)]
impl MockWindowGroup {
    pub(crate) fn new(id: i32) -> Self {
        Self {
            id,
            alive: true,
            ..Self::default()
        }
    }

    pub(crate) fn with_frame(id: i32, frame: Rect) -> Self {
        Self {
            frame: Some(frame),
            ..Self::new(id)
        }
    }
}

// Groups are identified by id; the callback counters are bookkeeping.
#[cfg(test)]
impl PartialEq for MockWindowGroup {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

#[cfg(test)]
impl Configurable for MockWindowGroup {
    fn configure(&mut self, parent_merged: crate::models::Configuration) {
        self.configuration = parent_merged;
    }
}

#[cfg(test)]
impl WindowGroup for MockWindowGroup {
    fn is_exiting(&self) -> bool {
        self.exiting
    }

    fn is_hidden(&self) -> bool {
        self.hidden
    }

    fn hidden_requested(&self) -> bool {
        self.hide_requested
    }

    fn visible_frame(&self) -> Option<Rect> {
        self.frame
    }

    fn has_windows_alive(&self) -> bool {
        self.alive
    }

    fn on_resize(&mut self) {
        self.resize_count += 1;
    }

    fn on_moved_by_resize(&mut self) {
        self.move_count += 1;
    }
}
