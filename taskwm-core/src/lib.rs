//! Bounds engine for a hierarchical window-container tree: displays own
//! stacks, stacks own tasks, tasks own window groups. The crate computes
//! what rectangle each task occupies and classifies every change as a move,
//! a resize, or nothing.
#![warn(clippy::pedantic)]
// Each of these lints are globally allowed because they otherwise make a lot
// of noise for little value in this crate.
#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::default_trait_access
)]
pub mod errors;
mod handlers;
pub mod models;
pub mod notify;
pub mod state;

pub use errors::TaskWmError;
pub use models::Manager;
pub use models::Rect;
pub use models::Stack;
pub use models::Task;
pub use models::WindowGroup;
pub use notify::{ChannelNotifier, ResizeNotifier};
pub use state::State;
