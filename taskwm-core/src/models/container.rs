//! Generic tree element shared by every level of the container hierarchy.
//!
//! A container owns its children (z-order low to high, front-most last) and
//! carries the override/merged configuration pair. Parent links elsewhere in
//! the crate are plain ids; the child list here is the sole ownership path.
use serde::{Deserialize, Serialize};

use super::Configuration;

/// Receives a freshly recomputed parent configuration and folds it into the
/// subtree below.
pub trait Configurable {
    fn configure(&mut self, parent_merged: Configuration);
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Container<C> {
    children: Vec<C>,
    override_configuration: Configuration,
    merged_configuration: Configuration,
}

impl<C> Default for Container<C> {
    fn default() -> Self {
        Self {
            children: Vec::new(),
            override_configuration: Configuration::EMPTY,
            merged_configuration: Configuration::EMPTY,
        }
    }
}

impl<C: Configurable> Container<C> {
    #[must_use]
    pub fn children(&self) -> &[C] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [C] {
        &mut self.children
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Insert a child at `position` (clamped to the child count) and hand it
    /// the merged configuration it now inherits.
    pub fn attach(&mut self, child: C, position: usize) {
        let position = position.min(self.children.len());
        self.children.insert(position, child);
        self.children[position].configure(self.merged_configuration);
    }

    pub fn detach(&mut self, index: usize) -> C {
        self.children.remove(index)
    }

    #[must_use]
    pub const fn override_configuration(&self) -> Configuration {
        self.override_configuration
    }

    #[must_use]
    pub const fn merged_configuration(&self) -> Configuration {
        self.merged_configuration
    }

    /// Replace the override configuration and rebuild the merged view of this
    /// container and everything below it.
    pub fn set_override_configuration(
        &mut self,
        configuration: Configuration,
        parent_merged: Configuration,
    ) {
        self.override_configuration = configuration;
        self.configure(parent_merged);
    }

    /// Recompute the merged configuration against a (possibly changed) parent
    /// and push the result down to every child.
    pub fn configure(&mut self, parent_merged: Configuration) {
        self.merged_configuration = self.override_configuration.merged_over(&parent_merged);
        for child in &mut self.children {
            child.configure(self.merged_configuration);
        }
    }
}
