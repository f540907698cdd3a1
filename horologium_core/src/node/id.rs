// Copyright 2026 the Horologium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node handles.

use core::fmt;

/// Link value stored in parent and sibling columns when there is no node.
pub(crate) const NO_NODE: u32 = u32::MAX;

/// A handle to a node in a [`NodeStore`](super::NodeStore).
///
/// Pairs a slot with the generation that slot had when the node was created.
/// The renderer throws display nodes away and builds new ones on every tick,
/// so a handle held across a [`render`](crate::render::render) call usually
/// points at a slot that now belongs to someone else; the generation is what
/// catches that.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) idx: u32,
    pub(crate) generation: u32,
}

impl NodeId {
    /// Slot number, the same value [`TreeChanges`](super::TreeChanges) reports.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.idx
    }

    /// How many times the slot had been recycled when this node took it.
    #[inline]
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}v{}", self.idx, self.generation)
    }
}
