// Copyright 2026 the Horologium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flushing and change tracking.
//!
//! A flush drains every dirty channel in one pass:
//!
//! 1. **Lifecycle**: nodes created and destroyed within the same batch are
//!    dropped from both lists, since no backend ever saw them.
//! 2. **TEXT** / **CLASS** / **ATTRIBUTES**: each channel is drained from the
//!    dirty tracker and its live indices are sorted into the matching list.
//!    Backends read the current values from the store.
//! 3. **TOPOLOGY**: if any structure changed, the pre-order traversal is
//!    rebuilt and [`TreeChanges::topology_changed`] is set.
//!
//! [`TreeChanges`] uses raw slot indices (`u32`) rather than [`NodeId`]
//! handles so that backends can index directly into the store's SoA arrays
//! via the `*_at()` accessors (e.g. [`text_at`](super::NodeStore::text_at))
//! without paying for generation checks on every access.
//!
//! [`NodeId`]: super::NodeId

use alloc::vec::Vec;

use understory_dirty::Channel;

use super::id::NO_NODE;
use super::store::NodeStore;
use crate::dirty;

/// The set of changes produced by a single [`NodeStore::flush`] call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeChanges {
    /// Nodes created since the last flush and still alive.
    pub added: Vec<u32>,
    /// Nodes destroyed since the last flush that existed before it.
    ///
    /// A slot may appear here and in [`added`](Self::added) when it was
    /// recycled; backends must apply removals first.
    pub removed: Vec<u32>,
    /// Live nodes whose text content changed.
    pub text: Vec<u32>,
    /// Live nodes whose class changed.
    pub classes: Vec<u32>,
    /// Live nodes whose attributes changed.
    pub attributes: Vec<u32>,
    /// Whether the tree topology changed (traversal order was rebuilt).
    pub topology_changed: bool,
}

impl TreeChanges {
    /// Clears all change lists.
    pub fn clear(&mut self) {
        self.added.clear();
        self.removed.clear();
        self.text.clear();
        self.classes.clear();
        self.attributes.clear();
        self.topology_changed = false;
    }

    /// Returns `true` if nothing changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty()
            && self.removed.is_empty()
            && self.text.is_empty()
            && self.classes.is_empty()
            && self.attributes.is_empty()
            && !self.topology_changed
    }
}

impl NodeStore {
    /// Drains all pending changes.
    ///
    /// Rebuilds the traversal order if topology changed, then reports every
    /// node touched since the previous flush.
    pub fn flush(&mut self) -> TreeChanges {
        let mut changes = TreeChanges::default();
        self.flush_into(&mut changes);
        changes
    }

    /// Like [`flush`](Self::flush), but reuses a caller-provided buffer
    /// to avoid allocation.
    pub fn flush_into(&mut self, changes: &mut TreeChanges) {
        changes.clear();

        // Lifecycle: cancel out nodes that were born and killed in this batch.
        let added = core::mem::take(&mut self.pending_added);
        let removed = core::mem::take(&mut self.pending_removed);
        changes.removed.extend(
            removed
                .iter()
                .filter(|id| !added.contains(id))
                .map(|id| id.idx),
        );
        changes.added.extend(
            added
                .iter()
                .filter(|&&id| self.is_alive(id))
                .map(|id| id.idx),
        );

        // Property channels.
        self.drain_live(dirty::TEXT, &mut changes.text);
        self.drain_live(dirty::CLASS, &mut changes.classes);
        self.drain_live(dirty::ATTRIBUTES, &mut changes.attributes);

        // TOPOLOGY only forces the rebuild below.
        let topology: Vec<u32> = self
            .dirty
            .drain(dirty::TOPOLOGY)
            .deterministic()
            .run()
            .collect();
        if !topology.is_empty() {
            self.traversal_dirty = true;
        }

        // Hand the lifecycle buffers back for reuse.
        self.pending_added = added;
        self.pending_added.clear();
        self.pending_removed = removed;
        self.pending_removed.clear();

        if self.traversal_dirty {
            self.rebuild_traversal_order();
            changes.topology_changed = true;
            self.traversal_dirty = false;
        }
    }

    /// Returns the current traversal order (depth-first pre-order of every
    /// root in slot order).
    ///
    /// Only valid after [`flush`](Self::flush) has been called at least once.
    #[must_use]
    pub fn traversal_order(&self) -> &[u32] {
        &self.traversal_order
    }

    /// Drains `channel` into `out`, keeping live slots in ascending order.
    fn drain_live(&mut self, channel: Channel, out: &mut Vec<u32>) {
        let live = &self.live;
        out.extend(
            self.dirty
                .drain(channel)
                .deterministic()
                .run()
                .filter(|&idx| live[idx as usize]),
        );
        out.sort_unstable();
    }

    /// Rebuilds the depth-first pre-order traversal of all live nodes.
    fn rebuild_traversal_order(&mut self) {
        let mut order = core::mem::take(&mut self.traversal_order);
        order.clear();
        for idx in 0..self.len {
            if self.live[idx as usize] && self.parent[idx as usize] == NO_NODE {
                self.collect_preorder(idx, &mut order);
            }
        }
        self.traversal_order = order;
    }
}
