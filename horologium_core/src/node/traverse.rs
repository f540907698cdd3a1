// Copyright 2026 the Horologium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Walking a node's children.

use super::id::{NO_NODE, NodeId};
use super::store::NodeStore;

/// Direct children of a node, first to last.
///
/// Created by [`NodeStore::children`].
#[derive(Debug)]
pub struct Children<'a> {
    store: &'a NodeStore,
    next: Option<u32>,
}

impl<'a> Children<'a> {
    pub(crate) fn new(store: &'a NodeStore, first: u32) -> Self {
        Self {
            store,
            next: (first != NO_NODE).then_some(first),
        }
    }
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let idx = self.next?;
        let sibling = self.store.next_sibling[idx as usize];
        self.next = (sibling != NO_NODE).then_some(sibling);
        Some(self.store.handle(idx))
    }
}

impl NodeStore {
    /// Number of direct children under `id`.
    #[must_use]
    pub fn child_count(&self, id: NodeId) -> usize {
        self.children(id).count()
    }
}
