// Copyright 2026 the Horologium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Struct-of-arrays node storage with allocation, topology, and property management.

use alloc::string::String;
use alloc::vec::Vec;

use understory_dirty::{Channel, CycleHandling, DirtyTracker};

use super::id::{NO_NODE, NodeId};
use super::kind::{AttrValue, NodeKind};
use super::traverse::Children;
use crate::dirty;

/// Attribute list of a single node, in first-set order.
pub type Attributes = Vec<(&'static str, AttrValue)>;

/// Struct-of-arrays storage for all output nodes.
///
/// Nodes are addressed by [`NodeId`] handles. Internally, each node occupies
/// a slot in parallel arrays. Destroyed nodes are recycled via a free list,
/// and generation counters prevent stale handle access.
#[derive(Debug)]
pub struct NodeStore {
    // -- Topology --
    pub(crate) parent: Vec<u32>,
    pub(crate) first_child: Vec<u32>,
    pub(crate) next_sibling: Vec<u32>,
    pub(crate) prev_sibling: Vec<u32>,

    // -- Properties --
    pub(crate) kind: Vec<NodeKind>,
    pub(crate) class: Vec<Option<String>>,
    pub(crate) text: Vec<Option<String>>,
    pub(crate) attrs: Vec<Attributes>,

    // -- Allocation --
    pub(crate) generation: Vec<u32>,
    pub(crate) live: Vec<bool>,
    pub(crate) free_list: Vec<u32>,
    pub(crate) len: u32,

    // -- Dirty tracking --
    pub(crate) dirty: DirtyTracker<u32>,

    // -- Traversal cache --
    pub(crate) traversal_order: Vec<u32>,
    pub(crate) traversal_dirty: bool,

    // -- Lifecycle tracking --
    pub(crate) pending_added: Vec<NodeId>,
    pub(crate) pending_removed: Vec<NodeId>,
}

impl Default for NodeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeStore {
    /// Creates an empty node store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parent: Vec::new(),
            first_child: Vec::new(),
            next_sibling: Vec::new(),
            prev_sibling: Vec::new(),
            kind: Vec::new(),
            class: Vec::new(),
            text: Vec::new(),
            attrs: Vec::new(),
            generation: Vec::new(),
            live: Vec::new(),
            free_list: Vec::new(),
            len: 0,
            dirty: DirtyTracker::with_cycle_handling(CycleHandling::Error),
            traversal_order: Vec::new(),
            traversal_dirty: true,
            pending_added: Vec::new(),
            pending_removed: Vec::new(),
        }
    }

    // -- Allocation API --

    /// Creates a new detached node and returns its handle.
    ///
    /// The node starts with no class, no text, no attributes, and no parent.
    pub fn create_node(&mut self, kind: NodeKind) -> NodeId {
        let idx = if let Some(idx) = self.free_list.pop() {
            // Reuse a freed slot.
            let i = idx as usize;
            self.generation[i] += 1;
            self.parent[i] = NO_NODE;
            self.first_child[i] = NO_NODE;
            self.next_sibling[i] = NO_NODE;
            self.prev_sibling[i] = NO_NODE;
            self.kind[i] = kind;
            self.class[i] = None;
            self.text[i] = None;
            self.attrs[i].clear();
            self.live[i] = true;
            idx
        } else {
            // Allocate a new slot.
            let idx = self.len;
            self.len += 1;
            self.parent.push(NO_NODE);
            self.first_child.push(NO_NODE);
            self.next_sibling.push(NO_NODE);
            self.prev_sibling.push(NO_NODE);
            self.kind.push(kind);
            self.class.push(None);
            self.text.push(None);
            self.attrs.push(Vec::new());
            self.generation.push(0);
            self.live.push(true);
            idx
        };

        let id = NodeId {
            idx,
            generation: self.generation[idx as usize],
        };
        self.traversal_dirty = true;
        self.pending_added.push(id);
        id
    }

    /// Destroys a childless node, freeing its slot for reuse.
    ///
    /// # Panics
    ///
    /// Panics if the node has children (use
    /// [`destroy_subtree`](Self::destroy_subtree)) or if the handle is stale.
    pub fn destroy_node(&mut self, id: NodeId) {
        self.validate(id);
        let idx = id.idx;
        assert!(
            self.first_child[idx as usize] == NO_NODE,
            "cannot destroy node with children"
        );

        if self.parent[idx as usize] != NO_NODE {
            let p = self.parent[idx as usize];
            self.unlink_from_parent(idx);
            self.mark(p, dirty::TOPOLOGY);
        }

        // Pending marks belong to the dead node, not to the slot's next tenant.
        self.dirty.remove_key(idx);

        // Bump generation so old handles immediately fail validation.
        self.generation[idx as usize] += 1;
        self.live[idx as usize] = false;

        self.free_list.push(idx);
        self.traversal_dirty = true;
        self.pending_removed.push(id);
    }

    /// Destroys a node together with all of its descendants.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn destroy_subtree(&mut self, id: NodeId) {
        self.clear_children(id);
        self.destroy_node(id);
    }

    /// Destroys every descendant of a node, leaving the node itself in place.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn clear_children(&mut self, id: NodeId) {
        self.validate(id);
        loop {
            let first = self.first_child[id.idx as usize];
            if first == NO_NODE {
                break;
            }
            self.destroy_subtree(self.handle(first));
        }
    }

    /// Returns whether the given handle refers to a live node.
    #[must_use]
    pub fn is_alive(&self, id: NodeId) -> bool {
        (id.idx < self.len)
            && self.generation[id.idx as usize] == id.generation
            && self.live[id.idx as usize]
    }

    // -- Topology API --

    /// Adds `child` as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if either handle is stale, or if `child` already has a parent.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) {
        self.validate(parent);
        self.validate(child);
        let p = parent.idx;
        let c = child.idx;
        assert!(
            self.parent[c as usize] == NO_NODE,
            "child already has a parent"
        );

        self.parent[c as usize] = p;
        self.prev_sibling[c as usize] = NO_NODE;
        self.next_sibling[c as usize] = NO_NODE;

        if self.first_child[p as usize] == NO_NODE {
            self.first_child[p as usize] = c;
        } else {
            // Walk to last child.
            let mut last = self.first_child[p as usize];
            while self.next_sibling[last as usize] != NO_NODE {
                last = self.next_sibling[last as usize];
            }
            self.next_sibling[last as usize] = c;
            self.prev_sibling[c as usize] = last;
        }

        self.traversal_dirty = true;
        self.mark(p, dirty::TOPOLOGY);
    }

    /// Creates a node of `kind` and appends it to `parent`.
    pub fn append(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let child = self.create_node(kind);
        self.add_child(parent, child);
        child
    }

    /// Removes `child` from its current parent, keeping it alive.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale or the node has no parent.
    pub fn remove_from_parent(&mut self, child: NodeId) {
        self.validate(child);
        let c = child.idx;
        assert!(self.parent[c as usize] != NO_NODE, "node has no parent");

        let p = self.parent[c as usize];
        self.unlink_from_parent(c);

        self.traversal_dirty = true;
        self.mark(p, dirty::TOPOLOGY);
    }

    /// Returns the parent of a node, if any.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.validate(id);
        let p = self.parent[id.idx as usize];
        if p == NO_NODE { None } else { Some(self.handle(p)) }
    }

    /// Returns an iterator over the direct children of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> Children<'_> {
        self.validate(id);
        Children::new(self, self.first_child[id.idx as usize])
    }

    /// Returns the live nodes that have no parent.
    #[must_use]
    pub fn roots(&self) -> Vec<NodeId> {
        (0..self.len)
            .filter(|&idx| self.live[idx as usize] && self.parent[idx as usize] == NO_NODE)
            .map(|idx| self.handle(idx))
            .collect()
    }

    /// Returns `root` and all of its descendants in depth-first pre-order.
    #[must_use]
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        self.validate(root);
        let mut out = Vec::new();
        self.collect_preorder(root.idx, &mut out);
        out.into_iter().map(|idx| self.handle(idx)).collect()
    }

    /// Returns the nodes under `root` (inclusive) whose class list contains
    /// the token `class`, in pre-order.
    #[must_use]
    pub fn find_by_class(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|&id| {
                self.class(id)
                    .is_some_and(|list| list.split_ascii_whitespace().any(|c| c == class))
            })
            .collect()
    }

    // -- Property getters (read-only, no dirty marking) --

    /// Returns the kind of a node.
    #[must_use]
    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.validate(id);
        self.kind[id.idx as usize]
    }

    /// Returns the class of a node.
    #[must_use]
    pub fn class(&self, id: NodeId) -> Option<&str> {
        self.validate(id);
        self.class[id.idx as usize].as_deref()
    }

    /// Returns the text content of a node.
    #[must_use]
    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.validate(id);
        self.text[id.idx as usize].as_deref()
    }

    /// Returns all attributes of a node.
    #[must_use]
    pub fn attrs(&self, id: NodeId) -> &[(&'static str, AttrValue)] {
        self.validate(id);
        &self.attrs[id.idx as usize]
    }

    /// Returns one attribute of a node.
    #[must_use]
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&AttrValue> {
        self.attrs(id)
            .iter()
            .find_map(|(n, v)| (*n == name).then_some(v))
    }

    /// Returns one attribute of a node as a number.
    #[must_use]
    pub fn number_attr(&self, id: NodeId, name: &str) -> Option<f64> {
        self.attr(id, name).and_then(AttrValue::as_number)
    }

    // -- Mutation API (auto-marks dirty) --

    /// Sets (or clears) the class of a node.
    ///
    /// Marks the CLASS channel only when the value changes.
    pub fn set_class(&mut self, id: NodeId, class: Option<&str>) {
        self.validate(id);
        let slot = &mut self.class[id.idx as usize];
        if slot.as_deref() != class {
            *slot = class.map(String::from);
            self.mark(id.idx, dirty::CLASS);
        }
    }

    /// Sets (or clears) the text content of a node.
    ///
    /// Marks the TEXT channel only when the value changes.
    pub fn set_text(&mut self, id: NodeId, text: Option<&str>) {
        self.validate(id);
        let slot = &mut self.text[id.idx as usize];
        if slot.as_deref() != text {
            *slot = text.map(String::from);
            self.mark(id.idx, dirty::TEXT);
        }
    }

    /// Sets an attribute, replacing any previous value of the same name.
    ///
    /// Marks the ATTRIBUTES channel only when the value changes.
    pub fn set_attr(&mut self, id: NodeId, name: &'static str, value: impl Into<AttrValue>) {
        self.validate(id);
        let value = value.into();
        let attrs = &mut self.attrs[id.idx as usize];
        match attrs.iter_mut().find(|(n, _)| *n == name) {
            Some((_, old)) if *old == value => return,
            Some((_, old)) => *old = value,
            None => attrs.push((name, value)),
        }
        self.mark(id.idx, dirty::ATTRIBUTES);
    }

    // -- Raw-index accessors for backends --
    //
    // These accept raw slot indices (as found in `TreeChanges`) rather than
    // `NodeId` handles, skipping generation validation. Only use with indices
    // that came from `TreeChanges` or `traversal_order()`.

    /// Returns the kind at raw slot `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len`.
    #[must_use]
    pub fn kind_at(&self, idx: u32) -> NodeKind {
        self.check_slot(idx);
        self.kind[idx as usize]
    }

    /// Returns the class at raw slot `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len`.
    #[must_use]
    pub fn class_at(&self, idx: u32) -> Option<&str> {
        self.check_slot(idx);
        self.class[idx as usize].as_deref()
    }

    /// Returns the text at raw slot `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len`.
    #[must_use]
    pub fn text_at(&self, idx: u32) -> Option<&str> {
        self.check_slot(idx);
        self.text[idx as usize].as_deref()
    }

    /// Returns the attributes at raw slot `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len`.
    #[must_use]
    pub fn attrs_at(&self, idx: u32) -> &[(&'static str, AttrValue)] {
        self.check_slot(idx);
        &self.attrs[idx as usize]
    }

    /// Returns the parent slot of raw slot `idx`, if any.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len`.
    #[must_use]
    pub fn parent_at(&self, idx: u32) -> Option<u32> {
        self.check_slot(idx);
        let p = self.parent[idx as usize];
        (p != NO_NODE).then_some(p)
    }

    // -- Internal helpers --

    /// Builds the current handle for a raw slot.
    pub(crate) fn handle(&self, idx: u32) -> NodeId {
        NodeId {
            idx,
            generation: self.generation[idx as usize],
        }
    }

    /// Panics if the handle is stale.
    fn validate(&self, id: NodeId) {
        assert!(
            self.is_alive(id),
            "stale NodeId: {id:?} (current gen: {})",
            if id.idx < self.len {
                self.generation[id.idx as usize]
            } else {
                u32::MAX
            }
        );
    }

    fn check_slot(&self, idx: u32) {
        assert!(
            idx < self.len,
            "slot index {idx} out of range (len {})",
            self.len
        );
    }

    /// Records `channels` as dirty for slot `idx`.
    fn mark(&mut self, idx: u32, channel: Channel) {
        self.dirty.mark(idx, channel);
    }

    /// Removes `idx` from its parent's child list without touching dirty state.
    fn unlink_from_parent(&mut self, idx: u32) {
        let p = self.parent[idx as usize];
        let prev = self.prev_sibling[idx as usize];
        let next = self.next_sibling[idx as usize];

        if prev != NO_NODE {
            self.next_sibling[prev as usize] = next;
        } else {
            // Was first child.
            self.first_child[p as usize] = next;
        }

        if next != NO_NODE {
            self.prev_sibling[next as usize] = prev;
        }

        self.parent[idx as usize] = NO_NODE;
        self.prev_sibling[idx as usize] = NO_NODE;
        self.next_sibling[idx as usize] = NO_NODE;
    }

    /// Appends the pre-order traversal of the subtree at `idx` to `out`.
    pub(crate) fn collect_preorder(&self, idx: u32, out: &mut Vec<u32>) {
        out.push(idx);
        let mut child = self.first_child[idx as usize];
        while child != NO_NODE {
            self.collect_preorder(child, out);
            child = self.next_sibling[child as usize];
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn create_and_destroy() {
        let mut store = NodeStore::new();
        let id = store.create_node(NodeKind::Block);
        assert!(store.is_alive(id));
        store.destroy_node(id);
        assert!(!store.is_alive(id));
    }

    #[test]
    fn generation_prevents_stale_access() {
        let mut store = NodeStore::new();
        let id1 = store.create_node(NodeKind::Inline);
        store.destroy_node(id1);
        let id2 = store.create_node(NodeKind::Inline);
        // id2 reuses the same slot but has a different generation.
        assert!(!store.is_alive(id1));
        assert!(store.is_alive(id2));
        assert_eq!(id1.idx, id2.idx);
        assert_ne!(id1.generation, id2.generation);
    }

    #[test]
    fn reused_slot_starts_clean() {
        let mut store = NodeStore::new();
        let old = store.create_node(NodeKind::Rect);
        store.set_text(old, Some("old"));
        store.set_attr(old, "width", 4.0);
        store.destroy_node(old);

        let new = store.create_node(NodeKind::Block);
        assert_eq!(store.kind(new), NodeKind::Block);
        assert_eq!(store.text(new), None);
        assert!(store.attrs(new).is_empty());
    }

    #[test]
    fn add_child_and_query() {
        let mut store = NodeStore::new();
        let parent = store.create_node(NodeKind::Block);
        let child1 = store.append(parent, NodeKind::Inline);
        let child2 = store.append(parent, NodeKind::Inline);

        assert_eq!(store.parent(child1), Some(parent));
        assert_eq!(store.parent(child2), Some(parent));

        let kids: Vec<_> = store.children(parent).collect();
        assert_eq!(kids, vec![child1, child2]);
    }

    #[test]
    fn remove_from_parent_keeps_node() {
        let mut store = NodeStore::new();
        let parent = store.create_node(NodeKind::Block);
        let child = store.append(parent, NodeKind::Inline);

        store.remove_from_parent(child);
        assert_eq!(store.parent(child), None);
        assert!(store.children(parent).next().is_none());
        assert!(store.is_alive(child));
    }

    #[test]
    fn clear_children_destroys_whole_subtrees() {
        let mut store = NodeStore::new();
        let root = store.create_node(NodeKind::Block);
        let a = store.append(root, NodeKind::Block);
        let a1 = store.append(a, NodeKind::Inline);
        let b = store.append(root, NodeKind::Inline);

        store.clear_children(root);
        assert!(store.is_alive(root));
        for id in [a, a1, b] {
            assert!(!store.is_alive(id), "{id:?} should be destroyed");
        }
        assert!(store.children(root).next().is_none());
    }

    #[test]
    fn roots_returns_parentless_nodes() {
        let mut store = NodeStore::new();
        let a = store.create_node(NodeKind::Block);
        let b = store.create_node(NodeKind::Block);
        let c = store.append(a, NodeKind::Inline);
        let dead = store.create_node(NodeKind::Block);
        store.destroy_node(dead);

        let roots = store.roots();
        assert_eq!(roots, vec![a, b]);
        assert!(!roots.contains(&c));
    }

    #[test]
    fn descendants_are_preorder() {
        let mut store = NodeStore::new();
        let root = store.create_node(NodeKind::Block);
        let a = store.append(root, NodeKind::Block);
        let a1 = store.append(a, NodeKind::Inline);
        let b = store.append(root, NodeKind::Inline);
        assert_eq!(store.descendants(root), vec![root, a, a1, b]);
    }

    #[test]
    fn find_by_class_matches_tokens() {
        let mut store = NodeStore::new();
        let root = store.create_node(NodeKind::Block);
        let a = store.append(root, NodeKind::Inline);
        let b = store.append(root, NodeKind::Inline);
        store.set_class(a, Some("time-value big"));
        store.set_class(b, Some("time-valued"));

        assert_eq!(store.find_by_class(root, "time-value"), vec![a]);
        assert_eq!(store.find_by_class(root, "big"), vec![a]);
    }

    #[test]
    fn attributes_replace_in_place() {
        let mut store = NodeStore::new();
        let id = store.create_node(NodeKind::Rect);
        store.set_attr(id, "width", 10.0);
        store.set_attr(id, "fill", "red");
        store.set_attr(id, "width", 20.0);

        assert_eq!(store.attrs(id).len(), 2);
        assert_eq!(store.number_attr(id, "width"), Some(20.0));
        assert_eq!(store.attr(id, "fill"), Some(&AttrValue::from("red")));
        assert_eq!(store.number_attr(id, "fill"), None);
    }

    #[test]
    #[should_panic(expected = "cannot destroy node with children")]
    fn destroy_with_children_panics() {
        let mut store = NodeStore::new();
        let parent = store.create_node(NodeKind::Block);
        let _child = store.append(parent, NodeKind::Inline);
        store.destroy_node(parent);
    }

    #[test]
    #[should_panic(expected = "child already has a parent")]
    fn double_parent_panics() {
        let mut store = NodeStore::new();
        let p1 = store.create_node(NodeKind::Block);
        let p2 = store.create_node(NodeKind::Block);
        let child = store.append(p1, NodeKind::Inline);
        store.add_child(p2, child);
    }

    #[test]
    #[should_panic(expected = "stale NodeId")]
    fn destroyed_handle_panics_on_set_text() {
        let mut store = NodeStore::new();
        let id = store.create_node(NodeKind::Inline);
        store.destroy_node(id);
        store.set_text(id, Some("late"));
    }

    #[test]
    #[should_panic(expected = "stale NodeId")]
    fn destroyed_handle_panics_on_parent() {
        let mut store = NodeStore::new();
        let id = store.create_node(NodeKind::Inline);
        store.destroy_node(id);
        let _ = store.parent(id);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn raw_access_out_of_range_panics() {
        let store = NodeStore::new();
        let _ = store.kind_at(3);
    }
}
