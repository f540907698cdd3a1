// Copyright 2026 the Horologium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM element management.
//!
//! Mirrors [`NodeStore`] state into HTML and SVG elements by applying
//! incremental updates from [`TreeChanges`].
//!
//! Each node maps to one element. A node's text lives in a DOM `Text` node
//! kept as the element's first child, so text and child elements can coexist
//! (e.g. a date block followed by its era span).
//!
//! [`NodeStore`]: horologium_core::node::NodeStore
//! [`TreeChanges`]: horologium_core::node::TreeChanges

use alloc::string::ToString;
use alloc::vec::Vec;

use horologium_core::backend::Presenter;
use horologium_core::node::{NodeId, NodeKind, NodeStore, TreeChanges};
use web_sys::{Document, Element, HtmlElement, Text};

/// Namespace of SVG elements.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Returns the namespace an element for `kind` must be created in, or `None`
/// for plain HTML.
#[must_use]
pub fn namespace_for(kind: NodeKind) -> Option<&'static str> {
    kind.is_vector().then_some(SVG_NAMESPACE)
}

/// Maps a [`NodeStore`] to live DOM elements, applying incremental updates
/// from [`TreeChanges`].
///
/// Root nodes are either [mounted](Self::mount) onto existing page elements
/// or appended to the presenter's container. Call [`apply`](Self::apply)
/// after every flush to synchronize the DOM with the store.
pub struct DomPresenter {
    container: HtmlElement,
    elements: Vec<Option<Element>>,
    texts: Vec<Option<Text>>,
    mounted: Vec<u32>,
}

impl core::fmt::Debug for DomPresenter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomPresenter")
            .field("container", &"HtmlElement")
            .field("elements_len", &self.elements.len())
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}

impl DomPresenter {
    /// Creates a new presenter that appends unmounted roots to `container`.
    #[must_use]
    pub fn new(container: HtmlElement) -> Self {
        Self {
            container,
            elements: Vec::new(),
            texts: Vec::new(),
            mounted: Vec::new(),
        }
    }

    /// Binds a root node to an element the page already contains.
    ///
    /// The element is reused instead of creating a new one when the node is
    /// first added, and is never detached from its place in the page.
    pub fn mount(&mut self, node: NodeId, element: Element) {
        let idx = node.index();
        put(&mut self.elements, idx, element);
        if !self.mounted.contains(&idx) {
            self.mounted.push(idx);
        }
    }

    /// Returns a reference to the container element.
    #[must_use]
    pub fn container(&self) -> &HtmlElement {
        &self.container
    }

    /// Returns the DOM element for the given slot index, if it exists.
    #[must_use]
    pub fn get_element(&self, idx: u32) -> Option<&Element> {
        self.elements
            .get(idx as usize)
            .and_then(|slot| slot.as_ref())
    }

    fn is_mounted(&self, idx: u32) -> bool {
        self.mounted.contains(&idx)
    }

    fn document(&self) -> Option<Document> {
        self.container.owner_document()
    }

    fn create(&self, doc: &Document, kind: NodeKind) -> Option<Element> {
        match namespace_for(kind) {
            Some(ns) => doc.create_element_ns(Some(ns), kind.tag()).ok(),
            None => doc.create_element(kind.tag()).ok(),
        }
    }

    /// Writes the node's text into its leading `Text` child.
    fn sync_text(&mut self, doc: &Document, store: &NodeStore, idx: u32) {
        let Some(el) = self.get_element(idx).cloned() else {
            return;
        };
        let text = store.text_at(idx).unwrap_or_default();
        if let Some(node) = self.texts.get(idx as usize).and_then(Option::as_ref) {
            node.set_data(text);
            return;
        }
        if text.is_empty() {
            return;
        }
        let node = doc.create_text_node(text);
        let _ = el.insert_before(&node, el.first_child().as_ref());
        put(&mut self.texts, idx, node);
    }

    fn sync_class(&self, store: &NodeStore, idx: u32) {
        if let Some(el) = self.get_element(idx) {
            // `class` as an attribute works for both HTML and SVG elements.
            let _ = match store.class_at(idx) {
                Some(class) => el.set_attribute("class", class),
                None => el.remove_attribute("class"),
            };
        }
    }

    fn sync_attributes(&self, store: &NodeStore, idx: u32) {
        if let Some(el) = self.get_element(idx) {
            for (name, value) in store.attrs_at(idx) {
                let _ = el.set_attribute(name, &value.to_string());
            }
        }
    }
}

impl Presenter for DomPresenter {
    /// Applies incremental changes from a [`TreeChanges`] to the DOM.
    fn apply(&mut self, store: &NodeStore, changes: &TreeChanges) {
        let Some(doc) = self.document() else {
            return;
        };

        // 1. Removals
        for &idx in &changes.removed {
            take(&mut self.texts, idx);
            if self.is_mounted(idx) {
                self.mounted.retain(|&m| m != idx);
                take(&mut self.elements, idx);
            } else if let Some(el) = take(&mut self.elements, idx) {
                el.remove();
            }
        }

        // 2. Additions
        for &idx in &changes.added {
            if !self.is_mounted(idx) {
                let Some(el) = self.create(&doc, store.kind_at(idx)) else {
                    continue;
                };
                put(&mut self.elements, idx, el);
            }
            self.sync_class(store, idx);
            self.sync_attributes(store, idx);
            self.sync_text(&doc, store, idx);
        }

        // 3. Text
        for &idx in &changes.text {
            self.sync_text(&doc, store, idx);
        }

        // 4. Classes
        for &idx in &changes.classes {
            self.sync_class(store, idx);
        }

        // 5. Attributes
        for &idx in &changes.attributes {
            self.sync_attributes(store, idx);
        }

        // 6. Topology reorder
        if changes.topology_changed {
            for &idx in store.traversal_order() {
                let Some(el) = self.get_element(idx) else {
                    continue;
                };
                // DOM re-append moves an existing child, reordering it. The
                // leading text node was inserted first and stays in front.
                match store.parent_at(idx) {
                    Some(parent) => {
                        if let Some(parent_el) = self.get_element(parent) {
                            let _ = parent_el.append_child(el);
                        }
                    }
                    None if self.is_mounted(idx) => {}
                    None => {
                        let _ = self.container.append_child(el);
                    }
                }
            }
        }
    }
}

/// Stores a value at the given slot index, growing the vec if needed.
fn put<T>(slots: &mut Vec<Option<T>>, idx: u32, value: T) {
    let slot = idx as usize;
    if slots.len() <= slot {
        slots.resize_with(slot + 1, || None);
    }
    slots[slot] = Some(value);
}

/// Takes a value out of the slot, leaving `None`.
fn take<T>(slots: &mut [Option<T>], idx: u32) -> Option<T> {
    slots.get_mut(idx as usize)?.take()
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn vector_kinds_use_svg_namespace() {
        assert_eq!(namespace_for(NodeKind::Block), None);
        assert_eq!(namespace_for(NodeKind::Inline), None);
        for kind in [
            NodeKind::Svg,
            NodeKind::Group,
            NodeKind::Rect,
            NodeKind::Circle,
            NodeKind::Line,
        ] {
            assert_eq!(namespace_for(kind), Some(SVG_NAMESPACE));
        }
    }

    #[test]
    fn slots_grow_and_drain() {
        let mut slots: Vec<Option<&str>> = vec![];
        put(&mut slots, 3, "d");
        assert_eq!(slots.len(), 4);
        assert_eq!(take(&mut slots, 3), Some("d"));
        assert_eq!(take(&mut slots, 3), None);
        assert_eq!(take(&mut slots, 9), None);
    }
}
