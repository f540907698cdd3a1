// Copyright 2026 the Horologium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Output tree data model.
//!
//! A *node* is one element of the tree the renderers build. Each node has:
//!
//! - An identity ([`NodeId`]), a generational handle that becomes stale when
//!   the node is destroyed, preventing use-after-free bugs at the API level.
//! - Topology: parent, first-child, and sibling links forming an ordered tree.
//! - A [`NodeKind`] fixed at creation.
//! - **Properties** set by the renderers: [`class`](NodeStore::set_class),
//!   [`text`](NodeStore::set_text), and named
//!   [`attributes`](NodeStore::set_attr).
//!
//! Nodes are stored in struct-of-arrays layout with index-based handles
//! for cache-friendly traversal.
//!
//! # Dirty tracking
//!
//! Property mutations automatically mark the corresponding dirty channel
//! (see [`dirty`](crate::dirty)) when the stored value actually changes.
//! [`NodeStore::flush`] drains them into a [`TreeChanges`].

mod changes;
mod id;
mod kind;
mod store;
mod traverse;

pub use changes::TreeChanges;
pub use id::NodeId;
pub use kind::{AttrValue, NodeKind};
pub use store::{Attributes, NodeStore};
pub use traverse::Children;
