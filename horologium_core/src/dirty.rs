// Copyright 2026 the Horologium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty-tracking channels for the node tree.
//!
//! The [`NodeStore`](crate::node::NodeStore) keeps one
//! [`DirtyTracker`](understory_dirty::DirtyTracker) keyed by slot index.
//! Every mutation marks one channel on the touched node; marking the same
//! node twice between flushes records it once.
//!
//! - [`TEXT`]: the node's text content changed.
//! - [`CLASS`]: the node's styling class changed.
//! - [`ATTRIBUTES`]: one or more attributes changed.
//! - [`TOPOLOGY`]: a child was added or removed under the node. Triggers a
//!   traversal-order rebuild on the next flush.
//!
//! All channels are local-only and marked with the default policy. Node
//! properties are not inherited, so there are no dependency edges and only
//! the explicitly marked node appears in the drain output.
//!
//! # Consumption
//!
//! Callers never query dirty state directly. Each
//! [`NodeStore::flush`](crate::node::NodeStore::flush) call drains all
//! channels into a [`TreeChanges`](crate::node::TreeChanges), which backends
//! [consume](crate::backend::Presenter::apply) to update a native tree.

use understory_dirty::Channel;

/// Text content changed.
pub const TEXT: Channel = Channel::new(0);

/// Styling class changed.
pub const CLASS: Channel = Channel::new(1);

/// Attribute values changed.
pub const ATTRIBUTES: Channel = Channel::new(2);

/// Children added or removed.
pub const TOPOLOGY: Channel = Channel::new(3);
