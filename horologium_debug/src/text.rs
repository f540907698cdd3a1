// Copyright 2026 the Horologium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plain-text extraction.

use horologium_core::node::{NodeId, NodeStore};

/// Returns the visible text of `root` and its descendants on one line.
///
/// Text fragments are collected in pre-order, trimmed, and joined with a
/// single space. Nodes without text (or with only whitespace) are skipped,
/// so a default split separator `" • "` contributes `•`.
///
/// # Panics
///
/// Panics if `root` is stale.
#[must_use]
pub fn plain_text(store: &NodeStore, root: NodeId) -> String {
    store
        .descendants(root)
        .into_iter()
        .filter_map(|id| store.text(id))
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
