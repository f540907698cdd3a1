// Copyright 2026 the Horologium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable tree output.
//!
//! [`outline`] renders a subtree as indented selector lines, one node per
//! line:
//!
//! ```text
//! div.time-display.unified
//!   div.time-main
//!     span.time-prefix "@"
//!     span.time-value "500.00"
//!   div.time-label "Swatch Internet Time"
//! ```
//!
//! [`PrettyPresenter`] implements [`Presenter`] and writes one summary line
//! per applied change set to a [`Write`](std::io::Write) destination
//! (default: stderr).

use std::fmt::Write as _;
use std::io::{self, Write};

use horologium_core::backend::Presenter;
use horologium_core::node::{NodeId, NodeStore, TreeChanges};

/// Writes the outline of `root` and its descendants to `writer`.
///
/// # Panics
///
/// Panics if `root` is stale.
pub fn write_outline(store: &NodeStore, root: NodeId, writer: &mut dyn Write) -> io::Result<()> {
    writer.write_all(outline(store, root).as_bytes())
}

/// Returns the outline of `root` and its descendants.
///
/// # Panics
///
/// Panics if `root` is stale.
#[must_use]
pub fn outline(store: &NodeStore, root: NodeId) -> String {
    let mut out = String::new();
    outline_into(store, root, 0, &mut out);
    out
}

fn outline_into(store: &NodeStore, id: NodeId, depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push_str(&selector(store, id));
    for (name, value) in store.attrs(id) {
        let _ = write!(out, " [{name}={value}]");
    }
    if let Some(text) = store.text(id) {
        let _ = write!(out, " {text:?}");
    }
    out.push('\n');
    for child in store.children(id) {
        outline_into(store, child, depth + 1, out);
    }
}

/// `tag.class.tokens` for a node.
fn selector(store: &NodeStore, id: NodeId) -> String {
    let mut selector = String::from(store.kind(id).tag());
    for token in store.class(id).unwrap_or_default().split_ascii_whitespace() {
        selector.push('.');
        selector.push_str(token);
    }
    selector
}

/// Writes one line per applied [`TreeChanges`] to a
/// [`Write`](std::io::Write) destination.
pub struct PrettyPresenter<W: Write = Box<dyn Write>> {
    writer: W,
    applied: u64,
}

impl<W: Write> std::fmt::Debug for PrettyPresenter<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPresenter")
            .field("applied", &self.applied)
            .finish_non_exhaustive()
    }
}

impl PrettyPresenter {
    /// Creates a presenter that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(Box::new(io::stderr()))
    }

    /// Creates a presenter that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer, applied: 0 }
    }
}

impl<W: Write> PrettyPresenter<W> {
    /// Creates a presenter that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer, applied: 0 }
    }

    /// Number of change sets applied so far, including empty ones.
    #[must_use]
    pub fn applied(&self) -> u64 {
        self.applied
    }

    /// Consumes the presenter and returns its writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: Write> Presenter for PrettyPresenter<W> {
    fn apply(&mut self, store: &NodeStore, changes: &TreeChanges) {
        self.applied += 1;
        if changes.is_empty() {
            let _ = writeln!(self.writer, "[apply] #{} no changes", self.applied);
            return;
        }
        let _ = writeln!(
            self.writer,
            "[apply] #{} added={} removed={} text={} classes={} attributes={} topology={} live={}",
            self.applied,
            changes.added.len(),
            changes.removed.len(),
            changes.text.len(),
            changes.classes.len(),
            changes.attributes.len(),
            if changes.topology_changed { "yes" } else { "no" },
            store.traversal_order().len(),
        );
    }
}
