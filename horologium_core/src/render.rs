// Copyright 2026 the Horologium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display renderer: turns a [`Display`] into output nodes.
//!
//! Rendering is a full replace. Every call destroys whatever the target held
//! and rebuilds it from the display value, so the output depends only on the
//! last display painted. The target node itself survives and carries the
//! variant class (see [`DisplayKind::class_name`]).
//!
//! The produced structure, by variant:
//!
//! ```text
//! Unified                     Split                        Segmented
//! ├─ div.time-main            ├─ div.time-date  "date"     ├─ div.time-segment
//! │  ├─ span.time-prefix?     │  └─ span.time-era?         │  ├─ span.segment-value
//! │  ├─ span.time-value       ├─ span.time-separator       │  ├─ span.segment-label
//! │  └─ span.time-suffix?     └─ div.time-time  "time"     │  └─ span.segment-sublabel?
//! ├─ div.time-label?             ├─ span.time-period?      ├─ span.segment-separator
//! └─ div.time-sublabel?          └─ div.time-unit-labels?  └─ div.time-segment ...
//!                                   └─ span.time-unit-label*
//! ```
//!
//! [`DisplayKind::class_name`]: crate::display::DisplayKind::class_name

use alloc::string::ToString;

use crate::display::{Display, Segmented, Split, Unified};
use crate::node::{NodeId, NodeKind, NodeStore};

/// Replaces the contents of `target` with the rendering of `display`.
///
/// # Panics
///
/// Panics if `target` is stale.
pub fn render(store: &mut NodeStore, display: &Display, target: NodeId) {
    store.clear_children(target);
    store.set_class(target, Some(display.kind().class_name()));
    match display {
        Display::Unified(unified) => render_unified(store, unified, target),
        Display::Split(split) => render_split(store, split, target),
        Display::Segmented(segmented) => render_segmented(store, segmented, target),
    }
}

fn render_unified(store: &mut NodeStore, unified: &Unified, target: NodeId) {
    let main = element(store, target, NodeKind::Block, "time-main", None);
    if let Some(prefix) = &unified.prefix {
        element(store, main, NodeKind::Inline, "time-prefix", Some(prefix));
    }
    element(
        store,
        main,
        NodeKind::Inline,
        "time-value",
        Some(&unified.value),
    );
    if let Some(suffix) = &unified.suffix {
        element(store, main, NodeKind::Inline, "time-suffix", Some(suffix));
    }
    if let Some(label) = &unified.label {
        element(store, target, NodeKind::Block, "time-label", Some(label));
    }
    if let Some(sublabel) = &unified.sublabel {
        element(
            store,
            target,
            NodeKind::Block,
            "time-sublabel",
            Some(sublabel),
        );
    }
}

fn render_split(store: &mut NodeStore, split: &Split, target: NodeId) {
    let date = element(
        store,
        target,
        NodeKind::Block,
        "time-date",
        Some(&split.date.formatted),
    );
    if let Some(era) = &split.date.era {
        element(store, date, NodeKind::Inline, "time-era", Some(era));
    }

    element(
        store,
        target,
        NodeKind::Inline,
        "time-separator",
        Some(split.separator()),
    );

    let time = element(
        store,
        target,
        NodeKind::Block,
        "time-time",
        Some(&split.time.formatted),
    );
    if let Some(period) = &split.time.period {
        element(store, time, NodeKind::Inline, "time-period", Some(period));
    }
    if let Some(labels) = &split.time.unit_labels {
        let row = element(store, time, NodeKind::Block, "time-unit-labels", None);
        for label in labels {
            element(store, row, NodeKind::Inline, "time-unit-label", Some(label));
        }
    }
}

fn render_segmented(store: &mut NodeStore, segmented: &Segmented, target: NodeId) {
    let separator = segmented.separator();
    for (i, segment) in segmented.segments.iter().enumerate() {
        if i > 0 {
            element(
                store,
                target,
                NodeKind::Inline,
                "segment-separator",
                Some(separator),
            );
        }
        let group = element(store, target, NodeKind::Block, "time-segment", None);
        let value = segment.value.to_string();
        element(
            store,
            group,
            NodeKind::Inline,
            "segment-value",
            Some(&value),
        );
        element(
            store,
            group,
            NodeKind::Inline,
            "segment-label",
            Some(&segment.label),
        );
        if let Some(sublabel) = &segment.sublabel {
            element(
                store,
                group,
                NodeKind::Inline,
                "segment-sublabel",
                Some(sublabel),
            );
        }
    }
}

/// Appends a classed node with optional text under `parent`.
fn element(
    store: &mut NodeStore,
    parent: NodeId,
    kind: NodeKind,
    class: &str,
    text: Option<&str>,
) -> NodeId {
    let id = store.append(parent, kind);
    store.set_class(id, Some(class));
    if text.is_some() {
        store.set_text(id, text);
    }
    id
}
