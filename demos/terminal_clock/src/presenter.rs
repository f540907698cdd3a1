// Copyright 2026 the Horologium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line-oriented presentation of a session's two targets.
//!
//! Each applied change set prints the display as plain text (or as an
//! outline) followed by a one-line sketch of the visual, if any.

use std::fmt::Write as _;
use std::io::{self, Write};

use horologium_core::backend::Presenter;
use horologium_core::node::{NodeId, NodeStore, TreeChanges};
use horologium_core::scene::TRACK_WIDTH;
use horologium_debug::pretty::outline;
use horologium_debug::text::plain_text;

/// Cells in a progress bar sketch.
const BAR_CELLS: usize = 30;

/// How a [`TerminalPresenter`] prints the display target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Layout {
    /// One line of text.
    Line,
    /// Indented node outline.
    Tree,
}

pub(crate) struct TerminalPresenter<W: Write> {
    writer: W,
    layout: Layout,
    display: NodeId,
    visual: NodeId,
}

impl<W: Write> std::fmt::Debug for TerminalPresenter<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalPresenter")
            .field("layout", &self.layout)
            .field("display", &self.display)
            .field("visual", &self.visual)
            .finish_non_exhaustive()
    }
}

impl<W: Write> TerminalPresenter<W> {
    pub(crate) fn new(writer: W, layout: Layout, display: NodeId, visual: NodeId) -> Self {
        Self {
            writer,
            layout,
            display,
            visual,
        }
    }

    fn write(&mut self, store: &NodeStore) -> io::Result<()> {
        match self.layout {
            Layout::Line => {
                writeln!(self.writer, "{}", plain_text(store, self.display))?;
                if let Some(sketch) = sketch(store, self.visual) {
                    writeln!(self.writer, "  {sketch}")?;
                }
            }
            Layout::Tree => {
                write!(self.writer, "{}", outline(store, self.display))?;
                write!(self.writer, "{}", outline(store, self.visual))?;
            }
        }
        self.writer.flush()
    }

    #[cfg(test)]
    fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn apply(&mut self, store: &NodeStore, changes: &TreeChanges) {
        if changes.is_empty() {
            return;
        }
        if let Err(err) = self.write(store) {
            tracing::warn!(%err, "cannot write to terminal");
        }
    }
}

/// A one-line summary of the scene under `visual`, or `None` when it holds
/// no scene.
pub(crate) fn sketch(store: &NodeStore, visual: NodeId) -> Option<String> {
    let first = |class: &str| store.find_by_class(visual, class).first().copied();

    if let Some(fill) = first("bar-fill") {
        let fraction = store.number_attr(fill, "width").unwrap_or_default() / TRACK_WIDTH;
        return Some(bar(fraction));
    }
    if let Some(arc) = first("ring-fill") {
        let length = store.number_attr(arc, "stroke-dasharray").unwrap_or_default();
        let offset = store.number_attr(arc, "stroke-dashoffset").unwrap_or_default();
        let fraction = if length > 0.0 { 1.0 - offset / length } else { 0.0 };
        return Some(format!("ring {:>5.1}%", fraction * 100.0));
    }
    let hands = store.find_by_class(visual, "clock-hand");
    if hands.is_empty() {
        return None;
    }
    let mut out = String::from("clock");
    for hand in hands {
        let name = store
            .class(hand)
            .and_then(|class| class.split_ascii_whitespace().nth(1))
            .unwrap_or("hand");
        let angle = store.number_attr(hand, "angle").unwrap_or_default();
        let _ = write!(out, " {name}={angle:.0}\u{b0}");
    }
    Some(out)
}

fn bar(fraction: f64) -> String {
    let fraction = fraction.clamp(0.0, 1.0);
    #[expect(
        clippy::cast_possible_truncation,
        reason = "fraction is clamped to [0, 1], so the product fits in usize"
    )]
    let filled = (fraction * BAR_CELLS as f64).round() as usize;
    format!(
        "[{}{}] {:>5.1}%",
        "#".repeat(filled),
        ".".repeat(BAR_CELLS - filled),
        fraction * 100.0
    )
}

#[cfg(test)]
mod tests {
    use horologium_core::display::{Display, Unified};
    use horologium_core::node::NodeKind;
    use horologium_core::render::render;
    use horologium_core::scene::VisualRenderer;
    use horologium_core::time::Instant;
    use horologium_core::visual::{Hands, Visual};

    use super::*;

    fn noon() -> Instant {
        chrono::DateTime::parse_from_rfc3339("2024-01-01T12:00:00+00:00").unwrap()
    }

    fn scene(visual: &Visual) -> (NodeStore, NodeId) {
        let mut store = NodeStore::new();
        let target = store.create_node(NodeKind::Block);
        VisualRenderer::new().render_visual(&mut store, visual, &noon(), target);
        (store, target)
    }

    #[test]
    fn bar_sketch_is_proportional() {
        let (store, target) = scene(&Visual::progress_bar(4.0, |_| 1.0));
        assert_eq!(
            sketch(&store, target).unwrap(),
            format!("[{}{}]  25.0%", "#".repeat(8), ".".repeat(22))
        );
    }

    #[test]
    fn ring_sketch_reports_percentage() {
        let (store, target) = scene(&Visual::progress_ring(1000.0, |_| 500.0));
        assert_eq!(sketch(&store, target).unwrap(), "ring  50.0%");
    }

    #[test]
    fn clock_sketch_names_hands() {
        let (store, target) = scene(&Visual::clock(12, |_| Hands::new(3.0, 30.0)));
        assert_eq!(sketch(&store, target).unwrap(), "clock hour=0\u{b0} minute=18\u{b0}");
    }

    #[test]
    fn empty_visual_has_no_sketch() {
        let mut store = NodeStore::new();
        let target = store.create_node(NodeKind::Block);
        assert_eq!(sketch(&store, target), None);
    }

    #[test]
    fn prints_only_when_something_changed() {
        let mut store = NodeStore::new();
        let display = store.create_node(NodeKind::Block);
        let visual = store.create_node(NodeKind::Block);
        render(&mut store, &Display::from(Unified::new("42").with_label("answer")), display);

        let mut presenter = TerminalPresenter::new(Vec::new(), Layout::Line, display, visual);
        let changes = store.flush();
        presenter.apply(&store, &changes);
        let changes = store.flush();
        presenter.apply(&store, &changes);

        let output = String::from_utf8(presenter.into_writer()).unwrap();
        assert_eq!(output, "42 answer\n");
    }
}
