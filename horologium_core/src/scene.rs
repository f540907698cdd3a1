// Copyright 2026 the Horologium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual renderer: paints a [`Visual`] as a small vector scene.
//!
//! Unlike the display [renderer](crate::render), the visual renderer keeps
//! its output between calls. The first call for a target builds a static
//! scaffold (track, face, markers) and remembers the nodes that move; every
//! later call only rewrites their dynamic attributes. The host must call
//! [`VisualRenderer::clear_visual`] when the active provider changes.
//!
//! All geometry is in SVG user units with the y axis pointing down.

use alloc::format;
use alloc::vec::Vec;
use core::f64::consts::PI;

use kurbo::{Circle, Point, Shape, Vec2};

use crate::node::{NodeId, NodeKind, NodeStore};
use crate::time::Instant;
use crate::visual::{ClockFace, Progress, Visual, VisualKind};

/// Width of the progress bar track.
pub const TRACK_WIDTH: f64 = 200.0;

/// Height of the progress bar track.
pub const TRACK_HEIGHT: f64 = 8.0;

/// Radius of the progress ring arc.
pub const RING_RADIUS: f64 = 40.0;

/// Radius of the clock face.
pub const FACE_RADIUS: f64 = 45.0;

/// Side of the square scene used by rings and clock faces.
const SCENE_SIZE: f64 = 100.0;

const CENTER: Point = Point::new(SCENE_SIZE / 2.0, SCENE_SIZE / 2.0);

/// Hand lengths as fractions of [`FACE_RADIUS`].
const HOUR_HAND: f64 = 0.5;
const MINUTE_HAND: f64 = 0.7;
const SECOND_HAND: f64 = 0.85;

/// Markers span from this fraction of the radius to the rim.
const MARKER_INNER: f64 = 0.88;

const PERIMETER_ACCURACY: f64 = 1e-9;

/// Dynamic nodes of a built scene.
#[derive(Clone, Copy, Debug)]
enum Scaffold {
    Bar {
        root: NodeId,
        fill: NodeId,
    },
    Ring {
        root: NodeId,
        arc: NodeId,
        circumference: f64,
    },
    Clock {
        root: NodeId,
        hour: NodeId,
        minute: NodeId,
        second: Option<NodeId>,
    },
}

impl Scaffold {
    fn kind(&self) -> VisualKind {
        match self {
            Self::Bar { .. } => VisualKind::ProgressBar,
            Self::Ring { .. } => VisualKind::ProgressRing,
            Self::Clock { .. } => VisualKind::Clock,
        }
    }

    fn root(&self) -> NodeId {
        match *self {
            Self::Bar { root, .. } | Self::Ring { root, .. } | Self::Clock { root, .. } => root,
        }
    }
}

/// Paints visuals into target nodes, reusing scaffolds between calls.
#[derive(Debug, Default)]
pub struct VisualRenderer {
    scaffolds: Vec<(NodeId, Scaffold)>,
}

impl VisualRenderer {
    /// Creates a renderer with no scaffolds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Paints `visual` evaluated at `instant` into `target`.
    ///
    /// Builds the scaffold on the first call for `target`, or when the one
    /// found there was built for a different visual shape or torn down by
    /// someone else.
    ///
    /// # Panics
    ///
    /// Panics if `target` is stale.
    pub fn render_visual(
        &mut self,
        store: &mut NodeStore,
        visual: &Visual,
        instant: &Instant,
        target: NodeId,
    ) {
        // Targets destroyed since the last paint leave nothing to reuse.
        self.scaffolds.retain(|(t, _)| store.is_alive(*t));

        let slot = match self.scaffolds.iter().position(|(t, _)| *t == target) {
            Some(i) => {
                let scaffold = self.scaffolds[i].1;
                if scaffold.kind() != visual.kind() || !store.is_alive(scaffold.root()) {
                    tracing::debug!(
                        target_node = ?target,
                        built = ?scaffold.kind(),
                        wanted = ?visual.kind(),
                        "rebuilding visual scaffold"
                    );
                    store.clear_children(target);
                    self.scaffolds[i].1 = build(store, visual, target);
                }
                i
            }
            None => {
                let scaffold = build(store, visual, target);
                self.scaffolds.push((target, scaffold));
                self.scaffolds.len() - 1
            }
        };

        let scaffold = &mut self.scaffolds[slot].1;
        match (visual, scaffold) {
            (Visual::ProgressBar(progress), Scaffold::Bar { fill, .. }) => {
                update_bar(store, progress, instant, *fill);
            }
            (
                Visual::ProgressRing(progress),
                Scaffold::Ring {
                    arc, circumference, ..
                },
            ) => update_ring(store, progress, instant, *arc, *circumference),
            (
                Visual::Clock(face),
                Scaffold::Clock {
                    root,
                    hour,
                    minute,
                    second,
                },
            ) => update_clock(store, face, instant, *root, *hour, *minute, second),
            _ => unreachable!("scaffold rebuilt for a different visual"),
        }
    }

    /// Tears down the scaffold of `target`, destroying everything under it.
    ///
    /// Does nothing for a target that was never painted.
    pub fn clear_visual(&mut self, store: &mut NodeStore, target: NodeId) {
        if let Some(i) = self.scaffolds.iter().position(|(t, _)| *t == target) {
            self.scaffolds.swap_remove(i);
        }
        if store.is_alive(target) {
            store.clear_children(target);
            store.set_class(target, None);
        }
    }

    /// Returns whether a scaffold is currently held for `target`.
    #[must_use]
    pub fn has_scaffold(&self, target: NodeId) -> bool {
        self.scaffolds.iter().any(|(t, _)| *t == target)
    }
}

fn build(store: &mut NodeStore, visual: &Visual, target: NodeId) -> Scaffold {
    match visual {
        Visual::ProgressBar(_) => build_bar(store, target),
        Visual::ProgressRing(_) => build_ring(store, target),
        Visual::Clock(face) => build_clock(store, face, target),
    }
}

fn scene_root(store: &mut NodeStore, target: NodeId, class: &str, width: f64, height: f64) -> NodeId {
    store.set_class(target, Some("time-visual"));
    let root = store.append(target, NodeKind::Svg);
    store.set_class(root, Some(class));
    store.set_attr(root, "viewBox", format!("0 0 {width} {height}"));
    root
}

fn build_bar(store: &mut NodeStore, target: NodeId) -> Scaffold {
    let root = scene_root(store, target, "progress-bar", TRACK_WIDTH, TRACK_HEIGHT);

    let track = store.append(root, NodeKind::Rect);
    store.set_class(track, Some("bar-track"));
    store.set_attr(track, "width", TRACK_WIDTH);
    store.set_attr(track, "height", TRACK_HEIGHT);

    let fill = store.append(root, NodeKind::Rect);
    store.set_class(fill, Some("bar-fill"));
    store.set_attr(fill, "height", TRACK_HEIGHT);

    Scaffold::Bar { root, fill }
}

fn build_ring(store: &mut NodeStore, target: NodeId) -> Scaffold {
    let root = scene_root(store, target, "progress-ring", SCENE_SIZE, SCENE_SIZE);
    let circle = Circle::new(CENTER, RING_RADIUS);
    let circumference = circle.perimeter(PERIMETER_ACCURACY);

    circle_node(store, root, "ring-track", circle);

    let arc = circle_node(store, root, "ring-fill", circle);
    store.set_attr(arc, "stroke-dasharray", circumference);
    store.set_attr(
        arc,
        "transform",
        format!("rotate(-90 {} {})", CENTER.x, CENTER.y),
    );

    Scaffold::Ring {
        root,
        arc,
        circumference,
    }
}

fn build_clock(store: &mut NodeStore, face: &ClockFace, target: NodeId) -> Scaffold {
    let root = scene_root(store, target, "clock", SCENE_SIZE, SCENE_SIZE);
    circle_node(store, root, "clock-face", Circle::new(CENTER, FACE_RADIUS));

    let markers = store.append(root, NodeKind::Group);
    store.set_class(markers, Some("clock-markers"));
    for i in 0..face.divisions {
        let degrees = f64::from(i) / f64::from(face.divisions) * 360.0 - 90.0;
        let dir = direction(degrees);
        let marker = store.append(markers, NodeKind::Line);
        store.set_class(marker, Some("clock-marker"));
        set_line(
            store,
            marker,
            CENTER + dir * (FACE_RADIUS * MARKER_INNER),
            CENTER + dir * FACE_RADIUS,
        );
    }

    let hour = hand_node(store, root, "clock-hand hour");
    let minute = hand_node(store, root, "clock-hand minute");

    Scaffold::Clock {
        root,
        hour,
        minute,
        second: None,
    }
}

fn circle_node(store: &mut NodeStore, parent: NodeId, class: &str, circle: Circle) -> NodeId {
    let id = store.append(parent, NodeKind::Circle);
    store.set_class(id, Some(class));
    store.set_attr(id, "cx", circle.center.x);
    store.set_attr(id, "cy", circle.center.y);
    store.set_attr(id, "r", circle.radius);
    id
}

fn hand_node(store: &mut NodeStore, parent: NodeId, class: &str) -> NodeId {
    let id = store.append(parent, NodeKind::Line);
    store.set_class(id, Some(class));
    id
}

fn update_bar(store: &mut NodeStore, progress: &Progress, instant: &Instant, fill: NodeId) {
    let fraction = progress.fraction(instant);
    store.set_attr(fill, "width", fraction * TRACK_WIDTH);
}

fn update_ring(
    store: &mut NodeStore,
    progress: &Progress,
    instant: &Instant,
    arc: NodeId,
    circumference: f64,
) {
    let fraction = progress.fraction(instant);
    store.set_attr(arc, "stroke-dashoffset", circumference * (1.0 - fraction));
}

fn update_clock(
    store: &mut NodeStore,
    face: &ClockFace,
    instant: &Instant,
    root: NodeId,
    hour: NodeId,
    minute: NodeId,
    second: &mut Option<NodeId>,
) {
    let hands = (face.hands)(instant);
    set_hand(
        store,
        hour,
        hands.hour / f64::from(face.divisions) * 360.0 - 90.0,
        HOUR_HAND,
    );
    set_hand(store, minute, hands.minute / 100.0 * 360.0 - 90.0, MINUTE_HAND);

    match (hands.second, *second) {
        (Some(value), node) => {
            let node = node.unwrap_or_else(|| hand_node(store, root, "clock-hand second"));
            set_hand(store, node, value / 100.0 * 360.0 - 90.0, SECOND_HAND);
            *second = Some(node);
        }
        (None, Some(node)) => {
            store.destroy_node(node);
            *second = None;
        }
        (None, None) => {}
    }
}

/// Points a hand at `degrees`, measured clockwise from 3 o'clock.
fn set_hand(store: &mut NodeStore, hand: NodeId, degrees: f64, length: f64) {
    let tip = CENTER + direction(degrees) * (FACE_RADIUS * length);
    set_line(store, hand, CENTER, tip);
    store.set_attr(hand, "angle", degrees);
}

fn set_line(store: &mut NodeStore, line: NodeId, from: Point, to: Point) {
    store.set_attr(line, "x1", from.x);
    store.set_attr(line, "y1", from.y);
    store.set_attr(line, "x2", to.x);
    store.set_attr(line, "y2", to.y);
}

fn direction(degrees: f64) -> Vec2 {
    Vec2::from_angle(degrees * PI / 180.0)
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;
    use crate::visual::Hands;

    const EPS: f64 = 1e-9;

    fn epoch() -> Instant {
        DateTime::from_timestamp(0, 0)
            .expect("valid timestamp")
            .fixed_offset()
    }

    fn setup() -> (NodeStore, NodeId, VisualRenderer) {
        let mut store = NodeStore::new();
        let target = store.create_node(NodeKind::Block);
        (store, target, VisualRenderer::new())
    }

    fn only(store: &NodeStore, root: NodeId, class: &str) -> NodeId {
        let found = store.find_by_class(root, class);
        assert_eq!(found.len(), 1, "expected one `{class}` node");
        found[0]
    }

    fn num(store: &NodeStore, id: NodeId, name: &str) -> f64 {
        store
            .number_attr(id, name)
            .unwrap_or_else(|| panic!("missing numeric attribute `{name}`"))
    }

    #[test]
    fn bar_half_full() {
        let (mut store, target, mut visuals) = setup();
        let visual = Visual::progress_bar(100.0, |_| 50.0);
        visuals.render_visual(&mut store, &visual, &epoch(), target);

        let fill = only(&store, target, "bar-fill");
        let track = only(&store, target, "bar-track");
        assert_eq!(num(&store, fill, "width"), num(&store, track, "width") / 2.0);
    }

    #[test]
    fn repeated_renders_reuse_scaffold() {
        let (mut store, target, mut visuals) = setup();
        let visual = Visual::progress_bar(100.0, |_| 50.0);
        visuals.render_visual(&mut store, &visual, &epoch(), target);
        let before = store.descendants(target);
        let _ = store.flush();

        visuals.render_visual(&mut store, &visual, &epoch(), target);
        visuals.render_visual(&mut store, &visual, &epoch(), target);
        assert_eq!(store.descendants(target), before);
        let changes = store.flush();
        assert!(changes.added.is_empty());
        assert!(!changes.topology_changed);
    }

    #[test]
    fn bar_progress_touches_only_fill_width() {
        let (mut store, target, mut visuals) = setup();
        visuals.render_visual(
            &mut store,
            &Visual::progress_bar(100.0, |_| 25.0),
            &epoch(),
            target,
        );
        let fill = only(&store, target, "bar-fill");
        let _ = store.flush();

        visuals.render_visual(
            &mut store,
            &Visual::progress_bar(100.0, |_| 75.0),
            &epoch(),
            target,
        );
        let changes = store.flush();
        assert_eq!(changes.attributes, [fill.index()]);
        assert!(changes.added.is_empty());
        assert!(changes.removed.is_empty());
        assert!(changes.classes.is_empty());
        assert!(!changes.topology_changed);
        assert_eq!(num(&store, fill, "width"), 150.0);
    }

    #[test]
    fn ring_progress_touches_only_dash_offset() {
        let (mut store, target, mut visuals) = setup();
        visuals.render_visual(
            &mut store,
            &Visual::progress_ring(1000.0, |_| 250.0),
            &epoch(),
            target,
        );
        let arc = only(&store, target, "ring-fill");
        let dasharray = num(&store, arc, "stroke-dasharray");
        let _ = store.flush();

        visuals.render_visual(
            &mut store,
            &Visual::progress_ring(1000.0, |_| 750.0),
            &epoch(),
            target,
        );
        let changes = store.flush();
        assert_eq!(changes.attributes, [arc.index()]);
        assert!(changes.added.is_empty());
        assert!(!changes.topology_changed);
        assert_eq!(num(&store, arc, "stroke-dasharray"), dasharray);
        assert!((num(&store, arc, "stroke-dashoffset") - dasharray * 0.25).abs() < 1e-6);
    }

    #[test]
    fn clock_tick_touches_only_moved_hands() {
        let (mut store, target, mut visuals) = setup();
        visuals.render_visual(
            &mut store,
            &Visual::clock(12, |_| Hands::new(3.0, 0.0)),
            &epoch(),
            target,
        );
        let minute = only(&store, target, "minute");
        let _ = store.flush();

        visuals.render_visual(
            &mut store,
            &Visual::clock(12, |_| Hands::new(3.0, 50.0)),
            &epoch(),
            target,
        );
        let changes = store.flush();
        assert_eq!(changes.attributes, [minute.index()]);
        assert!(changes.added.is_empty());
        assert!(!changes.topology_changed);
        assert!((num(&store, minute, "angle") - 90.0).abs() < EPS);
    }

    #[test]
    fn destroyed_targets_release_their_scaffold() {
        let (mut store, first, mut visuals) = setup();
        let visual = Visual::progress_bar(1.0, |_| 0.5);
        visuals.render_visual(&mut store, &visual, &epoch(), first);
        store.destroy_subtree(first);

        let second = store.create_node(NodeKind::Block);
        visuals.render_visual(&mut store, &visual, &epoch(), second);
        assert!(!visuals.has_scaffold(first));
        assert!(visuals.has_scaffold(second));
        assert_eq!(visuals.scaffolds.len(), 1);
    }

    #[test]
    fn bar_clamps_overflow_but_not_underflow() {
        let (mut store, target, mut visuals) = setup();
        visuals.render_visual(
            &mut store,
            &Visual::progress_bar(10.0, |_| 30.0),
            &epoch(),
            target,
        );
        let fill = only(&store, target, "bar-fill");
        assert_eq!(num(&store, fill, "width"), TRACK_WIDTH);

        visuals.render_visual(
            &mut store,
            &Visual::progress_bar(10.0, |_| -5.0),
            &epoch(),
            target,
        );
        assert_eq!(num(&store, fill, "width"), -TRACK_WIDTH / 2.0);
    }

    #[test]
    fn ring_dash_offset_tracks_progress() {
        let (mut store, target, mut visuals) = setup();
        let visual = Visual::progress_ring(1000.0, |_| 250.0);
        visuals.render_visual(&mut store, &visual, &epoch(), target);

        let arc = only(&store, target, "ring-fill");
        let circumference = 2.0 * PI * RING_RADIUS;
        assert!((num(&store, arc, "stroke-dasharray") - circumference).abs() < 1e-6);
        assert!((num(&store, arc, "stroke-dashoffset") - circumference * 0.75).abs() < 1e-6);
        assert_eq!(
            store.attr(arc, "transform").map(alloc::string::ToString::to_string),
            Some("rotate(-90 50 50)".into())
        );
    }

    #[test]
    fn clock_hour_three_is_quarter_turn() {
        let (mut store, target, mut visuals) = setup();
        let visual = Visual::clock(12, |_| Hands::new(3.0, 0.0));
        visuals.render_visual(&mut store, &visual, &epoch(), target);

        let hour = only(&store, target, "hour");
        assert!(num(&store, hour, "angle").abs() < EPS);
        assert!(num(&store, hour, "x2") > CENTER.x);
        assert!((num(&store, hour, "y2") - CENTER.y).abs() < EPS);

        let minute = only(&store, target, "minute");
        assert!((num(&store, minute, "angle") + 90.0).abs() < EPS);
        assert!((num(&store, minute, "x2") - CENTER.x).abs() < EPS);
        assert!(num(&store, minute, "y2") < CENTER.y);
    }

    #[test]
    fn hand_lengths_are_ordered() {
        let (mut store, target, mut visuals) = setup();
        let visual = Visual::clock(12, |_| Hands::new(0.0, 0.0).with_second(0.0));
        visuals.render_visual(&mut store, &visual, &epoch(), target);

        let length = |class| {
            let hand = only(&store, target, class);
            CENTER.y - num(&store, hand, "y2")
        };
        assert!(length("hour") < length("minute"));
        assert!(length("minute") < length("second"));
    }

    #[test]
    fn markers_match_divisions() {
        let (mut store, target, mut visuals) = setup();
        let visual = Visual::clock(10, |_| Hands::new(1.0, 50.0));
        visuals.render_visual(&mut store, &visual, &epoch(), target);
        visuals.render_visual(&mut store, &visual, &epoch(), target);
        assert_eq!(store.find_by_class(target, "clock-marker").len(), 10);
    }

    #[test]
    fn second_hand_only_when_defined() {
        let (mut store, target, mut visuals) = setup();
        visuals.render_visual(
            &mut store,
            &Visual::clock(12, |_| Hands::new(1.0, 2.0)),
            &epoch(),
            target,
        );
        assert!(store.find_by_class(target, "second").is_empty());

        visuals.render_visual(
            &mut store,
            &Visual::clock(12, |_| Hands::new(1.0, 2.0).with_second(25.0)),
            &epoch(),
            target,
        );
        let second = only(&store, target, "second");
        assert!(num(&store, second, "angle").abs() < EPS);

        visuals.render_visual(
            &mut store,
            &Visual::clock(12, |_| Hands::new(1.0, 2.0)),
            &epoch(),
            target,
        );
        assert!(store.find_by_class(target, "second").is_empty());
    }

    #[test]
    fn clear_visual_tears_down() {
        let (mut store, target, mut visuals) = setup();
        visuals.render_visual(
            &mut store,
            &Visual::progress_bar(1.0, |_| 0.5),
            &epoch(),
            target,
        );
        assert!(visuals.has_scaffold(target));

        visuals.clear_visual(&mut store, target);
        assert!(!visuals.has_scaffold(target));
        assert_eq!(store.child_count(target), 0);
        assert_eq!(store.class(target), None);

        // Clearing again is harmless.
        visuals.clear_visual(&mut store, target);
    }

    #[test]
    fn different_shape_rebuilds_scaffold() {
        let (mut store, target, mut visuals) = setup();
        visuals.render_visual(
            &mut store,
            &Visual::progress_bar(1.0, |_| 0.5),
            &epoch(),
            target,
        );
        visuals.render_visual(
            &mut store,
            &Visual::progress_ring(1.0, |_| 0.5),
            &epoch(),
            target,
        );
        assert!(store.find_by_class(target, "bar-fill").is_empty());
        assert_eq!(store.find_by_class(target, "ring-fill").len(), 1);
        assert_eq!(store.child_count(target), 1);
    }

    #[test]
    fn externally_cleared_target_is_rebuilt() {
        let (mut store, target, mut visuals) = setup();
        let visual = Visual::progress_bar(1.0, |_| 0.5);
        visuals.render_visual(&mut store, &visual, &epoch(), target);
        store.clear_children(target);

        visuals.render_visual(&mut store, &visual, &epoch(), target);
        assert_eq!(store.find_by_class(target, "bar-fill").len(), 1);
    }
}
