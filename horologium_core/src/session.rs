// Copyright 2026 the Horologium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-side switch and tick pipeline.
//!
//! A [`Session`] owns everything a host needs to show one time system at a
//! time: the registry, the preference store, the tick timer, the node tree
//! with its two render targets, and the visual renderer's scaffolds.
//!
//! ```text
//!   host wake-up ──► Session::poll(now, instant)
//!                        │ timer due?
//!                        ▼
//!                    Session::paint(instant)
//!                        ├─► Provider::format ──► render(display target)
//!                        └─► Provider::visual ──► render_visual(visual target)
//!                        ▼
//!   host ◄── Session::flush() ──► Presenter::apply
//! ```
//!
//! Switching goes through [`Session::switch_to`], which cancels the running
//! timer before anything else and re-arms it with the new provider's cadence
//! last.

use crate::node::{NodeId, NodeKind, NodeStore, TreeChanges};
use crate::preference::PreferenceStore;
use crate::provider::Provider;
use crate::registry::Registry;
use crate::render::render;
use crate::scene::VisualRenderer;
use crate::time::{HostTime, Instant};
use crate::timer::TickTimer;

/// The active time system and its render state.
#[derive(Debug)]
pub struct Session<P> {
    registry: Registry,
    preferences: P,
    timer: TickTimer,
    visuals: VisualRenderer,
    store: NodeStore,
    display_target: NodeId,
    visual_target: NodeId,
    current: usize,
}

impl<P: PreferenceStore> Session<P> {
    /// Starts a session, restoring the persisted selection.
    ///
    /// A missing or unknown stored id selects
    /// [`Registry::default_provider`]. The timer is armed at `now`; nothing
    /// is painted until the first [`paint`](Self::paint) or due
    /// [`poll`](Self::poll).
    pub fn new(registry: Registry, mut preferences: P, now: HostTime) -> Self {
        let stored = preferences.load();
        let current = match stored.as_deref() {
            Some(id) => registry.position(id).unwrap_or_else(|| {
                tracing::info!(id, "stored time system is not registered, using default");
                default_position(&registry)
            }),
            None => default_position(&registry),
        };

        let mut store = NodeStore::new();
        let display_target = store.create_node(NodeKind::Block);
        let visual_target = store.create_node(NodeKind::Block);

        let mut timer = TickTimer::new();
        timer.arm(registry.all()[current].tick_interval(), now);
        tracing::debug!(id = registry.all()[current].id(), "session started");

        Self {
            registry,
            preferences,
            timer,
            visuals: VisualRenderer::new(),
            store,
            display_target,
            visual_target,
            current,
        }
    }

    /// Selects the provider with `id`.
    ///
    /// Returns `false` and changes nothing if `id` is not registered.
    /// Otherwise cancels the timer, tears down the visual, persists the
    /// selection, and re-arms the timer with the new cadence. The caller
    /// paints afterwards.
    ///
    /// A failed preference write is logged and does not fail the switch.
    pub fn switch_to(&mut self, id: &str, now: HostTime) -> bool {
        let Some(position) = self.registry.position(id) else {
            tracing::debug!(id, "ignoring switch to unknown time system");
            return false;
        };

        self.timer.cancel();
        self.visuals
            .clear_visual(&mut self.store, self.visual_target);
        self.current = position;

        if let Err(err) = self.preferences.save(id) {
            tracing::warn!(id, %err, "failed to persist selected time system");
        }

        let provider = &self.registry.all()[position];
        self.timer.arm(provider.tick_interval(), now);
        tracing::debug!(
            id,
            interval = ?provider.tick_interval(),
            "switched time system"
        );
        true
    }

    /// Formats `instant` with the current provider and renders both targets.
    pub fn paint(&mut self, instant: &Instant) {
        let provider = &self.registry.all()[self.current];
        let display = provider.format(instant);
        render(&mut self.store, &display, self.display_target);
        if let Some(visual) = provider.visual() {
            self.visuals
                .render_visual(&mut self.store, visual, instant, self.visual_target);
        }
    }

    /// Paints `instant` if the timer is due at `now`.
    ///
    /// Returns whether a paint happened.
    pub fn poll(&mut self, now: HostTime, instant: &Instant) -> bool {
        match self.timer.poll(now) {
            Some(fired) => {
                if fired.skipped > 0 {
                    tracing::trace!(skipped = fired.skipped, "dropped missed ticks");
                }
                self.paint(instant);
                true
            }
            None => false,
        }
    }

    /// Drains the node tree's pending changes for a presenter.
    pub fn flush(&mut self) -> TreeChanges {
        self.store.flush()
    }

    /// The current provider.
    #[must_use]
    pub fn current(&self) -> &Provider {
        &self.registry.all()[self.current]
    }

    /// The current provider's reference link, if it has one.
    #[must_use]
    pub fn reference_link(&self) -> Option<&'static str> {
        self.current().learn_more_url()
    }

    /// The registry the session selects from.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The node tree both targets live in.
    #[must_use]
    pub fn store(&self) -> &NodeStore {
        &self.store
    }

    /// Root node of the formatted time.
    #[must_use]
    pub fn display_target(&self) -> NodeId {
        self.display_target
    }

    /// Root node of the visual.
    #[must_use]
    pub fn visual_target(&self) -> NodeId {
        self.visual_target
    }

    /// The tick timer.
    #[must_use]
    pub fn timer(&self) -> &TickTimer {
        &self.timer
    }

    /// The preference store.
    #[must_use]
    pub fn preferences(&self) -> &P {
        &self.preferences
    }
}

fn default_position(registry: &Registry) -> usize {
    registry
        .position(registry.default_provider().id())
        .unwrap_or(0)
}
