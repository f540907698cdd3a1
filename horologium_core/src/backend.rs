// Copyright 2026 the Horologium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for platform integrations.
//!
//! Horologium splits platform-specific work into *backend* crates. Each
//! backend provides the following pieces:
//!
//! - **Tick source**: wakes the host at least as often as the current
//!   provider's tick interval (e.g. `setInterval`, a blocking sleep until
//!   [`TickTimer::next_deadline`]). This is backend-specific and not
//!   abstracted by a trait because the setup and lifecycle differ
//!   fundamentally across platforms.
//!
//! - **Time**: a monotonic `HostTime` reading for the timer and a wall-clock
//!   [`Instant`] for the providers.
//!
//! - **Preferences**: a [`PreferenceStore`] over whatever the platform
//!   persists to.
//!
//! - **Presenter**: implements the [`Presenter`] trait to mirror the node
//!   tree into a platform-native tree (e.g. DOM elements, terminal text).
//!
//! # Crate boundaries
//!
//! `horologium_core` owns the data model, rendering, and this contract
//! module. Backend crates depend on `horologium_core` and provide platform
//! glue. Application code depends on both and wires them together in a tick
//! loop.
//!
//! [`TickTimer::next_deadline`]: crate::timer::TickTimer::next_deadline
//! [`Instant`]: crate::time::Instant
//! [`PreferenceStore`]: crate::preference::PreferenceStore

use crate::node::{NodeStore, TreeChanges};

/// Applies flushed node changes to a platform-native presentation tree.
///
/// # Tick loop pseudocode
///
/// A typical tick callback wires the pieces together like this:
///
/// ```rust,ignore
/// fn on_tick() {
///     // Format and render if the current provider's timer is due.
///     if session.poll(host_now(), &wall_clock_now()) {
///         // Drain dirty channels into a change set.
///         let changes = session.flush();
///
///         // Present: apply incremental changes to the native tree.
///         presenter.apply(session.store(), &changes);
///     }
/// }
/// ```
pub trait Presenter {
    /// Applies the given [`TreeChanges`] to the backing presentation tree,
    /// reading current property values from `store` as needed.
    ///
    /// Implementations must process [`removed`](TreeChanges::removed) before
    /// [`added`](TreeChanges::added), since a recycled slot can appear in
    /// both.
    fn apply(&mut self, store: &NodeStore, changes: &TreeChanges);
}
