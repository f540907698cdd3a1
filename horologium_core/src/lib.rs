// Copyright 2026 the Horologium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display model, provider registry, and renderers for alternative
//! timekeeping systems.
//!
//! `horologium_core` turns "now" into something to look at under a
//! pluggable set of time systems. It is `no_std` compatible (with `alloc`)
//! and renders into a platform-independent node tree stored in
//! struct-of-arrays layout with index handles.
//!
//! # Architecture
//!
//! ```text
//!   ProviderDef[] ──► Registry::new() ──► Registry
//!                                            │ select
//!                                            ▼
//!   Instant ──► Provider::format() ──► Display ──► render() ─────────┐
//!          └──► Visual::{value,hands} ──────────► VisualRenderer ────┤
//!                                                                    ▼
//!                                       NodeStore::flush() ──► TreeChanges
//!                                                                    │
//!                                                Presenter::apply() ◄┘
//! ```
//!
//! **[`display`]** / **[`visual`]**: closed enums describing what a time
//! system produces. Pure data, rebuilt on every tick.
//!
//! **[`provider`]** / **[`registry`]**: the provider contract and the
//! validated, insertion-ordered set of registered time systems.
//!
//! **[`render`]**: full-replace interpretation of a [`Display`] into nodes.
//!
//! **[`scene`]**: the visual renderer, which builds a vector scaffold once per
//! target and then only updates its dynamic attributes.
//!
//! **[`node`]** / **[`dirty`]**: the output tree with generational handles
//! and per-node dirty channels drained by `flush`.
//!
//! **[`timer`]** / **[`preference`]** / **[`session`]**: host-side pieces,
//! an owned tick timer, selection persistence, and the switch/tick
//! pipeline that ties everything together.
//!
//! **[`backend`]**: the [`Presenter`](backend::Presenter) trait that
//! platform backends implement.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//!
//! [`Display`]: display::Display

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod backend;
pub mod dirty;
pub mod display;
pub mod node;
pub mod preference;
pub mod provider;
pub mod registry;
pub mod render;
pub mod scene;
pub mod session;
pub mod time;
pub mod timer;
pub mod visual;
