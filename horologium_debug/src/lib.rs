// Copyright 2026 the Horologium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printing, plain-text dumps, and JSON snapshots of horologium node
//! trees.
//!
//! This crate provides development and test tooling around
//! [`NodeStore`](horologium_core::node::NodeStore):
//!
//! - [`pretty::outline`]: an indented, selector-style outline of a subtree.
//! - [`pretty::PrettyPresenter`]: a [`Presenter`](horologium_core::backend::Presenter)
//!   that writes one line per applied change set.
//! - [`text::plain_text`]: the visible text of a subtree on one line.
//! - [`snapshot::snapshot`]: a subtree as a `serde_json::Value`, for golden
//!   files and external tooling.

pub mod pretty;
pub mod snapshot;
pub mod text;
