// Copyright 2026 the Horologium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Unix time.

use alloc::string::ToString;

use horologium_core::display::{Display, Unified};
use horologium_core::provider::{Category, ProviderDef};
use horologium_core::time::Instant;

/// Whole seconds elapsed since 1970-01-01T00:00:00Z.
pub const EPOCH_SECONDS: ProviderDef = ProviderDef::new("epoch-seconds")
    .name("Unix Epoch")
    .description("Seconds elapsed since midnight UTC on 1 January 1970")
    .category(Category::Epoch)
    .tick_interval_ms(1000)
    .learn_more_url("https://en.wikipedia.org/wiki/Unix_time")
    .format(format);

fn format(instant: &Instant) -> Display {
    Unified::new(instant.timestamp().to_string())
        .with_label("seconds since 1970-01-01 UTC")
        .into()
}
