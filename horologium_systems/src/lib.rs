// Copyright 2026 the Horologium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Built-in time systems for `horologium_core`.
//!
//! Every system is one `const` [`ProviderDef`]. [`ALL`] lists them in the
//! order a selection surface should show them; adding a system means adding
//! a module with its definition and one line to that list.
//!
//! | id | display | visual | tick |
//! |---|---|---|---|
//! | `standard` | split, 12-hour clock | clock, 12 divisions | 1 s |
//! | `epoch-seconds` | unified | none | 1 s |
//! | `kiloseconds` | unified | progress bar | 1 s |
//! | `swatch` | unified | progress ring | 864 ms |
//! | `decimal` | segmented | clock, 10 divisions | 864 ms |
//! | `french-republican` | split with era and unit labels | none | 864 ms |
//! | `holocene` | split with era | none | 1 s |
//!
//! ```
//! let registry = horologium_systems::registry().unwrap();
//! assert_eq!(registry.default_provider().id(), "standard");
//! ```
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod civil;
mod decimal;
mod epoch;
mod french_republican;
mod holocene;
mod kiloseconds;
mod standard;
mod swatch;

use horologium_core::provider::ProviderDef;
use horologium_core::registry::{Registry, RegistryError};

pub use decimal::DECIMAL;
pub use epoch::EPOCH_SECONDS;
pub use french_republican::FRENCH_REPUBLICAN;
pub use holocene::{HOLOCENE, HOLOCENE_OFFSET};
pub use kiloseconds::{KILOSECONDS, KILOSECONDS_PER_DAY};
pub use standard::STANDARD;
pub use swatch::{BEATS_PER_DAY, SWATCH};

/// Every built-in time system, in display order.
pub const ALL: &[ProviderDef] = &[
    STANDARD,
    EPOCH_SECONDS,
    KILOSECONDS,
    SWATCH,
    DECIMAL,
    FRENCH_REPUBLICAN,
    HOLOCENE,
];

/// Builds a registry of every built-in time system.
///
/// # Errors
///
/// Never fails for the built-in list; the result mirrors
/// [`Registry::new`].
pub fn registry() -> Result<Registry, RegistryError> {
    Registry::new(ALL)
}

#[cfg(test)]
pub(crate) mod testing {
    use chrono::{FixedOffset, TimeZone};
    use horologium_core::time::Instant;

    /// Local wall-clock reading at a whole-hour UTC offset.
    pub(crate) fn local(offset_hours: i32, ymd: (i32, u32, u32), hms: (u32, u32, u32)) -> Instant {
        FixedOffset::east_opt(offset_hours * 3600)
            .expect("valid offset")
            .with_ymd_and_hms(ymd.0, ymd.1, ymd.2, hms.0, hms.1, hms.2)
            .single()
            .expect("unambiguous local time")
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use horologium_core::display::DisplayKind;
    use horologium_core::node::{NodeKind, NodeStore};
    use horologium_core::provider::{Category, Provider};
    use horologium_core::render::render;
    use horologium_core::scene::VisualRenderer;
    use horologium_core::time::Duration;
    use proptest::prelude::*;

    use super::*;
    use crate::testing::local;

    #[test]
    fn every_builtin_is_accepted() {
        let registry = registry().unwrap();
        assert!(registry.rejections().is_empty());
        let ids: Vec<_> = registry.all().iter().map(Provider::id).collect();
        assert_eq!(
            ids,
            [
                "standard",
                "epoch-seconds",
                "kiloseconds",
                "swatch",
                "decimal",
                "french-republican",
                "holocene"
            ]
        );
    }

    #[test]
    fn table_metadata() {
        let registry = registry().unwrap();
        let get = |id| registry.get(id).unwrap();
        assert_eq!(get("standard").category(), Category::Standard);
        assert_eq!(get("epoch-seconds").category(), Category::Epoch);
        assert_eq!(get("swatch").tick_interval(), Duration::from_millis(864));
        assert_eq!(get("holocene").category(), Category::Calendar);
        assert_eq!(get("french-republican").category(), Category::Cultural);
        assert!(get("epoch-seconds").visual().is_none());
        assert!(registry.all().iter().all(|p| p.learn_more_url().is_some()));
    }

    #[test]
    fn display_shapes() {
        let registry = registry().unwrap();
        let now = local(0, (2024, 1, 1), (12, 0, 0));
        let kind = |id| registry.get(id).unwrap().format(&now).kind();
        assert_eq!(kind("standard"), DisplayKind::Split);
        assert_eq!(kind("epoch-seconds"), DisplayKind::Unified);
        assert_eq!(kind("kiloseconds"), DisplayKind::Unified);
        assert_eq!(kind("swatch"), DisplayKind::Unified);
        assert_eq!(kind("decimal"), DisplayKind::Segmented);
        assert_eq!(kind("french-republican"), DisplayKind::Split);
        assert_eq!(kind("holocene"), DisplayKind::Split);
    }

    proptest! {
        #[test]
        fn every_system_renders_any_instant(
            secs in -5_000_000_000_i64..5_000_000_000,
            offset_quarters in -48_i32..=56,
        ) {
            let offset = chrono::FixedOffset::east_opt(offset_quarters * 900).unwrap();
            let now = chrono::DateTime::from_timestamp(secs, 0)
                .unwrap()
                .with_timezone(&offset);
            let registry = registry().unwrap();
            let mut store = NodeStore::new();
            let text = store.create_node(NodeKind::Block);
            let graphic = store.create_node(NodeKind::Block);
            let mut visuals = VisualRenderer::new();
            for provider in registry.all() {
                render(&mut store, &provider.format(&now), text);
                prop_assert!(store.child_count(text) > 0);
                if let Some(visual) = provider.visual() {
                    visuals.render_visual(&mut store, visual, &now, graphic);
                }
                visuals.clear_visual(&mut store, graphic);
            }
        }
    }
}
