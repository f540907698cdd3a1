// Copyright 2026 the Horologium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validated, deduplicated collection of time systems.
//!
//! Providers are contributed independently, one definition per system, and
//! assembled from a single ordered list. A malformed or duplicate
//! contribution must not take the whole application down, so
//! [`Registry::new`] logs a warning and skips it instead of failing. The only
//! fatal outcome is a list with no acceptable entry at all, reported as
//! [`RegistryError::Empty`].

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::provider::{FormatFn, Provider, ProviderDef};
use crate::visual::Visual;

/// Id of the provider preferred by [`Registry::default_provider`].
pub const DEFAULT_PROVIDER_ID: &str = "standard";

/// Why a candidate was excluded from the registry.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// A required text field is empty, or the format function is absent.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    /// The declared tick interval is zero.
    #[error("tick interval must be positive")]
    ZeroTickInterval,
    /// A progress visual's maximum is zero, negative, or not finite.
    #[error("progress maximum must be finite and positive, got {0}")]
    InvalidProgressMax(f64),
    /// A clock visual has no divisions.
    #[error("clock visual needs at least one division")]
    ZeroDivisions,
    /// Another provider with the same id was accepted earlier.
    #[error("id `{0}` is already registered")]
    DuplicateId(&'static str),
}

/// Fatal registry construction failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Every candidate was rejected (or none was given).
    #[error("no valid time system was registered")]
    Empty,
}

/// A candidate that [`Registry::new`] excluded.
#[derive(Clone, Debug, PartialEq)]
pub struct Rejection {
    /// Position of the candidate in the registration list.
    pub index: usize,
    /// The candidate's id, possibly empty.
    pub id: &'static str,
    /// Why it was excluded.
    pub reason: ValidationError,
}

/// Checks a candidate against the provider contract.
///
/// Returns the format function on success, since it is the one required
/// field that is optional in [`ProviderDef`].
pub fn validate(def: &ProviderDef) -> Result<FormatFn, ValidationError> {
    if def.id.is_empty() {
        return Err(ValidationError::MissingField("id"));
    }
    if def.name.is_empty() {
        return Err(ValidationError::MissingField("name"));
    }
    if def.description.is_empty() {
        return Err(ValidationError::MissingField("description"));
    }
    let Some(format) = def.format else {
        return Err(ValidationError::MissingField("format"));
    };
    if def.tick_interval_ms == Some(0) {
        return Err(ValidationError::ZeroTickInterval);
    }
    match def.visual {
        Some(Visual::ProgressBar(p) | Visual::ProgressRing(p))
            if !(p.max.is_finite() && p.max > 0.0) =>
        {
            return Err(ValidationError::InvalidProgressMax(p.max));
        }
        Some(Visual::Clock(c)) if c.divisions == 0 => {
            return Err(ValidationError::ZeroDivisions);
        }
        _ => {}
    }
    Ok(format)
}

/// The accepted time systems, in registration order.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug)]
pub struct Registry {
    providers: Vec<Provider>,
    by_id: BTreeMap<&'static str, usize>,
    rejections: Vec<Rejection>,
}

impl Registry {
    /// Validates and registers `defs` in order.
    ///
    /// Invalid candidates and later duplicates of an accepted id are logged
    /// and skipped; see [`rejections`](Self::rejections).
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Empty`] if no candidate was accepted.
    pub fn new(defs: &[ProviderDef]) -> Result<Self, RegistryError> {
        let mut providers = Vec::with_capacity(defs.len());
        let mut by_id = BTreeMap::new();
        let mut rejections = Vec::new();

        for (index, def) in defs.iter().enumerate() {
            let checked = validate(def).and_then(|format| {
                if by_id.contains_key(def.id) {
                    Err(ValidationError::DuplicateId(def.id))
                } else {
                    Ok(format)
                }
            });
            match checked {
                Ok(format) => {
                    by_id.insert(def.id, providers.len());
                    providers.push(Provider::from_checked(def, format));
                }
                Err(reason) => {
                    tracing::warn!(index, id = def.id, %reason, "rejected time system");
                    rejections.push(Rejection {
                        index,
                        id: def.id,
                        reason,
                    });
                }
            }
        }

        if providers.is_empty() {
            return Err(RegistryError::Empty);
        }
        tracing::debug!(
            accepted = providers.len(),
            rejected = rejections.len(),
            "time system registry built"
        );
        Ok(Self {
            providers,
            by_id,
            rejections,
        })
    }

    /// All accepted providers, in registration order.
    #[must_use]
    pub fn all(&self) -> &[Provider] {
        &self.providers
    }

    /// Looks up a provider by id.
    ///
    /// `None` is an ordinary outcome (e.g. a stale persisted selection).
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Provider> {
        self.position(id).map(|idx| &self.providers[idx])
    }

    /// Registration position of the provider with `id`.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    /// The provider with id [`DEFAULT_PROVIDER_ID`] if registered, else the
    /// first registered provider.
    #[must_use]
    pub fn default_provider(&self) -> &Provider {
        self.get(DEFAULT_PROVIDER_ID)
            .unwrap_or(&self.providers[0])
    }

    /// Candidates excluded during construction, in list order.
    #[must_use]
    pub fn rejections(&self) -> &[Rejection] {
        &self.rejections
    }

    /// Number of accepted providers; at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Always `false`: construction fails instead of producing an empty
    /// registry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;

    use proptest::prelude::*;

    use super::*;
    use crate::display::{Display, Unified};
    use crate::provider::Category;
    use crate::time::{Duration, Instant};
    use crate::visual::Hands;

    fn format_a(_: &Instant) -> Display {
        Unified::new("a").into()
    }

    fn format_b(_: &Instant) -> Display {
        Unified::new("b").into()
    }

    const fn def(id: &'static str) -> ProviderDef {
        ProviderDef::new(id)
            .name("Name")
            .description("Description")
            .format(format_a)
    }

    fn instant() -> Instant {
        chrono::DateTime::from_timestamp(1_000_000, 0)
            .expect("valid timestamp")
            .fixed_offset()
    }

    #[test]
    fn lookup_returns_the_registered_provider() {
        let registry = Registry::new(&[def("a"), def("b"), def("c")]).unwrap();
        for provider in registry.all() {
            let found = registry.get(provider.id()).unwrap();
            assert!(core::ptr::eq(found, provider), "lookup must return the same entry");
        }
        let ids: Vec<_> = registry.all().iter().map(Provider::id).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn first_registration_wins() {
        let first = def("dup");
        let second = def("dup").format(format_b);
        let registry = Registry::new(&[first, second]).unwrap();

        assert_eq!(registry.len(), 1);
        let shown = registry.get("dup").unwrap().format(&instant());
        assert_eq!(shown, Display::Unified(Unified::new("a")));
        assert_eq!(
            registry.rejections(),
            &[Rejection {
                index: 1,
                id: "dup",
                reason: ValidationError::DuplicateId("dup"),
            }]
        );
    }

    #[test]
    fn missing_format_is_excluded() {
        let broken = ProviderDef::new("broken")
            .name("Broken")
            .description("No format function");
        let registry = Registry::new(&[broken, def("ok")]).unwrap();

        assert!(registry.get("broken").is_none());
        assert_eq!(registry.all().len(), 1);
        assert_eq!(
            registry.rejections()[0].reason,
            ValidationError::MissingField("format")
        );
    }

    #[test]
    fn missing_text_fields_are_excluded() {
        let no_id = def("");
        let no_name = def("n").name("");
        let no_description = def("d").description("");
        let registry = Registry::new(&[no_id, no_name, no_description, def("ok")]).unwrap();

        let reasons: Vec<_> = registry
            .rejections()
            .iter()
            .map(|r| r.reason.clone())
            .collect();
        assert_eq!(
            reasons,
            vec![
                ValidationError::MissingField("id"),
                ValidationError::MissingField("name"),
                ValidationError::MissingField("description"),
            ]
        );
    }

    #[test]
    fn shape_constraints_are_checked() {
        let zero_tick = def("tick").tick_interval_ms(0);
        let bad_max = def("bar").visual(Visual::progress_bar(0.0, |_| 0.0));
        let nan_max = def("ring").visual(Visual::progress_ring(f64::NAN, |_| 0.0));
        let no_divisions = def("clock").visual(Visual::clock(0, |_| Hands::default()));
        let registry =
            Registry::new(&[zero_tick, bad_max, nan_max, no_divisions, def("ok")]).unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.rejections().len(), 4);
        assert_eq!(
            registry.rejections()[0].reason,
            ValidationError::ZeroTickInterval
        );
        assert_eq!(registry.rejections()[3].reason, ValidationError::ZeroDivisions);
    }

    #[test]
    fn tick_interval_defaults_to_one_second() {
        let registry = Registry::new(&[def("a"), def("b").tick_interval_ms(864)]).unwrap();
        assert_eq!(
            registry.get("a").unwrap().tick_interval(),
            Duration::from_millis(1000)
        );
        assert_eq!(
            registry.get("b").unwrap().tick_interval(),
            Duration::from_millis(864)
        );
    }

    #[test]
    fn default_prefers_standard() {
        let registry =
            Registry::new(&[def("epoch-seconds"), def("standard"), def("holocene")]).unwrap();
        assert_eq!(registry.default_provider().id(), "standard");
    }

    #[test]
    fn default_falls_back_to_first() {
        let registry = Registry::new(&[def("broken").name(""), def("swatch"), def("decimal")])
            .unwrap();
        assert_eq!(registry.default_provider().id(), "swatch");
    }

    #[test]
    fn empty_registry_is_fatal() {
        assert_eq!(Registry::new(&[]).unwrap_err(), RegistryError::Empty);
        assert_eq!(
            Registry::new(&[def("x").name("")]).unwrap_err(),
            RegistryError::Empty
        );
    }

    #[test]
    fn metadata_is_carried_over() {
        let full = def("full")
            .category(Category::Cultural)
            .learn_more_url("https://example.org/full");
        let registry = Registry::new(&[full]).unwrap();
        let provider = registry.get("full").unwrap();
        assert_eq!(provider.category(), Category::Cultural);
        assert_eq!(provider.learn_more_url(), Some("https://example.org/full"));
        assert!(provider.visual().is_none());
    }

    const POOL: [&str; 4] = ["a", "b", "c", "d"];

    proptest! {
        #[test]
        fn registration_order_and_uniqueness(picks in proptest::collection::vec(0_usize..4, 1..16)) {
            let defs: Vec<_> = picks.iter().map(|&i| def(POOL[i])).collect();
            let registry = Registry::new(&defs).unwrap();

            let mut expected: Vec<&str> = Vec::new();
            for &i in &picks {
                if !expected.contains(&POOL[i]) {
                    expected.push(POOL[i]);
                }
            }
            let ids: Vec<_> = registry.all().iter().map(Provider::id).collect();
            prop_assert_eq!(ids, expected);
            prop_assert_eq!(registry.len() + registry.rejections().len(), picks.len());
        }
    }

    #[test]
    fn validation_errors_render() {
        use alloc::string::ToString;
        let text: String = ValidationError::DuplicateId("x").to_string();
        assert_eq!(text, "id `x` is already registered");
    }
}
