//! Site settings persisted in browser storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only setting today is the carousel rotation interval. `SettingsStore`
//! owns the typed read/write over an injected `KeyValueStore`;
//! `SettingsContext` layers a reactive signal on top so the UI re-renders
//! when the value changes.
//!
//! The context is installed by `provide_settings` near the root of the tree.
//! Access from outside that subtree is a wiring bug and fails fast with
//! `SettingsError::MissingProvider` instead of silently using a default.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use leptos::prelude::*;

use crate::util::storage::KeyValueStore;

/// Storage key for the carousel interval (decimal milliseconds).
pub const CAROUSEL_SPEED_KEY: &str = "site_settings_carousel_speed";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("settings accessed outside of a settings provider")]
    MissingProvider,
    #[error("carousel speed must be a whole number of milliseconds, got {0:?}")]
    NotNumeric(String),
    #[error("carousel speed must be positive, got {0}")]
    NonPositive(i64),
    #[error("carousel speed must be at most {max} ms, got {got}", max = CarouselSpeed::MAX_MILLIS)]
    OutOfRange { got: i64 },
}

/// Carousel rotation interval. Always a positive number of milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CarouselSpeed(u32);

impl CarouselSpeed {
    pub const DEFAULT_MILLIS: u32 = 10_000;
    /// One day.
    pub const MAX_MILLIS: u32 = 86_400_000;

    /// Validate a millisecond count.
    ///
    /// # Errors
    ///
    /// Rejects zero, negative values, and values above one day.
    pub fn new(millis: i64) -> Result<Self, SettingsError> {
        if millis <= 0 {
            return Err(SettingsError::NonPositive(millis));
        }
        if millis > i64::from(Self::MAX_MILLIS) {
            return Err(SettingsError::OutOfRange { got: millis });
        }
        u32::try_from(millis)
            .map(Self)
            .map_err(|_| SettingsError::OutOfRange { got: millis })
    }

    /// Parse a decimal string, as stored or as typed by a user.
    ///
    /// # Errors
    ///
    /// Returns `NotNumeric` for anything that is not an integer, otherwise
    /// the same errors as [`CarouselSpeed::new`].
    pub fn parse(raw: &str) -> Result<Self, SettingsError> {
        let trimmed = raw.trim();
        let millis = trimmed
            .parse::<i64>()
            .map_err(|_| SettingsError::NotNumeric(trimmed.to_owned()))?;
        Self::new(millis)
    }

    #[must_use]
    pub fn as_millis(self) -> u32 {
        self.0
    }

    /// Persisted representation.
    #[must_use]
    pub fn to_storage_value(self) -> String {
        self.0.to_string()
    }
}

impl Default for CarouselSpeed {
    fn default() -> Self {
        Self(Self::DEFAULT_MILLIS)
    }
}

impl fmt::Display for CarouselSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ms", self.0)
    }
}

/// Typed settings over a key-value store.
///
/// The stored value is read lazily on the first `carousel_speed()` call and
/// cached afterwards; every successful `set_carousel_speed` writes through.
pub struct SettingsStore {
    storage: Arc<dyn KeyValueStore>,
    carousel_speed: RwLock<Option<CarouselSpeed>>,
}

impl SettingsStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage, carousel_speed: RwLock::new(None) }
    }

    /// Current interval. Missing or unparsable stored values fall back to
    /// [`CarouselSpeed::DEFAULT_MILLIS`].
    pub fn carousel_speed(&self) -> CarouselSpeed {
        if let Some(speed) = *self.carousel_speed.read().unwrap_or_else(PoisonError::into_inner) {
            return speed;
        }
        let loaded = self
            .storage
            .get_item(CAROUSEL_SPEED_KEY)
            .and_then(|raw| CarouselSpeed::parse(&raw).ok())
            .unwrap_or_default();
        let mut cached = self.carousel_speed.write().unwrap_or_else(PoisonError::into_inner);
        *cached.get_or_insert(loaded)
    }

    /// Validate and store a new interval.
    ///
    /// The in-memory value changes before the storage write. A failed write
    /// is logged and otherwise ignored, so memory may run ahead of storage
    /// until the next successful write.
    ///
    /// # Errors
    ///
    /// Returns the validation error and leaves both memory and storage
    /// untouched when `millis` is not a positive interval.
    pub fn set_carousel_speed(&self, millis: i64) -> Result<CarouselSpeed, SettingsError> {
        let speed = CarouselSpeed::new(millis)?;
        *self.carousel_speed.write().unwrap_or_else(PoisonError::into_inner) = Some(speed);
        if let Err(e) = self.storage.set_item(CAROUSEL_SPEED_KEY, &speed.to_storage_value()) {
            #[cfg(feature = "hydrate")]
            log::warn!("failed to persist {CAROUSEL_SPEED_KEY}: {e}");
            #[cfg(not(feature = "hydrate"))]
            let _ = e;
        }
        Ok(speed)
    }
}

impl fmt::Debug for SettingsStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsStore")
            .field("carousel_speed", &self.carousel_speed)
            .finish_non_exhaustive()
    }
}

/// Reactive handle to the settings store, shared through Leptos context.
#[derive(Clone, Debug)]
pub struct SettingsContext {
    store: Arc<SettingsStore>,
    carousel_speed: RwSignal<CarouselSpeed>,
}

impl SettingsContext {
    /// Build the handle, reading the persisted interval once.
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        let store = Arc::new(SettingsStore::new(storage));
        let carousel_speed = RwSignal::new(store.carousel_speed());
        Self { store, carousel_speed }
    }

    /// Reactive read of the interval; tracks the caller.
    pub fn carousel_speed(&self) -> CarouselSpeed {
        self.carousel_speed.get()
    }

    /// Untracked read of the interval.
    pub fn carousel_speed_untracked(&self) -> CarouselSpeed {
        self.carousel_speed.get_untracked()
    }

    /// Persist a new interval and notify dependents.
    ///
    /// # Errors
    ///
    /// Propagates validation errors from [`SettingsStore::set_carousel_speed`].
    pub fn set_carousel_speed(&self, millis: i64) -> Result<CarouselSpeed, SettingsError> {
        let speed = self.store.set_carousel_speed(millis)?;
        self.carousel_speed.set(speed);
        Ok(speed)
    }

    /// Parse user text, then persist it.
    ///
    /// # Errors
    ///
    /// Returns `NotNumeric` for non-integer text and the validation errors
    /// of [`SettingsContext::set_carousel_speed`] otherwise.
    pub fn set_carousel_speed_from_input(&self, raw: &str) -> Result<CarouselSpeed, SettingsError> {
        let speed = CarouselSpeed::parse(raw)?;
        self.set_carousel_speed(i64::from(speed.as_millis()))
    }
}

/// Install a settings context for the current subtree.
pub fn provide_settings(storage: Arc<dyn KeyValueStore>) -> SettingsContext {
    let settings = SettingsContext::new(storage);
    provide_context(settings.clone());
    settings
}

/// Look up the settings context.
///
/// # Errors
///
/// Returns `MissingProvider` when no ancestor called [`provide_settings`].
pub fn try_use_settings() -> Result<SettingsContext, SettingsError> {
    use_context::<SettingsContext>().ok_or(SettingsError::MissingProvider)
}

/// Look up the settings context, panicking when it was never provided.
///
/// # Panics
///
/// Panics with the `MissingProvider` message outside a settings provider.
pub fn use_settings() -> SettingsContext {
    match try_use_settings() {
        Ok(settings) => settings,
        Err(e) => panic!("{e}"),
    }
}
