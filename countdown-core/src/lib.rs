//! Countdown Engine
//!
//! Platform-agnostic logic for the countdown-to-date widget: the persisted
//! record, end-of-day date arithmetic, the idle/running state holder and the
//! persistence adapter. This crate has no browser dependencies; the web shell
//! supplies a [`KeyValueStore`] and drives [`Countdown::tick`] from a timer.

pub mod calendar;
pub mod config;
pub mod countdown;
pub mod error;
pub mod record;
pub mod store;

pub use calendar::{MILLIS_PER_DAY, ceil_days, end_of_day, parse_date, today_iso};
pub use config::{CountdownConfig, DEFAULT_ENDING_SOON_DAYS, DEFAULT_STORAGE_KEY};
pub use countdown::{Countdown, Phase, Press, Tick};
pub use error::{ConfigError, CountdownError};
pub use record::{CountdownRecord, TimeLeft};
pub use store::{MemoryStore, RecordStore};

/// Trait for abstracting the key-value store the record lives in
/// Platform-specific implementations should provide this
pub trait KeyValueStore {
    type Error: std::error::Error + 'static;

    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Overwrite the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be written (quota, availability).
    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error>;

    /// Remove `key` entirely. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the removal.
    fn remove(&self, key: &str) -> Result<(), Self::Error>;
}

/// Capability handed to an owning container so it can reset a mounted widget.
pub trait Clearable {
    /// Reset the countdown and drop its persisted record.
    fn clear_data(&self);
}
