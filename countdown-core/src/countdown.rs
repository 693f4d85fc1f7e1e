//! The countdown state holder and its idle/running ticker.
//!
//! [`Countdown`] owns the picker value, the derived target instant and the
//! last computed [`TimeLeft`]. Every transition that changes what is shown is
//! written through a [`RecordStore`]; the caller supplies `now` so the clock
//! stays outside this crate.

use chrono::{DateTime, Local};

use crate::KeyValueStore;
use crate::calendar::{end_of_day, parse_date};
use crate::error::CountdownError;
use crate::record::{CountdownRecord, TimeLeft};
use crate::store::RecordStore;

/// Ticker lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
}

/// Result of one timer callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// No target instant; nothing happened.
    Idle,
    /// Remaining time recomputed and persisted.
    Running(TimeLeft),
    /// Target reached; state and record were cleared.
    Expired,
}

/// Result of pressing the dual-purpose action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Press {
    Cleared,
    /// No date chosen; the view should open the native picker.
    OpenPicker,
    Started(TimeLeft),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Countdown {
    selected_date: String,
    target: Option<DateTime<Local>>,
    time_left: Option<TimeLeft>,
}

impl Countdown {
    /// Rebuild state from the persisted record.
    ///
    /// The saved `timeLeft` is kept as-is until the next [`Countdown::tick`].
    #[must_use]
    pub fn restore<S: KeyValueStore>(store: &RecordStore<S>) -> Self {
        let Some(record) = store.load() else {
            return Self::default();
        };
        if record.target_date.is_empty() {
            return Self::default();
        }
        let target = match target_instant(&record.target_date) {
            Ok(target) => target,
            Err(err) => {
                log::warn!("Discarding stored countdown: {err}");
                return Self::default();
            }
        };
        log::debug!("Restored countdown to {}", record.target_date);
        Self {
            selected_date: record.target_date,
            target: Some(target),
            time_left: record.time_left,
        }
    }

    #[must_use]
    pub fn selected_date(&self) -> &str {
        &self.selected_date
    }

    #[must_use]
    pub const fn target(&self) -> Option<&DateTime<Local>> {
        self.target.as_ref()
    }

    #[must_use]
    pub const fn time_left(&self) -> Option<TimeLeft> {
        self.time_left
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        if self.target.is_some() {
            Phase::Running
        } else {
            Phase::Idle
        }
    }

    /// Whether a remaining time is on display (picker locked, button clears).
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.time_left.is_some()
    }

    #[must_use]
    pub fn is_ending_soon(&self, threshold_days: i64) -> bool {
        self.time_left.is_some_and(|left| left.days <= threshold_days)
    }

    /// Snapshot in the persisted shape; `None` when no date is selected.
    #[must_use]
    pub fn record(&self) -> Option<CountdownRecord> {
        (!self.selected_date.is_empty())
            .then(|| CountdownRecord::new(self.selected_date.clone(), self.time_left))
    }

    /// Update the picker value. Ignored while the picker is locked.
    ///
    /// A pending target (restored without a remaining time) follows the new
    /// date, or is dropped when the date has no end-of-day instant.
    pub fn select_date(&mut self, date: impl Into<String>) {
        if self.is_active() {
            return;
        }
        self.selected_date = date.into();
        if self.target.is_some() {
            self.target = target_instant(&self.selected_date).ok();
        }
    }

    /// Count down to the end of `date` in local time and persist the record.
    ///
    /// # Errors
    ///
    /// Returns an error if `date` is empty, not `YYYY-MM-DD`, or has no
    /// end-of-day instant locally. State is left untouched in that case.
    pub fn start<S: KeyValueStore>(
        &mut self,
        store: &RecordStore<S>,
        date: impl Into<String>,
        now: DateTime<Local>,
    ) -> Result<TimeLeft, CountdownError> {
        let date = date.into();
        let target = target_instant(&date)?;
        let left = TimeLeft::between(&target, &now);
        log::info!("Countdown started to {date}: {} day(s) left", left.days);
        self.selected_date = date;
        self.target = Some(target);
        self.time_left = Some(left);
        self.persist(store);
        Ok(left)
    }

    /// Reset to idle and drop the record. Safe to call repeatedly.
    pub fn clear<S: KeyValueStore>(&mut self, store: &RecordStore<S>) {
        if self.target.is_some() || self.time_left.is_some() {
            log::info!("Countdown cleared");
        }
        *self = Self::default();
        store.remove();
    }

    /// One timer callback: recompute, persist, or expire.
    pub fn tick<S: KeyValueStore>(
        &mut self,
        store: &RecordStore<S>,
        now: DateTime<Local>,
    ) -> Tick {
        let Some(target) = self.target else {
            return Tick::Idle;
        };
        let left = TimeLeft::between(&target, &now);
        if left.is_expired() {
            log::info!("Countdown to {} expired", self.selected_date);
            self.clear(store);
            return Tick::Expired;
        }
        self.time_left = Some(left);
        self.persist(store);
        Tick::Running(left)
    }

    /// The action button: clear when active, otherwise start or ask for a date.
    ///
    /// # Errors
    ///
    /// Returns an error if the selected date cannot be started.
    pub fn press<S: KeyValueStore>(
        &mut self,
        store: &RecordStore<S>,
        now: DateTime<Local>,
    ) -> Result<Press, CountdownError> {
        if self.is_active() {
            self.clear(store);
            return Ok(Press::Cleared);
        }
        if self.selected_date.is_empty() {
            return Ok(Press::OpenPicker);
        }
        let date = self.selected_date.clone();
        self.start(store, date, now).map(Press::Started)
    }

    fn persist<S: KeyValueStore>(&self, store: &RecordStore<S>) {
        if let Some(record) = self.record() {
            store.save(&record);
        }
    }
}

fn target_instant(date: &str) -> Result<DateTime<Local>, CountdownError> {
    let day = parse_date(date)?;
    end_of_day(day, &Local).ok_or_else(|| CountdownError::OutOfRange {
        value: date.to_string(),
    })
}
