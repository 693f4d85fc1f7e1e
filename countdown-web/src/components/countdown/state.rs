use chrono::{DateTime, Local};
use countdown_core::{Countdown, CountdownConfig, Press, RecordStore, Tick, TimeLeft};
use std::rc::Rc;
use yew::Reducible;

use crate::storage::StorageBackend;

#[derive(Debug, Clone, PartialEq)]
pub enum CountdownAction {
    Select(String),
    Press(DateTime<Local>),
    Tick(DateTime<Local>),
    Clear,
    /// Switch to another backend or key and reload from it.
    Rebind(StorageBackend, String),
}

/// Reducer state: the countdown plus the store every transition writes to.
#[derive(Debug, Clone)]
pub struct CountdownModel {
    countdown: Countdown,
    store: Rc<RecordStore<StorageBackend>>,
}

impl CountdownModel {
    /// Load whatever the store holds for `config.storage_key`.
    #[must_use]
    pub fn restore(backend: StorageBackend, config: &CountdownConfig) -> Self {
        Self::load(RecordStore::with_config(backend, config))
    }

    fn load(store: RecordStore<StorageBackend>) -> Self {
        Self {
            countdown: Countdown::restore(&store),
            store: Rc::new(store),
        }
    }

    #[must_use]
    pub const fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    #[must_use]
    pub const fn time_left(&self) -> Option<TimeLeft> {
        self.countdown.time_left()
    }

    /// Pressing the action button now would only open the picker.
    #[must_use]
    pub fn wants_picker(&self) -> bool {
        !self.countdown.is_active() && self.countdown.selected_date().is_empty()
    }
}

impl Reducible for CountdownModel {
    type Action = CountdownAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let action = match action {
            CountdownAction::Rebind(backend, key) => {
                if self.store.key() == key && *self.store.backend() == backend {
                    return self;
                }
                log::debug!("Countdown store rebound to {key}");
                return Rc::new(Self::load(RecordStore::new(backend, key)));
            }
            other => other,
        };
        let mut next = (*self).clone();
        match action {
            CountdownAction::Select(date) => next.countdown.select_date(date),
            CountdownAction::Press(now) => match next.countdown.press(&next.store, now) {
                Ok(Press::OpenPicker) => log::debug!("No date selected; picker requested"),
                Ok(Press::Started(_) | Press::Cleared) => {}
                Err(err) => log::warn!("Cannot start countdown: {err}"),
            },
            CountdownAction::Tick(now) => {
                if let Tick::Expired = next.countdown.tick(&next.store, now) {
                    log::debug!("Ticker stopping after expiry");
                }
            }
            CountdownAction::Clear => next.countdown.clear(&next.store),
            CountdownAction::Rebind(..) => {}
        }
        if next.countdown == self.countdown {
            self
        } else {
            Rc::new(next)
        }
    }
}
