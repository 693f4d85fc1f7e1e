use chrono::{DateTime, Local};
use countdown_core::TimeLeft;
use yew::hook;
use yew::prelude::*;

use super::handle::CountdownHandle;
use super::state::{CountdownAction, CountdownModel};
use crate::interval::Interval;
use crate::storage::StorageBackend;

/// Run the one-second ticker for as long as a target instant exists.
///
/// The interval lives inside the effect keyed on the target, so leaving the
/// running state or unmounting drops (and cancels) it.
#[hook]
pub fn use_ticker(model: &UseReducerHandle<CountdownModel>, period_ms: u32) {
    let target: Option<DateTime<Local>> = model.countdown().target().copied();
    let dispatcher = model.dispatcher();
    use_effect_with((target, period_ms), move |(target, period_ms)| {
        let interval = target.as_ref().and_then(|_| {
            Interval::new(*period_ms, move || {
                dispatcher.dispatch(CountdownAction::Tick(Local::now()));
            })
            .map_err(|err| {
                log::error!(
                    "Failed to schedule countdown ticker: {}",
                    crate::dom::js_error_message(&err)
                );
            })
            .ok()
        });
        move || drop(interval)
    });
}

/// Follow changes to the storage props after mount.
#[hook]
pub fn use_store_binding(
    model: &UseReducerHandle<CountdownModel>,
    storage: Option<StorageBackend>,
    key: String,
) {
    let dispatcher = model.dispatcher();
    use_effect_with((storage, key), move |(storage, key)| {
        dispatcher.dispatch(CountdownAction::Rebind(
            storage.clone().unwrap_or_default(),
            key.clone(),
        ));
        || {}
    });
}

/// Expose the clear action to the owning container while mounted.
#[hook]
pub fn use_clear_handle(
    model: &UseReducerHandle<CountdownModel>,
    handle: Option<CountdownHandle>,
) {
    let dispatcher = model.dispatcher();
    use_effect_with(handle, move |handle| {
        let registered = handle.clone();
        if let Some(handle) = &registered {
            handle.register(Callback::from(move |()| {
                dispatcher.dispatch(CountdownAction::Clear);
            }));
        }
        move || {
            if let Some(handle) = registered {
                handle.unregister();
            }
        }
    });
}

/// Emit `on_change` whenever the displayed remaining time changes.
#[hook]
pub fn use_change_notifier(time_left: Option<TimeLeft>, on_change: Callback<Option<TimeLeft>>) {
    use_effect_with(time_left, move |time_left| {
        on_change.emit(*time_left);
        || {}
    });
}
