//! Countdown-to-date widget.
//!
//! A date input, a dual-purpose start/clear button and, while a countdown is
//! active, a circular badge with the days remaining. State survives reloads
//! through the configured store; a parent may reset the widget through a
//! [`CountdownHandle`].

mod handle;
mod hooks;
mod state;
mod view;

use chrono::Local;
use countdown_core::{CountdownConfig, TimeLeft, today_iso};
use web_sys::HtmlInputElement;
use yew::html::TargetCast;
use yew::prelude::*;

use crate::dom::show_picker;
use crate::storage::StorageBackend;
pub use handle::CountdownHandle;
use hooks::{use_change_notifier, use_clear_handle, use_store_binding, use_ticker};
pub use state::{CountdownAction, CountdownModel};
pub use view::{badge_classes, button_classes, render_badge};

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub config: CountdownConfig,
    /// Filled in while mounted so the owner can call `clear_data`.
    #[prop_or_default]
    pub handle: Option<CountdownHandle>,
    /// Where the record lives; `localStorage` when unset.
    #[prop_or_default]
    pub storage: Option<StorageBackend>,
    /// Active UI language; a change re-renders the labels.
    #[prop_or_default]
    pub lang: AttrValue,
    #[prop_or_default]
    pub on_change: Callback<Option<TimeLeft>>,
}

#[function_component(CountdownWidget)]
pub fn countdown_widget(p: &Props) -> Html {
    let model = {
        let backend = p.storage.clone().unwrap_or_default();
        let config = p.config.clone();
        use_reducer(move || CountdownModel::restore(backend, &config))
    };
    let input_ref = use_node_ref();

    use_store_binding(&model, p.storage.clone(), p.config.storage_key.clone());
    use_ticker(&model, p.config.tick_interval_ms);
    use_clear_handle(&model, p.handle.clone());
    use_change_notifier(model.time_left(), p.on_change.clone());

    let countdown = model.countdown();
    let active = countdown.is_active();

    let on_date_change = {
        let dispatcher = model.dispatcher();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(CountdownAction::Select(input.value()));
        })
    };

    let on_press = {
        let dispatcher = model.dispatcher();
        let wants_picker = model.wants_picker();
        let input_ref = input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if wants_picker {
                if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                    show_picker(&input);
                }
                return;
            }
            dispatcher.dispatch(CountdownAction::Press(Local::now()));
        })
    };

    let badge = countdown
        .time_left()
        .map(|left| render_badge(left, countdown.is_ending_soon(p.config.ending_soon_days)))
        .unwrap_or_default();

    html! {
        <section class="countdown-container" data-lang={p.lang.clone()}>
            <div class="countdown-header">
                <h3>{ crate::i18n::t("countdown.title") }</h3>
                <div class="countdown-input-group">
                    <label for="countdown-date" class="sr-only">{ crate::i18n::t("countdown.date_label") }</label>
                    <input
                        id="countdown-date"
                        ref={input_ref}
                        type="date"
                        value={countdown.selected_date().to_string()}
                        min={today_iso(&Local::now())}
                        placeholder={crate::i18n::t("countdown.placeholder")}
                        disabled={active}
                        onchange={on_date_change}
                    />
                    <button
                        id="countdown-action"
                        type="button"
                        class={button_classes(active)}
                        title={view::button_title(active)}
                        aria-label={view::button_title(active)}
                        onclick={on_press}
                    >
                        { view::action_icon(active) }
                    </button>
                </div>
            </div>
            { badge }
        </section>
    }
}
