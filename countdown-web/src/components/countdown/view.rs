use countdown_core::TimeLeft;
use yew::prelude::*;

use crate::i18n::{t, tr_count};

#[must_use]
pub fn badge_classes(ending_soon: bool) -> Classes {
    classes!("countdown-circle", ending_soon.then_some("ending"))
}

#[must_use]
pub fn button_classes(active: bool) -> Classes {
    classes!("countdown-btn", active.then_some("clear"))
}

#[must_use]
pub fn button_title(active: bool) -> String {
    if active {
        t("countdown.clear")
    } else {
        t("countdown.start")
    }
}

/// Circular day-count readout.
#[must_use]
pub fn render_badge(left: TimeLeft, ending_soon: bool) -> Html {
    html! {
        <div class="countdown-display">
            <div class={badge_classes(ending_soon)}
                role="timer"
                aria-live="polite"
                aria-label={tr_count("countdown.remaining", left.days)}>
                <span class="countdown-number">{ left.days.to_string() }</span>
                <span class="countdown-label">{ tr_count("countdown.unit", left.days) }</span>
            </div>
        </div>
    }
}

#[must_use]
pub fn action_icon(active: bool) -> Html {
    if active {
        html! {
            <svg class="icon-clear" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
                <line x1="18" y1="6" x2="6" y2="18"></line>
                <line x1="6" y1="6" x2="18" y2="18"></line>
            </svg>
        }
    } else {
        html! {
            <svg class="icon-start" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
                <circle cx="12" cy="12" r="10"></circle>
                <line x1="12" y1="8" x2="12" y2="16"></line>
                <line x1="8" y1="12" x2="16" y2="12"></line>
            </svg>
        }
    }
}
