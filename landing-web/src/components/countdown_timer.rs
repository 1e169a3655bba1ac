//! Countdown to the event start, refreshed every second

use std::time::Duration;

use chrono::{DateTime, Utc};
use leptos::prelude::*;
use lib_landing::countdown::Countdown;

use crate::utils::viewport::now_utc;

#[component]
pub fn CountdownTimer(target: DateTime<Utc>) -> impl IntoView {
    let remaining = RwSignal::new(Countdown::until(now_utc(), target));

    match set_interval_with_handle(
        move || remaining.set(Countdown::until(now_utc(), target)),
        Duration::from_secs(1),
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => log::warn!("Countdown interval not started: {:?}", e),
    }

    view! {
        <div class="countdown">
            <div class="countdown-caption">"BREACH IN"</div>
            {move || {
                let countdown = remaining.get();
                if countdown.is_over() {
                    view! { <div class="countdown-live">"SYSTEM ONLINE"</div> }.into_any()
                } else {
                    view! {
                        <div class="countdown-segments">
                            {countdown
                                .segments()
                                .into_iter()
                                .map(|(value, label)| {
                                    view! {
                                        <div class="countdown-segment">
                                            <span class="countdown-value">{value}</span>
                                            <span class="countdown-label">{label}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
