//! Sponsor Wheel Component
//! Ring of sponsor logos, rotated by a CSS animation

use leptos::prelude::*;
use lib_landing::sponsors::SponsorWheel;

/// CSS pixels per scene unit
const PX_PER_UNIT: f64 = 40.0;

#[component]
pub fn SponsorsWheel(wheel: SponsorWheel) -> impl IntoView {
    let radius = wheel.css_radius_px(PX_PER_UNIT);
    let brightness = wheel.css_brightness();

    let ring_style = match wheel.rotation_period_secs() {
        Some(period) => format!(
            "top: calc(50% + {:.0}px); animation-duration: {:.1}s;",
            wheel.css_offset_y_px(PX_PER_UNIT),
            period
        ),
        None => format!(
            "top: calc(50% + {:.0}px); animation: none;",
            wheel.css_offset_y_px(PX_PER_UNIT)
        ),
    };

    let logos = wheel
        .placements()
        .into_iter()
        .map(|placement| {
            let style = format!(
                "transform: rotateY({:.1}deg) translateZ({:.0}px); filter: brightness({:.2});",
                placement.angle_deg, radius, brightness
            );
            view! {
                <img class="sponsor-logo" src=placement.path alt="Sponsor logo" loading="lazy" style=style/>
            }
        })
        .collect_view();

    view! {
        <div class="sponsors-wheel" aria-hidden="true">
            <div class="sponsors-ring" style=ring_style>
                {logos}
            </div>
        </div>
    }
}
