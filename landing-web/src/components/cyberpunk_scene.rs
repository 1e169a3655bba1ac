//! Background scene
//!
//! A perspective grid and horizon sun drawn with CSS 3D transforms. The raw
//! pointer position tilts the grid for a parallax effect; nothing else reads it.

use leptos::prelude::*;
use lib_landing::pointer::PointerPosition;

use crate::utils::viewport::viewport_size;

const PARALLAX_DEG: f64 = 6.0;
const GRID_TILT_DEG: f64 = 62.0;

#[component]
pub fn CyberpunkScene(#[prop(into)] pointer: Signal<PointerPosition>) -> impl IntoView {
    let grid_style = move || {
        let (width, height) = viewport_size();
        let (dx, dy) = pointer.get().parallax(width, height, PARALLAX_DEG);
        format!(
            "transform: perspective(700px) rotateX({:.2}deg) rotateZ({:.2}deg);",
            GRID_TILT_DEG - dy,
            dx
        )
    };

    let sun_style = move || {
        let (width, height) = viewport_size();
        let (dx, dy) = pointer.get().parallax(width, height, 20.0);
        format!("transform: translate({:.1}px, {:.1}px);", -dx, -dy)
    };

    view! {
        <div class="scene-layer" aria-hidden="true">
            <div class="scene-sun" style=sun_style></div>
            <div class="scene-grid" style=grid_style></div>
        </div>
    }
}
