//! Glitch heading
//!
//! The text is duplicated into `data-text` so the stylesheet can draw the
//! offset red/cyan copies with `::before` and `::after`.

use leptos::prelude::*;

#[component]
pub fn GlitchText(
    #[prop(into)] text: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <h1 class=format!("glitch {}", class) data-text=text.clone()>
            {text.clone()}
        </h1>
    }
}
