//! Digital Rain Background Component
//! Columns of falling glyphs behind the 3D scene

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use lib_landing::rain::rain_columns;
use web_sys::Element;

const RAIN_ELEMENT_ID: &str = "digital-rain";
const COLUMN_COUNT: usize = 48;
const COLUMN_ROWS: usize = 24;

#[component]
pub fn DigitalRain() -> impl IntoView {
    leptos::task::spawn_local(async move {
        // Wait a bit for DOM to be ready
        TimeoutFuture::new(100).await;

        match gloo_utils::document().get_element_by_id(RAIN_ELEMENT_ID) {
            Some(container) => {
                if let Err(e) = create_columns(&container) {
                    log::warn!("Digital rain not rendered: {:?}", e);
                }
            }
            None => log::debug!("#{} not mounted, skipping rain", RAIN_ELEMENT_ID),
        }
    });

    view! {
        <div class="digital-rain" id=RAIN_ELEMENT_ID aria-hidden="true"></div>
    }
}

fn create_columns(container: &Element) -> Result<(), wasm_bindgen::JsValue> {
    let document = gloo_utils::document();

    for column in rain_columns(COLUMN_COUNT, COLUMN_ROWS, js_sys::Math::random) {
        let el = document.create_element("div")?;
        el.set_class_name("rain-column");
        el.set_attribute("style", &column.style())?;
        el.set_text_content(Some(&column.glyphs));
        container.append_child(&el)?;
    }
    Ok(())
}
