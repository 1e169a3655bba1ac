//! Page configuration loading
//!
//! `index.html` may embed a `<script id="landing-config" type="application/json">`
//! block. Anything missing or invalid falls back to the built-in defaults.

use lib_landing::LandingConfig;

pub const CONFIG_ELEMENT_ID: &str = "landing-config";

pub fn load_config() -> LandingConfig {
    let Some(raw) = gloo_utils::document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        log::debug!("No #{} block, using default config", CONFIG_ELEMENT_ID);
        return LandingConfig::default();
    };

    if raw.trim().is_empty() {
        return LandingConfig::default();
    }

    match LandingConfig::from_json(&raw) {
        Ok(config) => {
            log::info!("Loaded landing config from #{}", CONFIG_ELEMENT_ID);
            config
        }
        Err(e) => {
            log::warn!("Ignoring landing config: {}", e);
            LandingConfig::default()
        }
    }
}
