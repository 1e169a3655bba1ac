//! Landing page context

use leptos::prelude::*;
use lib_landing::LandingConfig;

use crate::utils::config::load_config;

/// Page-wide configuration, loaded once at startup
#[derive(Clone, Copy)]
pub struct LandingContext {
    pub config: StoredValue<LandingConfig>,
}

impl LandingContext {
    pub fn new(config: LandingConfig) -> Self {
        Self {
            config: StoredValue::new(config),
        }
    }

    pub fn click_sound(&self) -> String {
        self.config.with_value(|c| c.click_sound.clone())
    }
}

pub fn provide_landing_context() -> LandingContext {
    let context = LandingContext::new(load_config());
    provide_context(context);
    context
}

pub fn use_landing_context() -> LandingContext {
    expect_context::<LandingContext>()
}
