//! Hero section content per intro state
//!
//! The returning-visitor layout and the first-visit layout differ: the former
//! shows the register call-to-action, the latter the "INITIATED" tagline with
//! staged animations. Shared pieces (headline, logo) are rendered once by the
//! view; this module only says which pieces are on screen.

use crate::intro::{IntroPhase, IntroState};

pub const BRAND: &str = "ELICIT FEST";
pub const NETWORK_STATUS: &str = "NETWORK_STATUS: CORRUPTED";
pub const HEADLINE: &str = "SYSTEM CORRUPTION DETECTED";
pub const TAGLINE: &str = "ELICIT FEST INITIATED...";
pub const INFILTRATE_LABEL: &str = "> INFILTRATE SYSTEM";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroContent {
    pub headline: Option<&'static str>,
    pub tagline: Option<&'static str>,
    pub show_logo: bool,
    pub show_register_cta: bool,
    /// Entrance animations play (first visit only).
    pub animated: bool,
    pub show_nav: bool,
}

impl HeroContent {
    pub fn for_state(state: &IntroState) -> Self {
        match (state.phase, state.skip_intro) {
            (IntroPhase::Settled, true) | (IntroPhase::SkippingIntro, _) => Self {
                headline: Some(HEADLINE),
                tagline: None,
                show_logo: true,
                show_register_cta: true,
                animated: false,
                show_nav: true,
            },
            (IntroPhase::Settled, false) => Self {
                headline: Some(HEADLINE),
                tagline: Some(TAGLINE),
                show_logo: true,
                show_register_cta: false,
                animated: true,
                show_nav: true,
            },
            (IntroPhase::Loading | IntroPhase::AnimatingIntro, _) => Self {
                headline: None,
                tagline: None,
                show_logo: false,
                show_register_cta: false,
                animated: !state.skip_intro,
                show_nav: false,
            },
        }
    }

    /// Last heading on screen.
    pub fn intro_heading(&self) -> Option<&'static str> {
        self.tagline.or(self.headline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intro::{IntroController, IntroSettings, MountOutcome, DEFAULT_STORAGE_KEY};
    use crate::store::MemoryStore;

    #[test]
    fn test_first_visit_heading_after_delay() {
        let mut c = IntroController::new(MemoryStore::default(), IntroSettings::default());
        assert!(matches!(c.mount(), MountOutcome::ScheduleReveal(_)));

        let before = HeroContent::for_state(&c.state());
        assert_eq!(before.intro_heading(), None);
        assert!(!before.show_nav);

        c.reveal();
        let after = HeroContent::for_state(&c.state());
        assert_eq!(after.intro_heading(), Some("ELICIT FEST INITIATED..."));
        assert_eq!(after.headline, Some(HEADLINE));
        assert!(after.animated);
        assert!(!after.show_register_cta);
    }

    #[test]
    fn test_returning_visit_heading_immediately() {
        let mut c = IntroController::new(
            MemoryStore::with_entry(DEFAULT_STORAGE_KEY, "1"),
            IntroSettings::default(),
        );
        c.mount();
        let hero = HeroContent::for_state(&c.state());
        assert_eq!(hero.intro_heading(), Some("SYSTEM CORRUPTION DETECTED"));
        assert!(!hero.animated);
        assert!(hero.show_register_cta);
        assert!(hero.show_nav);
    }
}
