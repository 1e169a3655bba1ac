//! # Intro Controller
//!
//! Decides on mount whether the first-visit intro plays or the hero jumps
//! straight to its settled layout.
//!
//! ```text
//! Loading ──marker present──▶ SkippingIntro ──▶ Settled   (synchronous, no timer)
//!    │
//!    └──marker absent / read error──▶ AnimatingIntro ──reveal()──▶ Settled
//! ```
//!
//! `Settled` is terminal. The controller never owns a timer: [`IntroController::mount`]
//! tells the host how long to wait and the host calls [`IntroController::reveal`]
//! when its timer fires. After [`IntroController::unmount`] a late `reveal` is
//! ignored, so neither the state nor the store is touched.

use std::time::Duration;

use crate::store::{marker_present, VisitStore};

pub const DEFAULT_STORAGE_KEY: &str = "elicit_seen_intro";
pub const DEFAULT_SEEN_MARKER: &str = "1";
pub const DEFAULT_INTRO_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntroPhase {
    #[default]
    Loading,
    SkippingIntro,
    AnimatingIntro,
    Settled,
}

/// Snapshot of the intro sub-machine consumed by the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntroState {
    pub phase: IntroPhase,
    /// Set once at mount when the marker was found; never changes afterwards.
    pub skip_intro: bool,
}

impl IntroState {
    pub fn initialized(&self) -> bool {
        self.phase == IntroPhase::Settled
    }
}

/// What the host must do after [`IntroController::mount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountOutcome {
    Settled,
    /// Schedule a one-shot timer and call `reveal()` when it fires.
    ScheduleReveal(Duration),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntroSettings {
    pub storage_key: String,
    pub seen_marker: String,
    pub delay: Duration,
}

impl Default for IntroSettings {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            seen_marker: DEFAULT_SEEN_MARKER.to_string(),
            delay: Duration::from_millis(DEFAULT_INTRO_DELAY_MS),
        }
    }
}

pub struct IntroController<S> {
    store: S,
    settings: IntroSettings,
    state: IntroState,
    mounted: bool,
    torn_down: bool,
}

impl<S: VisitStore> IntroController<S> {
    pub fn new(store: S, settings: IntroSettings) -> Self {
        Self {
            store,
            settings,
            state: IntroState::default(),
            mounted: false,
            torn_down: false,
        }
    }

    pub fn state(&self) -> IntroState {
        self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Read the marker and pick the intro path.
    ///
    /// Calling this again after the first mount does not re-read the store.
    pub fn mount(&mut self) -> MountOutcome {
        if self.torn_down {
            return MountOutcome::Settled;
        }
        if self.mounted {
            return match self.state.phase {
                IntroPhase::AnimatingIntro => MountOutcome::ScheduleReveal(self.settings.delay),
                _ => MountOutcome::Settled,
            };
        }
        self.mounted = true;

        if marker_present(&self.store, &self.settings.storage_key) {
            self.state = IntroState {
                phase: IntroPhase::SkippingIntro,
                skip_intro: true,
            };
            log::debug!("intro marker found, skipping intro");
            self.state.phase = IntroPhase::Settled;
            return MountOutcome::Settled;
        }

        self.state.phase = IntroPhase::AnimatingIntro;
        log::debug!("first visit, intro reveal in {:?}", self.settings.delay);
        MountOutcome::ScheduleReveal(self.settings.delay)
    }

    /// Timer callback. Returns `true` when the state changed.
    pub fn reveal(&mut self) -> bool {
        if !self.mounted || self.state.phase != IntroPhase::AnimatingIntro {
            return false;
        }
        self.state.phase = IntroPhase::Settled;

        if let Err(e) = self
            .store
            .set(&self.settings.storage_key, &self.settings.seen_marker)
        {
            log::debug!("could not persist intro marker, intro will replay: {}", e);
        }
        true
    }

    /// Component teardown. Pending reveals become no-ops.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.torn_down = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::store::{MemoryStore, UnavailableStore};

    /// Reads succeed, writes always fail.
    #[derive(Default)]
    struct ReadOnlyStore {
        attempted_writes: usize,
    }

    impl VisitStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            self.attempted_writes += 1;
            Err(StoreError::Write("quota exceeded".to_string()))
        }
    }

    fn controller(store: MemoryStore) -> IntroController<MemoryStore> {
        IntroController::new(store, IntroSettings::default())
    }

    #[test]
    fn test_marker_present_settles_synchronously() {
        let mut c = controller(MemoryStore::with_entry(DEFAULT_STORAGE_KEY, "1"));
        assert_eq!(c.mount(), MountOutcome::Settled);
        assert!(c.state().initialized());
        assert!(c.state().skip_intro);
        assert_eq!(c.store().writes(), 0);
    }

    #[test]
    fn test_marker_absent_waits_for_reveal() {
        let mut c = controller(MemoryStore::default());
        assert_eq!(
            c.mount(),
            MountOutcome::ScheduleReveal(Duration::from_millis(1000))
        );
        assert!(!c.state().initialized());
        assert!(!c.state().skip_intro);
        assert_eq!(c.state().phase, IntroPhase::AnimatingIntro);

        assert!(c.reveal());
        assert!(c.state().initialized());
        assert!(!c.state().skip_intro);
        assert_eq!(
            c.store().get(DEFAULT_STORAGE_KEY).unwrap().as_deref(),
            Some(DEFAULT_SEEN_MARKER)
        );
    }

    #[test]
    fn test_second_reveal_is_noop() {
        let mut c = controller(MemoryStore::default());
        c.mount();
        assert!(c.reveal());
        assert!(!c.reveal());
        assert_eq!(c.store().writes(), 1);
    }

    #[test]
    fn test_repeated_visits_write_once() {
        let mut first = controller(MemoryStore::default());
        first.mount();
        first.reveal();
        let store = first.store().clone();

        let mut second = controller(store);
        assert_eq!(second.mount(), MountOutcome::Settled);
        assert_eq!(second.store().writes(), 1);
        assert_eq!(second.store().len(), 1);
    }

    #[test]
    fn test_unmount_before_timer_suppresses_update_and_write() {
        let mut c = controller(MemoryStore::default());
        c.mount();
        c.unmount();
        assert!(!c.reveal());
        assert!(!c.state().initialized());
        assert_eq!(c.store().writes(), 0);
        assert!(c.store().is_empty());
    }

    #[test]
    fn test_unavailable_storage_still_reveals() {
        let mut c = IntroController::new(UnavailableStore, IntroSettings::default());
        assert!(matches!(c.mount(), MountOutcome::ScheduleReveal(_)));
        assert!(c.reveal());
        assert!(c.state().initialized());
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let mut c = IntroController::new(ReadOnlyStore::default(), IntroSettings::default());
        c.mount();
        assert!(c.reveal());
        assert!(c.state().initialized());
        assert_eq!(c.store().attempted_writes, 1);
    }

    #[test]
    fn test_remount_does_not_reread() {
        let mut c = controller(MemoryStore::default());
        c.mount();
        c.reveal();
        assert_eq!(c.mount(), MountOutcome::Settled);
        assert!(!c.state().skip_intro);
    }

    #[test]
    fn test_reveal_before_mount_is_noop() {
        let mut c = controller(MemoryStore::default());
        assert!(!c.reveal());
        assert_eq!(c.state().phase, IntroPhase::Loading);
    }

    #[test]
    fn test_custom_settings() {
        let settings = IntroSettings {
            storage_key: "custom".to_string(),
            seen_marker: "yes".to_string(),
            delay: Duration::from_millis(250),
        };
        let mut c = IntroController::new(MemoryStore::default(), settings);
        assert_eq!(
            c.mount(),
            MountOutcome::ScheduleReveal(Duration::from_millis(250))
        );
        c.reveal();
        assert_eq!(c.store().get("custom").unwrap().as_deref(), Some("yes"));
    }
}
