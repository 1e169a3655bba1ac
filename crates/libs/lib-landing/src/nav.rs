//! # Navigation Surface
//!
//! Six destinations rendered twice: inline tiles on desktop and inside the
//! mobile drawer. The tiles mount once the intro settles and the drawer mounts
//! only while open; the hamburger trigger is the one piece that is always
//! mounted. Stylesheet media queries choose between tiles and hamburger by width.
//!
//! Each entry is a plain link to [`Destination::route`], so the router does the
//! navigating. [`activate`] only covers the side effects of the click.
//!
//! Older callers still pass click callbacks instead of relying on routes. Those
//! are kept as [`LegacyCallbacks`], one optional slot per destination that had
//! a callback, looked up through [`Destination::legacy_slot`].
//!
//! ```rust
//! use lib_landing::audio::SilentPlayer;
//! use lib_landing::nav::{activate, Destination, LegacyCallbacks, LegacySlot, NavSurface};
//! use lib_landing::overlay::OverlayState;
//!
//! let callbacks = LegacyCallbacks::default().with(LegacySlot::Speakers, || println!("speakers"));
//! let mut overlay = OverlayState { drawer_open: true, ..Default::default() };
//! activate(
//!     Destination::Speakers,
//!     NavSurface::Drawer,
//!     &SilentPlayer,
//!     "/audio/click.mp3",
//!     &callbacks,
//!     &mut overlay,
//! );
//! assert!(!overlay.drawer_open);
//! ```

use std::fmt;

use crate::audio::{play_best_effort, SoundPlayer};
use crate::overlay::OverlayState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    Events,
    Speakers,
    About,
    Contact,
    Sponsors,
    Register,
}

/// Icon drawn next to a destination label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Calendar,
    Users,
    Info,
    Phone,
    Zap,
    Monitor,
}

/// Accent colour of a destination tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DestinationStyle {
    /// CSS class suffix, e.g. `cyan` for `accent-cyan`.
    pub accent: &'static str,
    /// Glow colour used for the tile shadow.
    pub glow: &'static str,
}

impl Destination {
    /// Display order.
    pub const ALL: [Destination; 6] = [
        Destination::Events,
        Destination::Speakers,
        Destination::About,
        Destination::Contact,
        Destination::Sponsors,
        Destination::Register,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Destination::Events => "EVENTS",
            Destination::Speakers => "SPEAKERS",
            Destination::About => "ABOUT",
            Destination::Contact => "CONTACT",
            Destination::Sponsors => "SPONSORS",
            Destination::Register => "REGISTER",
        }
    }

    pub fn route(&self) -> &'static str {
        match self {
            Destination::Events => "/events",
            Destination::Speakers => "/speakers",
            Destination::About => "/about",
            Destination::Contact => "/contact",
            Destination::Sponsors => "/sponsors",
            Destination::Register => "/register",
        }
    }

    pub fn icon(&self) -> NavIcon {
        match self {
            Destination::Events => NavIcon::Calendar,
            Destination::Speakers => NavIcon::Users,
            Destination::About => NavIcon::Info,
            Destination::Contact => NavIcon::Phone,
            Destination::Sponsors => NavIcon::Zap,
            Destination::Register => NavIcon::Monitor,
        }
    }

    pub fn style(&self) -> DestinationStyle {
        let (accent, glow) = match self {
            Destination::Events => ("cyan", "#00ffff"),
            Destination::Speakers => ("lime", "#00ff41"),
            Destination::About => ("purple", "#8b5cf6"),
            Destination::Contact => ("yellow", "#fbbf24"),
            Destination::Sponsors => ("pink", "#f472b6"),
            Destination::Register => ("red", "#ff0040"),
        };
        DestinationStyle { accent, glow }
    }

    pub fn legacy_slot(&self) -> Option<LegacySlot> {
        match self {
            Destination::Events => Some(LegacySlot::Events),
            Destination::Speakers => Some(LegacySlot::Speakers),
            Destination::About => Some(LegacySlot::About),
            Destination::Sponsors => Some(LegacySlot::Sponsors),
            Destination::Contact | Destination::Register => None,
        }
    }

    /// Destination served at `path`, if any.
    pub fn from_route(path: &str) -> Option<Destination> {
        let path = path.trim_end_matches('/');
        Destination::ALL.into_iter().find(|d| d.route() == path)
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSurface {
    /// Inline tiles, shown above 1024px once the intro settles.
    Desktop,
    /// Hamburger drawer, reachable at 1024px and below.
    Drawer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegacySlot {
    Events,
    Speakers,
    About,
    Sponsors,
}

type LegacyCallback = Box<dyn Fn() + Send + Sync>;

/// Optional zero-argument callbacks kept for callers that predate routing.
#[derive(Default)]
pub struct LegacyCallbacks {
    events: Option<LegacyCallback>,
    speakers: Option<LegacyCallback>,
    about: Option<LegacyCallback>,
    sponsors: Option<LegacyCallback>,
}

impl LegacyCallbacks {
    pub fn with(mut self, slot: LegacySlot, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.set(slot, callback);
        self
    }

    pub fn set(&mut self, slot: LegacySlot, callback: impl Fn() + Send + Sync + 'static) {
        *self.slot_mut(slot) = Some(Box::new(callback));
    }

    pub fn is_set(&self, slot: LegacySlot) -> bool {
        self.slot(slot).is_some()
    }

    /// Invoke the callback bound to `destination`. Returns whether one ran.
    pub fn dispatch(&self, destination: Destination) -> bool {
        match destination.legacy_slot().and_then(|slot| self.slot(slot)) {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    fn slot(&self, slot: LegacySlot) -> Option<&LegacyCallback> {
        match slot {
            LegacySlot::Events => self.events.as_ref(),
            LegacySlot::Speakers => self.speakers.as_ref(),
            LegacySlot::About => self.about.as_ref(),
            LegacySlot::Sponsors => self.sponsors.as_ref(),
        }
    }

    fn slot_mut(&mut self, slot: LegacySlot) -> &mut Option<LegacyCallback> {
        match slot {
            LegacySlot::Events => &mut self.events,
            LegacySlot::Speakers => &mut self.speakers,
            LegacySlot::About => &mut self.about,
            LegacySlot::Sponsors => &mut self.sponsors,
        }
    }
}

impl fmt::Debug for LegacyCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LegacyCallbacks")
            .field("events", &self.events.is_some())
            .field("speakers", &self.speakers.is_some())
            .field("about", &self.about.is_some())
            .field("sponsors", &self.sponsors.is_some())
            .finish()
    }
}

/// Side effects of a click on a destination link.
///
/// Plays the click sound, runs the legacy callback if one is bound and closes
/// the drawer when the click came from it. The link's `href` does the navigation.
pub fn activate<P: SoundPlayer + ?Sized>(
    destination: Destination,
    surface: NavSurface,
    player: &P,
    sound_path: &str,
    callbacks: &LegacyCallbacks,
    overlay: &mut OverlayState,
) {
    play_best_effort(player, sound_path);
    if surface == NavSurface::Drawer {
        overlay.close_drawer();
    }
    if callbacks.dispatch(destination) {
        log::debug!("legacy callback ran for {}", destination);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SoundError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Default)]
    struct CountingPlayer {
        plays: AtomicUsize,
    }

    impl SoundPlayer for CountingPlayer {
        fn play(&self, _path: &str) -> Result<(), SoundError> {
            self.plays.fetch_add(1, Ordering::SeqCst);
            Err(SoundError::Rejected("autoplay".to_string()))
        }
    }

    fn counter() -> (Arc<AtomicUsize>, impl Fn() + Send + Sync + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        (count, move || {
            c.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_destination_table() {
        let routes: Vec<_> = Destination::ALL.iter().map(|d| d.route()).collect();
        assert_eq!(
            routes,
            vec!["/events", "/speakers", "/about", "/contact", "/sponsors", "/register"]
        );
        assert_eq!(Destination::Speakers.label(), "SPEAKERS");
        assert_eq!(Destination::Register.icon(), NavIcon::Monitor);
        assert_eq!(Destination::Sponsors.style().glow, "#f472b6");
    }

    #[test]
    fn test_from_route() {
        assert_eq!(Destination::from_route("/about"), Some(Destination::About));
        assert_eq!(Destination::from_route("/about/"), Some(Destination::About));
        assert_eq!(Destination::from_route("/nowhere"), None);
    }

    #[test]
    fn test_desktop_speakers_click() {
        let (count, callback) = counter();
        let callbacks = LegacyCallbacks::default().with(LegacySlot::Speakers, callback);
        let player = CountingPlayer::default();
        let mut overlay = OverlayState::default();

        activate(
            Destination::Speakers,
            NavSurface::Desktop,
            &player,
            "/audio/click.mp3",
            &callbacks,
            &mut overlay,
        );

        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(player.plays.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_drawer_click_closes_drawer() {
        let player = CountingPlayer::default();
        let mut overlay = OverlayState::default();
        overlay.toggle_drawer();
        assert!(overlay.drawer_open);

        activate(
            Destination::Contact,
            NavSurface::Drawer,
            &player,
            "/audio/click.mp3",
            &LegacyCallbacks::default(),
            &mut overlay,
        );

        assert!(!overlay.drawer_open);
    }

    #[test]
    fn test_desktop_click_leaves_drawer_alone() {
        let mut overlay = OverlayState {
            drawer_open: true,
            ..Default::default()
        };
        activate(
            Destination::Events,
            NavSurface::Desktop,
            &CountingPlayer::default(),
            "/audio/click.mp3",
            &LegacyCallbacks::default(),
            &mut overlay,
        );
        assert!(overlay.drawer_open);
    }

    #[test]
    fn test_only_matching_slot_runs() {
        let (about, about_cb) = counter();
        let (sponsors, sponsors_cb) = counter();
        let callbacks = LegacyCallbacks::default()
            .with(LegacySlot::About, about_cb)
            .with(LegacySlot::Sponsors, sponsors_cb);

        assert!(callbacks.dispatch(Destination::Sponsors));
        assert!(!callbacks.dispatch(Destination::Register));
        assert!(!callbacks.dispatch(Destination::Events));
        assert_eq!(about.load(Ordering::SeqCst), 0);
        assert_eq!(sponsors.load(Ordering::SeqCst), 1);
        assert!(callbacks.is_set(LegacySlot::About));
        assert!(!callbacks.is_set(LegacySlot::Events));
    }
}
