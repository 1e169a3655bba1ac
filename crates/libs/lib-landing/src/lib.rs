//! # ELICIT FEST Landing Core
//!
//! Framework-free logic behind the landing page. The Leptos front end in
//! `landing-web` owns the DOM; everything stateful lives here so it can be
//! exercised by native unit tests.
//!
//! ## Structure
//!
//! - **[`intro`]**: first-visit intro controller (`Loading -> SkippingIntro | AnimatingIntro -> Settled`)
//! - **[`store`]**: key-value store abstraction for the "seen intro" marker
//! - **[`pointer`]**: pointer tracking for the background scene
//! - **[`overlay`]**: terminal overlay and mobile drawer flags
//! - **[`nav`]**: navigation destinations and legacy callback slots
//! - **[`audio`]**: fire-and-forget sound playback
//! - **[`hero`]**: what the hero section shows in each intro state
//! - **[`countdown`]**: time remaining until the event starts
//! - **[`sponsors`]**: sponsor logo ring geometry
//! - **[`rain`]**: digital rain column layout
//! - **[`config`]**: page configuration with serde defaults
//! - **[`error`]**: error types
//!
//! ## Usage
//!
//! ```rust
//! use lib_landing::intro::{IntroController, IntroSettings, MountOutcome};
//! use lib_landing::store::MemoryStore;
//!
//! let mut controller = IntroController::new(MemoryStore::default(), IntroSettings::default());
//! match controller.mount() {
//!     MountOutcome::ScheduleReveal(delay) => {
//!         // host schedules a one-shot timer for `delay`, then:
//!         assert!(controller.reveal());
//!     }
//!     MountOutcome::Settled => {}
//! }
//! assert!(controller.state().initialized());
//! ```

pub mod audio;
pub mod config;
pub mod countdown;
pub mod error;
pub mod hero;
pub mod intro;
pub mod nav;
pub mod overlay;
pub mod pointer;
pub mod rain;
pub mod sponsors;
pub mod store;

pub use config::LandingConfig;
pub use error::{ConfigError, SoundError, StoreError};
