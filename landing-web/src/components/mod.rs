//! UI Components

pub mod countdown_timer;
pub mod cyberpunk_scene;
pub mod digital_rain;
pub mod glitch_text;
pub mod icons;
pub mod nav;
pub mod social_links;
pub mod sponsors_wheel;
pub mod terminal_interface;

pub use countdown_timer::CountdownTimer;
pub use cyberpunk_scene::CyberpunkScene;
pub use digital_rain::DigitalRain;
pub use glitch_text::GlitchText;
pub use icons::NavIconSvg;
pub use nav::{DesktopNav, HamburgerButton, MobileDrawer};
pub use social_links::SocialLinks;
pub use sponsors_wheel::SponsorsWheel;
pub use terminal_interface::TerminalInterface;
