//! # Sponsor Wheel
//!
//! A ring of sponsor logos floating above the background scene. The ring is
//! drawn with CSS 3D transforms; this module computes where each logo sits and
//! how fast the ring turns.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

pub const DEFAULT_LOGOS: [&str; 10] = [
    "/sponsors/cisco.png",
    "/sponsors/coding_blocks.jpg",
    "/sponsors/zebronics.jpg",
    "/sponsors/InterviewCake.png",
    "/sponsors/GeeksforGeeks.svg.png",
    "/sponsors/Lenovo.png",
    "/sponsors/ONGC_Logo.svg.png",
    "/sponsors/snapchat.webp",
    "/logos/3.png",
    "/logos/4.png",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SponsorWheel {
    /// Logo image paths in ring order.
    pub logos: Vec<String>,
    /// Ring radius in scene units.
    pub radius: f64,
    /// Angular speed in radians per second.
    pub speed: f64,
    /// Vertical offset in scene units.
    pub y: f64,
    pub brightness: f64,
}

impl Default for SponsorWheel {
    fn default() -> Self {
        Self {
            logos: DEFAULT_LOGOS.iter().map(|s| s.to_string()).collect(),
            radius: 8.7,
            speed: 0.1,
            y: 3.9,
            brightness: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogoPlacement {
    pub path: String,
    pub angle_deg: f64,
}

impl SponsorWheel {
    /// Logos spread evenly around the ring, first logo at 0°.
    pub fn placements(&self) -> Vec<LogoPlacement> {
        let step = if self.logos.is_empty() {
            0.0
        } else {
            360.0 / self.logos.len() as f64
        };
        self.logos
            .iter()
            .enumerate()
            .map(|(i, path)| LogoPlacement {
                path: path.clone(),
                angle_deg: i as f64 * step,
            })
            .collect()
    }

    /// Seconds for one full turn, `None` when the ring does not rotate.
    pub fn rotation_period_secs(&self) -> Option<f64> {
        if self.speed > 0.0 && self.speed.is_finite() {
            Some(2.0 * PI / self.speed)
        } else {
            None
        }
    }

    pub fn css_radius_px(&self, px_per_unit: f64) -> f64 {
        self.radius * px_per_unit
    }

    pub fn css_offset_y_px(&self, px_per_unit: f64) -> f64 {
        -self.y * px_per_unit
    }

    /// CSS `brightness()` filter value. Scene brightness 0 maps to a dim but visible logo.
    pub fn css_brightness(&self) -> f64 {
        (0.5 + self.brightness).clamp(0.0, 2.0)
    }
}
