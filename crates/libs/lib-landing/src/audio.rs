//! Fire-and-forget sound playback

use crate::error::SoundError;

pub const CLICK_SOUND: &str = "/audio/click.mp3";

pub trait SoundPlayer {
    fn play(&self, path: &str) -> Result<(), SoundError>;
}

/// Plays `path`, discarding any failure. Returns whether playback started.
pub fn play_best_effort<P: SoundPlayer + ?Sized>(player: &P, path: &str) -> bool {
    match player.play(path) {
        Ok(()) => true,
        Err(e) => {
            log::debug!("sound {} not played: {}", path, e);
            false
        }
    }
}

/// Player that never makes a sound. Used where no audio backend exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentPlayer;

impl SoundPlayer for SilentPlayer {
    fn play(&self, _path: &str) -> Result<(), SoundError> {
        Ok(())
    }
}
