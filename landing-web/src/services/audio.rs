//! `HTMLAudioElement` sound player

use lib_landing::audio::SoundPlayer;
use lib_landing::SoundError;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlAudioPlayer;

impl SoundPlayer for HtmlAudioPlayer {
    fn play(&self, path: &str) -> Result<(), SoundError> {
        let audio = HtmlAudioElement::new_with_src(path)
            .map_err(|e| SoundError::Unsupported(format!("{:?}", e)))?;
        let promise = audio
            .play()
            .map_err(|e| SoundError::Rejected(format!("{:?}", e)))?;

        // Autoplay policies reject asynchronously
        leptos::task::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::debug!("click sound rejected: {:?}", e);
            }
        });
        Ok(())
    }
}
