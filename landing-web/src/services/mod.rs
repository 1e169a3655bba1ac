//! Browser-backed implementations of the core traits

pub mod audio;
pub mod storage;

pub use audio::HtmlAudioPlayer;
pub use storage::BrowserStore;
