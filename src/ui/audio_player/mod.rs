// Playback module components
mod audio_backend;
mod audio_info;
mod session;

// Re-export the main components
pub use audio_info::{format_duration, probe_duration};
pub use session::{AudioSession, PlaybackState};

#[cfg(test)]
pub(crate) use audio_backend::fake::FakeAudioBackend;
