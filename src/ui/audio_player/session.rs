use std::path::Path;

use super::audio_backend::{AudioBackend, PlatformAudioBackend};

/// Playback session states. A fresh session (or one whose last prepare
/// failed) is `Unprepared`; a successful prepare lands in `Paused` and
/// toggles flip between `Paused` and `Playing`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Unprepared,
    Paused,
    Playing,
}

impl PlaybackState {
    pub fn is_prepared(self) -> bool {
        !matches!(self, Self::Unprepared)
    }
}

/// Owns the audio backend and applies prepare/play/pause effects to it.
///
/// At most one sound is loaded at a time; preparing a new file discards the
/// previous handle first, so the session always refers to the most recently
/// cached file.
pub struct AudioSession {
    backend: Option<Box<dyn AudioBackend>>,
}

impl Default for AudioSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioSession {
    /// Create a session backed by the platform audio backend
    pub fn new() -> Self {
        Self::from_backend(Box::new(PlatformAudioBackend::new()))
    }

    fn from_backend(mut backend: Box<dyn AudioBackend>) -> Self {
        match backend.init() {
            Ok(()) => {
                log::info!("Audio backend initialized successfully");
                Self {
                    backend: Some(backend),
                }
            }
            Err(e) => {
                log::error!("Failed to initialize audio backend: {e}");
                Self { backend: None }
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn with_backend(backend: Box<dyn AudioBackend>) -> Self {
        Self::from_backend(backend)
    }

    /// Construct a playback handle from the cached file, pre-buffered and
    /// paused so the first toggle starts with minimal latency.
    ///
    /// # Errors
    /// Backend unavailable, or the file could not be decoded; in both cases
    /// no handle is kept and the session reports not playing.
    pub fn prepare(&mut self, path: &Path) -> Result<(), String> {
        let backend = self
            .backend
            .as_mut()
            .ok_or_else(|| "Audio backend not available".to_string())?;
        backend.load_paused(path)
    }

    /// Resume the prepared sound
    ///
    /// # Errors
    /// Backend unavailable or no sound loaded.
    pub fn play(&mut self) -> Result<(), String> {
        let backend = self
            .backend
            .as_mut()
            .ok_or_else(|| "Audio backend not available".to_string())?;
        backend.play()
    }

    /// Pause the playing sound
    ///
    /// # Errors
    /// Backend unavailable or no sound loaded.
    pub fn pause(&mut self) -> Result<(), String> {
        let backend = self
            .backend
            .as_mut()
            .ok_or_else(|| "Audio backend not available".to_string())?;
        backend.pause()
    }

    pub fn is_playing(&self) -> bool {
        self.backend.as_ref().is_some_and(|b| b.is_playing())
    }
}

impl std::fmt::Debug for AudioSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioSession")
            .field("backend", &self.backend.as_ref().map(|_| "<audio backend>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::super::audio_backend::fake::FakeAudioBackend;
    use super::{AudioSession, PlaybackState};

    #[test]
    fn prepare_loads_the_given_path_without_playing() {
        let mut session = AudioSession::with_backend(Box::new(FakeAudioBackend::new()));

        session.prepare(Path::new("/cache/lecture1.mp3")).unwrap();

        assert!(!session.is_playing());
        session.play().unwrap();
        assert!(session.is_playing());
    }

    #[test]
    fn prepare_failure_leaves_no_handle() {
        let mut session = AudioSession::with_backend(Box::new(FakeAudioBackend::rejecting_loads()));

        assert!(session.prepare(Path::new("/cache/garbage.mp3")).is_err());
        assert!(!session.is_playing());
        assert!(session.play().is_err());
    }

    #[test]
    fn preparing_a_new_file_replaces_the_previous_handle() {
        let mut session = AudioSession::with_backend(Box::new(FakeAudioBackend::new()));

        session.prepare(Path::new("/cache/lecture1.mp3")).unwrap();
        session.play().unwrap();

        session.prepare(Path::new("/cache/lecture2.mp3")).unwrap();
        assert!(!session.is_playing());
    }

    #[test]
    fn play_without_a_prepared_sound_is_an_error() {
        let mut session = AudioSession::with_backend(Box::new(FakeAudioBackend::new()));
        assert!(session.play().is_err());
        assert!(session.pause().is_err());
    }

    #[test]
    fn default_playback_state_is_unprepared() {
        assert_eq!(PlaybackState::default(), PlaybackState::Unprepared);
        assert!(!PlaybackState::Unprepared.is_prepared());
        assert!(PlaybackState::Paused.is_prepared());
        assert!(PlaybackState::Playing.is_prepared());
    }
}
