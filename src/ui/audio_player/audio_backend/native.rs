use std::path::Path;

use kira::{
    AudioManager,
    AudioManagerSettings,
    DefaultBackend,
    Tween,
    sound::FromFileError,
    sound::streaming::{StreamingSoundData, StreamingSoundHandle},
};

use super::trait_def::AudioBackend;

/// Native audio backend implementation using kira
pub struct NativeAudioBackend {
    /// Audio manager for playback
    manager: Option<AudioManager<DefaultBackend>>,
    /// Handle to the currently loaded sound
    sound_handle: Option<StreamingSoundHandle<FromFileError>>,
    /// Is currently playing
    is_playing: bool,
    /// Whether backend initialization succeeded
    initialized: bool,
}

impl NativeAudioBackend {
    /// Create a new native audio backend
    pub fn new() -> Self {
        Self {
            manager: None,
            sound_handle: None,
            is_playing: false,
            initialized: false,
        }
    }
}

impl AudioBackend for NativeAudioBackend {
    fn init(&mut self) -> Result<(), String> {
        match AudioManager::<DefaultBackend>::new(AudioManagerSettings::default()) {
            Ok(manager) => {
                self.manager = Some(manager);
                self.initialized = true;
                Ok(())
            }
            Err(e) => {
                self.initialized = false;
                Err(format!("Failed to initialize audio manager: {e}"))
            }
        }
    }

    fn load_paused(&mut self, path: &Path) -> Result<(), String> {
        if !self.initialized {
            return Err("Audio backend not initialized".to_string());
        }

        let manager = self
            .manager
            .as_mut()
            .ok_or_else(|| "Audio manager not available".to_string())?;

        if let Some(mut handle) = self.sound_handle.take() {
            handle.stop(Tween::default());
        }
        self.is_playing = false;

        let sound_data = StreamingSoundData::from_file(path)
            .map_err(|e| format!("Failed to load audio file: {e}"))?;

        let mut handle = manager
            .play(sound_data)
            .map_err(|e| format!("Failed to start audio playback: {e}"))?;

        // Pre-buffered but silent until the first toggle.
        handle.pause(Tween::default());
        self.sound_handle = Some(handle);
        Ok(())
    }

    fn play(&mut self) -> Result<(), String> {
        if let Some(handle) = &mut self.sound_handle {
            handle.resume(Tween::default());
            self.is_playing = true;
            Ok(())
        } else {
            Err("No audio loaded".to_string())
        }
    }

    fn pause(&mut self) -> Result<(), String> {
        if let Some(handle) = &mut self.sound_handle {
            handle.pause(Tween::default());
            self.is_playing = false;
            Ok(())
        } else {
            Err("No audio playing".to_string())
        }
    }

    fn is_playing(&self) -> bool {
        self.is_playing
    }
}

impl Default for NativeAudioBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for NativeAudioBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeAudioBackend")
            .field("is_playing", &self.is_playing)
            .field("initialized", &self.initialized)
            .field("manager", &self.manager.as_ref().map(|_| "<audio manager>"))
            .field(
                "sound_handle",
                &self.sound_handle.as_ref().map(|_| "<sound handle>"),
            )
            .finish()
    }
}
