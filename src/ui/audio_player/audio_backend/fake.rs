use std::path::{Path, PathBuf};

use super::trait_def::AudioBackend;

/// In-memory backend for state-machine tests. Records the loaded path and can
/// be told to reject every load, standing in for undecodable audio.
#[derive(Debug, Default)]
pub struct FakeAudioBackend {
    pub fail_loads: bool,
    pub loaded: Option<PathBuf>,
    pub is_playing: bool,
}

impl FakeAudioBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejecting_loads() -> Self {
        Self {
            fail_loads: true,
            ..Self::default()
        }
    }
}

impl AudioBackend for FakeAudioBackend {
    fn init(&mut self) -> Result<(), String> {
        Ok(())
    }

    fn load_paused(&mut self, path: &Path) -> Result<(), String> {
        self.loaded = None;
        self.is_playing = false;
        if self.fail_loads {
            return Err("Failed to load audio file: unsupported data".to_string());
        }
        self.loaded = Some(path.to_path_buf());
        Ok(())
    }

    fn play(&mut self) -> Result<(), String> {
        if self.loaded.is_none() {
            return Err("No audio loaded".to_string());
        }
        self.is_playing = true;
        Ok(())
    }

    fn pause(&mut self) -> Result<(), String> {
        if self.loaded.is_none() {
            return Err("No audio playing".to_string());
        }
        self.is_playing = false;
        Ok(())
    }

    fn is_playing(&self) -> bool {
        self.is_playing
    }
}
