use std::path::Path;

/// Audio playback backend trait
/// Defines the interface for the platform audio playback implementation
pub trait AudioBackend: std::fmt::Debug {
    /// Initialize the audio backend
    fn init(&mut self) -> Result<(), String>;

    /// Construct a decodable sound from a file path and hold it pre-buffered
    /// but paused, replacing any previously loaded sound
    fn load_paused(&mut self, path: &Path) -> Result<(), String>;

    /// Resume playback of the loaded sound
    fn play(&mut self) -> Result<(), String>;

    /// Pause audio playback
    fn pause(&mut self) -> Result<(), String>;

    /// Check if audio is currently playing
    fn is_playing(&self) -> bool;
}
