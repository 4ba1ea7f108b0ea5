// UI component modules
mod player_panel;

pub mod audio_player;

pub use player_panel::{PanelAction, PlayerPanel};
