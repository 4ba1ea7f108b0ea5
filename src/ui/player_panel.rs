use egui::{Button, Color32, Context, RichText};
use egui_phosphor::regular;

use super::audio_player::{PlaybackState, format_duration};
use crate::app::ViewState;

/// Action returned by the player panel to the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    /// No control was pressed this frame
    None,
    /// Open the file picker
    SelectFile,
    /// Flip play/pause
    TogglePlayback,
}

/// The single player screen: title, selected-file line and two controls
pub struct PlayerPanel;

impl PlayerPanel {
    /// Render the screen and report which control was pressed
    pub fn show(ctx: &Context, view: &ViewState) -> PanelAction {
        let mut action = PanelAction::None;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(16.0);
                ui.heading(RichText::new("Audiobook Player").strong());
                ui.add_space(12.0);

                match &view.selected {
                    Some(selected) => {
                        let label = match selected.duration {
                            Some(duration) => format!(
                                "Selected: {} ({})",
                                selected.display_name,
                                format_duration(duration)
                            ),
                            None => format!("Selected: {}", selected.display_name),
                        };
                        ui.label(RichText::new(label).strong());
                    }
                    None => {
                        ui.label(
                            RichText::new("No audiobook selected").color(Color32::from_gray(150)),
                        );
                    }
                }

                ui.add_space(16.0);
                ui.horizontal(|ui| {
                    let select_btn = Button::new(format!("{} Select Audiobook", regular::FOLDER_OPEN));
                    if ui.add(select_btn).clicked() {
                        action = PanelAction::SelectFile;
                    }

                    let (icon, text) = match view.playback {
                        PlaybackState::Playing => (regular::PAUSE, "Pause"),
                        PlaybackState::Paused | PlaybackState::Unprepared => (regular::PLAY, "Play"),
                    };
                    let play_btn = Button::new(format!("{icon} {text}"));
                    if ui
                        .add_enabled(view.playback.is_prepared(), play_btn)
                        .clicked()
                    {
                        action = PanelAction::TogglePlayback;
                    }
                });
            });
        });

        action
    }
}
