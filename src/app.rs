use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::importer;
use crate::ui::audio_player::{AudioSession, PlaybackState, probe_duration};
use crate::ui::{PanelAction, PlayerPanel};

/// The most recently imported audiobook
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedAudiobook {
    /// Base name shown in the selected-file line
    pub display_name: String,
    /// Copy owned by the application cache directory
    pub cached_path: PathBuf,
    /// Probed duration, when the format supports it
    pub duration: Option<Duration>,
}

/// Immutable snapshot of everything the screen renders.
///
/// Replaced wholesale on each transition through [`AudiobookApp::apply`],
/// never mutated field by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub selected: Option<SelectedAudiobook>,
    pub playback: PlaybackState,
}

impl ViewState {
    fn with_playback(&self, playback: PlaybackState) -> Self {
        Self {
            selected: self.selected.clone(),
            playback,
        }
    }
}

/// Discrete user-driven events; the single update channel into the view state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The picker completed with a file
    FileChosen(PathBuf),
    /// The picker was dismissed without a choice
    SelectionCancelled,
    /// The play/pause control was pressed
    PlaybackToggled,
}

/// The import-and-play controller: one screen, one playback session
pub struct AudiobookApp {
    cache_dir: PathBuf,
    view: ViewState,
    session: AudioSession,
}

impl AudiobookApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, cache_dir: PathBuf) -> Self {
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        Self {
            cache_dir,
            view: ViewState::default(),
            session: AudioSession::new(),
        }
    }

    #[cfg(test)]
    fn with_session(cache_dir: PathBuf, session: AudioSession) -> Self {
        Self {
            cache_dir,
            view: ViewState::default(),
            session,
        }
    }

    /// Open the audio file picker; `None` from the dialog means the user
    /// cancelled, which is a silent no-op rather than an error.
    fn select_file(&mut self) {
        let picked = rfd::FileDialog::new()
            .set_title("Select Audiobook")
            .add_filter("Audio Files", &["mp3", "m4a", "m4b", "wav", "flac", "ogg", "aac"])
            .pick_file();

        match picked {
            Some(path) => self.apply(AppEvent::FileChosen(path)),
            None => self.apply(AppEvent::SelectionCancelled),
        }
    }

    /// The single state-update path. On success the view state is replaced
    /// wholesale; on failure it is left exactly as it was.
    fn apply(&mut self, event: AppEvent) {
        match event {
            AppEvent::FileChosen(source) => self.import_and_prepare(&source),
            AppEvent::SelectionCancelled => log::debug!("File selection cancelled"),
            AppEvent::PlaybackToggled => self.toggle_playback(),
        }
    }

    fn import_and_prepare(&mut self, source: &Path) {
        let cached = match importer::import_to_cache(source, &self.cache_dir) {
            Ok(path) => path,
            Err(e) => {
                // Previous selection and playback session stay as they were.
                log::error!("{e}");
                return;
            }
        };

        let display_name = cached
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let duration = probe_duration(&cached);
        let selected = SelectedAudiobook {
            display_name,
            cached_path: cached,
            duration,
        };

        // A new import always rebinds the session. A decode failure keeps the
        // selection but leaves the session unprepared, so Play stays disabled.
        let playback = match self.session.prepare(&selected.cached_path) {
            Ok(()) => PlaybackState::Paused,
            Err(e) => {
                log::error!("Error loading audio file: {e}");
                PlaybackState::Unprepared
            }
        };

        self.view = ViewState {
            selected: Some(selected),
            playback,
        };
    }

    fn toggle_playback(&mut self) {
        match self.view.playback {
            PlaybackState::Unprepared => {
                log::debug!("Playback toggle ignored: no prepared audio");
            }
            PlaybackState::Paused => match self.session.play() {
                Ok(()) => self.view = self.view.with_playback(PlaybackState::Playing),
                Err(e) => log::error!("Failed to resume playback: {e}"),
            },
            PlaybackState::Playing => match self.session.pause() {
                Ok(()) => self.view = self.view.with_playback(PlaybackState::Paused),
                Err(e) => log::error!("Failed to pause playback: {e}"),
            },
        }
    }
}

impl eframe::App for AudiobookApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        match PlayerPanel::show(ctx, &self.view) {
            PanelAction::SelectFile => self.select_file(),
            PanelAction::TogglePlayback => self.apply(AppEvent::PlaybackToggled),
            PanelAction::None => {}
        }
    }
}
