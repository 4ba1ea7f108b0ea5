#![warn(clippy::all, rust_2018_idioms)]
//! Minimal single-window audiobook player: pick an audio file, copy it into
//! the application cache, play or pause it.

mod app;
mod importer;
mod ui;

pub use app::AudiobookApp;
pub use importer::{ImportError, resolve_cache_dir};
