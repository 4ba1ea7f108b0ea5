#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    // Nothing in the import workflow can run without a writable cache
    // directory, so resolution failure aborts before the window opens.
    let cache_dir = match audiobook_player::resolve_cache_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Fatal: {e}");
            std::process::exit(1);
        }
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 240.0])
            .with_min_inner_size([360.0, 220.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Audiobook Player",
        native_options,
        Box::new(move |cc| Ok(Box::new(audiobook_player::AudiobookApp::new(cc, cache_dir)))),
    )
}
