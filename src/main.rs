// main.rs - Conway's Game of Life on a double-buffered grid
//
// Keys: s pauses, r reseeds, q quits. Closing the window exits immediately.

use anyhow::anyhow;
use eframe::egui;

mod app;
mod config;
mod grid;
mod input;
mod render;
mod rules;
mod sim;

use app::LifeApp;
use config::Config;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::default();
    // Invalid dimensions abort here, before any frame is drawn.
    let app = LifeApp::new(&config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.width as f32, config.height as f32])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "Game of Life",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|err| anyhow!("display failed: {err}"))
}
