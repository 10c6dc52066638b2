mod analysis;
mod app;
mod chart;
mod color;
mod config;
mod sentiment;
mod state;
mod ui;

use app::HeadlinePulseApp;
use config::AppConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = AppConfig::load();
    sentiment::ensure_loaded();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Headline Pulse – Financial News Sentiment",
        options,
        Box::new(move |_cc| Ok(Box::new(HeadlinePulseApp::new(config)))),
    )
}
