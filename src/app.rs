use eframe::egui;

use crate::config::AppConfig;
use crate::state::AppState;
use crate::ui::{panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct HeadlinePulseApp {
    pub state: AppState,
}

impl HeadlinePulseApp {
    pub fn new(config: AppConfig) -> Self {
        Self {
            state: AppState::new(config),
        }
    }
}

impl eframe::App for HeadlinePulseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui);
        });

        // ---- Left side panel: request form ----
        egui::SidePanel::left("request_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::request_panel(ui, &mut self.state);
            });

        // ---- Right side panel: scored headlines ----
        egui::SidePanel::right("headline_panel")
            .default_width(360.0)
            .resizable(true)
            .show(ctx, |ui| {
                table::headline_table(ui, &self.state);
            });

        // ---- Central panel: verdict and chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::result_view(ui, &self.state);
        });
    }
}
