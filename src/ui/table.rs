use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::{diverging_color, legend_stops};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Right side panel – scored headlines
// ---------------------------------------------------------------------------

fn score_chip(score: f64) -> RichText {
    RichText::new(format!("{score:+.4}"))
        .monospace()
        .color(Color32::BLACK)
        .background_color(diverging_color(score))
}

/// Render the colour legend and the table of headlines that carried a signal.
pub fn headline_table(ui: &mut Ui, state: &AppState) {
    ui.heading("Headlines");
    ui.separator();

    ui.horizontal_wrapped(|ui: &mut Ui| {
        for (score, _) in legend_stops(5) {
            ui.label(score_chip(score));
        }
    });
    ui.separator();

    let Some(agg) = state.response.as_ref().and_then(|r| r.aggregate.as_ref()) else {
        ui.label("No analysis yet.");
        return;
    };

    ui.label(format!(
        "{} scanned, {} with a signal",
        agg.scanned,
        agg.scored.len()
    ));
    if let Some(mean) = agg.mean() {
        ui.horizontal(|ui: &mut Ui| {
            ui.label("Mean score");
            ui.label(score_chip(mean));
        });
    }
    ui.add_space(4.0);

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::remainder().clip(true))
        .header(20.0, |mut header| {
            header.col(|ui: &mut Ui| {
                ui.strong("Ticker");
            });
            header.col(|ui: &mut Ui| {
                ui.strong("Score");
            });
            header.col(|ui: &mut Ui| {
                ui.strong("Headline");
            });
        })
        .body(|mut body| {
            for record in agg.scored.records() {
                body.row(20.0, |mut row| {
                    row.col(|ui: &mut Ui| {
                        ui.monospace(&record.label);
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(score_chip(record.score));
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(&record.raw_text).on_hover_text(&record.raw_text);
                    });
                });
            }
        });
}
