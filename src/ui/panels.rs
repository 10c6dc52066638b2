use eframe::egui::{self, Color32, RichText, Ui};

use crate::analysis::model::Verdict;
use crate::analysis::pipeline::{MAX_HEADLINES, MIN_HEADLINES};
use crate::chart::ChartKind;
use crate::state::AppState;
use crate::ui::plot;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title strip.
pub fn top_bar(ui: &mut Ui) {
    ui.add_space(4.0);
    ui.heading("Financial News Sentiment Analysis");
    ui.label(
        "This app analyzes the sentiment of financial news headlines \
         to make a stock market prediction.",
    );
    ui.add_space(4.0);
}

// ---------------------------------------------------------------------------
// Left side panel – request inputs
// ---------------------------------------------------------------------------

/// Render the request form. Runs the analysis when asked to.
pub fn request_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Request");
    ui.separator();

    ui.strong("News page URL");
    let url_edit = ui.add(
        egui::TextEdit::singleline(&mut state.url)
            .hint_text("https://…")
            .desired_width(f32::INFINITY),
    );
    let submitted = url_edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
    ui.add_space(8.0);

    ui.strong("Headlines to analyze");
    ui.add(egui::Slider::new(
        &mut state.headline_limit,
        MIN_HEADLINES..=MAX_HEADLINES,
    ));
    ui.add_space(8.0);

    ui.strong("Chart type");
    egui::ComboBox::from_id_salt("chart_kind")
        .selected_text(state.chart_kind.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            for kind in ChartKind::ALL {
                ui.selectable_value(&mut state.chart_kind, kind, kind.to_string());
            }
        });
    ui.add_space(12.0);

    let clicked = ui
        .add_enabled(!state.url.trim().is_empty(), egui::Button::new("Analyze"))
        .clicked();

    if clicked || submitted {
        state.analyze();
    }

    if state.inputs_changed() {
        ui.add_space(8.0);
        ui.label(RichText::new("Inputs changed – press Analyze to refresh.").italics());
    }
}

// ---------------------------------------------------------------------------
// Central panel – verdict and chart
// ---------------------------------------------------------------------------

fn verdict_color(verdict: Verdict) -> Color32 {
    match verdict {
        Verdict::Up => Color32::from_rgb(0x1a, 0x98, 0x50),
        Verdict::Down => Color32::from_rgb(0xd7, 0x30, 0x27),
        Verdict::Stable => Color32::GRAY,
    }
}

/// Render the outcome of the last request.
pub fn result_view(ui: &mut Ui, state: &AppState) {
    let Some(response) = &state.response else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Enter the URL of a financial news website and press Analyze");
        });
        return;
    };

    if let Some(verdict) = response.verdict {
        ui.label(
            RichText::new(verdict.message())
                .size(18.0)
                .strong()
                .color(verdict_color(verdict)),
        );
        ui.separator();
    }

    if let Some(spec) = response.chart() {
        plot::sentiment_chart(ui, spec);
    } else if let Some(msg) = response.message() {
        let text = RichText::new(msg).size(16.0);
        if response.is_failure() {
            ui.label(text.color(Color32::RED));
        } else {
            ui.label(text);
        }
    }
}
