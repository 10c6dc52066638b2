use std::sync::Arc;

use eframe::egui::{self, Color32, FontId, Galley, Stroke, Ui};
use eframe::egui::epaint::TextShape;
use egui_plot::{
    Bar, BarChart, HLine, Line, MarkerShape, Plot, PlotPoint, PlotPoints, PlotTransform, PlotUi,
    Points, Polygon,
};

use crate::chart::{ChartSpec, Geometry};

const LABEL_FONT_SIZE: f32 = 11.0;
const LABEL_PADDING: f32 = 6.0;
const AREA_OUTLINE: Color32 = Color32::from_gray(90);

// ---------------------------------------------------------------------------
// Sentiment chart (central panel)
// ---------------------------------------------------------------------------

/// Draw a chart description: the plot, then a strip of rotated category labels.
pub fn sentiment_chart(ui: &mut Ui, spec: &ChartSpec) {
    if spec.is_empty() {
        return;
    }

    ui.label(egui::RichText::new(spec.kind.to_string()).weak());

    // Lay labels out first so the plot leaves room for the tallest one.
    let text_color = ui.visuals().text_color();
    let galleys: Vec<Arc<Galley>> = spec
        .labels
        .iter()
        .map(|l| {
            ui.painter()
                .layout_no_wrap(l.clone(), FontId::proportional(LABEL_FONT_SIZE), text_color)
        })
        .collect();
    let band_height = galleys
        .iter()
        .map(|g| label_extent(g, spec.label_angle))
        .fold(0.0_f32, f32::max)
        + LABEL_PADDING * 2.0;

    let title_height = ui.text_style_height(&egui::TextStyle::Body) + LABEL_PADDING;
    let plot_height = (ui.available_height() - band_height - title_height).max(160.0);

    let response = Plot::new("sentiment_chart")
        .height(plot_height)
        .show_axes([false, true])
        .y_axis_label(spec.y_title)
        .include_y(-1.0)
        .include_y(1.0)
        .include_x(-0.75)
        .include_x(spec.len() as f64 - 0.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.hline(HLine::new(0.0).color(Color32::GRAY).width(1.0));
            match &spec.geometry {
                Geometry::Bars { width } => draw_bars(plot_ui, spec, *width),
                Geometry::Polyline {
                    color,
                    width,
                    marker_radius,
                } => draw_line(plot_ui, spec, *color, *width, *marker_radius),
                Geometry::Area { segments } => {
                    for seg in segments {
                        plot_ui.polygon(
                            Polygon::new(PlotPoints::from(seg.points.clone()))
                                .fill_color(seg.fill)
                                .stroke(Stroke::NONE),
                        );
                    }
                    plot_ui.line(Line::new(PlotPoints::from(spec.points())).color(AREA_OUTLINE));
                }
                Geometry::Markers { radius } => draw_markers(plot_ui, spec, *radius),
            }
        });

    category_labels(ui, spec, galleys, &response.transform, band_height, text_color);
    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(spec.x_title);
    });
}

fn draw_bars(plot_ui: &mut PlotUi, spec: &ChartSpec, width: f64) {
    let bars: Vec<Bar> = spec
        .points()
        .into_iter()
        .zip(&spec.colors)
        .zip(&spec.labels)
        .map(|(([x, y], &color), label)| Bar::new(x, y).width(width).fill(color).name(label))
        .collect();
    plot_ui.bar_chart(BarChart::new(bars));
}

fn draw_line(plot_ui: &mut PlotUi, spec: &ChartSpec, color: Color32, width: f32, radius: f32) {
    plot_ui.line(Line::new(PlotPoints::from(spec.points())).color(color).width(width));
    plot_ui.points(
        Points::new(PlotPoints::from(spec.points()))
            .shape(MarkerShape::Circle)
            .filled(true)
            .radius(radius)
            .color(color),
    );
}

fn draw_markers(plot_ui: &mut PlotUi, spec: &ChartSpec, radius: f32) {
    for ((point, &color), label) in spec.points().into_iter().zip(&spec.colors).zip(&spec.labels) {
        plot_ui.points(
            Points::new(PlotPoints::from(vec![point]))
                .shape(MarkerShape::Circle)
                .filled(true)
                .radius(radius)
                .color(color)
                .name(label),
        );
    }
}

// ---------------------------------------------------------------------------
// Rotated category labels
// ---------------------------------------------------------------------------

/// Vertical room a label needs once rotated by `angle`.
fn label_extent(galley: &Galley, angle: f32) -> f32 {
    let size = galley.size();
    (size.x * angle.sin()).abs() + (size.y * angle.cos()).abs()
}

/// Paint labels under the plot, each centred on its category position.
fn category_labels(
    ui: &mut Ui,
    spec: &ChartSpec,
    galleys: Vec<Arc<Galley>>,
    transform: &PlotTransform,
    band_height: f32,
    color: Color32,
) {
    let (band, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), band_height),
        egui::Sense::hover(),
    );
    let painter = ui.painter_at(band);
    let frame = *transform.frame();

    for (&x, galley) in spec.positions.iter().zip(galleys) {
        let screen_x = transform.position_from_point(&PlotPoint::new(x, 0.0)).x;
        if screen_x < frame.left() || screen_x > frame.right() {
            continue;
        }
        // Rotation pivots on the galley's top-left corner.
        let half_height = galley.size().y * spec.label_angle.sin() / 2.0;
        let pos = egui::pos2(screen_x + half_height, band.top() + LABEL_PADDING);
        painter.add(TextShape::new(pos, galley, color).with_angle(spec.label_angle));
    }
}
