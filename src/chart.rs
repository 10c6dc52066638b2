use std::fmt;

use eframe::egui::Color32;
use serde::Deserialize;
use thiserror::Error;

use crate::analysis::model::{HeadlineRecord, ScoredSet};
use crate::color::diverging_color;

/// Bar width in category units.
pub const BAR_WIDTH: f64 = 0.5;
/// Uniform stroke colour of the line chart.
pub const LINE_COLOR: Color32 = Color32::from_rgb(0x1f, 0x77, 0xb4);
pub const LINE_WIDTH: f32 = 2.0;
pub const LINE_MARKER_RADIUS: f32 = 3.5;
pub const SCATTER_MARKER_RADIUS: f32 = 7.0;

/// Category labels stand upright so long label lists don't overlap.
pub const VERTICAL_LABELS: f32 = std::f32::consts::FRAC_PI_2;

pub const X_AXIS_TITLE: &str = "Tickers";
pub const Y_AXIS_TITLE: &str = "Sentiment Scores";

// ---------------------------------------------------------------------------
// ChartKind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Bar,
    Line,
    Area,
    Scatter,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [
        ChartKind::Bar,
        ChartKind::Line,
        ChartKind::Area,
        ChartKind::Scatter,
    ];
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChartKind::Bar => "Bar Chart",
            ChartKind::Line => "Line Chart",
            ChartKind::Area => "Area Chart",
            ChartKind::Scatter => "Scatter Plot",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    #[error("cannot render a chart from an empty scored set")]
    EmptyInput,
}

// ---------------------------------------------------------------------------
// ChartSpec – what to draw, before any drawing happens
// ---------------------------------------------------------------------------

/// A filled convex polygon of the area chart, entirely on one side of zero.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaSegment {
    pub points: Vec<[f64; 2]>,
    pub fill: Color32,
}

/// Kind-specific geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Bars { width: f64 },
    Polyline { color: Color32, width: f32, marker_radius: f32 },
    Area { segments: Vec<AreaSegment> },
    Markers { radius: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    /// One colour per value.
    pub colors: Vec<Color32>,
    /// Category-axis position of each value.
    pub positions: Vec<f64>,
    pub geometry: Geometry,
    /// Clockwise rotation of category labels, in radians.
    pub label_angle: f32,
    pub x_title: &'static str,
    pub y_title: &'static str,
}

impl ChartSpec {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `[x, y]` pairs of the value curve.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.positions
            .iter()
            .zip(&self.values)
            .map(|(&x, &y)| [x, y])
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Build the chart description for a non-empty scored set.
pub fn render(scored: &ScoredSet, kind: ChartKind) -> Result<ChartSpec, ChartError> {
    if scored.is_empty() {
        return Err(ChartError::EmptyInput);
    }

    let records: Vec<&HeadlineRecord> = match kind {
        ChartKind::Line => scored.sorted_by_label(),
        ChartKind::Bar | ChartKind::Area | ChartKind::Scatter => scored.records().iter().collect(),
    };

    let labels: Vec<String> = records.iter().map(|r| r.label.clone()).collect();
    let values: Vec<f64> = records.iter().map(|r| r.score).collect();
    let positions: Vec<f64> = (0..values.len()).map(|i| i as f64).collect();

    let (colors, geometry) = match kind {
        ChartKind::Bar => (score_colors(&values), Geometry::Bars { width: BAR_WIDTH }),
        ChartKind::Line => (
            vec![LINE_COLOR; values.len()],
            Geometry::Polyline {
                color: LINE_COLOR,
                width: LINE_WIDTH,
                marker_radius: LINE_MARKER_RADIUS,
            },
        ),
        ChartKind::Area => (
            score_colors(&values),
            Geometry::Area {
                segments: area_segments(&positions, &values),
            },
        ),
        ChartKind::Scatter => (
            score_colors(&values),
            Geometry::Markers {
                radius: SCATTER_MARKER_RADIUS,
            },
        ),
    };

    Ok(ChartSpec {
        kind,
        labels,
        values,
        colors,
        positions,
        geometry,
        label_angle: VERTICAL_LABELS,
        x_title: X_AXIS_TITLE,
        y_title: Y_AXIS_TITLE,
    })
}

fn score_colors(values: &[f64]) -> Vec<Color32> {
    values.iter().map(|&v| diverging_color(v)).collect()
}

/// Fill between the value curve and zero, one piece per pair of neighbours.
///
/// A pair whose values straddle zero splits into two triangles at the
/// crossing. Each piece takes the colour of its mean height. A lone value
/// becomes a flat band one category wide.
fn area_segments(xs: &[f64], ys: &[f64]) -> Vec<AreaSegment> {
    if let ([x], [y]) = (xs, ys) {
        return vec![trapezoid([x - 0.5, *y], [x + 0.5, *y])];
    }

    let mut segments = Vec::with_capacity(xs.len().saturating_sub(1));
    for i in 1..xs.len() {
        let (a, b) = ([xs[i - 1], ys[i - 1]], [xs[i], ys[i]]);
        if a[1] * b[1] < 0.0 {
            let t = a[1] / (a[1] - b[1]);
            let cross = a[0] + t * (b[0] - a[0]);
            segments.push(triangle(a, cross));
            segments.push(triangle(b, cross));
        } else {
            segments.push(trapezoid(a, b));
        }
    }
    segments
}

fn trapezoid(a: [f64; 2], b: [f64; 2]) -> AreaSegment {
    AreaSegment {
        points: vec![[a[0], 0.0], a, b, [b[0], 0.0]],
        fill: diverging_color((a[1] + b[1]) / 2.0),
    }
}

fn triangle(p: [f64; 2], zero_x: f64) -> AreaSegment {
    let (left, right) = if p[0] <= zero_x {
        ([p[0], 0.0], [zero_x, 0.0])
    } else {
        ([zero_x, 0.0], [p[0], 0.0])
    };
    AreaSegment {
        points: vec![left, p, right],
        fill: diverging_color(p[1] / 2.0),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::color::{SCALE_GREEN, SCALE_RED};

    fn set(entries: &[(&str, f64)]) -> ScoredSet {
        ScoredSet::from_records(entries.iter().map(|&(t, s)| HeadlineRecord::new(t, s)))
    }

    #[test]
    fn empty_set_fails_fast_for_every_kind() {
        for kind in ChartKind::ALL {
            assert_eq!(render(&ScoredSet::default(), kind), Err(ChartError::EmptyInput));
        }
    }

    #[test]
    fn bar_keeps_document_order_and_colours_each_bar() {
        let spec = render(&set(&[("Zeta rises", 1.0), ("Alpha falls", -1.0)]), ChartKind::Bar)
            .expect("chart");
        assert_eq!(spec.labels, vec!["Zeta rises", "Alpha fall"]);
        assert_eq!(spec.values, vec![1.0, -1.0]);
        assert_eq!(spec.colors, vec![SCALE_GREEN, SCALE_RED]);
        assert_eq!(spec.geometry, Geometry::Bars { width: BAR_WIDTH });
        assert_eq!(spec.label_angle, VERTICAL_LABELS);
    }

    #[test]
    fn line_sorts_by_label_with_one_colour() {
        let spec = render(
            &set(&[("charlie", 0.3), ("alpha", -0.4), ("bravo", 0.9)]),
            ChartKind::Line,
        )
        .expect("chart");
        assert_eq!(spec.labels, vec!["alpha", "bravo", "charlie"]);
        assert_eq!(spec.values, vec![-0.4, 0.9, 0.3]);
        assert!(spec.colors.iter().all(|&c| c == LINE_COLOR));
        assert!(matches!(spec.geometry, Geometry::Polyline { .. }));
    }

    #[test]
    fn area_and_scatter_keep_document_order() {
        let entries = [("b", 0.2), ("a", 0.4)];
        for kind in [ChartKind::Area, ChartKind::Scatter] {
            let spec = render(&set(&entries), kind).expect("chart");
            assert_eq!(spec.labels, vec!["b", "a"]);
        }
    }

    #[test]
    fn scatter_markers_outsize_line_markers() {
        let spec = render(&set(&[("x", 0.5)]), ChartKind::Scatter).expect("chart");
        match spec.geometry {
            Geometry::Markers { radius } => assert!(radius > LINE_MARKER_RADIUS),
            other => panic!("unexpected geometry {other:?}"),
        }
    }

    #[test]
    fn parallel_sequences_have_equal_length() {
        let s = set(&[("a", 0.1), ("b", -0.2), ("c", 0.3), ("d", -0.4)]);
        for kind in ChartKind::ALL {
            let spec = render(&s, kind).expect("chart");
            assert_eq!(spec.labels.len(), 4);
            assert_eq!(spec.colors.len(), 4);
            assert_eq!(spec.positions.len(), 4);
            assert_eq!(spec.points().len(), 4);
        }
    }

    #[test]
    fn area_splits_at_zero_crossing() {
        let segs = area_segments(&[0.0, 1.0, 2.0], &[0.5, -0.5, -0.25]);
        assert_eq!(segs.len(), 3);
        // first pair crosses at x = 0.5
        assert_eq!(segs[0].points, vec![[0.0, 0.0], [0.0, 0.5], [0.5, 0.0]]);
        assert_eq!(segs[1].points, vec![[0.5, 0.0], [1.0, -0.5], [1.0, 0.0]]);
        assert_eq!(segs[2].points.len(), 4);
        for seg in &segs {
            let above = seg.points.iter().all(|p| p[1] >= 0.0);
            let below = seg.points.iter().all(|p| p[1] <= 0.0);
            assert!(above || below);
        }
    }

    #[test]
    fn single_area_value_is_a_band() {
        let segs = area_segments(&[0.0], &[0.8]);
        assert_eq!(segs.len(), 1);
        assert_relative_eq!(segs[0].points[0][0], -0.5);
        assert_relative_eq!(segs[0].points[3][0], 0.5);
        assert_eq!(segs[0].fill, diverging_color(0.8));
    }
}
