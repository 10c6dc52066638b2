use eframe::egui::Color32;
use palette::{Mix, Srgb};

// ---------------------------------------------------------------------------
// Diverging red → yellow → green scale
// ---------------------------------------------------------------------------

/// Scale endpoint for a score of -1.0.
pub const SCALE_RED: Color32 = Color32::from_rgb(0xa5, 0x00, 0x26);
/// Scale midpoint for a score of 0.0.
pub const SCALE_YELLOW: Color32 = Color32::from_rgb(0xff, 0xff, 0xbf);
/// Scale endpoint for a score of +1.0.
pub const SCALE_GREEN: Color32 = Color32::from_rgb(0x00, 0x68, 0x37);

/// Lower and upper bound of the score domain.
pub const SCORE_DOMAIN: (f64, f64) = (-1.0, 1.0);

fn to_srgb(c: Color32) -> Srgb<f32> {
    Srgb::new(c.r(), c.g(), c.b()).into_format()
}

fn to_color32(c: Srgb<f32>) -> Color32 {
    let c: Srgb<u8> = c.into_format();
    Color32::from_rgb(c.red, c.green, c.blue)
}

/// Clamp a score into the domain. NaN is treated as neutral.
pub fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(SCORE_DOMAIN.0, SCORE_DOMAIN.1)
    }
}

/// Map a score linearly onto the diverging scale.
///
/// -1 is red, 0 yellow, +1 green. Out-of-domain scores clamp to the nearest end.
/// Only the three RdYlGn anchors are used, so colours between them approximate
/// the 11-stop matplotlib map rather than reproduce it.
pub fn diverging_color(score: f64) -> Color32 {
    let s = clamp_score(score) as f32;
    let color = if s < 0.0 {
        // -1 → 0 within the red half
        to_srgb(SCALE_RED).mix(to_srgb(SCALE_YELLOW), s + 1.0)
    } else {
        to_srgb(SCALE_YELLOW).mix(to_srgb(SCALE_GREEN), s)
    };
    to_color32(color)
}

/// Evenly spaced `(score, colour)` stops across the domain, for legends.
pub fn legend_stops(n: usize) -> Vec<(f64, Color32)> {
    match n {
        0 => Vec::new(),
        1 => vec![(0.0, SCALE_YELLOW)],
        _ => {
            let (lo, hi) = SCORE_DOMAIN;
            (0..n)
                .map(|i| {
                    let score = lo + (hi - lo) * i as f64 / (n - 1) as f64;
                    (score, diverging_color(score))
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_and_midpoint() {
        assert_eq!(diverging_color(-1.0), SCALE_RED);
        assert_eq!(diverging_color(0.0), SCALE_YELLOW);
        assert_eq!(diverging_color(1.0), SCALE_GREEN);
    }

    #[test]
    fn out_of_domain_scores_clamp() {
        assert_eq!(diverging_color(-3.5), SCALE_RED);
        assert_eq!(diverging_color(42.0), SCALE_GREEN);
        assert_eq!(diverging_color(f64::NEG_INFINITY), SCALE_RED);
        assert_eq!(diverging_color(f64::NAN), SCALE_YELLOW);
    }

    #[test]
    fn each_half_is_monotonic() {
        let steps: Vec<f64> = (0..=20).map(|i| -1.0 + i as f64 * 0.1).collect();
        for pair in steps.windows(2) {
            let (a, b) = (diverging_color(pair[0]), diverging_color(pair[1]));
            if pair[1] <= 0.0 {
                assert!(a.r() <= b.r() && a.g() <= b.g(), "{pair:?}");
            } else if pair[0] >= 0.0 {
                assert!(a.r() >= b.r() && a.g() >= b.g(), "{pair:?}");
            }
        }
    }

    #[test]
    fn midway_colours_sit_between_anchors() {
        let c = diverging_color(0.5);
        assert!(c.r() < SCALE_YELLOW.r() && c.r() > SCALE_GREEN.r());
        let c = diverging_color(-0.5);
        assert!(c.g() < SCALE_YELLOW.g() && c.g() > SCALE_RED.g());
    }

    #[test]
    fn halves_interpolate_straight_between_anchors() {
        // Linear in sRGB, so halfway sits on the channel midpoints of the anchors.
        let near_mid = |c: Color32, a: Color32, b: Color32| {
            [(c.r(), a.r(), b.r()), (c.g(), a.g(), b.g()), (c.b(), a.b(), b.b())]
                .into_iter()
                .all(|(c, a, b)| (c as f32 - (a as f32 + b as f32) / 2.0).abs() <= 1.0)
        };
        assert!(near_mid(diverging_color(0.5), SCALE_YELLOW, SCALE_GREEN));
        assert!(near_mid(diverging_color(-0.5), SCALE_RED, SCALE_YELLOW));
    }

    #[test]
    fn legend_spans_the_domain() {
        let stops = legend_stops(5);
        assert_eq!(stops.len(), 5);
        assert_eq!(stops[0], (-1.0, SCALE_RED));
        assert_eq!(stops[2], (0.0, SCALE_YELLOW));
        assert_eq!(stops[4], (1.0, SCALE_GREEN));
        assert!(legend_stops(0).is_empty());
    }
}
