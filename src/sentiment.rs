use std::sync::OnceLock;

use vader_sentiment::SentimentIntensityAnalyzer;

// ---------------------------------------------------------------------------
// Scorer contract
// ---------------------------------------------------------------------------

/// Maps a text fragment to a compound polarity score in [-1.0, 1.0].
///
/// Positive is favourable, negative unfavourable. Empty or unscoreable text
/// must come back as exactly 0.0.
pub trait SentimentScorer {
    fn score(&self, text: &str) -> f64;
}

// ---------------------------------------------------------------------------
// VADER lexicon
// ---------------------------------------------------------------------------

static ANALYZER: OnceLock<SentimentIntensityAnalyzer<'static>> = OnceLock::new();

/// Load the VADER lexicon once. Safe to call any number of times.
pub fn ensure_loaded() -> &'static SentimentIntensityAnalyzer<'static> {
    ANALYZER.get_or_init(|| {
        log::info!("Loading VADER sentiment lexicon");
        SentimentIntensityAnalyzer::new()
    })
}

/// Scorer backed by the VADER compound score.
#[derive(Debug, Clone, Copy, Default)]
pub struct VaderScorer;

impl VaderScorer {
    pub fn new() -> Self {
        ensure_loaded();
        VaderScorer
    }
}

impl SentimentScorer for VaderScorer {
    fn score(&self, text: &str) -> f64 {
        if text.trim().is_empty() {
            return 0.0;
        }
        let scores = ensure_loaded().polarity_scores(text);
        let compound = scores.get("compound").copied().unwrap_or(0.0);
        if compound.is_finite() {
            compound.clamp(-1.0, 1.0)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_loaded_is_idempotent() {
        let a = ensure_loaded() as *const _;
        let b = ensure_loaded() as *const _;
        assert_eq!(a, b);
    }

    #[test]
    fn blank_text_has_no_signal() {
        let scorer = VaderScorer::new();
        assert_eq!(scorer.score(""), 0.0);
        assert_eq!(scorer.score("   \n\t"), 0.0);
    }

    #[test]
    fn polarity_has_expected_sign() {
        let scorer = VaderScorer::new();
        assert!(scorer.score("Great results, investors are happy") > 0.0);
        assert!(scorer.score("Terrible losses leave investors angry") < 0.0);
    }

    #[test]
    fn scores_stay_in_range() {
        let scorer = VaderScorer::new();
        for text in [
            "GREAT GREAT GREAT amazing wonderful excellent!!!",
            "horrible awful terrible disaster crisis!!!",
            "Flat trading expected",
        ] {
            let s = scorer.score(text);
            assert!((-1.0..=1.0).contains(&s), "{text}: {s}");
        }
    }
}
