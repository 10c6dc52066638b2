use std::fmt;

// ---------------------------------------------------------------------------
// HeadlineRecord – one scored heading
// ---------------------------------------------------------------------------

/// Number of characters kept from a headline to form its ticker label.
pub const LABEL_CHARS: usize = 10;

/// A single heading pulled from the page, with its label and compound score.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlineRecord {
    /// Heading text as returned by the headline source.
    pub raw_text: String,
    /// Ticker-style label: the first [`LABEL_CHARS`] characters of `raw_text`.
    pub label: String,
    /// Compound polarity in [-1.0, 1.0].
    pub score: f64,
}

impl HeadlineRecord {
    pub fn new(raw_text: impl Into<String>, score: f64) -> Self {
        let raw_text = raw_text.into();
        let label = ticker_label(&raw_text);
        Self {
            raw_text,
            label,
            score,
        }
    }
}

/// Derive the ticker label for a headline.
///
/// Counts Unicode scalar values (`char`s), not bytes, so a multi-byte heading
/// never gets cut inside a code point.
pub fn ticker_label(raw_text: &str) -> String {
    raw_text.chars().take(LABEL_CHARS).collect()
}

// ---------------------------------------------------------------------------
// ScoredSet – the non-neutral headlines of one request
// ---------------------------------------------------------------------------

/// Headlines with a non-zero score, in source document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoredSet {
    records: Vec<HeadlineRecord>,
}

impl ScoredSet {
    /// Build a set from records, dropping every record that scored exactly 0.0.
    pub fn from_records(records: impl IntoIterator<Item = HeadlineRecord>) -> Self {
        Self {
            records: records.into_iter().filter(|r| r.score != 0.0).collect(),
        }
    }

    pub fn records(&self) -> &[HeadlineRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Arithmetic mean of the scores, `None` for an empty set.
    pub fn mean(&self) -> Option<f64> {
        if self.records.is_empty() {
            return None;
        }
        let sum: f64 = self.records.iter().map(|r| r.score).sum();
        Some(sum / self.records.len() as f64)
    }

    /// Records re-ordered ascending by label. Stable, so equal labels keep
    /// their document order.
    pub fn sorted_by_label(&self) -> Vec<&HeadlineRecord> {
        let mut sorted: Vec<&HeadlineRecord> = self.records.iter().collect();
        sorted.sort_by(|a, b| a.label.cmp(&b.label));
        sorted
    }
}

// ---------------------------------------------------------------------------
// Verdict – market direction
// ---------------------------------------------------------------------------

/// Three-way market direction derived from the mean score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Up,
    Down,
    Stable,
}

impl Verdict {
    /// Classify a mean score. Exactly 0.0 is `Stable`.
    pub fn from_mean(mean: f64) -> Self {
        if mean > 0.0 {
            Verdict::Up
        } else if mean < 0.0 {
            Verdict::Down
        } else {
            Verdict::Stable
        }
    }

    /// Sentence shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Up => "The stock market is likely to go up.",
            Verdict::Down => "The stock market is likely to go down.",
            Verdict::Stable => "The stock market is likely to remain stable.",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Up => write!(f, "Up"),
            Verdict::Down => write!(f, "Down"),
            Verdict::Stable => write!(f, "Stable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_bounded_by_ten_chars() {
        for text in ["", "short", "exactly10!", "Stocks surge on strong earnings"] {
            let label = ticker_label(text);
            assert_eq!(label.chars().count(), text.chars().count().min(LABEL_CHARS));
            assert!(text.starts_with(&label));
        }
    }

    #[test]
    fn label_counts_chars_not_bytes() {
        let label = ticker_label("Börse fällt über 3 Prozent");
        assert_eq!(label, "Börse fäll");
        assert_eq!(ticker_label(&label), label);
    }

    #[test]
    fn scored_set_drops_exact_zero_only() {
        let set = ScoredSet::from_records(vec![
            HeadlineRecord::new("first", 0.4),
            HeadlineRecord::new("neutral", 0.0),
            HeadlineRecord::new("tiny", -1e-9),
            HeadlineRecord::new("last", -0.2),
        ]);
        let labels: Vec<&str> = set.records().iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["first", "tiny", "last"]);
    }

    #[test]
    fn mean_of_empty_set_is_none() {
        assert_eq!(ScoredSet::default().mean(), None);
    }

    #[test]
    fn verdict_follows_mean_sign() {
        assert_eq!(Verdict::from_mean(0.01), Verdict::Up);
        assert_eq!(Verdict::from_mean(-0.01), Verdict::Down);
        assert_eq!(Verdict::from_mean(0.0), Verdict::Stable);
        assert_eq!(Verdict::from_mean(-0.0), Verdict::Stable);
    }

    #[test]
    fn sorted_by_label_is_stable() {
        let set = ScoredSet::from_records(vec![
            HeadlineRecord::new("b", 0.1),
            HeadlineRecord::new("a", 0.2),
            HeadlineRecord::new("b", 0.3),
        ]);
        let scores: Vec<f64> = set.sorted_by_label().iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![0.2, 0.1, 0.3]);
    }
}
