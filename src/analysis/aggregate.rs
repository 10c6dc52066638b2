use super::model::{HeadlineRecord, ScoredSet, Verdict};
use crate::sentiment::SentimentScorer;

/// Outcome of aggregating one page of headlines.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate {
    /// `None` when no headline carried a signal.
    pub verdict: Option<Verdict>,
    pub scored: ScoredSet,
    /// Headlines considered after truncation to the limit.
    pub scanned: usize,
}

impl Aggregate {
    pub fn mean(&self) -> Option<f64> {
        self.scored.mean()
    }
}

/// Score the first `limit` headlines, drop neutral ones and classify the mean.
///
/// A `limit` of zero is treated as one.
pub fn aggregate<S, T>(headlines: &[T], limit: usize, scorer: &S) -> Aggregate
where
    S: SentimentScorer + ?Sized,
    T: AsRef<str>,
{
    let window = &headlines[..headlines.len().min(limit.max(1))];

    let records = window.iter().map(|text| {
        let text = text.as_ref();
        let record = HeadlineRecord::new(text, scorer.score(text));
        log::debug!("{:>7.4}  {}", record.score, record.raw_text);
        record
    });
    let scored = ScoredSet::from_records(records);
    let verdict = scored.mean().map(Verdict::from_mean);

    Aggregate {
        verdict,
        scored,
        scanned: window.len(),
    }
}
