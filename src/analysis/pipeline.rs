use super::aggregate::{aggregate, Aggregate};
use super::error::PipelineError;
use super::model::Verdict;
use super::source::{parse_url, HeadlineSource};
use crate::chart::{render, ChartKind, ChartSpec};
use crate::sentiment::SentimentScorer;

pub const MIN_HEADLINES: usize = 1;
pub const MAX_HEADLINES: usize = 100;
pub const NO_HEADLINES_MESSAGE: &str = "No headlines found on the page.";

// ---------------------------------------------------------------------------
// Request / response
// ---------------------------------------------------------------------------

/// Inputs collected by the shell for one "Analyze" action.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub url: String,
    pub headline_limit: usize,
    pub chart_kind: ChartKind,
}

impl AnalysisRequest {
    /// Build a request, clamping the limit into [`MIN_HEADLINES`, `MAX_HEADLINES`].
    pub fn new(url: impl Into<String>, headline_limit: usize, chart_kind: ChartKind) -> Self {
        Self {
            url: url.into(),
            headline_limit: headline_limit.clamp(MIN_HEADLINES, MAX_HEADLINES),
            chart_kind,
        }
    }
}

/// Either a chart or a message, never both.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Chart(ChartSpec),
    /// Informational outcome, e.g. nothing to chart.
    Notice(String),
    /// The request failed.
    Failure(String),
}

/// What the shell displays after one request.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResponse {
    pub verdict: Option<Verdict>,
    pub body: ResponseBody,
    /// Aggregation details, kept for the headline table.
    pub aggregate: Option<Aggregate>,
}

impl AnalysisResponse {
    pub fn failure(err: &PipelineError) -> Self {
        Self {
            verdict: None,
            body: ResponseBody::Failure(err.user_message()),
            aggregate: None,
        }
    }

    pub fn chart(&self) -> Option<&ChartSpec> {
        match &self.body {
            ResponseBody::Chart(spec) => Some(spec),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match &self.body {
            ResponseBody::Chart(_) => None,
            ResponseBody::Notice(msg) | ResponseBody::Failure(msg) => Some(msg),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.body, ResponseBody::Failure(_))
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Fetch → extract → score → aggregate → render, in one blocking pass.
pub struct Pipeline<'a> {
    source: &'a dyn HeadlineSource,
    scorer: &'a dyn SentimentScorer,
}

impl<'a> Pipeline<'a> {
    pub fn new(source: &'a dyn HeadlineSource, scorer: &'a dyn SentimentScorer) -> Self {
        Self { source, scorer }
    }

    /// Run the request, propagating the first failure.
    pub fn try_run(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, PipelineError> {
        let url = parse_url(&request.url)?;
        log::info!(
            "Analyzing {url} (limit {}, {})",
            request.headline_limit,
            request.chart_kind
        );

        let headlines = self.source.headlines(&url)?;
        let agg = aggregate(&headlines, request.headline_limit, self.scorer);
        log::info!(
            "{} headlines found, {} scanned, {} with a signal",
            headlines.len(),
            agg.scanned,
            agg.scored.len()
        );

        let Some(verdict) = agg.verdict else {
            return Ok(AnalysisResponse {
                verdict: None,
                body: ResponseBody::Notice(NO_HEADLINES_MESSAGE.to_string()),
                aggregate: Some(agg),
            });
        };

        let spec = render(&agg.scored, request.chart_kind)?;
        log::info!("Verdict {verdict} from mean {:.4}", agg.mean().unwrap_or_default());

        Ok(AnalysisResponse {
            verdict: Some(verdict),
            body: ResponseBody::Chart(spec),
            aggregate: Some(agg),
        })
    }

    /// Run the request, folding any failure into the response message.
    pub fn run(&self, request: &AnalysisRequest) -> AnalysisResponse {
        self.try_run(request).unwrap_or_else(|e| {
            log::error!("Analysis of '{}' failed: {e}", request.url);
            AnalysisResponse::failure(&e)
        })
    }
}
