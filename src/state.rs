use crate::analysis::pipeline::{AnalysisRequest, AnalysisResponse, Pipeline};
use crate::analysis::source::{parse_url, HttpHeadlineSource};
use crate::chart::ChartKind;
use crate::config::AppConfig;
use crate::sentiment::VaderScorer;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// URL typed into the request panel.
    pub url: String,

    /// Maximum number of headlines to score.
    pub headline_limit: usize,

    /// Chart kind chosen in the request panel.
    pub chart_kind: ChartKind,

    /// Result of the last "Analyze" action (None before the first one).
    pub response: Option<AnalysisResponse>,

    /// Request that produced `response`.
    pub last_request: Option<AnalysisRequest>,

    config: AppConfig,
    scorer: VaderScorer,
    /// HTTP source, built on first use.
    source: Option<HttpHeadlineSource>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            url: config.default_url.clone(),
            headline_limit: config.headline_limit,
            chart_kind: config.chart_kind,
            response: None,
            last_request: None,
            config,
            scorer: VaderScorer::new(),
            source: None,
        }
    }

    /// Run the whole pipeline for the current inputs. Blocks until done.
    pub fn analyze(&mut self) {
        let request = AnalysisRequest::new(self.url.trim(), self.headline_limit, self.chart_kind);

        if let Err(e) = parse_url(&request.url) {
            log::warn!("Rejected request: {e}");
            self.response = Some(AnalysisResponse::failure(&e));
            self.last_request = Some(request);
            return;
        }

        let source = match self.source.take() {
            Some(source) => source,
            None => match HttpHeadlineSource::new(self.config.timeout(), &self.config.user_agent) {
                Ok(source) => source,
                Err(e) => {
                    log::error!("Cannot create HTTP client: {e}");
                    self.response = Some(AnalysisResponse::failure(&e));
                    self.last_request = Some(request);
                    return;
                }
            },
        };

        let response = Pipeline::new(&source, &self.scorer).run(&request);
        self.source = Some(source);
        self.response = Some(response);
        self.last_request = Some(request);
    }

    /// Whether the current inputs differ from those of the shown result.
    pub fn inputs_changed(&self) -> bool {
        match &self.last_request {
            Some(req) => {
                req.url != self.url.trim()
                    || req.headline_limit != self.headline_limit
                    || req.chart_kind != self.chart_kind
            }
            None => false,
        }
    }
}
