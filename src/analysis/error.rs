use thiserror::Error;

/// Failures that end an analysis request. None of them are retried.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("failed to parse {url}: {reason}")]
    Parse { url: String, reason: String },

    #[error("{0}")]
    Unexpected(String),
}

impl PipelineError {
    /// Sentence shown in place of the verdict and chart.
    pub fn user_message(&self) -> String {
        match self {
            PipelineError::Unexpected(_) => format!("An unexpected error occurred: {self}"),
            _ => format!("An error occurred while processing the request: {self}"),
        }
    }
}

impl From<crate::chart::ChartError> for PipelineError {
    fn from(e: crate::chart::ChartError) -> Self {
        PipelineError::Unexpected(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_errors_use_request_wording() {
        let e = PipelineError::Fetch {
            url: "https://example.com".into(),
            reason: "HTTP status 404 Not Found".into(),
        };
        assert_eq!(
            e.user_message(),
            "An error occurred while processing the request: \
             failed to fetch https://example.com: HTTP status 404 Not Found"
        );
    }

    #[test]
    fn unexpected_errors_use_unexpected_wording() {
        let e = PipelineError::Unexpected("boom".into());
        assert_eq!(e.user_message(), "An unexpected error occurred: boom");
    }
}
