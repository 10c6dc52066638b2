use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::Url;
use scraper::{Html, Selector};

use super::error::PipelineError;

/// Heading levels treated as headlines.
const HEADLINE_SELECTOR: &str = "h1, h2, h3, h4, h5";

// ---------------------------------------------------------------------------
// Source contract
// ---------------------------------------------------------------------------

/// Supplies the heading texts of a page, in document order.
pub trait HeadlineSource {
    fn headlines(&self, url: &Url) -> Result<Vec<String>, PipelineError>;
}

/// Check that `input` is an absolute http(s) URL with a host.
pub fn parse_url(input: &str) -> Result<Url, PipelineError> {
    let trimmed = input.trim();
    let invalid = |reason: String| PipelineError::InvalidUrl {
        url: trimmed.to_string(),
        reason,
    };

    if trimmed.is_empty() {
        return Err(invalid("no URL given".into()));
    }
    let url = Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme '{other}'"))),
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid("missing host".into()));
    }
    Ok(url)
}

// ---------------------------------------------------------------------------
// HTML extraction
// ---------------------------------------------------------------------------

/// Pull the text of every `h1`..`h5` element in document order.
///
/// Inner whitespace runs collapse to a single space. Headings without text
/// are kept as empty strings; the scorer gives them no signal.
pub fn extract_headlines(html: &str) -> Result<Vec<String>, String> {
    let selector = Selector::parse(HEADLINE_SELECTOR).map_err(|e| e.to_string())?;
    let document = Html::parse_document(html);

    Ok(document
        .select(&selector)
        .map(|el| {
            let text: String = el.text().collect();
            text.split_whitespace().collect::<Vec<_>>().join(" ")
        })
        .collect())
}

fn is_html_content_type(value: &str) -> bool {
    let mime = value.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
    mime == "text/html" || mime == "application/xhtml+xml"
}

// ---------------------------------------------------------------------------
// HTTP source
// ---------------------------------------------------------------------------

/// Fetches a page with a blocking GET and extracts its headings.
pub struct HttpHeadlineSource {
    client: Client,
}

impl HttpHeadlineSource {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, PipelineError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| PipelineError::Unexpected(format!("building HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

impl HeadlineSource for HttpHeadlineSource {
    fn headlines(&self, url: &Url) -> Result<Vec<String>, PipelineError> {
        let fetch_error = |reason: String| PipelineError::Fetch {
            url: url.to_string(),
            reason,
        };

        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| fetch_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fetch_error(format!("HTTP status {status}")));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        if let Some(ct) = &content_type {
            if !is_html_content_type(ct) {
                return Err(PipelineError::Parse {
                    url: url.to_string(),
                    reason: format!("expected an HTML page, got '{ct}'"),
                });
            }
        }

        let body = response.text().map_err(|e| fetch_error(e.to_string()))?;
        log::debug!("Fetched {} bytes from {url}", body.len());

        extract_headlines(&body).map_err(|reason| PipelineError::Parse {
            url: url.to_string(),
            reason,
        })
    }
}
