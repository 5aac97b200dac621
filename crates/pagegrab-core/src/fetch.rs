//! Blocking network client over libcurl.
//!
//! One GET per call; libcurl follows redirects itself, so a completed
//! transfer with a 2xx/3xx response code is success and 4xx/5xx surfaces as
//! [`FetchError::HttpStatus`]. Runs in the calling thread and blocks until
//! the transfer completes or fails.

use std::time::Duration;

/// Transfer failure taxonomy surfaced for the page fetch and every asset
/// fetch. Nothing here is retried; a failure aborts the run.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// DNS, connect, or transport failure (any libcurl error that is neither
    /// a timeout nor a redirect-limit error).
    #[error("connection failed: {0}")]
    Connection(#[source] curl::Error),
    /// The caller-configured connect or total-request timeout expired.
    #[error("request timed out: {0}")]
    Timeout(#[source] curl::Error),
    /// The redirect chain exceeded the configured bound.
    #[error("too many redirects: {0}")]
    TooManyRedirects(#[source] curl::Error),
    /// The final response had a 4xx/5xx status.
    #[error("HTTP status {0}")]
    HttpStatus(u32),
}

/// Client-side bounds for one request.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub connect_timeout: Duration,
    pub timeout: Duration,
    pub max_redirects: u32,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            timeout: Duration::from_secs(300),
            max_redirects: 10,
            user_agent: format!("pagegrab/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Fetches `url` with a single blocking GET and returns the response body.
pub fn fetch(url: &str, options: &FetchOptions) -> Result<Vec<u8>, FetchError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(classify)?;
    easy.follow_location(true).map_err(classify)?;
    easy.max_redirections(options.max_redirects).map_err(classify)?;
    easy.useragent(&options.user_agent).map_err(classify)?;
    easy.connect_timeout(options.connect_timeout).map_err(classify)?;
    easy.timeout(options.timeout).map_err(classify)?;

    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(classify)?;
        transfer.perform().map_err(classify)?;
    }

    let code = easy.response_code().map_err(classify)?;
    if code >= 400 {
        tracing::warn!(url, code, "request failed");
        return Err(FetchError::HttpStatus(code));
    }

    tracing::debug!(url, code, bytes = body.len(), "fetched");
    Ok(body)
}

/// Maps libcurl error classes onto the transfer taxonomy.
fn classify(error: curl::Error) -> FetchError {
    if error.is_operation_timedout() {
        FetchError::Timeout(error)
    } else if error.is_too_many_redirects() {
        FetchError::TooManyRedirects(error)
    } else {
        FetchError::Connection(error)
    }
}
