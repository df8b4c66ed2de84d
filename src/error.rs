/// All errors that can occur while fetching schedule data from the API.
///
/// The classification, filtering, diff and statistics functions never fail;
/// they coerce bad values instead. Errors only come from the HTTP boundary.
#[derive(thiserror::Error, Debug)]
pub enum ScheduleError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// The response body was not the expected JSON shape.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
