//! Blocking HTTP facade over async reqwest.
//!
//! Requests run on a shared tokio runtime and are awaited with `block_on`, so
//! callers (including rayon workers) see a plain synchronous interface.

use std::sync::LazyLock;
use std::time::Duration;

use reqwest::Method;
use serde::de::DeserializeOwned;

/// Timeouts applied to every request of a client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpConfig {
    /// Whole-request timeout (connect + send + read body)
    pub timeout: Duration,
    /// Connect timeout
    pub connect_timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
            connect_timeout: Duration::from_secs(30),
        }
    }
}

/// Network or payload failure talking to the source or the index
#[derive(Debug)]
pub enum TransportError {
    /// HTTP error with optional status code
    Http {
        status: Option<u16>,
        message: String,
    },
    /// Body could not be serialized or deserialized
    Decode(String),
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http {
                status: Some(s),
                message,
            } => write!(f, "HTTP {s}: {message}"),
            Self::Http {
                status: None,
                message,
            } => write!(f, "HTTP error: {message}"),
            Self::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

impl std::error::Error for TransportError {}

impl TransportError {
    /// Create HTTP error from reqwest error, without the request URL
    pub fn from_reqwest(e: reqwest::Error) -> Self {
        Self::Http {
            status: e.status().map(|s| s.as_u16()),
            message: e.without_url().to_string(),
        }
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => *status,
            Self::Decode(_) => None,
        }
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

/// Shared tokio runtime for HTTP operations.
pub static SHARED_RUNTIME: LazyLock<tokio::runtime::Runtime> = LazyLock::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .expect("failed to build tokio runtime")
});

/// Status and raw body of a completed request
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Deserialize the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, TransportError> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Turn a non-2xx response into an error carrying the body
    pub fn error_for_status(self) -> Result<Self, TransportError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(TransportError::Http {
                status: Some(self.status),
                message: truncate(&self.body, 300),
            })
        }
    }
}

fn truncate(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}

/// Pooled HTTP client with blocking helpers
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
}

impl HttpClient {
    pub fn new(config: &HttpConfig) -> Result<Self, TransportError> {
        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(8)
            .user_agent(concat!("pubstats/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(TransportError::from_reqwest)?;
        Ok(Self { inner })
    }

    /// GET `url` with query parameters and decode a JSON body.
    ///
    /// Any non-2xx status is an error.
    pub fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, TransportError> {
        let request = self.inner.get(url).query(query);
        let response = Self::execute(request)?.error_for_status()?;
        response.json()
    }

    /// Send a request with an optional JSON body.
    ///
    /// Returns the response whatever its status; callers decide which
    /// statuses are acceptable.
    pub fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<HttpResponse, TransportError> {
        let mut request = self.inner.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }
        Self::execute(request)
    }

    fn execute(request: reqwest::RequestBuilder) -> Result<HttpResponse, TransportError> {
        SHARED_RUNTIME.handle().block_on(async {
            let response = request.send().await.map_err(TransportError::from_reqwest)?;
            let status = response.status().as_u16();
            let body = response.text().await.map_err(TransportError::from_reqwest)?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn display_http_with_status() {
        let err = TransportError::Http {
            status: Some(404),
            message: "test".to_string(),
        };
        assert_eq!(format!("{err}"), "HTTP 404: test");
    }

    #[test]
    fn display_http_without_status() {
        let err = TransportError::Http {
            status: None,
            message: "connection refused".to_string(),
        };
        assert_eq!(format!("{err}"), "HTTP error: connection refused");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn success_range() {
        assert!(response(200, "").is_success());
        assert!(response(201, "").is_success());
        assert!(!response(404, "").is_success());
        assert!(!response(500, "").is_success());
    }

    #[test]
    fn error_for_status_keeps_body() {
        let err = response(400, "bad query").error_for_status().unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert!(err.to_string().contains("bad query"));
    }

    #[test]
    fn json_decode_failure_is_decode_error() {
        let err = response(200, "not json")
            .json::<serde_json::Value>()
            .unwrap_err();
        assert!(matches!(err, TransportError::Decode(_)));
    }

    #[test]
    fn truncate_long_bodies() {
        let long = "x".repeat(400);
        let t = truncate(&long, 300);
        assert_eq!(t.len(), 303);
        assert!(t.ends_with("..."));
        assert_eq!(truncate("short", 300), "short");
    }

    #[test]
    fn default_timeouts() {
        let config = HttpConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.connect_timeout, Duration::from_secs(30));
    }
}
