//! Platform helpers: where we run and how static files are fetched.

use super::error::{LoadError, LoadResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Native,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Native
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Native => "native",
        }
    }
}

/// Fetch a static text resource relative to the hosting page.
#[cfg(target_arch = "wasm32")]
pub async fn fetch_text(location: &str) -> LoadResult<String> {
    use gloo_net::http::Request;

    let http_error = |reason: String| LoadError::Http {
        location: location.to_string(),
        reason,
    };

    let response = Request::get(location)
        .send()
        .await
        .map_err(|err| http_error(err.to_string()))?;

    if !response.ok() {
        return Err(http_error(format!(
            "HTTP {} {}",
            response.status(),
            response.status_text()
        )));
    }

    response
        .text()
        .await
        .map_err(|err| http_error(err.to_string()))
}

/// Read a dataset from disk.
#[cfg(not(target_arch = "wasm32"))]
pub async fn fetch_text(location: &str) -> LoadResult<String> {
    tokio::fs::read_to_string(location)
        .await
        .map_err(|source| LoadError::Io {
            location: location.to_string(),
            source,
        })
}
