//! Where the catalog CSV comes from.

use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use crate::error::{IngestError, Result};

/// User agent string for catalog requests.
const USER_AGENT_VALUE: &str = concat!("sonocat/", env!("CARGO_PKG_VERSION"));

/// Resource locator for a catalog CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    /// An `http://` or `https://` URL.
    Url(String),
    /// A local file.
    Path(PathBuf),
    /// Content already in memory.
    Inline(Vec<u8>),
}

impl DatasetSource {
    /// Fetches the raw CSV bytes. This is the loader's only suspension point.
    pub async fn fetch(&self) -> Result<Vec<u8>> {
        match self {
            Self::Url(url) => fetch_url(url).await,
            Self::Path(path) => tokio::fs::read(path).await.map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    IngestError::FileNotFound { path: path.clone() }
                } else {
                    IngestError::FileRead {
                        path: path.clone(),
                        source: e,
                    }
                }
            }),
            Self::Inline(bytes) => Ok(bytes.clone()),
        }
    }
}

async fn fetch_url(url: &str) -> Result<Vec<u8>> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

    let fetch_err = |source: reqwest::Error| IngestError::Fetch {
        url: url.to_string(),
        source,
    };

    let client = reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .map_err(fetch_err)?;

    tracing::debug!(url, "fetching catalog");

    let response = client.get(url).send().await.map_err(fetch_err)?;
    let status = response.status();
    if !status.is_success() {
        return Err(IngestError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let bytes = response.bytes().await.map_err(fetch_err)?;
    Ok(bytes.to_vec())
}

impl FromStr for DatasetSource {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Ok(Self::Url(trimmed.to_string()))
        } else {
            Ok(Self::Path(PathBuf::from(trimmed)))
        }
    }
}

impl From<PathBuf> for DatasetSource {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{url}"),
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Inline(bytes) => write!(f, "<inline {} bytes>", bytes.len()),
        }
    }
}
