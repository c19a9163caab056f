//! Where the documentation page comes from

use reqwest::blocking::Client;
use std::fs;
use std::path::PathBuf;
use tracing::info;
use xmlrpc_stubgen_common::{Result, StubGenError};

/// Location of the XML-RPC API reference
pub const DEFAULT_DOCS_URL: &str = "https://developer.infusionsoft.com/docs/xml-rpc/";

/// A documentation page that can be fetched exactly once per run
#[cfg_attr(test, mockall::automock)]
pub trait DocumentSource {
    /// Fetch the page's HTML
    fn fetch(&self) -> Result<String>;

    /// Human-readable location, for progress output
    fn describe(&self) -> String;
}

/// Fetches the page over HTTP(S)
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new(DEFAULT_DOCS_URL)
    }
}

impl DocumentSource for HttpSource {
    /// Single GET with no retry; any non-success status is an error
    fn fetch(&self) -> Result<String> {
        let client = Client::builder()
            .user_agent(concat!("xmlrpc-stubgen/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| StubGenError::Fetch(format!("Failed to build HTTP client: {}", e)))?;

        let response = client
            .get(&self.url)
            .send()
            .map_err(|e| StubGenError::Fetch(format!("Failed to fetch {}: {}", self.url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StubGenError::Fetch(format!(
                "Failed to fetch {}: HTTP {}",
                self.url, status
            )));
        }

        let body = response.text().map_err(|e| {
            StubGenError::Fetch(format!("Failed to read body of {}: {}", self.url, e))
        })?;
        info!("Fetched {} bytes from {}", body.len(), self.url);
        Ok(body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Reads a saved copy of the page from disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentSource for FileSource {
    fn fetch(&self) -> Result<String> {
        let body = fs::read_to_string(&self.path).map_err(|e| {
            StubGenError::Fetch(format!("Failed to read {}: {}", self.path.display(), e))
        })?;
        info!("Read {} bytes from {}", body.len(), self.path.display());
        Ok(body)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
