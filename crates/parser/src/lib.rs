//! Catalog extraction from XML-RPC API documentation pages
//!
//! This crate turns the HTML of a human-oriented API reference page into a
//! [`Catalog`] of `(service, method, parameters, return type, title,
//! description)` entries.
//!
//! ## Extraction Strategy
//!
//! The page is not generated from a schema, so the same fact is encoded in
//! different ways across methods:
//! - Method names come from the "Definition" block, or from the example
//!   request's `methodName` when there is no Definition
//! - Argument types are the first word of a free-text description
//! - Return types are inferred from the example response's first `<value>`
//!
//! ## Usage
//! ```rust,ignore
//! use xmlrpc_stubgen_parser::DocParser;
//!
//! let html = std::fs::read_to_string("xml-rpc.html")?;
//! let parser = DocParser::from_html(&html);
//! let catalog = parser.parse()?;
//! ```

mod extractor;
pub mod heuristics;
mod markup;

pub use extractor::CatalogExtractor;

use scraper::Html;
use tracing::debug;
use xmlrpc_stubgen_common::{Catalog, Result};

/// Documentation page parser
///
/// Holds the parsed HTML tree of one documentation page.
pub struct DocParser {
    document: Html,
}

impl DocParser {
    /// Parse a documentation page from its HTML text
    pub fn from_html(html: &str) -> Self {
        debug!("Parsing {} bytes of HTML", html.len());
        Self {
            document: Html::parse_document(html),
        }
    }

    /// Extract the method catalog
    pub fn parse(&self) -> Result<Catalog> {
        CatalogExtractor::new()?.extract(&self.document)
    }
}

/// Extract the method catalog from HTML text (convenience function)
pub fn extract_catalog(html: &str) -> Result<Catalog> {
    DocParser::from_html(html).parse()
}
