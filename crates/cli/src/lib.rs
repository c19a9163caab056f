//! Generate typed Python stubs from the XML-RPC API documentation page
//!
//! The pipeline is one fetch, one parse, one extraction pass and one
//! emission pass, run strictly in sequence. Any failure aborts the run and
//! no source text is produced.
//!
//! ## Usage
//! ```rust,ignore
//! let source = xmlrpc_stubgen::generate_stubs()?;
//! std::fs::write("infusionsoft_stubs.py", source)?;
//! ```

mod source;

pub use source::{DocumentSource, FileSource, HttpSource, DEFAULT_DOCS_URL};

use tracing::info;
use xmlrpc_stubgen_common::{Catalog, Result};
use xmlrpc_stubgen_generator::render_stubs;
use xmlrpc_stubgen_parser::extract_catalog;

/// Fetch the documentation page from its default URL and render stubs
pub fn generate_stubs() -> Result<String> {
    generate_stubs_from(&HttpSource::default())
}

/// Fetch the documentation page from `source` and render stubs
pub fn generate_stubs_from(source: &dyn DocumentSource) -> Result<String> {
    let catalog = extract_catalog_from(source)?;
    render_stubs(catalog)
}

/// Fetch the documentation page from `source` and extract its catalog
pub fn extract_catalog_from(source: &dyn DocumentSource) -> Result<Catalog> {
    info!("Fetching documentation from {}", source.describe());
    let html = source.fetch()?;
    extract_catalog(&html)
}
