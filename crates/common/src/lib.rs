//! Common types and utilities for xmlrpc-stubgen
//!
//! This crate contains the method catalog shared by the extractor and the
//! stub emitter, plus the error type used across the parser, generator,
//! and CLI components.

mod catalog;

pub use catalog::{Catalog, MethodEntry, Parameter};

use thiserror::Error;

/// Errors that can occur while turning a documentation page into stubs
#[derive(Error, Debug)]
pub enum StubGenError {
    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for stub generation operations
pub type Result<T> = std::result::Result<T, StubGenError>;
