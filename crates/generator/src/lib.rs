//! Python stub generation for XML-RPC method catalogs
//!
//! This crate renders a [`Catalog`] as a Python module: one class per service,
//! one `@staticmethod` per method with a type-annotated signature, a
//! docstring built from the documentation, and a `pass` body.

mod format;
mod templates;
mod type_mapper;

pub use format::{docstring, format_source};
pub use type_mapper::{TypeMapper, NO_RETURN_TYPE};

use serde::Serialize;
use std::fs;
use std::path::Path;
use tera::Tera;
use tracing::debug;
use xmlrpc_stubgen_common::{Catalog, MethodEntry, Parameter, Result, StubGenError};

/// Template view of one service class
#[derive(Debug, Serialize)]
struct ServiceContext<'a> {
    name: &'a str,
    methods: Vec<MethodContext<'a>>,
}

/// Template view of one stub method
#[derive(Debug, Serialize)]
struct MethodContext<'a> {
    name: &'a str,
    /// Signature parameters, without the leading API key
    params: &'a [Parameter],
    return_type: Option<&'a str>,
    docstring: String,
}

impl<'a> MethodContext<'a> {
    fn new(method: &'a MethodEntry) -> Self {
        Self {
            name: &method.name,
            params: method.call_parameters(),
            return_type: method.return_type.as_deref(),
            docstring: docstring(&method.title, &method.description),
        }
    }
}

/// Stub generator
///
/// Transforms a method Catalog into the source of a Python stub module.
pub struct StubGenerator {
    catalog: Catalog,
    tera: Tera,
}

impl StubGenerator {
    /// Create a new stub generator from a Catalog
    pub fn new(catalog: Catalog) -> Result<Self> {
        let tera = templates::load_templates()?;
        Ok(Self { catalog, tera })
    }

    /// Render the stub module source
    pub fn render(&self) -> Result<String> {
        let context = self.create_context();
        let rendered = self
            .tera
            .render(templates::STUBS_TEMPLATE, &context)
            .map_err(template_error)?;

        debug!(
            "Rendered {} services, {} methods",
            self.catalog.service_count(),
            self.catalog.method_count()
        );
        Ok(format_source(&rendered))
    }

    /// Render the stub module and write it to `output_path`
    pub fn generate_to_file(&self, output_path: &Path) -> Result<()> {
        let source = self.render()?;

        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                StubGenError::Generation(format!(
                    "Failed to create output directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        fs::write(output_path, source).map_err(|e| {
            StubGenError::Generation(format!(
                "Failed to write {}: {}",
                output_path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// The catalog being rendered
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Create template context from the Catalog, services and methods in
    /// ascending name order
    fn create_context(&self) -> tera::Context {
        let services: Vec<ServiceContext<'_>> = self
            .catalog
            .services()
            .map(|(name, methods)| ServiceContext {
                name,
                methods: methods.map(MethodContext::new).collect(),
            })
            .collect();

        let mut context = tera::Context::new();
        context.insert("services", &services);
        context
    }
}

/// Flatten a tera error and its causes into one message
fn template_error(error: tera::Error) -> StubGenError {
    use std::error::Error as _;

    let mut message = format!("Template error: {}", error);
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(&format!(": {}", cause));
        source = cause.source();
    }
    StubGenError::Generation(message)
}

/// Render stubs for a catalog (convenience function)
pub fn render_stubs(catalog: Catalog) -> Result<String> {
    StubGenerator::new(catalog)?.render()
}
