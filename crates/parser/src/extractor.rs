//! Walks the documentation page and recovers the method catalog
//!
//! ## Page layout
//!
//! Each documented method is an element with class `method` and an `id`.
//! Inside it:
//! - `h3` holds the title and `.method-description > p` the description
//! - `.argument` rows hold a label column (`.col-sm-4 b`) and a description
//!   column (`.col-sm-8`) whose first word is the argument's wire type
//! - `.method-declaration.lang-xml` ("Definition") holds `Service.method`
//! - `.method-request.lang-xml` / `.method-response.lang-xml` hold escaped
//!   example XML
//!
//! The same page embeds an interactive API explorer that reuses the `method`
//! and `argument` classes. Its sections carry no `.lang-xml` example and its
//! argument rows no `.col-sm-4` column, which is how they are told apart.

use crate::heuristics;
use crate::markup::{self, find_first, text_of};
use scraper::{ElementRef, Html, Selector};
use std::fmt;
use tracing::{debug, info};
use xmlrpc_stubgen_common::{Catalog, MethodEntry, Parameter, Result, StubGenError};

/// Section ids that describe the API in general rather than a method
const EXCLUDED_SECTION_PREFIXES: [&str; 2] = ["introduction", "authentication"];

/// Parameters with this identifier are documented as "array" but are really
/// associative arrays, which XML-RPC calls `struct`
const STRUCT_PARAMETER: &str = "data";

/// Return type token implied by a bare `<value>text</value>`
const IMPLICIT_VALUE_TYPE: &str = "string";

/// Compiled selectors for every node the extractor looks at
struct Selectors {
    method: Selector,
    example_xml: Selector,
    argument: Selector,
    argument_label: Selector,
    label_text: Selector,
    argument_description: Selector,
    response: Selector,
    declaration: Selector,
    request: Selector,
    value: Selector,
    method_name: Selector,
    title: Selector,
    description: Selector,
}

impl Selectors {
    fn compile() -> Result<Self> {
        Ok(Self {
            method: markup::selector(".method[id]")?,
            example_xml: markup::selector(".lang-xml")?,
            argument: markup::selector(".argument")?,
            argument_label: markup::selector(".col-sm-4")?,
            label_text: markup::selector("b")?,
            argument_description: markup::selector(".col-sm-8")?,
            response: markup::selector(".method-response.lang-xml")?,
            declaration: markup::selector(".method-declaration.lang-xml")?,
            request: markup::selector(".method-request.lang-xml")?,
            value: markup::selector("value")?,
            method_name: markup::selector("methodname")?,
            title: markup::selector("h3")?,
            description: markup::selector(".method-description")?,
        })
    }
}

/// Identifies a method section in error messages
struct SectionRef<'a> {
    position: usize,
    id: &'a str,
    qualified_name: Option<String>,
}

impl fmt::Display for SectionRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.qualified_name {
            Some(name) => write!(f, "`{}` (section #{}, id `{}`)", name, self.position, self.id),
            None => write!(f, "section #{} (id `{}`)", self.position, self.id),
        }
    }
}

/// Extracts a [`Catalog`] from a parsed documentation page
pub struct CatalogExtractor {
    selectors: Selectors,
}

impl CatalogExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            selectors: Selectors::compile()?,
        })
    }

    /// Extract every documented method.
    ///
    /// Fails if the page has no method sections at all, or if any method
    /// section is missing a node its name cannot be recovered without.
    pub fn extract(&self, document: &Html) -> Result<Catalog> {
        let mut catalog = Catalog::new();
        let mut sections = 0;

        for element in document.select(&self.selectors.method) {
            let Some(id) = element.value().id() else {
                continue;
            };
            if EXCLUDED_SECTION_PREFIXES
                .iter()
                .any(|prefix| id.starts_with(prefix))
            {
                continue;
            }

            sections += 1;
            let mut section = SectionRef {
                position: sections,
                id,
                qualified_name: None,
            };

            if find_first(element, &self.selectors.example_xml).is_none() {
                debug!("Skipping {}: no example XML (API explorer widget)", section);
                continue;
            }

            let entry = self.extract_method(element, &mut section)?;
            debug!(
                "Extracted {} with {} parameters",
                section,
                entry.parameters.len()
            );
            if let Some(previous) = catalog.insert(entry) {
                debug!(
                    "{} replaces an earlier entry for {}",
                    section,
                    previous.qualified_name()
                );
            }
        }

        if catalog.is_empty() {
            return Err(StubGenError::Extraction(format!(
                "No method sections found ({} candidate sections); the page layout is not recognised",
                sections
            )));
        }

        info!(
            "Extracted {} methods across {} services",
            catalog.method_count(),
            catalog.service_count()
        );
        Ok(catalog)
    }

    fn extract_method(
        &self,
        element: ElementRef<'_>,
        section: &mut SectionRef<'_>,
    ) -> Result<MethodEntry> {
        let qualified_name = self.extract_qualified_name(element, section)?;
        section.qualified_name = Some(qualified_name.clone());

        let (service, name) = heuristics::split_qualified_name(&qualified_name)
            .filter(|(service, name)| !service.is_empty() && !name.is_empty())
            .ok_or_else(|| {
                StubGenError::Extraction(format!(
                    "{}: method name is not of the form `Service.method`",
                    section
                ))
            })?;

        Ok(MethodEntry {
            service: service.to_string(),
            name: name.to_string(),
            parameters: self.extract_parameters(element, section)?,
            return_type: self.extract_return_type(element),
            title: self.extract_title(element),
            description: self.extract_description(element),
        })
    }

    /// Fully-qualified method name, from the "Definition" block when there is
    /// one and from the example request otherwise
    fn extract_qualified_name(
        &self,
        element: ElementRef<'_>,
        section: &SectionRef<'_>,
    ) -> Result<String> {
        if let Some(definition) = find_first(element, &self.selectors.declaration) {
            let name = text_of(definition);
            if !name.is_empty() {
                return Ok(name);
            }
        }

        let request = find_first(element, &self.selectors.request).ok_or_else(|| {
            StubGenError::Extraction(format!(
                "{}: no Definition block and no example request to read the method name from",
                section
            ))
        })?;

        let request_xml = markup::parse_markup(&text_of(request));
        markup::find_in_document(&request_xml, &self.selectors.method_name)
            .map(text_of)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| {
                StubGenError::Extraction(format!(
                    "{}: example request has no methodName",
                    section
                ))
            })
    }

    fn extract_parameters(
        &self,
        element: ElementRef<'_>,
        section: &SectionRef<'_>,
    ) -> Result<Vec<Parameter>> {
        let mut parameters = Vec::new();

        for argument in element.select(&self.selectors.argument) {
            let Some(label_column) = find_first(argument, &self.selectors.argument_label) else {
                debug!("{}: skipping argument row without a label column", section);
                continue;
            };

            let label = find_first(label_column, &self.selectors.label_text)
                .map(text_of)
                .unwrap_or_else(|| text_of(label_column));
            let identifier = heuristics::label_to_identifier(&label);
            if identifier.is_empty() {
                return Err(StubGenError::Extraction(format!(
                    "{}: argument #{} has an empty label",
                    section,
                    parameters.len() + 1
                )));
            }

            let description = find_first(argument, &self.selectors.argument_description)
                .map(text_of)
                .unwrap_or_default();
            let declared = heuristics::type_token(&description).ok_or_else(|| {
                StubGenError::Extraction(format!(
                    "{}: argument `{}` has no type in its description",
                    section, identifier
                ))
            })?;

            let type_token = if identifier == STRUCT_PARAMETER {
                "struct"
            } else {
                declared
            };

            parameters.push(Parameter::new(identifier, type_token));
        }

        Ok(parameters)
    }

    /// Return type inferred from the example response's first `<value>`
    fn extract_return_type(&self, element: ElementRef<'_>) -> Option<String> {
        let response = find_first(element, &self.selectors.response)?;
        let response_xml = markup::parse_markup(&text_of(response));
        let value = markup::find_in_document(&response_xml, &self.selectors.value)?;

        let token = match markup::first_child_element(value) {
            Some(typed) => typed.value().name().to_string(),
            None => IMPLICIT_VALUE_TYPE.to_string(),
        };
        Some(token)
    }

    fn extract_title(&self, element: ElementRef<'_>) -> String {
        find_first(element, &self.selectors.title)
            .and_then(markup::first_text)
            .unwrap_or_default()
            .to_string()
    }

    fn extract_description(&self, element: ElementRef<'_>) -> String {
        let Some(description) = find_first(element, &self.selectors.description) else {
            return String::new();
        };

        markup::child_elements(description, "p")
            .map(text_of)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
