//! In-memory catalog of documented RPC methods
//!
//! The catalog is built once per run by the extractor and consumed by the
//! stub emitter. Services and methods are keyed by name, so iteration is
//! always lexicographic at both levels.

use serde::{Deserialize, Serialize};
use std::collections::btree_map::{BTreeMap, Values};

/// One formal argument of an RPC method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Code-safe, camel-cased argument name
    pub identifier: String,

    /// Wire-protocol type token (e.g. "string", "i4", "struct")
    pub type_token: String,
}

impl Parameter {
    pub fn new(identifier: impl Into<String>, type_token: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            type_token: type_token.into(),
        }
    }
}

/// One documented RPC method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodEntry {
    /// Namespace the method belongs to (e.g. "ContactService")
    pub service: String,

    /// Bare method name; may itself contain dots
    pub name: String,

    /// Arguments in documented (positional) order, including the leading
    /// authentication key
    pub parameters: Vec<Parameter>,

    /// Wire-protocol return type token; `None` when the method returns nothing
    pub return_type: Option<String>,

    /// Short summary, possibly empty
    pub title: String,

    /// Paragraphs separated by a blank line, possibly empty
    pub description: String,
}

impl MethodEntry {
    /// Fully-qualified `service.name` form
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.service, self.name)
    }

    /// Parameters exposed in a generated signature.
    ///
    /// The first documented parameter is the API key, which every call takes
    /// and which the client supplies on its own.
    pub fn call_parameters(&self) -> &[Parameter] {
        self.parameters.get(1..).unwrap_or(&[])
    }
}

/// Mapping from service name to method name to method entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    services: BTreeMap<String, BTreeMap<String, MethodEntry>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry keyed by `(service, name)`.
    ///
    /// A later entry for the same key replaces the earlier one, which is
    /// returned.
    pub fn insert(&mut self, entry: MethodEntry) -> Option<MethodEntry> {
        self.services
            .entry(entry.service.clone())
            .or_default()
            .insert(entry.name.clone(), entry)
    }

    pub fn get(&self, service: &str, method: &str) -> Option<&MethodEntry> {
        self.services.get(service)?.get(method)
    }

    /// Services in ascending name order, each with its methods in ascending
    /// name order
    pub fn services(&self) -> impl Iterator<Item = (&str, Values<'_, String, MethodEntry>)> {
        self.services
            .iter()
            .map(|(name, methods)| (name.as_str(), methods.values()))
    }

    pub fn service_count(&self) -> usize {
        self.services.len()
    }

    pub fn method_count(&self) -> usize {
        self.services.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(service: &str, name: &str, title: &str) -> MethodEntry {
        MethodEntry {
            service: service.to_string(),
            name: name.to_string(),
            parameters: vec![Parameter::new("privateKey", "string")],
            return_type: None,
            title: title.to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_insert_and_get() {
        let mut catalog = Catalog::new();
        assert!(catalog.is_empty());

        catalog.insert(entry("ContactService", "add", "Create a Contact"));
        catalog.insert(entry("ContactService", "load", "Retrieve a Contact"));
        catalog.insert(entry("DataService", "query", "Query a Table"));

        assert_eq!(catalog.service_count(), 2);
        assert_eq!(catalog.method_count(), 3);
        assert_eq!(
            catalog.get("ContactService", "load").map(|e| e.title.as_str()),
            Some("Retrieve a Contact")
        );
        assert!(catalog.get("ContactService", "delete").is_none());
    }

    #[test]
    fn test_last_insert_wins() {
        let mut catalog = Catalog::new();
        assert!(catalog.insert(entry("DataService", "add", "first")).is_none());

        let previous = catalog.insert(entry("DataService", "add", "second"));
        assert_eq!(previous.map(|e| e.title), Some("first".to_string()));
        assert_eq!(catalog.method_count(), 1);
        assert_eq!(catalog.get("DataService", "add").unwrap().title, "second");
    }

    #[test]
    fn test_services_iterate_sorted() {
        let mut catalog = Catalog::new();
        catalog.insert(entry("ProductService", "update", ""));
        catalog.insert(entry("ContactService", "merge", ""));
        catalog.insert(entry("ContactService", "add", ""));

        let order: Vec<String> = catalog
            .services()
            .flat_map(|(_, methods)| methods.map(MethodEntry::qualified_name))
            .collect();
        assert_eq!(
            order,
            vec![
                "ContactService.add",
                "ContactService.merge",
                "ProductService.update"
            ]
        );
    }

    #[test]
    fn test_call_parameters_drop_api_key() {
        let mut method = entry("ContactService", "add", "");
        assert!(method.call_parameters().is_empty());

        method.parameters.push(Parameter::new("data", "struct"));
        assert_eq!(method.call_parameters(), &[Parameter::new("data", "struct")]);

        method.parameters.clear();
        assert!(method.call_parameters().is_empty());
    }

    #[test]
    fn test_catalog_serializes_as_nested_map() {
        let mut catalog = Catalog::new();
        catalog.insert(entry("ContactService", "add", "Create"));

        let json = serde_json::to_value(&catalog).unwrap();
        assert_eq!(json["ContactService"]["add"]["title"], "Create");
        assert!(json["ContactService"]["add"]["return_type"].is_null());
    }
}
