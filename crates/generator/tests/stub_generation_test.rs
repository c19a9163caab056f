//! Integration test for stub generation

use tempfile::TempDir;
use xmlrpc_stubgen_common::{Catalog, MethodEntry, Parameter};
use xmlrpc_stubgen_generator::{render_stubs, StubGenerator};

fn method(
    qualified_name: &str,
    parameters: &[(&str, &str)],
    return_type: Option<&str>,
    title: &str,
    description: &str,
) -> MethodEntry {
    let (service, name) = qualified_name.split_once('.').unwrap();
    MethodEntry {
        service: service.to_string(),
        name: name.to_string(),
        parameters: parameters
            .iter()
            .map(|(identifier, token)| Parameter::new(*identifier, *token))
            .collect(),
        return_type: return_type.map(str::to_string),
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn sample_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    // Inserted out of order on purpose
    catalog.insert(method(
        "FunnelService.achieveGoal",
        &[("key", "string")],
        None,
        "Achieve a Goal",
        "",
    ));
    catalog.insert(method(
        "ContactService.load",
        &[
            ("key", "string"),
            ("id", "int"),
            ("selectedFields", "array"),
        ],
        Some("struct"),
        "Retrieve a Contact",
        "",
    ));
    catalog.insert(method(
        "ContactService.add",
        &[("key", "string"), ("data", "struct")],
        Some("i4"),
        "Create a Contact",
        "Creates a contact.\n\nUse addWithDupCheck.",
    ));
    catalog.insert(method(
        "APIEmailService.optIn",
        &[
            ("key", "string"),
            ("email", "string"),
            ("optInReason", "string"),
        ],
        Some("boolean"),
        "",
        "Opts an email in.",
    ));
    catalog
}

const EXPECTED: &str = r#"from typing import List, Dict
from datetime import datetime, date


class APIEmailService:
    @staticmethod
    def optIn(email: str, optInReason: str) -> bool:
        """Opts an email in.
        """
        pass


class ContactService:
    @staticmethod
    def add(data: Dict[str, any]) -> int:
        """Create a Contact

        Creates a contact.

        Use addWithDupCheck.
        """
        pass

    @staticmethod
    def load(id: int, selectedFields: List) -> Dict[str, any]:
        """Retrieve a Contact
        """
        pass


class FunnelService:
    @staticmethod
    def achieveGoal() -> None:
        """Achieve a Goal
        """
        pass
"#;

#[test]
fn test_render_sample_catalog() {
    let source = render_stubs(sample_catalog()).unwrap();
    assert_eq!(source, EXPECTED);
}

#[test]
fn test_render_is_byte_identical_across_runs() {
    let first = render_stubs(sample_catalog()).unwrap();
    let second = render_stubs(sample_catalog()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_single_parameter_method_has_empty_signature() {
    let source = render_stubs(sample_catalog()).unwrap();
    assert!(source.contains("    def achieveGoal() -> None:\n"));
}

#[test]
fn test_unknown_types_pass_through() {
    let mut catalog = Catalog::new();
    catalog.insert(method(
        "FileService.uploadFile",
        &[("key", "string"), ("fileData", "base64")],
        Some("Base64Blob"),
        "Upload a File",
        "",
    ));

    let source = render_stubs(catalog).unwrap();
    assert!(
        source.contains("def uploadFile(fileData: base64) -> Base64Blob:"),
        "{}",
        source
    );
}

#[test]
fn test_lower_cased_return_tag_is_mapped() {
    let mut catalog = Catalog::new();
    catalog.insert(method(
        "DataService.getTemporaryKey",
        &[("key", "string")],
        Some("datetime.iso8601"),
        "",
        "",
    ));

    let source = render_stubs(catalog).unwrap();
    assert!(source.contains("def getTemporaryKey() -> datetime:"), "{}", source);
}

#[test]
fn test_generate_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("stubs").join("infusionsoft.pyi");

    let generator = StubGenerator::new(sample_catalog()).unwrap();
    let result = generator.generate_to_file(&output_path);
    assert!(result.is_ok(), "Generation failed: {:?}", result);

    let written = std::fs::read_to_string(&output_path).unwrap();
    assert_eq!(written, EXPECTED);
    assert_eq!(generator.catalog().method_count(), 4);
}
