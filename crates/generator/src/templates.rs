//! Template loading and management

use crate::type_mapper::TypeMapper;
use std::collections::HashMap;
use tera::{Tera, Value};
use xmlrpc_stubgen_common::{Result, StubGenError};

/// Name of the Python stub module template
pub const STUBS_TEMPLATE: &str = "stubs.py";

/// Load all templates
pub fn load_templates() -> Result<Tera> {
    let mut tera = Tera::default();

    tera.register_filter("python_type", python_type_filter);

    tera.add_raw_template(STUBS_TEMPLATE, include_str!("../templates/stubs.py.tera"))
        .map_err(|e| {
            StubGenError::Generation(format!("Failed to load stubs.py template: {}", e))
        })?;

    Ok(tera)
}

/// Filter to convert a wire type token to a Python annotation
fn python_type_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let token = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("python_type filter expects a string"))?;

    Ok(Value::String(TypeMapper::map_type(token).to_string()))
}
