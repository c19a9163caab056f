//! Type mapping from XML-RPC wire types to Python type annotations

/// Wire type token to Python annotation
const TYPE_MAP: &[(&str, &str)] = &[
    ("i4", "int"),
    ("integer", "int"),
    ("double", "float"),
    ("dateTime", "datetime"),
    ("dateTime.iso8601", "datetime"),
    ("array", "List"),
    ("string", "str"),
    ("struct", "Dict[str, any]"),
    ("boolean", "bool"),
];

/// Annotation for a method without a return value
pub const NO_RETURN_TYPE: &str = "None";

/// Maps wire type tokens to Python annotations
pub struct TypeMapper;

impl TypeMapper {
    /// Map a wire type token to a Python annotation
    ///
    /// Tokens parsed out of example XML arrive lower-cased, so a token that
    /// misses the table exactly is retried ignoring ASCII case. Anything
    /// still unknown is taken to be a valid annotation already and returned
    /// unchanged.
    ///
    /// # Examples
    /// ```
    /// use xmlrpc_stubgen_generator::TypeMapper;
    ///
    /// assert_eq!(TypeMapper::map_type("i4"), "int");
    /// assert_eq!(TypeMapper::map_type("struct"), "Dict[str, any]");
    /// assert_eq!(TypeMapper::map_type("datetime.iso8601"), "datetime");
    /// assert_eq!(TypeMapper::map_type("base64"), "base64");
    /// ```
    pub fn map_type(token: &str) -> &str {
        TYPE_MAP
            .iter()
            .find(|(wire, _)| *wire == token)
            .or_else(|| {
                TYPE_MAP
                    .iter()
                    .find(|(wire, _)| wire.eq_ignore_ascii_case(token))
            })
            .map(|(_, python)| *python)
            .unwrap_or(token)
    }

    /// Map an optional return type token, `None` meaning no return value
    pub fn map_return_type(token: Option<&str>) -> &str {
        token.map(Self::map_type).unwrap_or(NO_RETURN_TYPE)
    }
}
