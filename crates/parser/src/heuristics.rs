//! Small string heuristics applied to documentation text
//!
//! The documentation page is written for people, so argument labels and type
//! declarations are free text. Each rule that turns that text into something
//! usable lives here as a pure function.

/// Turn an argument label such as `"Contact Data:"` into an identifier
/// (`"contactData"`).
pub fn label_to_identifier(label: &str) -> String {
    let label = label.trim().trim_end_matches(':');
    let compact: String = label.chars().filter(|c| !c.is_whitespace()).collect();
    camel_case(&compact)
}

/// Camel-case an identifier.
///
/// A single leading `-`, `_` or `.` is dropped, the first character is
/// lower-cased, and any separator (`-`, `_`, `.`, whitespace) followed by an
/// ASCII lowercase letter is removed with that letter upper-cased.
/// Everything else is left as is, so `"ContactID"` becomes `"contactID"`.
///
/// # Examples
/// ```
/// use xmlrpc_stubgen_parser::heuristics::camel_case;
///
/// assert_eq!(camel_case("ContactData"), "contactData");
/// assert_eq!(camel_case("order_id"), "orderId");
/// assert_eq!(camel_case("_key"), "key");
/// ```
pub fn camel_case(s: &str) -> String {
    let s = s.strip_prefix(['-', '_', '.']).unwrap_or(s);

    let mut chars = s.chars().peekable();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut out: String = first.to_lowercase().collect();
    while let Some(c) = chars.next() {
        if is_separator(c) {
            if let Some(next) = chars.next_if(char::is_ascii_lowercase) {
                out.push(next.to_ascii_uppercase());
                continue;
            }
        }
        out.push(c);
    }
    out
}

fn is_separator(c: char) -> bool {
    matches!(c, '-' | '_' | '.') || c.is_whitespace()
}

/// Text before the first newline
pub fn first_line(text: &str) -> &str {
    text.split('\n').next().unwrap_or_default()
}

/// Wire type token declared by an argument description.
///
/// Descriptions read like `"string The contact's email"`: the type is the
/// first word of the first line.
pub fn type_token(description: &str) -> Option<&str> {
    first_line(description.trim()).split_whitespace().next()
}

/// Split `"Service.method"` at the first dot.
///
/// The method half keeps any further dots verbatim.
pub fn split_qualified_name(name: &str) -> Option<(&str, &str)> {
    name.trim().split_once('.')
}
