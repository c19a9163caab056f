//! Docstring assembly and best-effort source tidying

/// Indentation of a method body inside a class
const BODY_INDENT: &str = "        ";

/// Most consecutive blank lines allowed in the output
const MAX_BLANK_LINES: usize = 2;

/// Build the text between a stub's opening and closing `"""`.
///
/// The title comes first followed by a blank line, then every description
/// line indented to the method body. Backslashes and triple quotes are
/// escaped so the documentation reads back verbatim.
pub fn docstring(title: &str, description: &str) -> String {
    let mut parts = Vec::new();
    if !title.is_empty() {
        parts.push(format!("{}\n", title));
    }
    parts.extend(
        description
            .split('\n')
            .map(|line| format!("{}{}", BODY_INDENT, line).trim_end().to_string()),
    );

    escape_docstring(parts.join("\n").trim())
}

fn escape_docstring(text: &str) -> String {
    text.replace('\\', "\\\\").replace("\"\"\"", "\\\"\"\"")
}

/// Tidy rendered source.
///
/// Trailing whitespace is removed from every line, runs of blank lines are
/// capped, leading blank lines are dropped and the text ends with exactly one
/// newline.
pub fn format_source(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut blank_run = 0;

    for line in source.lines().map(str::trim_end) {
        if line.is_empty() {
            blank_run += 1;
            if out.is_empty() || blank_run > MAX_BLANK_LINES {
                continue;
            }
        } else {
            blank_run = 0;
        }
        out.push_str(line);
        out.push('\n');
    }

    let trimmed_len = out.trim_end().len();
    out.truncate(trimmed_len);
    out.push('\n');
    out
}
