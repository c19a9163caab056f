//! Optional-lookup helpers over the parsed HTML tree
//!
//! Every query returns an `Option` so callers must decide what an absent node
//! means at each site.

use scraper::{ElementRef, Html, Selector};
use xmlrpc_stubgen_common::{Result, StubGenError};

/// Compile a CSS selector
pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| StubGenError::Extraction(format!("Invalid selector `{}`: {}", css, e)))
}

/// Parse markup text (e.g. the body of an example request) into its own tree.
///
/// Tag names come back lower-cased.
pub fn parse_markup(text: &str) -> Html {
    Html::parse_fragment(text)
}

/// First descendant of `element` matching `selector`
pub fn find_first<'a>(element: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    element.select(selector).next()
}

/// First element of a whole document matching `selector`
pub fn find_in_document<'a>(document: &'a Html, selector: &Selector) -> Option<ElementRef<'a>> {
    document.select(selector).next()
}

/// Concatenated text of all descendants, trimmed
pub fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// First non-blank text node under `element`, trimmed
pub fn first_text(element: ElementRef<'_>) -> Option<&str> {
    element.text().map(str::trim).find(|t| !t.is_empty())
}

/// First direct child that is an element
pub fn first_child_element(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element.children().find_map(ElementRef::wrap)
}

/// Direct child elements with the given tag name
pub fn child_elements<'a>(
    element: ElementRef<'a>,
    tag: &'a str,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    element
        .children()
        .filter_map(ElementRef::wrap)
        .filter(move |child| child.value().name() == tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root(document: &Html) -> ElementRef<'_> {
        document.root_element()
    }

    #[test]
    fn test_invalid_selector_is_an_error() {
        assert!(selector("div..broken").is_err());
        assert!(selector(".method-response.lang-xml").is_ok());
    }

    #[test]
    fn test_find_first_absent() {
        let doc = parse_markup("<div><p>one</p></div>");
        let h3 = selector("h3").unwrap();
        assert!(find_first(root(&doc), &h3).is_none());
    }

    #[test]
    fn test_text_of_trims_and_joins() {
        let doc = parse_markup("<p>  Creates a <em>new</em> contact  </p>");
        let p = find_in_document(&doc, &selector("p").unwrap()).unwrap();
        assert_eq!(text_of(p), "Creates a new contact");
    }

    #[test]
    fn test_first_text_skips_blank_nodes() {
        let doc = parse_markup("<h3>\n  <span>  </span> Create a Contact <small>beta</small></h3>");
        let h3 = find_in_document(&doc, &selector("h3").unwrap()).unwrap();
        assert_eq!(first_text(h3), Some("Create a Contact"));
    }

    #[test]
    fn test_first_child_element() {
        let doc = parse_markup("<value>\n  <int>42</int></value><value>hello</value>");
        let value_sel = selector("value").unwrap();
        let mut values = doc.select(&value_sel);

        let typed = values.next().unwrap();
        assert_eq!(first_child_element(typed).map(|e| e.value().name()), Some("int"));

        let bare = values.next().unwrap();
        assert!(first_child_element(bare).is_none());
    }

    #[test]
    fn test_tag_names_are_lower_cased() {
        let doc = parse_markup("<methodCall><methodName>ContactService.add</methodName></methodCall>");
        let name = find_in_document(&doc, &selector("methodname").unwrap()).unwrap();
        assert_eq!(text_of(name), "ContactService.add");
    }

    #[test]
    fn test_child_elements_are_direct_only() {
        let doc = parse_markup("<div class=\"d\"><p>a</p><div><p>nested</p></div><p>b</p></div>");
        let div = find_in_document(&doc, &selector(".d").unwrap()).unwrap();
        let texts: Vec<String> = child_elements(div, "p").map(text_of).collect();
        assert_eq!(texts, vec!["a", "b"]);
    }
}
