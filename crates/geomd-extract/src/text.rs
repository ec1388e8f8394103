//! Text normalisation for extracted values.
//!
//! Vendor exports frequently carry double-escaped HTML inside text
//! content (abstracts and use limitations especially), so after the
//! document parser has decoded the XML layer we decode one more entity
//! layer, strip any markup tags that surfaced, and collapse whitespace.

use std::borrow::Cow;
use std::sync::LazyLock;

use quick_xml::escape::{resolve_xml_entity, unescape_with};
use regex::Regex;
use roxmltree::Node;

static MARKUP_TAG: LazyLock<Regex> = LazyLock::new(|| {
    // the pattern is a literal and always compiles
    #[allow(clippy::unwrap_used)]
    Regex::new(r"<[^>]+>").unwrap()
});

/// Named HTML entities that are not part of the XML predefined set.
/// Anything unlisted leaves the reference untouched.
fn html_entity(name: &str) -> Option<&'static str> {
    let decoded = match name {
        "nbsp" => "\u{a0}",
        "ndash" => "\u{2013}",
        "mdash" => "\u{2014}",
        "lsquo" => "\u{2018}",
        "rsquo" => "\u{2019}",
        "ldquo" => "\u{201c}",
        "rdquo" => "\u{201d}",
        "hellip" => "\u{2026}",
        "pound" => "\u{a3}",
        "euro" => "\u{20ac}",
        "deg" => "\u{b0}",
        "copy" => "\u{a9}",
        "reg" => "\u{ae}",
        "times" => "\u{d7}",
        "middot" => "\u{b7}",
        "bull" => "\u{2022}",
        _ => return None,
    };
    Some(decoded)
}

/// Decode one layer of entity escapes. Unresolvable references leave
/// the input unchanged rather than failing the field.
fn decode_entities(text: &str) -> Cow<'_, str> {
    match unescape_with(text, |name| {
        resolve_xml_entity(name).or_else(|| html_entity(name))
    }) {
        Ok(decoded) => decoded,
        Err(_) => Cow::Borrowed(text),
    }
}

/// Normalise a raw string: decode entities, strip markup tags, collapse
/// whitespace runs to single spaces, trim.
pub fn clean_text(text: &str) -> String {
    let decoded = decode_entities(text);
    let stripped = MARKUP_TAG.replace_all(&decoded, "");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalised text content of a node: the node's own text plus all
/// descendant text and tail fragments in document order, space-joined,
/// then cleaned.
pub fn node_text(node: Node<'_, '_>) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for descendant in node.descendants() {
        if descendant.is_text()
            && let Some(text) = descendant.text()
        {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                parts.push(trimmed);
            }
        }
    }
    clean_text(&parts.join(" "))
}

/// A node "has a value" when its normalised text is non-empty.
pub fn has_value(node: Node<'_, '_>) -> bool {
    !node_text(node).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    #[test]
    fn strips_double_escaped_markup() {
        // after XML parsing the text still carries one HTML layer
        let doc = Document::parse(
            "<idAbs>&amp;lt;DIV STYLE=\"text-align:Left;\"&amp;gt;A soil map.&amp;lt;/DIV&amp;gt;</idAbs>",
        )
        .unwrap();
        assert_eq!(node_text(doc.root_element()), "A soil map.");
    }

    #[test]
    fn decodes_named_html_entities() {
        // the decoded no-break space is itself whitespace and collapses
        assert_eq!(
            clean_text("land&nbsp;use &ndash; England"),
            "land use \u{2013} England"
        );
    }

    #[test]
    fn unknown_entity_leaves_input_unchanged() {
        assert_eq!(clean_text("a &bogus; token"), "a &bogus; token");
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(clean_text("  spread \n over\t\tlines  "), "spread over lines");
    }

    #[test]
    fn joins_nested_text_and_tails() {
        let doc =
            Document::parse("<useLimit>Free for <b>non-commercial</b> use only.</useLimit>")
                .unwrap();
        assert_eq!(
            node_text(doc.root_element()),
            "Free for non-commercial use only."
        );
    }

    #[test]
    fn empty_element_has_no_value() {
        let doc = Document::parse("<resTitle>   </resTitle>").unwrap();
        assert!(!has_value(doc.root_element()));
        let doc = Document::parse("<resTitle>Soils</resTitle>").unwrap();
        assert!(has_value(doc.root_element()));
    }
}
