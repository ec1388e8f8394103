//! Namespace-aware path navigation over a parsed XML document.
//!
//! A path is a slice of [`Step`]s. Each step matches on local name plus
//! an optional namespace URI: `None` matches only elements without a
//! namespace (the flattened vendor dialect), `Some(uri)` matches only
//! elements in that namespace. A `Child` step descends one level; a
//! `Desc` step searches the whole subtree, so vendor layouts that nest
//! sections at varying depths resolve with the same path.

use roxmltree::Node;

/// Namespace URIs of the standard ISO 19139 dialect.
pub mod ns {
    pub const GMD: &str = "http://www.isotc211.org/2005/gmd";
    pub const GCO: &str = "http://www.isotc211.org/2005/gco";
}

/// One segment of a navigation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Direct child with this (namespace, local name).
    Child(Option<&'static str>, &'static str),
    /// Any descendant with this (namespace, local name).
    Desc(Option<&'static str>, &'static str),
}

/// Unnamespaced direct child (vendor dialect).
pub const fn el(name: &'static str) -> Step {
    Step::Child(None, name)
}

/// Unnamespaced descendant (vendor dialect).
pub const fn any(name: &'static str) -> Step {
    Step::Desc(None, name)
}

/// gmd-namespaced direct child.
pub const fn gmd(name: &'static str) -> Step {
    Step::Child(Some(ns::GMD), name)
}

/// gmd-namespaced descendant.
pub const fn gmd_any(name: &'static str) -> Step {
    Step::Desc(Some(ns::GMD), name)
}

/// gco-namespaced direct child.
pub const fn gco(name: &'static str) -> Step {
    Step::Child(Some(ns::GCO), name)
}

fn step_matches(node: Node<'_, '_>, namespace: Option<&str>, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name && node.tag_name().namespace() == namespace
}

/// First direct element child matching the (namespace, name) pair.
pub fn find_child<'a, 'input>(
    node: Node<'a, 'input>,
    namespace: Option<&str>,
    name: &str,
) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| step_matches(*child, namespace, name))
}

/// All direct element children matching the (namespace, name) pair.
pub fn find_children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    namespace: Option<&'a str>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |child| step_matches(*child, namespace, name))
}

/// First descendant (excluding the node itself) matching the pair.
pub fn find_descendant<'a, 'input>(
    node: Node<'a, 'input>,
    namespace: Option<&str>,
    name: &str,
) -> Option<Node<'a, 'input>> {
    node.descendants()
        .filter(|d| d.id() != node.id())
        .find(|d| step_matches(*d, namespace, name))
}

/// Resolve a path to its first match, depth-first in document order.
pub fn find_path<'a, 'input>(node: Node<'a, 'input>, path: &[Step]) -> Option<Node<'a, 'input>> {
    let (step, rest) = path.split_first()?;
    let candidates: Box<dyn Iterator<Item = Node<'a, 'input>>> = match *step {
        Step::Child(namespace, name) => Box::new(
            node.children()
                .filter(move |child| step_matches(*child, namespace, name)),
        ),
        Step::Desc(namespace, name) => Box::new(
            node.descendants()
                .filter(move |d| d.id() != node.id())
                .filter(move |d| step_matches(*d, namespace, name)),
        ),
    };
    for candidate in candidates {
        if rest.is_empty() {
            return Some(candidate);
        }
        if let Some(found) = find_path(candidate, rest) {
            return Some(found);
        }
    }
    None
}

/// Resolve a path to every match, in document order.
pub fn find_all<'a, 'input>(node: Node<'a, 'input>, path: &[Step]) -> Vec<Node<'a, 'input>> {
    let mut out = Vec::new();
    collect(node, path, &mut out);
    out
}

fn collect<'a, 'input>(node: Node<'a, 'input>, path: &[Step], out: &mut Vec<Node<'a, 'input>>) {
    let Some((step, rest)) = path.split_first() else {
        out.push(node);
        return;
    };
    match *step {
        Step::Child(namespace, name) => {
            for child in node.children() {
                if step_matches(child, namespace, name) {
                    collect(child, rest, out);
                }
            }
        }
        Step::Desc(namespace, name) => {
            for d in node.descendants() {
                if d.id() != node.id() && step_matches(d, namespace, name) {
                    collect(d, rest, out);
                }
            }
        }
    }
}

/// First match across a list of alternative paths.
pub fn find_any<'a, 'input>(
    node: Node<'a, 'input>,
    paths: &[&[Step]],
) -> Option<Node<'a, 'input>> {
    paths.iter().find_map(|path| find_path(node, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    const VENDOR: &str = r"<metadata>
        <dataIdInfo>
            <idCitation><resTitle>Soils of England</resTitle></idCitation>
            <searchKeys><keyword>Soil</keyword><keyword>Land use</keyword></searchKeys>
            <searchKeys><keyword>England</keyword></searchKeys>
        </dataIdInfo>
    </metadata>";

    #[test]
    fn child_step_does_not_skip_levels() {
        let doc = Document::parse(VENDOR).unwrap();
        let root = doc.root_element();
        assert!(find_path(root, &[el("resTitle")]).is_none());
        assert!(find_path(root, &[el("dataIdInfo"), el("idCitation"), el("resTitle")]).is_some());
    }

    #[test]
    fn desc_step_searches_subtree() {
        let doc = Document::parse(VENDOR).unwrap();
        let root = doc.root_element();
        let title = find_path(root, &[any("resTitle")]).unwrap();
        assert_eq!(title.text(), Some("Soils of England"));
    }

    #[test]
    fn find_all_walks_every_branch() {
        let doc = Document::parse(VENDOR).unwrap();
        let root = doc.root_element();
        let keywords = find_all(root, &[any("searchKeys"), el("keyword")]);
        let texts: Vec<_> = keywords.iter().filter_map(|k| k.text()).collect();
        assert_eq!(texts, vec!["Soil", "Land use", "England"]);
    }

    #[test]
    fn namespace_must_match_exactly() {
        let xml = format!(
            r#"<gmd:MD_Metadata xmlns:gmd="{}" xmlns:gco="{}">
                <gmd:fileIdentifier><gco:CharacterString>abc-123</gco:CharacterString></gmd:fileIdentifier>
            </gmd:MD_Metadata>"#,
            ns::GMD,
            ns::GCO
        );
        let doc = Document::parse(&xml).unwrap();
        let root = doc.root_element();
        // an unnamespaced step must not match a gmd element
        assert!(find_path(root, &[el("fileIdentifier")]).is_none());
        let id = find_path(root, &[gmd("fileIdentifier"), gco("CharacterString")]).unwrap();
        assert_eq!(id.text(), Some("abc-123"));
    }

    #[test]
    fn find_any_takes_first_resolving_alternative() {
        let doc = Document::parse(VENDOR).unwrap();
        let root = doc.root_element();
        let node = find_any(
            root,
            &[
                &[el("missing")],
                &[any("idCitation"), el("resTitle")],
                &[any("keyword")],
            ],
        )
        .unwrap();
        assert_eq!(node.text(), Some("Soils of England"));
    }
}
