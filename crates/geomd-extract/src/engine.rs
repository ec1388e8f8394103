//! Field extraction engine.
//!
//! Pure function of document content: walks the field catalog against a
//! parsed document, resolving coded values through the registry, and
//! returns the ordered field mapping. No I/O happens here.

use geomd_model::{CodelistRegistry, ExtractedFields};
use roxmltree::{Document, Node};
use tracing::trace;

use crate::catalog::{
    Dialects, FIELD_CATALOG, Finder, LIST_SEPARATOR, OTHER_KEYWORD_GROUPS, OTHER_KEYWORD_ITEM,
    OTHER_KEYWORD_TITLE, OTHER_KEYWORDS_FALLBACK, ValueKind,
};
use crate::locate::{self, find_all, find_any, ns};
use crate::text::node_text;

/// The two document shapes the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Root is gmd:MD_Metadata.
    Standard,
    /// Unqualified vendor export (typically rooted at `metadata`).
    Vendor,
}

/// Classify a parsed document by its root element.
pub fn dialect(doc: &Document<'_>) -> Dialect {
    let root = doc.root_element();
    if root.tag_name().name() == "MD_Metadata" && root.tag_name().namespace() == Some(ns::GMD) {
        Dialect::Standard
    } else {
        Dialect::Vendor
    }
}

/// Extract every catalog field present in the document.
///
/// Fields that do not resolve, or resolve to an empty value, are
/// omitted. Output order follows the catalog, with thesaurus-qualified
/// keyword groups appended after it, so the mapping is deterministic
/// for a given document structure.
pub fn extract(doc: &Document<'_>, registry: &CodelistRegistry) -> ExtractedFields {
    let root = doc.root_element();
    let doc_dialect = dialect(doc);
    let mut fields = ExtractedFields::new();

    for spec in FIELD_CATALOG {
        if spec.dialects == Dialects::Vendor && doc_dialect == Dialect::Standard {
            continue;
        }
        let raw = match spec.finder {
            Finder::First(paths) => find_any(root, paths).map(|node| raw_value(node, spec.value)),
            Finder::JoinAll { paths, sep } => joined_value(root, paths, sep, spec.value),
        };
        let Some(raw) = raw else { continue };
        let value = match spec.codelist {
            Some(codelist) => registry.resolve(&raw, codelist),
            None => raw,
        };
        if !value.is_empty() {
            trace!(field = spec.name, "extracted");
            fields.add(spec.name, value);
        }
    }

    other_keyword_groups(root, &mut fields);
    fields
}

fn raw_value(node: Node<'_, '_>, value: ValueKind) -> String {
    match value {
        ValueKind::Text => node_text(node),
        ValueKind::Attr(attrs) => first_attr(node, attrs).unwrap_or_default(),
        ValueKind::AttrOrText(attrs) => {
            first_attr(node, attrs).unwrap_or_else(|| node_text(node))
        }
    }
}

fn first_attr(node: Node<'_, '_>, attrs: &[&str]) -> Option<String> {
    attrs
        .iter()
        .find_map(|name| node.attribute(*name))
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Join every non-empty match of the first alternative that yields any.
fn joined_value(
    root: Node<'_, '_>,
    paths: &[&[locate::Step]],
    sep: &str,
    value: ValueKind,
) -> Option<String> {
    for path in paths {
        let values: Vec<String> = find_all(root, path)
            .into_iter()
            .map(|node| raw_value(node, value))
            .filter(|v| !v.is_empty())
            .collect();
        if !values.is_empty() {
            return Some(values.join(sep));
        }
    }
    None
}

/// Each `otherKeys` group becomes its own field, named after the group's
/// thesaurus title when one is present.
fn other_keyword_groups(root: Node<'_, '_>, fields: &mut ExtractedFields) {
    for group in find_all(root, OTHER_KEYWORD_GROUPS) {
        let keywords: Vec<String> = find_all(group, OTHER_KEYWORD_ITEM)
            .into_iter()
            .map(node_text)
            .filter(|k| !k.is_empty())
            .collect();
        if keywords.is_empty() {
            continue;
        }
        let title = catalog_title(group);
        let name = match title {
            Some(title) => format!("Other Keywords ({title})"),
            None => OTHER_KEYWORDS_FALLBACK.to_string(),
        };
        fields.add(&name, keywords.join(LIST_SEPARATOR));
    }
}

fn catalog_title(group: Node<'_, '_>) -> Option<String> {
    locate::find_path(group, OTHER_KEYWORD_TITLE)
        .map(node_text)
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use geomd_codelists::build_registry;

    const VENDOR_DOC: &str = r#"<metadata>
        <Esri>
            <CreaDate>20200114</CreaDate>
            <ArcGISFormat>1.0</ArcGISFormat>
            <DataProperties>
                <itemProps>
                    <itemName>soils_england</itemName>
                    <imsContentType>002</imsContentType>
                </itemProps>
            </DataProperties>
        </Esri>
        <dataIdInfo>
            <idAbs>&amp;lt;p&amp;gt;National soil map.&amp;lt;/p&amp;gt;</idAbs>
            <idCitation>
                <resTitle>Soils of England</resTitle>
                <date><pubDate>2020-01-14</pubDate></date>
            </idCitation>
            <searchKeys>
                <keyword>Soil</keyword>
                <keyword>Land use</keyword>
            </searchKeys>
            <searchKeys><keyword>England</keyword></searchKeys>
            <accessConsts><RestrictCd value="005"/></accessConsts>
            <dataLang>
                <languageCode value="eng"/>
                <countryCode value="GBR"/>
            </dataLang>
            <otherKeys>
                <keyword>agriculture</keyword>
                <keyword>farming</keyword>
                <thesaName><resTitle>GEMET</resTitle></thesaName>
            </otherKeys>
            <otherKeys><keyword>misc</keyword></otherKeys>
        </dataIdInfo>
        <mdContact>
            <rpOrgName>Soil Survey</rpOrgName>
            <role><RoleCd value="007"/></role>
        </mdContact>
        <mdFileID>uuid-1234</mdFileID>
    </metadata>"#;

    #[test]
    fn vendor_document_extracts_catalog_fields() {
        let doc = Document::parse(VENDOR_DOC).unwrap();
        let registry = build_registry(None);
        let fields = extract(&doc, &registry);

        assert_eq!(fields.get("Resource Title"), Some("Soils of England"));
        assert_eq!(fields.get("Abstract"), Some("National soil map."));
        assert_eq!(fields.get("Creation Date"), Some("20200114"));
        assert_eq!(fields.get("Item Name"), Some("soils_england"));
        assert_eq!(fields.get("Publication Date"), Some("2020-01-14"));
        assert_eq!(fields.get("Metadata File ID"), Some("uuid-1234"));
    }

    #[test]
    fn keywords_join_with_comma_across_groups() {
        let doc = Document::parse(VENDOR_DOC).unwrap();
        let registry = build_registry(None);
        let fields = extract(&doc, &registry);
        assert_eq!(fields.get("Keywords"), Some("Soil, Land use, England"));
    }

    #[test]
    fn coded_attributes_resolve_through_registry() {
        let doc = Document::parse(VENDOR_DOC).unwrap();
        let registry = build_registry(None);
        let fields = extract(&doc, &registry);
        assert_eq!(fields.get("Access Constraints"), Some("Licence"));
        assert_eq!(fields.get("Contact Role"), Some("Point of contact"));
        assert_eq!(fields.get("Content Type"), Some("Downloadable Data"));
        assert_eq!(fields.get("Data Language"), Some("eng"));
        assert_eq!(fields.get("Data Country Code"), Some("GBR"));
    }

    #[test]
    fn thesaurus_groups_get_dynamic_names() {
        let doc = Document::parse(VENDOR_DOC).unwrap();
        let registry = build_registry(None);
        let fields = extract(&doc, &registry);
        assert_eq!(
            fields.get("Other Keywords (GEMET)"),
            Some("agriculture, farming")
        );
        assert_eq!(fields.get("Other Keywords"), Some("misc"));
    }

    #[test]
    fn extraction_is_deterministic() {
        let doc = Document::parse(VENDOR_DOC).unwrap();
        let registry = build_registry(None);
        let first = extract(&doc, &registry);
        let second = extract(&doc, &registry);
        let a: Vec<_> = first.iter().collect();
        let b: Vec<_> = second.iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn standard_document_uses_namespaced_paths() {
        let xml = format!(
            r#"<gmd:MD_Metadata xmlns:gmd="{gmd}" xmlns:gco="{gco}">
                <gmd:fileIdentifier><gco:CharacterString>abc-1</gco:CharacterString></gmd:fileIdentifier>
                <gmd:language><gmd:LanguageCode codeListValue="eng"/></gmd:language>
                <gmd:identificationInfo>
                    <gmd:MD_DataIdentification>
                        <gmd:citation><gmd:CI_Citation>
                            <gmd:title><gco:CharacterString>Standard record</gco:CharacterString></gmd:title>
                        </gmd:CI_Citation></gmd:citation>
                        <gmd:abstract><gco:CharacterString>An abstract.</gco:CharacterString></gmd:abstract>
                        <gmd:language><gmd:LanguageCode codeListValue="cym"/></gmd:language>
                        <gmd:descriptiveKeywords><gmd:MD_Keywords>
                            <gmd:keyword><gco:CharacterString>soil</gco:CharacterString></gmd:keyword>
                            <gmd:keyword><gco:CharacterString>land</gco:CharacterString></gmd:keyword>
                        </gmd:MD_Keywords></gmd:descriptiveKeywords>
                    </gmd:MD_DataIdentification>
                </gmd:identificationInfo>
            </gmd:MD_Metadata>"#,
            gmd = ns::GMD,
            gco = ns::GCO
        );
        let doc = Document::parse(&xml).unwrap();
        assert_eq!(dialect(&doc), Dialect::Standard);

        let registry = build_registry(None);
        let fields = extract(&doc, &registry);
        assert_eq!(fields.get("Resource Title"), Some("Standard record"));
        assert_eq!(fields.get("Abstract"), Some("An abstract."));
        assert_eq!(fields.get("Keywords"), Some("soil, land"));
        assert_eq!(fields.get("Metadata File ID"), Some("abc-1"));
        assert_eq!(fields.get("Metadata Language Code"), Some("eng"));
        // the code sits on gmd:LanguageCode, not on gmd:language itself
        assert_eq!(fields.get("Data Language"), Some("cym"));
        // vendor-only entries never fire on standard documents
        assert!(fields.get("ArcGIS Format").is_none());
    }
}
