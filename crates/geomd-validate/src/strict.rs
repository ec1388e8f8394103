//! Strict namespace-aware conformance checks.
//!
//! Unlike the loose evaluator, this walks the canonical gmd/gco schema
//! directly, independent of field extraction, and distinguishes Absent
//! (path did not resolve) from Empty (node resolved without content).
//! Documents whose root is not gmd:MD_Metadata are skipped entirely.

use geomd_extract::locate::{Step, find_all, find_any, find_child, find_path, gmd, gmd_any, ns};
use geomd_extract::text::has_value;
use geomd_model::{CheckOutcome, ComplianceResult, Obligation};
use roxmltree::{Document, Node};

use Obligation::{Conditional, Mandatory, Optional};

/// Reason recorded for files that fail the root-element gate.
pub const SKIP_REASON: &str = "Not ISO 19139 namespaced (root is not gmd:MD_Metadata)";

type Paths = &'static [&'static [Step]];

/// Location strategy for one check.
#[derive(Debug, Clone, Copy)]
enum Probe {
    /// First resolving path decides Present/Empty; none resolving is Absent.
    Single(Paths),
    /// All four directional children must be present and non-empty.
    Bbox,
    /// At least one keyword with content under any descriptiveKeywords.
    Keywords,
    /// useLimitation may sit in MD_Constraints or MD_LegalConstraints.
    UseLimitation,
    /// accessConstraints under MD_LegalConstraints, or any accessConstraints.
    AccessConstraints,
    OtherConstraints,
    /// onLine/CI_OnlineResource/linkage with content.
    DistributionLinkage,
}

#[derive(Debug, Clone, Copy)]
pub struct StrictCheck {
    pub name: &'static str,
    pub obligation: Obligation,
    probe: Probe,
}

const fn single(name: &'static str, obligation: Obligation, paths: Paths) -> StrictCheck {
    StrictCheck {
        name,
        obligation,
        probe: Probe::Single(paths),
    }
}

const IDENTIFICATION: &[Step] = &[gmd("identificationInfo"), gmd("MD_DataIdentification")];

pub const CHECKS: &[StrictCheck] = &[
    // mandatory: identification
    single(
        "Resource Title",
        Mandatory,
        &[&[
            gmd("identificationInfo"),
            gmd("MD_DataIdentification"),
            gmd("citation"),
            gmd("CI_Citation"),
            gmd("title"),
        ]],
    ),
    single(
        "Abstract",
        Mandatory,
        &[&[gmd("identificationInfo"), gmd("MD_DataIdentification"), gmd("abstract")]],
    ),
    single(
        "Topic Category",
        Mandatory,
        &[&[
            gmd("identificationInfo"),
            gmd("MD_DataIdentification"),
            gmd("topicCategory"),
            gmd("MD_TopicCategoryCode"),
        ]],
    ),
    StrictCheck {
        name: "Keywords",
        obligation: Mandatory,
        probe: Probe::Keywords,
    },
    StrictCheck {
        name: "Geographic bounding box",
        obligation: Mandatory,
        probe: Probe::Bbox,
    },
    single(
        "Data Language",
        Mandatory,
        &[&[gmd("identificationInfo"), gmd("MD_DataIdentification"), gmd("language")]],
    ),
    single(
        "Scale Denominator",
        Mandatory,
        &[&[
            gmd("identificationInfo"),
            gmd("MD_DataIdentification"),
            gmd("spatialResolution"),
            gmd("MD_Resolution"),
            gmd("equivalentScale"),
            gmd("MD_RepresentativeFraction"),
            gmd("denominator"),
        ]],
    ),
    // mandatory: contact
    single(
        "Contact Organisation Name",
        Mandatory,
        &[&[gmd("contact"), gmd("CI_ResponsibleParty"), gmd("organisationName")]],
    ),
    single(
        "Contact Email Address",
        Mandatory,
        &[&[
            gmd("contact"),
            gmd("CI_ResponsibleParty"),
            gmd("contactInfo"),
            gmd("CI_Contact"),
            gmd("address"),
            gmd("CI_Address"),
            gmd("electronicMailAddress"),
        ]],
    ),
    single(
        "Contact Role",
        Mandatory,
        &[&[gmd("contact"), gmd("CI_ResponsibleParty"), gmd("role")]],
    ),
    // mandatory: distribution
    StrictCheck {
        name: "Distribution Online Resource Linkage",
        obligation: Mandatory,
        probe: Probe::DistributionLinkage,
    },
    // mandatory: data quality
    single(
        "Lineage Statement",
        Mandatory,
        &[&[
            gmd("dataQualityInfo"),
            gmd("DQ_DataQuality"),
            gmd("lineage"),
            gmd("LI_Lineage"),
            gmd("statement"),
        ]],
    ),
    single(
        "Data Quality Scope Level",
        Mandatory,
        &[&[
            gmd("dataQualityInfo"),
            gmd("DQ_DataQuality"),
            gmd("scope"),
            gmd("DQ_Scope"),
            gmd("level"),
        ]],
    ),
    single(
        "Conformance Specification Title",
        Mandatory,
        &[&[
            gmd("dataQualityInfo"),
            gmd("DQ_DataQuality"),
            gmd("report"),
            gmd("DQ_DomainConsistency"),
            gmd("result"),
            gmd("DQ_ConformanceResult"),
            gmd("specification"),
            gmd("CI_Citation"),
            gmd("title"),
        ]],
    ),
    single(
        "Conformance Pass",
        Mandatory,
        &[&[
            gmd("dataQualityInfo"),
            gmd("DQ_DataQuality"),
            gmd("report"),
            gmd("DQ_DomainConsistency"),
            gmd("result"),
            gmd("DQ_ConformanceResult"),
            gmd("pass"),
        ]],
    ),
    // mandatory: metadata section
    single("Metadata Language Code", Mandatory, &[&[gmd("language")]]),
    single("Metadata Date Stamp", Mandatory, &[&[gmd("dateStamp")]]),
    single("Metadata Scope Code", Mandatory, &[&[gmd("hierarchyLevel")]]),
    // mandatory: constraints
    StrictCheck {
        name: "Access Constraints",
        obligation: Mandatory,
        probe: Probe::AccessConstraints,
    },
    StrictCheck {
        name: "Other Constraints",
        obligation: Mandatory,
        probe: Probe::OtherConstraints,
    },
    StrictCheck {
        name: "Use Limitation",
        obligation: Mandatory,
        probe: Probe::UseLimitation,
    },
    // conditional
    single(
        "Publication Date",
        Conditional,
        &[&[
            gmd("identificationInfo"),
            gmd("MD_DataIdentification"),
            gmd("citation"),
            gmd("CI_Citation"),
            gmd("date"),
            gmd("CI_Date"),
            gmd("date"),
        ]],
    ),
    single(
        "Reference System Code",
        Conditional,
        &[&[
            gmd("referenceSystemInfo"),
            gmd("MD_ReferenceSystem"),
            gmd("referenceSystemIdentifier"),
            gmd("RS_Identifier"),
            gmd("code"),
        ]],
    ),
    single(
        "Reference System Code Space",
        Conditional,
        &[&[
            gmd("referenceSystemInfo"),
            gmd("MD_ReferenceSystem"),
            gmd("referenceSystemIdentifier"),
            gmd("RS_Identifier"),
            gmd("codeSpace"),
        ]],
    ),
    // optional
    single("File Identifier", Optional, &[&[gmd("fileIdentifier")]]),
    single("Metadata Standard Name", Optional, &[&[gmd("metadataStandardName")]]),
    single("Metadata Standard Version", Optional, &[&[gmd("metadataStandardVersion")]]),
    single(
        "Purpose",
        Optional,
        &[&[gmd("identificationInfo"), gmd("MD_DataIdentification"), gmd("purpose")]],
    ),
    single(
        "Credit",
        Optional,
        &[&[gmd("identificationInfo"), gmd("MD_DataIdentification"), gmd("credit")]],
    ),
    single(
        "Status",
        Optional,
        &[&[gmd("identificationInfo"), gmd("MD_DataIdentification"), gmd("status")]],
    ),
    single(
        "Maintenance Frequency",
        Optional,
        &[&[
            gmd("identificationInfo"),
            gmd("MD_DataIdentification"),
            gmd("resourceMaintenance"),
            gmd("MD_MaintenanceInformation"),
            gmd("maintenanceAndUpdateFrequency"),
        ]],
    ),
    single(
        "Graphic Overview",
        Optional,
        &[&[
            gmd("identificationInfo"),
            gmd("MD_DataIdentification"),
            gmd("graphicOverview"),
            gmd("MD_BrowseGraphic"),
            gmd("fileName"),
        ]],
    ),
];

/// Run every check against a parsed document.
///
/// Returns `None` when the root element is not gmd:MD_Metadata; such
/// files must be recorded as skipped, not classified. Otherwise the
/// returned outcomes align with [`CHECKS`] by index.
pub fn check_document(doc: &Document<'_>) -> Option<Vec<CheckOutcome>> {
    let root = doc.root_element();
    if root.tag_name().name() != "MD_Metadata" || root.tag_name().namespace() != Some(ns::GMD) {
        return None;
    }
    Some(CHECKS.iter().map(|check| run_probe(check.probe, root)).collect())
}

/// Fold per-check outcomes into a verdict. Missing mandatory checks are
/// listed in check-catalog order.
pub fn summarise(outcomes: &[CheckOutcome]) -> ComplianceResult {
    let mut result = ComplianceResult::default();
    for (check, outcome) in CHECKS.iter().zip(outcomes) {
        let present = outcome.is_present();
        match check.obligation {
            Mandatory => {
                if present {
                    result.present_mandatory += 1;
                } else {
                    result.missing_mandatory.push(check.name.to_string());
                }
            }
            Conditional => {
                if present {
                    result.present_conditional += 1;
                }
            }
            Optional => {
                if present {
                    result.present_optional += 1;
                }
            }
        }
    }
    result.conformant = result.missing_mandatory.is_empty();
    result
}

fn run_probe(probe: Probe, root: Node<'_, '_>) -> CheckOutcome {
    match probe {
        Probe::Single(paths) => probe_single(root, paths),
        Probe::Bbox => probe_bbox(root),
        Probe::Keywords => probe_keywords(root),
        Probe::UseLimitation => probe_use_limitation(root),
        Probe::AccessConstraints => probe_access_constraints(root),
        Probe::OtherConstraints => probe_other_constraints(root),
        Probe::DistributionLinkage => probe_distribution_linkage(root),
    }
}

fn outcome_of(node: Node<'_, '_>) -> CheckOutcome {
    if has_value(node) {
        CheckOutcome::Present
    } else {
        CheckOutcome::Empty
    }
}

fn probe_single(root: Node<'_, '_>, paths: Paths) -> CheckOutcome {
    match find_any(root, paths) {
        Some(node) => outcome_of(node),
        None => CheckOutcome::Absent,
    }
}

/// Present only if all four directional children exist with content.
/// Once the box element resolves, any missing or empty side reports
/// Empty; Absent is reserved for a document with no box at all.
fn probe_bbox(root: Node<'_, '_>) -> CheckOutcome {
    const BASE: &[Step] = &[
        gmd("identificationInfo"),
        gmd("MD_DataIdentification"),
        gmd("extent"),
        gmd("EX_Extent"),
        gmd("geographicElement"),
        gmd("EX_GeographicBoundingBox"),
    ];
    let Some(bbox) = find_path(root, BASE) else {
        return CheckOutcome::Absent;
    };
    for side in [
        "westBoundLongitude",
        "eastBoundLongitude",
        "southBoundLatitude",
        "northBoundLatitude",
    ] {
        match find_child(bbox, Some(ns::GMD), side) {
            Some(node) if has_value(node) => {}
            _ => return CheckOutcome::Empty,
        }
    }
    CheckOutcome::Present
}

fn identification<'a, 'input>(root: Node<'a, 'input>) -> Option<Node<'a, 'input>> {
    find_path(root, IDENTIFICATION)
}

fn probe_keywords(root: Node<'_, '_>) -> CheckOutcome {
    let Some(id_info) = identification(root) else {
        return CheckOutcome::Absent;
    };
    for container in find_all(id_info, &[gmd_any("descriptiveKeywords")]) {
        for keyword in find_all(container, &[gmd_any("keyword")]) {
            if has_value(keyword) {
                return CheckOutcome::Present;
            }
        }
    }
    CheckOutcome::Empty
}

fn probe_use_limitation(root: Node<'_, '_>) -> CheckOutcome {
    let Some(id_info) = identification(root) else {
        return CheckOutcome::Absent;
    };
    let nodes = find_all(id_info, &[gmd_any("useLimitation")]);
    if nodes.iter().any(|n| has_value(*n)) {
        return CheckOutcome::Present;
    }
    if nodes.is_empty() {
        CheckOutcome::Absent
    } else {
        CheckOutcome::Empty
    }
}

fn probe_access_constraints(root: Node<'_, '_>) -> CheckOutcome {
    let Some(id_info) = identification(root) else {
        return CheckOutcome::Absent;
    };
    let legal = find_path(id_info, &[gmd_any("MD_LegalConstraints"), gmd("accessConstraints")]);
    if legal.is_some_and(has_value) {
        return CheckOutcome::Present;
    }
    let direct = find_path(id_info, &[gmd_any("accessConstraints")]);
    if direct.is_some_and(has_value) {
        return CheckOutcome::Present;
    }
    if legal.is_some() || direct.is_some() {
        CheckOutcome::Empty
    } else {
        CheckOutcome::Absent
    }
}

fn probe_other_constraints(root: Node<'_, '_>) -> CheckOutcome {
    let Some(id_info) = identification(root) else {
        return CheckOutcome::Absent;
    };
    match find_path(id_info, &[gmd_any("otherConstraints")]) {
        Some(node) => outcome_of(node),
        None => CheckOutcome::Absent,
    }
}

fn probe_distribution_linkage(root: Node<'_, '_>) -> CheckOutcome {
    let Some(dist) = find_path(root, &[gmd("distributionInfo"), gmd("MD_Distribution")]) else {
        return CheckOutcome::Absent;
    };
    for on_line in find_all(dist, &[gmd_any("onLine")]) {
        let Some(resource) = find_child(on_line, Some(ns::GMD), "CI_OnlineResource") else {
            continue;
        };
        if find_child(resource, Some(ns::GMD), "linkage").is_some_and(has_value) {
            return CheckOutcome::Present;
        }
    }
    if find_path(dist, &[gmd_any("linkage")]).is_some() {
        CheckOutcome::Empty
    } else {
        CheckOutcome::Absent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(xml: &str, check_name: &str) -> CheckOutcome {
        let doc = Document::parse(xml).unwrap();
        let outcomes = check_document(&doc).expect("standard root");
        let index = CHECKS.iter().position(|c| c.name == check_name).unwrap();
        outcomes[index]
    }

    fn standard(body: &str) -> String {
        format!(
            r#"<gmd:MD_Metadata xmlns:gmd="{}" xmlns:gco="{}">{body}</gmd:MD_Metadata>"#,
            ns::GMD,
            ns::GCO
        )
    }

    #[test]
    fn vendor_root_is_not_classified() {
        let doc = Document::parse("<metadata><Esri/></metadata>").unwrap();
        assert!(check_document(&doc).is_none());
    }

    #[test]
    fn unqualified_md_metadata_root_is_not_classified() {
        let doc = Document::parse("<MD_Metadata/>").unwrap();
        assert!(check_document(&doc).is_none());
    }

    #[test]
    fn single_check_distinguishes_present_empty_absent() {
        let present = standard(
            "<gmd:fileIdentifier><gco:CharacterString>abc</gco:CharacterString></gmd:fileIdentifier>",
        );
        assert_eq!(outcome(&present, "File Identifier"), CheckOutcome::Present);

        let empty = standard("<gmd:fileIdentifier><gco:CharacterString/></gmd:fileIdentifier>");
        assert_eq!(outcome(&empty, "File Identifier"), CheckOutcome::Empty);

        let absent = standard("");
        assert_eq!(outcome(&absent, "File Identifier"), CheckOutcome::Absent);
    }

    fn bbox(west: &str, east: &str, south: &str, north: &str) -> String {
        standard(&format!(
            "<gmd:identificationInfo><gmd:MD_DataIdentification>\
                <gmd:extent><gmd:EX_Extent><gmd:geographicElement>\
                <gmd:EX_GeographicBoundingBox>\
                    {west}{east}{south}{north}\
                </gmd:EX_GeographicBoundingBox>\
                </gmd:geographicElement></gmd:EX_Extent></gmd:extent>\
            </gmd:MD_DataIdentification></gmd:identificationInfo>"
        ))
    }

    #[test]
    fn bbox_requires_all_four_sides() {
        let full = bbox(
            "<gmd:westBoundLongitude><gco:Decimal>-6.2</gco:Decimal></gmd:westBoundLongitude>",
            "<gmd:eastBoundLongitude><gco:Decimal>1.8</gco:Decimal></gmd:eastBoundLongitude>",
            "<gmd:southBoundLatitude><gco:Decimal>49.9</gco:Decimal></gmd:southBoundLatitude>",
            "<gmd:northBoundLatitude><gco:Decimal>55.8</gco:Decimal></gmd:northBoundLatitude>",
        );
        assert_eq!(outcome(&full, "Geographic bounding box"), CheckOutcome::Present);

        // missing side: the box resolved, so the incomplete set is Empty
        let missing_north = bbox(
            "<gmd:westBoundLongitude><gco:Decimal>-6.2</gco:Decimal></gmd:westBoundLongitude>",
            "<gmd:eastBoundLongitude><gco:Decimal>1.8</gco:Decimal></gmd:eastBoundLongitude>",
            "<gmd:southBoundLatitude><gco:Decimal>49.9</gco:Decimal></gmd:southBoundLatitude>",
            "",
        );
        assert_eq!(
            outcome(&missing_north, "Geographic bounding box"),
            CheckOutcome::Empty
        );

        // empty side: all four exist, one has no content
        let empty_east = bbox(
            "<gmd:westBoundLongitude><gco:Decimal>-6.2</gco:Decimal></gmd:westBoundLongitude>",
            "<gmd:eastBoundLongitude><gco:Decimal/></gmd:eastBoundLongitude>",
            "<gmd:southBoundLatitude><gco:Decimal>49.9</gco:Decimal></gmd:southBoundLatitude>",
            "<gmd:northBoundLatitude><gco:Decimal>55.8</gco:Decimal></gmd:northBoundLatitude>",
        );
        assert_eq!(outcome(&empty_east, "Geographic bounding box"), CheckOutcome::Empty);

        assert_eq!(outcome(&standard(""), "Geographic bounding box"), CheckOutcome::Absent);
    }

    #[test]
    fn keywords_need_at_least_one_with_content() {
        let present = standard(
            "<gmd:identificationInfo><gmd:MD_DataIdentification>\
                <gmd:descriptiveKeywords><gmd:MD_Keywords>\
                    <gmd:keyword><gco:CharacterString>soil</gco:CharacterString></gmd:keyword>\
                </gmd:MD_Keywords></gmd:descriptiveKeywords>\
            </gmd:MD_DataIdentification></gmd:identificationInfo>",
        );
        assert_eq!(outcome(&present, "Keywords"), CheckOutcome::Present);

        let empty = standard(
            "<gmd:identificationInfo><gmd:MD_DataIdentification>\
                <gmd:descriptiveKeywords><gmd:MD_Keywords>\
                    <gmd:keyword><gco:CharacterString/></gmd:keyword>\
                </gmd:MD_Keywords></gmd:descriptiveKeywords>\
            </gmd:MD_DataIdentification></gmd:identificationInfo>",
        );
        assert_eq!(outcome(&empty, "Keywords"), CheckOutcome::Empty);

        assert_eq!(outcome(&standard(""), "Keywords"), CheckOutcome::Absent);
    }

    #[test]
    fn conformance_requires_title_and_pass() {
        let present = standard(
            "<gmd:dataQualityInfo><gmd:DQ_DataQuality>\
                <gmd:report><gmd:DQ_DomainConsistency><gmd:result>\
                <gmd:DQ_ConformanceResult>\
                    <gmd:specification><gmd:CI_Citation>\
                        <gmd:title><gco:CharacterString>Reg. 1089/2010</gco:CharacterString></gmd:title>\
                    </gmd:CI_Citation></gmd:specification>\
                    <gmd:pass><gco:Boolean>true</gco:Boolean></gmd:pass>\
                </gmd:DQ_ConformanceResult>\
                </gmd:result></gmd:DQ_DomainConsistency></gmd:report>\
            </gmd:DQ_DataQuality></gmd:dataQualityInfo>",
        );
        assert_eq!(outcome(&present, "Conformance Pass"), CheckOutcome::Present);
        assert_eq!(
            outcome(&present, "Conformance Specification Title"),
            CheckOutcome::Present
        );
    }

    #[test]
    fn summarise_counts_by_obligation() {
        let outcomes: Vec<CheckOutcome> = CHECKS
            .iter()
            .map(|check| match check.obligation {
                Mandatory => CheckOutcome::Present,
                Conditional => CheckOutcome::Empty,
                Optional => CheckOutcome::Absent,
            })
            .collect();
        let result = summarise(&outcomes);
        assert!(result.conformant);
        assert_eq!(
            result.present_mandatory,
            CHECKS.iter().filter(|c| c.obligation.is_mandatory()).count()
        );
        assert_eq!(result.present_conditional, 0);
        assert_eq!(result.present_optional, 0);
    }

    #[test]
    fn missing_mandatory_lists_in_check_order() {
        let doc_xml = standard(
            "<gmd:identificationInfo><gmd:MD_DataIdentification>\
                <gmd:citation><gmd:CI_Citation>\
                    <gmd:title><gco:CharacterString>Only a title</gco:CharacterString></gmd:title>\
                </gmd:CI_Citation></gmd:citation>\
            </gmd:MD_DataIdentification></gmd:identificationInfo>",
        );
        let doc = Document::parse(&doc_xml).unwrap();
        let outcomes = check_document(&doc).unwrap();
        let result = summarise(&outcomes);
        assert!(!result.conformant);
        assert_eq!(result.present_mandatory, 1);
        // first two missing entries follow catalog order
        assert_eq!(result.missing_mandatory[0], "Abstract");
        assert_eq!(result.missing_mandatory[1], "Topic Category");
    }
}
