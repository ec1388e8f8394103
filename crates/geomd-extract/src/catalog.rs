//! The field catalog: every semantic field the engine knows how to
//! extract, as a static table of path expressions.
//!
//! Entries are listed in extraction order, which fixes insertion order
//! in [`geomd_model::ExtractedFields`] and therefore column ordering in
//! the export. Vendor paths are unnamespaced; entries that also exist
//! in the standard gmd/gco dialect carry namespaced alternatives after
//! the vendor ones.

use crate::locate::{Step, any, el, gco, gmd, gmd_any};

/// Which document dialects an entry can resolve in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialects {
    /// Vendor-flattened documents only.
    Vendor,
    /// Vendor and standard-namespaced documents.
    Both,
}

/// How the raw string is taken from the located node.
#[derive(Debug, Clone, Copy)]
pub enum ValueKind {
    /// Normalised text content.
    Text,
    /// First present attribute from the list; nothing else.
    Attr(&'static [&'static str]),
    /// First present attribute, else normalised text. Coded elements
    /// carry the code in an attribute in the vendor dialect and as
    /// element text in the standard one.
    AttrOrText(&'static [&'static str]),
}

/// Node location strategy.
#[derive(Debug, Clone, Copy)]
pub enum Finder {
    /// First alternative path that resolves to a node.
    First(&'static [&'static [Step]]),
    /// Every match of the first alternative that yields any, with the
    /// non-empty values joined by a separator.
    JoinAll {
        paths: &'static [&'static [Step]],
        sep: &'static str,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub dialects: Dialects,
    pub finder: Finder,
    pub value: ValueKind,
    pub codelist: Option<&'static str>,
}

/// Attribute preference for coded vendor elements.
const CODE_ATTRS: &[&str] = &["value", "codeListValue"];

const fn text(
    name: &'static str,
    dialects: Dialects,
    paths: &'static [&'static [Step]],
) -> FieldSpec {
    FieldSpec {
        name,
        dialects,
        finder: Finder::First(paths),
        value: ValueKind::Text,
        codelist: None,
    }
}

const fn coded(
    name: &'static str,
    dialects: Dialects,
    paths: &'static [&'static [Step]],
    codelist: &'static str,
) -> FieldSpec {
    FieldSpec {
        name,
        dialects,
        finder: Finder::First(paths),
        value: ValueKind::AttrOrText(CODE_ATTRS),
        codelist: Some(codelist),
    }
}

/// Thesaurus-qualified keyword groups are handled outside the table:
/// each group under this path yields a dynamically named field.
pub const OTHER_KEYWORD_GROUPS: &[Step] = &[any("dataIdInfo"), any("otherKeys")];
/// Thesaurus title within one group.
pub const OTHER_KEYWORD_TITLE: &[Step] = &[any("thesaName"), el("resTitle")];
/// Keywords within one group (direct children only).
pub const OTHER_KEYWORD_ITEM: &[Step] = &[el("keyword")];
/// Field name used when a group has no thesaurus title.
pub const OTHER_KEYWORDS_FALLBACK: &str = "Other Keywords";

/// Separator for list-valued fields.
pub const LIST_SEPARATOR: &str = ", ";

pub const FIELD_CATALOG: &[FieldSpec] = &[
    // vendor tool block
    text("ArcGIS Format", Dialects::Vendor, &[&[any("Esri"), el("ArcGISFormat")]]),
    text("ArcGIS Profile", Dialects::Vendor, &[&[any("Esri"), el("ArcGISProfile")]]),
    text("Creation Date", Dialects::Vendor, &[&[any("Esri"), el("CreaDate")]]),
    text("Creation Time", Dialects::Vendor, &[&[any("Esri"), el("CreaTime")]]),
    text("Modification Date", Dialects::Vendor, &[&[any("Esri"), el("ModDate")]]),
    text("Modification Time", Dialects::Vendor, &[&[any("Esri"), el("ModTime")]]),
    text(
        "Item Name",
        Dialects::Vendor,
        &[&[any("Esri"), any("DataProperties"), any("itemProps"), el("itemName")]],
    ),
    FieldSpec {
        name: "Content Type",
        dialects: Dialects::Vendor,
        finder: Finder::First(&[&[
            any("Esri"),
            any("DataProperties"),
            any("itemProps"),
            el("imsContentType"),
        ]]),
        value: ValueKind::Text,
        codelist: Some("ArcGIS_ContentTypeCode"),
    },
    text(
        "West Bounding Longitude",
        Dialects::Vendor,
        &[&[any("itemProps"), any("nativeExtBox"), el("westBL")]],
    ),
    text(
        "East Bounding Longitude",
        Dialects::Vendor,
        &[&[any("itemProps"), any("nativeExtBox"), el("eastBL")]],
    ),
    text(
        "South Bounding Latitude",
        Dialects::Vendor,
        &[&[any("itemProps"), any("nativeExtBox"), el("southBL")]],
    ),
    text(
        "North Bounding Latitude",
        Dialects::Vendor,
        &[&[any("itemProps"), any("nativeExtBox"), el("northBL")]],
    ),
    text(
        "Thumbnail URL",
        Dialects::Vendor,
        &[&[any("itemProps"), any("portalDetails"), el("thumbnailURL")]],
    ),
    text(
        "Coordinate System Type",
        Dialects::Vendor,
        &[&[any("DataProperties"), any("coordRef"), el("type")]],
    ),
    text(
        "Geographic CS Name",
        Dialects::Vendor,
        &[&[any("DataProperties"), any("coordRef"), el("geogcsn")]],
    ),
    text(
        "Projected CS Name",
        Dialects::Vendor,
        &[&[any("DataProperties"), any("coordRef"), el("projcsn")]],
    ),
    text(
        "Coordinate System Units",
        Dialects::Vendor,
        &[&[any("DataProperties"), any("coordRef"), el("csUnits")]],
    ),
    text("Minimum Scale", Dialects::Vendor, &[&[any("Esri"), any("scaleRange"), el("minScale")]]),
    text("Maximum Scale", Dialects::Vendor, &[&[any("Esri"), any("scaleRange"), el("maxScale")]]),
    // identification block
    text(
        "Abstract",
        Dialects::Both,
        &[
            &[any("dataIdInfo"), el("idAbs")],
            &[gmd("identificationInfo"), gmd("MD_DataIdentification"), gmd("abstract")],
        ],
    ),
    text(
        "Resource Title",
        Dialects::Both,
        &[
            &[any("dataIdInfo"), el("idCitation"), el("resTitle")],
            &[
                gmd("identificationInfo"),
                gmd("MD_DataIdentification"),
                gmd("citation"),
                gmd("CI_Citation"),
                gmd("title"),
            ],
        ],
    ),
    text(
        "Resource Alternative Title",
        Dialects::Both,
        &[
            &[any("dataIdInfo"), el("idCitation"), el("resAltTitle")],
            &[
                gmd("identificationInfo"),
                gmd("MD_DataIdentification"),
                gmd("citation"),
                gmd("CI_Citation"),
                gmd("alternateTitle"),
            ],
        ],
    ),
    text(
        "Collection Title",
        Dialects::Vendor,
        &[&[any("dataIdInfo"), el("idCitation"), el("collTitle")]],
    ),
    text(
        "Publication Date",
        Dialects::Both,
        &[
            &[any("dataIdInfo"), el("idCitation"), any("date"), el("pubDate")],
            &[
                gmd("identificationInfo"),
                gmd("MD_DataIdentification"),
                gmd("citation"),
                gmd("CI_Citation"),
                gmd("date"),
                gmd("CI_Date"),
                gmd("date"),
            ],
        ],
    ),
    coded(
        "Presentation Form",
        Dialects::Both,
        &[
            &[any("dataIdInfo"), el("idCitation"), any("presForm"), el("PresFormCd")],
            &[gmd_any("CI_Citation"), gmd_any("presentationForm"), gmd("CI_PresentationFormCode")],
        ],
        "CI_PresentationFormCode",
    ),
    text(
        "Extent Description",
        Dialects::Both,
        &[
            &[any("dataIdInfo"), el("dataExt"), el("exDesc")],
            &[gmd_any("EX_Extent"), gmd("description")],
        ],
    ),
    text(
        "Geographic West Bounding Longitude",
        Dialects::Both,
        &[
            &[any("dataIdInfo"), el("dataExt"), any("GeoBndBox"), el("westBL")],
            &[gmd_any("EX_GeographicBoundingBox"), gmd("westBoundLongitude")],
        ],
    ),
    text(
        "Geographic East Bounding Longitude",
        Dialects::Both,
        &[
            &[any("dataIdInfo"), el("dataExt"), any("GeoBndBox"), el("eastBL")],
            &[gmd_any("EX_GeographicBoundingBox"), gmd("eastBoundLongitude")],
        ],
    ),
    text(
        "Geographic North Bounding Latitude",
        Dialects::Both,
        &[
            &[any("dataIdInfo"), el("dataExt"), any("GeoBndBox"), el("northBL")],
            &[gmd_any("EX_GeographicBoundingBox"), gmd("northBoundLatitude")],
        ],
    ),
    text(
        "Geographic South Bounding Latitude",
        Dialects::Both,
        &[
            &[any("dataIdInfo"), el("dataExt"), any("GeoBndBox"), el("southBL")],
            &[gmd_any("EX_GeographicBoundingBox"), gmd("southBoundLatitude")],
        ],
    ),
    FieldSpec {
        name: "Keywords",
        dialects: Dialects::Both,
        finder: Finder::JoinAll {
            paths: &[
                &[any("dataIdInfo"), any("searchKeys"), el("keyword")],
                &[gmd_any("descriptiveKeywords"), gmd_any("keyword")],
            ],
            sep: LIST_SEPARATOR,
        },
        value: ValueKind::Text,
        codelist: None,
    },
    text(
        "Purpose",
        Dialects::Both,
        &[
            &[any("dataIdInfo"), el("idPurp")],
            &[gmd("identificationInfo"), gmd("MD_DataIdentification"), gmd("purpose")],
        ],
    ),
    text(
        "Credit",
        Dialects::Both,
        &[
            &[any("dataIdInfo"), el("idCredit")],
            &[gmd("identificationInfo"), gmd("MD_DataIdentification"), gmd("credit")],
        ],
    ),
    text(
        "Use Limitation",
        Dialects::Both,
        &[
            &[any("dataIdInfo"), any("useLimit")],
            &[gmd_any("resourceConstraints"), gmd_any("useLimitation")],
        ],
    ),
    coded(
        "Access Constraints",
        Dialects::Both,
        &[
            &[any("dataIdInfo"), any("accessConsts"), el("RestrictCd")],
            &[gmd_any("accessConstraints"), gmd("MD_RestrictionCode")],
        ],
        "MD_RestrictionCode",
    ),
    text(
        "Other Constraints",
        Dialects::Both,
        &[
            &[any("dataIdInfo"), any("othConsts")],
            &[gmd_any("otherConstraints")],
        ],
    ),
    FieldSpec {
        name: "Data Language",
        dialects: Dialects::Both,
        finder: Finder::First(&[
            &[any("dataIdInfo"), any("dataLang"), el("languageCode")],
            &[
                gmd("identificationInfo"),
                gmd("MD_DataIdentification"),
                gmd("language"),
                gmd("LanguageCode"),
            ],
            &[
                gmd("identificationInfo"),
                gmd("MD_DataIdentification"),
                gmd("language"),
                gco("CharacterString"),
            ],
        ]),
        value: ValueKind::AttrOrText(CODE_ATTRS),
        codelist: None,
    },
    FieldSpec {
        name: "Data Country Code",
        dialects: Dialects::Vendor,
        finder: Finder::First(&[&[any("dataIdInfo"), any("dataLang"), el("countryCode")]]),
        value: ValueKind::Attr(&["value"]),
        codelist: None,
    },
    coded(
        "Character Set",
        Dialects::Vendor,
        &[&[any("dataIdInfo"), any("dataChar"), el("CharSetCd")]],
        "MD_CharacterSetCode",
    ),
    coded(
        "Spatial Representation Type",
        Dialects::Both,
        &[
            &[any("dataIdInfo"), any("spatRpType"), el("SpatRepTypCd")],
            &[gmd_any("spatialRepresentationType"), gmd("MD_SpatialRepresentationTypeCode")],
        ],
        "MD_SpatialRepresentationTypeCode",
    ),
    text(
        "Scale Denominator",
        Dialects::Both,
        &[
            &[any("dataIdInfo"), any("dataScale"), el("equScale"), el("rfDenom")],
            &[gmd_any("spatialResolution"), gmd_any("denominator")],
        ],
    ),
    text("Environment Description", Dialects::Vendor, &[&[any("dataIdInfo"), el("envirDesc")]]),
    coded(
        "Status",
        Dialects::Both,
        &[
            &[any("dataIdInfo"), any("idStatus"), el("ProgCd")],
            &[gmd_any("status"), gmd("MD_ProgressCode")],
        ],
        "MD_ProgressCode",
    ),
    text(
        "Graphic File Name",
        Dialects::Vendor,
        &[&[any("dataIdInfo"), el("graphOver"), el("bgFileName")]],
    ),
    text(
        "Graphic File Description",
        Dialects::Vendor,
        &[&[any("dataIdInfo"), el("graphOver"), el("bgFileDesc")]],
    ),
    text(
        "Graphic File Type",
        Dialects::Vendor,
        &[&[any("dataIdInfo"), el("graphOver"), el("bgFileType")]],
    ),
    coded(
        "Maintenance Frequency",
        Dialects::Vendor,
        &[&[any("dataIdInfo"), any("resMaint"), el("maintFreq"), el("MaintFreqCd")]],
        "MD_MaintenanceFrequencyCode",
    ),
    coded(
        "Topic Category",
        Dialects::Both,
        &[
            &[any("dataIdInfo"), any("tpCat"), el("TopicCatCd")],
            &[gmd_any("topicCategory"), gmd("MD_TopicCategoryCode")],
        ],
        "MD_TopicCategoryCode",
    ),
    // contact block
    text(
        "Contact Individual Name",
        Dialects::Both,
        &[
            &[any("mdContact"), el("rpIndName")],
            &[gmd("contact"), gmd("CI_ResponsibleParty"), gmd("individualName")],
        ],
    ),
    text(
        "Contact Organisation Name",
        Dialects::Both,
        &[
            &[any("mdContact"), el("rpOrgName")],
            &[gmd("contact"), gmd("CI_ResponsibleParty"), gmd("organisationName")],
        ],
    ),
    text(
        "Contact Position Name",
        Dialects::Both,
        &[
            &[any("mdContact"), el("rpPosName")],
            &[gmd("contact"), gmd("CI_ResponsibleParty"), gmd("positionName")],
        ],
    ),
    text(
        "Contact Email Address",
        Dialects::Both,
        &[
            &[any("mdContact"), any("rpCntInfo"), any("cntAddress"), el("eMailAdd")],
            &[
                gmd("contact"),
                gmd("CI_ResponsibleParty"),
                gmd("contactInfo"),
                gmd("CI_Contact"),
                gmd("address"),
                gmd("CI_Address"),
                gmd("electronicMailAddress"),
            ],
        ],
    ),
    text(
        "Contact Delivery Point",
        Dialects::Both,
        &[
            &[any("mdContact"), any("rpCntInfo"), any("cntAddress"), el("delPoint")],
            &[gmd("contact"), gmd_any("CI_Address"), gmd("deliveryPoint")],
        ],
    ),
    text(
        "Contact City",
        Dialects::Both,
        &[
            &[any("mdContact"), any("rpCntInfo"), any("cntAddress"), el("city")],
            &[gmd("contact"), gmd_any("CI_Address"), gmd("city")],
        ],
    ),
    text(
        "Contact Administrative Area",
        Dialects::Both,
        &[
            &[any("mdContact"), any("rpCntInfo"), any("cntAddress"), el("adminArea")],
            &[gmd("contact"), gmd_any("CI_Address"), gmd("administrativeArea")],
        ],
    ),
    text(
        "Contact Postal Code",
        Dialects::Both,
        &[
            &[any("mdContact"), any("rpCntInfo"), any("cntAddress"), el("postCode")],
            &[gmd("contact"), gmd_any("CI_Address"), gmd("postalCode")],
        ],
    ),
    text(
        "Contact Country",
        Dialects::Both,
        &[
            &[any("mdContact"), any("rpCntInfo"), any("cntAddress"), el("country")],
            &[gmd("contact"), gmd_any("CI_Address"), gmd("country")],
        ],
    ),
    text(
        "Contact Phone Number",
        Dialects::Both,
        &[
            &[any("mdContact"), any("rpCntInfo"), any("cntPhone"), el("voiceNum")],
            &[gmd("contact"), gmd_any("CI_Telephone"), gmd("voice")],
        ],
    ),
    text(
        "Contact Online Resource",
        Dialects::Both,
        &[
            &[any("mdContact"), any("rpCntInfo"), any("cntOnlineRes"), el("linkage")],
            &[gmd("contact"), gmd_any("CI_OnlineResource"), gmd("linkage")],
        ],
    ),
    text(
        "Contact Hours",
        Dialects::Both,
        &[
            &[any("mdContact"), any("rpCntInfo"), any("cntHours")],
            &[gmd("contact"), gmd_any("hoursOfService")],
        ],
    ),
    text(
        "Contact Instructions",
        Dialects::Both,
        &[
            &[any("mdContact"), any("rpCntInfo"), any("cntInstr")],
            &[gmd("contact"), gmd_any("contactInstructions")],
        ],
    ),
    coded(
        "Contact Role",
        Dialects::Both,
        &[
            &[any("mdContact"), any("role"), el("RoleCd")],
            &[gmd("contact"), gmd("CI_ResponsibleParty"), gmd("role"), gmd("CI_RoleCode")],
        ],
        "CI_RoleCode",
    ),
    // entity and attribute definitions
    text(
        "Entity Type Label",
        Dialects::Vendor,
        &[&[any("eainfo"), el("detailed"), el("enttyp"), el("enttypl")]],
    ),
    text(
        "Entity Type Type",
        Dialects::Vendor,
        &[&[any("eainfo"), el("detailed"), el("enttyp"), el("enttypt")]],
    ),
    text(
        "Entity Type Count",
        Dialects::Vendor,
        &[&[any("eainfo"), el("detailed"), el("enttyp"), el("enttypc")]],
    ),
    FieldSpec {
        name: "Attribute Names",
        dialects: Dialects::Vendor,
        finder: Finder::JoinAll {
            paths: &[&[any("eainfo"), el("detailed"), any("attr"), el("attrlabl")]],
            sep: LIST_SEPARATOR,
        },
        value: ValueKind::Text,
        codelist: None,
    },
    // spatial representation
    coded(
        "Topology Level",
        Dialects::Vendor,
        &[&[any("spatRepInfo"), any("topLvl"), el("TopoLevCd")]],
        "MD_TopologyLevelCode",
    ),
    coded(
        "Geometry Object Type",
        Dialects::Vendor,
        &[&[any("spatRepInfo"), any("geometObjs"), any("geoObjTyp"), el("GeoObjTypCd")]],
        "MD_GeometricObjectTypeCode",
    ),
    text(
        "Geometry Object Count",
        Dialects::Vendor,
        &[&[any("spatRepInfo"), any("geometObjs"), any("geoObjCnt")]],
    ),
    // reference system
    FieldSpec {
        name: "Reference System Code",
        dialects: Dialects::Both,
        finder: Finder::First(&[
            &[any("refSysInfo"), el("RefSystem"), el("refSysID"), el("identCode")],
            &[gmd_any("referenceSystemInfo"), gmd_any("RS_Identifier"), gmd("code")],
        ]),
        value: ValueKind::AttrOrText(&["code"]),
        codelist: None,
    },
    text(
        "Reference System Code Space",
        Dialects::Both,
        &[
            &[any("refSysInfo"), el("RefSystem"), el("refSysID"), el("idCodeSpace")],
            &[gmd_any("referenceSystemInfo"), gmd_any("RS_Identifier"), gmd("codeSpace")],
        ],
    ),
    text(
        "Reference System Version",
        Dialects::Both,
        &[
            &[any("refSysInfo"), el("RefSystem"), el("refSysID"), el("idVersion")],
            &[gmd_any("referenceSystemInfo"), gmd_any("RS_Identifier"), gmd("version")],
        ],
    ),
    // data quality
    coded(
        "Data Quality Scope Level",
        Dialects::Both,
        &[
            &[any("dqInfo"), any("scpLvl"), el("ScopeCd")],
            &[gmd_any("dataQualityInfo"), gmd_any("level"), gmd("MD_ScopeCode")],
        ],
        "MD_ScopeCode",
    ),
    text(
        "Lineage Statement",
        Dialects::Both,
        &[
            &[any("dqInfo"), any("dataLineage"), el("statement")],
            &[gmd_any("lineage"), gmd_any("statement")],
        ],
    ),
    FieldSpec {
        name: "Quality Report Type",
        dialects: Dialects::Vendor,
        finder: Finder::First(&[&[any("dqInfo"), any("report")]]),
        value: ValueKind::Attr(&["type"]),
        codelist: None,
    },
    text(
        "Conformance Specification Title",
        Dialects::Both,
        &[
            &[any("dqInfo"), any("report"), any("conSpec"), el("resTitle")],
            &[gmd_any("DQ_ConformanceResult"), gmd("specification"), gmd("CI_Citation"), gmd("title")],
        ],
    ),
    text(
        "Conformance Pass",
        Dialects::Both,
        &[
            &[any("dqInfo"), any("report"), any("conPass")],
            &[gmd_any("DQ_ConformanceResult"), gmd("pass")],
        ],
    ),
    // distribution
    text(
        "Distribution Online Resource Linkage",
        Dialects::Both,
        &[
            &[any("distInfo"), any("onLineSrc"), el("linkage")],
            &[gmd_any("distributionInfo"), gmd_any("CI_OnlineResource"), gmd("linkage")],
        ],
    ),
    text(
        "Distribution Protocol",
        Dialects::Both,
        &[
            &[any("distInfo"), any("onLineSrc"), el("protocol")],
            &[gmd_any("distributionInfo"), gmd_any("CI_OnlineResource"), gmd("protocol")],
        ],
    ),
    text(
        "Distribution Online Resource Name",
        Dialects::Both,
        &[
            &[any("distInfo"), any("onLineSrc"), el("orName")],
            &[gmd_any("distributionInfo"), gmd_any("CI_OnlineResource"), gmd("name")],
        ],
    ),
    text(
        "Distribution Online Resource Description",
        Dialects::Both,
        &[
            &[any("distInfo"), any("onLineSrc"), el("orDesc")],
            &[gmd_any("distributionInfo"), gmd_any("CI_OnlineResource"), gmd("description")],
        ],
    ),
    // metadata record housekeeping
    coded(
        "Metadata Maintenance Frequency",
        Dialects::Vendor,
        &[&[any("mdMaint"), any("maintFreq"), el("MaintFreqCd")]],
        "MD_MaintenanceFrequencyCode",
    ),
    FieldSpec {
        name: "Metadata Language Code",
        dialects: Dialects::Both,
        finder: Finder::First(&[
            &[any("mdLang"), el("languageCode")],
            &[gmd("language"), gmd("LanguageCode")],
            &[gmd("language"), gco("CharacterString")],
        ]),
        value: ValueKind::AttrOrText(CODE_ATTRS),
        codelist: None,
    },
    FieldSpec {
        name: "Metadata Country Code",
        dialects: Dialects::Vendor,
        finder: Finder::First(&[&[any("mdLang"), el("countryCode")]]),
        value: ValueKind::Attr(&["value"]),
        codelist: None,
    },
    coded(
        "Metadata Scope Code",
        Dialects::Both,
        &[
            &[any("mdHrLv"), el("ScopeCd")],
            &[gmd("hierarchyLevel"), gmd("MD_ScopeCode")],
        ],
        "MD_ScopeCode",
    ),
    text(
        "Metadata Hierarchy Level Name",
        Dialects::Both,
        &[&[any("mdHrLvName")], &[gmd("hierarchyLevelName")]],
    ),
    // vendor spatial domain
    FieldSpec {
        name: "Feature Name",
        dialects: Dialects::Vendor,
        finder: Finder::First(&[&[any("spdoinfo"), any("esriterm")]]),
        value: ValueKind::Attr(&["Name"]),
        codelist: None,
    },
    text("Feature Type", Dialects::Vendor, &[&[any("spdoinfo"), any("esriterm"), el("efeatyp")]]),
    FieldSpec {
        name: "Feature Geometry Code",
        dialects: Dialects::Vendor,
        finder: Finder::First(&[&[any("spdoinfo"), any("esriterm"), el("efeageom")]]),
        value: ValueKind::Attr(&["code"]),
        codelist: Some("MD_GeometricObjectTypeCode"),
    },
    // metadata standard identification
    text(
        "Metadata Standard Name",
        Dialects::Both,
        &[&[any("mdStanName")], &[gmd("metadataStandardName")]],
    ),
    text(
        "Metadata Standard Version",
        Dialects::Both,
        &[&[any("mdStanVer")], &[gmd("metadataStandardVersion")]],
    ),
    text("Metadata File ID", Dialects::Both, &[&[any("mdFileID")], &[gmd("fileIdentifier")]]),
    coded(
        "Metadata Character Set",
        Dialects::Both,
        &[
            &[any("mdChar"), el("CharSetCd")],
            &[gmd("characterSet"), gmd("MD_CharacterSetCode")],
        ],
        "MD_CharacterSetCode",
    ),
    text("Metadata Date Stamp", Dialects::Both, &[&[any("mdDateSt")], &[gmd("dateStamp")]]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_names_are_unique() {
        let mut seen = std::collections::BTreeSet::new();
        for spec in FIELD_CATALOG {
            assert!(seen.insert(spec.name), "duplicate catalog entry {}", spec.name);
        }
    }

    #[test]
    fn coded_entries_reference_known_codelists() {
        let registry = geomd_codelists::build_registry(None);
        for spec in FIELD_CATALOG {
            if let Some(codelist) = spec.codelist {
                assert!(registry.get(codelist).is_some(), "unknown codelist {codelist}");
            }
        }
    }

    #[test]
    fn standard_alternatives_are_namespaced() {
        // Both-dialect entries must carry at least one gmd-qualified path
        for spec in FIELD_CATALOG {
            if spec.dialects != Dialects::Both {
                continue;
            }
            let paths: &[&[Step]] = match spec.finder {
                Finder::First(paths) | Finder::JoinAll { paths, .. } => paths,
            };
            let has_namespaced = paths.iter().any(|path| {
                path.iter().all(|step| match step {
                    Step::Child(ns, _) | Step::Desc(ns, _) => ns.is_some(),
                })
            });
            assert!(has_namespaced, "{} lacks a standard-dialect path", spec.name);
        }
    }
}
