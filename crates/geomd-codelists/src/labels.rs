//! Display-label tables for the known codelists.
//!
//! Keys are pre-normalised standard code names (lowercase, separators
//! stripped) so both `license` and `005` resolve to the same label.
//! UK spellings are used where the governing profile expects them.

/// (normalised code name, display label) pairs for one codelist.
pub type NameTable = &'static [(&'static str, &'static str)];

/// MD_RestrictionCode: limitation on access or use.
pub const RESTRICTION: NameTable = &[
    ("copyright", "Copyright"),
    ("patent", "Patent"),
    ("patentpending", "Patent pending"),
    ("trademark", "Trademark"),
    ("license", "Licence"),
    ("licence", "Licence"),
    ("intellectualpropertyrights", "Intellectual property rights"),
    ("restricted", "Restricted"),
    ("otherrestrictions", "Other restrictions"),
    ("unrestricted", "Unrestricted"),
    ("licenceunrestricted", "Licence unrestricted"),
    ("licenceenduser", "Licence end user"),
    ("licencedistributor", "Licence distributor"),
    ("private", "Private"),
    ("privacy", "Private"),
    ("statutory", "Statutory"),
    ("confidential", "Confidential"),
    ("sbu", "Sensitive but unclassified"),
    ("sensitivebutunclassified", "Sensitive but unclassified"),
    ("inconfidence", "In confidence"),
];

/// CI_RoleCode: function performed by the responsible party.
pub const ROLE: NameTable = &[
    ("resourceprovider", "Resource provider"),
    ("custodian", "Custodian"),
    ("owner", "Owner"),
    ("sponsor", "Sponsor"),
    ("user", "User"),
    ("distributor", "Distributor"),
    ("originator", "Originator"),
    ("pointofcontact", "Point of contact"),
    ("principalinvestigator", "Principal investigator"),
    ("processor", "Processor"),
    ("publisher", "Publisher"),
    ("author", "Author"),
    ("coauthor", "Co-author"),
    ("collaborator", "Collaborator"),
    ("editor", "Editor"),
    ("mediator", "Mediator"),
    ("rightsholder", "Rights holder"),
    ("contributor", "Contributor"),
    ("funder", "Funder"),
    ("stakeholder", "Stakeholder"),
];

/// MD_ProgressCode: status of the dataset.
pub const PROGRESS: NameTable = &[
    ("completed", "Completed"),
    ("historicalarchive", "Historical archive"),
    ("obsolete", "Obsolete"),
    ("ongoing", "On-going"),
    ("planned", "Planned"),
    ("required", "Required"),
    ("underdevelopment", "Under development"),
    ("final", "Final"),
    ("pending", "Pending"),
    ("retired", "Retired"),
    ("superseded", "Superseded"),
    ("tentative", "Tentative"),
    ("valid", "Valid"),
    ("accepted", "Accepted"),
    ("notaccepted", "Not accepted"),
    ("withdrawn", "Withdrawn"),
    ("proposed", "Proposed"),
    ("deprecated", "Deprecated"),
];

/// MD_MaintenanceFrequencyCode.
pub const MAINTENANCE_FREQUENCY: NameTable = &[
    ("continual", "Continual"),
    ("daily", "Daily"),
    ("weekly", "Weekly"),
    ("fortnightly", "Fortnightly"),
    ("monthly", "Monthly"),
    ("quarterly", "Quarterly"),
    ("biannually", "Biannually"),
    ("annually", "Annually"),
    ("asneeded", "As needed"),
    ("irregular", "Irregular"),
    ("notplanned", "Not planned"),
    ("unknown", "Unknown"),
    ("semimonthly", "Semi-monthly"),
    ("periodic", "Periodic"),
    ("biennially", "Biennially"),
];

/// MD_TopicCategoryCode: high-level thematic classification.
pub const TOPIC_CATEGORY: NameTable = &[
    ("farming", "Farming"),
    ("biota", "Biota"),
    ("boundaries", "Boundaries"),
    ("climatologymeteorologyatmosphere", "Climatology, meteorology, atmosphere"),
    ("economy", "Economy"),
    ("elevation", "Elevation"),
    ("environment", "Environment"),
    ("geoscientificinformation", "Geoscientific information"),
    ("health", "Health"),
    ("imagerybasemapsearthcover", "Imagery, base maps, earth cover"),
    ("intelligencemilitary", "Intelligence, military"),
    ("inlandwaters", "Inland waters"),
    ("location", "Location"),
    ("oceans", "Oceans"),
    ("planningcadastre", "Planning, cadastre"),
    ("society", "Society"),
    ("structure", "Structure"),
    ("transportation", "Transportation"),
    ("utilitiescommunication", "Utilities, communication"),
    ("extraterrestrial", "Extra-terrestrial"),
    ("disaster", "Disaster"),
];

/// MD_ScopeCode: class of information the metadata applies to.
pub const SCOPE: NameTable = &[
    ("attribute", "Attribute"),
    ("attributetype", "Attribute type"),
    ("collectionhardware", "Collection hardware"),
    ("collectionsession", "Collection session"),
    ("dataset", "Dataset"),
    ("series", "Series"),
    ("nongeographicdataset", "Non-geographic dataset"),
    ("dimensiongroup", "Dimension group"),
    ("feature", "Feature"),
    ("featuretype", "Feature type"),
    ("propertytype", "Property type"),
    ("fieldsession", "Field session"),
    ("software", "Software"),
    ("service", "Service"),
    ("model", "Model"),
    ("tile", "Tile"),
    ("metadata", "Metadata"),
    ("initiative", "Initiative"),
    ("sample", "Sample"),
    ("document", "Document"),
    ("repository", "Repository"),
    ("aggregate", "Aggregate"),
    ("product", "Product"),
    ("collection", "Collection"),
    ("coverage", "Coverage"),
    ("application", "Application"),
    ("stereomate", "Stereomate"),
    ("sensor", "Sensor"),
    ("platformseries", "Platform series"),
    ("sensorseries", "Sensor series"),
    ("productionseries", "Production series"),
    ("transferaggregate", "Transfer aggregate"),
    ("otheraggregate", "Other aggregate"),
];

/// MD_CharacterSetCode.
pub const CHARACTER_SET: NameTable = &[
    ("ucs2", "UCS-2"),
    ("ucs4", "UCS-4"),
    ("utf7", "UTF-7"),
    ("utf8", "UTF-8"),
    ("utf16", "UTF-16"),
    ("8859part1", "ISO 8859-1"),
    ("8859part2", "ISO 8859-2"),
    ("8859part3", "ISO 8859-3"),
    ("8859part4", "ISO 8859-4"),
    ("8859part5", "ISO 8859-5"),
    ("8859part6", "ISO 8859-6"),
    ("8859part7", "ISO 8859-7"),
    ("8859part8", "ISO 8859-8"),
    ("8859part9", "ISO 8859-9"),
    ("8859part10", "ISO 8859-10"),
    ("8859part11", "ISO 8859-11"),
    ("8859part13", "ISO 8859-13"),
    ("8859part14", "ISO 8859-14"),
    ("8859part15", "ISO 8859-15"),
    ("8859part16", "ISO 8859-16"),
    ("usascii", "US ASCII"),
    ("ebcdic", "EBCDIC"),
    ("jis", "JIS"),
    ("shiftjis", "Shift JIS"),
    ("eucjp", "EUC-JP"),
    ("euckr", "EUC-KR"),
    ("big5", "Big 5"),
    ("gb2312", "GB 2312"),
];

/// MD_SpatialRepresentationTypeCode.
pub const SPATIAL_REPRESENTATION: NameTable = &[
    ("vector", "Vector"),
    ("grid", "Grid"),
    ("texttable", "Text, table"),
    ("tin", "TIN"),
    ("stereomodel", "Stereo model"),
    ("video", "Video"),
];

/// MD_TopologyLevelCode.
pub const TOPOLOGY_LEVEL: NameTable = &[
    ("geometryonly", "Geometry only"),
    ("topology1d", "Topology 1D"),
    ("planargraph", "Planar graph"),
    ("fullplanargraph", "Full planar graph"),
    ("surfacegraph", "Surface graph"),
    ("fullsurfacegraph", "Full surface graph"),
    ("topology3d", "Topology 3D"),
    ("fulltopology3d", "Full topology 3D"),
    ("abstract", "Abstract"),
];

/// CI_PresentationFormCode.
pub const PRESENTATION_FORM: NameTable = &[
    ("documentdigital", "Document (digital)"),
    ("documenthardcopy", "Document (hard copy)"),
    ("imagedigital", "Image (digital)"),
    ("imagehardcopy", "Image (hard copy)"),
    ("mapdigital", "Map (digital)"),
    ("maphardcopy", "Map (hard copy)"),
    ("modeldigital", "Model (digital)"),
    ("modelhardcopy", "Model (hard copy)"),
    ("profiledigital", "Profile (digital)"),
    ("profilehardcopy", "Profile (hard copy)"),
    ("tabledigital", "Table (digital)"),
    ("tablehardcopy", "Table (hard copy)"),
    ("videodigital", "Video (digital)"),
    ("videohardcopy", "Video (hard copy)"),
    ("audiodigital", "Audio (digital)"),
    ("audiohardcopy", "Audio (hard copy)"),
    ("multimediadigital", "Multimedia (digital)"),
    ("multimediahardcopy", "Multimedia (hard copy)"),
    ("diagramdigital", "Diagram (digital)"),
    ("diagramhardcopy", "Diagram (hard copy)"),
    ("physicalobject", "Physical object"),
];

/// MD_GeometricObjectTypeCode: geometry type of features.
pub const GEOMETRIC_OBJECT_TYPE: NameTable = &[
    ("complex", "Complex"),
    ("composite", "Composite"),
    ("curve", "Curve"),
    ("point", "Point"),
    ("solid", "Solid"),
    ("surface", "Surface"),
];

/// ArcGIS item content type (imsContentType). Vendor-specific; numeric
/// codes are 1-based positions in this table and have no external source.
pub const CONTENT_TYPE: NameTable = &[
    ("livedataandmaps", "Live Data and Maps"),
    ("downloadabledata", "Downloadable Data"),
    ("offlinedata", "Offline Data"),
    ("staticmapimages", "Static Map Images"),
    ("otherdocuments", "Other Documents"),
    ("applications", "Applications"),
    ("geographicservices", "Geographic Services"),
    ("clearinghouses", "Clearinghouses"),
    ("mapfiles", "Map Files"),
    ("geographicactivities", "Geographic Activities"),
];

/// All codelists whose number tables are derived from the coded-value
/// reference rows, paired with their name tables.
pub const REFERENCE_CODELISTS: &[(&str, NameTable)] = &[
    ("CI_PresentationFormCode", PRESENTATION_FORM),
    ("CI_RoleCode", ROLE),
    ("MD_CharacterSetCode", CHARACTER_SET),
    ("MD_GeometricObjectTypeCode", GEOMETRIC_OBJECT_TYPE),
    ("MD_MaintenanceFrequencyCode", MAINTENANCE_FREQUENCY),
    ("MD_ProgressCode", PROGRESS),
    ("MD_RestrictionCode", RESTRICTION),
    ("MD_ScopeCode", SCOPE),
    ("MD_SpatialRepresentationTypeCode", SPATIAL_REPRESENTATION),
    ("MD_TopicCategoryCode", TOPIC_CATEGORY),
    ("MD_TopologyLevelCode", TOPOLOGY_LEVEL),
];

/// Turn a camelCase or lowercase code name into a display label.
///
/// Fallback for codes the name tables do not cover: inserts spaces before
/// internal capitals, capitalises the first letter, keeps the final
/// segment of slash-joined codes, maps reserved-slot tokens to
/// "Reserved" and uses the UK spelling for "license".
pub fn format_code_label(std_code: &str) -> String {
    let s = std_code.trim();
    if s.is_empty() {
        return String::new();
    }
    if s.starts_with('(') && s.to_lowercase().contains("reserved") {
        return "Reserved".to_string();
    }
    let s = s.rsplit('/').next().unwrap_or(s);
    let mut out = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            out.push(' ');
            out.push(c);
        } else if i == 0 || out.ends_with(' ') {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
    }
    let result = out.split_whitespace().collect::<Vec<_>>().join(" ");
    if result.eq_ignore_ascii_case("license") {
        return "Licence".to_string();
    }
    result
}
