//! Codelist registry for ISO 19139 / ArcGIS metadata.
//!
//! Provides the fixed set of known codelists (restriction, role,
//! progress, maintenance frequency, topic category, scope, character
//! set, spatial representation type, topology level, presentation form,
//! geometric object type, plus the vendor content-type list), each with
//! a name table and a number table, built once at startup.

pub mod coded_values;
pub mod labels;
pub mod loader;
pub mod registry;

pub use labels::format_code_label;
pub use loader::load_coded_values;
pub use registry::build_registry;

/// Export fields whose raw values are resolved through a codelist, in
/// report order. Consumed by the code-resolution worksheet.
pub const FIELD_TO_CODELIST: &[(&str, &str)] = &[
    ("Access Constraints", "MD_RestrictionCode"),
    ("Presentation Form", "CI_PresentationFormCode"),
    ("Character Set", "MD_CharacterSetCode"),
    ("Spatial Representation Type", "MD_SpatialRepresentationTypeCode"),
    ("Status", "MD_ProgressCode"),
    ("Maintenance Frequency", "MD_MaintenanceFrequencyCode"),
    ("Topic Category", "MD_TopicCategoryCode"),
    ("Contact Role", "CI_RoleCode"),
    ("Topology Level", "MD_TopologyLevelCode"),
    ("Geometry Object Type", "MD_GeometricObjectTypeCode"),
    ("Feature Geometry Code", "MD_GeometricObjectTypeCode"),
    ("Data Quality Scope Level", "MD_ScopeCode"),
    ("Metadata Maintenance Frequency", "MD_MaintenanceFrequencyCode"),
    ("Metadata Scope Code", "MD_ScopeCode"),
    ("Metadata Character Set", "MD_CharacterSetCode"),
    ("Content Type", "ArcGIS_ContentTypeCode"),
];
