//! Inlined vendor coded-value reference rows.
//!
//! ArcGIS exports store codelist values as zero-padded numeric codes.
//! The mapping from numeric code to standard ISO 19139 code name is
//! published in the ArcGIS Pro Metadata Toolkit reference workbook
//! ("ArcGIS Metadata Details", Coded Values sheet). These rows reproduce
//! that table so the registry can be built without the external file.
//!
//! Row shape: (codelist name, vendor numeric code, standard code name).

pub type CodedValueRow = (&'static str, &'static str, &'static str);

pub const CODED_VALUES: &[CodedValueRow] = &[
    ("CI_PresentationFormCode", "001", "documentDigital"),
    ("CI_PresentationFormCode", "002", "documentHardcopy"),
    ("CI_PresentationFormCode", "003", "imageDigital"),
    ("CI_PresentationFormCode", "004", "imageHardcopy"),
    ("CI_PresentationFormCode", "005", "mapDigital"),
    ("CI_PresentationFormCode", "006", "mapHardcopy"),
    ("CI_PresentationFormCode", "007", "modelDigital"),
    ("CI_PresentationFormCode", "008", "modelHardcopy"),
    ("CI_PresentationFormCode", "009", "profileDigital"),
    ("CI_PresentationFormCode", "010", "profileHardcopy"),
    ("CI_PresentationFormCode", "011", "tableDigital"),
    ("CI_PresentationFormCode", "012", "tableHardcopy"),
    ("CI_PresentationFormCode", "013", "videoDigital"),
    ("CI_PresentationFormCode", "014", "videoHardcopy"),
    ("CI_PresentationFormCode", "015", "audioDigital"),
    ("CI_PresentationFormCode", "016", "audioHardcopy"),
    ("CI_PresentationFormCode", "017", "multimediaDigital"),
    ("CI_PresentationFormCode", "018", "multimediaHardcopy"),
    ("CI_PresentationFormCode", "019", "diagramDigital"),
    ("CI_PresentationFormCode", "020", "diagramHardcopy"),
    ("CI_PresentationFormCode", "021", "physicalObject"),
    ("CI_RoleCode", "001", "resourceProvider"),
    ("CI_RoleCode", "002", "custodian"),
    ("CI_RoleCode", "003", "owner"),
    ("CI_RoleCode", "004", "user"),
    ("CI_RoleCode", "005", "distributor"),
    ("CI_RoleCode", "006", "originator"),
    ("CI_RoleCode", "007", "pointOfContact"),
    ("CI_RoleCode", "008", "principalInvestigator"),
    ("CI_RoleCode", "009", "processor"),
    ("CI_RoleCode", "010", "publisher"),
    ("CI_RoleCode", "011", "author"),
    ("CI_RoleCode", "012", "collaborator"),
    ("CI_RoleCode", "013", "editor"),
    ("CI_RoleCode", "014", "mediator"),
    ("CI_RoleCode", "015", "rightsHolder"),
    ("CI_RoleCode", "016", "sponsor"),
    ("CI_RoleCode", "017", "coAuthor"),
    ("CI_RoleCode", "018", "contributor"),
    ("CI_RoleCode", "019", "funder"),
    ("CI_RoleCode", "020", "stakeholder"),
    ("MD_MaintenanceFrequencyCode", "001", "continual"),
    ("MD_MaintenanceFrequencyCode", "002", "daily"),
    ("MD_MaintenanceFrequencyCode", "003", "weekly"),
    ("MD_MaintenanceFrequencyCode", "004", "fortnightly"),
    ("MD_MaintenanceFrequencyCode", "005", "monthly"),
    ("MD_MaintenanceFrequencyCode", "006", "quarterly"),
    ("MD_MaintenanceFrequencyCode", "007", "biannually"),
    ("MD_MaintenanceFrequencyCode", "008", "annually"),
    ("MD_MaintenanceFrequencyCode", "009", "asNeeded"),
    ("MD_MaintenanceFrequencyCode", "010", "irregular"),
    ("MD_MaintenanceFrequencyCode", "011", "notPlanned"),
    ("MD_MaintenanceFrequencyCode", "012", "unknown"),
    ("MD_MaintenanceFrequencyCode", "013", "semimonthly"),
    ("MD_MaintenanceFrequencyCode", "014", "periodic"),
    ("MD_MaintenanceFrequencyCode", "015", "biennially"),
    ("MD_ProgressCode", "001", "completed"),
    ("MD_ProgressCode", "002", "historicalArchive"),
    ("MD_ProgressCode", "003", "obsolete"),
    ("MD_ProgressCode", "004", "onGoing"),
    ("MD_ProgressCode", "005", "planned"),
    ("MD_ProgressCode", "006", "required"),
    ("MD_ProgressCode", "007", "underDevelopment"),
    ("MD_ProgressCode", "008", "proposed"),
    ("MD_ProgressCode", "009", "final"),
    ("MD_ProgressCode", "010", "pending"),
    ("MD_ProgressCode", "011", "retired"),
    ("MD_ProgressCode", "012", "superseded"),
    ("MD_ProgressCode", "013", "tentative"),
    ("MD_ProgressCode", "014", "valid"),
    ("MD_ProgressCode", "015", "accepted"),
    ("MD_ProgressCode", "016", "notAccepted"),
    ("MD_ProgressCode", "017", "withdrawn"),
    ("MD_ProgressCode", "018", "deprecated"),
    ("MD_RestrictionCode", "001", "copyright"),
    ("MD_RestrictionCode", "002", "patent"),
    ("MD_RestrictionCode", "003", "patentPending"),
    ("MD_RestrictionCode", "004", "trademark"),
    ("MD_RestrictionCode", "005", "license"),
    ("MD_RestrictionCode", "006", "intellectualPropertyRights"),
    ("MD_RestrictionCode", "007", "restricted"),
    ("MD_RestrictionCode", "008", "otherRestrictions"),
    ("MD_RestrictionCode", "009", "licenseUnrestricted"),
    ("MD_RestrictionCode", "010", "licenseEndUser"),
    ("MD_RestrictionCode", "011", "licenseDistributor"),
    ("MD_RestrictionCode", "012", "privacy"),
    ("MD_RestrictionCode", "013", "statutory"),
    ("MD_RestrictionCode", "014", "confidential"),
    ("MD_RestrictionCode", "015", "sensitivity/sensitiveButUnclassified"),
    ("MD_RestrictionCode", "016", "unrestricted"),
    ("MD_RestrictionCode", "017", "in-confidence"),
    ("MD_ScopeCode", "001", "attribute"),
    ("MD_ScopeCode", "002", "attributeType"),
    ("MD_ScopeCode", "003", "collectionHardware"),
    ("MD_ScopeCode", "004", "collectionSession"),
    ("MD_ScopeCode", "005", "dataset"),
    ("MD_ScopeCode", "006", "series"),
    ("MD_ScopeCode", "007", "nonGeographicDataset"),
    ("MD_ScopeCode", "008", "dimensionGroup"),
    ("MD_ScopeCode", "009", "feature"),
    ("MD_ScopeCode", "010", "featureType"),
    ("MD_ScopeCode", "011", "propertyType"),
    ("MD_ScopeCode", "012", "fieldSession"),
    ("MD_ScopeCode", "013", "software"),
    ("MD_ScopeCode", "014", "service"),
    ("MD_ScopeCode", "015", "model"),
    ("MD_ScopeCode", "016", "tile"),
    ("MD_ScopeCode", "017", "initiative"),
    ("MD_ScopeCode", "018", "stereomate"),
    ("MD_ScopeCode", "019", "sensor"),
    ("MD_ScopeCode", "020", "platformSeries"),
    ("MD_ScopeCode", "021", "sensorSeries"),
    ("MD_ScopeCode", "022", "productionSeries"),
    ("MD_ScopeCode", "023", "transferAggregate"),
    ("MD_ScopeCode", "024", "otherAggregate"),
    ("MD_ScopeCode", "025", "metadata"),
    ("MD_ScopeCode", "026", "sample"),
    ("MD_ScopeCode", "027", "document"),
    ("MD_ScopeCode", "028", "repository"),
    ("MD_ScopeCode", "029", "aggregate"),
    ("MD_ScopeCode", "030", "product"),
    ("MD_ScopeCode", "031", "collection"),
    ("MD_ScopeCode", "032", "coverage"),
    ("MD_ScopeCode", "033", "application"),
    ("MD_SpatialRepresentationTypeCode", "001", "vector"),
    ("MD_SpatialRepresentationTypeCode", "002", "grid"),
    ("MD_SpatialRepresentationTypeCode", "003", "textTable"),
    ("MD_SpatialRepresentationTypeCode", "004", "tin"),
    ("MD_SpatialRepresentationTypeCode", "005", "stereoModel"),
    ("MD_SpatialRepresentationTypeCode", "006", "video"),
    ("MD_TopicCategoryCode", "001", "farming"),
    ("MD_TopicCategoryCode", "002", "biota"),
    ("MD_TopicCategoryCode", "003", "boundaries"),
    ("MD_TopicCategoryCode", "004", "climatologyMeteorologyAtmosphere"),
    ("MD_TopicCategoryCode", "005", "economy"),
    ("MD_TopicCategoryCode", "006", "elevation"),
    ("MD_TopicCategoryCode", "007", "environment"),
    ("MD_TopicCategoryCode", "008", "geoscientificInformation"),
    ("MD_TopicCategoryCode", "009", "health"),
    ("MD_TopicCategoryCode", "010", "imageryBaseMapsEarthCover"),
    ("MD_TopicCategoryCode", "011", "intelligenceMilitary"),
    ("MD_TopicCategoryCode", "012", "inlandWaters"),
    ("MD_TopicCategoryCode", "013", "location"),
    ("MD_TopicCategoryCode", "014", "oceans"),
    ("MD_TopicCategoryCode", "015", "planningCadastre"),
    ("MD_TopicCategoryCode", "016", "society"),
    ("MD_TopicCategoryCode", "017", "structure"),
    ("MD_TopicCategoryCode", "018", "transportation"),
    ("MD_TopicCategoryCode", "019", "utilitiesCommunication"),
    ("MD_TopicCategoryCode", "020", "extraTerrestrial"),
    ("MD_TopicCategoryCode", "021", "disaster"),
    ("MD_TopologyLevelCode", "001", "geometryOnly"),
    ("MD_TopologyLevelCode", "002", "topology1D"),
    ("MD_TopologyLevelCode", "003", "planarGraph"),
    ("MD_TopologyLevelCode", "004", "fullPlanarGraph"),
    ("MD_TopologyLevelCode", "005", "surfaceGraph"),
    ("MD_TopologyLevelCode", "006", "fullSurfaceGraph"),
    ("MD_TopologyLevelCode", "007", "topology3D"),
    ("MD_TopologyLevelCode", "008", "fullTopology3D"),
    ("MD_TopologyLevelCode", "009", "abstract"),
    ("MD_CharacterSetCode", "001", "ucs2"),
    ("MD_CharacterSetCode", "002", "ucs4"),
    ("MD_CharacterSetCode", "003", "utf7"),
    ("MD_CharacterSetCode", "004", "utf8"),
    ("MD_CharacterSetCode", "005", "utf16"),
    ("MD_CharacterSetCode", "006", "8859part1"),
    ("MD_CharacterSetCode", "007", "8859part2"),
    ("MD_CharacterSetCode", "008", "8859part3"),
    ("MD_CharacterSetCode", "009", "8859part4"),
    ("MD_CharacterSetCode", "010", "8859part5"),
    ("MD_CharacterSetCode", "011", "8859part6"),
    ("MD_CharacterSetCode", "012", "8859part7"),
    ("MD_CharacterSetCode", "013", "8859part8"),
    ("MD_CharacterSetCode", "014", "8859part9"),
    ("MD_CharacterSetCode", "015", "8859part10"),
    ("MD_CharacterSetCode", "016", "8859part11"),
    ("MD_CharacterSetCode", "017", "(reserved for future use)"),
    ("MD_CharacterSetCode", "018", "8859part13"),
    ("MD_CharacterSetCode", "019", "8859part14"),
    ("MD_CharacterSetCode", "020", "8859part15"),
    ("MD_CharacterSetCode", "021", "8859part16"),
    ("MD_CharacterSetCode", "022", "jis"),
    ("MD_CharacterSetCode", "023", "shiftJIS"),
    ("MD_CharacterSetCode", "024", "eucJP"),
    ("MD_CharacterSetCode", "025", "usAscii"),
    ("MD_CharacterSetCode", "026", "ebcdic"),
    ("MD_CharacterSetCode", "027", "eucKR"),
    ("MD_CharacterSetCode", "028", "big5"),
    ("MD_CharacterSetCode", "029", "GB2312"),
    ("MD_GeometricObjectTypeCode", "001", "complex"),
    ("MD_GeometricObjectTypeCode", "002", "composite"),
    ("MD_GeometricObjectTypeCode", "003", "curve"),
    ("MD_GeometricObjectTypeCode", "004", "point"),
    ("MD_GeometricObjectTypeCode", "005", "solid"),
    ("MD_GeometricObjectTypeCode", "006", "surface"),
];
