//! Core types shared across the metadata pipeline: extracted field
//! sets, codelists, obligation levels, and conformance verdicts.

pub mod codelist;
pub mod compliance;
pub mod error;
pub mod fields;
pub mod obligation;

pub use codelist::{Codelist, CodelistRegistry, normalise_code};
pub use compliance::{CheckOutcome, ComplianceResult, SkipRecord};
pub use error::{ModelError, Result};
pub use fields::ExtractedFields;
pub use obligation::Obligation;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compliance_result_serializes() {
        let result = ComplianceResult {
            conformant: false,
            missing_mandatory: vec!["Abstract".to_string()],
            present_mandatory: 20,
            present_conditional: 2,
            present_optional: 5,
        };
        let json = serde_json::to_string(&result).expect("serialize result");
        let round: ComplianceResult = serde_json::from_str(&json).expect("deserialize result");
        assert!(!round.conformant);
        assert_eq!(round.missing_mandatory, vec!["Abstract"]);
    }

    #[test]
    fn skip_record_round_trips() {
        let skip = SkipRecord {
            filename: "broken.xml".to_string(),
            reason: "malformed XML in broken.xml".to_string(),
        };
        let json = serde_json::to_string(&skip).expect("serialize skip");
        let round: SkipRecord = serde_json::from_str(&json).expect("deserialize skip");
        assert_eq!(round.filename, "broken.xml");
    }
}
