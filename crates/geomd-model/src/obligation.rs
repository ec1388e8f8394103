//! Obligation levels per INSPIRE Regulation 1205/2008.
//!
//! Every known metadata field carries one of three obligation levels.
//! Fields the obligation table does not know about are optional.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Obligation level of a metadata field.
///
/// - **Mandatory**: must be present with non-empty content for a document
///   to be conformant.
/// - **Conditional**: required only when the governing condition applies;
///   never counted against conformance here.
/// - **Optional**: may be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Obligation {
    Mandatory,
    Conditional,
    Optional,
}

impl Obligation {
    /// Returns the lowercase name used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Obligation::Mandatory => "mandatory",
            Obligation::Conditional => "conditional",
            Obligation::Optional => "optional",
        }
    }

    /// Returns true if this field counts against the conformant flag.
    pub fn is_mandatory(&self) -> bool {
        matches!(self, Obligation::Mandatory)
    }
}

impl fmt::Display for Obligation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Obligation {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mandatory" => Ok(Obligation::Mandatory),
            "conditional" => Ok(Obligation::Conditional),
            "optional" => Ok(Obligation::Optional),
            _ => Err(ModelError::UnknownObligation(s.to_string())),
        }
    }
}
