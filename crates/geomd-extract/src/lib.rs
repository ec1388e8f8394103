//! Field extraction for ISO 19139 / ArcGIS metadata documents.
//!
//! Two dialects are supported: the standard gmd/gco-namespaced schema
//! and the flattened vendor export. A fixed catalog of semantic fields
//! maps both shapes onto the same display names; coded values are
//! resolved through the codelist registry.

pub mod catalog;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod locate;
pub mod text;

pub use engine::{Dialect, dialect, extract};
pub use error::{ExtractError, Result};
