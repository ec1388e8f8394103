//! Conformance evaluation for geospatial metadata.
//!
//! Two strategies share the same verdict model:
//!
//! - **loose**: classifies whatever the extraction engine pulled out of
//!   either dialect against the obligation table;
//! - **strict**: runs a fixed catalog of namespace-qualified checks
//!   against the canonical ISO 19139 schema and tracks per-check
//!   Present/Empty/Absent outcomes.

pub mod loose;
pub mod obligation;
pub mod strict;

pub use obligation::{FIELD_OBLIGATION, classify};
pub use strict::{CHECKS, SKIP_REASON, StrictCheck, check_document, summarise};
