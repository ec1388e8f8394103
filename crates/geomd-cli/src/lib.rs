//! CLI library components for the geospatial metadata tool.

pub mod logging;
