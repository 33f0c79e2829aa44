//! Utility modules

pub mod csv_reference;
pub mod json_extractor;
pub mod memory_sources;
pub mod validation;

pub use csv_reference::*;
pub use json_extractor::*;
pub use memory_sources::*;
pub use validation::*;
