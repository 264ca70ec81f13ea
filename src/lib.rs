//! A Rust library for extracting alumni education trajectories from raw JSON
//! records, with taxonomy-based classification, bridge-program handling and
//! filtering.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod filter;
pub mod loader;
pub mod models;

// Re-export the most common types for easier use
// Core types
pub use config::{BridgeFieldPolicy, TaxonomyConfig};
pub use error::{PathError, Result};
pub use loader::{PathDataset, load_alumni, load_dataset, load_schools};

// Domain models
pub use models::{
    BridgeLevel, DegreeLevel, EducationSequence, FieldCategory, InstitutionType, Person,
    RawEducationRecord, RawSchoolRecord, SchoolDirectory, SchoolInfo, StageKey, StageNode,
};

// Pipeline entry points
pub use algorithm::{PathExtractor, SequenceBuilder, TaxonomyClassifier, extract_paths};
pub use algorithm::{SequenceStats, SequenceStatistics};

// Filtering capabilities
pub use filter::{FilterCriteria, PathFilter, SequenceFilter};
