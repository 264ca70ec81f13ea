//! Pipeline algorithms
//!
//! The classification, bridge handling, sequence building and extraction
//! logic, plus aggregate statistics over the extracted sequences.

pub mod bridge;
pub mod builder;
pub mod classify;
pub mod extraction;
pub mod statistics;

pub use bridge::{BridgeDetector, BridgeInsertion};
pub use builder::SequenceBuilder;
pub use classify::TaxonomyClassifier;
pub use extraction::{PathExtractor, extract_paths};
pub use statistics::{SequenceStats, SequenceStatistics, Transition};
