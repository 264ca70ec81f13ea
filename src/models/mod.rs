//! Domain models for the education path pipeline
//!
//! Raw input entities (persons, schools) and the classified output entities
//! (stage nodes, sequences) built by the pipeline.

pub mod person;
pub mod school;
pub mod sequence;
pub mod types;

pub use person::{Person, RawEducationRecord};
pub use school::{RawSchoolRecord, SchoolDirectory, SchoolInfo};
pub use sequence::{EducationSequence, StageKey, StageNode};
pub use types::{BridgeLevel, DegreeLevel, FieldCategory, InstitutionType};
