//! Person entity model
//!
//! This module contains the Person entity as loaded from the alumni dataset.
//! A person carries profile metadata and the ordered raw education history
//! that the pipeline classifies into a sequence.

use serde::Deserialize;

/// One entry in a person's raw education history, exactly as scraped
///
/// Degree and field are free text and may be empty. Some source files key the
/// school name as `institution`, so both spellings are accepted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEducationRecord {
    /// Institution name as it appears in the source record
    #[serde(default, alias = "institution")]
    pub school: String,
    /// Free-text degree description, possibly empty
    #[serde(default)]
    pub degree: String,
    /// Free-text field of study, possibly empty
    #[serde(default)]
    pub field: String,
}

/// A person in the alumni dataset
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Person {
    /// Full name
    #[serde(default)]
    pub full_name: String,
    /// Profile headline
    #[serde(default)]
    pub headline: String,
    /// Current location
    #[serde(default)]
    pub location: String,
    /// Profile URL, if known
    #[serde(default)]
    pub linkedin_url: Option<String>,
    /// Ordered raw education history; empty means no usable sequence
    #[serde(default)]
    pub education_path: Vec<RawEducationRecord>,
}

impl Person {
    /// Whether this person has any education history at all
    #[must_use]
    pub fn has_education(&self) -> bool {
        !self.education_path.is_empty()
    }
}
