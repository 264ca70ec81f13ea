//! Schools reference data
//!
//! This module contains the school metadata record and the directory used to
//! resolve institution names. The directory is an exact-match lookup table;
//! names absent from the reference dataset resolve to documented defaults
//! rather than failing. There is no fuzzy matching.

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::models::types::InstitutionType;

/// Metadata for one institution from the schools reference dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchoolInfo {
    /// Institution type
    pub institution_type: InstitutionType,
    /// Country of the institution
    pub country: String,
    /// Whether the institution is considered top tier
    pub is_top_tier: bool,
}

impl Default for SchoolInfo {
    /// Default used for institutions missing from the reference dataset.
    /// Nearly all unlisted schools in the source data are plain universities,
    /// so the type defaults to University rather than Unknown.
    fn default() -> Self {
        Self {
            institution_type: InstitutionType::University,
            country: "Unknown".to_string(),
            is_top_tier: false,
        }
    }
}

/// Raw school record as it appears in the reference JSON
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSchoolRecord {
    /// Institution type label, e.g. "Technical University"
    #[serde(default)]
    pub institution_type: String,
    /// Country name
    #[serde(default)]
    pub country: String,
    /// Top-tier flag
    #[serde(default)]
    pub is_top_tier: bool,
}

impl From<RawSchoolRecord> for SchoolInfo {
    fn from(raw: RawSchoolRecord) -> Self {
        let country = if raw.country.trim().is_empty() {
            "Unknown".to_string()
        } else {
            raw.country
        };
        Self {
            institution_type: InstitutionType::from(raw.institution_type.as_str()),
            country,
            is_top_tier: raw.is_top_tier,
        }
    }
}

/// Lookup table from exact institution name to school metadata
#[derive(Debug, Clone, Default)]
pub struct SchoolDirectory {
    schools: FxHashMap<String, SchoolInfo>,
    default_info: SchoolInfo,
}

impl SchoolDirectory {
    /// Create an empty directory (every lookup resolves to the default)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a directory from raw reference records keyed by school name
    #[must_use]
    pub fn from_records(records: FxHashMap<String, RawSchoolRecord>) -> Self {
        let schools = records
            .into_iter()
            .map(|(name, raw)| (name, SchoolInfo::from(raw)))
            .collect();
        Self {
            schools,
            default_info: SchoolInfo::default(),
        }
    }

    /// Resolve an institution name to its metadata
    ///
    /// Lookup is case-sensitive exact match. Unknown names resolve to the
    /// default metadata and never fail.
    #[must_use]
    pub fn resolve(&self, school_name: &str) -> &SchoolInfo {
        self.schools.get(school_name).unwrap_or(&self.default_info)
    }

    /// Whether the directory has an entry for this exact name
    #[must_use]
    pub fn contains(&self, school_name: &str) -> bool {
        self.schools.contains_key(school_name)
    }

    /// Number of institutions in the directory
    #[must_use]
    pub fn len(&self) -> usize {
        self.schools.len()
    }

    /// Whether the directory is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_school() {
        let mut records = FxHashMap::default();
        records.insert(
            "Technical University of Munich".to_string(),
            RawSchoolRecord {
                institution_type: "Technical University".to_string(),
                country: "Germany".to_string(),
                is_top_tier: true,
            },
        );
        let directory = SchoolDirectory::from_records(records);

        let info = directory.resolve("Technical University of Munich");
        assert_eq!(info.institution_type, InstitutionType::TechnicalUniversity);
        assert_eq!(info.country, "Germany");
        assert!(info.is_top_tier);
    }

    #[test]
    fn test_resolve_unknown_school_defaults() {
        let directory = SchoolDirectory::new();
        let info = directory.resolve("Somewhere Else");
        assert_eq!(info.institution_type, InstitutionType::University);
        assert_eq!(info.country, "Unknown");
        assert!(!info.is_top_tier);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mut records = FxHashMap::default();
        records.insert("LMU Munich".to_string(), RawSchoolRecord::default());
        let directory = SchoolDirectory::from_records(records);

        assert!(directory.contains("LMU Munich"));
        assert!(!directory.contains("lmu munich"));
    }
}
