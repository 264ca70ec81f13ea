//! Configuration for the education path pipeline
//!
//! The keyword tables driving degree and field classification are data, not
//! behavior: they can be replaced wholesale by deserializing a JSON file, so
//! deployments can tune the taxonomy without code changes. The bridge-field
//! policy picks how an inserted bridge node is grouped.

use serde::Deserialize;
use std::path::Path;

use crate::error::{PathError, Result};

/// How an inserted bridge node receives its field category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum BridgeFieldPolicy {
    /// Bridge inherits the sequence's primary field, so it is grouped with
    /// the person's main track downstream
    #[default]
    InheritPrimary,
    /// Bridge always gets the constant Bridge category
    Constant,
}

/// Configuration for classification and bridge handling
///
/// Degree and field keywords are matched case-insensitively as substrings, in
/// the listed order, first match wins. Bridge markers are matched as
/// case-sensitive substrings of the school name.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TaxonomyConfig {
    /// Keywords identifying Bachelor's degrees
    pub bachelor_keywords: Vec<String>,
    /// Keywords identifying Master's degrees (includes MBA)
    pub master_keywords: Vec<String>,
    /// Keywords identifying doctoral degrees
    pub doctorate_keywords: Vec<String>,
    /// Keywords identifying diploma degrees
    pub diploma_keywords: Vec<String>,
    /// Keywords identifying engineering and technology fields
    pub engineering_keywords: Vec<String>,
    /// Keywords identifying business and economics fields
    pub business_keywords: Vec<String>,
    /// Keywords identifying natural science fields
    pub sciences_keywords: Vec<String>,
    /// Keywords identifying humanities and social science fields
    pub humanities_keywords: Vec<String>,
    /// Substrings of a school name that mark the bridge program
    pub bridge_markers: Vec<String>,
    /// Field assignment policy for inserted bridge nodes
    pub bridge_field_policy: BridgeFieldPolicy,
}

impl Default for TaxonomyConfig {
    fn default() -> Self {
        Self {
            bachelor_keywords: str_vec(&[
                "bachelor", "b.sc", "b.a", "b.eng", "bsc", "ba ", "bs ",
            ]),
            master_keywords: str_vec(&[
                "master", "m.sc", "m.a", "m.eng", "msc", "ma ", "ms ", "mba",
            ]),
            doctorate_keywords: str_vec(&["phd", "ph.d", "doctor", "doctorate"]),
            diploma_keywords: str_vec(&["dipl", "diploma"]),
            engineering_keywords: str_vec(&[
                "engineering",
                "computer science",
                "computer",
                "informatics",
                "information systems",
                "software",
                "electrical",
                "mechanical",
                "industrial",
                "technology",
            ]),
            business_keywords: str_vec(&[
                "business",
                "management",
                "mba",
                "economics",
                "finance",
                "accounting",
                "marketing",
                "entrepreneurship",
                "bwl",
            ]),
            sciences_keywords: str_vec(&[
                "physics",
                "chemistry",
                "biology",
                "mathematics",
                "science",
                "biotechnology",
                "biotech",
            ]),
            humanities_keywords: str_vec(&[
                "psychology",
                "sociology",
                "political",
                "law",
                "humanities",
                "communication",
                "media",
                "design",
            ]),
            bridge_markers: str_vec(&["CDTM", "Center for Digital Technology"]),
            bridge_field_policy: BridgeFieldPolicy::default(),
        }
    }
}

impl TaxonomyConfig {
    /// Load a configuration override from a JSON file
    ///
    /// Fields absent from the file keep their defaults, so a file may
    /// override a single keyword table.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration can drive classification at all
    pub fn validate(&self) -> Result<()> {
        if self.bridge_markers.is_empty() {
            return Err(PathError::ConfigError(
                "bridge marker list must not be empty".to_string(),
            ));
        }
        let tables = [
            ("bachelor_keywords", &self.bachelor_keywords),
            ("master_keywords", &self.master_keywords),
            ("doctorate_keywords", &self.doctorate_keywords),
            ("diploma_keywords", &self.diploma_keywords),
            ("engineering_keywords", &self.engineering_keywords),
            ("business_keywords", &self.business_keywords),
            ("sciences_keywords", &self.sciences_keywords),
            ("humanities_keywords", &self.humanities_keywords),
        ];
        for (name, table) in tables {
            if table.is_empty() {
                return Err(PathError::ConfigError(format!(
                    "keyword table {name} must not be empty"
                )));
            }
        }
        Ok(())
    }
}

fn str_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(TaxonomyConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config: TaxonomyConfig =
            serde_json::from_str(r#"{"sciences_keywords": ["astronomy"]}"#).unwrap();
        assert_eq!(config.sciences_keywords, vec!["astronomy".to_string()]);
        assert_eq!(
            config.bachelor_keywords,
            TaxonomyConfig::default().bachelor_keywords
        );
        assert_eq!(config.bridge_field_policy, BridgeFieldPolicy::InheritPrimary);
    }

    #[test]
    fn test_empty_marker_list_is_rejected() {
        let config: TaxonomyConfig = serde_json::from_str(r#"{"bridge_markers": []}"#).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_json_file() {
        let path = std::env::temp_dir().join("edu-paths-taxonomy-override.json");
        std::fs::write(&path, r#"{"diploma_keywords": ["staatsexamen"]}"#).unwrap();

        let config = TaxonomyConfig::from_json_file(&path).unwrap();
        assert_eq!(config.diploma_keywords, vec!["staatsexamen".to_string()]);

        std::fs::remove_file(path).unwrap();
    }
}
