//! Taxonomy classification of raw degree and field text
//!
//! Maps free-text degree and field descriptions onto the normalized taxonomy
//! via ordered keyword matching. Classification is a pure function of the two
//! input strings and the configured keyword tables: no I/O, no randomness.

use crate::config::TaxonomyConfig;
use crate::models::types::{DegreeLevel, FieldCategory};

/// Classifier over the configured keyword tables
///
/// Keyword tables are lowercased once at construction so per-record
/// classification allocates nothing beyond the lowercased input.
#[derive(Debug, Clone)]
pub struct TaxonomyClassifier {
    bachelor: Vec<String>,
    master: Vec<String>,
    doctorate: Vec<String>,
    diploma: Vec<String>,
    engineering: Vec<String>,
    business: Vec<String>,
    sciences: Vec<String>,
    humanities: Vec<String>,
}

impl TaxonomyClassifier {
    /// Build a classifier from a taxonomy configuration
    #[must_use]
    pub fn new(config: &TaxonomyConfig) -> Self {
        Self {
            bachelor: lowercase_table(&config.bachelor_keywords),
            master: lowercase_table(&config.master_keywords),
            doctorate: lowercase_table(&config.doctorate_keywords),
            diploma: lowercase_table(&config.diploma_keywords),
            engineering: lowercase_table(&config.engineering_keywords),
            business: lowercase_table(&config.business_keywords),
            sciences: lowercase_table(&config.sciences_keywords),
            humanities: lowercase_table(&config.humanities_keywords),
        }
    }

    /// Classify free-text degree description into a degree level
    ///
    /// Tables are checked in fixed priority order, first match wins:
    /// Bachelor's, Master's, Doctorate, Diploma. Empty text is Unknown;
    /// non-empty text matching nothing is Certificate/Other.
    #[must_use]
    pub fn classify_degree(&self, degree_text: &str) -> DegreeLevel {
        if degree_text.trim().is_empty() {
            return DegreeLevel::Unknown;
        }

        let degree_lower = degree_text.to_lowercase();

        if matches_any(&degree_lower, &self.bachelor) {
            return DegreeLevel::Bachelors;
        }
        if matches_any(&degree_lower, &self.master) {
            return DegreeLevel::Masters;
        }
        if matches_any(&degree_lower, &self.doctorate) {
            return DegreeLevel::Doctorate;
        }
        if matches_any(&degree_lower, &self.diploma) {
            return DegreeLevel::Diploma;
        }

        DegreeLevel::CertificateOther
    }

    /// Classify free-text field of study into a field category
    ///
    /// When the field text is empty the degree text decides: an MBA implies
    /// Business, anything else is Unknown. Non-empty field text is checked in
    /// fixed priority order: engineering, business, sciences, humanities;
    /// a miss on all tables is Other.
    #[must_use]
    pub fn classify_field(&self, field_text: &str, degree_text: &str) -> FieldCategory {
        if field_text.trim().is_empty() {
            if degree_text.to_lowercase().contains("mba") {
                return FieldCategory::Business;
            }
            return FieldCategory::Unknown;
        }

        let field_lower = field_text.to_lowercase();

        if matches_any(&field_lower, &self.engineering) {
            return FieldCategory::EngineeringTech;
        }
        if matches_any(&field_lower, &self.business) {
            return FieldCategory::Business;
        }
        if matches_any(&field_lower, &self.sciences) {
            return FieldCategory::Sciences;
        }
        if matches_any(&field_lower, &self.humanities) {
            return FieldCategory::Humanities;
        }

        FieldCategory::Other
    }
}

impl Default for TaxonomyClassifier {
    fn default() -> Self {
        Self::new(&TaxonomyConfig::default())
    }
}

fn matches_any(text: &str, table: &[String]) -> bool {
    table.iter().any(|keyword| text.contains(keyword.as_str()))
}

fn lowercase_table(table: &[String]) -> Vec<String> {
    table.iter().map(|keyword| keyword.to_lowercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_priority_order() {
        let classifier = TaxonomyClassifier::default();
        // "Bachelor of Science" hits the bachelor table before anything else
        assert_eq!(
            classifier.classify_degree("Bachelor of Science"),
            DegreeLevel::Bachelors
        );
        // MBA is a master's, not a business degree level
        assert_eq!(classifier.classify_degree("MBA"), DegreeLevel::Masters);
        assert_eq!(
            classifier.classify_degree("Dr. rer. nat. / Doctorate"),
            DegreeLevel::Doctorate
        );
        assert_eq!(
            classifier.classify_degree("Dipl.-Ing."),
            DegreeLevel::Diploma
        );
    }

    #[test]
    fn test_degree_empty_and_unmatched() {
        let classifier = TaxonomyClassifier::default();
        assert_eq!(classifier.classify_degree(""), DegreeLevel::Unknown);
        assert_eq!(classifier.classify_degree("   "), DegreeLevel::Unknown);
        assert_eq!(
            classifier.classify_degree("Exchange Semester"),
            DegreeLevel::CertificateOther
        );
    }

    #[test]
    fn test_field_empty_branches() {
        let classifier = TaxonomyClassifier::default();
        // Empty field with an MBA degree resolves to Business
        assert_eq!(
            classifier.classify_field("", "Executive MBA"),
            FieldCategory::Business
        );
        // Empty field with any other degree text stays Unknown
        assert_eq!(
            classifier.classify_field("", "M.Sc. Computer Science"),
            FieldCategory::Unknown
        );
        assert_eq!(classifier.classify_field("", ""), FieldCategory::Unknown);
    }

    #[test]
    fn test_field_priority_order() {
        let classifier = TaxonomyClassifier::default();
        // "industrial engineering and management" matches engineering first
        assert_eq!(
            classifier.classify_field("Industrial Engineering and Management", "M.Sc."),
            FieldCategory::EngineeringTech
        );
        assert_eq!(
            classifier.classify_field("Finance", ""),
            FieldCategory::Business
        );
        assert_eq!(
            classifier.classify_field("Molecular Biology", ""),
            FieldCategory::Sciences
        );
        assert_eq!(
            classifier.classify_field("Media and Communication", ""),
            FieldCategory::Humanities
        );
        assert_eq!(
            classifier.classify_field("Viticulture", ""),
            FieldCategory::Other
        );
    }

    #[test]
    fn test_classification_is_deterministic() {
        let classifier = TaxonomyClassifier::default();
        for _ in 0..2 {
            assert_eq!(
                classifier.classify_degree("M.Sc. Computer Science"),
                DegreeLevel::Masters
            );
            assert_eq!(
                classifier.classify_field("Computer Science", "M.Sc."),
                FieldCategory::EngineeringTech
            );
        }
    }
}
