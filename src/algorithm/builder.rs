//! Sequence building
//!
//! Turns one person's ordered raw education history into a classified
//! education sequence: bridge records are diverted to a candidate slot,
//! everything else is classified and resolved in order, then the bridge node
//! is inserted at its planned position.

use smallvec::SmallVec;

use crate::algorithm::bridge::{self, BridgeDetector};
use crate::algorithm::classify::TaxonomyClassifier;
use crate::config::{BridgeFieldPolicy, TaxonomyConfig};
use crate::models::person::Person;
use crate::models::school::SchoolDirectory;
use crate::models::sequence::{EducationSequence, StageNode};
use crate::models::types::{DegreeLevel, FieldCategory};

/// Builds education sequences for single persons
#[derive(Debug)]
pub struct SequenceBuilder<'a> {
    classifier: TaxonomyClassifier,
    detector: BridgeDetector,
    directory: &'a SchoolDirectory,
    policy: BridgeFieldPolicy,
}

impl<'a> SequenceBuilder<'a> {
    /// Create a builder over the given configuration and school directory
    #[must_use]
    pub fn new(config: &TaxonomyConfig, directory: &'a SchoolDirectory) -> Self {
        Self {
            classifier: TaxonomyClassifier::new(config),
            detector: BridgeDetector::new(config),
            directory,
            policy: config.bridge_field_policy,
        }
    }

    /// Build the education sequence for one person
    ///
    /// Returns `None` when the person has no classifiable non-bridge records.
    /// Among several bridge-matching records, the last one seen is kept as
    /// the candidate. The minimum-length rule is not applied here; it belongs
    /// to the extraction driver, after filtering.
    #[must_use]
    pub fn build(&self, person: &Person) -> Option<EducationSequence> {
        let mut nodes: SmallVec<[StageNode; 4]> = SmallVec::new();
        let mut bridge_candidate = None;

        for record in &person.education_path {
            if self.detector.is_bridge(&record.school) {
                bridge_candidate = Some(record);
            } else {
                let degree_level = self.classifier.classify_degree(&record.degree);
                let field_category = self
                    .classifier
                    .classify_field(&record.field, &record.degree);

                nodes.push(StageNode {
                    degree_level,
                    field_category,
                    school: record.school.clone(),
                    institution: self.directory.resolve(&record.school).clone(),
                    is_bridge: false,
                    bridge_level: None,
                    original_degree: record.degree.clone(),
                    original_field: record.field.clone(),
                });
            }
        }

        // A bridge candidate alone does not make a sequence.
        if nodes.is_empty() {
            return None;
        }

        // Bridge nodes never count toward the primary field, so it is fixed
        // over the non-bridge nodes before insertion.
        let primary_candidate = nodes
            .iter()
            .find(|n| n.field_category.is_primary_candidate())
            .map(|n| n.field_category);

        if let Some(record) = bridge_candidate {
            if let Some(plan) = bridge::plan_insertion(&nodes) {
                let node = StageNode {
                    degree_level: DegreeLevel::Bridge,
                    field_category: bridge::bridge_field(self.policy, primary_candidate),
                    school: record.school.clone(),
                    institution: self.directory.resolve(&record.school).clone(),
                    is_bridge: true,
                    bridge_level: Some(plan.level),
                    original_degree: record.degree.clone(),
                    original_field: record.field.clone(),
                };
                nodes.insert(plan.index, node);
            }
        }

        Some(EducationSequence {
            nodes: nodes.into_vec(),
            primary_field: primary_candidate.unwrap_or(FieldCategory::Other),
            person_name: person.full_name.clone(),
            headline: person.headline.clone(),
            linkedin_url: person.linkedin_url.clone(),
        })
    }
}
