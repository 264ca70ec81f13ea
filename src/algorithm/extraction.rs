//! Path extraction driver
//!
//! Orchestrates the full pipeline per request: build a sequence per person,
//! apply the filter criteria, then the minimum-length rule. Each call is one
//! independent pass over the whole dataset; the dataset itself is never
//! mutated, so repeated calls with the same filter produce identical output.

use log::debug;

use crate::algorithm::builder::SequenceBuilder;
use crate::config::TaxonomyConfig;
use crate::filter::{FilterCriteria, PathFilter};
use crate::loader::PathDataset;
use crate::models::sequence::EducationSequence;

/// Extracts filtered education sequences from an immutable dataset
#[derive(Debug)]
pub struct PathExtractor<'a> {
    dataset: &'a PathDataset,
    builder: SequenceBuilder<'a>,
}

impl<'a> PathExtractor<'a> {
    /// Create an extractor over a dataset and taxonomy configuration
    #[must_use]
    pub fn new(dataset: &'a PathDataset, config: &TaxonomyConfig) -> Self {
        Self {
            dataset,
            builder: SequenceBuilder::new(config, &dataset.schools),
        }
    }

    /// Extract all sequences matching the filter, in dataset order
    ///
    /// Evaluation order per person: classify, insert bridge, compute primary
    /// field (all inside the builder), then filter, then discard sequences
    /// with fewer than two nodes.
    #[must_use]
    pub fn extract(&self, filter: &PathFilter) -> Vec<EducationSequence> {
        let sequences: Vec<EducationSequence> = self
            .dataset
            .alumni
            .iter()
            .filter_map(|person| self.builder.build(person))
            .filter(|sequence| filter.matches(sequence))
            .filter(EducationSequence::is_viable)
            .collect();

        debug!(
            "extracted {} sequences from {} alumni",
            sequences.len(),
            self.dataset.alumni.len()
        );

        sequences
    }
}

/// Extract filtered education sequences from a dataset
///
/// The sole function boundary the rendering layer depends on.
#[must_use]
pub fn extract_paths(
    dataset: &PathDataset,
    config: &TaxonomyConfig,
    filter: &PathFilter,
) -> Vec<EducationSequence> {
    PathExtractor::new(dataset, config).extract(filter)
}
