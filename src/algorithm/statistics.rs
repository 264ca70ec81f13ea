//! Aggregate statistics over extracted sequences
//!
//! Pure read-only reductions over the output of the extraction driver, used
//! by the rendering layer for its stats panel and to validate the pipeline's
//! output shape.

use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::models::sequence::{EducationSequence, StageKey};
use crate::models::types::{DegreeLevel, FieldCategory};

/// Number of transitions reported by default
pub const DEFAULT_TOP_TRANSITIONS: usize = 10;

/// One counted transition between two stages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Source stage
    pub from: StageKey,
    /// Target stage
    pub to: StageKey,
    /// Number of sequences taking this transition
    pub count: usize,
}

/// Aggregate statistics for a set of extracted sequences
#[derive(Debug, Clone, Default)]
pub struct SequenceStats {
    /// Number of sequences
    pub total_sequences: usize,
    /// Sequences per primary field, most common first
    pub field_counts: Vec<(FieldCategory, usize)>,
    /// Nodes per degree level across all sequences, most common first
    pub degree_counts: Vec<(DegreeLevel, usize)>,
    /// Average sequence length
    pub avg_length: f64,
    /// Median sequence length
    pub median_length: f64,
    /// Most common stage transitions
    pub top_transitions: Vec<Transition>,
}

/// Functions for sequence statistics and summaries
pub struct SequenceStatistics;

impl SequenceStatistics {
    /// Calculate statistics with the default transition limit
    #[must_use]
    pub fn calculate(sequences: &[EducationSequence]) -> SequenceStats {
        Self::calculate_with_limit(sequences, DEFAULT_TOP_TRANSITIONS)
    }

    /// Calculate statistics, reporting at most `transition_limit` transitions
    #[must_use]
    pub fn calculate_with_limit(
        sequences: &[EducationSequence],
        transition_limit: usize,
    ) -> SequenceStats {
        if sequences.is_empty() {
            return SequenceStats::default();
        }

        let mut field_counter: FxHashMap<FieldCategory, usize> = FxHashMap::default();
        let mut degree_counter: FxHashMap<DegreeLevel, usize> = FxHashMap::default();
        let mut transition_counter: FxHashMap<(StageKey, StageKey), usize> =
            FxHashMap::default();

        for sequence in sequences {
            *field_counter.entry(sequence.primary_field).or_insert(0) += 1;
            for node in &sequence.nodes {
                *degree_counter.entry(node.degree_level).or_insert(0) += 1;
            }
            for (from, to) in sequence.transitions() {
                *transition_counter.entry((from, to)).or_insert(0) += 1;
            }
        }

        let lengths: Vec<usize> = sequences.iter().map(EducationSequence::len).collect();
        let total: usize = lengths.iter().sum();
        let avg_length = total as f64 / lengths.len() as f64;

        let field_counts = field_counter
            .into_iter()
            .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.display_name().cmp(b.0.display_name())))
            .collect();
        let degree_counts = degree_counter
            .into_iter()
            .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.display_name().cmp(b.0.display_name())))
            .collect();
        let top_transitions = transition_counter
            .into_iter()
            .map(|((from, to), count)| Transition { from, to, count })
            .sorted_by(|a, b| {
                b.count
                    .cmp(&a.count)
                    .then_with(|| a.from.to_string().cmp(&b.from.to_string()))
                    .then_with(|| a.to.to_string().cmp(&b.to.to_string()))
            })
            .take(transition_limit)
            .collect();

        SequenceStats {
            total_sequences: sequences.len(),
            field_counts,
            degree_counts,
            avg_length,
            median_length: median(lengths),
            top_transitions,
        }
    }

    /// Generate a human-readable statistics summary
    #[must_use]
    pub fn generate_summary(stats: &SequenceStats) -> String {
        let mut summary = String::new();
        summary.push_str("Education Path Summary:\n");
        summary.push_str(&format!("  Total Sequences: {}\n", stats.total_sequences));
        summary.push_str(&format!("  Average Path Length: {:.1}\n", stats.avg_length));
        summary.push_str(&format!("  Median Path Length: {:.1}\n", stats.median_length));

        if !stats.field_counts.is_empty() {
            summary.push_str("\nPrimary Fields:\n");
            for (field, count) in &stats.field_counts {
                summary.push_str(&format!("  {field}: {count}\n"));
            }
        }

        if !stats.degree_counts.is_empty() {
            summary.push_str("\nDegree Levels:\n");
            for (level, count) in &stats.degree_counts {
                summary.push_str(&format!("  {level}: {count}\n"));
            }
        }

        if !stats.top_transitions.is_empty() {
            summary.push_str("\nTop Transitions:\n");
            for transition in &stats.top_transitions {
                summary.push_str(&format!(
                    "  {:3} alumni: {} -> {}\n",
                    transition.count, transition.from, transition.to
                ));
            }
        }

        summary
    }
}

fn median(mut lengths: Vec<usize>) -> f64 {
    lengths.sort_unstable();
    let n = lengths.len();
    if n == 0 {
        return 0.0;
    }
    if n % 2 == 1 {
        lengths[n / 2] as f64
    } else {
        (lengths[n / 2 - 1] + lengths[n / 2]) as f64 / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median(vec![2, 3, 5]), 3.0);
        assert_eq!(median(vec![2, 3, 4, 5]), 3.5);
        assert_eq!(median(vec![]), 0.0);
    }

    #[test]
    fn test_empty_input_gives_zeroed_stats() {
        let stats = SequenceStatistics::calculate(&[]);
        assert_eq!(stats.total_sequences, 0);
        assert!(stats.field_counts.is_empty());
        assert_eq!(stats.avg_length, 0.0);
    }
}
