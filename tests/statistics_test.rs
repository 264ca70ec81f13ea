//! Tests for aggregate statistics over extracted sequences

use rustc_hash::FxHashMap;

use edu_paths::algorithm::SequenceStatistics;
use edu_paths::{
    DegreeLevel, FieldCategory, PathDataset, PathFilter, Person, RawEducationRecord,
    SchoolDirectory, StageKey, TaxonomyConfig, extract_paths,
};

fn record(school: &str, degree: &str, field: &str) -> RawEducationRecord {
    RawEducationRecord {
        school: school.to_string(),
        degree: degree.to_string(),
        field: field.to_string(),
    }
}

fn person(name: &str, records: Vec<RawEducationRecord>) -> Person {
    Person {
        full_name: name.to_string(),
        education_path: records,
        ..Person::default()
    }
}

fn fixture_sequences() -> Vec<edu_paths::EducationSequence> {
    let alumni = vec![
        person(
            "A",
            vec![
                record("TUM", "B.Sc.", "Informatics"),
                record("TUM", "M.Sc.", "Informatics"),
            ],
        ),
        person(
            "B",
            vec![
                record("TUM", "B.Sc.", "Informatics"),
                record("TUM", "M.Sc.", "Informatics"),
            ],
        ),
        person(
            "C",
            vec![
                record("WHU", "B.Sc.", "Finance"),
                record("WHU", "M.Sc.", "Finance"),
                record("WHU", "Ph.D.", "Finance"),
            ],
        ),
    ];
    let dataset = PathDataset::new(alumni, SchoolDirectory::from_records(FxHashMap::default()));
    extract_paths(&dataset, &TaxonomyConfig::default(), &PathFilter::all())
}

#[test]
fn test_field_and_degree_counts() {
    let sequences = fixture_sequences();
    let stats = SequenceStatistics::calculate(&sequences);

    assert_eq!(stats.total_sequences, 3);
    assert_eq!(
        stats.field_counts[0],
        (FieldCategory::EngineeringTech, 2)
    );
    assert_eq!(stats.field_counts[1], (FieldCategory::Business, 1));

    let degree_map: FxHashMap<DegreeLevel, usize> = stats.degree_counts.iter().copied().collect();
    assert_eq!(degree_map[&DegreeLevel::Bachelors], 3);
    assert_eq!(degree_map[&DegreeLevel::Masters], 3);
    assert_eq!(degree_map[&DegreeLevel::Doctorate], 1);
}

#[test]
fn test_length_statistics() {
    let sequences = fixture_sequences();
    let stats = SequenceStatistics::calculate(&sequences);

    // Lengths 2, 2, 3
    assert!((stats.avg_length - 7.0 / 3.0).abs() < 1e-9);
    assert!((stats.median_length - 2.0).abs() < 1e-9);
}

#[test]
fn test_top_transitions() {
    let sequences = fixture_sequences();
    let stats = SequenceStatistics::calculate(&sequences);

    let top = &stats.top_transitions[0];
    assert_eq!(
        top.from,
        StageKey::new(DegreeLevel::Bachelors, FieldCategory::EngineeringTech)
    );
    assert_eq!(
        top.to,
        StageKey::new(DegreeLevel::Masters, FieldCategory::EngineeringTech)
    );
    assert_eq!(top.count, 2);

    // One engineering transition plus the two business ones
    assert_eq!(stats.top_transitions.len(), 3);
}

#[test]
fn test_transition_limit() {
    let sequences = fixture_sequences();
    let stats = SequenceStatistics::calculate_with_limit(&sequences, 1);
    assert_eq!(stats.top_transitions.len(), 1);
}

#[test]
fn test_summary_contains_key_figures() {
    let sequences = fixture_sequences();
    let stats = SequenceStatistics::calculate(&sequences);
    let summary = SequenceStatistics::generate_summary(&stats);

    assert!(summary.contains("Total Sequences: 3"));
    assert!(summary.contains("Engineering/Tech: 2"));
    assert!(summary.contains("Bachelor's"));
    assert!(summary.contains("->"));
}
