//! Tests for dataset loading

use std::fs;
use std::path::PathBuf;

use edu_paths::{InstitutionType, load_alumni, load_dataset, load_schools};

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("edu-paths-test-{name}"));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_alumni_with_missing_keys() {
    let path = temp_file(
        "alumni-missing-keys.json",
        r#"[
            {"full_name": "Complete", "headline": "Engineer", "location": "Munich",
             "linkedin_url": "https://example.com/complete",
             "education_path": [{"school": "TUM", "degree": "B.Sc.", "field": "Informatics"}]},
            {"full_name": "No Education"},
            {"education_path": [{"institution": "LMU"}]}
        ]"#,
    );

    let alumni = load_alumni(&path).unwrap();
    assert_eq!(alumni.len(), 3);

    assert!(alumni[0].has_education());
    assert_eq!(alumni[0].linkedin_url.as_deref(), Some("https://example.com/complete"));

    // Absent education history is tolerated, the person just yields nothing
    assert!(!alumni[1].has_education());

    // The "institution" spelling of the school key is accepted; degree and
    // field default to empty
    let record = &alumni[2].education_path[0];
    assert_eq!(record.school, "LMU");
    assert!(record.degree.is_empty());
    assert!(record.field.is_empty());

    fs::remove_file(path).unwrap();
}

#[test]
fn test_load_schools() {
    let path = temp_file(
        "schools.json",
        r#"{
            "TUM": {"institution_type": "Technical University", "country": "Germany", "is_top_tier": true},
            "Sparse School": {}
        }"#,
    );

    let directory = load_schools(&path).unwrap();
    assert_eq!(directory.len(), 2);

    let tum = directory.resolve("TUM");
    assert_eq!(tum.institution_type, InstitutionType::TechnicalUniversity);
    assert!(tum.is_top_tier);

    // A listed school with empty metadata resolves to unknown type, not to
    // the directory-miss default
    let sparse = directory.resolve("Sparse School");
    assert_eq!(sparse.institution_type, InstitutionType::Unknown);
    assert_eq!(sparse.country, "Unknown");

    // A miss still gives the documented default
    let missing = directory.resolve("Missing School");
    assert_eq!(missing.institution_type, InstitutionType::University);

    fs::remove_file(path).unwrap();
}

#[test]
fn test_missing_file_is_an_error() {
    let path = std::env::temp_dir().join("edu-paths-test-does-not-exist.json");
    assert!(load_alumni(&path).is_err());
    assert!(load_schools(&path).is_err());
}

#[test]
fn test_malformed_json_is_an_error() {
    let alumni = temp_file("alumni-malformed.json", "{ not json");
    let schools = temp_file("schools-ok.json", "{}");

    assert!(load_dataset(&alumni, &schools).is_err());

    fs::remove_file(alumni).unwrap();
    fs::remove_file(schools).unwrap();
}
