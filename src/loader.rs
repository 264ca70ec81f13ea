//! Dataset loading
//!
//! Loads the alumni and schools JSON files once at startup into an immutable
//! `PathDataset`. The dataset is passed explicitly into the pipeline entry
//! points; there is no process-wide state. A failed load is fatal to the
//! caller: the pipeline never operates on partial data.

use log::{info, warn};
use rustc_hash::FxHashMap;
use std::path::Path;

use crate::error::Result;
use crate::models::person::Person;
use crate::models::school::{RawSchoolRecord, SchoolDirectory};

/// Immutable in-memory dataset shared by all pipeline invocations
#[derive(Debug, Clone, Default)]
pub struct PathDataset {
    /// Alumni records in file order
    pub alumni: Vec<Person>,
    /// Schools reference directory
    pub schools: SchoolDirectory,
}

impl PathDataset {
    /// Assemble a dataset from already-loaded parts
    #[must_use]
    pub fn new(alumni: Vec<Person>, schools: SchoolDirectory) -> Self {
        Self { alumni, schools }
    }

    /// Number of alumni in the dataset
    #[must_use]
    pub fn alumni_count(&self) -> usize {
        self.alumni.len()
    }
}

/// Load the alumni dataset from a JSON file
pub fn load_alumni(path: &Path) -> Result<Vec<Person>> {
    let contents = std::fs::read_to_string(path)?;
    let alumni: Vec<Person> = serde_json::from_str(&contents)?;

    let without_education = alumni.iter().filter(|p| !p.has_education()).count();
    if without_education > 0 {
        warn!("{without_education} alumni records have no education history");
    }
    info!("loaded {} alumni from {}", alumni.len(), path.display());

    Ok(alumni)
}

/// Load the schools reference dataset from a JSON file
pub fn load_schools(path: &Path) -> Result<SchoolDirectory> {
    let contents = std::fs::read_to_string(path)?;
    let records: FxHashMap<String, RawSchoolRecord> = serde_json::from_str(&contents)?;

    let directory = SchoolDirectory::from_records(records);
    info!("loaded {} schools from {}", directory.len(), path.display());

    Ok(directory)
}

/// Load both datasets into a ready-to-use `PathDataset`
pub fn load_dataset(alumni_path: &Path, schools_path: &Path) -> Result<PathDataset> {
    let alumni = load_alumni(alumni_path)?;
    let schools = load_schools(schools_path)?;
    Ok(PathDataset::new(alumni, schools))
}
