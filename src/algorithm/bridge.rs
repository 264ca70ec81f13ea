//! Bridge program detection and insertion planning
//!
//! The bridge program is an interposed add-on study, not a degree of its own.
//! Raw records naming it are diverted out of the main sequence and re-inserted
//! as a single synthetic node at a level-appropriate position.

use crate::config::{BridgeFieldPolicy, TaxonomyConfig};
use crate::models::sequence::StageNode;
use crate::models::types::{BridgeLevel, DegreeLevel, FieldCategory};

/// Detects raw records that refer to the bridge program
#[derive(Debug, Clone)]
pub struct BridgeDetector {
    markers: Vec<String>,
}

impl BridgeDetector {
    /// Build a detector from the configured marker substrings
    #[must_use]
    pub fn new(config: &TaxonomyConfig) -> Self {
        Self {
            markers: config.bridge_markers.clone(),
        }
    }

    /// Whether the school name refers to the bridge program
    ///
    /// Case-sensitive substring match against the marker list.
    #[must_use]
    pub fn is_bridge(&self, school_name: &str) -> bool {
        self.markers
            .iter()
            .any(|marker| school_name.contains(marker.as_str()))
    }
}

impl Default for BridgeDetector {
    fn default() -> Self {
        Self::new(&TaxonomyConfig::default())
    }
}

/// Planned placement of a bridge node in a non-bridge sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BridgeInsertion {
    /// Index in the non-bridge sequence where the bridge node goes
    pub index: usize,
    /// Level annotation for the inserted node
    pub level: BridgeLevel,
}

/// Pick the insertion point for a bridge node
///
/// The bridge goes immediately after the first Bachelor's or Diploma stage;
/// failing that, immediately after the first Master's stage; failing that,
/// at index 1 (or 0 for a single-node sequence), annotated Bachelor's level.
/// An empty sequence gives no insertion point.
#[must_use]
pub fn plan_insertion(nodes: &[StageNode]) -> Option<BridgeInsertion> {
    if nodes.is_empty() {
        return None;
    }

    for (i, node) in nodes.iter().enumerate() {
        if matches!(
            node.degree_level,
            DegreeLevel::Bachelors | DegreeLevel::Diploma
        ) {
            return Some(BridgeInsertion {
                index: i + 1,
                level: BridgeLevel::BachelorsLevel,
            });
        }
    }

    for (i, node) in nodes.iter().enumerate() {
        if node.degree_level == DegreeLevel::Masters {
            return Some(BridgeInsertion {
                index: i + 1,
                level: BridgeLevel::MastersLevel,
            });
        }
    }

    let index = if nodes.len() > 1 { 1 } else { 0 };
    Some(BridgeInsertion {
        index,
        level: BridgeLevel::BachelorsLevel,
    })
}

/// Field category for the bridge node under the given policy
///
/// `primary_field` is the first primary-candidate field among the non-bridge
/// nodes, if any exists.
#[must_use]
pub fn bridge_field(
    policy: BridgeFieldPolicy,
    primary_field: Option<FieldCategory>,
) -> FieldCategory {
    match policy {
        BridgeFieldPolicy::InheritPrimary => primary_field.unwrap_or(FieldCategory::Other),
        BridgeFieldPolicy::Constant => FieldCategory::Bridge,
    }
}
