//! Built sequence model
//!
//! This module contains the pipeline's principal output types: the classified
//! stage node, the stage key used for transition counting, and the education
//! sequence built per person.

use std::fmt;

use crate::models::school::SchoolInfo;
use crate::models::types::{BridgeLevel, DegreeLevel, FieldCategory, InstitutionType};

/// Combined (degree level, field category) identity of a stage
///
/// Used as a map key when counting transitions between stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StageKey {
    /// Degree level of the stage
    pub degree_level: DegreeLevel,
    /// Field category of the stage
    pub field_category: FieldCategory,
}

impl StageKey {
    /// Create a stage key
    #[must_use]
    pub const fn new(degree_level: DegreeLevel, field_category: FieldCategory) -> Self {
        Self {
            degree_level,
            field_category,
        }
    }
}

impl fmt::Display for StageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.degree_level, self.field_category)
    }
}

/// One classified stage in a person's education sequence
#[derive(Debug, Clone)]
pub struct StageNode {
    /// Normalized degree level
    pub degree_level: DegreeLevel,
    /// Normalized field category
    pub field_category: FieldCategory,
    /// Institution name as it appears in the source record
    pub school: String,
    /// Resolved institution metadata
    pub institution: SchoolInfo,
    /// Whether this is a synthetic bridge node
    pub is_bridge: bool,
    /// Level annotation, present only on bridge nodes
    pub bridge_level: Option<BridgeLevel>,
    /// Original degree text, kept for downstream labels
    pub original_degree: String,
    /// Original field text, kept for downstream labels
    pub original_field: String,
}

impl StageNode {
    /// The (degree level, field category) identity of this node
    #[must_use]
    pub const fn key(&self) -> StageKey {
        StageKey::new(self.degree_level, self.field_category)
    }
}

/// Ordered education sequence built for one person
///
/// Node order preserves the order of the underlying raw records, except for
/// the possible repositioning of a single bridge node. A sequence needs at
/// least two nodes to describe a transition; shorter builds are discarded by
/// the extraction driver.
#[derive(Debug, Clone)]
pub struct EducationSequence {
    /// Classified stages in final order
    pub nodes: Vec<StageNode>,
    /// First non-bridge field category that is neither Other nor Unknown
    pub primary_field: FieldCategory,
    /// Full name of the owning person
    pub person_name: String,
    /// Headline of the owning person
    pub headline: String,
    /// Profile URL of the owning person, if known
    pub linkedin_url: Option<String>,
}

impl EducationSequence {
    /// Number of stages in the sequence
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the sequence has no stages
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether the sequence describes at least one transition
    #[must_use]
    pub fn is_viable(&self) -> bool {
        self.nodes.len() >= 2
    }

    /// Whether any node carries the given degree level
    #[must_use]
    pub fn has_degree(&self, level: DegreeLevel) -> bool {
        self.nodes.iter().any(|n| n.degree_level == level)
    }

    /// Whether any node was earned at the given institution type
    #[must_use]
    pub fn has_institution(&self, institution_type: InstitutionType) -> bool {
        self.nodes
            .iter()
            .any(|n| n.institution.institution_type == institution_type)
    }

    /// The inserted bridge node, if the sequence has one
    #[must_use]
    pub fn bridge_node(&self) -> Option<&StageNode> {
        self.nodes.iter().find(|n| n.is_bridge)
    }

    /// Iterator over consecutive stage transitions
    pub fn transitions(&self) -> impl Iterator<Item = (StageKey, StageKey)> + '_ {
        self.nodes.windows(2).map(|w| (w[0].key(), w[1].key()))
    }
}
