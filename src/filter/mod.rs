//! Filtering of built education sequences
//!
//! This module provides the criteria used to narrow extracted sequences by
//! primary field, degree level and institution metadata. The request-level
//! `PathFilter` is conjunctive; `SequenceFilter` offers composable criteria
//! with `All`/`Any` combinators for callers that need more than the three
//! standard constraints.

use crate::models::sequence::EducationSequence;
use crate::models::types::{DegreeLevel, FieldCategory, InstitutionType};

/// Defines a criterion for filtering extracted entities
pub trait FilterCriteria<T> {
    /// Determine if an entity meets the filter criteria
    fn matches(&self, entity: &T) -> bool;
}

/// A filter that can be applied to an education sequence
#[derive(Debug, Clone)]
pub enum SequenceFilter {
    /// Filter by primary field (exact match, not "any node")
    PrimaryField(FieldCategory),
    /// Filter by presence of a degree level on any node
    HasDegree(DegreeLevel),
    /// Filter by presence of an institution type on any node
    HasInstitution(InstitutionType),
    /// Filter by presence of a country on any node (exact match)
    Country(String),
    /// Filter to sequences with at least one top-tier institution
    TopTierOnly,
    /// Combined filter that requires all criteria to be met
    All(Vec<SequenceFilter>),
    /// Combined filter that requires any criterion to be met
    Any(Vec<SequenceFilter>),
}

impl FilterCriteria<EducationSequence> for SequenceFilter {
    fn matches(&self, sequence: &EducationSequence) -> bool {
        match self {
            Self::PrimaryField(field) => sequence.primary_field == *field,
            Self::HasDegree(level) => sequence.has_degree(*level),
            Self::HasInstitution(institution_type) => {
                sequence.has_institution(*institution_type)
            }
            Self::Country(country) => sequence
                .nodes
                .iter()
                .any(|n| n.institution.country == *country),
            Self::TopTierOnly => sequence.nodes.iter().any(|n| n.institution.is_top_tier),
            Self::All(filters) => filters.iter().all(|f| f.matches(sequence)),
            Self::Any(filters) => filters.iter().any(|f| f.matches(sequence)),
        }
    }
}

/// Request-level filter criteria
///
/// Each constraint is optional; `None` means "All" and always passes.
/// Constraints are conjunctive. The field constraint compares against the
/// sequence's primary field; degree and institution match any node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathFilter {
    /// Required primary field, if any
    pub field: Option<FieldCategory>,
    /// Required degree level on at least one node, if any
    pub degree: Option<DegreeLevel>,
    /// Required institution type on at least one node, if any
    pub institution: Option<InstitutionType>,
}

impl PathFilter {
    /// Filter that passes every sequence
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to sequences with the given primary field
    #[must_use]
    pub const fn with_field(mut self, field: FieldCategory) -> Self {
        self.field = Some(field);
        self
    }

    /// Restrict to sequences containing the given degree level
    #[must_use]
    pub const fn with_degree(mut self, degree: DegreeLevel) -> Self {
        self.degree = Some(degree);
        self
    }

    /// Restrict to sequences containing the given institution type
    #[must_use]
    pub const fn with_institution(mut self, institution: InstitutionType) -> Self {
        self.institution = Some(institution);
        self
    }

    /// Parse UI-style labels into a filter; the label "All" lifts a constraint
    #[must_use]
    pub fn from_labels(field: &str, degree: &str, institution: &str) -> Self {
        Self {
            field: constraint(field).map(FieldCategory::from),
            degree: constraint(degree).map(DegreeLevel::from),
            institution: constraint(institution).map(InstitutionType::from),
        }
    }
}

impl FilterCriteria<EducationSequence> for PathFilter {
    fn matches(&self, sequence: &EducationSequence) -> bool {
        if let Some(field) = self.field {
            if sequence.primary_field != field {
                return false;
            }
        }
        if let Some(degree) = self.degree {
            if !sequence.has_degree(degree) {
                return false;
            }
        }
        if let Some(institution) = self.institution {
            if !sequence.has_institution(institution) {
                return false;
            }
        }
        true
    }
}

fn constraint(label: &str) -> Option<&str> {
    let trimmed = label.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
        None
    } else {
        Some(trimmed)
    }
}
