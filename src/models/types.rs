//! Common domain type definitions
//!
//! This module contains the enum types shared across the pipeline: the
//! normalized degree and field taxonomy, institution types and the level
//! annotation attached to inserted bridge nodes.

use std::fmt;

/// Normalized academic stage classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DegreeLevel {
    /// Bachelor's degree (B.Sc., B.A., B.Eng., ...)
    Bachelors,
    /// Master's degree (M.Sc., M.A., MBA, ...)
    Masters,
    /// Doctoral degree (PhD, Dr., ...)
    Doctorate,
    /// Diploma (Dipl.-Ing. and similar pre-Bologna degrees)
    Diploma,
    /// Recognizable degree text that matches no known level
    CertificateOther,
    /// No degree text available
    Unknown,
    /// Synthetic bridge stage, not itself a degree
    Bridge,
}

impl DegreeLevel {
    /// Get the display name for this degree level
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Bachelors => "Bachelor's",
            Self::Masters => "Master's",
            Self::Doctorate => "Doctorate",
            Self::Diploma => "Diploma",
            Self::CertificateOther => "Certificate/Other",
            Self::Unknown => "Unknown",
            Self::Bridge => "Bridge",
        }
    }

    /// Get all degree levels a raw record can classify to (excludes Bridge)
    #[must_use]
    pub fn all_levels() -> Vec<Self> {
        vec![
            Self::Bachelors,
            Self::Masters,
            Self::Doctorate,
            Self::Diploma,
            Self::CertificateOther,
            Self::Unknown,
        ]
    }
}

impl From<&str> for DegreeLevel {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "bachelor's" | "bachelors" | "bachelor" => Self::Bachelors,
            "master's" | "masters" | "master" => Self::Masters,
            "doctorate" | "phd" => Self::Doctorate,
            "diploma" => Self::Diploma,
            "certificate/other" | "certificate" | "other" => Self::CertificateOther,
            "bridge" => Self::Bridge,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for DegreeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Normalized subject-area classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldCategory {
    /// Engineering, computer science and technology
    EngineeringTech,
    /// Business, management and economics
    Business,
    /// Natural sciences and mathematics
    Sciences,
    /// Social sciences, humanities, law, media and design
    Humanities,
    /// Field text present but matching no known category
    Other,
    /// No field text available
    Unknown,
    /// Constant category for bridge nodes under the constant field policy
    Bridge,
}

impl FieldCategory {
    /// Get the display name for this field category
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::EngineeringTech => "Engineering/Tech",
            Self::Business => "Business",
            Self::Sciences => "Sciences",
            Self::Humanities => "Humanities",
            Self::Other => "Other",
            Self::Unknown => "Unknown",
            Self::Bridge => "Bridge",
        }
    }

    /// Whether this category can serve as a person's primary field
    #[must_use]
    pub const fn is_primary_candidate(self) -> bool {
        !matches!(self, Self::Other | Self::Unknown | Self::Bridge)
    }

    /// Get all field categories a raw record can classify to (excludes Bridge)
    #[must_use]
    pub fn all_categories() -> Vec<Self> {
        vec![
            Self::EngineeringTech,
            Self::Business,
            Self::Sciences,
            Self::Humanities,
            Self::Other,
            Self::Unknown,
        ]
    }
}

impl From<&str> for FieldCategory {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "engineering/tech" | "engineering" | "tech" => Self::EngineeringTech,
            "business" | "business/management" => Self::Business,
            "sciences" | "natural sciences" => Self::Sciences,
            "humanities" | "social sciences/humanities" => Self::Humanities,
            "other" => Self::Other,
            "bridge" => Self::Bridge,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for FieldCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Institution type from the schools reference dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstitutionType {
    /// General university
    University,
    /// Technical university
    TechnicalUniversity,
    /// Business school
    BusinessSchool,
    /// College
    College,
    /// Unknown institution type
    Unknown,
}

impl InstitutionType {
    /// Get the display name for this institution type
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::University => "University",
            Self::TechnicalUniversity => "Technical University",
            Self::BusinessSchool => "Business School",
            Self::College => "College",
            Self::Unknown => "Unknown",
        }
    }
}

impl From<&str> for InstitutionType {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "university" => Self::University,
            "technical university" => Self::TechnicalUniversity,
            "business school" => Self::BusinessSchool,
            "college" => Self::College,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for InstitutionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Level annotation attached to an inserted bridge node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BridgeLevel {
    /// Bridge sits after a Bachelor's or Diploma stage (or at the fallback position)
    BachelorsLevel,
    /// Bridge sits after a Master's stage
    MastersLevel,
}

impl BridgeLevel {
    /// Get the display name for this bridge level
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::BachelorsLevel => "Bachelor's Level",
            Self::MastersLevel => "Master's Level",
        }
    }
}

impl fmt::Display for BridgeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
