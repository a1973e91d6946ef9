//! Interface version requirement matching
//!
//! A requirement is one or more whitespace-separated versions, satisfied
//! when the candidate matches ANY one of them:
//! - `2.3` - candidate must be 2.x at least as new as 2.3.0
//! - `1.0 2.3` - candidate may satisfy either clause
//!
//! A single clause matches when the major components are equal and the
//! candidate's (minor, patch) pair orders at or above the wanted one. A
//! higher minor matches regardless of patch.

use semver::Version;

use crate::version::error::VersionError;
use crate::version::semver::parse_version;

/// A single version requirement clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    wanted: Version,
}

impl Requirement {
    /// Parse a single clause like "2.3" or "2.3.1"
    pub fn parse(spec: &str) -> Result<Self, VersionError> {
        let spec = spec.trim();
        if spec.is_empty() {
            return Err(VersionError::EmptyRequirement);
        }
        Ok(Self {
            wanted: parse_version(spec)?,
        })
    }

    /// Check if a concrete version satisfies this clause
    ///
    /// The major component must match exactly; minor and patch are an
    /// ordering comparison, not an exact match.
    pub fn matches(&self, candidate: &Version) -> bool {
        if candidate.major != self.wanted.major {
            return false;
        }
        if candidate.minor != self.wanted.minor {
            return candidate.minor > self.wanted.minor;
        }
        candidate.patch >= self.wanted.patch
    }
}

/// A whitespace-separated OR of requirement clauses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementSet {
    alternatives: Vec<Requirement>,
}

impl RequirementSet {
    /// Parse a requirement like "1.0 2.3"
    ///
    /// Every clause must parse. An empty requirement is rejected: with no
    /// clauses there is nothing a candidate could satisfy.
    pub fn parse(spec: &str) -> Result<Self, VersionError> {
        let alternatives: Vec<Requirement> = spec
            .split_whitespace()
            .map(Requirement::parse)
            .collect::<Result<_, _>>()?;

        if alternatives.is_empty() {
            return Err(VersionError::EmptyRequirement);
        }
        Ok(Self { alternatives })
    }

    /// Check if a concrete version satisfies at least one clause
    pub fn matches(&self, candidate: &Version) -> bool {
        self.alternatives.iter().any(|r| r.matches(candidate))
    }
}

/// Check a concrete version against a single requirement clause
///
/// Lenient contract: input that does not parse yields `false`, never an
/// error. Use [`Requirement::parse`] to validate input explicitly.
pub fn is_single_version_compatible(got: &str, wanted: &str) -> bool {
    let Ok(requirement) = Requirement::parse(wanted) else {
        return false;
    };

    parse_version(got)
        .map(|candidate| requirement.matches(&candidate))
        .unwrap_or(false)
}

/// Check a concrete version against a whitespace-separated requirement
///
/// True when at least one clause matches. An empty requirement has no
/// clauses and yields `false`. A clause that does not parse cannot match
/// but does not affect its siblings.
pub fn is_version_compatible(got: &str, wanted: &str) -> bool {
    wanted
        .split_whitespace()
        .any(|clause| is_single_version_compatible(got, clause))
}
