//! Version parsing and requirement matching
//!
//! Core layer deciding whether the interface version a host provides
//! satisfies the requirement a module declares.
//!
//! # Modules
//!
//! - [`error`]: Error types for version parsing
//! - [`matcher`]: Requirement types and compatibility predicates
//! - [`semver`]: Shared semver parsing utilities

pub mod error;
pub mod matcher;
pub mod semver;

pub use error::VersionError;
pub use matcher::{
    Requirement, RequirementSet, is_single_version_compatible, is_version_compatible,
};
