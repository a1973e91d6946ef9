//! Module load eligibility
//!
//! Maps the interface versions a host provides against each module's
//! declared requirements and decides whether the module may load.

#[cfg(test)]
use mockall::automock;

use serde::Serialize;
use tracing::warn;

use crate::manifest::types::ModuleManifest;
use crate::version::matcher::RequirementSet;
use crate::version::semver::parse_version;

/// Trait for looking up the interface versions the host provides
#[cfg_attr(test, automock)]
pub trait InterfaceProvider: Send + Sync + 'static {
    /// Version of the named interface, or None if the host does not provide it
    fn provided_version(&self, interface: &str) -> Option<String>;
}

/// Status of a single required interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum InterfaceStatus {
    /// Provided version satisfies the requirement
    Compatible,
    /// Provided version does not satisfy the requirement
    Incompatible,
    /// Host does not provide the interface
    Missing,
    /// Requirement or provided version has an invalid format
    Invalid,
}

impl InterfaceStatus {
    /// Returns the string representation of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            InterfaceStatus::Compatible => "compatible",
            InterfaceStatus::Incompatible => "incompatible",
            InterfaceStatus::Missing => "missing",
            InterfaceStatus::Invalid => "invalid",
        }
    }
}

/// Result of checking one required interface
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceCheck {
    /// Interface name from the manifest
    pub interface: String,
    /// Requirement declared by the module
    pub required: String,
    /// Version provided by the host (if any)
    pub provided: Option<String>,
    /// Check outcome
    pub status: InterfaceStatus,
}

/// Result of evaluating a whole module
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleReport {
    /// Module name from the manifest
    pub module: String,
    /// One check per required interface, in declaration order
    pub checks: Vec<InterfaceCheck>,
    /// True when every check is compatible
    pub eligible: bool,
}

/// Evaluate a single module against the host's provided interfaces
///
/// A module with no required interfaces is trivially eligible.
pub fn evaluate_module<P: InterfaceProvider>(
    provider: &P,
    manifest: &ModuleManifest,
) -> ModuleReport {
    let checks: Vec<InterfaceCheck> = manifest
        .required_interfaces
        .iter()
        .map(|(interface, required)| check_interface(provider, &manifest.name, interface, required))
        .collect();

    let eligible = checks
        .iter()
        .all(|c| c.status == InterfaceStatus::Compatible);

    ModuleReport {
        module: manifest.name.clone(),
        checks,
        eligible,
    }
}

/// Evaluate every module, in input order
pub fn evaluate_modules<P: InterfaceProvider>(
    provider: &P,
    manifests: &[ModuleManifest],
) -> Vec<ModuleReport> {
    manifests
        .iter()
        .map(|m| evaluate_module(provider, m))
        .collect()
}

fn check_interface<P: InterfaceProvider>(
    provider: &P,
    module: &str,
    interface: &str,
    required: &str,
) -> InterfaceCheck {
    let provided = provider.provided_version(interface);

    let status = match provided.as_deref() {
        None => InterfaceStatus::Missing,
        Some(version) => match (parse_version(version), RequirementSet::parse(required)) {
            (Ok(candidate), Ok(requirement)) => {
                if requirement.matches(&candidate) {
                    InterfaceStatus::Compatible
                } else {
                    InterfaceStatus::Incompatible
                }
            }
            _ => {
                warn!(
                    "Invalid version data for {} ({}): required {:?}, provided {:?}",
                    module, interface, required, version
                );
                InterfaceStatus::Invalid
            }
        },
    };

    InterfaceCheck {
        interface: interface.to_string(),
        required: required.to_string(),
        provided,
        status,
    }
}
