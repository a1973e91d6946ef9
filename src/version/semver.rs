use semver::Version;

use crate::version::error::VersionError;

/// Parse a version string into a semver::Version, normalizing partial versions.
///
/// Handles partial versions like "2" or "2.3" by padding with zeros.
/// Every component must be a non-negative integer; anything else is
/// rejected with [`VersionError::InvalidFormat`].
///
/// Examples:
/// - "2" -> Version(2, 0, 0)
/// - "2.3" -> Version(2, 3, 0)
/// - "2.3.1" -> Version(2, 3, 1)
pub fn parse_version(version: &str) -> Result<Version, VersionError> {
    let version = version.trim();
    let parts: Vec<&str> = version.split('.').collect();

    if parts.len() > 3
        || parts
            .iter()
            .any(|p| p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()))
    {
        return Err(VersionError::InvalidFormat(version.to_string()));
    }

    let normalized = match parts.len() {
        1 => format!("{}.0.0", parts[0]),
        2 => format!("{}.{}.0", parts[0], parts[1]),
        _ => version.to_string(),
    };

    Version::parse(&normalized).map_err(|_| VersionError::InvalidFormat(version.to_string()))
}
