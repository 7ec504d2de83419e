//! M2X API version definitions.
//!
//! This module provides the [`ApiVersion`] enum for specifying which version
//! of the M2X API the client talks to. The version becomes the first path
//! segment after the endpoint (e.g. `https://api-m2x.att.com/v2`).

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// M2X API version.
///
/// # Example
///
/// ```rust
/// use m2x::ApiVersion;
///
/// let version = ApiVersion::latest();
/// assert_eq!(version, ApiVersion::V2);
///
/// let version: ApiVersion = "v2".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2);
///
/// assert_eq!(format!("{}", ApiVersion::V2), "v2");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 2.
    V2,
    /// Custom version segment for unreleased or staging versions.
    ///
    /// Constructed directly, the segment is only checked when the
    /// configuration is built. Prefer `"v3".parse()` to fail early.
    Custom(String),
}

impl ApiVersion {
    /// Returns the latest stable API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2
    }

    /// Returns the version as a path segment.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::V2 => "v2",
            Self::Custom(version) => version,
        }
    }

    /// Checks that the version is a single non-empty path segment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiVersion`] if the segment is empty or
    /// contains `/` or whitespace.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let segment = self.as_str();
        if segment.is_empty() || segment.contains('/') || segment.chars().any(char::is_whitespace)
        {
            return Err(ConfigError::InvalidApiVersion {
                version: segment.to_string(),
            });
        }
        Ok(())
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("v2") {
            return Ok(Self::V2);
        }

        let version = Self::Custom(trimmed.to_string());
        version.validate().map_err(|_| ConfigError::InvalidApiVersion {
            version: s.to_string(),
        })?;
        Ok(version)
    }
}
