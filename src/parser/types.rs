//! Shared types for module graph parsing.
//!
//! This module defines the identities that flow through the whole pipeline:
//! module names, version names, the `(module, version)` pair that identifies
//! one node, and the consumer→dependency [`Relationship`] edge.

use serde::Serialize;
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use super::ParseError;

/// Version assigned to identities that carry no `@version` suffix.
pub const TIP_VERSION: &str = "tip";

/// Separator between module and version in an identity token.
const VERSION_SEPARATOR: char = '@';

/// Name of a module, e.g. `github.com/ipld/go-ipld-prime`.
///
/// Compared by exact string equality. Major version suffixes such as `/v2`
/// are part of the name, so `example.com/lib` and `example.com/lib/v2` are
/// distinct modules.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ModuleName(String);

impl ModuleName {
    /// Creates a module name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModuleName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ModuleName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for ModuleName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Name of a module version, e.g. `v0.9.0`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct VersionName(String);

impl VersionName {
    /// Creates a version name.
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    /// The sentinel version used when an identity has no `@version`.
    pub fn tip() -> Self {
        Self::new(TIP_VERSION)
    }

    /// Returns true if this is the `tip` sentinel.
    pub fn is_tip(&self) -> bool {
        self.0 == TIP_VERSION
    }

    /// Returns the version as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VersionName {
    fn from(version: &str) -> Self {
        Self::new(version)
    }
}

impl From<String> for VersionName {
    fn from(version: String) -> Self {
        Self(version)
    }
}

/// One concrete node of the module graph: a module at a specific version.
///
/// # Example
///
/// ```
/// use modscope::parser::ModuleAndVersion;
///
/// let mv: ModuleAndVersion = "github.com/foo/bar@v1.2.0".parse().unwrap();
/// assert_eq!(mv.module.as_str(), "github.com/foo/bar");
/// assert_eq!(mv.version.as_str(), "v1.2.0");
/// assert_eq!(mv.to_string(), "github.com/foo/bar@v1.2.0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModuleAndVersion {
    /// The module this node belongs to.
    pub module: ModuleName,
    /// The version of the module.
    pub version: VersionName,
}

impl ModuleAndVersion {
    /// Creates a new module and version pair.
    pub fn new(module: impl Into<ModuleName>, version: impl Into<VersionName>) -> Self {
        Self {
            module: module.into(),
            version: version.into(),
        }
    }
}

impl FromStr for ModuleAndVersion {
    type Err = ParseError;

    /// Parses `module@version`, or a bare `module` which gets the `tip` version.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(VERSION_SEPARATOR);
        let module = parts.next().unwrap_or_default();
        match (parts.next(), parts.next()) {
            (None, _) => Ok(Self::new(module, VersionName::tip())),
            (Some(version), None) => Ok(Self::new(module, version)),
            (Some(_), Some(_)) => Err(ParseError::MalformedIdentity {
                token: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ModuleAndVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.module, VERSION_SEPARATOR, self.version)
    }
}

impl Serialize for ModuleAndVersion {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A directed dependency edge between two module versions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Relationship {
    /// The consumer, i.e. the module version that has the dependency.
    pub downstream: ModuleAndVersion,
    /// The dependency being relied upon.
    pub upstream: ModuleAndVersion,
}

impl Relationship {
    /// Creates a new relationship from consumer to dependency.
    pub fn new(downstream: ModuleAndVersion, upstream: ModuleAndVersion) -> Self {
        Self {
            downstream,
            upstream,
        }
    }

    /// Parses a relationship from its two identity tokens.
    pub fn from_tokens(downstream: &str, upstream: &str) -> Result<Self, ParseError> {
        Ok(Self::new(downstream.parse()?, upstream.parse()?))
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.downstream, self.upstream)
    }
}
