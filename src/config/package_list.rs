//! Package list (`packages.yaml`) handling
//!
//! The package file is a YAML mapping with a single `packages` key:
//!
//! ```yaml
//! packages:
//!   - curl
//!   - wget
//! ```

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::Deserialize;
use serde_yaml::Value;

use crate::error::{Result, config};

/// Default package file name, looked up in the current directory
pub const DEFAULT_PACKAGE_FILE: &str = "packages.yaml";

/// Name of a single package as understood by the backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageName(String);

impl PackageName {
    /// Validate and wrap a package name
    pub fn parse(raw: &str) -> Result<Self> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(config::invalid_name(raw, "name is empty"));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(config::invalid_name(raw, "name contains whitespace"));
        }
        // Would be read as an option by apt-get and dpkg-query.
        if name.starts_with('-') {
            return Err(config::invalid_name(raw, "name must not start with '-'"));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// On-disk shape of the package file
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PackageFile {
    packages: Vec<Value>,
}

/// Accept only YAML strings as package names
///
/// serde_yaml would otherwise coerce `123` or `true` into a string.
fn entry_name<'a>(entry: &'a Value, origin: &str) -> Result<&'a str> {
    let kind = match entry {
        Value::String(name) => return Ok(name.as_str()),
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    };
    Err(config::parse_failed(
        origin,
        format!("package entries must be strings, found {kind}"),
    ))
}

/// Ordered, duplicate-free list of packages to reconcile
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageList {
    packages: Vec<PackageName>,
}

impl PackageList {
    /// Build a list from raw names, rejecting invalid names and duplicates
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut packages = Vec::new();
        for raw in names {
            let name = PackageName::parse(raw.as_ref())?;
            if !seen.insert(name.clone()) {
                return Err(config::duplicate(name.as_str()));
            }
            packages.push(name);
        }
        Ok(Self { packages })
    }

    /// Parse a package list from a YAML string
    ///
    /// `origin` is only used in error messages.
    pub fn from_yaml(yaml: &str, origin: &str) -> Result<Self> {
        let file: PackageFile =
            serde_yaml::from_str(yaml).map_err(|e| config::parse_failed(origin, e.to_string()))?;
        let names = file
            .packages
            .iter()
            .map(|entry| entry_name(entry, origin))
            .collect::<Result<Vec<_>>>()?;
        Self::from_names(names)
    }

    /// Load the package list from disk
    pub fn load(path: &Path) -> Result<Self> {
        let origin = path.display().to_string();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(config::not_found(origin));
            }
            Err(e) => return Err(config::read_failed(origin, e.to_string())),
        };
        let list = Self::from_yaml(&content, &origin)?;
        tracing::debug!(path = %origin, count = list.len(), "loaded package list");
        Ok(list)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PackageName> {
        self.packages.iter()
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl<'a> IntoIterator for &'a PackageList {
    type Item = &'a PackageName;
    type IntoIter = std::slice::Iter<'a, PackageName>;

    fn into_iter(self) -> Self::IntoIter {
        self.packages.iter()
    }
}
