//! Resource type references: `Namespace/type/childType@apiVersion`

use crate::error::TypeError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

static RESOURCE_TYPE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?P<namespace>[a-z0-9][a-z0-9.]*)(?P<types>(?:/[a-z0-9\-]+)+)@(?P<version>\d{4}-\d{2}-\d{2}(?:-(?:preview|alpha|beta|rc|privatepreview))?)$",
    )
    .expect("resource type pattern is a valid regex")
});

/// Parsed reference to a resource type at one API version
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceTypeReference {
    namespace: String,
    types: Vec<String>,
    api_version: String,
}

impl ResourceTypeReference {
    /// Parse `Microsoft.Compute/virtualMachines@2019-06-01` style text
    pub fn parse(text: &str) -> Result<Self, TypeError> {
        let invalid = || TypeError::InvalidResourceTypeReference {
            text: text.to_string(),
        };
        let captures = RESOURCE_TYPE_PATTERN.captures(text).ok_or_else(invalid)?;

        let namespace = captures.name("namespace").ok_or_else(invalid)?.as_str();
        let types = captures.name("types").ok_or_else(invalid)?.as_str();
        let api_version = captures.name("version").ok_or_else(invalid)?.as_str();

        // Dots may not be doubled or trail the namespace
        if namespace.split('.').any(str::is_empty) {
            return Err(invalid());
        }

        Ok(Self {
            namespace: namespace.to_string(),
            types: types
                .split('/')
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect(),
            api_version: api_version.to_string(),
        })
    }

    /// Provider namespace, e.g. `Microsoft.Compute`
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Type segments below the namespace; child types follow their parent
    pub fn types(&self) -> &[String] {
        &self.types
    }

    /// API version, including any pre-release suffix
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// `namespace/type/childType`, without the version
    pub fn full_type(&self) -> String {
        let mut full = self.namespace.clone();
        for segment in &self.types {
            full.push('/');
            full.push_str(segment);
        }
        full
    }
}

impl FromStr for ResourceTypeReference {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ResourceTypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.full_type(), self.api_version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_top_level_type() {
        let reference = ResourceTypeReference::parse("Microsoft.Storage/storageAccounts@2019-06-01").unwrap();
        assert_eq!(reference.namespace(), "Microsoft.Storage");
        assert_eq!(reference.types(), ["storageAccounts".to_string()]);
        assert_eq!(reference.api_version(), "2019-06-01");
        assert_eq!(reference.full_type(), "Microsoft.Storage/storageAccounts");
        assert_eq!(reference.to_string(), "Microsoft.Storage/storageAccounts@2019-06-01");
    }

    #[test]
    fn test_parse_child_type() {
        let reference: ResourceTypeReference = "Microsoft.Compute/virtualMachines/extensions@2019-06-01-preview"
            .parse()
            .unwrap();
        assert_eq!(reference.types().len(), 2);
        assert_eq!(reference.full_type(), "Microsoft.Compute/virtualMachines/extensions");
        assert_eq!(reference.api_version(), "2019-06-01-preview");
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let reference = ResourceTypeReference::parse("microsoft.web/SITES@2020-01-01-BETA").unwrap();
        assert_eq!(reference.full_type(), "microsoft.web/SITES");
        assert_eq!(reference.api_version(), "2020-01-01-BETA");
    }

    #[test]
    fn test_rejects_malformed_references() {
        for text in [
            "",
            "Microsoft.Storage",
            "Microsoft.Storage/storageAccounts",
            "Microsoft.Storage/storageAccounts@",
            "Microsoft.Storage/storageAccounts@2019-6-1",
            "Microsoft.Storage/storageAccounts@2019-06-01-nightly",
            "Microsoft.Storage//storageAccounts@2019-06-01",
            "Microsoft..Storage/storageAccounts@2019-06-01",
            ".Microsoft/storageAccounts@2019-06-01",
            "Microsoft.Storage/storage_accounts@2019-06-01",
        ] {
            assert_eq!(
                ResourceTypeReference::parse(text),
                Err(TypeError::InvalidResourceTypeReference {
                    text: text.to_string()
                }),
                "{text:?} should be rejected"
            );
        }
    }
}
