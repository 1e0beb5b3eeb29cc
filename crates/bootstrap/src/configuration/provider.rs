use crate::error::ConfigurationError;
use serde::de::DeserializeOwned;
use serde_yaml::Value;
use std::path::{Path, PathBuf};

/// Environment variable naming the configuration file
pub const CONFIG_PATH_ENV: &str = "SHUTTLE_CONFIG";

/// Configuration file used when `SHUTTLE_CONFIG` is not set
pub const DEFAULT_CONFIG_FILE: &str = "shuttle.yaml";

/// Opens named sections of a YAML configuration document.
///
/// Sections are addressed by group and name, so `open("shuttle", "bootstrap")`
/// reads the `bootstrap` mapping nested under the top-level `shuttle` key.
#[derive(Debug, Clone, Default)]
pub struct ConfigurationSectionProvider {
    document: Option<Value>,
    path: Option<PathBuf>,
}

impl ConfigurationSectionProvider {
    /// A provider with no document; every section is absent
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a YAML document held in memory
    pub fn from_yaml(content: &str) -> Result<Self, ConfigurationError> {
        Ok(Self {
            document: parse_document(content)?,
            path: None,
        })
    }

    /// Load a YAML document from a file that must exist
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigurationError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!("Loaded configuration file: {}", path.display());

        Ok(Self {
            document: parse_document(&content)?,
            path: Some(path.to_path_buf()),
        })
    }

    /// Load the file named by `SHUTTLE_CONFIG`, or `shuttle.yaml` in the
    /// working directory.
    ///
    /// A missing default file yields an empty provider. A file named through
    /// the environment variable must exist.
    pub fn from_default_location() -> Result<Self, ConfigurationError> {
        match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::from_path(path),
            _ => {
                let path = Self::default_path();
                if path.is_file() {
                    Self::from_path(path)
                } else {
                    tracing::debug!(
                        "No configuration file at {}; all sections are absent",
                        path.display()
                    );
                    Ok(Self::empty())
                }
            }
        }
    }

    pub fn default_path() -> PathBuf {
        PathBuf::from(DEFAULT_CONFIG_FILE)
    }

    /// File the document was read from, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Deserialize the section `group/section`.
    ///
    /// Returns `Ok(None)` when the group or section is missing or empty.
    pub fn open<T: DeserializeOwned>(
        &self,
        group: &str,
        section: &str,
    ) -> Result<Option<T>, ConfigurationError> {
        let value = match self
            .document
            .as_ref()
            .and_then(|document| document.get(group))
            .and_then(|group| group.get(section))
        {
            Some(value) if !value.is_null() => value.clone(),
            _ => return Ok(None),
        };

        serde_yaml::from_value(value)
            .map(Some)
            .map_err(|source| ConfigurationError::InvalidSection {
                group: group.to_string(),
                section: section.to_string(),
                source,
            })
    }
}

fn parse_document(content: &str) -> Result<Option<Value>, ConfigurationError> {
    if content.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_yaml::from_str(content)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        value: u32,
    }

    #[test]
    fn test_open_nested_section() {
        let provider = ConfigurationSectionProvider::from_yaml(
            "shuttle:\n  sample:\n    value: 7\n",
        )
        .unwrap();

        let section: Option<Sample> = provider.open("shuttle", "sample").unwrap();
        assert_eq!(section, Some(Sample { value: 7 }));
    }

    #[test]
    fn test_missing_group_or_section_is_absent() {
        let provider = ConfigurationSectionProvider::from_yaml("other:\n  sample:\n    value: 1\n").unwrap();

        assert!(provider.open::<Sample>("shuttle", "sample").unwrap().is_none());
        assert!(provider.open::<Sample>("other", "missing").unwrap().is_none());
        assert!(ConfigurationSectionProvider::empty()
            .open::<Sample>("shuttle", "sample")
            .unwrap()
            .is_none());
        assert!(ConfigurationSectionProvider::from_yaml("  \n")
            .unwrap()
            .open::<Sample>("shuttle", "sample")
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_malformed_section_reports_location() {
        let provider = ConfigurationSectionProvider::from_yaml(
            "shuttle:\n  sample:\n    value: not-a-number\n",
        )
        .unwrap();

        match provider.open::<Sample>("shuttle", "sample") {
            Err(ConfigurationError::InvalidSection { group, section, .. }) => {
                assert_eq!(group, "shuttle");
                assert_eq!(section, "sample");
            }
            other => panic!("Expected InvalidSection, got {:?}", other),
        }
    }

    #[test]
    fn test_from_path_requires_existing_file() {
        let result = ConfigurationSectionProvider::from_path("does/not/exist.yaml");
        assert!(matches!(result, Err(ConfigurationError::Io { .. })));
    }
}
