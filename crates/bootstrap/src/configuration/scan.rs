use crate::error::ConfigurationError;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Which modules are scanned for participants beyond the explicitly named ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum BootstrapScan {
    /// Explicitly named modules only
    None,
    /// Alias of `None`: explicitly named modules only, with no sweep of
    /// loaded modules
    Explicit,
    /// Loaded modules, plus those in the `Shuttle.` namespace family
    #[default]
    Shuttle,
    /// Loaded modules, plus every module the locators can find
    All,
}

impl BootstrapScan {
    /// Whether every loaded module is appended after the explicit ones
    pub fn scans_loaded_modules(&self) -> bool {
        !matches!(self, BootstrapScan::None | BootstrapScan::Explicit)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BootstrapScan::None => "None",
            BootstrapScan::Explicit => "Explicit",
            BootstrapScan::Shuttle => "Shuttle",
            BootstrapScan::All => "All",
        }
    }
}

impl FromStr for BootstrapScan {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(BootstrapScan::None),
            "explicit" => Ok(BootstrapScan::Explicit),
            "shuttle" => Ok(BootstrapScan::Shuttle),
            "all" => Ok(BootstrapScan::All),
            _ => Err(ConfigurationError::invalid_value(
                "scan",
                s,
                "None, Explicit, Shuttle, or All",
            )),
        }
    }
}

/// An empty `scan:` value means the default policy
impl<'de> Deserialize<'de> for BootstrapScan {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(value) => value.parse().map_err(serde::de::Error::custom),
            None => Ok(BootstrapScan::default()),
        }
    }
}

impl std::fmt::Display for BootstrapScan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_parsing_is_case_insensitive() {
        assert_eq!("none".parse::<BootstrapScan>().unwrap(), BootstrapScan::None);
        assert_eq!("SHUTTLE".parse::<BootstrapScan>().unwrap(), BootstrapScan::Shuttle);
        assert_eq!(" All ".parse::<BootstrapScan>().unwrap(), BootstrapScan::All);
        assert_eq!("Explicit".parse::<BootstrapScan>().unwrap(), BootstrapScan::Explicit);
    }

    #[test]
    fn test_scan_rejects_unknown_policy() {
        match "everything".parse::<BootstrapScan>() {
            Err(ConfigurationError::InvalidValue { field, value, .. }) => {
                assert_eq!(field, "scan");
                assert_eq!(value, "everything");
            }
            other => panic!("Expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_null_scan_deserializes_to_default() {
        let scan: BootstrapScan = serde_yaml::from_str("~").unwrap();
        assert_eq!(scan, BootstrapScan::Shuttle);

        let scan: BootstrapScan = serde_yaml::from_str("explicit").unwrap();
        assert_eq!(scan, BootstrapScan::Explicit);
    }

    #[test]
    fn test_default_and_loaded_module_policy() {
        assert_eq!(BootstrapScan::default(), BootstrapScan::Shuttle);
        assert!(!BootstrapScan::None.scans_loaded_modules());
        assert!(!BootstrapScan::Explicit.scans_loaded_modules());
        assert!(BootstrapScan::Shuttle.scans_loaded_modules());
        assert!(BootstrapScan::All.scans_loaded_modules());
    }
}
