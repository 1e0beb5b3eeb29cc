use serde::{Deserialize, Serialize};

/// Instance-sharing scope declared for a registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Lifestyle {
    /// Single instance shared across the application
    #[default]
    Singleton,
    /// New instance created for each resolution
    Transient,
    /// Instance scoped to a particular context (e.g., request scope)
    Scoped,
}

impl Lifestyle {
    /// Get the lifestyle name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Lifestyle::Singleton => "singleton",
            Lifestyle::Transient => "transient",
            Lifestyle::Scoped => "scoped",
        }
    }
}

impl std::fmt::Display for Lifestyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Lifestyle {
    type Err = crate::ContainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "singleton" => Ok(Lifestyle::Singleton),
            "transient" => Ok(Lifestyle::Transient),
            "scoped" => Ok(Lifestyle::Scoped),
            _ => Err(crate::ContainerError::InvalidLifestyle {
                lifestyle: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifestyle_parsing() {
        assert_eq!("Singleton".parse::<Lifestyle>().unwrap(), Lifestyle::Singleton);
        assert_eq!("transient".parse::<Lifestyle>().unwrap(), Lifestyle::Transient);
        assert_eq!("SCOPED".parse::<Lifestyle>().unwrap(), Lifestyle::Scoped);
        assert!("thread".parse::<Lifestyle>().is_err());
    }

    #[test]
    fn test_lifestyle_default_is_singleton() {
        assert_eq!(Lifestyle::default(), Lifestyle::Singleton);
        assert_eq!(Lifestyle::Transient.to_string(), "transient");
    }
}
