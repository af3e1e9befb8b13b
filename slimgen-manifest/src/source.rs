//! Where the API description comes from.

use std::{fmt, path::PathBuf};

use serde::Deserialize;

/// A URL or local path resolving to a machine-readable API description.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum SpecificationSource {
    Url(String),
    Path(PathBuf),
}

impl SpecificationSource {
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Url(_))
    }

    /// The value handed to the generator's `--openapi` argument.
    pub fn location(&self) -> String {
        match self {
            Self::Url(url) => url.clone(),
            Self::Path(path) => path.display().to_string(),
        }
    }
}

impl From<String> for SpecificationSource {
    fn from(s: String) -> Self {
        if s.starts_with("http://") || s.starts_with("https://") {
            Self::Url(s)
        } else {
            Self::Path(PathBuf::from(s))
        }
    }
}

impl From<&str> for SpecificationSource {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl fmt::Display for SpecificationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.location())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_detection() {
        assert!(SpecificationSource::from("https://example.com/openapi.yaml").is_remote());
        assert!(SpecificationSource::from("http://localhost/openapi.json").is_remote());
        assert!(!SpecificationSource::from("./openapi.yaml").is_remote());
        assert_eq!(
            SpecificationSource::from("specs/openapi.yaml"),
            SpecificationSource::Path(PathBuf::from("specs/openapi.yaml"))
        );
    }
}
