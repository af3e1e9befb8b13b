//! Target language for the generated client.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Languages the descriptor and shim synthesizers know how to complete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// C# (.NET)
    #[default]
    CSharp,
}

impl Language {
    /// Returns the language identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::CSharp => "csharp",
        }
    }

    /// Identifier passed to the generator's `--language` argument.
    pub fn generator_id(&self) -> &'static str {
        match self {
            Language::CSharp => "CSharp",
        }
    }

    /// Source file extension without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Language::CSharp => "cs",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csharp" | "cs" | "c#" => Ok(Language::CSharp),
            _ => Err(format!("unknown language '{}', expected 'csharp'", s)),
        }
    }
}
