//! Path allowlist: the request paths retained from the full specification.
//!
//! Patterns are compared segment by segment against request paths. They are
//! prefix patterns, not regular expressions:
//!
//! - a trailing `**` segment matches the fixed prefix itself and any deeper path
//! - a `*` segment matches exactly one path segment
//! - every other segment, including path parameters such as `{user-id}`,
//!   matches literally
//!
//! Overlapping patterns are allowed and simply union their matches.

use std::{fmt, str::FromStr};

use indexmap::IndexSet;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Segment {
    Literal(String),
    Any,
    Recursive,
}

/// A single allowlist pattern such as `/me/messages/**`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse a pattern. It must start with `/` and may use `**` only as the last segment.
    pub fn parse(pattern: &str) -> Result<Self, String> {
        if !pattern.starts_with('/') {
            return Err(format!("pattern '{}' must start with '/'", pattern));
        }

        let trimmed = pattern.trim_end_matches('/');
        let parts = split_path(trimmed);
        let mut segments = Vec::with_capacity(parts.len());

        for (i, part) in parts.iter().enumerate() {
            let segment = match *part {
                "" => return Err(format!("pattern '{}' contains an empty segment", pattern)),
                "**" if i + 1 == parts.len() => Segment::Recursive,
                "**" => {
                    return Err(format!(
                        "pattern '{}' uses '**' before the last segment",
                        pattern
                    ));
                }
                "*" => Segment::Any,
                lit if lit.contains('*') => {
                    return Err(format!(
                        "pattern '{}' mixes '*' with literal text in '{}'",
                        pattern, lit
                    ));
                }
                lit => Segment::Literal(lit.to_string()),
            };
            segments.push(segment);
        }

        let raw = if trimmed.is_empty() {
            "/".to_string()
        } else {
            trimmed.to_string()
        };

        Ok(Self { raw, segments })
    }

    /// The pattern text as written (without a trailing slash).
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether the pattern ends in the recursive `**` wildcard.
    pub fn is_recursive(&self) -> bool {
        matches!(self.segments.last(), Some(Segment::Recursive))
    }

    /// The part of the pattern before a trailing `**`.
    pub fn fixed_prefix(&self) -> &str {
        if self.is_recursive() {
            let prefix = self.raw.trim_end_matches("**").trim_end_matches('/');
            if prefix.is_empty() { "/" } else { prefix }
        } else {
            &self.raw
        }
    }

    /// Whether a request path falls under this pattern.
    pub fn matches(&self, path: &str) -> bool {
        let path_segments = split_path(path.trim_end_matches('/'));

        let fixed = if self.is_recursive() {
            let fixed = &self.segments[..self.segments.len() - 1];
            if path_segments.len() < fixed.len() {
                return false;
            }
            fixed
        } else {
            if path_segments.len() != self.segments.len() {
                return false;
            }
            &self.segments[..]
        };

        fixed
            .iter()
            .zip(&path_segments)
            .all(|(segment, part)| match segment {
                Segment::Literal(lit) => lit == part,
                Segment::Any => !part.is_empty(),
                Segment::Recursive => true,
            })
    }
}

fn split_path(path: &str) -> Vec<&str> {
    path.strip_prefix('/')
        .filter(|rest| !rest.is_empty())
        .map(|rest| rest.split('/').collect())
        .unwrap_or_default()
}

impl FromStr for PathPattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Ordered, duplicate-free set of [`PathPattern`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<String>")]
pub struct PathAllowlist {
    patterns: IndexSet<PathPattern>,
}

impl PathAllowlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pattern; returns false if an identical pattern was already present.
    pub fn insert(&mut self, pattern: PathPattern) -> bool {
        self.patterns.insert(pattern)
    }

    /// Parse every pattern, keeping first-seen order.
    pub fn parse<I, S>(patterns: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut allowlist = Self::new();
        for pattern in patterns {
            allowlist.insert(PathPattern::parse(pattern.as_ref())?);
        }
        Ok(allowlist)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathPattern> {
        self.patterns.iter()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Whether any pattern matches the request path.
    pub fn matches(&self, path: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(path))
    }
}

impl TryFrom<Vec<String>> for PathAllowlist {
    type Error = String;

    fn try_from(patterns: Vec<String>) -> Result<Self, Self::Error> {
        Self::parse(patterns)
    }
}

impl<'a> IntoIterator for &'a PathAllowlist {
    type Item = &'a PathPattern;
    type IntoIter = indexmap::set::Iter<'a, PathPattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}
