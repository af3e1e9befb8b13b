//! Shallow reading of an OpenAPI document: just the operations under `paths`.
//!
//! Full parsing and validation belong to the generator. This only extracts
//! `(method, path)` pairs so the allowlist can be checked before generating.

use std::{fmt, io::Read, path::Path};

use indexmap::IndexMap;
use serde::{Deserialize, de::IgnoredAny};
use slimgen_manifest::SpecificationSource;

use crate::{Error, Result};

const HTTP_METHODS: &[&str] = &[
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

/// One addressable operation in the specification.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Operation {
    pub path: String,
    pub method: String,
}

impl Operation {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: method.into().to_uppercase(),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<7} {}", self.method, self.path)
    }
}

#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(default)]
    paths: Option<IndexMap<String, RawPathItem>>,
}

/// A `paths` entry. Extensions and empty items may hold any value.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawPathItem {
    Item(IndexMap<String, IgnoredAny>),
    Other(#[allow(dead_code)] IgnoredAny),
}

/// Operations listed by a specification, in document order.
#[derive(Debug, Clone, Default)]
pub struct SpecDocument {
    operations: Vec<Operation>,
}

impl SpecDocument {
    pub fn new(operations: Vec<Operation>) -> Self {
        Self { operations }
    }

    /// Read the document behind `source`.
    ///
    /// Remote sources are only fetched when `fetch_remote` is set; otherwise
    /// `None` is returned and scope checking is left to after generation.
    pub fn load(source: &SpecificationSource, fetch_remote: bool) -> Result<Option<Self>> {
        let text = match source {
            SpecificationSource::Path(path) => std::fs::read_to_string(path)
                .map_err(|e| spec_error(source, e.to_string()))?,
            SpecificationSource::Url(url) if fetch_remote => fetch(url)
                .map_err(|message| spec_error(source, message))?,
            SpecificationSource::Url(_) => return Ok(None),
        };

        let is_json = match source {
            SpecificationSource::Path(path) => has_extension(path, "json"),
            SpecificationSource::Url(url) => url.ends_with(".json"),
        };

        Self::parse(&text, is_json)
            .map(Some)
            .map_err(|message| spec_error(source, message))
    }

    /// Parse document text as JSON or YAML.
    pub fn parse(text: &str, is_json: bool) -> std::result::Result<Self, String> {
        let raw: RawDocument = if is_json {
            serde_json::from_str(text).map_err(|e| e.to_string())?
        } else {
            serde_yaml::from_str(text).map_err(|e| e.to_string())?
        };

        let operations = raw
            .paths
            .unwrap_or_default()
            .into_iter()
            .filter(|(path, _)| path.starts_with('/'))
            .filter_map(|(path, item)| match item {
                RawPathItem::Item(fields) => Some((path, fields)),
                RawPathItem::Other(_) => None,
            })
            .flat_map(|(path, fields)| {
                fields
                    .into_keys()
                    .filter(|key| HTTP_METHODS.contains(&key.to_lowercase().as_str()))
                    .map(move |method| Operation::new(method, path.clone()))
            })
            .collect();

        Ok(Self::new(operations))
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }
}

fn fetch(url: &str) -> std::result::Result<String, String> {
    tracing::info!(url, "fetching specification");
    let response = ureq::get(url).call().map_err(|e| e.to_string())?;
    let mut text = String::new();
    response
        .into_reader()
        .read_to_string(&mut text)
        .map_err(|e| e.to_string())?;
    Ok(text)
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension().is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

fn spec_error(source: &SpecificationSource, message: String) -> Box<Error> {
    Box::new(Error::Specification {
        source_id: source.location(),
        message,
    })
}
