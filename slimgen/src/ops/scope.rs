//! Scope operation - which operations the allowlist keeps.

use slimgen_codegen::{EffectiveScope, Result, SpecDocument};
use slimgen_manifest::{Manifest, SpecificationSource};

use crate::reports::ScopeReport;

/// Execute the scope operation.
///
/// A remote source that may not be fetched yields a report without
/// operations instead of an error.
pub fn scope(
    manifest: &Manifest,
    source: &SpecificationSource,
    fetch_remote: bool,
) -> Result<ScopeReport> {
    let allowlist = &manifest.spec.include;
    let patterns = allowlist.iter().map(|p| p.to_string()).collect();

    let Some(document) = SpecDocument::load(source, fetch_remote)? else {
        return Ok(ScopeReport {
            source: source.to_string(),
            patterns,
            resolved: None,
        });
    };

    let scope = EffectiveScope::resolve(allowlist, document.operations());
    let resolved = crate::reports::ResolvedScope {
        operations: scope.operations().iter().map(|op| op.to_string()).collect(),
        total: scope.total(),
        unmatched: scope
            .unmatched(allowlist)
            .into_iter()
            .map(|p| p.to_string())
            .collect(),
    };

    Ok(ScopeReport {
        source: source.to_string(),
        patterns,
        resolved: Some(resolved),
    })
}
