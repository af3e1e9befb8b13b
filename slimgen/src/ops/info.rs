//! Info operation - the effective configuration.

use std::path::Path;

use slimgen_codegen::CompatibilitySpec;
use slimgen_manifest::Manifest;

use crate::reports::InfoReport;

/// Execute the info operation.
pub fn info(manifest: &Manifest, config_path: Option<&Path>) -> InfoReport {
    let client = &manifest.client;
    let package = &manifest.package;

    InfoReport {
        config_path: config_path
            .map(|p| std::fs::canonicalize(p).unwrap_or_else(|_| p.to_path_buf())),
        source: manifest.spec.source.to_string(),
        include: manifest.spec.include.iter().map(|p| p.to_string()).collect(),
        language: client.language.as_str(),
        class_name: client.class_name.clone(),
        namespace: client.namespace.clone(),
        output: client.output.clone(),
        backing_store: client.backing_store,
        exclude_backward_compatible: client.exclude_backward_compatible,
        package_id: package.id.clone(),
        version: package.version.to_string(),
        target_framework: package.target_framework.clone(),
        assembly_name: manifest.assembly_name().to_string(),
        dependencies: package
            .dependencies
            .iter()
            .map(|d| (d.name.clone(), d.version.clone()))
            .collect(),
        surface: manifest.compat.surface.clone(),
        compat_revision: CompatibilitySpec::REVISION,
    }
}
