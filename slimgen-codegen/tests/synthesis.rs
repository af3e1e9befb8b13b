//! Rendered artifacts for the built-in configuration.

use slimgen_codegen::{ClientShim, CompatibilitySpec, ProjectFile};
use slimgen_core::GeneratedFile;
use slimgen_manifest::Manifest;

fn manifest() -> Manifest {
    Manifest::default()
}

#[test]
fn descriptor_default() {
    let manifest = manifest();
    let config = manifest.generation_config(None);
    let content = ProjectFile::from_manifest(&manifest, &config).contents();
    insta::assert_snapshot!("descriptor_default", content);
}

#[test]
fn shim_default() {
    let manifest = manifest();
    let config = manifest.generation_config(None);
    let contract = CompatibilitySpec::v1(&manifest.compat.surface);
    let content = ClientShim::from_config(&config, contract).contents();
    insta::assert_snapshot!("shim_default", content);
}

#[test]
fn rendering_ignores_previous_runs() {
    let manifest = manifest();
    let config = manifest.generation_config(None);

    let first = ProjectFile::from_manifest(&manifest, &config).contents();
    let second = ProjectFile::from_manifest(&manifest.clone(), &config).contents();
    assert_eq!(first, second);

    let shim = |m: &Manifest| {
        ClientShim::from_config(&config, CompatibilitySpec::v1(&m.compat.surface)).contents()
    };
    assert_eq!(shim(&manifest), shim(&manifest));
}
