//! MSBuild project file (build descriptor) for the generated C# sources.

use std::path::{Path, PathBuf};

use slimgen_core::{FileRules, GeneratedFile, Version};
use slimgen_manifest::{Dependency, GenerationConfig, Manifest};

use crate::code_builder::CodeBuilder;

const HEADER: &str =
    "<!-- <auto-generated> Regenerated by slimgen on every run; do not edit. </auto-generated> -->";

const LANG_VERSION: &str = "latest";

/// Warnings silenced for generated code: missing XML docs, obsolete members
/// kept for compatibility, lowercase type names emitted by the generator.
const NO_WARN: &[&str] = &["CS1591", "CS0618", "CS8981"];

/// The `<PackageId>.csproj` build descriptor.
#[derive(Debug, Clone)]
pub struct ProjectFile {
    pub package_id: String,
    pub version: Version,
    pub target_framework: String,
    pub assembly_name: String,
    pub root_namespace: String,
    pub dependencies: Vec<Dependency>,
}

impl ProjectFile {
    pub fn new(package_id: impl Into<String>, root_namespace: impl Into<String>) -> Self {
        let root_namespace = root_namespace.into();
        Self {
            package_id: package_id.into(),
            version: Version::new(0, 1, 0),
            target_framework: "netstandard2.0".to_string(),
            assembly_name: root_namespace.clone(),
            root_namespace,
            dependencies: Vec::new(),
        }
    }

    /// Descriptor for the package described by `manifest`.
    pub fn from_manifest(manifest: &Manifest, config: &GenerationConfig) -> Self {
        Self::new(&manifest.package.id, config.namespace())
            .with_version(manifest.package.version.clone())
            .with_target_framework(&manifest.package.target_framework)
            .with_assembly_name(manifest.assembly_name())
            .with_dependencies(manifest.package.dependencies.iter().cloned())
    }

    pub fn with_version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    pub fn with_target_framework(mut self, target_framework: impl Into<String>) -> Self {
        self.target_framework = target_framework.into();
        self
    }

    pub fn with_assembly_name(mut self, assembly_name: impl Into<String>) -> Self {
        self.assembly_name = assembly_name.into();
        self
    }

    pub fn with_dependency(mut self, dep: Dependency) -> Self {
        self.dependencies.push(dep);
        self
    }

    pub fn with_dependencies(mut self, deps: impl IntoIterator<Item = Dependency>) -> Self {
        self.dependencies.extend(deps);
        self
    }

    /// File name of the descriptor inside the generated tree.
    pub fn file_name(&self) -> String {
        format!("{}.csproj", self.package_id)
    }
}

impl GeneratedFile for ProjectFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.file_name())
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite().with_header(HEADER)
    }

    fn render(&self) -> String {
        CodeBuilder::xml()
            .line(r#"<Project Sdk="Microsoft.NET.Sdk">"#)
            .blank()
            .indent()
            .element("PropertyGroup", |b| {
                b.text_element("TargetFramework", &escape(&self.target_framework))
                    .text_element("LangVersion", LANG_VERSION)
                    .text_element("AssemblyName", &escape(&self.assembly_name))
                    .text_element("RootNamespace", &escape(&self.root_namespace))
                    .text_element("PackageId", &escape(&self.package_id))
                    .text_element("Version", &self.version.to_string())
                    .text_element("GenerateDocumentationFile", "false")
                    .text_element("NoWarn", &format!("$(NoWarn);{}", NO_WARN.join(";")))
            })
            .blank()
            .element("ItemGroup", |b| {
                b.each(&self.dependencies, |b, dep| {
                    b.line(&format!(
                        r#"<PackageReference Include="{}" Version="{}" />"#,
                        escape(&dep.name),
                        escape(&dep.version)
                    ))
                })
            })
            .dedent()
            .blank()
            .line("</Project>")
            .build()
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProjectFile {
        ProjectFile::new("Contoso.Mail.Client", "Contoso.Mail")
            .with_version(Version::new(2, 1, 0))
            .with_dependency(Dependency::new("Microsoft.Kiota.Abstractions", "[1.14.0, 2.0.0)"))
            .with_dependency(Dependency::new("Microsoft.Graph.Core", "[3.2.0, 4.0.0)"))
    }

    #[test]
    fn test_path_uses_package_id() {
        let path = sample().path(Path::new("out"));
        assert_eq!(path, Path::new("out/Contoso.Mail.Client.csproj"));
    }

    #[test]
    fn test_render_declares_identity() {
        let content = sample().render();

        assert!(content.starts_with("<Project Sdk=\"Microsoft.NET.Sdk\">\n"));
        assert!(content.contains("    <AssemblyName>Contoso.Mail</AssemblyName>\n"));
        assert!(content.contains("    <PackageId>Contoso.Mail.Client</PackageId>\n"));
        assert!(content.contains("    <Version>2.1.0</Version>\n"));
        assert!(content.ends_with("</Project>\n"));
    }

    #[test]
    fn test_render_keeps_dependency_order() {
        let content = sample().render();
        let abstractions = content.find("Microsoft.Kiota.Abstractions").unwrap();
        let core = content.find("Microsoft.Graph.Core").unwrap();
        assert!(abstractions < core);
        assert!(content.contains(
            r#"<PackageReference Include="Microsoft.Kiota.Abstractions" Version="[1.14.0, 2.0.0)" />"#
        ));
    }

    #[test]
    fn test_render_is_deterministic() {
        assert_eq!(sample().contents(), sample().contents());
    }

    #[test]
    fn test_contents_start_with_header() {
        assert!(sample().contents().starts_with("<!-- <auto-generated>"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a<b & \"c\">"), "a&lt;b &amp; &quot;c&quot;&gt;");
    }
}
