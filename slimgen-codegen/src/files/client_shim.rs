//! Partial class that restores the full library's constructor overloads and
//! disposal on the generated root client.

use std::path::{Path, PathBuf};

use slimgen_core::{FileRules, GeneratedFile};
use slimgen_manifest::GenerationConfig;

use crate::code_builder::CodeBuilder;
use crate::compat::{CompatibilitySpec, Disposal};

const HEADER: &str = "// <auto-generated>\n//     Regenerated by slimgen on every run. Changes to this file are overwritten.\n// </auto-generated>";

/// Namespace that hosts the client options and factory types.
const GRAPH_NAMESPACE: &str = "Microsoft.Graph";

const VERSION_FIELD: &str = "assemblyVersion";
const OPTIONS_FIELD: &str = "graphClientOptions";

/// The `<ClassName>.Compat.cs` shim.
#[derive(Debug, Clone)]
pub struct ClientShim {
    pub class_name: String,
    pub namespace: String,
    pub contract: CompatibilitySpec,
}

impl ClientShim {
    pub fn new(
        class_name: impl Into<String>,
        namespace: impl Into<String>,
        contract: CompatibilitySpec,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            namespace: namespace.into(),
            contract,
        }
    }

    pub fn from_config(config: &GenerationConfig, contract: CompatibilitySpec) -> Self {
        Self::new(config.class_name(), config.namespace(), contract)
    }

    pub fn file_name(&self) -> String {
        format!("{}.Compat.cs", self.class_name)
    }

    fn usings(&self) -> Vec<&str> {
        let mut usings: Vec<&str> = self.contract.usings.clone();
        if self.namespace != GRAPH_NAMESPACE && !usings.contains(&GRAPH_NAMESPACE) {
            usings.push(GRAPH_NAMESPACE);
        }
        usings
    }

    fn declaration(&self) -> String {
        let interfaces = self.contract.implemented_interfaces();
        if interfaces.is_empty() {
            format!("public partial class {}", self.class_name)
        } else {
            format!(
                "public partial class {} : {}",
                self.class_name,
                interfaces.join(", ")
            )
        }
    }

    fn fields(&self, b: CodeBuilder) -> CodeBuilder {
        let c = &self.contract;
        b.line(&format!(
            "private static readonly Version {VERSION_FIELD} = typeof({}).GetTypeInfo().Assembly.GetName().Version;",
            self.class_name
        ))
        .blank()
        .line(&format!(
            "private static readonly {0} {OPTIONS_FIELD} = new {0}",
            c.client_options_type
        ))
        .line("{")
        .indent()
        .line(&format!(
            "GraphServiceLibraryClientVersion = {},",
            c.version_expression(VERSION_FIELD)
        ))
        .line(&format!("GraphServiceTargetVersion = \"{}\"", c.target_surface))
        .dedent()
        .line("};")
    }

    fn auth_constructor(&self, b: CodeBuilder) -> CodeBuilder {
        let c = &self.contract;
        b.summary(&format!(
            "Creates a new <see cref=\"{}\"/> that authenticates requests with <paramref name=\"authenticationProvider\"/>.",
            self.class_name
        ))
        .line(&format!(
            "public {}({} authenticationProvider, string baseUrl = null)",
            self.class_name, c.auth_provider_type
        ))
        .indent()
        .line(&format!(
            ": this(new {}(authenticationProvider, {OPTIONS_FIELD}, httpClient: {}.Create({OPTIONS_FIELD}, \"{}\")), baseUrl)",
            c.request_adapter_type, c.client_factory_type, c.target_surface
        ))
        .dedent()
        .line("{")
        .line("}")
    }

    fn transport_constructor(&self, b: CodeBuilder) -> CodeBuilder {
        let c = &self.contract;
        b.summary(&format!(
            "Creates a new <see cref=\"{}\"/> over a caller-supplied <see cref=\"{}\"/>.",
            self.class_name, c.transport_client_type
        ))
        .line(&format!(
            "public {}({} httpClient, {} authenticationProvider = null, string baseUrl = null)",
            self.class_name, c.transport_client_type, c.auth_provider_type
        ))
        .indent()
        .line(&format!(
            ": this(new {}(authenticationProvider ?? new {}(), {OPTIONS_FIELD}, httpClient: httpClient), baseUrl)",
            c.request_adapter_type, c.anonymous_auth_provider
        ))
        .dedent()
        .line("{")
        .line("}")
    }

    fn base_url_constructor(&self, b: CodeBuilder) -> CodeBuilder {
        b.line(&format!(
            "private {}(IRequestAdapter requestAdapter, string baseUrl)",
            self.class_name
        ))
        .indent()
        .line(": this(requestAdapter)")
        .dedent()
        .block_with_close("{", "}", |b| {
            b.brace_block("if (!string.IsNullOrEmpty(baseUrl))", |b| {
                b.line("RequestAdapter.BaseUrl = baseUrl;")
            })
        })
    }

    fn dispose(&self, b: CodeBuilder, capability: &str) -> CodeBuilder {
        b.summary("Disposes the request adapter when it supports disposal.")
            .brace_block("public void Dispose()", |b| {
                b.brace_block(
                    &format!("if (RequestAdapter is {capability} disposable)"),
                    |b| b.line("disposable.Dispose();"),
                )
            })
    }
}

impl GeneratedFile for ClientShim {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.file_name())
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite().with_header(HEADER)
    }

    fn render(&self) -> String {
        let builder = CodeBuilder::csharp()
            .each(self.usings(), |b, ns| b.line(&format!("using {ns};")))
            .blank();

        builder
            .brace_block(&format!("namespace {}", self.namespace), |b| {
                b.brace_block(&self.declaration(), |b| {
                    let b = self.fields(b).blank();
                    let b = self.auth_constructor(b).blank();
                    let b = self.transport_constructor(b).blank();
                    let b = self.base_url_constructor(b);
                    match &self.contract.disposal {
                        Disposal::AdapterIfCapable { capability } => {
                            self.dispose(b.blank(), capability)
                        }
                        Disposal::None => b,
                    }
                })
            })
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shim() -> ClientShim {
        ClientShim::new("MailClient", "Contoso.Mail", CompatibilitySpec::v1("v1.0"))
    }

    #[test]
    fn test_path() {
        assert_eq!(
            shim().path(Path::new("gen")),
            Path::new("gen/MailClient.Compat.cs")
        );
    }

    #[test]
    fn test_declares_partial_disposable_client() {
        let content = shim().render();
        assert!(content.contains("namespace Contoso.Mail\n{\n"));
        assert!(content.contains("    public partial class MailClient : IDisposable\n"));
        assert!(content.contains("public void Dispose()"));
        assert!(content.contains("if (RequestAdapter is IDisposable disposable)"));
    }

    #[test]
    fn test_constructor_overloads() {
        let content = shim().render();
        assert!(content.contains(
            "public MailClient(IAuthenticationProvider authenticationProvider, string baseUrl = null)"
        ));
        assert!(content.contains(
            "public MailClient(HttpClient httpClient, IAuthenticationProvider authenticationProvider = null, string baseUrl = null)"
        ));
        assert!(content.contains("authenticationProvider ?? new AnonymousAuthenticationProvider()"));
        assert!(content.contains("GraphClientFactory.Create(graphClientOptions, \"v1.0\")"));
    }

    #[test]
    fn test_reports_version_and_surface() {
        let content = shim().render();
        assert!(content.contains("typeof(MailClient).GetTypeInfo().Assembly.GetName().Version;"));
        assert!(content.contains("GraphServiceTargetVersion = \"v1.0\""));
        assert!(content.contains("{assemblyVersion.Major}.{assemblyVersion.Minor}.{assemblyVersion.Build}"));
    }

    #[test]
    fn test_imports_graph_namespace_outside_it() {
        assert!(shim().render().contains("using Microsoft.Graph;\n"));

        let inside = ClientShim::new("GraphServiceClient", "Microsoft.Graph", CompatibilitySpec::v1("v1.0"));
        assert!(!inside.render().contains("using Microsoft.Graph;\n"));
    }

    #[test]
    fn test_no_disposal() {
        let contract = CompatibilitySpec {
            disposal: Disposal::None,
            ..CompatibilitySpec::v1("beta")
        };
        let content = ClientShim::new("MailClient", "Contoso.Mail", contract).render();
        assert!(content.contains("    public partial class MailClient\n"));
        assert!(!content.contains("Dispose"));
    }

    #[test]
    fn test_render_is_deterministic() {
        assert_eq!(shim().contents(), shim().contents());
        assert!(shim().contents().starts_with("// <auto-generated>\n"));
    }
}
