//! Public contract the root client type must keep for callers of the
//! full-surface library.
//!
//! This is hand-maintained against the full library's public API. Any change
//! to constructor shapes, type names or version formatting goes here and
//! bumps [`CompatibilitySpec::REVISION`].

/// Behavior when the root client is disposed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposal {
    /// Do nothing beyond the generator's behavior.
    None,
    /// Dispose the request adapter, but only when it implements `capability`.
    AdapterIfCapable { capability: &'static str },
}

/// Constructor overloads and lifecycle behavior required on the root client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatibilitySpec {
    pub revision: u32,
    /// Release channel tag reported to the transport layer (e.g. `v1.0`).
    pub target_surface: String,
    /// Namespaces the shim imports.
    pub usings: Vec<&'static str>,
    pub auth_provider_type: &'static str,
    pub anonymous_auth_provider: &'static str,
    pub transport_client_type: &'static str,
    pub request_adapter_type: &'static str,
    pub client_options_type: &'static str,
    pub client_factory_type: &'static str,
    /// Number of assembly version components reported (`Major.Minor.Build`).
    pub version_components: u8,
    pub disposal: Disposal,
}

impl CompatibilitySpec {
    pub const REVISION: u32 = 1;

    /// The contract of the full-surface Graph client, release 5.
    pub fn v1(target_surface: impl Into<String>) -> Self {
        Self {
            revision: Self::REVISION,
            target_surface: target_surface.into(),
            usings: vec![
                "System",
                "System.Net.Http",
                "System.Reflection",
                "Microsoft.Graph.Core.Requests",
                "Microsoft.Kiota.Abstractions",
                "Microsoft.Kiota.Abstractions.Authentication",
            ],
            auth_provider_type: "IAuthenticationProvider",
            anonymous_auth_provider: "AnonymousAuthenticationProvider",
            transport_client_type: "HttpClient",
            request_adapter_type: "BaseGraphRequestAdapter",
            client_options_type: "GraphClientOptions",
            client_factory_type: "GraphClientFactory",
            version_components: 3,
            disposal: Disposal::AdapterIfCapable {
                capability: "IDisposable",
            },
        }
    }

    /// Interfaces the shim adds to the root client's declaration.
    pub fn implemented_interfaces(&self) -> Vec<&'static str> {
        match &self.disposal {
            Disposal::AdapterIfCapable { capability } => vec![*capability],
            Disposal::None => Vec::new(),
        }
    }

    /// C# expression formatting the runtime assembly version.
    pub fn version_expression(&self, field: &str) -> String {
        let parts = ["Major", "Minor", "Build", "Revision"];
        let count = usize::from(self.version_components.clamp(1, 4));
        let pieces: Vec<String> = parts[..count]
            .iter()
            .map(|part| format!("{{{}.{}}}", field, part))
            .collect();
        format!("$\"{}\"", pieces.join("."))
    }
}
