//! Built-in configuration used when no slimgen.toml is given.
//!
//! These describe the reference scoped client: a Microsoft Graph v1.0 client
//! reduced to the signed-in user and user directory endpoints.

pub const SPEC_URL: &str =
    "https://raw.githubusercontent.com/microsoftgraph/msgraph-metadata/master/openapi/v1.0/openapi.yaml";

pub const INCLUDE_PATHS: &[&str] = &["/me/**", "/users/**"];

pub const OUTPUT_DIR: &str = "generated";

pub const CLASS_NAME: &str = "GraphServiceClient";

pub const NAMESPACE: &str = "Microsoft.Graph";

pub const PACKAGE_ID: &str = "Microsoft.Graph.Slim";

pub const PACKAGE_VERSION: &str = "1.0.0";

pub const TARGET_FRAMEWORK: &str = "netstandard2.0";

/// Release channel tag reported to the transport layer.
pub const TARGET_SURFACE: &str = "v1.0";

/// Support libraries imported by the generated C# sources.
///
/// Must stay in sync with the generator's emitted `using` set.
pub const DEPENDENCIES: &[(&str, &str)] = &[
    ("Microsoft.Graph.Core", "[3.2.0, 4.0.0)"),
    ("Microsoft.Kiota.Abstractions", "[1.14.0, 2.0.0)"),
    ("Microsoft.Kiota.Http.HttpClientLibrary", "[1.14.0, 2.0.0)"),
    ("Microsoft.Kiota.Serialization.Form", "[1.14.0, 2.0.0)"),
    ("Microsoft.Kiota.Serialization.Json", "[1.14.0, 2.0.0)"),
    ("Microsoft.Kiota.Serialization.Multipart", "[1.14.0, 2.0.0)"),
    ("Microsoft.Kiota.Serialization.Text", "[1.14.0, 2.0.0)"),
];
