//! Info command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Effective configuration of a run.
#[derive(Debug)]
pub struct InfoReport {
    /// Config file that was read; `None` for built-in settings.
    pub config_path: Option<PathBuf>,
    pub source: String,
    pub include: Vec<String>,
    pub language: &'static str,
    pub class_name: String,
    pub namespace: String,
    pub output: PathBuf,
    pub backing_store: bool,
    pub exclude_backward_compatible: bool,
    pub package_id: String,
    pub version: String,
    pub target_framework: String,
    pub assembly_name: String,
    pub dependencies: Vec<(String, String)>,
    pub surface: String,
    pub compat_revision: u32,
}

impl Report for InfoReport {
    fn render(&self, out: &mut dyn Output) {
        out.newline();

        let config = self
            .config_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(built-in defaults)".to_string());
        out.preformatted(&format!("  Config      {}", config));
        out.preformatted(&format!("  Spec        {}", self.source));
        out.newline();

        out.preformatted("  Allowlist");
        out.preformatted("  ─────────");
        for pattern in &self.include {
            out.preformatted(&format!("  {}", pattern));
        }
        out.newline();

        out.preformatted("  Client");
        out.preformatted("  ──────");
        out.preformatted(&format!("  Type        {}.{}", self.namespace, self.class_name));
        out.preformatted(&format!("  Language    {}", self.language));
        out.preformatted(&format!("  Output      {}", self.output.display()));
        let mut flags = Vec::new();
        if self.backing_store {
            flags.push("backing-store");
        }
        if self.exclude_backward_compatible {
            flags.push("exclude-backward-compatible");
        }
        if !flags.is_empty() {
            out.preformatted(&format!("  Flags       {}", flags.join(", ")));
        }
        out.newline();

        out.preformatted("  Package");
        out.preformatted("  ───────");
        out.preformatted(&format!("  Id          {} {}", self.package_id, self.version));
        out.preformatted(&format!("  Framework   {}", self.target_framework));
        out.preformatted(&format!("  Assembly    {}", self.assembly_name));
        for (name, version) in &self.dependencies {
            out.preformatted(&format!("              └─ {} {}", name, version));
        }
        out.newline();

        out.preformatted(&format!(
            "  Compat      surface {} (contract r{})",
            self.surface, self.compat_revision
        ));
    }
}

#[cfg(test)]
mod tests {
    use slimgen_manifest::Manifest;

    use super::*;
    use crate::{ops, reports::Recorded};

    #[test]
    fn test_render_defaults() {
        let report = ops::info(&Manifest::default(), None);
        let mut out = Recorded::default();
        report.render(&mut out);
        let text = out.text();

        assert!(text.contains("  Config      (built-in defaults)"));
        assert!(text.contains("  Type        Microsoft.Graph.GraphServiceClient"));
        assert!(text.contains("  Flags       backing-store, exclude-backward-compatible"));
        assert!(text.contains("              └─ Microsoft.Graph.Core [3.2.0, 4.0.0)"));
        assert!(text.contains("  Compat      surface v1.0 (contract r1)"));
    }
}
