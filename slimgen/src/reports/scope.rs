//! Scope command report data structures.

use super::output::{Output, Report};

#[derive(Debug)]
pub struct ScopeReport {
    pub source: String,
    pub patterns: Vec<String>,
    /// `None` when the document was not read.
    pub resolved: Option<ResolvedScope>,
}

#[derive(Debug)]
pub struct ResolvedScope {
    /// Kept operations, one display line each.
    pub operations: Vec<String>,
    pub total: usize,
    /// Patterns that matched nothing.
    pub unmatched: Vec<String>,
}

impl Report for ScopeReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Specification", &self.source);
        out.section("Allowlist");
        for pattern in &self.patterns {
            out.list_item(pattern);
        }
        out.newline();

        let Some(resolved) = &self.resolved else {
            out.warning("specification is remote; pass --fetch-spec to resolve the scope");
            return;
        };

        for pattern in &resolved.unmatched {
            out.warning(&format!("'{}' matches no operation", pattern));
        }

        out.section(&format!(
            "Operations ({} of {})",
            resolved.operations.len(),
            resolved.total
        ));
        for op in &resolved.operations {
            out.preformatted(&format!("  {}", op));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::Recorded;

    #[test]
    fn test_render_unresolved() {
        let report = ScopeReport {
            source: "https://example.com/openapi.yaml".to_string(),
            patterns: vec!["/me/**".to_string()],
            resolved: None,
        };

        let mut out = Recorded::default();
        report.render(&mut out);

        assert_eq!(out.lines[0], "Specification: https://example.com/openapi.yaml");
        assert_eq!(out.warnings.len(), 1);
        assert!(!out.text().contains("Operations"));
    }

    #[test]
    fn test_render_resolved() {
        let report = ScopeReport {
            source: "api.yaml".to_string(),
            patterns: vec!["/me/**".to_string(), "/sites/*".to_string()],
            resolved: Some(ResolvedScope {
                operations: vec!["GET     /me".to_string()],
                total: 9,
                unmatched: vec!["/sites/*".to_string()],
            }),
        };

        let mut out = Recorded::default();
        report.render(&mut out);

        assert!(out.text().contains("Operations (1 of 9):\n  GET     /me"));
        assert_eq!(out.warnings, vec!["'/sites/*' matches no operation".to_string()]);
    }
}
