use slimgen_core::ToolRunner;

use crate::{
    EffectiveScope, Error, Result, SpecDocument,
    pipeline::{Outcome, RunContext, Stage, State},
    scope::describe_patterns,
};

/// Checks the allowlist against the specification before anything is
/// written, so an allowlist that matches nothing fails early.
pub struct ResolveScopeStage;

impl Stage for ResolveScopeStage {
    fn state(&self) -> State {
        State::ResolveScope
    }

    fn description(&self) -> &'static str {
        "Resolve the operations kept by the allowlist"
    }

    fn run(&self, ctx: &mut RunContext, _tools: &dyn ToolRunner) -> Result<Outcome> {
        let spec = &ctx.manifest.spec;
        let Some(document) = SpecDocument::load(&spec.source, ctx.options.fetch_spec)? else {
            return Ok(Outcome::skipped(
                "specification is remote; pass --fetch-spec to check the scope before generating",
            ));
        };

        let scope = EffectiveScope::resolve(&spec.include, document.operations());
        for pattern in scope.unmatched(&spec.include) {
            tracing::warn!(pattern = %pattern, "include pattern matches no operation");
        }

        if scope.is_empty() {
            return Err(Box::new(Error::EmptyScope {
                patterns: describe_patterns(&spec.include),
            }));
        }

        tracing::info!(kept = scope.len(), total = scope.total(), "resolved scope");
        ctx.scope = Some(scope);
        Ok(Outcome::Completed)
    }
}
