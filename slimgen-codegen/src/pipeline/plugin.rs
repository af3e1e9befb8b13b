//! Pipeline plugin trait.

use super::{RunContext, State};
use crate::{Error, Result};

/// Receives callbacks around each stage of a run.
///
/// # Example
///
/// ```ignore
/// struct TimingPlugin {
///     started: Mutex<Option<Instant>>,
/// }
///
/// impl Plugin for TimingPlugin {
///     fn name(&self) -> &'static str { "timing" }
///
///     fn on_before_stage(&self, _stage: State, _ctx: &mut RunContext) -> Result<()> {
///         *self.started.lock().unwrap() = Some(Instant::now());
///         Ok(())
///     }
///
///     fn on_after_stage(&self, stage: State, _ctx: &mut RunContext) -> Result<()> {
///         if let Some(start) = *self.started.lock().unwrap() {
///             eprintln!("{} took {:?}", stage, start.elapsed());
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Plugin: Send + Sync {
    /// The name of this plugin (for logging).
    fn name(&self) -> &'static str;

    /// Called before a stage runs. Return an error to fail the run.
    #[allow(unused_variables)]
    fn on_before_stage(&self, stage: State, ctx: &mut RunContext) -> Result<()> {
        Ok(())
    }

    /// Called after a stage completes or skips. Return an error to fail the run.
    #[allow(unused_variables)]
    fn on_after_stage(&self, stage: State, ctx: &mut RunContext) -> Result<()> {
        Ok(())
    }

    /// Called once when `stage` fails, before the error is returned.
    #[allow(unused_variables)]
    fn on_failed(&self, stage: State, error: &Error, ctx: &RunContext) {}
}
