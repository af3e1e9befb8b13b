//! Pipeline controller for a generation run.
//!
//! A run is a linear state machine:
//!
//! ```text
//! Init -> ResolveScope -> CleanIfRequested -> EnsureOutputDir -> Generate
//!      -> SynthesizeDescriptor -> SynthesizeShim -> BuildIfRequested -> Done
//! ```
//!
//! Any stage failure moves the run to [`State::Failed`] and stops it. Plugins
//! receive hooks before and after each stage and when a stage fails.
//!
//! # Example
//!
//! ```ignore
//! use slimgen_codegen::pipeline::{Pipeline, RunContext, RunOptions};
//! use slimgen_core::SystemTools;
//!
//! let mut ctx = RunContext::from_manifest(manifest, None, RunOptions::default());
//! Pipeline::new().run(&mut ctx, &SystemTools)?;
//! assert_eq!(ctx.state, State::Done);
//! ```

mod context;
mod plugin;
mod runner;
mod stage;
pub mod stages;
mod state;

pub use context::{RunContext, RunOptions};
pub use plugin::Plugin;
pub use runner::Pipeline;
pub use stage::{Outcome, Stage};
pub use state::State;
