//! Core operations.
//!
//! This module contains the business logic for slimgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod generate;
pub mod info;
pub mod scope;

pub use generate::{generate, preview};
pub use info::info;
pub use scope::scope;
