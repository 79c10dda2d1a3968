//! # gosmith Codegen
//!
//! Constructor, getter and setter synthesis from an introspected model.
//!
//! This crate provides:
//! - An output declaration tree built per record
//! - Doc comment rewriting for generated accessors
//! - Rendering to Go source text
//! - Writing the companion file

pub mod config;
pub mod error;
pub mod generator;
pub mod go;

pub use config::{SetterStyle, SynthConfig};
pub use error::WriteError;
pub use generator::Synthesizer;

use gosmith_schema::Model;
use std::path::Path;

/// Generates Go source text for a model with default settings.
///
/// # Errors
/// Returns `WriteError::Render` if the model produces an invalid tree.
pub fn generate_source(model: &Model) -> Result<String, WriteError> {
    Synthesizer::default().generate(model)
}

/// Writes the companion file for a model.
///
/// # Arguments
/// * `model` - Introspected model
/// * `dest` - Destination path, overwritten
/// * `config` - Synthesis settings
///
/// # Errors
/// Returns `WriteError` if rendering or writing fails.
pub fn synthesize(
    model: &Model,
    dest: impl AsRef<Path>,
    config: &SynthConfig,
) -> Result<(), WriteError> {
    Synthesizer::new(*config).synthesize(model, dest)
}
