//! # gosmith
//!
//! Generates constructors, getters and setters for Go structs.
//!
//! gosmith reads a Go source file, decides per field whether it needs a
//! constructor parameter, a getter or a setter, and writes a companion file
//! with those declarations. Field comments are carried over to the generated
//! accessors.
//!
//! ## Modes
//!
//! - **Default** - every lowercase (unexported) field gets a constructor
//!   parameter and a getter
//! - **Directive** - only fields tagged `gosmith:"init,get,set"` (any subset)
//!   get declarations
//!
//! ## Quick Start
//!
//! ```ignore
//! use gosmith::prelude::*;
//!
//! let pipeline = Pipeline::new().introspect_config(IntrospectConfig::new().directives(true));
//! pipeline.run("model.go", "model_gen.go")?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Go source introspection and the record model
//! - [`codegen`] - Declaration synthesis and rendering

pub mod error;
pub mod format;
pub mod pipeline;
pub mod prelude;

/// Go source introspection and the record model.
pub mod schema {
    pub use gosmith_schema::*;
}

/// Declaration synthesis and rendering.
pub mod codegen {
    pub use gosmith_codegen::*;
}

pub use error::Error;
pub use format::PostFormat;
pub use pipeline::Pipeline;

// Re-export commonly used items at the crate root
pub use gosmith_codegen::{SetterStyle, SynthConfig, Synthesizer, WriteError};
pub use gosmith_schema::{IntrospectConfig, Introspector, Mode, Model, ParseError};

use std::path::Path;

/// Generates the companion file for a Go source file with default settings.
///
/// # Arguments
/// * `src` - Go source file to introspect
/// * `dst` - Destination path, overwritten
///
/// # Returns
/// The introspected model.
///
/// # Errors
/// Returns `Error` if reading, parsing or writing fails.
pub fn generate_file(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> Result<Model, Error> {
    Pipeline::new().run(src, dst)
}

/// Generates companion source for Go source text with default settings.
///
/// # Arguments
/// * `source` - Go source content
///
/// # Returns
/// Generated Go code as a string.
///
/// # Errors
/// Returns `Error` if parsing or rendering fails.
pub fn generate_from_source(source: &str) -> Result<String, Error> {
    Pipeline::new().generate_source(source, "<source>")
}
