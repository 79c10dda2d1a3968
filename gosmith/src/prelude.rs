//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! ```ignore
//! use gosmith::prelude::*;
//! ```

// Introspection
pub use gosmith_schema::{
    Diagnostic, DiagnosticKind, Field, IntrospectConfig, Introspection, Introspector, Mode, Model,
    ParseError, Record, Visibility,
};

// Synthesis
pub use gosmith_codegen::{SetterStyle, SynthConfig, Synthesizer, WriteError};

// Pipeline
pub use crate::{Error, Pipeline, PostFormat};
