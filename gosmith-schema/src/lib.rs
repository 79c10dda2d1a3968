//! # gosmith Schema
//!
//! Go source introspection and the abstract record model.
//!
//! This crate provides:
//! - Go source parsing via the tree-sitter Go grammar
//! - The record model handed to code generation
//! - Naming-convention visibility and struct-tag directives
//! - Non-fatal diagnostics gathered while introspecting

pub mod config;
pub mod diagnostic;
pub mod error;
pub mod model;
pub mod parser;
pub mod tag;
pub mod visibility;

pub use config::{DEFAULT_DIRECTIVE_KEY, IntrospectConfig, Mode};
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use error::ParseError;
pub use model::{Field, Model, Record};
pub use parser::{Introspection, Introspector, introspect};
pub use tag::Directive;
pub use visibility::Visibility;
