//! Import declaration generation.

use crate::go::ast::{Decl, ImportDecl, ImportSpec};
use std::collections::BTreeMap;

/// Generator for the combined import declaration.
pub struct ImportGenerator<'a> {
    imports: &'a BTreeMap<String, String>,
}

impl<'a> ImportGenerator<'a> {
    /// Creates a new import generator.
    #[must_use]
    pub const fn new(imports: &'a BTreeMap<String, String>) -> Self {
        Self { imports }
    }

    /// Generates one declaration holding every import, or nothing.
    #[must_use]
    pub fn generate(&self) -> Option<Decl> {
        if self.imports.is_empty() {
            return None;
        }

        let specs = self
            .imports
            .iter()
            .map(|(path, alias)| ImportSpec {
                alias: (!alias.is_empty()).then(|| alias.clone()),
                path: path.clone(),
            })
            .collect();

        Some(Decl::Import(ImportDecl { specs }))
    }
}
