//! Constructor generation.

use crate::go::ast::{Decl, Expr, FuncDecl, Param, Stmt};
use crate::go::{docs, naming};
use gosmith_schema::Record;

/// Generator for a record's constructor.
pub struct ConstructorGenerator<'a> {
    record: &'a Record,
}

impl<'a> ConstructorGenerator<'a> {
    /// Creates a new constructor generator.
    #[must_use]
    pub const fn new(record: &'a Record) -> Self {
        Self { record }
    }

    /// Generates `New<Record>`, or nothing if the record has no name.
    ///
    /// Parameters follow the field order of the `init` fields; every other
    /// field is left at its zero value.
    #[must_use]
    pub fn generate(&self) -> Option<Decl> {
        let name = naming::constructor_name(&self.record.name);
        if name.is_empty() {
            return None;
        }

        let mut params = Vec::new();
        let mut elements = Vec::new();
        for field in self.record.init_fields() {
            let param = naming::param_name(&field.name);
            elements.push((field.name.clone(), Expr::ident(&param)));
            params.push(Param {
                name: param,
                type_expr: field.type_expr.clone(),
            });
        }

        Some(Decl::Func(FuncDecl {
            doc: docs::constructor_doc(&name, &self.record.name),
            receiver: None,
            name,
            params,
            results: vec![self.record.name.clone()],
            body: vec![Stmt::Return(Expr::Composite {
                type_name: self.record.name.clone(),
                elements,
            })],
        }))
    }
}
