//! Getter and setter generation.

use crate::config::SetterStyle;
use crate::go::ast::{Decl, Expr, FuncDecl, Param, Receiver, Stmt};
use crate::go::{docs, naming};
use gosmith_schema::{Field, Record};

/// Generator for a record's accessor methods.
pub struct AccessorGenerator<'a> {
    record: &'a Record,
    setter_style: SetterStyle,
}

impl<'a> AccessorGenerator<'a> {
    /// Creates a new accessor generator.
    #[must_use]
    pub const fn new(record: &'a Record, setter_style: SetterStyle) -> Self {
        Self {
            record,
            setter_style,
        }
    }

    /// Generates getters and setters in field order.
    ///
    /// For each field the getter precedes the setter.
    #[must_use]
    pub fn generate(&self) -> Vec<Decl> {
        let receiver = naming::receiver_name(&self.record.name);
        if receiver.is_empty() || !self.record.has_accessors() {
            return Vec::new();
        }

        let mut decls = Vec::with_capacity(self.record.fields.len() * 2);
        for field in &self.record.fields {
            if field.get {
                decls.extend(self.getter(&receiver, field).map(Decl::Func));
            }
            if field.set {
                decls.extend(self.setter(&receiver, field).map(Decl::Func));
            }
        }
        decls
    }

    /// Generates a getter returning the stored value.
    fn getter(&self, receiver: &str, field: &Field) -> Option<FuncDecl> {
        let name = naming::getter_name(&field.name);
        if name.is_empty() {
            return None;
        }

        Some(FuncDecl {
            doc: docs::accessor_doc(&field.doc_lines, &name, &field.name),
            receiver: Some(self.receiver(receiver, false)),
            name,
            params: Vec::new(),
            results: vec![field.type_expr.clone()],
            body: vec![Stmt::Return(Expr::selector(receiver, &field.name))],
        })
    }

    /// Generates a setter in the configured style.
    fn setter(&self, receiver: &str, field: &Field) -> Option<FuncDecl> {
        let name = naming::setter_name(&field.name);
        if name.is_empty() {
            return None;
        }
        let doc = docs::accessor_doc(&field.doc_lines, &name, &field.name);

        let func = match self.setter_style {
            // Same body as the getter: nothing is assigned.
            SetterStyle::Echo => FuncDecl {
                doc,
                receiver: Some(self.receiver(receiver, false)),
                name,
                params: Vec::new(),
                results: vec![field.type_expr.clone()],
                body: vec![Stmt::Return(Expr::selector(receiver, &field.name))],
            },
            SetterStyle::Assign => {
                let param = naming::param_name(&field.name);
                FuncDecl {
                    doc,
                    receiver: Some(self.receiver(receiver, true)),
                    name,
                    params: vec![Param {
                        name: param.clone(),
                        type_expr: field.type_expr.clone(),
                    }],
                    results: Vec::new(),
                    body: vec![Stmt::Assign {
                        target: Expr::selector(receiver, &field.name),
                        value: Expr::ident(param),
                    }],
                }
            }
        };
        Some(func)
    }

    fn receiver(&self, name: &str, pointer: bool) -> Receiver {
        Receiver {
            name: name.to_string(),
            type_name: self.record.name.clone(),
            pointer,
        }
    }
}
