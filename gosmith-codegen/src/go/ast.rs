//! Output declaration tree.
//!
//! Each declaration is a self-contained value; generators build them from the
//! model and the printer turns the finished list into source text.

/// A generated Go file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoFile {
    /// Package name.
    pub package: String,
    /// Top-level declarations in output order.
    pub decls: Vec<Decl>,
}

impl GoFile {
    /// Creates a file with no declarations.
    #[must_use]
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            decls: Vec::new(),
        }
    }

    /// Iterates over the function declarations.
    pub fn funcs(&self) -> impl Iterator<Item = &FuncDecl> {
        self.decls.iter().filter_map(|d| match d {
            Decl::Func(f) => Some(f),
            Decl::Import(_) => None,
        })
    }
}

/// Top-level declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decl {
    /// Import declaration.
    Import(ImportDecl),
    /// Function or method declaration.
    Func(FuncDecl),
}

/// Import declaration with one or more specs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDecl {
    /// Import specs.
    pub specs: Vec<ImportSpec>,
}

/// Single imported package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpec {
    /// Local name, if any.
    pub alias: Option<String>,
    /// Unquoted import path.
    pub path: String,
}

/// Function or method declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDecl {
    /// Doc comment lines, comment markers included.
    pub doc: Vec<String>,
    /// Method receiver, `None` for plain functions.
    pub receiver: Option<Receiver>,
    /// Function name.
    pub name: String,
    /// Parameters.
    pub params: Vec<Param>,
    /// Result types.
    pub results: Vec<String>,
    /// Body statements.
    pub body: Vec<Stmt>,
}

/// Method receiver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receiver {
    /// Receiver variable.
    pub name: String,
    /// Receiver type name.
    pub type_name: String,
    /// Pointer receiver.
    pub pointer: bool,
}

/// Named parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// Parameter name.
    pub name: String,
    /// Parameter type, opaque.
    pub type_expr: String,
}

/// Statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// `return expr`
    Return(Expr),
    /// `target = value`
    Assign {
        /// Left-hand side.
        target: Expr,
        /// Right-hand side.
        value: Expr,
    },
}

/// Expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Plain identifier.
    Ident(String),
    /// `base.field`
    Selector {
        /// Operand identifier.
        base: String,
        /// Selected field.
        field: String,
    },
    /// `Type{key: value, ...}`
    Composite {
        /// Literal type name.
        type_name: String,
        /// Keyed elements in order.
        elements: Vec<(String, Expr)>,
    },
}

impl Expr {
    /// Creates an identifier expression.
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Ident(name.into())
    }

    /// Creates a selector expression.
    pub fn selector(base: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Selector {
            base: base.into(),
            field: field.into(),
        }
    }
}
