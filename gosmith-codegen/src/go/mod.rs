//! Go code generation modules.

pub mod accessors;
pub mod ast;
pub mod constructors;
pub mod docs;
pub mod imports;
pub mod naming;
pub mod printer;

pub use accessors::AccessorGenerator;
pub use ast::{Decl, Expr, FuncDecl, GoFile, ImportDecl, ImportSpec, Param, Receiver, Stmt};
pub use constructors::ConstructorGenerator;
pub use imports::ImportGenerator;
pub use printer::render;
