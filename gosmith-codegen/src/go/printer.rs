//! Source text rendering.
//!
//! Output uses gofmt layout (tab indentation, one blank line between
//! top-level declarations) but is not guaranteed to be canonical; running
//! `gofmt` over it afterwards is expected to be a no-op or close to one.

use crate::error::WriteError;
use crate::go::ast::{Decl, Expr, FuncDecl, GoFile, ImportDecl, ImportSpec, Stmt};
use crate::go::naming::is_identifier;
use std::collections::HashSet;

/// Renders a file to Go source text.
///
/// # Errors
/// Returns `WriteError::Render` if a name in the tree is not a valid Go
/// identifier, a type is empty, a doc line is not a comment, or a function
/// declares the same parameter twice.
pub fn render(file: &GoFile) -> Result<String, WriteError> {
    let mut output = String::new();

    output.push_str(&format!("package {}\n", ident(&file.package)?));
    for decl in &file.decls {
        output.push('\n');
        match decl {
            Decl::Import(import) => render_import(&mut output, import)?,
            Decl::Func(func) => render_func(&mut output, func)?,
        }
    }

    Ok(output)
}

fn render_import(output: &mut String, decl: &ImportDecl) -> Result<(), WriteError> {
    match decl.specs.as_slice() {
        [] => return Err(WriteError::render("import declaration without specs")),
        [spec] => {
            output.push_str(&format!("import {}\n", import_spec(spec)?));
        }
        specs => {
            output.push_str("import (\n");
            for spec in specs {
                output.push_str(&format!("\t{}\n", import_spec(spec)?));
            }
            output.push_str(")\n");
        }
    }
    Ok(())
}

fn import_spec(spec: &ImportSpec) -> Result<String, WriteError> {
    if spec.path.is_empty() {
        return Err(WriteError::render("empty import path"));
    }
    let path = quote(&spec.path);
    match spec.alias.as_deref() {
        None => Ok(path),
        Some(alias @ ("." | "_")) => Ok(format!("{alias} {path}")),
        Some(alias) => Ok(format!("{} {path}", ident(alias)?)),
    }
}

fn render_func(output: &mut String, func: &FuncDecl) -> Result<(), WriteError> {
    for line in &func.doc {
        if !(line.starts_with("//") || line.starts_with("/*")) {
            return Err(WriteError::render(format!(
                "doc line of {} is not a comment: {line:?}",
                func.name
            )));
        }
        output.push_str(line);
        output.push('\n');
    }

    output.push_str("func ");
    if let Some(recv) = &func.receiver {
        let star = if recv.pointer { "*" } else { "" };
        output.push_str(&format!(
            "({} {star}{}) ",
            ident(&recv.name)?,
            ident(&recv.type_name)?
        ));
    }
    output.push_str(ident(&func.name)?);

    let mut seen = HashSet::with_capacity(func.params.len());
    if let Some(dup) = func.params.iter().find(|p| !seen.insert(p.name.as_str())) {
        return Err(WriteError::render(format!(
            "duplicate parameter {} in {}",
            dup.name, func.name
        )));
    }

    let params = func
        .params
        .iter()
        .map(|p| Ok(format!("{} {}", ident(&p.name)?, type_expr(&p.type_expr)?)))
        .collect::<Result<Vec<_>, WriteError>>()?;
    output.push_str(&format!("({})", params.join(", ")));

    let results = func
        .results
        .iter()
        .map(String::as_str)
        .map(type_expr)
        .collect::<Result<Vec<_>, WriteError>>()?;
    match results.as_slice() {
        [] => {}
        [single] => output.push_str(&format!(" {single}")),
        many => output.push_str(&format!(" ({})", many.join(", "))),
    }

    output.push_str(" {\n");
    for stmt in &func.body {
        output.push_str(&format!("\t{}\n", statement(stmt)?));
    }
    output.push_str("}\n");

    Ok(())
}

fn statement(stmt: &Stmt) -> Result<String, WriteError> {
    match stmt {
        Stmt::Return(expr) => Ok(format!("return {}", expression(expr)?)),
        Stmt::Assign { target, value } => {
            Ok(format!("{} = {}", expression(target)?, expression(value)?))
        }
    }
}

fn expression(expr: &Expr) -> Result<String, WriteError> {
    match expr {
        Expr::Ident(name) => Ok(ident(name)?.to_string()),
        Expr::Selector { base, field } => Ok(format!("{}.{}", ident(base)?, ident(field)?)),
        Expr::Composite {
            type_name,
            elements,
        } => {
            let elements = elements
                .iter()
                .map(|(key, value)| Ok(format!("{}: {}", ident(key)?, expression(value)?)))
                .collect::<Result<Vec<_>, WriteError>>()?;
            Ok(format!("{}{{{}}}", ident(type_name)?, elements.join(", ")))
        }
    }
}

fn ident(name: &str) -> Result<&str, WriteError> {
    if is_identifier(name) {
        Ok(name)
    } else {
        Err(WriteError::render(format!("invalid identifier {name:?}")))
    }
}

fn type_expr(ty: &str) -> Result<&str, WriteError> {
    if ty.trim().is_empty() {
        Err(WriteError::render("empty type expression"))
    } else {
        Ok(ty)
    }
}

/// Quotes a string as a Go interpreted string literal.
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", u32::from(c))),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::go::ast::{Param, Receiver};

    fn getter() -> FuncDecl {
        FuncDecl {
            doc: vec!["// Name".to_string()],
            receiver: Some(Receiver {
                name: "w".to_string(),
                type_name: "Widget".to_string(),
                pointer: false,
            }),
            name: "Name".to_string(),
            params: Vec::new(),
            results: vec!["string".to_string()],
            body: vec![Stmt::Return(Expr::selector("w", "name"))],
        }
    }

    #[test]
    fn test_render_package_only() {
        let file = GoFile::new("test");
        assert_eq!(render(&file).expect("Failed to render"), "package test\n");
    }

    #[test]
    fn test_render_single_import() {
        let mut file = GoFile::new("test");
        file.decls.push(Decl::Import(ImportDecl {
            specs: vec![ImportSpec {
                alias: None,
                path: "os".to_string(),
            }],
        }));
        assert_eq!(
            render(&file).expect("Failed to render"),
            "package test\n\nimport \"os\"\n"
        );
    }

    #[test]
    fn test_render_import_block() {
        let mut file = GoFile::new("test");
        file.decls.push(Decl::Import(ImportDecl {
            specs: vec![
                ImportSpec {
                    alias: Some("_".to_string()),
                    path: "embed".to_string(),
                },
                ImportSpec {
                    alias: Some("str".to_string()),
                    path: "strings".to_string(),
                },
            ],
        }));
        assert_eq!(
            render(&file).expect("Failed to render"),
            "package test\n\nimport (\n\t_ \"embed\"\n\tstr \"strings\"\n)\n"
        );
    }

    #[test]
    fn test_render_method() {
        let mut file = GoFile::new("widgets");
        file.decls.push(Decl::Func(getter()));
        assert_eq!(
            render(&file).expect("Failed to render"),
            "package widgets\n\n// Name\nfunc (w Widget) Name() string {\n\treturn w.name\n}\n"
        );
    }

    #[test]
    fn test_render_constructor_and_assign() {
        let ctor = FuncDecl {
            doc: vec!["// NewWidget is constructor for Widget".to_string()],
            receiver: None,
            name: "NewWidget".to_string(),
            params: vec![
                Param {
                    name: "mName".to_string(),
                    type_expr: "string".to_string(),
                },
                Param {
                    name: "mSize".to_string(),
                    type_expr: "int".to_string(),
                },
            ],
            results: vec!["Widget".to_string()],
            body: vec![Stmt::Return(Expr::Composite {
                type_name: "Widget".to_string(),
                elements: vec![
                    ("name".to_string(), Expr::ident("mName")),
                    ("size".to_string(), Expr::ident("mSize")),
                ],
            })],
        };
        let setter = FuncDecl {
            doc: vec!["// SetName".to_string()],
            receiver: Some(Receiver {
                name: "w".to_string(),
                type_name: "Widget".to_string(),
                pointer: true,
            }),
            name: "SetName".to_string(),
            params: vec![Param {
                name: "mName".to_string(),
                type_expr: "string".to_string(),
            }],
            results: Vec::new(),
            body: vec![Stmt::Assign {
                target: Expr::selector("w", "name"),
                value: Expr::ident("mName"),
            }],
        };
        let mut file = GoFile::new("widgets");
        file.decls.push(Decl::Func(ctor));
        file.decls.push(Decl::Func(setter));

        let expected = "package widgets\n\
\n\
// NewWidget is constructor for Widget\n\
func NewWidget(mName string, mSize int) Widget {\n\
\treturn Widget{name: mName, size: mSize}\n\
}\n\
\n\
// SetName\n\
func (w *Widget) SetName(mName string) {\n\
\tw.name = mName\n\
}\n";
        assert_eq!(render(&file).expect("Failed to render"), expected);
    }

    #[test]
    fn test_render_rejects_bad_identifier() {
        let mut func = getter();
        func.body = vec![Stmt::Return(Expr::selector("w", "bad name"))];
        let mut file = GoFile::new("widgets");
        file.decls.push(Decl::Func(func));

        let err = render(&file).unwrap_err();
        assert!(matches!(err, WriteError::Render { .. }));
        assert!(err.to_string().contains("bad name"));
    }

    #[test]
    fn test_render_rejects_non_comment_doc() {
        let mut func = getter();
        func.doc = vec!["not a comment".to_string()];
        let mut file = GoFile::new("widgets");
        file.decls.push(Decl::Func(func));
        assert!(matches!(render(&file), Err(WriteError::Render { .. })));
    }

    #[test]
    fn test_render_rejects_empty_type() {
        let mut func = getter();
        func.results = vec![String::new()];
        let mut file = GoFile::new("widgets");
        file.decls.push(Decl::Func(func));
        assert!(matches!(render(&file), Err(WriteError::Render { .. })));
    }

    #[test]
    fn test_render_rejects_duplicate_params() {
        let param = Param {
            name: "mA".to_string(),
            type_expr: "int".to_string(),
        };
        let ctor = FuncDecl {
            doc: Vec::new(),
            receiver: None,
            name: "NewT".to_string(),
            params: vec![param.clone(), param],
            results: vec!["T".to_string()],
            body: Vec::new(),
        };
        let mut file = GoFile::new("p");
        file.decls.push(Decl::Func(ctor));

        let err = render(&file).unwrap_err();
        assert_eq!(
            err.to_string(),
            "render error: duplicate parameter mA in NewT"
        );
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote("os"), "\"os\"");
        assert_eq!(quote("a\"b\\c"), "\"a\\\"b\\\\c\"");
        assert_eq!(quote("é"), "\"é\"");
    }
}
