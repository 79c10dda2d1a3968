//! Go source introspection.
//!
//! This module parses Go source with the tree-sitter Go grammar and walks the
//! resulting tree into a [`Model`]: the package name, the import table, and
//! every top-level struct with the generation flags of its fields.

use crate::config::{IntrospectConfig, Mode};
use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::error::ParseError;
use crate::model::{Field, Model, Record};
use crate::tag::{self, Directive};
use crate::visibility::Visibility;
use std::path::Path;
use tree_sitter::{Language, Node, Parser, Tree};

/// Result of introspecting one source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Introspection {
    /// The assembled model.
    pub model: Model,
    /// Non-fatal diagnostics, in the order they were found.
    pub diagnostics: Vec<Diagnostic>,
}

/// Parses Go source into a [`Model`].
#[derive(Debug, Clone, Default)]
pub struct Introspector {
    config: IntrospectConfig,
}

impl Introspector {
    /// Creates an introspector with the given configuration.
    #[must_use]
    pub const fn new(config: IntrospectConfig) -> Self {
        Self { config }
    }

    /// Reads and introspects a Go source file.
    ///
    /// Diagnostics are reported through `tracing` and then dropped; use
    /// [`Introspector::introspect_source`] to inspect them.
    ///
    /// # Errors
    /// Returns `ParseError::Io` if the file cannot be read and
    /// `ParseError::Syntax` if it is not valid Go.
    pub fn introspect(&self, path: impl AsRef<Path>) -> Result<Model, ParseError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| ParseError::io(path, e))?;
        let introspection = self.introspect_source(&source, &path.display().to_string())?;
        for diagnostic in &introspection.diagnostics {
            tracing::warn!("{}", diagnostic);
        }
        Ok(introspection.model)
    }

    /// Introspects Go source held in memory.
    ///
    /// `origin` names the source in syntax error messages.
    ///
    /// # Errors
    /// Returns `ParseError::Syntax` if the source is not valid Go.
    pub fn introspect_source(
        &self,
        source: &str,
        origin: &str,
    ) -> Result<Introspection, ParseError> {
        let tree = parse_tree(source, origin)?;
        let root = tree.root_node();
        check_syntax(root, source, origin)?;

        let mut walker = Walker {
            src: source,
            config: &self.config,
            diagnostics: Vec::new(),
        };
        let model = walker.file(root, origin)?;

        Ok(Introspection {
            model,
            diagnostics: walker.diagnostics,
        })
    }
}

/// Introspects a Go source file with the given configuration.
///
/// # Errors
/// See [`Introspector::introspect`].
pub fn introspect(path: impl AsRef<Path>, config: &IntrospectConfig) -> Result<Model, ParseError> {
    Introspector::new(config.clone()).introspect(path)
}

fn parse_tree(source: &str, origin: &str) -> Result<Tree, ParseError> {
    let language: Language = tree_sitter_go::LANGUAGE.into();
    let mut parser = Parser::new();
    parser.set_language(&language)?;
    parser
        .parse(source, None)
        .ok_or_else(|| ParseError::syntax(origin, 1, 1, "parser produced no syntax tree"))
}

/// Fails with the location of the first ERROR or MISSING node, if any.
fn check_syntax(root: Node<'_>, src: &str, origin: &str) -> Result<(), ParseError> {
    let Some(bad) = first_error(root) else {
        return Ok(());
    };
    let pos = bad.start_position();
    let message = if bad.is_missing() {
        format!("syntax error: missing {}", bad.kind())
    } else {
        let snippet = text(bad, src).lines().next().unwrap_or_default().trim();
        if snippet.is_empty() {
            "syntax error: unexpected end of input".to_string()
        } else {
            format!("syntax error: unexpected {snippet}")
        }
    };
    Err(ParseError::syntax(origin, pos.row + 1, pos.column + 1, message))
}

fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}

fn text<'s>(node: Node<'_>, src: &'s str) -> &'s str {
    src.get(node.byte_range()).unwrap_or_default()
}

struct Walker<'a> {
    src: &'a str,
    config: &'a IntrospectConfig,
    diagnostics: Vec<Diagnostic>,
}

impl Walker<'_> {
    fn file(&mut self, root: Node<'_>, origin: &str) -> Result<Model, ParseError> {
        let mut model: Option<Model> = None;

        let mut cursor = root.walk();
        for child in root.named_children(&mut cursor) {
            match child.kind() {
                "package_clause" if model.is_none() => {
                    model = Some(Model::new(self.package_name(child)));
                }
                "import_declaration" => {
                    if let Some(model) = model.as_mut() {
                        self.imports(child, model);
                    }
                }
                "type_declaration" => {
                    if let Some(model) = model.as_mut() {
                        for record in self.type_declaration(child) {
                            model.add_record(record);
                        }
                    }
                }
                _ => {}
            }
        }

        model.ok_or_else(|| ParseError::syntax(origin, 1, 1, "expected 'package'"))
    }

    fn package_name(&self, clause: Node<'_>) -> String {
        let mut cursor = clause.walk();
        clause
            .named_children(&mut cursor)
            .find(|n| n.kind() == "package_identifier")
            .map(|n| text(n, self.src).to_string())
            .unwrap_or_default()
    }

    fn imports(&self, decl: Node<'_>, model: &mut Model) {
        let mut cursor = decl.walk();
        for child in decl.named_children(&mut cursor) {
            match child.kind() {
                "import_spec" => self.import_spec(child, model),
                "import_spec_list" => {
                    let mut inner = child.walk();
                    for spec in child.named_children(&mut inner) {
                        if spec.kind() == "import_spec" {
                            self.import_spec(spec, model);
                        }
                    }
                }
                _ => {}
            }
        }
    }

    fn import_spec(&self, spec: Node<'_>, model: &mut Model) {
        let Some(path) = spec.child_by_field_name("path") else {
            return;
        };
        let literal = text(path, self.src);
        let path = tag::unquote(literal).unwrap_or_else(|| trim_delimiters(literal).to_string());
        let alias = spec
            .child_by_field_name("name")
            .map(|n| text(n, self.src).to_string())
            .unwrap_or_default();
        model.add_import(path, alias);
    }

    fn type_declaration(&mut self, decl: Node<'_>) -> Vec<Record> {
        let mut records = Vec::new();
        let mut cursor = decl.walk();
        for spec in decl.named_children(&mut cursor) {
            if spec.kind() != "type_spec" {
                continue;
            }
            let Some(ty) = spec.child_by_field_name("type") else {
                continue;
            };
            if ty.kind() != "struct_type" {
                continue;
            }
            let name = spec
                .child_by_field_name("name")
                .map(|n| text(n, self.src).to_string())
                .unwrap_or_default();
            if spec.child_by_field_name("type_parameters").is_some() {
                self.diagnostics
                    .push(Diagnostic::record(name, DiagnosticKind::GenericRecord));
                continue;
            }

            let record = self.record(name, ty);
            tracing::debug!(
                "introspected record {} ({} fields, {} inert)",
                record.name,
                record.fields.len(),
                record.fields.iter().filter(|f| f.is_inert()).count()
            );
            records.push(record);
        }
        records
    }

    fn record(&mut self, name: String, struct_type: Node<'_>) -> Record {
        let mut record = Record::new(name);

        let mut cursor = struct_type.walk();
        let Some(list) = struct_type
            .named_children(&mut cursor)
            .find(|n| n.kind() == "field_declaration_list")
        else {
            return record;
        };

        // Go attaches a comment group as documentation only when it ends on
        // the line right above the field; comments sharing a line with the
        // previous token are line comments and never documentation.
        let mut group: Vec<Node<'_>> = Vec::new();
        let mut prev_token_row = list.start_position().row;

        let mut cursor = list.walk();
        for child in list.named_children(&mut cursor) {
            match child.kind() {
                "comment" => {
                    let row = child.start_position().row;
                    if group.is_empty() && row == prev_token_row {
                        continue;
                    }
                    if let Some(last) = group.last() {
                        if row > last.end_position().row + 1 {
                            group.clear();
                        }
                    }
                    group.push(child);
                }
                "field_declaration" => {
                    let docs: Vec<String> = match group.last() {
                        Some(last) if last.end_position().row + 1 == child.start_position().row => {
                            group.iter().map(|c| text(*c, self.src).to_string()).collect()
                        }
                        _ => Vec::new(),
                    };
                    group.clear();
                    prev_token_row = child.end_position().row;

                    for field in self.field_declaration(child, &record.name, &docs) {
                        record.add_field(field);
                    }
                }
                _ => {
                    group.clear();
                    prev_token_row = child.end_position().row;
                }
            }
        }

        record
    }

    fn field_declaration(&mut self, decl: Node<'_>, record: &str, docs: &[String]) -> Vec<Field> {
        let type_expr = decl
            .child_by_field_name("type")
            .map(|n| text(n, self.src).to_string())
            .unwrap_or_default();
        let tag = decl
            .child_by_field_name("tag")
            .map(|n| text(n, self.src))
            .map(|t| tag::unquote(t).unwrap_or_else(|| trim_delimiters(t).to_string()));

        let mut cursor = decl.walk();
        let names: Vec<String> = decl
            .children_by_field_name("name", &mut cursor)
            .map(|n| text(n, self.src).to_string())
            .collect();

        let mut fields = Vec::with_capacity(names.len());
        for name in names {
            let visibility = Visibility::of(&name);
            let field = Field::new(name, type_expr.clone()).with_docs(docs.iter().cloned());

            match self.config.get_mode() {
                Mode::Default => {
                    if visibility.is_private() {
                        fields.push(field.with_flags(true, true, false));
                    }
                }
                Mode::Directive => {
                    let directive = tag
                        .as_deref()
                        .map(|t| Directive::from_tag(t, self.config.get_directive_key()))
                        .unwrap_or_default();
                    fields.push(self.apply_directive(field, directive, visibility, record));
                }
            }
        }
        fields
    }

    fn apply_directive(
        &mut self,
        field: Field,
        directive: Directive,
        visibility: Visibility,
        record: &str,
    ) -> Field {
        for word in directive.unknown {
            self.diagnostics.push(Diagnostic::field(
                record,
                &field.name,
                DiagnosticKind::UnknownKeyword(word),
            ));
        }

        let (mut get, mut set) = (directive.get, directive.set);
        if !visibility.is_private() && (get || set) {
            self.diagnostics.push(Diagnostic::field(
                record,
                &field.name,
                DiagnosticKind::ExportedAccessor,
            ));
            get = false;
            set = false;
        }
        field.with_flags(directive.init, get, set)
    }
}

fn trim_delimiters(literal: &str) -> &str {
    let mut chars = literal.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARSE_TEST_SRC: &str = r#"package test

import (
	"os"
)

type StaticImage struct {
	// image file
	// MIME is png or jpeg.
	file     os.File `gosmith:"init"`
	name     string
	Category string `gosmith:"init,get"`
}

type staticHTML struct {
	// html file
	file     os.File `gosmith:"init"`
	name     string  `gosmith:"get,set"`
	Category string  `gosmith:"init"`
}
"#;

    fn introspect_str(src: &str, config: IntrospectConfig) -> Introspection {
        Introspector::new(config)
            .introspect_source(src, "test.go")
            .expect("Failed to introspect")
    }

    #[test]
    fn test_default_mode() {
        let got = introspect_str(PARSE_TEST_SRC, IntrospectConfig::default());

        let mut want = Model::new("test");
        want.add_import("os", "");
        let mut image = Record::new("StaticImage");
        image.add_field(
            Field::new("file", "os.File")
                .with_docs(["// image file", "// MIME is png or jpeg."])
                .with_flags(true, true, false),
        );
        image.add_field(Field::new("name", "string").with_flags(true, true, false));
        want.add_record(image);
        let mut html = Record::new("staticHTML");
        html.add_field(
            Field::new("file", "os.File")
                .with_docs(["// html file"])
                .with_flags(true, true, false),
        );
        html.add_field(Field::new("name", "string").with_flags(true, true, false));
        want.add_record(html);

        assert_eq!(got.model, want);
        assert!(got.diagnostics.is_empty());
    }

    #[test]
    fn test_directive_mode() {
        let got = introspect_str(PARSE_TEST_SRC, IntrospectConfig::new().directives(true));

        let mut want = Model::new("test");
        want.add_import("os", "");
        let mut image = Record::new("StaticImage");
        image.add_field(
            Field::new("file", "os.File")
                .with_docs(["// image file", "// MIME is png or jpeg."])
                .with_flags(true, false, false),
        );
        image.add_field(Field::new("name", "string"));
        image.add_field(Field::new("Category", "string").with_flags(true, false, false));
        want.add_record(image);
        let mut html = Record::new("staticHTML");
        html.add_field(
            Field::new("file", "os.File")
                .with_docs(["// html file"])
                .with_flags(true, false, false),
        );
        html.add_field(Field::new("name", "string").with_flags(false, true, true));
        html.add_field(Field::new("Category", "string").with_flags(true, false, false));
        want.add_record(html);

        assert_eq!(got.model, want);
        assert_eq!(
            got.diagnostics,
            vec![Diagnostic::field(
                "StaticImage",
                "Category",
                DiagnosticKind::ExportedAccessor
            )]
        );
    }

    #[test]
    fn test_directive_key_is_configurable() {
        let src = "package p\n\ntype T struct {\n\ta int `goro:\"init,get\" gosmith:\"set\"`\n}\n";
        let got = introspect_str(src, IntrospectConfig::new().directives(true).directive_key("goro"));
        let field = &got.model.records[0].fields[0];
        assert!(field.init && field.get && !field.set);
    }

    #[test]
    fn test_unknown_keyword_diagnostic() {
        let src = "package p\n\ntype T struct {\n\ta int `gosmith:\"get,sett\"`\n}\n";
        let got = introspect_str(src, IntrospectConfig::new().directives(true));
        assert!(got.model.records[0].fields[0].get);
        assert_eq!(
            got.diagnostics[0].kind,
            DiagnosticKind::UnknownKeyword("sett".to_string())
        );
    }

    #[test]
    fn test_deterministic() {
        let a = introspect_str(PARSE_TEST_SRC, IntrospectConfig::default());
        let b = introspect_str(PARSE_TEST_SRC, IntrospectConfig::default());
        assert_eq!(a, b);
    }

    #[test]
    fn test_imports_with_aliases() {
        let src = r#"package p

import "fmt"

import (
	str "strings"
	_ "embed"
	. "math"
	"os"
)
"#;
        let got = introspect_str(src, IntrospectConfig::default());
        let imports = &got.model.imports;
        assert_eq!(imports.len(), 5);
        assert_eq!(imports["fmt"], "");
        assert_eq!(imports["strings"], "str");
        assert_eq!(imports["embed"], "_");
        assert_eq!(imports["math"], ".");
        assert_eq!(imports["os"], "");
        assert!(got.model.records.is_empty());
    }

    #[test]
    fn test_grouped_types_and_non_structs() {
        let src = r#"package p

type (
	ID int
	first struct{ a int }
	Alias = first
	second struct {
		b string
	}
)

type Reader interface {
	Read() error
}

func helper() {
	type local struct{ c int }
}
"#;
        let got = introspect_str(src, IntrospectConfig::default());
        let names: Vec<_> = got.model.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["first", "second"]);
    }

    #[test]
    fn test_multi_name_and_embedded_fields() {
        let src = r#"package p

type Point struct {
	*Base
	fmt.Stringer
	// coordinates
	x, y float64
	Z    float64
}
"#;
        let got = introspect_str(src, IntrospectConfig::default());
        let fields = &got.model.records[0].fields;
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].name, "x");
        assert_eq!(fields[1].name, "y");
        assert_eq!(fields[1].type_expr, "float64");
        assert_eq!(fields[1].doc_lines, vec!["// coordinates".to_string()]);
    }

    #[test]
    fn test_doc_attachment_rules() {
        let src = r#"package p

type T struct { // opening comment
	a int // trailing on a

	// detached

	b int
	// attached to c
	/* block */
	c int
	_d map[string] []int
}
"#;
        let got = introspect_str(src, IntrospectConfig::default());
        let fields = &got.model.records[0].fields;
        assert!(fields[0].doc_lines.is_empty());
        assert!(fields[1].doc_lines.is_empty());
        assert_eq!(
            fields[2].doc_lines,
            vec!["// attached to c".to_string(), "/* block */".to_string()]
        );
        assert!(fields[3].doc_lines.is_empty());
        assert_eq!(fields[3].name, "_d");
        assert_eq!(fields[3].type_expr, "map[string] []int");
    }

    #[test]
    fn test_generic_struct_skipped() {
        let src = "package p\n\ntype Box[T any] struct {\n\tv T\n}\n\ntype plain struct {\n\tv int\n}\n";
        let got = introspect_str(src, IntrospectConfig::default());
        assert_eq!(got.model.records.len(), 1);
        assert_eq!(got.model.records[0].name, "plain");
        assert_eq!(
            got.diagnostics,
            vec![Diagnostic::record("Box", DiagnosticKind::GenericRecord)]
        );
    }

    #[test]
    fn test_empty_struct_and_unusual_types() {
        let src = r#"package p

type empty struct{}

type odd struct {
	fn  func(a, b int) (string, error)
	ch  <-chan struct{ x int }
	arr [4]*[]map[string]interface{}
}
"#;
        let got = introspect_str(src, IntrospectConfig::default());
        assert!(got.model.records[0].fields.is_empty());
        let types: Vec<_> = got.model.records[1]
            .fields
            .iter()
            .map(|f| f.type_expr.as_str())
            .collect();
        assert_eq!(
            types,
            [
                "func(a, b int) (string, error)",
                "<-chan struct{ x int }",
                "[4]*[]map[string]interface{}"
            ]
        );
    }

    #[test]
    fn test_syntax_error_has_location() {
        let src = "package p\n\ntype T struct {\n\ta int\n\tb\n";
        let err = Introspector::default()
            .introspect_source(src, "broken.go")
            .unwrap_err();
        match err {
            ParseError::Syntax {
                origin,
                line,
                message,
                ..
            } => {
                assert_eq!(origin, "broken.go");
                assert!(line >= 1);
                assert!(message.starts_with("syntax error"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_package_clause() {
        let err = Introspector::default()
            .introspect_source("", "empty.go")
            .unwrap_err();
        assert!(matches!(err, ParseError::Syntax { line: 1, column: 1, .. }));
        assert_eq!(err.to_string(), "empty.go:1:1: expected 'package'");
    }

    #[test]
    fn test_introspect_file_not_found() {
        let err = Introspector::default()
            .introspect("../foo/parse_test.go")
            .unwrap_err();
        assert!(matches!(err, ParseError::Io { .. }));
        assert!(err.to_string().starts_with("open ../foo/parse_test.go: "));
    }

    #[test]
    fn test_introspect_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("widget.go");
        std::fs::write(&path, "package widgets\n\ntype Widget struct {\n\tname string\n}\n")
            .expect("Failed to write source");

        let model = introspect(&path, &IntrospectConfig::default()).expect("Failed to introspect");
        assert_eq!(model.package_name, "widgets");
        let widget = model
            .records
            .iter()
            .find(|r| r.name == "Widget")
            .expect("Widget missing");
        assert_eq!(widget.fields[0], Field::new("name", "string").with_flags(true, true, false));
    }
}
