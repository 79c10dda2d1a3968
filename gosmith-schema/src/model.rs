//! Abstract record model.
//!
//! This module contains the data structures produced by introspection and
//! consumed by synthesis: the package, its import table, and the ordered
//! records with per-field generation flags.

use std::collections::BTreeMap;

/// Introspected view of one Go source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    /// Package name from the `package` clause.
    pub package_name: String,
    /// Import path to local alias (empty alias means the default name).
    pub imports: BTreeMap<String, String>,
    /// Struct records in source declaration order.
    pub records: Vec<Record>,
}

impl Model {
    /// Creates an empty model for the given package.
    #[must_use]
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            imports: BTreeMap::new(),
            records: Vec::new(),
        }
    }

    /// Adds an import; a repeated path replaces the earlier alias.
    pub fn add_import(&mut self, path: impl Into<String>, alias: impl Into<String>) {
        self.imports.insert(path.into(), alias.into());
    }

    /// Adds a record.
    pub fn add_record(&mut self, record: Record) {
        self.records.push(record);
    }
}

/// Struct type definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    /// Type name.
    pub name: String,
    /// Fields in source order.
    pub fields: Vec<Field>,
}

impl Record {
    /// Creates a record without fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Adds a field.
    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Fields that become constructor parameters, in order.
    pub fn init_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.init)
    }

    /// Returns true if any field requests an accessor.
    #[must_use]
    pub fn has_accessors(&self) -> bool {
        self.fields.iter().any(|f| f.get || f.set)
    }
}

/// Field of a record together with its generation flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Field {
    /// Field name.
    pub name: String,
    /// Type exactly as written in source.
    pub type_expr: String,
    /// Doc comment lines, comment markers included.
    pub doc_lines: Vec<String>,
    /// Field is a constructor parameter.
    pub init: bool,
    /// Field gets a getter.
    pub get: bool,
    /// Field gets a setter.
    pub set: bool,
}

impl Field {
    /// Creates a field with all generation flags off.
    #[must_use]
    pub fn new(name: impl Into<String>, type_expr: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_expr: type_expr.into(),
            doc_lines: Vec::new(),
            init: false,
            get: false,
            set: false,
        }
    }

    /// Sets the doc comment lines.
    #[must_use]
    pub fn with_docs<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.doc_lines = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the generation flags.
    #[must_use]
    pub fn with_flags(mut self, init: bool, get: bool, set: bool) -> Self {
        self.init = init;
        self.get = get;
        self.set = set;
        self
    }

    /// Returns true if no declaration is generated for this field.
    #[must_use]
    pub const fn is_inert(&self) -> bool {
        !(self.init || self.get || self.set)
    }
}
