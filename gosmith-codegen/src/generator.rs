//! Synthesis of the companion source file.

use crate::config::SynthConfig;
use crate::error::WriteError;
use crate::go::{AccessorGenerator, ConstructorGenerator, GoFile, ImportGenerator, render};
use gosmith_schema::Model;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Turns a [`Model`] into Go source declaring constructors and accessors.
#[derive(Debug, Clone, Copy, Default)]
pub struct Synthesizer {
    config: SynthConfig,
}

impl Synthesizer {
    /// Creates a new synthesizer.
    #[must_use]
    pub const fn new(config: SynthConfig) -> Self {
        Self { config }
    }

    /// Builds the declaration tree for a model.
    ///
    /// The import declaration comes first, then for each record its
    /// constructor followed by its accessors.
    #[must_use]
    pub fn build(&self, model: &Model) -> GoFile {
        let mut file = GoFile::new(&model.package_name);

        file.decls
            .extend(ImportGenerator::new(&model.imports).generate());

        for record in &model.records {
            let constructor = ConstructorGenerator::new(record).generate();
            let accessors =
                AccessorGenerator::new(record, self.config.get_setter_style()).generate();
            tracing::debug!(
                "record {}: constructor={}, accessors={}",
                record.name,
                constructor.is_some(),
                accessors.len()
            );
            file.decls.extend(constructor);
            file.decls.extend(accessors);
        }

        file
    }

    /// Builds and renders a model to Go source text.
    ///
    /// # Errors
    /// Returns `WriteError::Render` if the model produces an invalid tree.
    pub fn generate(&self, model: &Model) -> Result<String, WriteError> {
        render(&self.build(model))
    }

    /// Writes the generated source to `dest`, replacing any existing file.
    ///
    /// Rendering completes before the destination is opened, so a render
    /// failure leaves `dest` untouched.
    ///
    /// # Errors
    /// Returns `WriteError::Render` for an invalid tree and `WriteError::Io`
    /// if the destination cannot be written.
    pub fn synthesize(&self, model: &Model, dest: impl AsRef<Path>) -> Result<(), WriteError> {
        let dest = dest.as_ref();
        let source = self.generate(model)?;

        let file = File::create(dest).map_err(|e| WriteError::io(dest, e))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(source.as_bytes())
            .and_then(|()| writer.flush())
            .map_err(|e| WriteError::io(dest, e))?;

        tracing::info!(
            "wrote {} records for package {} to {}",
            model.records.len(),
            model.package_name,
            dest.display()
        );
        Ok(())
    }
}
