//! End-to-end generation: introspect, synthesize, optionally format.

use crate::error::Error;
use crate::format::PostFormat;
use gosmith_codegen::{SynthConfig, Synthesizer};
use gosmith_schema::{IntrospectConfig, Introspector, Model};
use std::path::Path;
use tracing::debug;

/// Builder-style driver for a single generation run.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    introspect: IntrospectConfig,
    synth: SynthConfig,
    post_format: PostFormat,
}

impl Pipeline {
    /// Creates a pipeline with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the introspection configuration.
    #[must_use]
    pub fn introspect_config(mut self, config: IntrospectConfig) -> Self {
        self.introspect = config;
        self
    }

    /// Sets the synthesis configuration.
    #[must_use]
    pub fn synth_config(mut self, config: SynthConfig) -> Self {
        self.synth = config;
        self
    }

    /// Sets the external pass run on the output after writing it.
    #[must_use]
    pub fn post_format(mut self, post_format: PostFormat) -> Self {
        self.post_format = post_format;
        self
    }

    /// Generates the companion file for `src` at `dst`.
    ///
    /// Returns the introspected model.
    ///
    /// # Errors
    /// Returns `Error::Parse` if `src` cannot be read or parsed,
    /// `Error::Write` if `dst` cannot be written and `Error::Format` if
    /// formatting was requested and failed.
    pub fn run(&self, src: impl AsRef<Path>, dst: impl AsRef<Path>) -> Result<Model, Error> {
        let (src, dst) = (src.as_ref(), dst.as_ref());

        let model = Introspector::new(self.introspect.clone()).introspect(src)?;
        debug!(
            "introspected {} ({} records, package {})",
            src.display(),
            model.records.len(),
            model.package_name
        );

        Synthesizer::new(self.synth).synthesize(&model, dst)?;

        self.post_format.apply(dst)?;

        Ok(model)
    }

    /// Generates companion source for Go source held in memory.
    ///
    /// `origin` names the source in syntax error messages.
    ///
    /// # Errors
    /// Returns `Error::Parse` if the source is not valid Go and
    /// `Error::Write` if the output cannot be rendered.
    pub fn generate_source(&self, source: &str, origin: &str) -> Result<String, Error> {
        let introspection =
            Introspector::new(self.introspect.clone()).introspect_source(source, origin)?;
        for diagnostic in &introspection.diagnostics {
            tracing::warn!("{}", diagnostic);
        }
        Ok(Synthesizer::new(self.synth).generate(&introspection.model)?)
    }
}
