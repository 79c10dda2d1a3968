//! Introspection configuration.

/// Struct-tag key read in directive mode unless configured otherwise.
pub const DEFAULT_DIRECTIVE_KEY: &str = "gosmith";

/// How generation flags are decided for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Every private field gets a constructor parameter and a getter.
    #[default]
    Default,
    /// Only struct-tag directives decide.
    Directive,
}

/// Configuration passed to the introspector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntrospectConfig {
    mode: Mode,
    directive_key: String,
}

impl IntrospectConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: Mode::Default,
            directive_key: DEFAULT_DIRECTIVE_KEY.to_string(),
        }
    }

    /// Sets the generation mode.
    #[must_use]
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Switches directive mode on or off.
    #[must_use]
    pub fn directives(self, enabled: bool) -> Self {
        self.mode(if enabled { Mode::Directive } else { Mode::Default })
    }

    /// Sets the struct-tag key holding directives.
    #[must_use]
    pub fn directive_key(mut self, key: impl Into<String>) -> Self {
        self.directive_key = key.into();
        self
    }

    /// Returns the configured mode.
    #[must_use]
    pub const fn get_mode(&self) -> Mode {
        self.mode
    }

    /// Returns the configured struct-tag key.
    #[must_use]
    pub fn get_directive_key(&self) -> &str {
        &self.directive_key
    }
}

impl Default for IntrospectConfig {
    fn default() -> Self {
        Self::new()
    }
}
