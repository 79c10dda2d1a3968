//! Synthesis configuration.

/// Shape of generated setters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SetterStyle {
    /// Parameterless method returning the current value.
    ///
    /// This mirrors the getter body and does not assign anything. It is kept
    /// as the default so existing generated code does not change meaning.
    #[default]
    Echo,
    /// Pointer-receiver method assigning its parameter to the field.
    Assign,
}

/// Configuration passed to the synthesizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SynthConfig {
    setter_style: SetterStyle,
}

impl SynthConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            setter_style: SetterStyle::Echo,
        }
    }

    /// Sets the setter style.
    #[must_use]
    pub const fn setter_style(mut self, style: SetterStyle) -> Self {
        self.setter_style = style;
        self
    }

    /// Returns the setter style.
    #[must_use]
    pub const fn get_setter_style(&self) -> SetterStyle {
        self.setter_style
    }
}
