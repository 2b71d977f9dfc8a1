//! Parser configuration.

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Stop with `TooManyErrors` once more than this many syntax errors
    /// have been reported.
    pub max_errors: usize,
    /// Prefix for the hidden temporaries WHEN statements evaluate their
    /// expression into. The source line is appended to it.
    pub when_temp_prefix: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_errors: 25,
            when_temp_prefix: "$when_".to_string(),
        }
    }
}

impl ParserConfig {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the error limit.
    pub fn max_errors(mut self, max: usize) -> Self {
        self.max_errors = max;
        self
    }

    /// Set the WHEN temporary prefix.
    pub fn when_temp_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.when_temp_prefix = prefix.into();
        self
    }

    /// Name of the WHEN temporary for an expression on `line`.
    pub fn when_temp_name(&self, line: u32) -> String {
        format!("{}{}", self.when_temp_prefix, line)
    }
}
