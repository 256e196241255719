//! Generator configuration.

/// Default generated-code marker.
pub const DEFAULT_MARKER: &str = "Code generated by plainrec. DO NOT EDIT.";

/// Options controlling the generated unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Path the source type is reachable under from the generated module.
    pub source_module: String,
    /// Traits derived on the plain record.
    pub derives: Vec<String>,
    /// Text of the leading marker comment.
    pub marker: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source_module: "super".to_string(),
            derives: Vec::new(),
            marker: DEFAULT_MARKER.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the module path of the source type.
    #[must_use]
    pub fn source_module(mut self, path: impl Into<String>) -> Self {
        self.source_module = path.into();
        self
    }

    /// Adds a derived trait to the plain record.
    #[must_use]
    pub fn derive(mut self, name: impl Into<String>) -> Self {
        self.derives.push(name.into());
        self
    }

    /// Sets the marker comment text.
    #[must_use]
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = GeneratorConfig::new();
        assert_eq!(config.source_module, "super");
        assert!(config.derives.is_empty());
        assert_eq!(config.marker, DEFAULT_MARKER);
    }

    #[test]
    fn test_config_builder() {
        let config = GeneratorConfig::new()
            .source_module("crate::model")
            .derive("Debug")
            .derive("Clone")
            .marker("generated");
        assert_eq!(config.source_module, "crate::model");
        assert_eq!(config.derives, ["Debug", "Clone"]);
        assert_eq!(config.marker, "generated");
    }
}
