//! Generation pipeline.

use std::path::{Path, PathBuf};

use plainrec_schema::{FieldDescriptor, TypeUniverse};

use crate::config::GeneratorConfig;
use crate::emitter::{output_path, write_unit};
use crate::error::CodegenError;
use crate::mapper::map_fields;
use crate::rust::{GeneratedUnit, RecordSynthesizer};

/// Runs load, map, synthesize and emit for one aggregate.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Creates a new generator.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Synthesizes the unit for `type_name` from its fields in declaration
    /// order.
    ///
    /// # Errors
    /// Returns `CodegenError::UnsupportedFieldType` if any field has no
    /// plain translation; nothing is produced in that case.
    pub fn synthesize(
        &self,
        type_name: &str,
        fields: &[FieldDescriptor],
    ) -> Result<GeneratedUnit, CodegenError> {
        let mapped = map_fields(fields)?;
        let unit = RecordSynthesizer::new(
            type_name,
            &self.config.source_module,
            &self.config.derives,
        )
        .synthesize(mapped, &self.config.marker)?;
        tracing::debug!("Synthesized {}", unit.describe().trim_end());
        Ok(unit)
    }

    /// Loads `type_name` from the module in `dir` and synthesizes its unit.
    ///
    /// # Errors
    /// Returns `CodegenError` if loading or mapping fails.
    pub fn generate(&self, dir: &Path, type_name: &str) -> Result<GeneratedUnit, CodegenError> {
        let universe = TypeUniverse::load(dir)?;
        let fields = universe.fields_of(type_name)?;
        tracing::debug!(
            "Resolved {} with {} fields from {}",
            type_name,
            fields.len(),
            dir.display()
        );
        self.synthesize(type_name, &fields)
    }

    /// Generates the unit and writes it next to `base_file`.
    ///
    /// Returns the path written.
    ///
    /// # Errors
    /// Returns `CodegenError` if any stage fails; no file is written unless
    /// every stage succeeds.
    pub fn generate_to(
        &self,
        dir: &Path,
        type_name: &str,
        base_file: &Path,
    ) -> Result<PathBuf, CodegenError> {
        let unit = self.generate(dir, type_name)?;
        let path = output_path(base_file);
        write_unit(&path, &unit.render())?;
        Ok(path)
    }
}
