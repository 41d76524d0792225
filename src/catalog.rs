//! JSON catalog of the registered types

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::checksum::Checksum;
use crate::config::{ExportConfig, OutputFormat};
use crate::error::Result;
use crate::schema::MinionType;
use crate::VERSION;

/// Exported snapshot of a type list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// SDK version that produced the catalog
    pub version: String,
    pub generated_at: DateTime<Utc>,
    /// SHA256 over the compact JSON of `types`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<Checksum>,
    pub types: Vec<MinionType>,
}

impl Catalog {
    /// Build a catalog from a type list
    pub fn new<'a>(
        types: impl IntoIterator<Item = &'a MinionType>,
        include_checksum: bool,
    ) -> Result<Self> {
        let types: Vec<MinionType> = types.into_iter().cloned().collect();
        let checksum = if include_checksum {
            Some(Checksum::of_json(&types)?)
        } else {
            None
        };
        Ok(Self {
            version: VERSION.to_string(),
            generated_at: Utc::now(),
            checksum,
            types,
        })
    }

    /// Check the stored checksum against the type list
    ///
    /// A catalog without a checksum verifies trivially.
    pub fn verify(&self) -> Result<bool> {
        match &self.checksum {
            Some(checksum) => checksum.verify_json(&self.types),
            None => Ok(true),
        }
    }

    /// Render as JSON in the given format
    pub fn to_json(&self, format: OutputFormat) -> Result<String> {
        let json = match format {
            OutputFormat::Pretty => serde_json::to_string_pretty(self)?,
            OutputFormat::Compact => serde_json::to_string(self)?,
        };
        Ok(json)
    }

    /// Write to a file
    pub fn write_to(&self, path: &Path, export: &ExportConfig) -> Result<()> {
        fs::write(path, self.to_json(export.output_format)?)?;
        info!(path = %path.display(), types = self.types.len(), "wrote catalog");
        Ok(())
    }

    /// Read a catalog back from a file
    pub fn read_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::custom_types;

    #[test]
    fn test_catalog_with_checksum() {
        let catalog = Catalog::new(custom_types(), true).unwrap();
        assert_eq!(catalog.version, "0.1.0");
        assert_eq!(catalog.types.len(), 4);
        assert!(catalog.checksum.is_some());
        assert!(catalog.verify().unwrap());
    }

    #[test]
    fn test_catalog_without_checksum() {
        let catalog = Catalog::new(custom_types(), false).unwrap();
        let json = catalog.to_json(OutputFormat::Compact).unwrap();
        assert!(!json.contains("checksum"));
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_tampered_catalog_fails_verification() {
        let mut catalog = Catalog::new(custom_types(), true).unwrap();
        catalog.types[0].name = "Zelt".to_string();
        assert!(!catalog.verify().unwrap());
    }
}
