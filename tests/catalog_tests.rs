//! Catalog export tests

use minions_venues::config::{ExportConfig, OutputFormat};
use minions_venues::{Catalog, TypeRegistry};

#[test]
fn test_write_and_read_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    let registry = TypeRegistry::with_custom_types();

    let catalog = Catalog::new(&registry, true).unwrap();
    catalog.write_to(&path, &ExportConfig::default()).unwrap();

    let loaded = Catalog::read_from(&path).unwrap();
    assert_eq!(loaded.version, "0.1.0");
    assert_eq!(loaded.checksum, catalog.checksum);
    assert_eq!(loaded.types, catalog.types);
    assert!(loaded.verify().unwrap());
}

#[test]
fn test_compact_export() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    let export = ExportConfig {
        output_format: OutputFormat::Compact,
        include_checksum: false,
    };

    let catalog = Catalog::new(&TypeRegistry::with_custom_types(), export.include_checksum).unwrap();
    catalog.write_to(&path, &export).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 1);
    let loaded = Catalog::read_from(&path).unwrap();
    assert!(loaded.checksum.is_none());
    assert!(loaded.verify().unwrap());
}

#[test]
fn test_read_missing_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let err = Catalog::read_from(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, minions_venues::VenuesError::Io(_)));
}
