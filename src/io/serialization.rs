// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Catalog serialization and deserialization.
//!
//! This module handles exporting and importing the portfolio catalog in
//! YAML and JSON formats. Imported catalogs are validated before use.

use crate::models::catalog::Catalog;
use anyhow::{bail, Context, Result};
use std::path::Path;

/// Export the catalog to YAML format.
pub fn export_yaml(data: &Catalog, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(data)?;
    std::fs::write(path, yaml).with_context(|| format!("Writing {}", path.display()))?;
    Ok(())
}

/// Export the catalog to JSON format.
pub fn export_json(data: &Catalog, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    std::fs::write(path, json).with_context(|| format!("Writing {}", path.display()))?;
    Ok(())
}

/// Import a catalog from YAML format.
pub fn import_yaml(path: &Path) -> Result<Catalog> {
    let yaml = std::fs::read_to_string(path).with_context(|| format!("Reading {}", path.display()))?;
    let data: Catalog = serde_yaml::from_str(&yaml)?;
    data.validate()?;
    Ok(data)
}

/// Import a catalog from JSON format.
pub fn import_json(path: &Path) -> Result<Catalog> {
    let json = std::fs::read_to_string(path).with_context(|| format!("Reading {}", path.display()))?;
    let data: Catalog = serde_json::from_str(&json)?;
    data.validate()?;
    Ok(data)
}

/// Import a catalog, picking the format from the file extension.
pub fn import(path: &Path) -> Result<Catalog> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("yaml") | Some("yml") => import_yaml(path),
        Some("json") => import_json(path),
        other => bail!("Unsupported catalog extension: {:?}", other),
    }
}

/// Export the catalog, picking the format from the file extension.
pub fn export(data: &Catalog, path: &Path) -> Result<()> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("yaml") | Some("yml") => export_yaml(data, path),
        Some("json") => export_json(data, path),
        other => bail!("Unsupported catalog extension: {:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::project::tests::sample_project;

    #[test]
    fn test_yaml_export_import() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.yaml");
        let catalog = Catalog::builtin();

        export(&catalog, &path).unwrap();
        assert_eq!(import(&path).unwrap(), catalog);
    }

    #[test]
    fn test_json_export_import() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let catalog = Catalog::builtin();

        export(&catalog, &path).unwrap();
        assert_eq!(import(&path).unwrap(), catalog);
    }

    #[test]
    fn test_minimal_yaml_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.yml");
        std::fs::write(
            &path,
            r#"
profile:
  name: Ada
  headline: Engineer
  intro: Hello
  photo: { src: /me.jpg, alt: Photo of Ada }
  biography: []
  footer: Bye
projects:
  - id: engine
    title: Analytical Engine
    timeframe: "1837"
    summary: Programs
    description: [Notes]
    technologies: [Brass]
    image: { src: /engine.png, alt: Engine }
"#,
        )
        .unwrap();

        let catalog = import(&path).unwrap();
        assert!(catalog.skills.is_empty());
        assert_eq!(catalog.projects.len(), 1);
        assert_eq!(catalog.projects[0].gallery, None);
        assert_eq!(catalog.projects[0].link_href, None);
    }

    #[test]
    fn test_import_rejects_duplicate_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let mut catalog = Catalog::builtin();
        catalog.projects = vec![sample_project("dup", None), sample_project("dup", None)];

        export(&catalog, &path).unwrap();
        assert!(import(&path).is_err());
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        assert!(export(&Catalog::builtin(), &path).is_err());
        assert!(import(&path).is_err());
    }
}
