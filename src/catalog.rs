// src/catalog.rs
//! Loading block catalogs and pages from JSON.
//!
//! A catalog is either one JSON file holding an array of block manifests or
//! a directory with one manifest per `*.json` file. A manifest may leave out
//! its `slug`; it is then derived from the block's `name`.
//!
//! A page is a JSON array of sections, or an object with a `sections` array.

use crate::error::FolioError;
use folio_core::{BlockRegistry, SectionList};
use folio_types::{BlockDefinition, Section};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Parses a catalog array. `origin` names the source in error messages.
pub fn parse_catalog(json: &str, origin: &str) -> Result<Vec<BlockDefinition>, FolioError> {
    match serde_json::from_str::<Value>(json)? {
        Value::Array(manifests) => manifests
            .into_iter()
            .map(|manifest| parse_manifest(manifest, origin))
            .collect(),
        _ => Err(FolioError::Manifest {
            path: origin.to_string(),
            message: "a catalog file must hold an array of blocks".to_string(),
        }),
    }
}

/// Parses a single block manifest.
pub fn parse_manifest(manifest: Value, origin: &str) -> Result<BlockDefinition, FolioError> {
    let Value::Object(mut fields) = manifest else {
        return Err(FolioError::Manifest {
            path: origin.to_string(),
            message: "a block manifest must be an object".to_string(),
        });
    };

    let has_slug = matches!(fields.get("slug"), Some(Value::String(s)) if !s.is_empty());
    if !has_slug && let Some(Value::String(name)) = fields.get("name") {
        let derived = slug::slugify(name);
        log::debug!("Derived slug '{}' for block '{}' in {}", derived, name, origin);
        fields.insert("slug".to_string(), Value::String(derived));
    }

    serde_json::from_value(Value::Object(fields)).map_err(|e| FolioError::Manifest {
        path: origin.to_string(),
        message: e.to_string(),
    })
}

pub fn load_catalog_file<P: AsRef<Path>>(path: P) -> Result<BlockRegistry, FolioError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|e| FolioError::io_at(path, e))?;
    let definitions = parse_catalog(&source, &path.display().to_string())?;
    let registry = BlockRegistry::from_definitions(definitions)?;
    log::info!("Loaded {} blocks from '{}'", registry.len(), path.display());
    Ok(registry)
}

/// Loads every `*.json` manifest in `dir`, in file name order.
pub fn load_catalog_dir<P: AsRef<Path>>(dir: P) -> Result<BlockRegistry, FolioError> {
    let dir = dir.as_ref();
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(|e| FolioError::io_at(dir, e))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    let mut registry = BlockRegistry::new();
    for path in &paths {
        let source = fs::read_to_string(path).map_err(|e| FolioError::io_at(path, e))?;
        let definition = parse_manifest(serde_json::from_str(&source)?, &path.display().to_string())?;
        registry.insert(definition)?;
    }
    log::info!("Loaded {} blocks from '{}'", registry.len(), dir.display());
    Ok(registry)
}

/// Loads a catalog from a file or a directory, whichever `path` is.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<BlockRegistry, FolioError> {
    let path = path.as_ref();
    if path.is_dir() {
        load_catalog_dir(path)
    } else {
        load_catalog_file(path)
    }
}

/// Parses a page into a section list with fresh indices.
pub fn parse_page(json: &str) -> Result<SectionList, FolioError> {
    let sections = match serde_json::from_str::<Value>(json)? {
        array @ Value::Array(_) => array,
        Value::Object(mut page) => page.remove("sections").ok_or_else(|| FolioError::Manifest {
            path: "page".to_string(),
            message: "missing 'sections' array".to_string(),
        })?,
        _ => {
            return Err(FolioError::Manifest {
                path: "page".to_string(),
                message: "a page must be an array of sections or an object with 'sections'".to_string(),
            });
        }
    };
    let sections: Vec<Section> = serde_json::from_value(sections)?;
    Ok(SectionList::from_sections(sections))
}

pub fn load_page<P: AsRef<Path>>(path: P) -> Result<SectionList, FolioError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|e| FolioError::io_at(path, e))?;
    let page = parse_page(&source)?;
    log::info!("Loaded page '{}' with {} sections", path.display(), page.len());
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::RegistryError;
    use folio_types::{Category, SectionId};
    use serde_json::json;

    #[test]
    fn test_parse_catalog_with_legacy_keys() {
        let json = r#"[
            { "slug": "hero", "name": "Hero", "view_file": "hero/view.hbs", "style_file": "hero/style.hbs",
              "settings": { "align": "left" }, "contents": { "title": "Welcome" } }
        ]"#;
        let blocks = parse_catalog(json, "catalog.json").unwrap();

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].body_template.as_str(), "hero/view.hbs");
        assert_eq!(blocks[0].style_template.as_ref().unwrap().as_str(), "hero/style.hbs");
        assert_eq!(blocks[0].defaults(Category::Settings).len(), 1);
    }

    #[test]
    fn test_manifest_without_slug_derives_it_from_name() {
        let block = parse_manifest(
            json!({ "name": "Call To Action", "body_template": "cta.hbs" }),
            "cta.json",
        )
        .unwrap();
        assert_eq!(block.slug.as_str(), "call-to-action");
    }

    #[test]
    fn test_explicit_slug_is_kept() {
        let block = parse_manifest(
            json!({ "slug": "cta", "name": "Call To Action", "body_template": "cta.hbs" }),
            "cta.json",
        )
        .unwrap();
        assert_eq!(block.slug.as_str(), "cta");
    }

    #[test]
    fn test_parse_page_array_and_object_forms() {
        let array = parse_page(r#"[{ "id": 7, "slug": "hero" }, { "id": 3, "slug": "text" }]"#).unwrap();
        let object = parse_page(r#"{ "sections": [{ "id": 7, "slug": "hero" }, { "id": 3, "slug": "text" }] }"#).unwrap();

        assert_eq!(array, object);
        assert_eq!(array.get(1).unwrap().index(), 1);
        assert_eq!(array.get(0).unwrap().id(), SectionId::new(7));
    }

    // Edge case tests

    #[test]
    fn test_catalog_must_be_array() {
        let result = parse_catalog(r#"{ "slug": "hero" }"#, "catalog.json");
        assert!(matches!(result, Err(FolioError::Manifest { .. })));
    }

    #[test]
    fn test_manifest_missing_template_is_an_error() {
        let result = parse_manifest(json!({ "slug": "hero", "name": "Hero" }), "hero.json");
        match result {
            Err(FolioError::Manifest { path, message }) => {
                assert_eq!(path, "hero.json");
                assert!(message.contains("body_template"));
            }
            other => panic!("expected manifest error, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_slugs_in_catalog_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"[{ "name": "Hero", "body_template": "a.hbs" }, { "slug": "hero", "name": "Other", "body_template": "b.hbs" }]"#,
        )
        .unwrap();

        let result = load_catalog_file(&path);
        assert!(matches!(
            result,
            Err(FolioError::Registry(RegistryError::DuplicateSlug(_)))
        ));
    }

    #[test]
    fn test_page_object_without_sections() {
        assert!(matches!(parse_page(r#"{ "title": "Home" }"#), Err(FolioError::Manifest { .. })));
        assert!(matches!(parse_page("42"), Err(FolioError::Manifest { .. })));
    }
}
