//! Category catalog loading from TOML.
//!
//! The catalog is static reference data: a list of spending categories with
//! their sub-categories, parsed once at session start. A built-in catalog
//! ships with the crate; deployments can point `SIX_JARS_CATEGORY_FILE` at
//! their own file to replace it.

use crate::entities::{Category, SubCategory};
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// The catalog compiled into the crate.
const DEFAULT_CATALOG: &str = include_str!("default_categories.toml");

/// TOML shape of the whole catalog file.
#[derive(Debug, Deserialize)]
struct Catalog {
    categories: Vec<CategoryEntry>,
}

/// TOML shape of a single category.
#[derive(Debug, Deserialize)]
struct CategoryEntry {
    id: String,
    name: String,
    kind: String,
    icon: String,
    #[serde(default)]
    subcategories: Vec<SubCategoryEntry>,
}

#[derive(Debug, Deserialize)]
struct SubCategoryEntry {
    id: String,
    name: String,
    icon: String,
}

impl CategoryEntry {
    fn into_category(self) -> Result<Category> {
        let kind = self.kind.parse().map_err(|e| Error::Config {
            message: format!("category {:?}: {e}", self.id),
        })?;
        Ok(Category {
            id: self.id,
            name: self.name,
            kind,
            icon: self.icon,
            sub_categories: self
                .subcategories
                .into_iter()
                .map(|s| SubCategory {
                    id: s.id,
                    name: s.name,
                    icon: s.icon,
                })
                .collect(),
        })
    }
}

/// Parses a catalog out of TOML text.
pub fn parse_catalog(contents: &str) -> Result<Vec<Category>> {
    let catalog: Catalog = toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse category catalog: {e}"),
    })?;
    catalog
        .categories
        .into_iter()
        .map(CategoryEntry::into_category)
        .collect()
}

/// Loads a catalog from a TOML file on disk.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<Category>> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read category catalog: {e}"),
    })?;
    parse_catalog(&contents)
}

/// The catalog compiled into the crate.
pub fn builtin_catalog() -> Result<Vec<Category>> {
    parse_catalog(DEFAULT_CATALOG)
}

/// Resolves the catalog for the given settings: the override file when one
/// is configured, the built-in catalog otherwise.
pub fn catalog(settings: &crate::config::Settings) -> Result<Vec<Category>> {
    match &settings.category_file {
        Some(path) => load_catalog(path),
        None => builtin_catalog(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::entities::CategoryKind;

    #[test]
    fn test_parse_category_catalog() {
        let toml_str = r#"
            [[categories]]
            id = "food"
            name = "Food"
            kind = "needs"
            icon = "🍽️"

            [[categories.subcategories]]
            id = "groceries"
            name = "Groceries"
            icon = "🥬"

            [[categories]]
            id = "entertainment"
            name = "Entertainment"
            kind = "lifestyle"
            icon = "🎮"
        "#;

        let categories = parse_catalog(toml_str).unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].id, "food");
        assert_eq!(categories[0].kind, CategoryKind::Needs);
        assert_eq!(categories[0].sub_categories.len(), 1);
        assert_eq!(categories[0].sub_categories[0].id, "groceries");
        assert_eq!(categories[1].kind, CategoryKind::Lifestyle);
        assert!(categories[1].sub_categories.is_empty());
    }

    #[test]
    fn test_parse_catalog_rejects_unknown_kind() {
        let toml_str = r#"
            [[categories]]
            id = "food"
            name = "Food"
            kind = "mandatory"
            icon = "🍽️"
        "#;

        let err = parse_catalog(toml_str).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_load_catalog_reads_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("categories.toml");
        std::fs::write(
            &path,
            r#"
            [[categories]]
            id = "coffee"
            name = "Coffee"
            kind = "lifestyle"
            icon = "☕"
        "#,
        )
        .unwrap();

        let categories = load_catalog(&path).unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].id, "coffee");

        let err = load_catalog(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_builtin_catalog_is_complete() {
        let categories = builtin_catalog().unwrap();
        assert_eq!(categories.len(), 13);

        let food = categories.iter().find(|c| c.id == "food").unwrap();
        assert_eq!(food.kind, CategoryKind::Needs);
        assert_eq!(food.sub_categories.len(), 2);

        let savings: Vec<&str> = categories
            .iter()
            .filter(|c| c.kind == CategoryKind::Savings)
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(savings, vec!["emergency-fund", "investment"]);
    }
}
