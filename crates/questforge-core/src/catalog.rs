//! Shop catalog
//!
//! The built-in item set plus loading of replacement catalogs from JSON
//! files. Catalogs are content configuration: read at startup, never
//! written back.

use std::path::Path;

use thiserror::Error;

use crate::types::{ItemId, ShopCategory, ShopItem};

/// Errors from loading a shop catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog has no items")]
    Empty,
}

/// Load a catalog from a JSON file containing an array of items
pub fn load_items(path: &Path) -> Result<Vec<ShopItem>, CatalogError> {
    let raw = std::fs::read_to_string(path)?;
    let items: Vec<ShopItem> = serde_json::from_str(&raw)?;
    if items.is_empty() {
        return Err(CatalogError::Empty);
    }
    Ok(items)
}

fn entry(
    slug: &str,
    name: &str,
    description: &str,
    cost: u32,
    category: ShopCategory,
) -> ShopItem {
    ShopItem {
        id: ItemId::from(slug),
        name: name.to_string(),
        description: description.to_string(),
        cost,
        category,
        stock: None,
        max_owned: None,
        owned: None,
    }
}

/// The catalog shipped with the app, used when no `--catalog` file is given
pub fn default_items() -> Vec<ShopItem> {
    vec![
        entry(
            "xp-surge",
            "XP Surge",
            "Double XP from the next habit you complete",
            40,
            ShopCategory::Booster,
        ),
        ShopItem {
            stock: Some(3),
            ..entry(
                "golden-hour",
                "Golden Hour",
                "Triple momentum gain for one hour",
                90,
                ShopCategory::Booster,
            )
        },
        entry(
            "momentum-spark",
            "Momentum Spark",
            "Instantly add a spark of momentum to every habit",
            30,
            ShopCategory::Boost,
        ),
        ShopItem {
            max_owned: Some(1),
            ..entry(
                "midnight-theme",
                "Midnight Theme",
                "A darker dungeon for late-night questing",
                120,
                ShopCategory::Cosmetic,
            )
        },
        ShopItem {
            max_owned: Some(1),
            ..entry(
                "confetti-burst",
                "Confetti Burst",
                "Celebrate completions with pixel confetti",
                60,
                ShopCategory::Cosmetic,
            )
        },
        ShopItem {
            max_owned: Some(3),
            owned: Some(1),
            ..entry(
                "quest-slot",
                "Quest Slot",
                "Track one more active quest at a time",
                150,
                ShopCategory::Upgrade,
            )
        },
        ShopItem {
            stock: Some(5),
            ..entry(
                "companion-treat",
                "Companion Treat",
                "A snack that cheers up your companion",
                15,
                ShopCategory::Consumable,
            )
        },
        ShopItem {
            stock: Some(2),
            max_owned: Some(3),
            ..entry(
                "streak-shield",
                "Streak Shield",
                "Protects one streak from a single missed day",
                75,
                ShopCategory::Consumable,
            )
        },
        ShopItem {
            stock: Some(1),
            max_owned: Some(1),
            ..entry(
                "dragon-egg",
                "Pixel Dragon Egg",
                "Hatches into a loyal dragon companion",
                500,
                ShopCategory::Companion,
            )
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::io::Write;

    #[test]
    fn test_default_catalog_is_well_formed() {
        let items = default_items();
        assert!(!items.is_empty());

        let ids: HashSet<_> = items.iter().map(|i| i.id.clone()).collect();
        assert_eq!(ids.len(), items.len(), "item slugs must be unique");

        for item in &items {
            assert!(item.cost > 0, "{} has a zero cost", item.id);
            assert!(!item.name.is_empty());
            assert!(!item.description.is_empty());
        }
    }

    #[test]
    fn test_default_catalog_covers_every_category() {
        let items = default_items();
        for category in ShopCategory::ALL {
            assert!(
                items.iter().any(|i| i.category == category),
                "no {} items in the default catalog",
                category.as_str()
            );
        }
    }

    #[test]
    fn test_load_items_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{
                "id": "test-potion",
                "name": "Test Potion",
                "description": "Tastes like assertions",
                "cost": 10,
                "category": "consumable",
                "stock": 4
            }}]"#
        )
        .unwrap();

        let items = load_items(file.path()).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, ItemId::from("test-potion"));
        assert_eq!(items[0].stock, Some(4));
        assert_eq!(items[0].max_owned, None);
    }

    #[test]
    fn test_load_items_rejects_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not a catalog").unwrap();

        let err = load_items(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_load_items_rejects_empty_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[]").unwrap();

        let err = load_items(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Empty));
    }

    #[test]
    fn test_load_items_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_items(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }

    #[test]
    fn test_default_catalog_round_trips_through_json() {
        let items = default_items();
        let json = serde_json::to_string_pretty(&items).unwrap();
        let back: Vec<ShopItem> = serde_json::from_str(&json).unwrap();
        assert_eq!(items, back);
    }
}
