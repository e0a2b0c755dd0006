//! Core types for QuestForge
//!
//! Shared model types for the habit board and the shop. Everything here is
//! plain data: the habit engine owns streak and momentum updates, the
//! purchase engine owns balance changes, and the UI renders snapshots.

use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

/// Unique identifier for a habit (ULID-based)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HabitId(pub Ulid);

impl HabitId {
    /// Generate a new unique habit ID
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Parse from string representation
    pub fn from_string(s: &str) -> Result<Self, ulid::DecodeError> {
        Ok(Self(Ulid::from_string(s)?))
    }

    /// Get string representation for storage keys
    pub fn to_string_repr(&self) -> String {
        self.0.to_string()
    }
}

impl Default for HabitId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "habit_{}", self.0)
    }
}

/// Unique identifier for a shop item
///
/// Catalog entries carry human-chosen slugs ("streak-shield") rather than
/// generated IDs, so this wraps a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(slug: &str) -> Self {
        Self(slug.to_string())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a habit is about doing something or avoiding something
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    /// Build habits: completing means the behavior happened
    Positive,
    /// Break habits: completing means the behavior was avoided
    Negative,
}

impl Polarity {
    pub fn is_positive(&self) -> bool {
        matches!(self, Polarity::Positive)
    }
}

/// A tracked habit
///
/// Streaks, momentum, and rewards are written by the habit engine. The view
/// layer only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    pub id: HabitId,
    pub title: String,
    pub description: Option<String>,
    pub polarity: Polarity,
    /// Consecutive successful days, reset on a miss
    pub current_streak: u32,
    /// Highest streak ever reached
    pub best_streak: u32,
    /// Reward multiplier earned through consistency, 1.0 at rest
    pub momentum_multiplier: f64,
    pub base_xp: u32,
    pub base_coins: u32,
    /// Difficulty on a 0-5 scale
    pub difficulty_level: u8,
    /// Unix timestamp (seconds)
    pub created_at: i64,
}

impl Habit {
    pub fn new(title: impl Into<String>, polarity: Polarity) -> Self {
        Self {
            id: HabitId::new(),
            title: title.into(),
            description: None,
            polarity,
            current_streak: 0,
            best_streak: 0,
            momentum_multiplier: 1.0,
            base_xp: 10,
            base_coins: 5,
            difficulty_level: 1,
            created_at: chrono::Utc::now().timestamp(),
        }
    }

    /// XP awarded for completing today: base XP scaled by momentum,
    /// rounded to the nearest whole point
    pub fn scaled_xp(&self) -> u32 {
        (self.base_xp as f64 * self.momentum_multiplier).round() as u32
    }

    /// Coins awarded for completing today, scaled the same way as XP
    pub fn scaled_coins(&self) -> u32 {
        (self.base_coins as f64 * self.momentum_multiplier).round() as u32
    }
}

/// Per-habit analytics snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HabitStats {
    /// Share of tracked days that were successful, as a percentage (0-100)
    pub success_rate: f64,
}

/// Shop item category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShopCategory {
    Booster,
    Boost,
    Cosmetic,
    Upgrade,
    Consumable,
    Companion,
}

impl ShopCategory {
    pub const ALL: [ShopCategory; 6] = [
        ShopCategory::Booster,
        ShopCategory::Boost,
        ShopCategory::Cosmetic,
        ShopCategory::Upgrade,
        ShopCategory::Consumable,
        ShopCategory::Companion,
    ];

    /// Lowercase tag, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            ShopCategory::Booster => "booster",
            ShopCategory::Boost => "boost",
            ShopCategory::Cosmetic => "cosmetic",
            ShopCategory::Upgrade => "upgrade",
            ShopCategory::Consumable => "consumable",
            ShopCategory::Companion => "companion",
        }
    }
}

/// One entry of the shop catalog
///
/// `stock`, `max_owned`, and `owned` are all optional: a missing field means
/// the corresponding limit does not apply to this item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopItem {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    /// Price in coins
    pub cost: u32,
    pub category: ShopCategory,
    /// Remaining stock; 0 means sold out, absent means unlimited
    #[serde(default)]
    pub stock: Option<u32>,
    /// Ownership cap; absent means uncapped
    #[serde(default)]
    pub max_owned: Option<u32>,
    /// How many the player already owns
    #[serde(default)]
    pub owned: Option<u32>,
}

impl ShopItem {
    /// The current balance covers the price
    pub fn affordable(&self, coins: u32) -> bool {
        self.cost <= coins
    }

    /// Either unlimited stock or at least one unit left
    pub fn in_stock(&self) -> bool {
        self.stock.map_or(true, |s| s > 0)
    }

    /// Either uncapped or owned count below the cap. A missing owned count
    /// counts as zero.
    pub fn under_cap(&self) -> bool {
        match self.max_owned {
            None => true,
            Some(cap) => self.owned.unwrap_or(0) < cap,
        }
    }

    /// All three purchase conditions hold at once
    pub fn purchasable(&self, coins: u32) -> bool {
        self.affordable(coins) && self.in_stock() && self.under_cap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(cost: u32) -> ShopItem {
        ShopItem {
            id: ItemId::from("test-item"),
            name: "Test Item".to_string(),
            description: "An item for tests".to_string(),
            cost,
            category: ShopCategory::Consumable,
            stock: None,
            max_owned: None,
            owned: None,
        }
    }

    #[test]
    fn test_habit_id_display_has_prefix() {
        let id = HabitId::new();
        assert!(id.to_string().starts_with("habit_"));
    }

    #[test]
    fn test_habit_id_round_trip() {
        let id = HabitId::new();
        let parsed = HabitId::from_string(&id.to_string_repr()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_habit_ids_are_unique() {
        let a = HabitId::new();
        let b = HabitId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_item_id_serializes_as_plain_string() {
        let id = ItemId::from("streak-shield");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"streak-shield\"");
    }

    #[test]
    fn test_polarity_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Polarity::Positive).unwrap(),
            "\"positive\""
        );
        assert_eq!(
            serde_json::to_string(&Polarity::Negative).unwrap(),
            "\"negative\""
        );
    }

    #[test]
    fn test_new_habit_defaults() {
        let habit = Habit::new("Morning run", Polarity::Positive);
        assert_eq!(habit.title, "Morning run");
        assert_eq!(habit.current_streak, 0);
        assert_eq!(habit.best_streak, 0);
        assert_eq!(habit.momentum_multiplier, 1.0);
        assert_eq!(habit.difficulty_level, 1);
        assert!(habit.description.is_none());
    }

    #[test]
    fn test_scaled_rewards_round_to_nearest() {
        let mut habit = Habit::new("Read", Polarity::Positive);
        habit.base_xp = 10;
        habit.base_coins = 5;
        habit.momentum_multiplier = 1.25;
        // 12.5 rounds up, 6.25 rounds down
        assert_eq!(habit.scaled_xp(), 13);
        assert_eq!(habit.scaled_coins(), 6);
    }

    #[test]
    fn test_scaled_rewards_at_rest_equal_base() {
        let mut habit = Habit::new("Stretch", Polarity::Negative);
        habit.base_xp = 15;
        habit.base_coins = 8;
        assert_eq!(habit.scaled_xp(), 15);
        assert_eq!(habit.scaled_coins(), 8);
    }

    #[test]
    fn test_affordable_boundary() {
        let it = item(50);
        assert!(it.affordable(50));
        assert!(it.affordable(51));
        assert!(!it.affordable(49));
    }

    #[test]
    fn test_in_stock_treats_missing_as_unlimited() {
        let mut it = item(10);
        assert!(it.in_stock());
        it.stock = Some(1);
        assert!(it.in_stock());
        it.stock = Some(0);
        assert!(!it.in_stock());
    }

    #[test]
    fn test_under_cap_treats_missing_owned_as_zero() {
        let mut it = item(10);
        it.max_owned = Some(2);
        assert!(it.under_cap());
        it.owned = Some(1);
        assert!(it.under_cap());
        it.owned = Some(2);
        assert!(!it.under_cap());
    }

    #[test]
    fn test_purchasable_requires_all_conditions() {
        let mut it = item(30);
        it.stock = Some(1);
        it.max_owned = Some(1);
        assert!(it.purchasable(30));
        assert!(!it.purchasable(29));
        it.stock = Some(0);
        assert!(!it.purchasable(30));
        it.stock = Some(1);
        it.owned = Some(1);
        assert!(!it.purchasable(30));
    }

    #[test]
    fn test_shop_item_deserializes_without_optional_fields() {
        let json = r#"{
            "id": "focus-brew",
            "name": "Focus Brew",
            "description": "A bitter drink",
            "cost": 25,
            "category": "consumable"
        }"#;
        let it: ShopItem = serde_json::from_str(json).unwrap();
        assert_eq!(it.id, ItemId::from("focus-brew"));
        assert_eq!(it.stock, None);
        assert_eq!(it.max_owned, None);
        assert_eq!(it.owned, None);
        assert!(it.in_stock());
        assert!(it.under_cap());
    }

    #[test]
    fn test_category_tags_match_serialized_form() {
        for category in ShopCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }
}
