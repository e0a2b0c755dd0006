//! Property-based tests for the QuestForge model
//!
//! Uses proptest to verify purchase eligibility, reward scaling, and
//! catalog loading invariants.

use std::io::Write;

use proptest::prelude::*;
use questforge_core::{load_items, HabitId, ItemId, ShopCategory, ShopItem};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Generate catalog slugs (lowercase, dash-separated)
fn slug_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9-]{0,30}").expect("valid regex")
}

/// Generate display names (printable, non-empty)
fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 '!-]{1,40}")
        .expect("valid regex")
        .prop_filter("non-empty", |s| !s.trim().is_empty())
}

fn category_strategy() -> impl Strategy<Value = ShopCategory> {
    (0..ShopCategory::ALL.len()).prop_map(|i| ShopCategory::ALL[i])
}

/// Generate arbitrary shop items, including ones with missing limits
fn item_strategy() -> impl Strategy<Value = ShopItem> {
    (
        slug_strategy(),
        name_strategy(),
        name_strategy(),
        0..500u32,
        category_strategy(),
        prop::option::of(0..10u32),
        prop::option::of(1..10u32),
        prop::option::of(0..12u32),
    )
        .prop_map(
            |(slug, name, description, cost, category, stock, max_owned, owned)| ShopItem {
                id: ItemId::new(slug),
                name,
                description,
                cost,
                category,
                stock,
                max_owned,
                owned,
            },
        )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Purchasable is exactly the conjunction of its three conditions
    #[test]
    fn purchasable_is_conjunction(item in item_strategy(), coins in 0..1000u32) {
        let expected = item.affordable(coins) && item.in_stock() && item.under_cap();
        prop_assert_eq!(item.purchasable(coins), expected);
    }

    /// A richer balance never makes a purchasable item unpurchasable
    #[test]
    fn purchasable_monotone_in_coins(item in item_strategy(), coins in 0..500u32, extra in 0..500u32) {
        if item.purchasable(coins) {
            prop_assert!(item.purchasable(coins + extra));
        }
    }

    /// An exact balance is always enough
    #[test]
    fn exact_balance_affords(item in item_strategy()) {
        prop_assert!(item.affordable(item.cost));
    }

    /// A missing owned count behaves exactly like owning zero
    #[test]
    fn missing_owned_equals_zero(item in item_strategy()) {
        let mut explicit = item.clone();
        let mut implicit = item;
        explicit.owned = Some(0);
        implicit.owned = None;
        prop_assert_eq!(explicit.under_cap(), implicit.under_cap());
    }

    /// Resting momentum awards exactly the base rewards
    #[test]
    fn resting_momentum_is_identity(base_xp in 0..500u32, base_coins in 0..500u32) {
        let mut habit = questforge_core::Habit::new("p", questforge_core::Polarity::Positive);
        habit.base_xp = base_xp;
        habit.base_coins = base_coins;
        habit.momentum_multiplier = 1.0;
        prop_assert_eq!(habit.scaled_xp(), base_xp);
        prop_assert_eq!(habit.scaled_coins(), base_coins);
    }

    /// Scaled rewards stay within half a point of the exact product
    #[test]
    fn scaling_rounds_to_nearest(base in 0..200u32, momentum in 0.0..8.0f64) {
        let mut habit = questforge_core::Habit::new("p", questforge_core::Polarity::Positive);
        habit.base_xp = base;
        habit.momentum_multiplier = momentum;
        let exact = base as f64 * momentum;
        let scaled = habit.scaled_xp() as f64;
        prop_assert!((scaled - exact).abs() <= 0.5, "scaled {} vs exact {}", scaled, exact);
    }

    /// Habit IDs survive the string representation used for storage keys
    #[test]
    fn habit_id_string_roundtrip(raw in any::<u128>()) {
        let id = HabitId(ulid::Ulid::from(raw));
        let parsed = HabitId::from_string(&id.to_string_repr()).unwrap();
        prop_assert_eq!(id, parsed);
    }

    /// Any serialized catalog loads back identically through the file loader
    #[test]
    fn catalog_file_roundtrip(items in prop::collection::vec(item_strategy(), 1..8)) {
        let json = serde_json::to_string(&items).unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let loaded = load_items(file.path()).unwrap();
        prop_assert_eq!(items, loaded);
    }
}

// ============================================================================
// Standard Tests (non-property-based)
// ============================================================================

#[test]
fn test_unicode_habit_titles() {
    let titles = [
        "Simple ASCII",
        "Accents: café",
        "Emoji: 🔥 streak",
        "Mixed: 毎日 run 5km",
    ];

    for title in &titles {
        let habit = questforge_core::Habit::new(*title, questforge_core::Polarity::Positive);
        assert_eq!(&habit.title, title);
    }
}

#[test]
fn test_zero_cost_item_is_always_affordable() {
    let mut item = questforge_core::default_items().remove(0);
    item.cost = 0;
    assert!(item.affordable(0));
}
