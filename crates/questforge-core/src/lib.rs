//! QuestForge Core Library
//!
//! Model types and view intents for a pixel-RPG habit tracker.
//!
//! ## Overview
//!
//! QuestForge turns daily habits into quests: completing them earns XP and
//! coins, consistency builds a momentum multiplier, and coins are spent in a
//! shop of boosters, cosmetics, and companions. This crate holds the shared
//! data model. The desktop UI renders snapshots of it; the habit and
//! purchase engines own every mutation.
//!
//! ## Core Principles
//!
//! - **Snapshot-driven**: views receive plain values, never live state
//! - **Typed intents**: user actions travel as data, not as closures
//! - **Content as config**: the shop catalog is loadable from JSON
//!
//! ## Quick Start
//!
//! ```ignore
//! use questforge_core::{default_items, Habit, HabitIntent, Polarity};
//!
//! let habit = Habit::new("Morning run", Polarity::Positive);
//! println!("+{} XP on completion", habit.scaled_xp());
//!
//! let intent = HabitIntent::Complete { id: habit.id.clone(), value: None };
//!
//! for item in default_items() {
//!     println!("{} costs {} coins", item.name, item.cost);
//! }
//! ```

pub mod catalog;
pub mod intent;
pub mod types;

// Re-exports
pub use catalog::{default_items, load_items, CatalogError};
pub use intent::{HabitIntent, PurchaseOutcome};
pub use types::*;
