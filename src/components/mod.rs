//! UI Components for QuestForge.
//!
//! Pixel-RPG presentational components. Everything here renders snapshots
//! handed down by the pages and reports user actions back through handlers.

mod habit_card;
mod help_panel;
pub mod icons;
mod pixel_button;
mod shop_panel;

pub use habit_card::{ControlSet, HabitCard};
pub use help_panel::{HelpPanel, HelpSection, HelpTopic, HELP_SECTIONS};
pub use pixel_button::{ButtonSize, ButtonVariant, PixelButton};
pub use shop_panel::{group_by_category, PurchaseEligibility, ShopPanel};
