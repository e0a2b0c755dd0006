//! Color constants for the QuestForge pixel theme
//!
//! Dungeon-dark backdrop with quest accent colors.

#![allow(dead_code)]

// === DUNGEON (Backgrounds) ===
pub const DUNGEON_DARK: &str = "#15121f";
pub const DUNGEON_FLOOR: &str = "#1e1a2e";
pub const DUNGEON_BORDER: &str = "#2e2845";

// === QUEST (Accents) ===
pub const QUEST_XP: &str = "#4ade80";
pub const QUEST_HEALTH: &str = "#f87171";
pub const QUEST_GOLD: &str = "#facc15";
pub const QUEST_MANA: &str = "#38bdf8";
pub const QUEST_EPIC: &str = "#c084fc";
pub const QUEST_LEGENDARY: &str = "#fb923c";
pub const QUEST_RARE: &str = "#60a5fa";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#ece9fd";
pub const TEXT_SECONDARY: &str = "rgba(236, 233, 253, 0.72)";
pub const TEXT_MUTED: &str = "rgba(236, 233, 253, 0.5)";

// === SEMANTIC ===
pub const ACCENT: &str = "#2dd4bf";
pub const MUTED_SURFACE: &str = "rgba(46, 40, 69, 0.35)";
