//! Page components for QuestForge.

mod home;

pub use home::Home;
