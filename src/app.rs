use dioxus::prelude::*;

use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and renders the board. The app is a single
/// screen; the shop and help surfaces are overlays, not routes.
#[component]
pub fn App() -> Element {
    rsx! {
        style { {GLOBAL_STYLES} }
        Home {}
    }
}
