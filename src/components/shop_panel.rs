//! Shop Panel Component
//!
//! Modal storefront. Items arrive as a snapshot grouped by category, each
//! row showing computed purchase eligibility against the current balance.
//! Purchase attempts go through a callback that answers with a
//! [`PurchaseOutcome`].

use dioxus::prelude::*;
use questforge_core::{ItemId, PurchaseOutcome, ShopCategory, ShopItem};

use super::icons;
use super::pixel_button::{ButtonSize, ButtonVariant, PixelButton};

/// Purchase eligibility of one item against one balance
///
/// Variants are ordered by display priority: sold-out masks the ownership
/// cap, and the cap masks affordability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseEligibility {
    SoldOut,
    CapReached,
    TooExpensive,
    Ready,
}

impl PurchaseEligibility {
    pub fn evaluate(item: &ShopItem, coins: u32) -> Self {
        if !item.in_stock() {
            PurchaseEligibility::SoldOut
        } else if !item.under_cap() {
            PurchaseEligibility::CapReached
        } else if !item.affordable(coins) {
            PurchaseEligibility::TooExpensive
        } else {
            PurchaseEligibility::Ready
        }
    }

    /// Get the buy-button label for this state
    pub fn label(&self) -> &'static str {
        match self {
            PurchaseEligibility::SoldOut => "Sold",
            PurchaseEligibility::CapReached => "Max",
            PurchaseEligibility::TooExpensive => "Need",
            PurchaseEligibility::Ready => "Buy",
        }
    }

    /// Only a ready item has a clickable buy button
    pub fn enabled(&self) -> bool {
        matches!(self, PurchaseEligibility::Ready)
    }
}

/// Group items by category
///
/// Categories appear in order of first occurrence in the input; items keep
/// their input order within each group. Empty groups never appear.
pub fn group_by_category(items: &[ShopItem]) -> Vec<(ShopCategory, Vec<ShopItem>)> {
    let mut groups: Vec<(ShopCategory, Vec<ShopItem>)> = Vec::new();
    for item in items {
        match groups.iter_mut().find(|(c, _)| *c == item.category) {
            Some((_, bucket)) => bucket.push(item.clone()),
            None => groups.push((item.category, vec![item.clone()])),
        }
    }
    groups
}

/// Get the accent class for a category (text and border color)
fn category_accent(category: ShopCategory) -> &'static str {
    match category {
        ShopCategory::Booster | ShopCategory::Boost => "shop-accent--epic",
        ShopCategory::Companion => "shop-accent--legendary",
        ShopCategory::Cosmetic => "shop-accent--gold",
        ShopCategory::Upgrade => "shop-accent--accent",
        ShopCategory::Consumable => "shop-accent--mana",
    }
}

/// Render the glyph for a category header or item tile
fn category_icon(category: ShopCategory, size: u32) -> Element {
    match category {
        ShopCategory::Booster | ShopCategory::Boost => icons::sparkles(size),
        ShopCategory::Cosmetic | ShopCategory::Companion => icons::crown(size),
        ShopCategory::Upgrade => icons::package(size),
        ShopCategory::Consumable => icons::coins(size),
    }
}

/// Section heading text, pluralized from the category tag
fn section_title(category: ShopCategory) -> String {
    format!("{}s", category.as_str())
}

/// Shop modal
#[component]
pub fn ShopPanel(
    /// Current coin balance
    coins: u32,
    /// Catalog snapshot to display
    items: Vec<ShopItem>,
    /// Purchase attempt handler; answers with the engine's verdict
    on_purchase: Callback<ItemId, PurchaseOutcome>,
    /// Handler called when the modal is closed
    on_close: EventHandler<()>,
) -> Element {
    let groups = group_by_category(&items);

    let handle_close = move |_| {
        on_close.call(());
    };

    let handle_keydown = move |e: KeyboardEvent| {
        if e.key() == Key::Escape {
            on_close.call(());
        }
    };

    rsx! {
        div {
            class: "overlay-backdrop",
            onclick: handle_close,
            onkeydown: handle_keydown,

            div {
                class: "overlay-panel",
                onclick: move |e| e.stop_propagation(),

                // Header
                header { class: "overlay-header",
                    div { class: "overlay-heading",
                        div { class: "overlay-glyph overlay-glyph--gold",
                            {icons::coins(20)}
                        }
                        div {
                            h2 { class: "overlay-title", "Shop" }
                            p { class: "overlay-subtitle", "{coins} coins available" }
                        }
                    }
                    button {
                        class: "overlay-close",
                        onclick: handle_close,
                        {icons::x(20)}
                    }
                }

                // Categories
                div { class: "shop-categories",
                    for (category, group_items) in groups {
                        div { key: "{category.as_str()}", class: "shop-category",
                            div { class: "shop-category__header {category_accent(category)}",
                                {category_icon(category, 16)}
                                h3 { class: "shop-category__title", "{section_title(category)}" }
                            }
                            div { class: "shop-category__items",
                                for item in group_items {
                                    ShopItemRow {
                                        key: "{item.id}",
                                        item: item.clone(),
                                        coins: coins,
                                        on_purchase: on_purchase,
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// One item row: tile, name, limits, cost, and the buy button
#[component]
fn ShopItemRow(item: ShopItem, coins: u32, on_purchase: Callback<ItemId, PurchaseOutcome>) -> Element {
    let eligibility = PurchaseEligibility::evaluate(&item, coins);
    let purchase_id = item.id.clone();

    rsx! {
        div { class: "shop-item",
            div { class: "shop-item__glyph {category_accent(item.category)}",
                {category_icon(item.category, 16)}
            }

            div { class: "shop-item__info",
                h4 { class: "shop-item__name", "{item.name}" }
                p { class: "shop-item__description", "{item.description}" }
                if let Some(stock) = item.stock {
                    p { class: "shop-item__meta", "Stock: {stock}" }
                }
                if let Some(owned) = item.owned {
                    if let Some(cap) = item.max_owned {
                        p { class: "shop-item__meta", "Owned: {owned}/{cap}" }
                    } else {
                        p { class: "shop-item__meta", "Owned: {owned}" }
                    }
                }
            }

            div { class: "shop-item__purchase",
                span { class: "shop-item__cost",
                    {icons::coins(12)}
                    "{item.cost}"
                }
                PixelButton {
                    variant: if eligibility.enabled() { ButtonVariant::Default } else { ButtonVariant::Ghost },
                    size: ButtonSize::Small,
                    disabled: !eligibility.enabled(),
                    onclick: move |_| {
                        // Future: surface the outcome as a confirmation toast
                        let _outcome = on_purchase.call(purchase_id.clone());
                    },
                    {eligibility.label()}
                }
            }
        }
    }
}
