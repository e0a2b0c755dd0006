//! The Board - Main application view.
//!
//! Owns the session's snapshots: the habit list, today's completion set,
//! the coin balance, and the shop catalog. Cards and panels stay
//! presentational; every user action arrives here as a typed intent or a
//! purchase attempt and is answered by mutating the snapshots. Streak,
//! momentum, and reward mathematics belong to the habit engine and are
//! not computed here.

use std::collections::HashSet;

use dioxus::prelude::*;
use questforge_core::{
    Habit, HabitId, HabitIntent, HabitStats, ItemId, Polarity, PurchaseOutcome, ShopItem,
};

use crate::components::{icons, HabitCard, HelpPanel, ShopPanel};

/// One board entry: a habit plus its optional analytics snapshot
type BoardEntry = (Habit, Option<HabitStats>);

/// Session seed shown until a habit engine is wired in
fn seed_board() -> Vec<BoardEntry> {
    let mut run = Habit::new("Morning run", Polarity::Positive);
    run.description = Some("5km before breakfast".to_string());
    run.current_streak = 6;
    run.best_streak = 14;
    run.momentum_multiplier = 1.6;
    run.base_xp = 20;
    run.base_coins = 10;
    run.difficulty_level = 3;

    let mut pages = Habit::new("Read 20 pages", Polarity::Positive);
    pages.current_streak = 0;
    pages.best_streak = 9;
    pages.momentum_multiplier = 1.0;
    pages.base_xp = 15;
    pages.base_coins = 8;
    pages.difficulty_level = 2;

    let mut doomscroll = Habit::new("No doomscrolling", Polarity::Negative);
    doomscroll.description = Some("Phone stays off the nightstand".to_string());
    doomscroll.current_streak = 3;
    doomscroll.best_streak = 11;
    doomscroll.momentum_multiplier = 1.3;
    doomscroll.base_xp = 25;
    doomscroll.base_coins = 12;
    doomscroll.difficulty_level = 4;

    let mut stretch = Habit::new("Evening stretches", Polarity::Positive);
    stretch.current_streak = 1;
    stretch.best_streak = 4;
    stretch.momentum_multiplier = 1.1;
    stretch.base_xp = 10;
    stretch.base_coins = 5;
    stretch.difficulty_level = 1;

    vec![
        (run, Some(HabitStats { success_rate: 87.0 })),
        (pages, Some(HabitStats { success_rate: 54.0 })),
        (doomscroll, Some(HabitStats { success_rate: 71.0 })),
        (stretch, None),
    ]
}

/// Main application view component.
#[component]
pub fn Home() -> Element {
    // Session snapshots
    let mut board: Signal<Vec<BoardEntry>> = use_signal(seed_board);
    let mut completed_today: Signal<HashSet<HabitId>> = use_signal(HashSet::new);
    let mut coins: Signal<u32> = use_signal(crate::starting_coins);
    let mut catalog: Signal<Vec<ShopItem>> = use_signal(crate::shop_catalog);

    // Overlay state
    let mut show_shop: Signal<bool> = use_signal(|| false);
    let mut show_help: Signal<bool> = use_signal(|| false);

    // Intent dispatch from the habit cards
    let on_intent = move |intent: HabitIntent| match intent {
        HabitIntent::Complete { id, value } => {
            tracing::info!(habit = %id, ?value, "Habit completed");
            completed_today.write().insert(id);
        }
        HabitIntent::Miss(id) => {
            tracing::info!(habit = %id, "Habit missed");
            // The engine will also drop momentum; here only the streak resets
            if let Some((habit, _)) = board.write().iter_mut().find(|(h, _)| h.id == id) {
                habit.current_streak = 0;
            }
        }
        HabitIntent::Delete(id) => {
            tracing::info!(habit = %id, "Habit deleted");
            board.write().retain(|(h, _)| h.id != id);
            completed_today.write().remove(&id);
        }
    };

    // Purchase attempts from the shop
    let on_purchase = use_callback(move |item_id: ItemId| {
        let balance = coins();
        let mut items = catalog.write();
        let Some(item) = items.iter_mut().find(|i| i.id == item_id) else {
            tracing::warn!(item = %item_id, "Purchase attempt for unknown item");
            return PurchaseOutcome::rejected("That item is not on sale");
        };
        if !item.purchasable(balance) {
            tracing::info!(item = %item_id, cost = item.cost, balance, "Purchase rejected");
            return PurchaseOutcome::rejected(format!("{} is not available right now", item.name));
        }

        coins.set(balance - item.cost);
        if let Some(stock) = item.stock.as_mut() {
            *stock -= 1;
        }
        item.owned = Some(item.owned.unwrap_or(0) + 1);
        tracing::info!(item = %item_id, cost = item.cost, "Purchase accepted");
        PurchaseOutcome::ok(format!("{} purchased!", item.name))
    });

    let entries = board();
    let done = completed_today();

    rsx! {
        div { class: "app-shell",
            header { class: "app-header",
                h1 { class: "app-title", "QuestForge" }
                div { class: "app-header__actions",
                    span { class: "coin-counter", title: "Coin balance",
                        {icons::coins(14)}
                        "{coins()}"
                    }
                    button {
                        class: "header-btn",
                        onclick: move |_| show_shop.set(true),
                        {icons::store(14)}
                        span { "Shop" }
                    }
                    button {
                        class: "header-btn",
                        onclick: move |_| show_help.set(true),
                        {icons::help_circle(14)}
                        span { "Help" }
                    }
                }
            }

            main { class: "habit-board",
                h2 { class: "board-heading", "Daily Habits" }
                if entries.is_empty() {
                    div { class: "board-empty",
                        p { "No habits on the board." }
                        p { class: "board-empty__hint", "Every quest line starts with a single habit." }
                    }
                } else {
                    div { class: "habit-grid",
                        for (habit, stats) in entries {
                            HabitCard {
                                key: "{habit.id}",
                                habit: habit.clone(),
                                completed_today: done.contains(&habit.id),
                                stats: stats,
                                on_intent: on_intent,
                            }
                        }
                    }
                }
            }

            if show_shop() {
                ShopPanel {
                    coins: coins(),
                    items: catalog(),
                    on_purchase: on_purchase,
                    on_close: move |_| show_shop.set(false),
                }
            }

            if show_help() {
                HelpPanel {
                    on_close: move |_| show_help.set(false),
                }
            }
        }
    }
}
