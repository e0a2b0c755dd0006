#![allow(non_snake_case)]

mod app;
mod components;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use questforge_core::ShopItem;

/// Shop catalog resolved at startup, either built-in or from --catalog
static CATALOG: OnceLock<Vec<ShopItem>> = OnceLock::new();

/// Starting coin balance, set from command line
static STARTING_COINS: OnceLock<u32> = OnceLock::new();

const DEFAULT_COINS: u32 = 250;

/// Get the shop catalog resolved at startup
pub fn shop_catalog() -> Vec<ShopItem> {
    CATALOG
        .get()
        .cloned()
        .unwrap_or_else(questforge_core::default_items)
}

/// Get the coin balance the session starts with
pub fn starting_coins() -> u32 {
    STARTING_COINS.get().copied().unwrap_or(DEFAULT_COINS)
}

/// QuestForge - Gamified Habit Tracking
#[derive(Parser, Debug)]
#[command(name = "questforge-desktop")]
#[command(about = "QuestForge - pixel-RPG habit board")]
struct Args {
    /// JSON shop catalog replacing the built-in one
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Starting coin balance for this session
    #[arg(long, default_value_t = DEFAULT_COINS)]
    coins: u32,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    // Resolve the catalog; a bad file falls back to the built-in set
    let items = match &args.catalog {
        Some(path) => match questforge_core::load_items(path) {
            Ok(items) => {
                tracing::info!(path = %path.display(), count = items.len(), "Loaded shop catalog");
                items
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Falling back to built-in catalog");
                questforge_core::default_items()
            }
        },
        None => questforge_core::default_items(),
    };

    let _ = CATALOG.set(items);
    let _ = STARTING_COINS.set(args.coins);

    tracing::info!(coins = args.coins, "Starting QuestForge");

    // Configure desktop window: portrait board layout
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("QuestForge")
            .with_inner_size(dioxus::desktop::LogicalSize::new(560.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
