#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Result;
use cardcatalog_core::{CatalogConfig, HighlightRule};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Source settings resolved from the command line, set once before launch
static LAUNCH: OnceLock<LaunchOptions> = OnceLock::new();

/// Where the catalog is loaded from.
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    pub config: CatalogConfig,
    /// Local web root; when set, resources are read from disk instead of HTTP
    pub root: Option<PathBuf>,
}

/// Get the launch options (defaults if launched without arguments)
pub fn launch_options() -> LaunchOptions {
    LAUNCH.get().cloned().unwrap_or_default()
}

/// Card Catalog - searchable question/answer cards
#[derive(Parser, Debug)]
#[command(name = "cardcatalog-desktop")]
#[command(about = "Card Catalog - searchable question/answer cards")]
struct Args {
    /// Origin serving /api/cards and /api/categories
    #[arg(short, long)]
    base_url: Option<String>,

    /// Read resources from a local web root instead of HTTP
    #[arg(short, long, conflicts_with = "base_url")]
    root: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Highlight category controls by display label (legacy behaviour)
    #[arg(long)]
    legacy_highlight: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    cardcatalog_core::logging::init(args.verbose);

    let mut config = match &args.config {
        Some(path) => CatalogConfig::load(path)?,
        None => CatalogConfig::default(),
    };
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }
    if args.legacy_highlight {
        config.highlight = HighlightRule::ByLabel;
    }

    match &args.root {
        Some(root) => tracing::info!("Starting with local web root {:?}", root),
        None => tracing::info!("Starting with API at {}", config.base_url),
    }

    let _ = LAUNCH.set(LaunchOptions {
        config,
        root: args.root,
    });

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Card Catalog")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 800.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}
