//! Card Catalog CLI
//!
//! Thin wrapper around cardcatalog-core for command-line usage. Every
//! command boots the catalog the same way the desktop app does, applies the
//! requested filters through the controller and prints the resulting frame.
//!
//! ## Usage
//!
//! ```bash
//! # List every card from the default API
//! cardcatalog list
//!
//! # Narrow by category and search term
//! cardcatalog list --category Rust --search borrow
//!
//! # Show the selectable categories
//! cardcatalog categories
//!
//! # Read from a local web root and print the page markup
//! cardcatalog --root ./site render --search lifetimes
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use cardcatalog_core::render::EMPTY_STATE_TEXT;
use cardcatalog_core::{
    fetcher_from, load_catalog, AnswerBlock, CatalogConfig, CatalogController, HighlightRule,
    RenderFrame, LOAD_FAILURE_TEXT,
};
use clap::{Args, Parser, Subcommand};

/// Card Catalog - searchable question/answer cards
#[derive(Parser)]
#[command(name = "cardcatalog")]
#[command(version = "0.1.0")]
#[command(about = "Card Catalog - searchable question/answer cards")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Origin serving /api/cards and /api/categories
    #[arg(short, long, global = true)]
    base_url: Option<String>,

    /// Read resources from a local web root instead of HTTP
    #[arg(short, long, global = true, conflicts_with = "base_url")]
    root: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Highlight category controls by display label (legacy behaviour)
    #[arg(long, global = true)]
    legacy_highlight: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the visible cards
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// Print answers under each question
        #[arg(short, long)]
        answers: bool,
    },

    /// List the selectable categories
    Categories,

    /// Print the rendered page as HTML
    Render {
        #[command(flatten)]
        filters: FilterArgs,
    },
}

#[derive(Args)]
struct FilterArgs {
    /// Only show cards in this category (use "" for uncategorized)
    #[arg(long)]
    category: Option<String>,

    /// Case-insensitive search over question, answer and category
    #[arg(short, long)]
    search: Option<String>,
}

fn resolve_config(cli: &Cli) -> Result<CatalogConfig> {
    let mut config = match &cli.config {
        Some(path) => CatalogConfig::load(path)?,
        None => CatalogConfig::default(),
    };
    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }
    if cli.legacy_highlight {
        config.highlight = HighlightRule::ByLabel;
    }
    Ok(config)
}

fn apply_filters(controller: &mut CatalogController, filters: &FilterArgs) {
    if let Some(category) = &filters.category {
        controller.select_category(category.trim());
    }
    if let Some(search) = &filters.search {
        controller.set_search_term(search);
    }
}

fn print_cards(frame: &RenderFrame, answers: bool) {
    println!("{}", frame.count_readout());
    if frame.is_empty() {
        println!("{}", EMPTY_STATE_TEXT);
        return;
    }

    for card in &frame.cards {
        println!("[{}] {}", card.category_label, card.question);
        if let Some(tags) = &card.tags {
            println!("  tags: {}", tags);
        }
        if answers {
            for block in &card.answer {
                match block {
                    AnswerBlock::Paragraph(text) => println!("  {}", text),
                    AnswerBlock::Code(code) => {
                        for line in code.lines() {
                            println!("  | {}", line);
                        }
                    }
                }
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    cardcatalog_core::logging::init(cli.verbose);

    let config = resolve_config(&cli)?;
    let fetcher = fetcher_from(cli.root.as_deref(), &config.base_url)?;

    let mut controller = CatalogController::new(config.highlight);
    match load_catalog(fetcher, &config).await {
        Ok(catalog) => controller.install(catalog),
        Err(e) => {
            tracing::error!("Catalog boot failed: {}", e);
            controller.fail_boot();
            eprintln!("{}", LOAD_FAILURE_TEXT);
            return Ok(ExitCode::FAILURE);
        }
    }

    match &cli.command {
        Commands::List { filters, answers } => {
            apply_filters(&mut controller, filters);
            print_cards(controller.frame(), *answers);
        }

        Commands::Categories => {
            for control in controller.frame().categories.iter().skip(1) {
                println!("{}", control.label);
            }
        }

        Commands::Render { filters } => {
            apply_filters(&mut controller, filters);
            println!("{}", controller.frame().to_html());
        }
    }

    Ok(ExitCode::SUCCESS)
}
