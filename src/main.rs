use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::PathBuf;
use wind_prices::{BrowserConfig, PriceMode, SortMode, run_gui};

#[derive(Debug, Parser)]
#[command(name = "wind-prices", version)]
#[command(about = "Browse the WIND server price list and economic code")]
struct Args {
    /// Catalog document to open (`.json`, `.json5` or `.json.gz`)
    catalog: Option<PathBuf>,

    /// JSON5 config file with viewer defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Rows added per "show more"
    #[arg(long)]
    page_step: Option<usize>,

    /// Initial sort order
    #[arg(long, value_enum)]
    sort: Option<SortMode>,

    /// Show unit prices instead of per-trade-unit prices
    #[arg(long)]
    unit_prices: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => BrowserConfig::load_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => BrowserConfig::default(),
    };
    if let Some(step) = args.page_step {
        config.page_step = step;
    }
    if let Some(sort) = args.sort {
        config.default_sort = sort;
    }
    if args.unit_prices {
        config.default_price_mode = PriceMode::Unit;
    }
    if args.catalog.is_some() {
        config.catalog_path = args.catalog.clone();
    }
    config.validate().context("invalid viewer settings")?;
    log::debug!("starting with {config:?}");

    run_gui(config).map_err(|e| anyhow!("GUI error: {e}"))
}
