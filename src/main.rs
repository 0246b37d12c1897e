//! Headless catalog browser.
//!
//! Loads the catalog once, applies the filters given on the command line and
//! prints the visible products (or one product's details).

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use catalog_browser::config::{Config, ConfigStore};
use catalog_browser::logging::init_tracing;
use catalog_browser::store::filters::SortBy;
use catalog_browser::{LoadOutcome, Product, Session};

#[derive(Parser, Debug)]
#[command(name = "catalog-browser")]
#[command(about = "Browse a remote product catalog from the terminal")]
struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the catalog base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Case-insensitive title search
    #[arg(short, long, default_value = "")]
    search: String,

    /// Exact category label, or "all"
    #[arg(short, long, default_value = "all")]
    category: String,

    /// default, price-low or price-high
    #[arg(long, default_value = "default")]
    sort: SortBy,

    /// Show one product's details instead of the list
    #[arg(short, long)]
    product: Option<String>,

    /// Print the category labels
    #[arg(long)]
    categories: bool,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = ConfigStore::open(path.clone())
        .with_context(|| format!("loading config from {}", path.display()))?;
    if let Some(base_url) = &cli.base_url {
        config.update(|c| c.catalog.base_url = base_url.clone());
        config.get().validate()?;
    }

    let session = Session::from_config(&config.get());
    run(cli, &session).await
}

/// Runs the requested mode against `session`. A failed load yields a
/// non-zero exit code after printing its message.
async fn run(cli: Cli, session: &Session) -> Result<ExitCode> {
    if let Some(id) = &cli.product {
        return show_product(session, id, cli.json).await;
    }

    if cli.categories {
        if let LoadOutcome::Rejected(e) = session.load_categories().await {
            eprintln!("{}", e);
            return Ok(ExitCode::FAILURE);
        }
        let categories = session.catalog().categories;
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&categories)?);
        } else {
            for category in categories {
                println!("{}", category);
            }
        }
        return Ok(ExitCode::SUCCESS);
    }

    if let LoadOutcome::Rejected(e) = session.load_products().await {
        eprintln!("{}", e);
        return Ok(ExitCode::FAILURE);
    }

    session.set_search_query(cli.search);
    session.set_selected_category(cli.category);
    session.set_sort_by(cli.sort);

    let visible = session.visible_products();
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
    } else {
        for product in &visible {
            println!("{}", summary_line(product));
        }
        eprintln!("{} of {} products", visible.len(), session.catalog().items.len());
    }

    Ok(ExitCode::SUCCESS)
}

async fn show_product(session: &Session, id: &str, json: bool) -> Result<ExitCode> {
    session.clear_current_product();
    if let LoadOutcome::Rejected(e) = session.load_product_by_id(id).await {
        eprintln!("{}", e);
        return Ok(ExitCode::FAILURE);
    }

    let product = session
        .catalog()
        .current_product
        .context("product load finished without a product")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&product)?);
    } else {
        println!("{}", summary_line(&product));
        println!(
            "  rating {:.1} ({} reviews)",
            product.rating.rate, product.rating.count
        );
        println!("  {}", product.image);
        println!();
        println!("{}", product.description);
    }
    Ok(ExitCode::SUCCESS)
}

fn summary_line(product: &Product) -> String {
    format!(
        "#{:<4} {:>9.2}  [{}] {}",
        product.id, product.price, product.category, product.title
    )
}
