mod browse;
mod session;

use cartzy_core::{CartOp, Catalog, Language, FEATURED_DEALS};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::session::DeliveryArgs;

#[derive(Debug, Parser)]
#[command(name = "cartzy-cli")]
#[command(about = "Cartzy storefront command line interface")]
struct Cli {
    /// Emit JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List catalog products, optionally filtered
    Products {
        /// Case-insensitive text matched against name, description and tags
        #[arg(long)]
        search: Option<String>,

        /// Exact category name; "All" disables the filter
        #[arg(long)]
        category: Option<String>,
    },
    /// Show a single product
    Product {
        /// Catalog product id
        id: u32,
    },
    /// Show flash deals and regular offers
    Offers,
    /// Show the featured deals from the home page
    Deals {
        /// Number of discounted products to show
        #[arg(long, default_value_t = FEATURED_DEALS)]
        limit: usize,
    },
    /// Replay cart operations and print the resulting cart
    Cart {
        /// Operations: add:<id>, set:<id>=<qty>, remove:<id>, clear
        #[arg(required = true)]
        ops: Vec<CartOp>,
    },
    /// Replay cart operations, then place a mock order
    Checkout {
        #[command(flatten)]
        delivery: DeliveryArgs,

        /// Operations: add:<id>, set:<id>=<qty>, remove:<id>, clear
        #[arg(required = true)]
        ops: Vec<CartOp>,
    },
    /// Look up a UI string
    Translate {
        key: String,

        /// Language code (en, hi); defaults to CARTZY_DEFAULT_LANGUAGE
        #[arg(long)]
        lang: Option<Language>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = cartzy_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("cartzy-cli ready; run with --help for commands");
        return Ok(());
    };

    let load_catalog = || Catalog::load(&config.catalog_path);

    match command {
        Commands::Products { search, category } => browse::list_products(
            &load_catalog()?,
            search.as_deref(),
            category.as_deref(),
            cli.json,
        )?,
        Commands::Product { id } => browse::show_product(&load_catalog()?, id, cli.json)?,
        Commands::Offers => browse::show_offers(&load_catalog()?, cli.json)?,
        Commands::Deals { limit } => browse::show_deals(&load_catalog()?, limit, cli.json)?,
        Commands::Cart { ops } => session::run_cart(&load_catalog()?, &ops, cli.json)?,
        Commands::Checkout { delivery, ops } => {
            session::run_checkout(
                &load_catalog()?,
                &ops,
                &delivery.into(),
                config.checkout_delay_ms,
                cli.json,
            )
            .await?;
        }
        Commands::Translate { key, lang } => {
            let language = lang.unwrap_or(config.default_language);
            println!("{}", cartzy_core::translate(language, &key));
        }
    }

    Ok(())
}
