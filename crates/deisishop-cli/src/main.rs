mod session;
mod view;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use deisishop_app::{Storefront, StorefrontView as _, UiEvent};
use deisishop_client::ShopClient;
use deisishop_core::SortOrder;

use crate::view::{SilentView, TerminalView};

#[derive(Debug, Parser)]
#[command(name = "deisishop")]
#[command(about = "Terminal storefront for the DEISI Shop API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// One-shot filtered product listing
    Browse {
        /// Category filter (empty lists every category)
        #[arg(long, default_value = "")]
        category: String,
        /// Case-insensitive title search
        #[arg(long, default_value = "")]
        search: String,
        /// Price sort: asc, desc or none
        #[arg(long, default_value = "none")]
        sort: String,
    },
    /// Interactive storefront session
    Shop,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = deisishop_core::load_shop_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    let client = ShopClient::new(&config)?;
    let mut storefront = Storefront::new(client);

    match cli.command {
        Some(Commands::Shop) => {
            let mut view = TerminalView::new();
            session::run(&mut storefront, &mut view).await?;
        }
        Some(Commands::Browse {
            category,
            search,
            sort,
        }) => {
            let order: SortOrder = sort.parse()?;
            browse(&mut storefront, category, search, order).await;
        }
        None => {
            browse(
                &mut storefront,
                String::new(),
                String::new(),
                SortOrder::Unsorted,
            )
            .await;
        }
    }
    Ok(())
}

/// Loads the catalog, applies the requested filters quietly, and prints the
/// final listing once.
async fn browse(storefront: &mut Storefront, category: String, search: String, order: SortOrder) {
    let mut quiet = SilentView;
    println!("A carregar produtos...");
    storefront.start(&mut quiet).await;

    let mut view = TerminalView::new();
    if storefront.catalog().is_empty() {
        view.catalog_unavailable();
        return;
    }

    storefront
        .handle_event(UiEvent::CategorySelected(category), &mut quiet)
        .await;
    storefront
        .handle_event(UiEvent::SearchChanged(search), &mut quiet)
        .await;
    storefront
        .handle_event(UiEvent::SortChanged(order), &mut quiet)
        .await;

    view.catalog_updated(&storefront.filtered_catalog());
}
