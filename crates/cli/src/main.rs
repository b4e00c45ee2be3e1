//! FreshKing CLI - Browse the menu, price a cart and place simulated orders.
//!
//! # Usage
//!
//! ```bash
//! # List the menu, optionally filtered
//! fk-cli menu --category bowls --vegan
//!
//! # Price a cart and show its nutrition report (repeat an id for quantity)
//! fk-cli cart bowl-1 bowl-1 smoothie-2
//!
//! # Place a simulated order (PayPal unless card flags are given)
//! fk-cli order --first-name Ada --last-name Lovelace --email ada@example.com \
//!     --address "12 Analytical Way" --city London --zip "N1 9GU" bowl-1 soup-1
//! ```
//!
//! # Commands
//!
//! - `menu` - List menu items
//! - `cart` - Show cart totals and nutrition
//! - `order` - Walk checkout and place an order

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use freshking_core::Category;
use freshking_storefront::CheckoutForm;
use freshking_storefront::config::{LogFormat, StorefrontConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::order::CardArgs;

#[derive(Parser)]
#[command(name = "fk-cli")]
#[command(author, version, about = "FreshKing storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List menu items
    Menu {
        /// Only show one category (e.g. `bowls`, `main-meals`)
        #[arg(short, long)]
        category: Option<Category>,

        /// Only show vegan items
        #[arg(long)]
        vegan: bool,

        /// Only show gluten-free items
        #[arg(long)]
        gluten_free: bool,
    },
    /// Show totals and nutrition for a cart
    Cart {
        /// Item ids to add, in order; repeat an id to add more than one
        #[arg(required = true)]
        ids: Vec<String>,

        /// Print the summary and report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Place a simulated order
    Order {
        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        address: String,

        #[arg(long)]
        city: String,

        #[arg(long)]
        zip: String,

        /// Card number (omit all card flags to pay with PayPal)
        #[arg(long)]
        card_number: Option<String>,

        /// Card expiry as MM/YY
        #[arg(long)]
        expiry: Option<String>,

        #[arg(long)]
        cvv: Option<String>,

        /// Item ids to order
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

/// Filter used when `RUST_LOG` is not set: info level for this binary and
/// the storefront library.
const DEFAULT_LOG_FILTER: &str = concat!(
    env!("CARGO_CRATE_NAME"),
    "=info,freshking_storefront=info"
);

/// Install the tracing subscriber.
fn init_tracing(format: LogFormat) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));

    let json_layer = (format == LogFormat::Json)
        .then(|| tracing_subscriber::fmt::layer().json().flatten_event(true));
    let text_layer = (format == LogFormat::Text)
        .then(|| tracing_subscriber::fmt::layer().without_time().with_target(false));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

fn main() {
    let cli = Cli::parse();

    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(LogFormat::Text);
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };
    init_tracing(config.log_format);

    if let Err(e) = run(cli, &config) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, config: &StorefrontConfig) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = config.load_catalog()?;

    match cli.command {
        Commands::Menu {
            category,
            vegan,
            gluten_free,
        } => {
            let filter = commands::menu::build_filter(category, vegan, gluten_free);
            commands::menu::list(&catalog, config, &filter);
        }
        Commands::Cart { ids, json } => commands::cart::show(&catalog, config, &ids, json)?,
        Commands::Order {
            first_name,
            last_name,
            email,
            address,
            city,
            zip,
            card_number,
            expiry,
            cvv,
            ids,
        } => {
            let payment = CardArgs {
                number: card_number,
                expiry,
                cvv,
            }
            .into_payment();
            let form = CheckoutForm {
                first_name,
                last_name,
                email,
                address,
                city,
                zip_code: zip,
                payment,
            };
            commands::order::place(&catalog, config, form, &ids)?;
        }
    }
    Ok(())
}
