//! Naked Pineapple CLI - Cart and wishlist management.
//!
//! # Usage
//!
//! ```bash
//! # Add two red tees to the cart
//! np-cli cart add tee --name "Pineapple Tee" --price 25.00 \
//!     --image-url https://cdn.example.com/tee.jpg --color red -q 2
//!
//! # Show the cart with formatted totals
//! np-cli cart show
//!
//! # Save a product for later, then move it into the cart
//! np-cli wishlist add hat --name "Sun Hat" --price 15 --image-url https://cdn.example.com/hat.jpg
//! np-cli wishlist move-to-cart hat
//!
//! # Clear the cart after the payment provider confirms the order
//! np-cli checkout complete
//! ```
//!
//! # Commands
//!
//! - `cart` - Add, remove, re-quantify, clear and show cart lines
//! - `wishlist` - Save, remove, clear, show and look up saved products
//! - `checkout complete` - Clear the cart after a confirmed payment
//!
//! Collections are stored under `BASKET_DATA_DIR` (see [`BasketConfig`]).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use naked_pineapple_basket::config::BasketConfig;
use naked_pineapple_core::{Color, ProductId, UnitPrice};
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod output;

#[derive(Parser)]
#[command(name = "np-cli")]
#[command(author, version, about = "Naked Pineapple cart and wishlist tools")]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
    /// Checkout hooks
    Checkout {
        #[command(subcommand)]
        action: CheckoutAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add a product to the cart (merges with an existing line for the same color)
    Add {
        /// Catalog product ID
        product_id: ProductId,

        /// Display name captured for the line
        #[arg(short, long)]
        name: String,

        /// Unit price captured for the line (e.g. 19.99)
        #[arg(short, long)]
        price: UnitPrice,

        /// Image URL captured for the line
        #[arg(short, long)]
        image_url: String,

        /// Selected color variant
        #[arg(short, long)]
        color: Option<Color>,

        /// Colors the product is offered in; when given, --color is checked against them
        #[arg(long, value_delimiter = ',')]
        offered_colors: Vec<Color>,

        /// Number of units to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a product (all colors, or one color with --color)
    Remove {
        product_id: ProductId,

        #[arg(short, long)]
        color: Option<Color>,
    },
    /// Set the quantity of a product; zero or less removes it
    SetQuantity {
        product_id: ProductId,

        #[arg(allow_negative_numbers = true)]
        quantity: i64,

        /// Only change this color variant
        #[arg(short, long)]
        color: Option<Color>,
    },
    /// Remove every line
    Clear,
    /// Show lines and totals
    Show,
}

#[derive(Subcommand)]
enum WishlistAction {
    /// Save a product (no-op if already saved)
    Add {
        product_id: ProductId,

        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        price: UnitPrice,

        #[arg(short, long)]
        image_url: String,
    },
    /// Remove a saved product
    Remove { product_id: ProductId },
    /// Remove every saved product
    Clear,
    /// Show saved products
    Show,
    /// Check whether a product is saved
    Contains { product_id: ProductId },
    /// Move a saved product into the cart
    MoveToCart {
        product_id: ProductId,

        #[arg(short, long)]
        color: Option<Color>,

        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
}

#[derive(Subcommand)]
enum CheckoutAction {
    /// Clear the cart after the payment provider confirmed the order
    Complete,
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &BasketConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

/// Initialize tracing on stderr so stdout only carries command output.
fn init_tracing() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "naked_pineapple_cli=info,naked_pineapple_basket=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();
}

fn main() {
    let cli = Cli::parse();

    let config = match BasketConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing();
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    // Sentry must be initialized before the tracing subscriber
    let sentry_guard = init_sentry(&config);
    init_tracing();
    if sentry_guard.is_some() {
        tracing::info!("Sentry initialized");
    }

    let result = run(cli, &config);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        drop(sentry_guard);
        std::process::exit(1);
    }
}

fn run(cli: Cli, config: &BasketConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut basket = commands::open_basket(config)?;
    let format = output::Format::from_json_flag(cli.json);
    let shows_wishlist = matches!(cli.command, Commands::Wishlist { .. });

    match cli.command {
        Commands::Cart { action } => match action {
            CartAction::Add {
                product_id,
                name,
                price,
                image_url,
                color,
                offered_colors,
                quantity,
            } => {
                let line = commands::cart::LineInput {
                    product_id,
                    name,
                    price,
                    image_url,
                    color,
                    offered_colors,
                    quantity,
                };
                commands::cart::add(&mut basket, line)?;
            }
            CartAction::Remove { product_id, color } => {
                commands::cart::remove(&mut basket, &product_id, color.as_ref());
            }
            CartAction::SetQuantity {
                product_id,
                quantity,
                color,
            } => commands::cart::set_quantity(&mut basket, &product_id, color.as_ref(), quantity),
            CartAction::Clear => basket.cart_mut().clear(),
            CartAction::Show => {}
        },
        Commands::Wishlist { action } => match action {
            WishlistAction::Add {
                product_id,
                name,
                price,
                image_url,
            } => {
                commands::wishlist::add(&mut basket, product_id, name, price, image_url);
            }
            WishlistAction::Remove { product_id } => {
                basket.wishlist_mut().remove_item(&product_id);
            }
            WishlistAction::Clear => basket.wishlist_mut().clear(),
            WishlistAction::Show => {}
            WishlistAction::Contains { product_id } => {
                output::print_contains(basket.wishlist().contains(&product_id), format)?;
                return Ok(());
            }
            WishlistAction::MoveToCart {
                product_id,
                color,
                quantity,
            } => {
                commands::wishlist::move_to_cart(&mut basket, &product_id, color, quantity)?;
                output::print_cart(basket.cart(), config.currency, format)?;
                return Ok(());
            }
        },
        Commands::Checkout { action } => match action {
            CheckoutAction::Complete => {
                commands::checkout::complete(&mut basket);
                return Ok(());
            }
        },
    }

    if shows_wishlist {
        output::print_wishlist(basket.wishlist(), config.currency, format)?;
    } else {
        output::print_cart(basket.cart(), config.currency, format)?;
    }
    Ok(())
}
