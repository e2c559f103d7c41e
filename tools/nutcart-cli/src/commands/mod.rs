//! CLI command implementations.

pub mod browse;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod wishlist;

use clap::{Args, Subcommand};

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Match against product title or category.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Exact category name.
    #[arg(short, long)]
    pub category: Option<String>,

    /// Only products on offer.
    #[arg(long)]
    pub offers: bool,

    /// Only products rated 4.0 or higher.
    #[arg(long)]
    pub high_rated: bool,

    /// Only best sellers.
    #[arg(long)]
    pub best_sellers: bool,

    /// Sort order (popularity, price-asc, price-desc, newest).
    #[arg(long, default_value = "popularity")]
    pub sort: String,

    /// Page number.
    #[arg(short, long, default_value = "1")]
    pub page: u32,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product ID.
    pub id: String,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show cart contents.
    Show,
    /// Add a product to the cart.
    Add {
        /// Product ID.
        id: String,
        /// Quantity to add.
        #[arg(short, long, default_value = "1")]
        quantity: u32,
    },
    /// Increase a cart item's quantity by one.
    Inc {
        /// Product ID.
        id: String,
    },
    /// Decrease a cart item's quantity by one, removing it at zero.
    Dec {
        /// Product ID.
        id: String,
    },
    /// Remove a product from the cart.
    Remove {
        /// Product ID.
        id: String,
    },
    /// Empty the cart.
    Clear {
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the wishlist command.
#[derive(Args)]
pub struct WishlistArgs {
    #[command(subcommand)]
    pub command: Option<WishlistCommand>,
}

#[derive(Subcommand)]
pub enum WishlistCommand {
    /// Show liked products.
    Show,
    /// Like or unlike a product.
    Toggle {
        /// Product ID.
        id: String,
    },
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
