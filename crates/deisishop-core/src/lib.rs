//! Domain types and pure logic for the DEISI Shop storefront.
//!
//! Everything in this crate is synchronous and side-effect-free apart from
//! mutations of the [`Cart`] store itself. Network I/O lives in
//! `deisishop-client`; event wiring lives in `deisishop-app`.

pub mod cart;
pub mod config;
pub mod filter;
pub mod money;
pub mod product;

pub use cart::{Cart, CartItem};
pub use config::{load_shop_config, load_shop_config_from_env, ConfigError, ShopConfig};
pub use filter::{apply_filters, fallback_categories, ParseSortOrderError, SortOrder};
pub use money::format_eur;
pub use product::{Product, Rating};
