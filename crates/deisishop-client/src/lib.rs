//! HTTP layer for the DEISI Shop API.
//!
//! [`ShopClient`] wraps `reqwest` with the shop's degradation contract: the
//! two read endpoints (`/products/`, `/categories/`) never surface errors to
//! callers, any failure collapses to an empty list, while checkout
//! submission classifies every attempt into exactly one [`CheckoutOutcome`].

pub mod checkout;
pub mod client;
pub mod error;
pub mod normalize;

pub use checkout::CheckoutOutcome;
pub use client::ShopClient;
pub use error::ClientError;
pub use normalize::PLACEHOLDER_IMAGE;
