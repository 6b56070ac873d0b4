//! Application root for the DEISI Shop storefront.
//!
//! [`Storefront`] owns the session state (catalog cache, category list,
//! cart store and the current filter controls) and turns abstract
//! [`UiEvent`]s into component calls, notifying a [`StorefrontView`] after
//! every state change. Nothing here knows about a concrete UI toolkit; the
//! terminal presentation lives in `deisishop-cli`.

pub mod event;
pub mod storefront;
pub mod view;

pub use event::UiEvent;
pub use storefront::Storefront;
pub use view::StorefrontView;
