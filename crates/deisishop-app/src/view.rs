use deisishop_client::CheckoutOutcome;
use deisishop_core::{CartItem, Product};

/// Consumer interface of the presentation layer.
///
/// Every callback hands over the complete state for that view region, so
/// implementations clear and rebuild rather than patching; no render is
/// ever left partially updated.
pub trait StorefrontView {
    /// The filtered, sorted product listing changed.
    fn catalog_updated(&mut self, products: &[Product]);

    /// The catalog could not be retrieved at startup.
    fn catalog_unavailable(&mut self);

    /// The category filter options changed.
    fn categories_updated(&mut self, categories: &[String]);

    /// The cart contents or total changed.
    fn cart_updated(&mut self, items: &[CartItem], total: f64);

    /// A checkout attempt finished with the given outcome.
    fn checkout_finished(&mut self, outcome: &CheckoutOutcome);
}
