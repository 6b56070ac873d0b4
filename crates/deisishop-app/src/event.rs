use deisishop_core::SortOrder;

/// A user action produced by the presentation layer.
///
/// These mirror the storefront's controls one-to-one: the three filter
/// inputs, the two cart buttons, and the checkout form.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    CategorySelected(String),
    SortChanged(SortOrder),
    SearchChanged(String),
    /// Add one unit of the catalog product with this id to the cart.
    AddToCart(i64),
    /// Remove the cart line with this id.
    RemoveFromCart(i64),
    SubmitCheckout {
        name: String,
        student: bool,
        coupon: String,
    },
}
