//! The storefront session: state ownership and event dispatch.

use deisishop_client::{CheckoutOutcome, ShopClient};
use deisishop_core::{apply_filters, fallback_categories, Cart, Product, SortOrder};

use crate::event::UiEvent;
use crate::view::StorefrontView;

/// Owns the per-session state and drives the components from UI events.
///
/// The cart and catalog cache are plain fields here rather than ambient
/// globals; UI handlers reach them through `&mut self`, which also makes
/// overlapping checkout submissions unrepresentable: the second submit
/// cannot start until the first `handle_event` returns.
pub struct Storefront {
    client: ShopClient,
    catalog: Vec<Product>,
    categories: Vec<String>,
    cart: Cart,
    category_filter: String,
    search_text: String,
    sort_order: SortOrder,
}

impl Storefront {
    #[must_use]
    pub fn new(client: ShopClient) -> Self {
        Self {
            client,
            catalog: Vec::new(),
            categories: Vec::new(),
            cart: Cart::new(),
            category_filter: String::new(),
            search_text: String::new(),
            sort_order: SortOrder::Unsorted,
        }
    }

    /// Startup sequence: products first, then categories, then the empty
    /// cart.
    ///
    /// The categories fetch only begins after the products fetch settles,
    /// because the catalog-derived fallback depends on the products already
    /// being cached.
    pub async fn start(&mut self, view: &mut dyn StorefrontView) {
        self.catalog = self.client.fetch_products().await;
        tracing::info!(products = self.catalog.len(), "catalog loaded");
        if self.catalog.is_empty() {
            view.catalog_unavailable();
        } else {
            self.render_catalog(view);
        }

        let mut categories = self.client.fetch_categories().await;
        if categories.is_empty() {
            categories = fallback_categories(&self.catalog);
            tracing::debug!(
                categories = categories.len(),
                "categories derived from catalog"
            );
        }
        self.categories = categories;
        view.categories_updated(&self.categories);

        self.render_cart(view);
    }

    /// Dispatches one user action and notifies the view of whatever changed.
    pub async fn handle_event(&mut self, event: UiEvent, view: &mut dyn StorefrontView) {
        match event {
            UiEvent::CategorySelected(category) => {
                self.category_filter = category;
                self.render_catalog(view);
            }
            UiEvent::SortChanged(order) => {
                self.sort_order = order;
                self.render_catalog(view);
            }
            UiEvent::SearchChanged(text) => {
                self.search_text = text;
                self.render_catalog(view);
            }
            UiEvent::AddToCart(id) => {
                // Unknown ids are a no-op: the presentation can only offer
                // ids from the rendered catalog, but a stale or mistyped id
                // must not corrupt the cart.
                if let Some(product) = self.catalog.iter().find(|p| p.id == id).cloned() {
                    self.cart.add(&product);
                    self.render_cart(view);
                }
            }
            UiEvent::RemoveFromCart(id) => {
                self.cart.remove(id);
                self.render_cart(view);
            }
            UiEvent::SubmitCheckout {
                name,
                student,
                coupon,
            } => {
                let outcome = self
                    .client
                    .submit_order(&self.cart, &name, student, &coupon)
                    .await;
                if matches!(outcome, CheckoutOutcome::Success { .. }) {
                    self.cart.clear();
                    self.render_cart(view);
                }
                view.checkout_finished(&outcome);
            }
        }
    }

    /// The current filtered listing, recomputed from the cached catalog and
    /// the current control values.
    #[must_use]
    pub fn filtered_catalog(&self) -> Vec<Product> {
        apply_filters(
            &self.catalog,
            &self.category_filter,
            &self.search_text,
            self.sort_order,
        )
    }

    #[must_use]
    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    fn render_catalog(&self, view: &mut dyn StorefrontView) {
        view.catalog_updated(&self.filtered_catalog());
    }

    fn render_cart(&self, view: &mut dyn StorefrontView) {
        view.cart_updated(self.cart.items(), self.cart.total());
    }
}
