//! Terminal rendition of the storefront page.
//!
//! [`TerminalView`] fully reprints each region on every notification, the
//! terminal equivalent of clearing and rebuilding a container.

use deisishop_app::StorefrontView;
use deisishop_client::CheckoutOutcome;
use deisishop_core::{format_eur, CartItem, Product};

#[derive(Debug, Default)]
pub(crate) struct TerminalView;

impl TerminalView {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl StorefrontView for TerminalView {
    fn catalog_updated(&mut self, products: &[Product]) {
        println!();
        if products.is_empty() {
            println!("Sem produtos para apresentar.");
            return;
        }
        for product in products {
            println!(
                "#{} {} — {}",
                product.id,
                product.title,
                format_eur(product.price)
            );
            if !product.category.is_empty() {
                println!("    categoria: {}", product.category);
            }
            if !product.description.is_empty() {
                println!("    {}", product.description);
            }
            println!(
                "    ⭐ {} ({})",
                product.rating.rate, product.rating.count
            );
        }
    }

    fn catalog_unavailable(&mut self) {
        println!("Não foi possível obter produtos neste momento.");
    }

    fn categories_updated(&mut self, categories: &[String]) {
        println!();
        println!("Categorias:");
        println!("  (todas as categorias)");
        for category in categories {
            println!("  {category}");
        }
    }

    fn cart_updated(&mut self, items: &[CartItem], total: f64) {
        println!();
        println!("Cesto:");
        if items.is_empty() {
            println!("  (vazio)");
        }
        for item in items {
            println!(
                "  #{} {} — {} × {}",
                item.id,
                item.title,
                format_eur(item.price),
                item.quantity
            );
        }
        println!("Total: {}", format_eur(total));
    }

    fn checkout_finished(&mut self, outcome: &CheckoutOutcome) {
        println!();
        match outcome {
            CheckoutOutcome::Success {
                reference,
                total_display,
                message,
            } => {
                println!("Referência para pagamento: {reference}");
                println!("Total a pagar: {total_display}");
                println!("{message}");
            }
            CheckoutOutcome::Rejected { message }
            | CheckoutOutcome::ValidationFailed { message }
            | CheckoutOutcome::TransportFailure { message } => {
                println!("{message}");
            }
        }
    }
}

/// Swallows every notification; used while replaying startup and filter
/// events for a one-shot listing so only the final state gets printed.
#[derive(Debug, Default)]
pub(crate) struct SilentView;

impl StorefrontView for SilentView {
    fn catalog_updated(&mut self, _products: &[Product]) {}
    fn catalog_unavailable(&mut self) {}
    fn categories_updated(&mut self, _categories: &[String]) {}
    fn cart_updated(&mut self, _items: &[CartItem], _total: f64) {}
    fn checkout_finished(&mut self, _outcome: &CheckoutOutcome) {}
}
