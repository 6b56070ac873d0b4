//! Catalog filtering and sorting.
//!
//! [`apply_filters`] is the pure core of the listing view: it never touches
//! the catalog cache itself and always produces a fresh, owned selection.

use std::str::FromStr;

use thiserror::Error;

use crate::product::Product;

/// Price sort applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Preserve the filtered (catalog) order.
    #[default]
    Unsorted,
    PriceAscending,
    PriceDescending,
}

/// The given string is not a recognized sort control value.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sort order: {0:?}")]
pub struct ParseSortOrderError(String);

impl FromStr for SortOrder {
    type Err = ParseSortOrderError;

    /// Parses the sort control values used by the presentation layer:
    /// `"asc"`, `"desc"`, and `"none"`/empty for unsorted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "none" => Ok(SortOrder::Unsorted),
            "asc" => Ok(SortOrder::PriceAscending),
            "desc" => Ok(SortOrder::PriceDescending),
            other => Err(ParseSortOrderError(other.to_string())),
        }
    }
}

/// Applies the category filter, then the title search, then the price sort.
///
/// Filters are independent (AND semantics) and both match case-insensitively;
/// the category must match exactly, the search text as a substring of the
/// title. Sorting is stable, so price ties keep catalog order, and
/// [`SortOrder::Unsorted`] preserves the filtered order untouched.
#[must_use]
pub fn apply_filters(
    catalog: &[Product],
    category: &str,
    search: &str,
    order: SortOrder,
) -> Vec<Product> {
    let category = category.trim().to_lowercase();
    let search = search.trim().to_lowercase();

    let mut selected: Vec<Product> = catalog
        .iter()
        .filter(|product| category.is_empty() || product.category.to_lowercase() == category)
        .filter(|product| search.is_empty() || product.title.to_lowercase().contains(&search))
        .cloned()
        .collect();

    match order {
        SortOrder::Unsorted => {}
        SortOrder::PriceAscending => selected.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortOrder::PriceDescending => selected.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }

    selected
}

/// Derives the category list from the catalog when the dedicated endpoint
/// yields nothing: distinct non-empty `category` fields in first-seen order.
#[must_use]
pub fn fallback_categories(catalog: &[Product]) -> Vec<String> {
    // Catalogs are small; a linear scan keeps first-seen order without an
    // index structure.
    let mut seen: Vec<String> = Vec::new();
    for product in catalog {
        if !product.category.is_empty() && !seen.contains(&product.category) {
            seen.push(product.category.clone());
        }
    }
    seen
}
