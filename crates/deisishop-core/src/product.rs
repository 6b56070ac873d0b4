use serde::{Deserialize, Serialize};

/// A catalog product, normalized at fetch time so every field carries a
/// defined, type-safe default.
///
/// Products are immutable once fetched: the catalog cache is read-only for
/// the lifetime of the session, and cart items snapshot the fields they need
/// at add time instead of holding references back into the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    /// Unit price in euros. Non-negative by construction.
    ///
    /// Boundary note: this is a fetch-time `f64` convenience type; display
    /// goes through [`crate::money::format_eur`], which rounds to cents.
    pub price: f64,
    pub description: String,
    /// Category label as the API reports it. Empty when the API omitted it.
    pub category: String,
    /// Image URL. Normalization substitutes a placeholder when absent.
    pub image: String,
    pub rating: Rating,
}

/// Aggregate customer rating attached to a [`Product`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u64,
}

impl Rating {
    /// Returns `true` when no customer has rated the product yet.
    #[must_use]
    pub fn is_unrated(&self) -> bool {
        self.count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_default_is_unrated() {
        let rating = Rating::default();
        assert!(rating.is_unrated());
        assert_eq!(rating.rate, 0.0);
        assert_eq!(rating.count, 0);
    }

    #[test]
    fn rating_with_count_is_rated() {
        let rating = Rating {
            rate: 4.5,
            count: 120,
        };
        assert!(!rating.is_unrated());
    }

    #[test]
    fn serde_roundtrip_product() {
        let product = Product {
            id: 7,
            title: "Caneca DEISI".to_string(),
            price: 9.5,
            description: "Caneca de cerâmica".to_string(),
            category: "merchandising".to_string(),
            image: "https://example.test/caneca.png".to_string(),
            rating: Rating {
                rate: 4.1,
                count: 33,
            },
        };
        let json = serde_json::to_string(&product).expect("serialization failed");
        let decoded: Product = serde_json::from_str(&json).expect("deserialization failed");
        assert_eq!(decoded, product);
    }
}
