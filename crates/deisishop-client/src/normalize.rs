//! Normalization of raw API payloads into [`deisishop_core`] domain types.
//!
//! The shop API is lenient about what it returns, so every field is coerced
//! individually instead of relying on a strict `serde` shape: a record with a
//! missing or malformed field still yields a usable [`Product`] with the
//! documented defaults.

use serde_json::Value;

use deisishop_core::{Product, Rating};

/// Substitute image URL for products without one.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x200?text=Sem+imagem";

/// Normalizes one element of the products array.
///
/// Returns `None` for entries that are not JSON objects; all other
/// malformations collapse to field defaults: price `0.0` (clamped
/// non-negative), empty description/category, [`PLACEHOLDER_IMAGE`], and an
/// all-zero rating.
#[must_use]
pub fn normalize_product(raw: &Value) -> Option<Product> {
    let record = raw.as_object()?;
    Some(Product {
        id: record.get("id").and_then(Value::as_i64).unwrap_or(0),
        title: string_field(record.get("title")),
        price: record
            .get("price")
            .and_then(coerce_money)
            .unwrap_or(0.0)
            .max(0.0),
        description: string_field(record.get("description")),
        category: string_field(record.get("category")),
        image: image_field(record.get("image")),
        rating: normalize_rating(record.get("rating")),
    })
}

/// Normalizes one element of the categories array.
///
/// Strings pass through, numbers and booleans are rendered; anything else
/// (including the empty string) is filtered out.
#[must_use]
pub fn normalize_category(raw: &Value) -> Option<String> {
    let label = match raw {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    if label.is_empty() {
        None
    } else {
        Some(label)
    }
}

/// Interprets a JSON value as a monetary amount.
///
/// Accepts numbers and numeric strings (the API mixes both); anything else
/// is `None` so the caller picks its own default.
#[must_use]
pub fn coerce_money(raw: &Value) -> Option<f64> {
    match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

fn string_field(raw: Option<&Value>) -> String {
    raw.and_then(Value::as_str).unwrap_or_default().to_owned()
}

fn image_field(raw: Option<&Value>) -> String {
    match raw.and_then(Value::as_str) {
        Some(url) if !url.is_empty() => url.to_owned(),
        _ => PLACEHOLDER_IMAGE.to_owned(),
    }
}

fn normalize_rating(raw: Option<&Value>) -> Rating {
    raw.and_then(Value::as_object).map_or_else(Rating::default, |rating| Rating {
        rate: rating.get("rate").and_then(Value::as_f64).unwrap_or(0.0),
        count: rating.get("count").and_then(Value::as_u64).unwrap_or(0),
    })
}
