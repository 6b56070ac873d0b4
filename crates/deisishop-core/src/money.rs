/// Renders an amount in euros with two decimal places, e.g. `€18.00`.
///
/// Shared by the cart display and the checkout receipt so both always agree
/// on the format.
#[must_use]
pub fn format_eur(amount: f64) -> String {
    format!("€{amount:.2}")
}
