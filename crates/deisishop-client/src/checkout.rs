//! Checkout submission and outcome classification.
//!
//! [`ShopClient::submit_order`] validates the cart and buyer name before any
//! network traffic, posts the order to `/buy/`, and classifies the result
//! into exactly one [`CheckoutOutcome`]. The cart itself is owned by the
//! application layer, which clears it on [`CheckoutOutcome::Success`] only.

use serde::Serialize;
use serde_json::Value;

use deisishop_core::{format_eur, Cart};

use crate::client::ShopClient;
use crate::normalize::coerce_money;

/// Inline message for a checkout attempt with an empty cart.
pub const MSG_EMPTY_CART: &str = "O cesto está vazio.";
/// Inline message for a checkout attempt without a buyer name.
pub const MSG_MISSING_NAME: &str = "Por favor, indique o seu nome.";
/// Receipt message used when the server does not provide one.
pub const MSG_ORDER_PLACED: &str = "Pedido efetuado com sucesso.";
/// Neutral retry message for transport-level failures.
pub const MSG_CONNECTION_FAILED: &str = "Falha na ligação. Tenta novamente.";

/// The classified result of one checkout submission attempt.
///
/// Exactly one variant is produced per call to
/// [`ShopClient::submit_order`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The server accepted the order.
    Success {
        /// Payment reference, `"—"` when the server omitted it.
        reference: String,
        /// Total formatted as currency (`€18.00`), `"—"` when absent.
        total_display: String,
        message: String,
    },
    /// The server answered with a non-2xx status.
    Rejected { message: String },
    /// A precondition failed; no request was made.
    ValidationFailed { message: String },
    /// The request never reached the server (no connectivity, timeout).
    TransportFailure { message: String },
}

/// Wire shape of the purchase request. `coupon` is always serialized, even
/// when empty, so the server never has to distinguish "no discount" from
/// "field omitted".
#[derive(Debug, Serialize)]
struct OrderRequest<'a> {
    products: Vec<i64>,
    name: &'a str,
    student: bool,
    coupon: &'a str,
}

impl ShopClient {
    /// Submits the cart as a purchase order.
    ///
    /// Preconditions (a non-empty cart and a non-empty trimmed buyer name)
    /// are checked before any network call; a violation yields
    /// [`CheckoutOutcome::ValidationFailed`] without touching the wire. The
    /// response body is parsed leniently regardless of status: a body that
    /// is not JSON counts as an empty structure, never as an error.
    pub async fn submit_order(
        &self,
        cart: &Cart,
        buyer_name: &str,
        student: bool,
        coupon: &str,
    ) -> CheckoutOutcome {
        if cart.is_empty() {
            return CheckoutOutcome::ValidationFailed {
                message: MSG_EMPTY_CART.to_string(),
            };
        }
        let buyer_name = buyer_name.trim();
        if buyer_name.is_empty() {
            return CheckoutOutcome::ValidationFailed {
                message: MSG_MISSING_NAME.to_string(),
            };
        }

        let request = OrderRequest {
            products: cart.order_product_ids(),
            name: buyer_name,
            student,
            coupon,
        };

        let response = self
            .client
            .post(self.endpoint("buy/"))
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&request)
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(error) => {
                tracing::warn!(error = %error, "checkout request failed before reaching the server");
                return CheckoutOutcome::TransportFailure {
                    message: MSG_CONNECTION_FAILED.to_string(),
                };
            }
        };

        let status = response.status();
        let body = response.json::<Value>().await.unwrap_or_default();
        let outcome = classify_response(status.is_success(), status.as_u16(), &body);

        match &outcome {
            CheckoutOutcome::Success { reference, .. } => {
                tracing::info!(reference = %reference, "order accepted");
            }
            CheckoutOutcome::Rejected { message } => {
                tracing::warn!(status = status.as_u16(), message = %message, "order rejected");
            }
            _ => {}
        }

        outcome
    }
}

/// Maps an HTTP status plus a leniently-parsed body to an outcome.
fn classify_response(success: bool, status: u16, body: &Value) -> CheckoutOutcome {
    if success {
        CheckoutOutcome::Success {
            reference: reference_display(body.get("reference")),
            total_display: body
                .get("totalCost")
                .and_then(coerce_money)
                .map_or_else(|| "—".to_string(), format_eur),
            message: body
                .get("message")
                .and_then(Value::as_str)
                .filter(|message| !message.is_empty())
                .unwrap_or(MSG_ORDER_PLACED)
                .to_string(),
        }
    } else {
        CheckoutOutcome::Rejected {
            message: body
                .get("error")
                .and_then(Value::as_str)
                .filter(|message| !message.is_empty())
                .map_or_else(|| format!("Erro inesperado ({status})"), str::to_owned),
        }
    }
}

/// Renders the payment reference, tolerating numeric references.
fn reference_display(raw: Option<&Value>) -> String {
    match raw {
        Some(Value::String(reference)) => reference.clone(),
        Some(Value::Number(reference)) => reference.to_string(),
        _ => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn classify_success_extracts_receipt_fields() {
        let body = json!({
            "reference": "R1",
            "totalCost": 18.0,
            "message": "Obrigado pela compra!"
        });
        let outcome = classify_response(true, 200, &body);
        assert_eq!(
            outcome,
            CheckoutOutcome::Success {
                reference: "R1".to_string(),
                total_display: "€18.00".to_string(),
                message: "Obrigado pela compra!".to_string(),
            }
        );
    }

    #[test]
    fn classify_success_defaults_missing_receipt_fields() {
        let outcome = classify_response(true, 200, &json!({}));
        assert_eq!(
            outcome,
            CheckoutOutcome::Success {
                reference: "—".to_string(),
                total_display: "—".to_string(),
                message: MSG_ORDER_PLACED.to_string(),
            }
        );
    }

    #[test]
    fn classify_success_accepts_string_total_and_numeric_reference() {
        let body = json!({ "reference": 123, "totalCost": "9.5" });
        let outcome = classify_response(true, 200, &body);
        assert_eq!(
            outcome,
            CheckoutOutcome::Success {
                reference: "123".to_string(),
                total_display: "€9.50".to_string(),
                message: MSG_ORDER_PLACED.to_string(),
            }
        );
    }

    #[test]
    fn classify_success_treats_empty_message_as_absent() {
        let outcome = classify_response(true, 200, &json!({ "message": "" }));
        let CheckoutOutcome::Success { message, .. } = outcome else {
            panic!("expected Success");
        };
        assert_eq!(message, MSG_ORDER_PLACED);
    }

    #[test]
    fn classify_rejection_uses_server_error_message() {
        let outcome = classify_response(false, 400, &json!({ "error": "Invalid coupon" }));
        assert_eq!(
            outcome,
            CheckoutOutcome::Rejected {
                message: "Invalid coupon".to_string(),
            }
        );
    }

    #[test]
    fn classify_rejection_falls_back_to_generic_message_with_status() {
        let outcome = classify_response(false, 500, &json!({}));
        assert_eq!(
            outcome,
            CheckoutOutcome::Rejected {
                message: "Erro inesperado (500)".to_string(),
            }
        );
    }

    #[test]
    fn classify_rejection_ignores_empty_error_field() {
        let outcome = classify_response(false, 422, &json!({ "error": "" }));
        assert_eq!(
            outcome,
            CheckoutOutcome::Rejected {
                message: "Erro inesperado (422)".to_string(),
            }
        );
    }

    #[test]
    fn classify_handles_null_body() {
        let outcome = classify_response(true, 200, &Value::Null);
        let CheckoutOutcome::Success { reference, .. } = outcome else {
            panic!("expected Success");
        };
        assert_eq!(reference, "—");
    }
}
