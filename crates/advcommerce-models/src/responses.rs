//! Response messages received from the commerce API.
//!
//! Every response unions in the common envelope: signed renewal and
//! transaction payloads in JWS Compact Serialization, opaque at this
//! layer. Verification of those signatures happens elsewhere.

use advcommerce_schema::{Message, Shape};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::envelope::response_envelope;

/// Outcome of a one-time charge creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OneTimeChargeCreateResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signed_renewal_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signed_transaction_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<String>,
}

impl Message for OneTimeChargeCreateResponse {
    const NAME: &'static str = "OneTimeChargeCreateResponse";

    fn shape() -> &'static Shape {
        static SHAPE: Lazy<Shape> = Lazy::new(|| {
            Shape::builder("OneTimeChargeCreateResponse")
                .string("transactionId")
                .string("purchaseDate")
                .extend(response_envelope())
                .build()
        });
        &SHAPE
    }
}

/// Outcome of a refund request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestRefundResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signed_renewal_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signed_transaction_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_id: Option<String>,
}

impl Message for RequestRefundResponse {
    const NAME: &'static str = "RequestRefundResponse";

    fn shape() -> &'static Shape {
        static SHAPE: Lazy<Shape> = Lazy::new(|| {
            Shape::builder("RequestRefundResponse")
                .string("refundStatus")
                .string("refundId")
                .extend(response_envelope())
                .build()
        });
        &SHAPE
    }
}

/// Outcome of a subscription cancellation.
///
/// `effective` is a plain string here, not the [`Effective`]
/// enumeration, reproduced as the vendor publishes it.
///
/// [`Effective`]: crate::enums::Effective
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionCancelResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signed_renewal_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signed_transaction_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective: Option<String>,
}

impl Message for SubscriptionCancelResponse {
    const NAME: &'static str = "SubscriptionCancelResponse";

    fn shape() -> &'static Shape {
        static SHAPE: Lazy<Shape> = Lazy::new(|| {
            Shape::builder("SubscriptionCancelResponse")
                .string("cancellationDate")
                .string("effective")
                .extend(response_envelope())
                .build()
        });
        &SHAPE
    }
}

/// Outcome of a subscription metadata change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionChangeMetadataResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signed_renewal_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signed_transaction_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_date: Option<String>,
}

impl Message for SubscriptionChangeMetadataResponse {
    const NAME: &'static str = "SubscriptionChangeMetadataResponse";

    fn shape() -> &'static Shape {
        static SHAPE: Lazy<Shape> = Lazy::new(|| {
            Shape::builder("SubscriptionChangeMetadataResponse")
                .string("changeDate")
                .extend(response_envelope())
                .build()
        });
        &SHAPE
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn responses_union_in_the_envelope() {
        let payload = json!({
            "signedRenewalInfo": "eyJhbGciOiJFUzI1NiJ9.renewal.sig",
            "signedTransactionInfo": "eyJhbGciOiJFUzI1NiJ9.txn.sig",
            "transactionId": "200001987654321",
            "purchaseDate": "2026-08-27T10:00:00Z"
        });
        assert!(OneTimeChargeCreateResponse::validate(&payload));

        let mut bad = payload;
        bad["signedTransactionInfo"] = json!(false);
        assert!(!OneTimeChargeCreateResponse::validate(&bad));
    }

    #[test]
    fn empty_responses_are_valid() {
        assert!(OneTimeChargeCreateResponse::validate(&json!({})));
        assert!(RequestRefundResponse::validate(&json!({})));
        assert!(SubscriptionCancelResponse::validate(&json!({})));
        assert!(SubscriptionChangeMetadataResponse::validate(&json!({})));
    }

    #[test]
    fn cancel_response_effective_is_unconstrained_text() {
        // Not the closed enum: any string passes on this type.
        assert!(SubscriptionCancelResponse::validate(&json!({
            "cancellationDate": "2026-08-27T10:00:00Z",
            "effective": "whenever"
        })));
        assert!(!SubscriptionCancelResponse::validate(&json!({ "effective": 1 })));
    }

    #[test]
    fn refund_response_decodes_typed() {
        let decoded = RequestRefundResponse::decode(json!({
            "refundStatus": "GRANTED",
            "refundId": "rf-0042"
        }))
        .expect("should decode");
        assert_eq!(decoded.refund_status.as_deref(), Some("GRANTED"));
        assert_eq!(decoded.refund_id.as_deref(), Some("rf-0042"));
    }
}
