//! Request messages your app sends to the commerce API.
//!
//! Three variants are discriminated: their `operation` and `version`
//! fields are pinned to constants and a payload that carries anything
//! else is not that variant. The remaining requests declare
//! `operation`/`version` as plain optional strings; the vendor schema
//! is not uniformly strict here, and the catalog reproduces each type
//! as published rather than normalizing.

use advcommerce_schema::{Message, Shape};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::enums::{Effective, RefundReason, RefundType, EFFECTIVE, REFUND_REASON, REFUND_TYPE};
use crate::envelope::{request_envelope, RequestInfo};
use crate::items::{
    OneTimeChargeItem, SubscriptionChangeMetadataDescriptors, SubscriptionCreateItem,
    SubscriptionModifyPeriodChange, SubscriptionReactivateItem,
};

pub const OP_CREATE_ONE_TIME_CHARGE: &str = "CREATE_ONE_TIME_CHARGE";
pub const ONE_TIME_CHARGE_CREATE_VERSION: &str = "1";

pub const OP_SUBSCRIPTION_MODIFY: &str = "SUBSCRIPTION_MODIFY";
pub const SUBSCRIPTION_MODIFY_VERSION: &str = "1.0";

pub const OP_SUBSCRIPTION_REACTIVATE: &str = "SUBSCRIPTION_REACTIVATE";
pub const SUBSCRIPTION_REACTIVATE_VERSION: &str = "1.0";

/// Purchase of a one-time-charge product. Discriminated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OneTimeChargeCreateRequest {
    pub operation: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_info: Option<RequestInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<OneTimeChargeItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storefront: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_code: Option<String>,
}

impl Default for OneTimeChargeCreateRequest {
    fn default() -> Self {
        Self {
            operation: OP_CREATE_ONE_TIME_CHARGE.to_string(),
            version: ONE_TIME_CHARGE_CREATE_VERSION.to_string(),
            request_info: None,
            currency: None,
            item: None,
            storefront: None,
            tax_code: None,
        }
    }
}

impl Message for OneTimeChargeCreateRequest {
    const NAME: &'static str = "OneTimeChargeCreateRequest";

    fn shape() -> &'static Shape {
        static SHAPE: Lazy<Shape> = Lazy::new(|| {
            Shape::builder("OneTimeChargeCreateRequest")
                .literal("operation", OP_CREATE_ONE_TIME_CHARGE)
                .literal("version", ONE_TIME_CHARGE_CREATE_VERSION)
                .string("currency")
                .object("item", OneTimeChargeItem::shape)
                .string("storefront")
                .string("taxCode")
                .extend(request_envelope())
                .build()
        });
        &SHAPE
    }
}

/// Creation of a new subscription.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionCreateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_info: Option<RequestInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<SubscriptionCreateItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storefront: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_code: Option<String>,
}

impl Message for SubscriptionCreateRequest {
    const NAME: &'static str = "SubscriptionCreateRequest";

    fn shape() -> &'static Shape {
        static SHAPE: Lazy<Shape> = Lazy::new(|| {
            Shape::builder("SubscriptionCreateRequest")
                .string("operation")
                .string("version")
                .string("currency")
                .object("item", SubscriptionCreateItem::shape)
                .string("storefront")
                .string("taxCode")
                .extend(request_envelope())
                .build()
        });
        &SHAPE
    }
}

/// Migration of an existing subscription into this schema family.
/// Shares most fields with [`SubscriptionCreateRequest`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionMigrateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_info: Option<RequestInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<SubscriptionCreateItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storefront: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_transaction_id: Option<String>,
}

impl Message for SubscriptionMigrateRequest {
    const NAME: &'static str = "SubscriptionMigrateRequest";

    fn shape() -> &'static Shape {
        static SHAPE: Lazy<Shape> = Lazy::new(|| {
            Shape::builder("SubscriptionMigrateRequest")
                .string("operation")
                .string("version")
                .string("currency")
                .object("item", SubscriptionCreateItem::shape)
                .string("storefront")
                .string("taxCode")
                .string("originalTransactionId")
                .extend(request_envelope())
                .build()
        });
        &SHAPE
    }
}

/// In-app modification of a live subscription. Discriminated; carries
/// an array of period changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionModifyInAppRequest {
    pub operation: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_info: Option<RequestInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifications: Option<Vec<SubscriptionModifyPeriodChange>>,
}

impl Default for SubscriptionModifyInAppRequest {
    fn default() -> Self {
        Self {
            operation: OP_SUBSCRIPTION_MODIFY.to_string(),
            version: SUBSCRIPTION_MODIFY_VERSION.to_string(),
            request_info: None,
            modifications: None,
        }
    }
}

impl Message for SubscriptionModifyInAppRequest {
    const NAME: &'static str = "SubscriptionModifyInAppRequest";

    fn shape() -> &'static Shape {
        static SHAPE: Lazy<Shape> = Lazy::new(|| {
            Shape::builder("SubscriptionModifyInAppRequest")
                .literal("operation", OP_SUBSCRIPTION_MODIFY)
                .literal("version", SUBSCRIPTION_MODIFY_VERSION)
                .array("modifications", SubscriptionModifyPeriodChange::shape)
                .extend(request_envelope())
                .build()
        });
        &SHAPE
    }
}

/// In-app reactivation of a lapsed subscription. Discriminated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionReactivateInAppRequest {
    pub operation: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_info: Option<RequestInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<SubscriptionReactivateItem>,
}

impl Default for SubscriptionReactivateInAppRequest {
    fn default() -> Self {
        Self {
            operation: OP_SUBSCRIPTION_REACTIVATE.to_string(),
            version: SUBSCRIPTION_REACTIVATE_VERSION.to_string(),
            request_info: None,
            item: None,
        }
    }
}

impl Message for SubscriptionReactivateInAppRequest {
    const NAME: &'static str = "SubscriptionReactivateInAppRequest";

    fn shape() -> &'static Shape {
        static SHAPE: Lazy<Shape> = Lazy::new(|| {
            Shape::builder("SubscriptionReactivateInAppRequest")
                .literal("operation", OP_SUBSCRIPTION_REACTIVATE)
                .literal("version", SUBSCRIPTION_REACTIVATE_VERSION)
                .object("item", SubscriptionReactivateItem::shape)
                .extend(request_envelope())
                .build()
        });
        &SHAPE
    }
}

/// Cancellation of a subscription.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionCancelRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_info: Option<RequestInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective: Option<Effective>,
}

impl Message for SubscriptionCancelRequest {
    const NAME: &'static str = "SubscriptionCancelRequest";

    fn shape() -> &'static Shape {
        static SHAPE: Lazy<Shape> = Lazy::new(|| {
            Shape::builder("SubscriptionCancelRequest")
                .string("operation")
                .string("version")
                .enumeration("effective", &EFFECTIVE)
                .extend(request_envelope())
                .build()
        });
        &SHAPE
    }
}

/// Revocation of a subscription: cancellation plus a refund of the
/// remaining term.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRevokeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_info: Option<RequestInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective: Option<Effective>,
}

impl Message for SubscriptionRevokeRequest {
    const NAME: &'static str = "SubscriptionRevokeRequest";

    fn shape() -> &'static Shape {
        static SHAPE: Lazy<Shape> = Lazy::new(|| {
            Shape::builder("SubscriptionRevokeRequest")
                .string("operation")
                .string("version")
                .enumeration("effective", &EFFECTIVE)
                .extend(request_envelope())
                .build()
        });
        &SHAPE
    }
}

/// Price change for a subscription.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPriceChangeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_info: Option<RequestInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective: Option<Effective>,
}

impl Message for SubscriptionPriceChangeRequest {
    const NAME: &'static str = "SubscriptionPriceChangeRequest";

    fn shape() -> &'static Shape {
        static SHAPE: Lazy<Shape> = Lazy::new(|| {
            Shape::builder("SubscriptionPriceChangeRequest")
                .string("operation")
                .string("version")
                .number("newPrice")
                .string("currency")
                .enumeration("effective", &EFFECTIVE)
                .extend(request_envelope())
                .build()
        });
        &SHAPE
    }
}

/// Change of customer-facing subscription metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionChangeMetadataRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_info: Option<RequestInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptors: Option<SubscriptionChangeMetadataDescriptors>,
}

impl Message for SubscriptionChangeMetadataRequest {
    const NAME: &'static str = "SubscriptionChangeMetadataRequest";

    fn shape() -> &'static Shape {
        static SHAPE: Lazy<Shape> = Lazy::new(|| {
            Shape::builder("SubscriptionChangeMetadataRequest")
                .string("operation")
                .string("version")
                .object("descriptors", SubscriptionChangeMetadataDescriptors::shape)
                .extend(request_envelope())
                .build()
        });
        &SHAPE
    }
}

/// A refund request for a previous transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestRefundRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_info: Option<RequestInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_type: Option<RefundType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_reason: Option<RefundReason>,
}

impl Message for RequestRefundRequest {
    const NAME: &'static str = "RequestRefundRequest";

    fn shape() -> &'static Shape {
        static SHAPE: Lazy<Shape> = Lazy::new(|| {
            Shape::builder("RequestRefundRequest")
                .string("operation")
                .string("version")
                .enumeration("refundType", &REFUND_TYPE)
                .enumeration("refundReason", &REFUND_REASON)
                .extend(request_envelope())
                .build()
        });
        &SHAPE
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn one_time_charge_payload() -> serde_json::Value {
        json!({
            "operation": "CREATE_ONE_TIME_CHARGE",
            "version": "1",
            "currency": "USD",
            "item": { "sku": "abc", "price": 1000 },
            "requestInfo": { "requestReferenceId": "f55ed5d8-3783-45d4-9a68-6b846f7b2cd7" }
        })
    }

    #[test]
    fn one_time_charge_end_to_end() {
        let mut payload = one_time_charge_payload();
        assert!(OneTimeChargeCreateRequest::validate(&payload));

        // Wrong version is a different (unknown) variant.
        payload["version"] = json!("2");
        assert!(!OneTimeChargeCreateRequest::validate(&payload));

        // The nested item is optional.
        let mut without_item = one_time_charge_payload();
        without_item
            .as_object_mut()
            .expect("payload is an object")
            .remove("item");
        assert!(OneTimeChargeCreateRequest::validate(&without_item));
    }

    #[test]
    fn discriminator_rejects_other_operations() {
        let mut payload = one_time_charge_payload();
        payload["operation"] = json!("SUBSCRIPTION_MODIFY");
        assert!(!OneTimeChargeCreateRequest::validate(&payload));

        let mut absent = one_time_charge_payload();
        absent
            .as_object_mut()
            .expect("payload is an object")
            .remove("operation");
        assert!(!OneTimeChargeCreateRequest::validate(&absent));
    }

    #[test]
    fn create_and_migrate_share_structure() {
        let body = json!({
            "currency": "EUR",
            "item": { "sku": "sub1", "period": "P1M", "price": 4990 },
            "storefront": "DEU",
            "taxCode": "C003-00-2"
        });
        assert!(SubscriptionCreateRequest::validate(&body));
        assert!(SubscriptionMigrateRequest::validate(&body));

        // Only the migrate variant declares originalTransactionId, but
        // open validation means the extra field never rejects either.
        let mut with_original = body.clone();
        with_original["originalTransactionId"] = json!("100000123456789");
        assert!(SubscriptionMigrateRequest::validate(&with_original));
        assert!(SubscriptionCreateRequest::validate(&with_original));

        with_original["originalTransactionId"] = json!(42);
        assert!(!SubscriptionMigrateRequest::validate(&with_original));
        assert!(SubscriptionCreateRequest::validate(&with_original));
    }

    #[test]
    fn lax_requests_accept_any_operation_string() {
        // Not pinned on this type; the vendor schema leaves it mutable.
        assert!(SubscriptionCancelRequest::validate(&json!({
            "operation": "ANYTHING",
            "effective": "IMMEDIATELY"
        })));
        assert!(!SubscriptionCancelRequest::validate(&json!({ "operation": 1 })));
        assert!(!SubscriptionCancelRequest::validate(&json!({ "effective": "SOON" })));
    }

    #[test]
    fn modify_request_validates_modification_array() {
        let ok = json!({
            "operation": "SUBSCRIPTION_MODIFY",
            "version": "1.0",
            "modifications": [
                { "period": "P1Y", "effective": "NEXT_BILL_CYCLE", "reason": "UPGRADE" },
                {}
            ]
        });
        assert!(SubscriptionModifyInAppRequest::validate(&ok));

        let bad_element = json!({
            "operation": "SUBSCRIPTION_MODIFY",
            "version": "1.0",
            "modifications": [{ "period": "P5M" }]
        });
        assert!(!SubscriptionModifyInAppRequest::validate(&bad_element));

        let not_a_sequence = json!({
            "operation": "SUBSCRIPTION_MODIFY",
            "version": "1.0",
            "modifications": { "period": "P1Y" }
        });
        assert!(!SubscriptionModifyInAppRequest::validate(&not_a_sequence));
    }

    #[test]
    fn reactivate_pins_its_own_version() {
        let ok = json!({
            "operation": "SUBSCRIPTION_REACTIVATE",
            "version": "1.0",
            "item": { "sku": "abc" }
        });
        assert!(SubscriptionReactivateInAppRequest::validate(&ok));

        let wrong_version = json!({
            "operation": "SUBSCRIPTION_REACTIVATE",
            "version": "1",
            "item": { "sku": "abc" }
        });
        assert!(!SubscriptionReactivateInAppRequest::validate(&wrong_version));
    }

    #[test]
    fn defaults_carry_discriminators() {
        let request = OneTimeChargeCreateRequest {
            currency: Some("USD".to_string()),
            item: Some(OneTimeChargeItem {
                sku: Some("abc".to_string()),
                price: Some(1000),
                ..OneTimeChargeItem::default()
            }),
            ..OneTimeChargeCreateRequest::default()
        };
        let encoded = request.encode();
        assert!(OneTimeChargeCreateRequest::validate(&encoded));
        assert_eq!(encoded["operation"], json!(OP_CREATE_ONE_TIME_CHARGE));
        assert_eq!(encoded["version"], json!("1"));
    }

    #[test]
    fn decode_round_trip() {
        let decoded =
            OneTimeChargeCreateRequest::decode(one_time_charge_payload()).expect("should decode");
        assert_eq!(decoded.currency.as_deref(), Some("USD"));
        let item = decoded.item.as_ref().expect("item present");
        assert_eq!(item.price, Some(1000));
        assert!(OneTimeChargeCreateRequest::validate(&decoded.encode()));
    }

    #[test]
    fn refund_request_keeps_lax_discriminator() {
        assert!(RequestRefundRequest::validate(&json!({
            "refundType": "PRORATED",
            "refundReason": "UNSATISFIED_WITH_PURCHASE"
        })));
        assert!(!RequestRefundRequest::validate(&json!({ "refundReason": "BECAUSE" })));
    }
}
