//! Sub-object records nested inside requests: product items,
//! descriptors, offers, and modification entries.

use advcommerce_schema::{Message, Shape};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::enums::{
    Effective, OfferPeriod, OfferReason, Period, Reason, RefundReason, RefundType, EFFECTIVE,
    OFFER_PERIOD, OFFER_REASON, PERIOD, REASON, REFUND_REASON, REFUND_TYPE,
};

/// The description and display name of a product you manage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Descriptors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl Message for Descriptors {
    const NAME: &'static str = "Descriptors";

    fn shape() -> &'static Shape {
        static SHAPE: Lazy<Shape> = Lazy::new(|| {
            Shape::builder("Descriptors")
                .string("description")
                .string("displayName")
                .build()
        });
        &SHAPE
    }
}

/// Descriptors as they appear in a request wrapper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDescriptors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptors: Option<Descriptors>,
}

impl Message for RequestDescriptors {
    const NAME: &'static str = "RequestDescriptors";

    fn shape() -> &'static Shape {
        static SHAPE: Lazy<Shape> = Lazy::new(|| {
            Shape::builder("RequestDescriptors")
                .object("descriptors", Descriptors::shape)
                .build()
        });
        &SHAPE
    }
}

/// A discount offer for an auto-renewable subscription.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<OfferPeriod>,
    /// Number of periods the offer is active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_count: Option<i64>,
    /// Offer price, in milliunits of the currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<OfferReason>,
}

impl Message for Offer {
    const NAME: &'static str = "Offer";

    fn shape() -> &'static Shape {
        static SHAPE: Lazy<Shape> = Lazy::new(|| {
            Shape::builder("Offer")
                .enumeration("period", &OFFER_PERIOD)
                .number("periodCount")
                .number("price")
                .enumeration("reason", &OFFER_REASON)
                .build()
        });
        &SHAPE
    }
}

/// An offer as it appears in a request wrapper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestOffer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer: Option<Offer>,
}

impl Message for RequestOffer {
    const NAME: &'static str = "RequestOffer";

    fn shape() -> &'static Shape {
        static SHAPE: Lazy<Shape> =
            Lazy::new(|| Shape::builder("RequestOffer").object("offer", Offer::shape).build());
        &SHAPE
    }
}

/// The details of a one-time charge product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OneTimeChargeItem {
    /// Product identifier you manage in your own system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Price in milliunits of the currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
}

impl Message for OneTimeChargeItem {
    const NAME: &'static str = "OneTimeChargeItem";

    fn shape() -> &'static Shape {
        static SHAPE: Lazy<Shape> = Lazy::new(|| {
            Shape::builder("OneTimeChargeItem")
                .string("sku")
                .string("description")
                .string("displayName")
                .number("price")
                .build()
        });
        &SHAPE
    }
}

/// The details of a subscription product at creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionCreateItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl Message for SubscriptionCreateItem {
    const NAME: &'static str = "SubscriptionCreateItem";

    fn shape() -> &'static Shape {
        static SHAPE: Lazy<Shape> = Lazy::new(|| {
            Shape::builder("SubscriptionCreateItem")
                .string("sku")
                .string("description")
                .string("displayName")
                .number("price")
                .enumeration("period", &PERIOD)
                .string("currency")
                .build()
        });
        &SHAPE
    }
}

/// A subscription item carried across a migration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionMigrateItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_transaction_id: Option<String>,
}

impl Message for SubscriptionMigrateItem {
    const NAME: &'static str = "SubscriptionMigrateItem";

    fn shape() -> &'static Shape {
        static SHAPE: Lazy<Shape> = Lazy::new(|| {
            Shape::builder("SubscriptionMigrateItem")
                .string("sku")
                .string("description")
                .string("displayName")
                .number("price")
                .enumeration("period", &PERIOD)
                .string("currency")
                .string("originalTransactionId")
                .build()
        });
        &SHAPE
    }
}

/// Renewal terms applied when a migrated subscription next renews.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionMigrateRenewalItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective: Option<Effective>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renewal_date: Option<String>,
}

impl Message for SubscriptionMigrateRenewalItem {
    const NAME: &'static str = "SubscriptionMigrateRenewalItem";

    fn shape() -> &'static Shape {
        static SHAPE: Lazy<Shape> = Lazy::new(|| {
            Shape::builder("SubscriptionMigrateRenewalItem")
                .string("sku")
                .string("description")
                .string("displayName")
                .enumeration("period", &PERIOD)
                .enumeration("effective", &EFFECTIVE)
                .string("renewalDate")
                .build()
        });
        &SHAPE
    }
}

/// A metadata change for one subscription item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionChangeMetadataItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptors: Option<Descriptors>,
}

impl Message for SubscriptionChangeMetadataItem {
    const NAME: &'static str = "SubscriptionChangeMetadataItem";

    fn shape() -> &'static Shape {
        static SHAPE: Lazy<Shape> = Lazy::new(|| {
            Shape::builder("SubscriptionChangeMetadataItem")
                .string("sku")
                .object("descriptors", Descriptors::shape)
                .build()
        });
        &SHAPE
    }
}

/// Descriptors wrapper used by the change-metadata request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionChangeMetadataDescriptors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptors: Option<Descriptors>,
}

impl Message for SubscriptionChangeMetadataDescriptors {
    const NAME: &'static str = "SubscriptionChangeMetadataDescriptors";

    fn shape() -> &'static Shape {
        static SHAPE: Lazy<Shape> = Lazy::new(|| {
            Shape::builder("SubscriptionChangeMetadataDescriptors")
                .object("descriptors", Descriptors::shape)
                .build()
        });
        &SHAPE
    }
}

/// An item added to an existing subscription.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionModifyAddItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective: Option<Effective>,
}

impl Message for SubscriptionModifyAddItem {
    const NAME: &'static str = "SubscriptionModifyAddItem";

    fn shape() -> &'static Shape {
        static SHAPE: Lazy<Shape> = Lazy::new(|| {
            Shape::builder("SubscriptionModifyAddItem")
                .string("sku")
                .string("description")
                .string("displayName")
                .number("price")
                .enumeration("period", &PERIOD)
                .string("currency")
                .enumeration("effective", &EFFECTIVE)
                .build()
        });
        &SHAPE
    }
}

/// Swaps one subscription item for another, with new terms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionModifyChangeItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_period: Option<Period>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective: Option<Effective>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<Reason>,
}

impl Message for SubscriptionModifyChangeItem {
    const NAME: &'static str = "SubscriptionModifyChangeItem";

    fn shape() -> &'static Shape {
        static SHAPE: Lazy<Shape> = Lazy::new(|| {
            Shape::builder("SubscriptionModifyChangeItem")
                .string("sku")
                .string("description")
                .string("displayName")
                .string("newSku")
                .number("newPrice")
                .enumeration("newPeriod", &PERIOD)
                .enumeration("effective", &EFFECTIVE)
                .enumeration("reason", &REASON)
                .build()
        });
        &SHAPE
    }
}

/// Removes one item from a subscription.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionModifyRemoveItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective: Option<Effective>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<Reason>,
}

impl Message for SubscriptionModifyRemoveItem {
    const NAME: &'static str = "SubscriptionModifyRemoveItem";

    fn shape() -> &'static Shape {
        static SHAPE: Lazy<Shape> = Lazy::new(|| {
            Shape::builder("SubscriptionModifyRemoveItem")
                .string("sku")
                .enumeration("effective", &EFFECTIVE)
                .enumeration("reason", &REASON)
                .build()
        });
        &SHAPE
    }
}

/// Descriptor changes applied as part of a modification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionModifyDescriptors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptors: Option<Descriptors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective: Option<Effective>,
}

impl Message for SubscriptionModifyDescriptors {
    const NAME: &'static str = "SubscriptionModifyDescriptors";

    fn shape() -> &'static Shape {
        static SHAPE: Lazy<Shape> = Lazy::new(|| {
            Shape::builder("SubscriptionModifyDescriptors")
                .object("descriptors", Descriptors::shape)
                .enumeration("effective", &EFFECTIVE)
                .build()
        });
        &SHAPE
    }
}

/// A billing-period change applied to a subscription.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionModifyPeriodChange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective: Option<Effective>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<Reason>,
}

impl Message for SubscriptionModifyPeriodChange {
    const NAME: &'static str = "SubscriptionModifyPeriodChange";

    fn shape() -> &'static Shape {
        static SHAPE: Lazy<Shape> = Lazy::new(|| {
            Shape::builder("SubscriptionModifyPeriodChange")
                .enumeration("period", &PERIOD)
                .enumeration("effective", &EFFECTIVE)
                .enumeration("reason", &REASON)
                .build()
        });
        &SHAPE
    }
}

/// A price change for one subscription item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPriceChangeItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective: Option<Effective>,
}

impl Message for SubscriptionPriceChangeItem {
    const NAME: &'static str = "SubscriptionPriceChangeItem";

    fn shape() -> &'static Shape {
        static SHAPE: Lazy<Shape> = Lazy::new(|| {
            Shape::builder("SubscriptionPriceChangeItem")
                .string("sku")
                .number("newPrice")
                .string("currency")
                .enumeration("effective", &EFFECTIVE)
                .build()
        });
        &SHAPE
    }
}

/// An item reactivated on a lapsed subscription.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionReactivateItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective: Option<Effective>,
}

impl Message for SubscriptionReactivateItem {
    const NAME: &'static str = "SubscriptionReactivateItem";

    fn shape() -> &'static Shape {
        static SHAPE: Lazy<Shape> = Lazy::new(|| {
            Shape::builder("SubscriptionReactivateItem")
                .string("sku")
                .string("description")
                .string("displayName")
                .enumeration("effective", &EFFECTIVE)
                .build()
        });
        &SHAPE
    }
}

/// A per-item refund request entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestRefundItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_type: Option<RefundType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_reason: Option<RefundReason>,
    /// Amount to refund for the item, in milliunits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_amount: Option<i64>,
}

impl Message for RequestRefundItem {
    const NAME: &'static str = "RequestRefundItem";

    fn shape() -> &'static Shape {
        static SHAPE: Lazy<Shape> = Lazy::new(|| {
            Shape::builder("RequestRefundItem")
                .string("sku")
                .enumeration("refundType", &REFUND_TYPE)
                .enumeration("refundReason", &REFUND_REASON)
                .number("refundAmount")
                .build()
        });
        &SHAPE
    }
}
