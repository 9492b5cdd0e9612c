//! Closed enumerations of the commerce API.
//!
//! Each enum exists as a Rust sum type for typed records and as a static
//! [`EnumSet`] the structural validators check membership against. The
//! wire constants are the single source of truth; the serde renderings
//! of the Rust variants match them one for one.

use advcommerce_schema::EnumSet;
use serde::{Deserialize, Serialize};

/// When a requested subscription change goes into effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Effective {
    Immediately,
    NextBillCycle,
}

pub static EFFECTIVE: EnumSet = EnumSet::strings("effective", &["IMMEDIATELY", "NEXT_BILL_CYCLE"]);

/// The duration of a single cycle of an auto-renewable subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    P1W,
    P1M,
    P2M,
    P3M,
    P6M,
    P1Y,
}

pub static PERIOD: EnumSet =
    EnumSet::strings("period", &["P1W", "P1M", "P2M", "P3M", "P6M", "P1Y"]);

/// The period of a discount offer. A superset of [`Period`]: offers may
/// run on cycles a subscription itself cannot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OfferPeriod {
    P3D,
    P1W,
    P2W,
    P1M,
    P2M,
    P3M,
    P6M,
    P9M,
    P1Y,
}

pub static OFFER_PERIOD: EnumSet = EnumSet::strings(
    "offerPeriod",
    &["P3D", "P1W", "P2W", "P1M", "P2M", "P3M", "P6M", "P9M", "P1Y"],
);

/// The reason a discount offer is extended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OfferReason {
    Acquisition,
    WinBack,
    Retention,
}

pub static OFFER_REASON: EnumSet =
    EnumSet::strings("offerReason", &["ACQUISITION", "WIN_BACK", "RETENTION"]);

/// The reason for a subscription change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Reason {
    Upgrade,
    Downgrade,
    ApplyOffer,
}

pub static REASON: EnumSet =
    EnumSet::strings("reason", &["UPGRADE", "DOWNGRADE", "APPLY_OFFER"]);

/// The reason to request a refund.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RefundReason {
    UnintendedPurchase,
    FulfillmentIssue,
    UnsatisfiedWithPurchase,
    Legal,
    Other,
    ModifyItemsRefund,
    SimulateRefundDecline,
}

pub static REFUND_REASON: EnumSet = EnumSet::strings(
    "refundReason",
    &[
        "UNINTENDED_PURCHASE",
        "FULFILLMENT_ISSUE",
        "UNSATISFIED_WITH_PURCHASE",
        "LEGAL",
        "OTHER",
        "MODIFY_ITEMS_REFUND",
        "SIMULATE_REFUND_DECLINE",
    ],
);

/// The type of refund.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RefundType {
    Full,
    Prorated,
}

pub static REFUND_TYPE: EnumSet = EnumSet::strings("refundType", &["FULL", "PRORATED"]);

/// Preferred outcome for a refund request, as a small-integer code:
/// 0 undeclared, 1 prefer grant, 2 prefer decline, 3 no preference.
pub static REFUND_PREFERENCE: EnumSet = EnumSet::integers("refundPreference", &[0, 1, 2, 3]);

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn serde_renderings_match_wire_constants() {
        let cases = [
            (json!(Effective::NextBillCycle), &EFFECTIVE),
            (json!(Period::P1M), &PERIOD),
            (json!(OfferPeriod::P3D), &OFFER_PERIOD),
            (json!(OfferReason::WinBack), &OFFER_REASON),
            (json!(Reason::ApplyOffer), &REASON),
            (json!(RefundReason::UnintendedPurchase), &REFUND_REASON),
            (json!(RefundType::Prorated), &REFUND_TYPE),
        ];
        for (rendered, set) in cases {
            assert!(set.contains(&rendered), "{rendered} not in {}", set.name());
        }
    }

    #[test]
    fn offer_period_is_superset_of_period() {
        for period in ["P1W", "P1M", "P2M", "P3M", "P6M", "P1Y"] {
            assert!(OFFER_PERIOD.contains(&json!(period)));
        }
        assert!(!PERIOD.contains(&json!("P3D")));
        assert!(!PERIOD.contains(&json!("P9M")));
    }

    #[test]
    fn refund_preference_is_integer_coded() {
        assert!(REFUND_PREFERENCE.contains(&json!(2)));
        assert!(!REFUND_PREFERENCE.contains(&json!("2")));
        assert!(!REFUND_PREFERENCE.contains(&json!(4)));
    }

    #[test]
    fn historical_spellings_rejected() {
        assert!(!REASON.contains(&json!("APPLY-OFFER")));
        assert!(!REFUND_TYPE.contains(&json!("full")));
    }
}
