//! Shared request and response envelopes.
//!
//! Every request carries optional [`RequestInfo`] metadata; every
//! response carries two opaque signed-payload strings. Concrete message
//! shapes union these tables in at definition time via
//! `ShapeBuilder::extend`; the built shapes hold every inherited
//! descriptor explicitly.

use advcommerce_schema::{Message, Shape};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Metadata your app includes in server requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestInfo {
    /// UUID associating the transaction with an app account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_account_token: Option<String>,

    /// Consistency token received in renewal information. Opaque; never
    /// generated by the caller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consistency_token: Option<String>,

    /// UUID uniquely identifying each request; reused only to retry a
    /// timed-out request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_reference_id: Option<String>,
}

impl Message for RequestInfo {
    const NAME: &'static str = "RequestInfo";

    fn shape() -> &'static Shape {
        static SHAPE: Lazy<Shape> = Lazy::new(|| {
            Shape::builder("RequestInfo")
                .string("appAccountToken")
                .string("consistencyToken")
                .string("requestReferenceId")
                .build()
        });
        &SHAPE
    }
}

/// The common request envelope: `requestInfo` metadata.
pub fn request_envelope() -> &'static Shape {
    static SHAPE: Lazy<Shape> = Lazy::new(|| {
        Shape::builder("Request")
            .object("requestInfo", RequestInfo::shape)
            .build()
    });
    &SHAPE
}

/// The common response envelope: signed renewal and transaction
/// information in JWS Compact Serialization format, treated as opaque
/// strings here.
pub fn response_envelope() -> &'static Shape {
    static SHAPE: Lazy<Shape> = Lazy::new(|| {
        Shape::builder("Response")
            .string("signedRenewalInfo")
            .string("signedTransactionInfo")
            .build()
    });
    &SHAPE
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn request_info_fields_all_optional() {
        assert!(RequestInfo::validate(&json!({})));
        assert!(RequestInfo::validate(&json!({
            "appAccountToken": "2bdc3cb8-9b0c-4c33-a1b9-2fd2ffbe581b",
            "requestReferenceId": "f55ed5d8-3783-45d4-9a68-6b846f7b2cd7"
        })));
        assert!(!RequestInfo::validate(&json!({ "consistencyToken": 1 })));
    }

    #[test]
    fn request_info_serializes_camel_case() {
        let info = RequestInfo {
            app_account_token: Some("token".to_string()),
            ..RequestInfo::default()
        };
        assert_eq!(info.encode(), json!({ "appAccountToken": "token" }));
    }

    #[test]
    fn envelopes_accept_absent_fields() {
        assert!(request_envelope().validate(&json!({})));
        assert!(response_envelope().validate(&json!({})));
        assert!(!request_envelope().validate(&json!({ "requestInfo": "nope" })));
        assert!(!response_envelope().validate(&json!({ "signedRenewalInfo": 3 })));
    }
}
