use std::collections::BTreeMap;

use advcommerce_schema::{Message, Shape};
use serde_json::Value;

use crate::envelope::RequestInfo;
use crate::items::{
    Descriptors, Offer, OneTimeChargeItem, RequestDescriptors, RequestOffer, RequestRefundItem,
    SubscriptionChangeMetadataDescriptors, SubscriptionChangeMetadataItem, SubscriptionCreateItem,
    SubscriptionMigrateItem, SubscriptionMigrateRenewalItem, SubscriptionModifyAddItem,
    SubscriptionModifyChangeItem, SubscriptionModifyDescriptors, SubscriptionModifyPeriodChange,
    SubscriptionModifyRemoveItem, SubscriptionPriceChangeItem, SubscriptionReactivateItem,
};
use crate::requests::{
    OneTimeChargeCreateRequest, RequestRefundRequest, SubscriptionCancelRequest,
    SubscriptionChangeMetadataRequest, SubscriptionCreateRequest, SubscriptionMigrateRequest,
    SubscriptionModifyInAppRequest, SubscriptionPriceChangeRequest,
    SubscriptionReactivateInAppRequest, SubscriptionRevokeRequest,
};
use crate::responses::{
    OneTimeChargeCreateResponse, RequestRefundResponse, SubscriptionCancelResponse,
    SubscriptionChangeMetadataResponse,
};

/// Errors from name-keyed catalog lookups.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The requested name is not a catalog message.
    #[error("no message named {0:?} in the catalog")]
    UnknownMessage(String),
}

/// Name-keyed registry over every shape in the catalog.
///
/// For callers that route payloads by message name (a CLI, a dispatch
/// table) instead of by concrete type. The caller must know which
/// message to validate against; the catalog never guesses a variant by
/// trying shapes in turn.
pub struct Catalog {
    shapes: BTreeMap<&'static str, &'static Shape>,
}

impl Catalog {
    /// The full built-in catalog.
    pub fn builtin() -> Self {
        let mut catalog = Self {
            shapes: BTreeMap::new(),
        };

        catalog.register::<RequestInfo>();
        catalog.register::<Descriptors>();
        catalog.register::<RequestDescriptors>();
        catalog.register::<Offer>();
        catalog.register::<RequestOffer>();
        catalog.register::<OneTimeChargeItem>();
        catalog.register::<SubscriptionCreateItem>();
        catalog.register::<SubscriptionMigrateItem>();
        catalog.register::<SubscriptionMigrateRenewalItem>();
        catalog.register::<SubscriptionChangeMetadataItem>();
        catalog.register::<SubscriptionChangeMetadataDescriptors>();
        catalog.register::<SubscriptionModifyAddItem>();
        catalog.register::<SubscriptionModifyChangeItem>();
        catalog.register::<SubscriptionModifyRemoveItem>();
        catalog.register::<SubscriptionModifyDescriptors>();
        catalog.register::<SubscriptionModifyPeriodChange>();
        catalog.register::<SubscriptionPriceChangeItem>();
        catalog.register::<SubscriptionReactivateItem>();
        catalog.register::<RequestRefundItem>();

        catalog.register::<OneTimeChargeCreateRequest>();
        catalog.register::<SubscriptionCreateRequest>();
        catalog.register::<SubscriptionMigrateRequest>();
        catalog.register::<SubscriptionModifyInAppRequest>();
        catalog.register::<SubscriptionReactivateInAppRequest>();
        catalog.register::<SubscriptionCancelRequest>();
        catalog.register::<SubscriptionRevokeRequest>();
        catalog.register::<SubscriptionPriceChangeRequest>();
        catalog.register::<SubscriptionChangeMetadataRequest>();
        catalog.register::<RequestRefundRequest>();

        catalog.register::<OneTimeChargeCreateResponse>();
        catalog.register::<RequestRefundResponse>();
        catalog.register::<SubscriptionCancelResponse>();
        catalog.register::<SubscriptionChangeMetadataResponse>();

        tracing::debug!(messages = catalog.shapes.len(), "catalog initialized");
        catalog
    }

    fn register<M: Message>(&mut self) {
        self.shapes.insert(M::NAME, M::shape());
    }

    /// Look up a shape by message name.
    pub fn get(&self, name: &str) -> Option<&'static Shape> {
        self.shapes.get(name).copied()
    }

    /// All message names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        self.shapes.keys().copied().collect()
    }

    /// Validate a payload against the named message.
    pub fn validate(&self, name: &str, payload: &Value) -> Result<bool, CatalogError> {
        match self.get(name) {
            Some(shape) => Ok(shape.validate(payload)),
            None => Err(CatalogError::UnknownMessage(name.to_string())),
        }
    }
}
