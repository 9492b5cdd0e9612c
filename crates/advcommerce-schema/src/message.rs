use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::shape::Shape;

/// The typed-message contract: one shape per concrete message type.
///
/// `validate` is the hot boolean path; `decode` performs the same
/// judgment and then narrows the payload into the typed record. Both
/// read only the static shape and the caller's value, so they are safe
/// to call concurrently from any number of call sites.
pub trait Message: Serialize + DeserializeOwned {
    /// Catalog name of this message.
    const NAME: &'static str;

    /// The static field table this message conforms to.
    fn shape() -> &'static Shape;

    /// Judge whether an untrusted payload conforms to this message.
    fn validate(value: &Value) -> bool {
        Self::shape().validate(value)
    }

    /// Validate, then narrow into the typed record.
    ///
    /// Returns `None` on structural nonconformance, and also when a
    /// structurally valid number does not fit the typed field (amounts
    /// are `i64` milliunits; the structural `Number` kind is wider).
    fn decode(value: Value) -> Option<Self> {
        if !Self::shape().validate(&value) {
            return None;
        }
        serde_json::from_value(value).ok()
    }

    /// Encode an outgoing message for serialization.
    fn encode(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
