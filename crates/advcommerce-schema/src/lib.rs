//! Composite JSON validation for Advanced Commerce operation messages.
//!
//! The commerce API exchanges a few dozen structurally similar request and
//! response records. Rather than hand-writing a validator per record, this
//! crate interprets declarative field tables ([`Shape`]) against untrusted
//! `serde_json::Value` payloads:
//!
//! - [`Shape`]: a named record shape of independently optional fields
//!   that are scalars, closed enums, nested shapes, or arrays of a shape.
//! - [`EnumSet`]: exact membership in a closed set of string or integer
//!   constants.
//! - Discriminators: fields pinned to a literal constant, used to tell
//!   otherwise similar request variants apart.
//! - [`Message`]: the typed-message contract, validate then narrow into
//!   a concrete Rust type.
//!
//! Structural validation is a boolean judgment and never raises. The
//! [`constraint`] module carries the separate, fail-fast business-rule
//! checks for individual scalar values.

pub mod constraint;
pub mod enumset;
pub mod error;
pub mod message;
pub mod shape;

pub use constraint::{
    check_currency, check_description, check_display_name, check_price, check_sku, check_tax_code,
    check_uuid, MAX_PRICE,
};
pub use enumset::EnumSet;
pub use error::{ConstraintError, Result};
pub use message::Message;
pub use shape::{Field, FieldKind, Shape, ShapeBuilder, ShapeRef};
