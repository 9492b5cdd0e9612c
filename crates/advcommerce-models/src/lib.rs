//! The Advanced Commerce message catalog.
//!
//! Every request and response exchanged with the commerce API is declared
//! here twice over: as a typed serde record for encoding and narrowing,
//! and as a static [`Shape`](advcommerce_schema::Shape) field table the
//! validation engine interprets. Field names, optionality, and
//! discriminator constants reproduce the vendor's published schema
//! exactly, including its unevenness: some request variants pin
//! `operation`/`version` to constants, others leave them as plain
//! optional strings.
//!
//! The [`Catalog`] is a name-keyed registry over all shapes, for callers
//! that route by message name instead of by concrete type.

pub mod catalog;
pub mod enums;
pub mod envelope;
pub mod items;
pub mod requests;
pub mod responses;

pub use catalog::{Catalog, CatalogError};
pub use envelope::RequestInfo;
