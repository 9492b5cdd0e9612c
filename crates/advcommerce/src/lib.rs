//! Validation and typing for Advanced Commerce API messages.
//!
//! advcommerce decodes untrusted JSON payloads exchanged with the
//! commerce API into strongly-typed, versioned operation messages, and
//! encodes outgoing requests conforming to the same schema family.
//!
//! # Crate Structure
//!
//! - [`schema`]: the validation engine, with record shapes, closed
//!   enums, discriminated variants, and scalar business-rule checks
//! - [`models`]: the message catalog, with typed request/response
//!   records and their static shapes

/// Re-export the validation engine.
pub mod schema {
    pub use advcommerce_schema::*;
}

/// Re-export the message catalog.
pub mod models {
    pub use advcommerce_models::*;
}
