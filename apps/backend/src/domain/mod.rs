//! Domain layer: request-independent value types.

pub mod dates;
pub mod registration;
