//! Store seams for the domain layer.

pub mod credentials;
