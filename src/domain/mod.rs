//! Pure domain types and the pricing rules.
//!
//! Nothing in this module performs I/O; the orchestration layer in
//! [`crate::application`] is the only place that touches storage.

pub mod client;
pub mod money;
pub mod ports;
pub mod pricing;
pub mod product;
pub mod ticket;
