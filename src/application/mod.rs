//! Orchestration services.
//!
//! [`payment::PaymentService`] is the payment orchestrator; the client and
//! product services cover onboarding, top-ups and catalog management. All of
//! them work against the storage ports in [`crate::domain::ports`].

pub mod clients;
pub mod locks;
pub mod payment;
pub mod products;
