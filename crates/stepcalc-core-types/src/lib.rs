//! Core types shared across stepcalc facilities
//!
//! This crate provides foundational types used by both error handling
//! and logging facilities:
//!
//! - **Correlation types**: SessionId
//! - **Schema constants**: Canonical event names

pub mod correlation;
pub mod schema;

pub use correlation::SessionId;
