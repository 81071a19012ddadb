//! Core types shared across Quotebook facilities
//!
//! This crate provides the foundational types used by both error handling
//! and logging:
//!
//! - **Correlation types**: RequestId for tagging one invocation's events
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::RequestId;
