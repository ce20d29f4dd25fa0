//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (run IDs, timestamps, errors)
//! - `aras` - ARAS multi-criteria ranking (pure domain services)

pub mod aras;
pub mod foundation;
