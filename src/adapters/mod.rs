//! Adapters - Implementations at the system boundary.
//!
//! - `http` - REST API over the ranking and preset handlers

pub mod http;
