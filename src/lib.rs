//! ARAS Advisor - Multi-criteria decision support
//!
//! This crate ranks alternatives with the ARAS (Additive Ratio Assessment)
//! method: raw benefit/cost criteria values are normalized, weighted and
//! compared against a synthetic optimal alternative.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
