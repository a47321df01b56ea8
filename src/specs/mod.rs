// src/specs/mod.rs
//! Page-specific extraction specs.
//!
//! Each spec knows *where the ground truth lives on one page kind* and
//! how to lift it out of a rendered snapshot. Specs are pure: they take
//! a `PageSnapshot` plus the injected tables and return typed records.
//! Fetching, probing, aggregation and file output live elsewhere.

pub mod equipment;
