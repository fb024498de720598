//! # Domain
//!
//! Plain data shared by every crate: configuration, constants and the slice
//! registry contract. Only `serde` is allowed here.

pub mod config;
pub mod constants;
pub mod registry;
