//! Kernel utilities shared across slices: layered configuration loading and,
//! with the `server` feature, the API state and the system routes.
//!
//! ```rust,ignore
//! use carhub_kernel::config::load_config;
//! use carhub_kernel::domain::config::ApiConfig;
//!
//! let cfg: ApiConfig = load_config(Some("server"))?;
//! ```
pub mod config;
#[cfg(feature = "server")]
pub mod server;

pub use carhub_domain as domain;
