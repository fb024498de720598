//! Cars feature slice: owners, cars and the trade deals moving cars between them.
//!
//! The [`registry::OwnershipRegistry`] holds all state and never logs or
//! performs I/O. With the `server` feature the slice also exposes the
//! `/cars` routes, which validate every request, call the registry under the
//! shared lock and log the outcome.

pub mod dto;
mod error;
pub mod registry;
#[cfg(feature = "server")]
pub mod server;
pub mod validation;

pub use error::{CarsError, CarsErrorExt, Result};

use carhub_kernel::domain::config::{ApiConfig, CarsConfig};
use carhub_kernel::domain::registry::InitializedSlice;
use registry::{OwnershipRegistry, SharedRegistry};

/// Cars feature state shared by the handlers.
#[carhub_derive::carhub_slice]
pub struct Cars {
    pub registry: SharedRegistry,
    pub rules: CarsConfig,
}

/// Initializes the cars slice with an empty registry.
///
/// # Errors
/// Returns [`CarsError::Internal`] when the configured person id range is empty.
pub fn init(config: &ApiConfig) -> Result<InitializedSlice> {
    let rules = config.cars;
    if rules.min_person_id > rules.max_person_id {
        return Err(CarsError::Internal {
            message: format!(
                "min_person_id {} is greater than max_person_id {}",
                rules.min_person_id, rules.max_person_id
            )
            .into(),
            context: Some("cars config".into()),
        });
    }

    tracing::info!(min_person_id = rules.min_person_id, max_person_id = rules.max_person_id, "Cars slice initialized");

    let slice = Cars::new(CarsInner { registry: OwnershipRegistry::new().shared(), rules });
    Ok(InitializedSlice::new(slice))
}
