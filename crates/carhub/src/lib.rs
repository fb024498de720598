//! Facade over the shared crates and the feature slices.
//! It composes other crates and holds no business logic.
//!
//! Applications enable `server` and call [`init`] to obtain the slices to
//! register in the API state.

pub use carhub_domain as domain;
pub use carhub_kernel as kernel;

use carhub_domain::config::ApiConfig;
use carhub_domain::registry::InitializedSlice;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use carhub_cars::server::router::cars_router;
        pub use carhub_kernel::server::router::system_router;
    }
}

pub mod features {
    pub use carhub_cars as cars;
}

/// Initializes every feature slice.
///
/// # Errors
/// Returns the first slice initialization failure.
pub fn init(config: &ApiConfig) -> Result<Vec<InitializedSlice>, Box<dyn std::error::Error + Send + Sync>> {
    let slices = vec![features::cars::init(config)?];
    Ok(slices)
}
