//! HTTP boundary of the cars slice.

mod extract;
mod handlers;
mod response;
pub mod router;

pub use extract::{CarsJson, CarsPath};
