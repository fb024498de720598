#![cfg(feature = "server")]

use carhub_kernel::domain::config::ApiConfig;
use carhub_kernel::domain::registry::{FeatureSlice, InitializedSlice};
use carhub_kernel::server::state::{ApiState, ApiStateError};
use std::any::Any;

#[derive(Debug)]
struct Garage(u32);

impl FeatureSlice for Garage {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug)]
struct Unregistered;

impl FeatureSlice for Unregistered {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[test]
fn build_requires_config() {
    let err = ApiState::builder().build().expect_err("config is mandatory");
    assert!(matches!(err, ApiStateError::Validation { .. }));
}

#[test]
fn registered_slice_is_found_by_type() {
    let state = ApiState::builder()
        .config(ApiConfig::default())
        .register_slices([InitializedSlice::new(Garage(7))])
        .build()
        .expect("state");

    assert_eq!(state.get_slice::<Garage>().map(|g| g.0), Some(7));
    assert_eq!(state.slice_ids().count(), 1);

    let err = state.try_get_slice::<Unregistered>().expect_err("not registered");
    assert!(err.to_string().contains("Unregistered"));
}
