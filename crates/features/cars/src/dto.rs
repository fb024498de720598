//! Wire types of the cars API.
//!
//! Required fields that arrive `null` or missing fall back to their default
//! (`0`, `""`), so validation reports them with its own messages.

use carhub_derive::api_model;
use serde::{Deserialize, Deserializer};

/// Signed, so negative ids reach the range check.
pub type PersonId = i64;

#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct PersonDto {
    #[serde(default, deserialize_with = "nullable")]
    pub id: PersonId,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    /// ISO `YYYY-MM-DD` date.
    #[serde(default, deserialize_with = "nullable")]
    pub birth_date: String,
    #[serde(default, deserialize_with = "nullable")]
    pub email: String,
}

#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct CarDto {
    /// Plate number, `123-45-678` or `12-345-67`.
    #[serde(default, deserialize_with = "nullable")]
    pub number: String,
    #[serde(default, deserialize_with = "nullable")]
    pub model: String,
}

/// Request to move a car to `personId`, or to nobody when it is absent.
#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct TradeDealDto {
    #[serde(default, deserialize_with = "nullable")]
    pub car_number: String,
    #[serde(default)]
    pub person_id: Option<PersonId>,
    #[serde(default)]
    pub date: Option<String>,
}

fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
