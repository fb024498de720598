use super::extract::{CarsJson, CarsPath};
use crate::Cars;
use crate::dto::{CarDto, PersonDto, PersonId, TradeDealDto};
use crate::error::{CarsError, Result};
use crate::validation::{Validate, validate_car_number, validate_person_id};
use axum::Json;
use axum::extract::State;
use carhub_derive::api_handler;
use carhub_kernel::domain::constants::CARS_TAG;
use carhub_kernel::server::state::ApiState;
use tracing::debug;

fn slice(state: &ApiState) -> Result<&Cars> {
    state
        .try_get_slice::<Cars>()
        .map_err(|e| CarsError::Internal { message: e.to_string().into(), context: None })
}

#[api_handler(
    post,
    path = "/cars",
    request_body = CarDto,
    responses(
        (status = OK, description = "Car added", body = CarDto),
        (status = ALREADY_REPORTED, description = "Car already exists", body = String),
        (status = BAD_REQUEST, description = "Invalid car", body = String),
    ),
    tag = CARS_TAG,
)]
pub(super) async fn add_car(State(state): State<ApiState>, CarsJson(car): CarsJson<CarDto>) -> Result<Json<CarDto>> {
    let cars = slice(&state)?;
    car.validate(&cars.rules)?;

    let car = cars.registry.write().add_car(car)?;
    debug!("car {} has been saved", car.number);
    Ok(Json(car))
}

#[api_handler(
    post,
    path = "/cars/person",
    request_body = PersonDto,
    responses(
        (status = OK, description = "Person added", body = PersonDto),
        (status = ALREADY_REPORTED, description = "Person already exists", body = String),
        (status = BAD_REQUEST, description = "Invalid person", body = String),
    ),
    tag = CARS_TAG,
)]
pub(super) async fn add_person(
    State(state): State<ApiState>,
    CarsJson(person): CarsJson<PersonDto>,
) -> Result<Json<PersonDto>> {
    let cars = slice(&state)?;
    person.validate(&cars.rules)?;

    let person = cars.registry.write().add_person(person)?;
    debug!("person {} has been saved", person.id);
    Ok(Json(person))
}

#[api_handler(
    put,
    path = "/cars/person",
    request_body = PersonDto,
    responses(
        (status = OK, description = "Person updated", body = PersonDto),
        (status = NOT_FOUND, description = "Person not found", body = String),
        (status = BAD_REQUEST, description = "Invalid person", body = String),
    ),
    tag = CARS_TAG,
)]
pub(super) async fn update_person(
    State(state): State<ApiState>,
    CarsJson(person): CarsJson<PersonDto>,
) -> Result<Json<PersonDto>> {
    let cars = slice(&state)?;
    person.validate(&cars.rules)?;

    let person = cars.registry.write().update_person(person)?;
    debug!("person {} has been updated", person.id);
    Ok(Json(person))
}

#[api_handler(
    put,
    path = "/cars/trade",
    request_body = TradeDealDto,
    responses(
        (status = OK, description = "Ownership transferred", body = TradeDealDto),
        (status = NOT_FOUND, description = "Car or person not found", body = String),
        (status = ALREADY_REPORTED, description = "Deal would not change the owner", body = String),
        (status = BAD_REQUEST, description = "Invalid trade deal", body = String),
    ),
    tag = CARS_TAG,
)]
pub(super) async fn purchase(
    State(state): State<ApiState>,
    CarsJson(deal): CarsJson<TradeDealDto>,
) -> Result<Json<TradeDealDto>> {
    let cars = slice(&state)?;
    deal.validate(&cars.rules)?;

    let deal = cars.registry.write().purchase(deal)?;
    match deal.person_id {
        Some(id) => debug!("car {} now belongs to person {id}", deal.car_number),
        None => debug!("car {} now has no owner", deal.car_number),
    }
    Ok(Json(deal))
}

#[api_handler(
    delete,
    path = "/cars/person/{id}",
    params(("id" = i64, Path, description = "Person id")),
    responses(
        (status = OK, description = "Deleted person", body = PersonDto),
        (status = NOT_FOUND, description = "Person not found", body = String),
        (status = BAD_REQUEST, description = "Invalid person id", body = String),
    ),
    tag = CARS_TAG,
)]
pub(super) async fn delete_person(
    State(state): State<ApiState>,
    CarsPath(id): CarsPath<PersonId>,
) -> Result<Json<PersonDto>> {
    let cars = slice(&state)?;
    validate_person_id(id, &cars.rules)?;

    let person = cars.registry.write().delete_person(id)?;
    debug!("person {id} has been deleted");
    Ok(Json(person))
}

#[api_handler(
    delete,
    path = "/cars/{car_number}",
    params(("car_number" = String, Path, description = "Car number")),
    responses(
        (status = OK, description = "Deleted car", body = CarDto),
        (status = NOT_FOUND, description = "Car not found", body = String),
        (status = BAD_REQUEST, description = "Invalid car number", body = String),
    ),
    tag = CARS_TAG,
)]
pub(super) async fn delete_car(
    State(state): State<ApiState>,
    CarsPath(car_number): CarsPath<String>,
) -> Result<Json<CarDto>> {
    let cars = slice(&state)?;
    validate_car_number(&car_number)?;

    let car = cars.registry.write().delete_car(&car_number)?;
    debug!("car {car_number} has been deleted");
    Ok(Json(car))
}

#[api_handler(
    get,
    path = "/cars/person/{id}",
    params(("id" = i64, Path, description = "Person id")),
    responses(
        (status = OK, description = "Cars of the person, ordered by number", body = Vec<CarDto>),
        (status = NOT_FOUND, description = "Person not found", body = String),
    ),
    tag = CARS_TAG,
)]
pub(super) async fn get_owner_cars(
    State(state): State<ApiState>,
    CarsPath(id): CarsPath<PersonId>,
) -> Result<Json<Vec<CarDto>>> {
    let owned = slice(&state)?.registry.read().get_owner_cars(id)?;
    Ok(Json(owned))
}

#[api_handler(
    get,
    path = "/cars/{car_number}",
    params(("car_number" = String, Path, description = "Car number")),
    responses(
        (status = OK, description = "Current owner, null when the car has none", body = Option<PersonDto>),
        (status = NOT_FOUND, description = "Car not found", body = String),
    ),
    tag = CARS_TAG,
)]
pub(super) async fn get_car_owner(
    State(state): State<ApiState>,
    CarsPath(car_number): CarsPath<String>,
) -> Result<Json<Option<PersonDto>>> {
    let owner = slice(&state)?.registry.read().get_car_owner(&car_number)?;
    Ok(Json(owner))
}

#[api_handler(
    get,
    path = "/cars/models/popular",
    responses((status = OK, description = "Models with the most deals, sorted", body = Vec<String>)),
    tag = CARS_TAG,
)]
pub(super) async fn most_popular_car_models(State(state): State<ApiState>) -> Result<Json<Vec<String>>> {
    let models = slice(&state)?.registry.read().most_popular_car_models();
    Ok(Json(models))
}
