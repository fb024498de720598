//! In-memory owners, cars and per-model deal counts.
//!
//! Ownership is booked twice: each person keeps the ordered numbers of the
//! cars they own and each car keeps its optional owner id. Every mutation
//! updates both sides, and every check runs before anything is changed.

use crate::dto::{CarDto, PersonDto, PersonId, TradeDealDto};
use crate::error::{CarsError, Result};
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Registry shared by all request handlers.
pub type SharedRegistry = Arc<RwLock<OwnershipRegistry>>;

#[derive(Debug, Clone)]
struct PersonRecord {
    person: PersonDto,
    cars: BTreeSet<String>,
}

#[derive(Debug, Clone)]
struct CarRecord {
    car: CarDto,
    owner: Option<PersonId>,
}

#[derive(Debug, Default, Clone)]
pub struct OwnershipRegistry {
    owners: FxHashMap<PersonId, PersonRecord>,
    cars: FxHashMap<String, CarRecord>,
    model_deals: FxHashMap<String, u64>,
}

impl OwnershipRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn shared(self) -> SharedRegistry {
        Arc::new(RwLock::new(self))
    }

    /// # Errors
    /// [`CarsError::AlreadyExists`] if the id is taken.
    pub fn add_person(&mut self, person: PersonDto) -> Result<PersonDto> {
        if self.owners.contains_key(&person.id) {
            return Err(CarsError::person_already_exists());
        }
        self.owners.insert(person.id, PersonRecord { person: person.clone(), cars: BTreeSet::new() });
        Ok(person)
    }

    /// Registers a car without an owner.
    ///
    /// # Errors
    /// [`CarsError::AlreadyExists`] if the number is taken.
    pub fn add_car(&mut self, car: CarDto) -> Result<CarDto> {
        if self.cars.contains_key(&car.number) {
            return Err(CarsError::car_already_exists());
        }
        self.cars.insert(car.number.clone(), CarRecord { car: car.clone(), owner: None });
        Ok(car)
    }

    /// Replaces name, birth date and email. Owned cars stay as they are.
    ///
    /// # Errors
    /// [`CarsError::NotFound`] if no person has this id.
    pub fn update_person(&mut self, person: PersonDto) -> Result<PersonDto> {
        let record = self.owners.get_mut(&person.id).ok_or_else(CarsError::person_not_found)?;
        record.person = person.clone();
        Ok(person)
    }

    /// Removes a person and leaves their cars without an owner.
    ///
    /// # Errors
    /// [`CarsError::NotFound`] if no person has this id.
    pub fn delete_person(&mut self, id: PersonId) -> Result<PersonDto> {
        let record = self.owners.remove(&id).ok_or_else(CarsError::person_not_found)?;
        for number in &record.cars {
            if let Some(car) = self.cars.get_mut(number) {
                car.owner = None;
            }
        }
        Ok(record.person)
    }

    /// Removes a car and drops it from its owner's cars. Deal counts are kept.
    ///
    /// # Errors
    /// [`CarsError::NotFound`] if no car has this number.
    pub fn delete_car(&mut self, number: &str) -> Result<CarDto> {
        let record = self.cars.remove(number).ok_or_else(CarsError::car_not_found)?;
        if let Some(owner) = record.owner.and_then(|id| self.owners.get_mut(&id)) {
            owner.cars.remove(number);
        }
        Ok(record.car)
    }

    /// Moves a car to `deal.person_id`, or to nobody, and counts the deal
    /// against the car's model. Returns the deal unchanged.
    ///
    /// # Errors
    /// * [`CarsError::NotFound`] for an unknown car or an unknown new owner.
    /// * [`CarsError::Conflict`] when the new owner is the current one,
    ///   including releasing a car that has no owner.
    pub fn purchase(&mut self, deal: TradeDealDto) -> Result<TradeDealDto> {
        let record = self.cars.get(&deal.car_number).ok_or_else(CarsError::car_not_found)?;
        if let Some(id) = deal.person_id
            && !self.owners.contains_key(&id)
        {
            return Err(CarsError::person_not_found());
        }
        if record.owner == deal.person_id {
            return Err(CarsError::illegal_deal());
        }

        let previous = record.owner;
        let model = record.car.model.clone();

        if let Some(owner) = previous.and_then(|id| self.owners.get_mut(&id)) {
            owner.cars.remove(&deal.car_number);
        }
        if let Some(owner) = deal.person_id.and_then(|id| self.owners.get_mut(&id)) {
            owner.cars.insert(deal.car_number.clone());
        }
        if let Some(record) = self.cars.get_mut(&deal.car_number) {
            record.owner = deal.person_id;
        }
        *self.model_deals.entry(model).or_default() += 1;

        Ok(deal)
    }

    /// Cars of a person, ordered by number.
    ///
    /// # Errors
    /// [`CarsError::NotFound`] if no person has this id.
    pub fn get_owner_cars(&self, id: PersonId) -> Result<Vec<CarDto>> {
        let record = self.owners.get(&id).ok_or_else(CarsError::person_not_found)?;
        Ok(record.cars.iter().filter_map(|number| self.cars.get(number)).map(|c| c.car.clone()).collect())
    }

    /// The current owner of a car, `None` when it has none.
    ///
    /// # Errors
    /// [`CarsError::NotFound`] if no car has this number.
    pub fn get_car_owner(&self, number: &str) -> Result<Option<PersonDto>> {
        let record = self.cars.get(number).ok_or_else(CarsError::car_not_found)?;
        Ok(record.owner.and_then(|id| self.owners.get(&id)).map(|owner| owner.person.clone()))
    }

    /// Models sharing the highest deal count, sorted. Empty before the first deal.
    #[must_use]
    pub fn most_popular_car_models(&self) -> Vec<String> {
        let Some(max) = self.model_deals.values().copied().max() else {
            return Vec::new();
        };
        let mut models: Vec<String> =
            self.model_deals.iter().filter(|(_, count)| **count == max).map(|(model, _)| model.clone()).collect();
        models.sort_unstable();
        models
    }

    #[must_use]
    pub fn person(&self, id: PersonId) -> Option<&PersonDto> {
        self.owners.get(&id).map(|record| &record.person)
    }

    #[must_use]
    pub fn car(&self, number: &str) -> Option<&CarDto> {
        self.cars.get(number).map(|record| &record.car)
    }

    #[must_use]
    pub fn persons_count(&self) -> usize {
        self.owners.len()
    }

    #[must_use]
    pub fn cars_count(&self) -> usize {
        self.cars.len()
    }

    /// Completed deals for a model, kept even after its cars are deleted.
    #[must_use]
    pub fn model_deals(&self, model: &str) -> u64 {
        self.model_deals.get(model).copied().unwrap_or_default()
    }
}
