//! Field rules applied to every request before the registry is touched.

use crate::dto::{CarDto, PersonDto, PersonId, TradeDealDto};
use crate::error::{CarsError, Result};
use carhub_kernel::domain::config::CarsConfig;
use chrono::NaiveDate;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

pub const MISSING_CAR_NUMBER: &str = "Missing car number";
pub const INCORRECT_CAR_NUMBER: &str = "Incorrect car number";
pub const MISSING_CAR_MODEL: &str = "Missing car model";
pub const MISSING_PERSON_NAME: &str = "Missing person name";
pub const INCORRECT_EMAIL: &str = "Incorrect email address";
pub const INCORRECT_DATE: &str = "Date must be in ISO format (YYYY-MM-DD)";

const VIOLATION_SEPARATOR: &str = ";";

// Literal patterns, checked by the tests below.
static CAR_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{3}-\d{2}-\d{3}|\d{2}-\d{3}-\d{2})$").expect("car number pattern")
});
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern"));
static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("iso date pattern"));

/// Collected rule violations of one request.
#[derive(Debug, Default)]
pub struct Violations(Vec<Cow<'static, str>>);

impl Violations {
    pub fn push(&mut self, message: impl Into<Cow<'static, str>>) {
        self.0.push(message.into());
    }

    /// # Errors
    /// Returns [`CarsError::Validation`] with every message joined by `;`.
    pub fn into_result(self) -> Result<()> {
        if self.0.is_empty() { Ok(()) } else { Err(CarsError::validation(self.0.join(VIOLATION_SEPARATOR))) }
    }
}

/// A request body with field rules.
pub trait Validate {
    fn collect_violations(&self, rules: &CarsConfig, violations: &mut Violations);

    /// # Errors
    /// Returns [`CarsError::Validation`] if any rule is broken.
    fn validate(&self, rules: &CarsConfig) -> Result<()> {
        let mut violations = Violations::default();
        self.collect_violations(rules, &mut violations);
        violations.into_result()
    }
}

impl Validate for CarDto {
    fn collect_violations(&self, _rules: &CarsConfig, violations: &mut Violations) {
        check_car_number(&self.number, violations);
        if is_blank(&self.model) {
            violations.push(MISSING_CAR_MODEL);
        }
    }
}

impl Validate for PersonDto {
    fn collect_violations(&self, rules: &CarsConfig, violations: &mut Violations) {
        check_person_id(self.id, rules, violations);
        if is_blank(&self.name) {
            violations.push(MISSING_PERSON_NAME);
        }
        check_date(&self.birth_date, violations);
        if !EMAIL.is_match(&self.email) {
            violations.push(INCORRECT_EMAIL);
        }
    }
}

impl Validate for TradeDealDto {
    fn collect_violations(&self, rules: &CarsConfig, violations: &mut Violations) {
        check_car_number(&self.car_number, violations);
        if let Some(id) = self.person_id {
            check_person_id(id, rules, violations);
        }
        if let Some(date) = &self.date {
            check_date(date, violations);
        }
    }
}

/// # Errors
/// Returns [`CarsError::Validation`] for a blank or malformed plate number.
pub fn validate_car_number(number: &str) -> Result<()> {
    let mut violations = Violations::default();
    check_car_number(number, &mut violations);
    violations.into_result()
}

/// # Errors
/// Returns [`CarsError::Validation`] when `id` is outside the configured range.
pub fn validate_person_id(id: PersonId, rules: &CarsConfig) -> Result<()> {
    let mut violations = Violations::default();
    check_person_id(id, rules, &mut violations);
    violations.into_result()
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn check_car_number(number: &str, violations: &mut Violations) {
    if is_blank(number) {
        violations.push(MISSING_CAR_NUMBER);
    } else if !CAR_NUMBER.is_match(number) {
        violations.push(INCORRECT_CAR_NUMBER);
    }
}

fn check_person_id(id: PersonId, rules: &CarsConfig, violations: &mut Violations) {
    if id < rules.min_person_id {
        violations.push(format!("Person id must be greater than or equal to {}", rules.min_person_id));
    } else if id > rules.max_person_id {
        violations.push(format!("Person id must be less than or equal to {}", rules.max_person_id));
    }
}

/// Shape and calendar check, so `2023-02-30` is rejected as well.
fn check_date(date: &str, violations: &mut Violations) {
    let valid = ISO_DATE.captures(date).is_some_and(|caps| {
        let year = caps[1].parse::<i32>().ok();
        let month = caps[2].parse::<u32>().ok();
        let day = caps[3].parse::<u32>().ok();
        matches!((year, month, day), (Some(y), Some(m), Some(d)) if NaiveDate::from_ymd_opt(y, m, d).is_some())
    });
    if !valid {
        violations.push(INCORRECT_DATE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person() -> PersonDto {
        PersonDto {
            id: 123,
            name: "Moshe".to_owned(),
            birth_date: "2000-10-10".to_owned(),
            email: "moshe@gmail.com".to_owned(),
        }
    }

    fn message(result: Result<()>) -> String {
        result.expect_err("validation should fail").message().to_owned()
    }

    #[test]
    fn test_car_number_formats() {
        assert!(validate_car_number("123-45-678").is_ok());
        assert!(validate_car_number("12-345-67").is_ok());
        assert_eq!(message(validate_car_number("1234-5-678")), INCORRECT_CAR_NUMBER);
        assert_eq!(message(validate_car_number("123-45-678 ")), INCORRECT_CAR_NUMBER);
        assert_eq!(message(validate_car_number("  ")), MISSING_CAR_NUMBER);
    }

    #[test]
    fn test_person_id_bounds_follow_config() {
        let rules = CarsConfig { min_person_id: 100, max_person_id: 200 };
        assert!(validate_person_id(150, &rules).is_ok());
        assert_eq!(message(validate_person_id(99, &rules)), "Person id must be greater than or equal to 100");
        assert_eq!(message(validate_person_id(201, &rules)), "Person id must be less than or equal to 200");
        assert_eq!(
            message(validate_person_id(-5, &CarsConfig::default())),
            "Person id must be greater than or equal to 1"
        );
    }

    #[test]
    fn test_valid_person_passes() {
        assert!(person().validate(&CarsConfig::default()).is_ok());
    }

    #[test]
    fn test_person_violations_are_joined_in_field_order() {
        let bad = PersonDto { id: 0, name: " ".to_owned(), birth_date: "10/10/2000".to_owned(), email: "moshe".to_owned() };
        assert_eq!(
            message(bad.validate(&CarsConfig::default())),
            "Person id must be greater than or equal to 1;Missing person name;\
             Date must be in ISO format (YYYY-MM-DD);Incorrect email address"
        );
    }

    #[test]
    fn test_impossible_calendar_date_is_rejected() {
        let bad = PersonDto { birth_date: "2023-02-30".to_owned(), ..person() };
        assert_eq!(message(bad.validate(&CarsConfig::default())), INCORRECT_DATE);

        let leap = PersonDto { birth_date: "2024-02-29".to_owned(), ..person() };
        assert!(leap.validate(&CarsConfig::default()).is_ok());
    }

    #[test]
    fn test_car_requires_model() {
        let car = CarDto { number: "12-345-67".to_owned(), model: String::new() };
        assert_eq!(message(car.validate(&CarsConfig::default())), MISSING_CAR_MODEL);
    }

    #[test]
    fn test_trade_deal_optional_fields() {
        let rules = CarsConfig::default();
        let release = TradeDealDto { car_number: "123-45-678".to_owned(), person_id: None, date: None };
        assert!(release.validate(&rules).is_ok());

        let bad = TradeDealDto {
            car_number: "123".to_owned(),
            person_id: Some(1_000_000_000),
            date: Some("2024-13-01".to_owned()),
        };
        assert_eq!(
            message(bad.validate(&rules)),
            "Incorrect car number;Person id must be less than or equal to 999999999;\
             Date must be in ISO format (YYYY-MM-DD)"
        );
    }
}
