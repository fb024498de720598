use carhub_derive::carhub_error;
use std::borrow::Cow;

#[carhub_error]
pub enum RegistryError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse {
        #[source]
        source: std::num::ParseIntError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse_id(raw: &str) -> Result<u64> {
    Ok(raw.parse::<u64>().context("person id")?)
}

#[test]
fn carhub_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/carhub_error_pass.rs");
}

#[test]
fn source_errors_convert_with_context() {
    let err = parse_id("abc").expect_err("non-numeric id must fail");

    assert!(matches!(err, RegistryError::Parse { context: Some(ref c), .. } if c == "person id"));
    assert!(err.to_string().starts_with("Parse error (person id): "));
}

#[test]
fn context_is_attached_to_existing_errors() {
    let failing: Result<()> =
        Err(RegistryError::NotFound { message: "Car not found".into(), context: None });

    let err = failing.context("deleteCar").expect_err("error must be preserved");

    assert_eq!(err.to_string(), "Not found (deleteCar): Car not found");
}

#[test]
fn plain_strings_become_internal_errors() {
    let from_static = RegistryError::from("lock poisoned");
    let from_owned = RegistryError::from(format!("slot {} missing", 7));

    assert!(matches!(from_static, RegistryError::Internal { .. }));
    assert_eq!(from_owned.to_string(), "Internal error: slot 7 missing");
}
