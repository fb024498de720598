/// `OpenAPI` tag of the cars, owners and trade deal routes.
pub const CARS_TAG: &str = "Cars";
/// `OpenAPI` tag of the health route.
pub const SYSTEM_TAG: &str = "System";

/// Prefix of environment variables overriding configuration (`CARHUB__SERVER__PORT`).
pub const ENV_PREFIX: &str = "CARHUB";
/// Nesting separator of configuration environment variables.
pub const ENV_SEPARATOR: &str = "__";

pub const DEFAULT_PORT: u16 = 4583;
pub const DEFAULT_MIN_PERSON_ID: i64 = 1;
pub const DEFAULT_MAX_PERSON_ID: i64 = 999_999_999;
