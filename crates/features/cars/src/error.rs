use std::borrow::Cow;

pub(crate) const PERSON_NOT_FOUND: &str = "Person not found";
pub(crate) const CAR_NOT_FOUND: &str = "Car not found";
pub(crate) const PERSON_ALREADY_EXISTS: &str = "Person already exists";
pub(crate) const CAR_ALREADY_EXISTS: &str = "Car already exists";
pub(crate) const DEAL_ILLEGAL_STATE: &str = "Deal illegal state";

/// Failures of the cars slice. The `message` of each variant is what the
/// client receives; `context` only reaches the logs.
#[carhub_derive::carhub_error]
pub enum CarsError {
    #[error("{message}{}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("{message}{}", format_context(.context))]
    AlreadyExists { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The requested transfer would not change ownership.
    #[error("{message}{}", format_context(.context))]
    Conflict { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// One or more request fields were rejected; `message` joins them with `;`.
    #[error("{message}{}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl CarsError {
    #[must_use]
    pub const fn person_not_found() -> Self {
        Self::NotFound { message: Cow::Borrowed(PERSON_NOT_FOUND), context: None }
    }

    #[must_use]
    pub const fn car_not_found() -> Self {
        Self::NotFound { message: Cow::Borrowed(CAR_NOT_FOUND), context: None }
    }

    #[must_use]
    pub const fn person_already_exists() -> Self {
        Self::AlreadyExists { message: Cow::Borrowed(PERSON_ALREADY_EXISTS), context: None }
    }

    #[must_use]
    pub const fn car_already_exists() -> Self {
        Self::AlreadyExists { message: Cow::Borrowed(CAR_ALREADY_EXISTS), context: None }
    }

    #[must_use]
    pub const fn illegal_deal() -> Self {
        Self::Conflict { message: Cow::Borrowed(DEAL_ILLEGAL_STATE), context: None }
    }

    pub fn validation(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Validation { message: message.into(), context: None }
    }

    /// The client-facing message without context.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::NotFound { message, .. }
            | Self::AlreadyExists { message, .. }
            | Self::Conflict { message, .. }
            | Self::Validation { message, .. }
            | Self::Internal { message, .. } => message,
        }
    }
}
