use crate::error::CarsError;
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;

/// `Json` whose rejections become [`CarsError::Validation`] (400).
#[derive(Debug, Clone, Copy, Default)]
pub struct CarsJson<T>(pub T);

impl<S, T> FromRequest<S> for CarsJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = CarsError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| CarsError::validation(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// `Path` whose rejections become [`CarsError::Validation`] (400).
#[derive(Debug, Clone, Copy, Default)]
pub struct CarsPath<T>(pub T);

impl<S, T> FromRequestParts<S> for CarsPath<T>
where
    Path<T>: FromRequestParts<S, Rejection = PathRejection>,
    S: Send + Sync,
{
    type Rejection = CarsError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| CarsError::validation(rejection.body_text()))?;
        Ok(Self(value))
    }
}
