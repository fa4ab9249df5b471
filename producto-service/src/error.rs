use crate::repository;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::{collections::BTreeMap, fmt::Display};
use time::OffsetDateTime;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("producto not exist")]
    ProductoNotExist,

    #[error("categoria not exist")]
    CategoriaNotExist,

    #[error("post not exist")]
    PostNotExist,

    #[error("validation error: {0}")]
    Validation(ValidationErrors),

    #[error("upstream error: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("database error: {0}")]
    Database(#[from] repository::Error),
}

///
/// Field name to message of every field that failed validation
///
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<&'static str, &'static str>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// Only the first message of each field is kept
    ///
    pub fn add(&mut self, field: &'static str, message: &'static str) {
        self.0.entry(field).or_insert(message);
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_result(self) -> Result<(), Error> {
        match self.is_empty() {
            true => Ok(()),
            false => Err(Error::Validation(self)),
        }
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{field} {message}")?;
            first = false;
        }

        Ok(())
    }
}

#[derive(Serialize)]
struct NotFoundBody {
    error: String,
    #[serde(with = "time::serde::rfc3339")]
    timestamp: OffsetDateTime,
}

#[derive(Serialize)]
struct ValidationBody {
    status: u16,
    error: &'static str,
    #[serde(with = "time::serde::rfc3339")]
    timestamp: OffsetDateTime,
    errors: ValidationErrors,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::warn!(err = %self);

        match self {
            Error::ProductoNotExist | Error::CategoriaNotExist | Error::PostNotExist => {
                let body = NotFoundBody {
                    error: self.to_string(),
                    timestamp: OffsetDateTime::now_utc(),
                };
                (StatusCode::NOT_FOUND, Json(body)).into_response()
            }
            Error::Validation(errors) => {
                let body = ValidationBody {
                    status: StatusCode::BAD_REQUEST.as_u16(),
                    error: "validation error",
                    timestamp: OffsetDateTime::now_utc(),
                    errors,
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            Error::Upstream(_) => StatusCode::BAD_GATEWAY.into_response(),
            Error::Database(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}
