//! # Body Extraction & Validation
//!
//! Palette bodies are taken as `Result<Json<T>, JsonRejection>` so a body
//! that is not JSON, or not a JSON object, answers with our `BAD_REQUEST`
//! shape instead of axum's plain-text rejection. [`Validate`] then checks
//! the few rules serde cannot express, such as a non-empty `title`.

use axum::extract::rejection::JsonRejection;
use axum::Json;

use crate::error::AppError;

/// Rules a palette body must satisfy after it deserializes.
pub trait Validate {
    /// Returns the reason the body is unacceptable.
    fn validate(&self) -> Result<(), String>;
}

/// Unwrap a JSON body, turning a rejection into [`AppError::BadRequest`].
pub fn extract_json<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            tracing::debug!(status = %rejection.status(), "rejected palette body");
            Err(AppError::BadRequest(rejection.body_text()))
        }
    }
}

/// Unwrap a JSON body and apply its [`Validate`] rules; a rule violation is
/// [`AppError::Validation`] (422).
pub fn extract_validated_json<T: Validate>(
    body: Result<Json<T>, JsonRejection>,
) -> Result<T, AppError> {
    let value = extract_json(body)?;
    if let Err(reason) = value.validate() {
        tracing::debug!(%reason, "palette body failed validation");
        return Err(AppError::Validation(reason));
    }
    Ok(value)
}
