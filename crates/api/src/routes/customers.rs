//! Customer route handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use mongodb::bson::{DateTime, doc};
use serde_json::Value;

use orderdesk_core::validate_customer;

use crate::error::{ApiError, Result};
use crate::state::AppState;
use crate::store::{self, StoreError};
use crate::translate;

/// Create a customer.
///
/// Pipeline: validate the body, reject emails already on file, insert with a
/// server-assigned `created_at`, then re-fetch the stored document so the
/// response reflects exactly what was persisted.
///
/// The uniqueness pre-check keeps the common duplicate path cheap; the
/// store's unique index backs it up, so two concurrent requests with the
/// same email cannot both succeed. Both paths surface the same error.
///
/// # Errors
///
/// Returns `ApiError::Validation` for schema violations,
/// `ApiError::DuplicateEmail` for a taken email, and `ApiError::Store` if
/// the database is unreachable.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>)> {
    let customer = validate_customer(&body).map_err(ApiError::Validation)?;

    let taken = state
        .store()
        .count(store::CUSTOMERS, doc! {"email": customer.email.as_str()})
        .await?;
    if taken != 0 {
        return Err(ApiError::DuplicateEmail);
    }

    let document = doc! {
        "name": customer.name,
        "email": customer.email.into_inner(),
        "created_at": DateTime::now(),
    };
    let id = match state.store().insert(store::CUSTOMERS, document).await {
        Ok(id) => id,
        Err(StoreError::DuplicateKey(_)) => return Err(ApiError::DuplicateEmail),
        Err(err) => return Err(err.into()),
    };

    let created = state
        .store()
        .find_one(store::CUSTOMERS, doc! {"_id": id})
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(translate::optional_document_to_response(created).unwrap_or(Value::Null)),
    ))
}

/// List all customers.
///
/// # Errors
///
/// Returns `ApiError::Store` if the database is unreachable.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Value>>> {
    let documents = state.store().find_many(store::CUSTOMERS, doc! {}).await?;
    Ok(Json(translate::documents_to_responses(documents)))
}
