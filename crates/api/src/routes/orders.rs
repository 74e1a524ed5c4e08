//! Order route handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use serde_json::Value;

use orderdesk_core::validate_order;

use crate::error::{ApiError, Result};
use crate::state::AppState;
use crate::store;
use crate::translate;

/// Create an order.
///
/// The referenced customer must exist; its id is checked for shape first and
/// then for presence, so a malformed id reports `invalid customer_id` rather
/// than a spurious not-found. The order stores `customer_id` in canonical
/// hex string form.
///
/// # Errors
///
/// Returns `ApiError::Validation` for schema violations,
/// `ApiError::InvalidId` for a malformed customer id, `ApiError::NotFound`
/// for an unknown customer, and `ApiError::Store` if the database is
/// unreachable.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>)> {
    let order = validate_order(&body).map_err(ApiError::Validation)?;

    let customer_id =
        ObjectId::parse_str(&order.customer_id).map_err(|_| ApiError::InvalidId("customer_id"))?;

    let known = state
        .store()
        .count(store::CUSTOMERS, doc! {"_id": customer_id})
        .await?;
    if known == 0 {
        return Err(ApiError::NotFound("customer not found"));
    }

    let document = doc! {
        "customer_id": customer_id.to_hex(),
        "item": order.item,
        "amount": order.amount,
    };
    let id = state.store().insert(store::ORDERS, document).await?;

    let created = state
        .store()
        .find_one(store::ORDERS, doc! {"_id": id})
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(translate::optional_document_to_response(created).unwrap_or(Value::Null)),
    ))
}

/// List all orders.
///
/// # Errors
///
/// Returns `ApiError::Store` if the database is unreachable.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Value>>> {
    let documents = state.store().find_many(store::ORDERS, doc! {}).await?;
    Ok(Json(translate::documents_to_responses(documents)))
}

/// Fetch a single order by id.
///
/// # Errors
///
/// Returns `ApiError::InvalidId` for a malformed id, `ApiError::NotFound`
/// for an unknown one, and `ApiError::Store` if the database is unreachable.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let id = ObjectId::parse_str(&id).map_err(|_| ApiError::InvalidId("id"))?;

    let document = state
        .store()
        .find_one(store::ORDERS, doc! {"_id": id})
        .await?
        .ok_or(ApiError::NotFound("not found"))?;

    Ok(Json(translate::document_to_response(document)))
}

/// Delete an order by id. Deletion is idempotent from the store's point of
/// view, but a second delete of the same id reports not-found.
///
/// # Errors
///
/// Returns `ApiError::InvalidId` for a malformed id, `ApiError::NotFound`
/// for an unknown one, and `ApiError::Store` if the database is unreachable.
pub async fn delete_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id = ObjectId::parse_str(&id).map_err(|_| ApiError::InvalidId("id"))?;

    let deleted = state
        .store()
        .delete_one(store::ORDERS, doc! {"_id": id})
        .await?;
    if deleted == 0 {
        return Err(ApiError::NotFound("not found"));
    }

    Ok(StatusCode::NO_CONTENT)
}
