//! Booking handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde_json::Value;
use tracing::info;

use cardoctor_core::types::{DeleteResult, Document, InsertResult, UpdateResult};

use crate::dto::request::{BookingQuery, StatusUpdateRequest};
use crate::error::ApiError;
use crate::extractors::{VerifiedIdentity, parse_document_id};
use crate::state::AppState;

/// GET /bookings?email=
///
/// Requires a session; the requested email must be the token's own.
pub async fn list_bookings(
    State(state): State<AppState>,
    identity: VerifiedIdentity,
    Query(query): Query<BookingQuery>,
) -> Result<Json<Vec<Document>>, ApiError> {
    info!(
        requested = ?query.email,
        token_email = ?identity.email(),
        "Listing bookings"
    );

    let owner = state
        .access_guard
        .enforce(&identity, query.email.as_deref())?;
    let bookings = state.booking_repo.find_by_owner(owner).await?;
    Ok(Json(bookings))
}

/// POST /bookings
pub async fn create_booking(
    State(state): State<AppState>,
    Json(booking): Json<Document>,
) -> Result<Json<InsertResult>, ApiError> {
    let result = state.booking_repo.create(booking).await?;
    info!(id = %result.inserted_id, "Booking created");
    Ok(Json(result))
}

/// PATCH /bookings/{id}
///
/// A body without `status` sets it to `null`.
pub async fn update_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<StatusUpdateRequest>,
) -> Result<Json<UpdateResult>, ApiError> {
    let id = parse_document_id(&id)?;
    let status = req.status.unwrap_or(Value::Null);

    let result = state.booking_repo.update_status(&id, status).await?;
    Ok(Json(result))
}

/// DELETE /bookings/{id}
pub async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResult>, ApiError> {
    let id = parse_document_id(&id)?;
    let result = state.booking_repo.delete(&id).await?;
    Ok(Json(result))
}
