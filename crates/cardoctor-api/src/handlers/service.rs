//! Service catalog handlers.

use axum::Json;
use axum::extract::{Path, State};

use cardoctor_core::types::Document;

use crate::error::ApiError;
use crate::extractors::parse_document_id;
use crate::state::AppState;

/// GET /services
pub async fn list_services(
    State(state): State<AppState>,
) -> Result<Json<Vec<Document>>, ApiError> {
    let services = state.service_repo.list_all().await?;
    Ok(Json(services))
}

/// GET /services/{id}
///
/// Responds with `null` when no service has the id.
pub async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<Document>>, ApiError> {
    let id = parse_document_id(&id)?;
    let service = state.service_repo.find_summary(&id).await?;
    Ok(Json(service))
}
