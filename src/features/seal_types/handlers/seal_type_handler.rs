use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::seal_types::dtos::SealTypeResponseDto;
use crate::features::seal_types::services::SealTypeService;
use crate::shared::types::{ApiResponse, Meta};

/// List all seal types
#[utoipa::path(
    get,
    path = "/api/seal-types",
    responses(
        (status = 200, description = "List of seal types", body = ApiResponse<Vec<SealTypeResponseDto>>),
    ),
    tag = "seal-types"
)]
pub async fn list_seal_types(
    State(service): State<Arc<SealTypeService>>,
) -> Result<Json<ApiResponse<Vec<SealTypeResponseDto>>>> {
    let seal_types = service.list().await?;
    let total = seal_types.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(seal_types),
        None,
        Some(Meta { total }),
    )))
}
