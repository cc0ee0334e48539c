use axum::{
    extract::{Path, Query, State},
    routing::{get, patch, post},
    Json, Router,
};
use uuid::Uuid;

use crate::dto::asset_dto::{
    AssetCreatedResponse, AssetDataResponse, AssetExportData, AssetFilterQuery,
    AssetHistoryResponse, AssetResponse, CreateAssetRequest, LocationUpdateRequest,
    SeedDataRequest,
};
use crate::dto::ApiResponse;
use crate::services::asset_creation_service::AssetCreationService;
use crate::services::asset_retrieval_service::AssetRetrievalService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_limit;

/// Límite por defecto del listado filtrado
const DEFAULT_LIMIT: i64 = 100;

/// Cantidad por defecto del seeder de demo
const DEFAULT_SEED_COUNT: u32 = 10;

pub fn create_asset_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_asset))
        .route("/", get(list_assets))
        .route("/export", get(export_assets))
        .route("/seed", post(seed_assets))
        .route("/:id", get(get_asset))
        .route("/:id/location", patch(update_asset_location))
        .route("/:id/history", get(get_asset_history))
}

async fn create_asset(
    State(state): State<AppState>,
    Json(request): Json<CreateAssetRequest>,
) -> Result<Json<ApiResponse<AssetCreatedResponse>>, AppError> {
    let service = AssetCreationService::new(state.pool.clone());
    let response = service.create_asset(request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Activo creado exitosamente".to_string(),
    )))
}

async fn list_assets(
    State(state): State<AppState>,
    Query(query): Query<AssetFilterQuery>,
) -> Result<Json<AssetDataResponse>, AppError> {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
    let limit = validate_limit(limit)
        .map_err(|_| AppError::BadRequest(format!("Limit must be at least 1, got {}", limit)))?;

    let service = AssetRetrievalService::new(state.pool.clone());
    let response = service
        .get_assets_filtered_by(query.asset_type, query.start, query.end, limit)
        .await?;
    Ok(Json(response))
}

async fn export_assets(
    State(state): State<AppState>,
) -> Result<Json<Vec<AssetExportData>>, AppError> {
    let service = AssetRetrievalService::new(state.pool.clone());
    let rows = service.export_data().await?;
    Ok(Json(rows))
}

async fn get_asset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AssetResponse>, AppError> {
    let service = AssetRetrievalService::new(state.pool.clone());
    let asset = service.get_asset_for_id(id).await?;
    Ok(Json(asset.into()))
}

async fn get_asset_history(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AssetHistoryResponse>, AppError> {
    let service = AssetRetrievalService::new(state.pool.clone());
    let response = service.get_history_for_asset(id).await?;
    Ok(Json(response))
}

async fn update_asset_location(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<LocationUpdateRequest>,
) -> Result<Json<ApiResponse<AssetResponse>>, AppError> {
    let service = AssetCreationService::new(state.pool.clone());
    let asset = service.update_asset_location(id, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        asset.into(),
        "Posición actualizada exitosamente".to_string(),
    )))
}

async fn seed_assets(
    State(state): State<AppState>,
    Json(request): Json<SeedDataRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let count = request.count.unwrap_or(DEFAULT_SEED_COUNT);
    let service = AssetCreationService::new(state.pool.clone());
    let ids = service.seed_demo_assets(count).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": format!("Se crearon {} activos de demo", ids.len()),
        "ids": ids,
    })))
}
