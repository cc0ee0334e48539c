//! DTOs del recurso asset
//!
//! Requests con validación y responses derivadas de los modelos.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::models::asset::Asset;
use crate::models::location::LocationData;
use crate::utils::geo::Point;

/// Posición cruda dentro de una request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LocationDto {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

/// Posición con su timestamp de captura en segundos epoch
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LocationDataDto {
    #[validate]
    pub location: LocationDto,

    pub timestamp: i64,
}

/// Request para crear un nuevo activo con su posición inicial
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAssetRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(max = 255))]
    pub description: String,

    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 50))]
    pub asset_type: String,

    #[validate]
    pub location: LocationDataDto,
}

/// Response con el id del activo creado
#[derive(Debug, Serialize)]
pub struct AssetCreatedResponse {
    pub id: Uuid,
}

/// Request para reportar una nueva posición de un activo existente
#[derive(Debug, Deserialize, Validate)]
pub struct LocationUpdateRequest {
    #[validate]
    pub location: LocationDataDto,
}

/// Query params del listado filtrado de activos
#[derive(Debug, Deserialize)]
pub struct AssetFilterQuery {
    #[serde(rename = "type")]
    pub asset_type: Option<String>,
    pub start: Option<i64>,
    pub end: Option<i64>,
    pub limit: Option<i64>,
}

/// Response de activo para la API
#[derive(Debug, Serialize)]
pub struct AssetResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub asset_type: String,
    pub latitude: f64,
    pub longitude: f64,
    pub last_reported_at: String,
    pub created_at: String,
}

impl From<Asset> for AssetResponse {
    fn from(asset: Asset) -> Self {
        Self {
            id: asset.id,
            name: asset.name,
            description: asset.description,
            asset_type: asset.asset_type,
            latitude: asset.latitude,
            longitude: asset.longitude,
            last_reported_at: asset.last_reported_at.to_rfc3339(),
            created_at: asset.created_at.to_rfc3339(),
        }
    }
}

/// Registro de historial para la API
#[derive(Debug, Serialize)]
pub struct LocationDataResponse {
    pub id: Uuid,
    pub latitude: f64,
    pub longitude: f64,
    pub recorded_at: String,
}

impl From<LocationData> for LocationDataResponse {
    fn from(location: LocationData) -> Self {
        Self {
            id: location.id,
            latitude: location.latitude,
            longitude: location.longitude,
            recorded_at: location.recorded_at.to_rfc3339(),
        }
    }
}

/// Response con los activos encontrados y su centroide
#[derive(Debug, Serialize)]
pub struct AssetDataResponse {
    pub centroid: Point,
    pub assets: Vec<AssetResponse>,
}

/// Response con el activo, su historial de 24h (más reciente primero)
/// y el centroide del historial
#[derive(Debug, Serialize)]
pub struct AssetHistoryResponse {
    pub asset: AssetResponse,
    pub history: Vec<LocationDataResponse>,
    pub centroid: Point,
}

/// Fila desnormalizada del export de activos.
///
/// `Default` produce la fila centinela "sin datos": el export nunca
/// devuelve una colección vacía a sus consumidores.
#[derive(Debug, Clone, Default, Serialize, FromRow)]
pub struct AssetExportData {
    pub asset_id: Option<Uuid>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub asset_type: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub recorded_at: Option<DateTime<Utc>>,
}

/// Request del seeder de datos de demo
#[derive(Debug, Deserialize)]
pub struct SeedDataRequest {
    pub count: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_sentinel_has_empty_fields() {
        let sentinel = AssetExportData::default();
        assert!(sentinel.asset_id.is_none());
        assert!(sentinel.name.is_none());
        assert!(sentinel.asset_type.is_none());
        assert!(sentinel.latitude.is_none());
        assert!(sentinel.longitude.is_none());
        assert!(sentinel.recorded_at.is_none());
    }

    #[test]
    fn test_create_request_validates_coordinates() {
        let request = CreateAssetRequest {
            name: "MH-12-AB-1234".to_string(),
            description: "Delivery truck".to_string(),
            asset_type: "TRUCK".to_string(),
            location: LocationDataDto {
                location: LocationDto {
                    latitude: 95.0,
                    longitude: 77.59,
                },
                timestamp: 1_700_000_000,
            },
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_request_accepts_valid_input() {
        let request = CreateAssetRequest {
            name: "MH-12-AB-1234".to_string(),
            description: "Delivery truck".to_string(),
            asset_type: "TRUCK".to_string(),
            location: LocationDataDto {
                location: LocationDto {
                    latitude: 12.9716,
                    longitude: 77.5946,
                },
                timestamp: 1_700_000_000,
            },
        };
        assert!(request.validate().is_ok());
    }
}
