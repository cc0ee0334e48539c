//! Filtro de consulta de activos
//!
//! Clasifica la combinación de filtros opcionales (tipo, rango de
//! tiempo) en exactamente uno de cuatro modos de consulta mutuamente
//! excluyentes. La clasificación es total: toda combinación de entradas
//! cae en un modo o falla la validación del rango de tiempo.

use chrono::{DateTime, Utc};

use crate::utils::errors::AppError;
use crate::utils::validation::datetime_from_epoch;

/// Modo de consulta clasificado a partir de los filtros opcionales
#[derive(Debug, Clone, PartialEq)]
pub enum AssetFilter {
    /// Sin filtros: todos los activos
    None,
    /// Solo filtro por tipo de activo
    ByType(String),
    /// Solo filtro por ventana de tiempo
    ByTime(DateTime<Utc>, DateTime<Utc>),
    /// Filtro por tipo y ventana de tiempo
    ByTypeAndTime(String, DateTime<Utc>, DateTime<Utc>),
}

impl AssetFilter {
    /// Clasifica los parámetros crudos de la query en un modo de filtro.
    ///
    /// Un tipo vacío o de solo espacios cuenta como "sin filtro de tipo".
    /// Un rango de tiempo parcial (solo start o solo end) cuenta como
    /// "sin filtro de tiempo" y el límite proporcionado se descarta;
    /// comportamiento heredado del contrato de la API, pendiente de
    /// aclaración de producto.
    ///
    /// Con ambos límites presentes se valida `start <= end` sobre los
    /// valores crudos, antes de cualquier acceso al almacén.
    pub fn classify(
        asset_type: Option<String>,
        start: Option<i64>,
        end: Option<i64>,
    ) -> Result<Self, AppError> {
        let asset_type = asset_type.filter(|t| !t.trim().is_empty());

        let time_range = match (start, end) {
            (Some(start), Some(end)) => {
                if start > end {
                    return Err(AppError::InvalidFilter { start, end });
                }
                let start_at = datetime_from_epoch(start).map_err(|_| {
                    AppError::BadRequest(format!("Invalid start timestamp: {}", start))
                })?;
                let end_at = datetime_from_epoch(end)
                    .map_err(|_| AppError::BadRequest(format!("Invalid end timestamp: {}", end)))?;
                Some((start_at, end_at))
            }
            (Some(dropped), None) | (None, Some(dropped)) => {
                log::warn!(
                    "Partial time range: only one bound given [{}], ignoring time filter",
                    dropped
                );
                None
            }
            (None, None) => None,
        };

        let filter = match (asset_type, time_range) {
            (None, None) => AssetFilter::None,
            (Some(t), None) => AssetFilter::ByType(t),
            (None, Some((s, e))) => AssetFilter::ByTime(s, e),
            (Some(t), Some((s, e))) => AssetFilter::ByTypeAndTime(t, s, e),
        };

        Ok(filter)
    }
}
