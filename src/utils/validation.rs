//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de tipos en el borde de la API.

use chrono::{DateTime, Utc};
use validator::ValidationError;

/// Validar el límite de resultados de una consulta
pub fn validate_limit(limit: i64) -> Result<i64, ValidationError> {
    if limit < 1 {
        let mut error = ValidationError::new("limit");
        error.add_param("value".into(), &limit);
        error.add_param("min".into(), &1);
        return Err(error);
    }
    Ok(limit)
}

/// Validar un par de coordenadas geográficas
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), ValidationError> {
    if !(-90.0..=90.0).contains(&latitude) {
        let mut error = ValidationError::new("latitude");
        error.add_param("value".into(), &latitude);
        return Err(error);
    }
    if !(-180.0..=180.0).contains(&longitude) {
        let mut error = ValidationError::new("longitude");
        error.add_param("value".into(), &longitude);
        return Err(error);
    }
    Ok(())
}

/// Convertir segundos epoch a datetime UTC
pub fn datetime_from_epoch(seconds: i64) -> Result<DateTime<Utc>, ValidationError> {
    DateTime::from_timestamp(seconds, 0).ok_or_else(|| {
        let mut error = ValidationError::new("timestamp");
        error.add_param("value".into(), &seconds);
        error
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_limit() {
        assert!(validate_limit(1).is_ok());
        assert!(validate_limit(100).is_ok());
        assert!(validate_limit(0).is_err());
        assert!(validate_limit(-5).is_err());
    }

    #[test]
    fn test_validate_coordinates() {
        assert!(validate_coordinates(12.97, 77.59).is_ok());
        assert!(validate_coordinates(-90.0, 180.0).is_ok());
        assert!(validate_coordinates(91.0, 0.0).is_err());
        assert!(validate_coordinates(0.0, -181.0).is_err());
    }

    #[test]
    fn test_datetime_from_epoch() {
        let dt = datetime_from_epoch(1_700_000_000).unwrap();
        assert_eq!(dt.timestamp(), 1_700_000_000);

        // fuera del rango representable por chrono
        assert!(datetime_from_epoch(i64::MAX).is_err());
    }
}
