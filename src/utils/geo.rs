//! Utilidades geoespaciales
//!
//! Punto 2D y cálculo de centroide sobre conjuntos de posiciones.
//! El centroide es derivado, nunca se persiste.

use serde::{Deserialize, Serialize};

use crate::utils::errors::AppError;

/// Punto geográfico simple: latitud/longitud en grados decimales
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub latitude: f64,
    pub longitude: f64,
}

impl Point {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Punto cero, usado como centroide de un conjunto vacío de activos
    pub fn origin() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Centroide (media aritmética de latitudes y longitudes) de un conjunto
/// no vacío de posiciones. Los llamadores comprueban el vacío antes de
/// invocar; un conjunto vacío es un error de guardia interno.
pub fn centroid(points: &[Point]) -> Result<Point, AppError> {
    if points.is_empty() {
        return Err(AppError::EmptyInput(
            "centroid requires at least one position".to_string(),
        ));
    }

    let count = points.len() as f64;
    let lat_sum: f64 = points.iter().map(|p| p.latitude).sum();
    let lng_sum: f64 = points.iter().map(|p| p.longitude).sum();

    Ok(Point::new(lat_sum / count, lng_sum / count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centroid_single_point_is_identity() {
        let p = Point::new(12.9716, 77.5946);
        let c = centroid(&[p]).unwrap();
        assert_eq!(c, p);
    }

    #[test]
    fn test_centroid_equal_points_is_that_point() {
        let p = Point::new(-33.5, -70.25);
        let points = vec![p; 5];
        let c = centroid(&points).unwrap();
        assert_eq!(c, p);
    }

    #[test]
    fn test_centroid_is_arithmetic_mean() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 20.0),
            Point::new(20.0, 40.0),
        ];
        let c = centroid(&points).unwrap();
        assert!((c.latitude - 10.0).abs() < f64::EPSILON);
        assert!((c.longitude - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_centroid_empty_input_is_guarded() {
        let result = centroid(&[]);
        assert!(matches!(result, Err(AppError::EmptyInput(_))));
    }
}
