//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación: el motor
//! de consulta/filtrado de activos y las operaciones de alta y reporte
//! de posiciones.

pub mod asset_creation_service;
pub mod asset_retrieval_service;

pub use asset_creation_service::*;
pub use asset_retrieval_service::*;
