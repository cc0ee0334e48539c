//! Asset Tracking Backend
//!
//! Servicio de rastreo de activos (vehículos y personal de campo):
//! almacena posiciones con timestamp, expone consultas de historial,
//! filtrado de activos por tipo/ventana de tiempo y centroides.

pub mod config;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
