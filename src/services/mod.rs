//! Servicios del dominio
//!
//! Lógica pura: clasificación de vehículos, normalización de tipos de
//! llamada, duración, agregación de estadísticas y extracción OCR.

pub mod call_type_normalizer;
pub mod duration;
pub mod ocr_extractor;
pub mod stats_aggregator;
pub mod vehicle_classifier;
