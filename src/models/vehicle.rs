//! Modelo de categoría de vehículo
//!
//! La categoría nunca se guarda por separado del número: siempre se deriva
//! del código MDA o del número de vehículo.

use serde::{Deserialize, Serialize};

/// Categoría de vehículo derivada del código numérico
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum VehicleCategory {
    Motorcycle,
    Picanto,
    Ambulance,
    PersonalStandby,
}

impl VehicleCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleCategory::Motorcycle => "motorcycle",
            VehicleCategory::Picanto => "picanto",
            VehicleCategory::Ambulance => "ambulance",
            VehicleCategory::PersonalStandby => "personal_standby",
        }
    }

    /// Etiqueta en hebreo para mostrar en el dashboard
    pub fn display_name(&self) -> &'static str {
        match self {
            VehicleCategory::Motorcycle => "אופנוע",
            VehicleCategory::Picanto => "פיקנטו",
            VehicleCategory::Ambulance => "אמבולנס",
            VehicleCategory::PersonalStandby => "כונן אישי",
        }
    }
}

/// Response del endpoint de clasificación
#[derive(Debug, Serialize)]
pub struct VehicleTypeResponse {
    pub code: String,
    pub vehicle_type: VehicleCategory,
    pub display_name: String,
}

impl VehicleTypeResponse {
    pub fn new(code: String, vehicle_type: VehicleCategory) -> Self {
        Self {
            code,
            vehicle_type,
            display_name: vehicle_type.display_name().to_string(),
        }
    }
}
