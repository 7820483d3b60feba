//! Modelos de estadísticas
//!
//! Ventanas de tiempo del dashboard y la estructura agregada que devuelve
//! el agregador.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::models::vehicle::VehicleCategory;

/// Ventana de tiempo para las estadísticas
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatsWindow {
    #[default]
    Today,
    Week,
    Month,
}

impl StatsWindow {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatsWindow::Today => "today",
            StatsWindow::Week => "week",
            StatsWindow::Month => "month",
        }
    }

    /// Número de días que cubre la ventana, incluyendo hoy
    pub fn days(&self) -> i64 {
        match self {
            StatsWindow::Today => 1,
            StatsWindow::Week => 7,
            StatsWindow::Month => 30,
        }
    }

    /// Rango de fechas inclusivo `[from, to]` que termina en `today`
    pub fn date_range(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        (today - Duration::days(self.days() - 1), today)
    }
}

impl FromStr for StatsWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "today" | "day" | "1d" => Ok(StatsWindow::Today),
            "week" | "7d" | "7days" => Ok(StatsWindow::Week),
            "month" | "30d" | "30days" => Ok(StatsWindow::Month),
            other => Err(format!("Ventana de estadísticas desconocida: '{}'", other)),
        }
    }
}

/// Contadores por tipo de llamada canónico
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct CallTypeCounts {
    #[serde(rename = "דחוף")]
    pub urgent: u32,
    #[serde(rename = "אט\"ן")]
    pub atan: u32,
    #[serde(rename = "אר\"ן")]
    pub aran: u32,
    #[serde(rename = "נתב\"ג")]
    pub natbag: u32,
}

/// Contadores por categoría de vehículo
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct VehicleCategoryCounts {
    pub motorcycle: u32,
    pub picanto: u32,
    pub ambulance: u32,
    pub personal_standby: u32,
}

impl VehicleCategoryCounts {
    pub fn increment(&mut self, category: VehicleCategory) {
        match category {
            VehicleCategory::Motorcycle => self.motorcycle += 1,
            VehicleCategory::Picanto => self.picanto += 1,
            VehicleCategory::Ambulance => self.ambulance += 1,
            VehicleCategory::PersonalStandby => self.personal_standby += 1,
        }
    }

    pub fn get(&self, category: VehicleCategory) -> u32 {
        match category {
            VehicleCategory::Motorcycle => self.motorcycle,
            VehicleCategory::Picanto => self.picanto,
            VehicleCategory::Ambulance => self.ambulance,
            VehicleCategory::PersonalStandby => self.personal_standby,
        }
    }
}

/// Resultado de la agregación
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CallStats {
    pub total_calls: u32,
    pub total_hours: f64,
    pub counts_by_call_type: CallTypeCounts,
    pub counts_by_vehicle_category: VehicleCategoryCounts,
}

/// Response del endpoint de estadísticas
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub window: StatsWindow,
    pub from: NaiveDate,
    pub to: NaiveDate,
    #[serde(flatten)]
    pub stats: CallStats,
}

/// Query params de estadísticas
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatsQuery {
    pub window: Option<String>,
    pub user_id: Option<uuid::Uuid>,
}
