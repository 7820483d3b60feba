//! Agregación de estadísticas de llamadas
//!
//! Un único recorrido lineal sobre las filas ya filtradas por ventana.
//! Función pura: no toca la base de datos ni falla nunca.

use crate::models::call::CallStatsRow;
use crate::models::stats::{CallStats, CallTypeCounts};
use crate::services::call_type_normalizer::{canonical_label, ARAN, ATAN, NATBAG, URGENT};
use crate::services::vehicle_classifier::classify;

/// Agregar una lista de llamadas
pub fn aggregate(calls: &[CallStatsRow]) -> CallStats {
    let mut stats = CallStats::default();
    let mut total_minutes: i64 = 0;

    for call in calls {
        stats.total_calls += 1;
        total_minutes += call.duration_minutes.unwrap_or(0).max(0) as i64;

        stats
            .counts_by_vehicle_category
            .increment(classify(&call.vehicle_number));

        // Acepta también tokens heredados sin normalizar que queden en la tabla
        if let Some(label) = canonical_label(&call.call_type) {
            increment_call_type(&mut stats.counts_by_call_type, label);
        }
    }

    stats.total_hours = round_hours(total_minutes);
    stats
}

fn increment_call_type(counts: &mut CallTypeCounts, label: &str) {
    match label {
        URGENT => counts.urgent += 1,
        ATAN => counts.atan += 1,
        ARAN => counts.aran += 1,
        NATBAG => counts.natbag += 1,
        _ => {}
    }
}

/// Minutos a horas, redondeado a 2 decimales
fn round_hours(minutes: i64) -> f64 {
    let hours = minutes as f64 / 60.0;
    (hours * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vehicle::VehicleCategory;

    fn row(call_type: &str, vehicle_number: &str, duration: Option<i32>) -> CallStatsRow {
        CallStatsRow {
            call_type: call_type.to_string(),
            vehicle_number: vehicle_number.to_string(),
            duration_minutes: duration,
        }
    }

    #[test]
    fn test_total_hours_from_durations() {
        let stats = aggregate(&[row(URGENT, "5123", Some(60)), row(URGENT, "5123", Some(30))]);
        assert_eq!(stats.total_hours, 1.5);
        assert_eq!(stats.total_calls, 2);
    }

    #[test]
    fn test_empty_input_yields_zeroes() {
        let stats = aggregate(&[]);
        assert_eq!(stats.total_calls, 0);
        assert_eq!(stats.total_hours, 0.0);
        assert_eq!(stats, CallStats::default());
        for category in [
            VehicleCategory::Motorcycle,
            VehicleCategory::Picanto,
            VehicleCategory::Ambulance,
            VehicleCategory::PersonalStandby,
        ] {
            assert_eq!(stats.counts_by_vehicle_category.get(category), 0);
        }
    }

    #[test]
    fn test_missing_durations_count_as_zero() {
        let stats = aggregate(&[row(ATAN, "6001", None), row(ATAN, "6001", Some(20))]);
        assert_eq!(stats.total_hours, 0.33);
    }

    #[test]
    fn test_negative_durations_count_as_zero() {
        let stats = aggregate(&[row(ARAN, "6001", Some(-45)), row(ARAN, "6001", Some(90))]);
        assert_eq!(stats.total_calls, 2);
        assert_eq!(stats.total_hours, 1.5);
    }

    #[test]
    fn test_breakdown_by_vehicle_category() {
        let stats = aggregate(&[
            row(URGENT, "5123", None),
            row(URGENT, "6123", None),
            row(URGENT, "12345", None),
            row(URGENT, "", None),
            row(URGENT, "777", None),
        ]);
        let counts = &stats.counts_by_vehicle_category;
        assert_eq!(counts.motorcycle, 1);
        assert_eq!(counts.picanto, 1);
        assert_eq!(counts.personal_standby, 1);
        assert_eq!(counts.ambulance, 2);
    }

    #[test]
    fn test_unknown_call_types_only_count_in_total() {
        let stats = aggregate(&[
            row(URGENT, "5123", None),
            row("אט״ן", "5123", None),
            row("natbag", "5123", None),
            row("something else", "5123", None),
        ]);
        assert_eq!(stats.total_calls, 4);
        let by_type = &stats.counts_by_call_type;
        assert_eq!(by_type.urgent, 1);
        assert_eq!(by_type.atan, 1);
        assert_eq!(by_type.aran, 0);
        assert_eq!(by_type.natbag, 1);
        assert_eq!(by_type.urgent + by_type.atan + by_type.aran + by_type.natbag, 3);
    }
}
