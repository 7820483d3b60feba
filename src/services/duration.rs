//! Cálculo de duración de llamadas

use chrono::NaiveTime;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Minutos entre inicio y fin. Si el fin es anterior al inicio la llamada
/// cruzó la medianoche.
pub fn duration_minutes(start: NaiveTime, end: NaiveTime) -> i32 {
    let mut minutes = (end - start).num_minutes();
    if minutes < 0 {
        minutes += MINUTES_PER_DAY;
    }
    minutes as i32
}

/// Duración opcional: sólo existe cuando hay hora de fin
pub fn derive_duration(start: NaiveTime, end: Option<NaiveTime>) -> Option<i32> {
    end.map(|end| duration_minutes(start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_same_day_duration() {
        assert_eq!(duration_minutes(t(8, 0), t(9, 30)), 90);
        assert_eq!(duration_minutes(t(8, 0), t(8, 0)), 0);
    }

    #[test]
    fn test_duration_across_midnight() {
        assert_eq!(duration_minutes(t(23, 30), t(0, 15)), 45);
    }

    #[test]
    fn test_derive_duration_without_end() {
        assert_eq!(derive_duration(t(10, 0), None), None);
        assert_eq!(derive_duration(t(10, 0), Some(t(10, 20))), Some(20));
    }
}
