//! Clasificación de vehículos por código MDA
//!
//! El patrón de dígitos del código (número de vehículo o código MDA del
//! conductor) determina la categoría. La clasificación nunca falla: cualquier
//! entrada vacía o no numérica cae en ambulancia.

use crate::models::vehicle::VehicleCategory;

/// Clasificar un código numérico. Primera regla que coincide gana.
pub fn classify(code: &str) -> VehicleCategory {
    let code = code.trim();

    if code.is_empty() || !code.chars().all(|c| c.is_ascii_digit()) {
        return VehicleCategory::Ambulance;
    }

    let first = code.as_bytes()[0];
    match (code.len(), first) {
        (5, b'1') | (5, b'2') => VehicleCategory::PersonalStandby,
        (4, b'5') => VehicleCategory::Motorcycle,
        (4, b'6') => VehicleCategory::Picanto,
        _ => VehicleCategory::Ambulance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_digit_codes_starting_with_five_are_motorcycles() {
        for code in ["5000", "5123", "5999"] {
            assert_eq!(classify(code), VehicleCategory::Motorcycle, "code {}", code);
        }
    }

    #[test]
    fn test_four_digit_codes_starting_with_six_are_picantos() {
        for code in ["6000", "6543", "6999"] {
            assert_eq!(classify(code), VehicleCategory::Picanto, "code {}", code);
        }
    }

    #[test]
    fn test_five_digit_codes_starting_with_one_or_two_are_personal_standby() {
        for code in ["10000", "12345", "20001", "29999"] {
            assert_eq!(classify(code), VehicleCategory::PersonalStandby, "code {}", code);
        }
    }

    #[test]
    fn test_other_numeric_codes_fall_back_to_ambulance() {
        for code in ["1234", "99999", "12", "7123", "30000", "123456", "555"] {
            assert_eq!(classify(code), VehicleCategory::Ambulance, "code {}", code);
        }
    }

    #[test]
    fn test_empty_and_non_numeric_codes_are_ambulance() {
        assert_eq!(classify(""), VehicleCategory::Ambulance);
        assert_eq!(classify("   "), VehicleCategory::Ambulance);
        assert_eq!(classify("5a12"), VehicleCategory::Ambulance);
        assert_eq!(classify("abcd"), VehicleCategory::Ambulance);
        assert_eq!(classify("٥١٢٣"), VehicleCategory::Ambulance);
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(classify(" 5123 "), VehicleCategory::Motorcycle);
        assert_eq!(classify("\t12345\n"), VehicleCategory::PersonalStandby);
    }
}
