//! Extracción de campos desde texto OCR
//!
//! El conductor fotografía la pantalla de despacho y el cliente envía el
//! texto reconocido. Aquí se buscan patrones conocidos para pre-llenar el
//! formulario de llamada. Nada de esto falla: lo que no se reconoce queda
//! en `None`.

use chrono::{NaiveDate, NaiveTime};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::models::vehicle::VehicleCategory;
use crate::services::call_type_normalizer::canonical_label;
use crate::services::vehicle_classifier::classify;

lazy_static! {
    static ref DATE_RE: Regex =
        Regex::new(r"\b(\d{1,2})[/.\-](\d{1,2})[/.\-](\d{4}|\d{2})\b").unwrap();
    static ref ISO_DATE_RE: Regex =
        Regex::new(r"\b(\d{4})[/.\-](\d{1,2})[/.\-](\d{1,2})\b").unwrap();
    static ref TIME_RE: Regex = Regex::new(r"\b([01]?\d|2[0-3]):([0-5]\d)\b").unwrap();
    static ref LABELED_VEHICLE_RE: Regex =
        Regex::new(r"(?i)(?:רכב|ניידת|vehicle|unit)\s*(?:מס['׳]?|no\.?)?\s*[:#]?\s*(\d{3,5})\b").unwrap();
    static ref BARE_VEHICLE_RE: Regex = Regex::new(r"\b(\d{4,5})\b").unwrap();
    static ref CITY_RE: Regex = Regex::new(r"(?m)(?:עיר|יישוב|ישוב)\s*:\s*(.+?)\s*$").unwrap();
    static ref STREET_RE: Regex = Regex::new(r"(?m)(?:רחוב|כתובת)\s*:\s*(.+?)\s*$").unwrap();
}

/// Campos extraídos del texto OCR
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ExtractedCall {
    pub call_date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub vehicle_number: Option<String>,
    pub vehicle_type: Option<VehicleCategory>,
    pub call_type: Option<String>,
    pub city: Option<String>,
    pub street: Option<String>,
}

/// Extraer campos de llamada del texto OCR
pub fn extract(text: &str) -> ExtractedCall {
    let mut extracted = ExtractedCall {
        call_date: find_date(text),
        ..Default::default()
    };

    let times = find_times(text);
    extracted.start_time = times.first().map(|t| t.format("%H:%M").to_string());
    extracted.end_time = times.get(1).map(|t| t.format("%H:%M").to_string());

    extracted.vehicle_number = find_vehicle_number(text);
    extracted.vehicle_type = extracted.vehicle_number.as_deref().map(classify);
    extracted.call_type = find_call_type(text);
    extracted.city = capture_line(&CITY_RE, text);
    extracted.street = capture_line(&STREET_RE, text);

    extracted
}

/// Primera fecha válida del texto, `dd/mm/yyyy` o `yyyy-mm-dd`, la que
/// aparezca antes
fn find_date(text: &str) -> Option<NaiveDate> {
    let day_first = DATE_RE.captures_iter(text).filter_map(|caps| {
        let day: u32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let mut year: i32 = caps[3].parse().ok()?;
        if caps[3].len() == 2 {
            year += 2000;
        }
        let start = caps.get(0)?.start();
        NaiveDate::from_ymd_opt(year, month, day).map(|date| (start, date))
    });

    let year_first = ISO_DATE_RE.captures_iter(text).filter_map(|caps| {
        let year: i32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let day: u32 = caps[3].parse().ok()?;
        let start = caps.get(0)?.start();
        NaiveDate::from_ymd_opt(year, month, day).map(|date| (start, date))
    });

    day_first
        .chain(year_first)
        .min_by_key(|(start, _)| *start)
        .map(|(_, date)| date)
}

fn find_times(text: &str) -> Vec<NaiveTime> {
    TIME_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let hour: u32 = caps[1].parse().ok()?;
            let minute: u32 = caps[2].parse().ok()?;
            NaiveTime::from_hms_opt(hour, minute, 0)
        })
        .take(2)
        .collect()
}

fn find_vehicle_number(text: &str) -> Option<String> {
    if let Some(caps) = LABELED_VEHICLE_RE.captures(text) {
        return Some(caps[1].to_string());
    }

    // Sin etiqueta: ignorar los dígitos que forman parte de fechas y horas
    let scrubbed = ISO_DATE_RE.replace_all(text, " ");
    let scrubbed = DATE_RE.replace_all(&scrubbed, " ");
    let scrubbed = TIME_RE.replace_all(&scrubbed, " ");
    BARE_VEHICLE_RE
        .captures(&scrubbed)
        .map(|caps| caps[1].to_string())
}

fn find_call_type(text: &str) -> Option<String> {
    text.split_whitespace()
        // Sólo se recortan los bordes: las comillas internas de אט"ן quedan
        .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric()))
        .find_map(canonical_label)
        .map(str::to_string)
}

fn capture_line(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .map(|caps| caps[1].trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "מוקד 101\n\
        תאריך: 12/03/2024\n\
        סוג: אט״ן\n\
        רכב: 5123\n\
        עיר: חיפה\n\
        רחוב: הרצל 12\n\
        יציאה 08:15 סיום 09:05";

    #[test]
    fn test_extracts_full_dispatch_screen() {
        let extracted = extract(SAMPLE);
        assert_eq!(extracted.call_date, NaiveDate::from_ymd_opt(2024, 3, 12));
        assert_eq!(extracted.start_time.as_deref(), Some("08:15"));
        assert_eq!(extracted.end_time.as_deref(), Some("09:05"));
        assert_eq!(extracted.vehicle_number.as_deref(), Some("5123"));
        assert_eq!(extracted.vehicle_type, Some(VehicleCategory::Motorcycle));
        assert_eq!(extracted.call_type.as_deref(), Some("אט\"ן"));
        assert_eq!(extracted.city.as_deref(), Some("חיפה"));
        assert_eq!(extracted.street.as_deref(), Some("הרצל 12"));
    }

    #[test]
    fn test_bare_vehicle_number_skips_dates_and_times() {
        let extracted = extract("01.02.2024 14:30 urgent 6042");
        assert_eq!(extracted.vehicle_number.as_deref(), Some("6042"));
        assert_eq!(extracted.vehicle_type, Some(VehicleCategory::Picanto));
        assert_eq!(extracted.call_type.as_deref(), Some("דחוף"));
        assert_eq!(extracted.end_time, None);
    }

    #[test]
    fn test_year_first_date_is_not_a_vehicle_number() {
        let extracted = extract("2024-03-12 08:15 urgent");
        assert_eq!(extracted.call_date, NaiveDate::from_ymd_opt(2024, 3, 12));
        assert_eq!(extracted.start_time.as_deref(), Some("08:15"));
        assert_eq!(extracted.vehicle_number, None);
        assert_eq!(extracted.vehicle_type, None);
        assert_eq!(extracted.call_type.as_deref(), Some("דחוף"));
    }

    #[test]
    fn test_earliest_date_wins_across_formats() {
        let extracted = extract("נוצר 2024/01/05 עודכן 07.01.2024 רכב 6042");
        assert_eq!(extracted.call_date, NaiveDate::from_ymd_opt(2024, 1, 5));
        assert_eq!(extracted.vehicle_number.as_deref(), Some("6042"));
    }

    #[test]
    fn test_call_type_with_surrounding_punctuation() {
        let extracted = extract("Urgent! רכב 5123");
        assert_eq!(extracted.call_type.as_deref(), Some("דחוף"));
        assert_eq!(extracted.vehicle_type, Some(VehicleCategory::Motorcycle));

        let quoted = extract("סוג: \"natbag\"?");
        assert_eq!(quoted.call_type.as_deref(), Some("נתב\"ג"));

        let hebrew = extract("(אר\"ן)");
        assert_eq!(hebrew.call_type.as_deref(), Some("אר\"ן"));
    }

    #[test]
    fn test_two_digit_year() {
        let extracted = extract("5/6/24");
        assert_eq!(extracted.call_date, NaiveDate::from_ymd_opt(2024, 6, 5));
    }

    #[test]
    fn test_invalid_dates_are_skipped() {
        let extracted = extract("31/02/2024 then 01/03/2024");
        assert_eq!(extracted.call_date, NaiveDate::from_ymd_opt(2024, 3, 1));
    }

    #[test]
    fn test_unrecognized_text_is_empty() {
        assert_eq!(extract("nothing useful here"), ExtractedCall::default());
        assert_eq!(extract(""), ExtractedCall::default());
    }
}
