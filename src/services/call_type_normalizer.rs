//! Normalización de tipos de llamada
//!
//! Convierte los tokens heredados (en inglés o con comillas hebreas
//! alternativas) a las cuatro etiquetas canónicas. Lo desconocido se
//! devuelve tal cual.

pub const URGENT: &str = "דחוף";
pub const ATAN: &str = "אט\"ן";
pub const ARAN: &str = "אר\"ן";
pub const NATBAG: &str = "נתב\"ג";

/// Las cuatro etiquetas canónicas, en orden de presentación
pub const CANONICAL_CALL_TYPES: [&str; 4] = [URGENT, ATAN, ARAN, NATBAG];

/// Normalizar un tipo de llamada a su etiqueta canónica
pub fn normalize(raw: &str) -> String {
    canonical_label(raw)
        .map(str::to_string)
        .unwrap_or_else(|| raw.to_string())
}

/// Etiqueta canónica si el valor es reconocido, `None` si no
pub fn canonical_label(raw: &str) -> Option<&'static str> {
    let token = raw.trim();
    if token.is_empty() {
        return None;
    }

    match token.to_lowercase().as_str() {
        "urgent" => return Some(URGENT),
        "atan" => return Some(ATAN),
        "aran" => return Some(ARAN),
        "natbag" => return Some(NATBAG),
        _ => {}
    }

    // Quitar cualquier variante de comillas/geresh y comparar letras hebreas
    let letters: String = token.chars().filter(|c| !is_quote_mark(*c)).collect();
    match letters.as_str() {
        "דחוף" => Some(URGENT),
        "אטן" => Some(ATAN),
        "ארן" => Some(ARAN),
        "נתבג" => Some(NATBAG),
        _ => None,
    }
}

fn is_quote_mark(c: char) -> bool {
    matches!(
        c,
        '"' | '\'' | '\u{05F4}' | '\u{05F3}' | '\u{201C}' | '\u{201D}' | '\u{2018}' | '\u{2019}' | '`'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_english_tokens() {
        assert_eq!(normalize("urgent"), "דחוף");
        assert_eq!(normalize("atan"), ATAN);
        assert_eq!(normalize("aran"), ARAN);
        assert_eq!(normalize("natbag"), NATBAG);
        assert_eq!(normalize("  URGENT "), URGENT);
    }

    #[test]
    fn test_hebrew_quote_variants() {
        assert_eq!(normalize("אט״ן"), ATAN);
        assert_eq!(normalize("אט''ן"), ATAN);
        assert_eq!(normalize("אר”ן"), ARAN);
        assert_eq!(normalize("נתב׳ג"), NATBAG);
        assert_eq!(normalize("נתב\"ג"), NATBAG);
    }

    #[test]
    fn test_unknown_tokens_pass_through() {
        assert_eq!(normalize("unknown_token"), "unknown_token");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("  spaced  "), "  spaced  ");
    }

    #[test]
    fn test_canonical_labels_are_stable() {
        for label in CANONICAL_CALL_TYPES {
            assert_eq!(normalize(label), label);
        }
    }
}
