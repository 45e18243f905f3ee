//! # src/services/codes.rs
//!
//! Normalisierung von rohem Code-Text aus Nutzereingaben.

/// Normalisiert eine einzelne Eingabezeile.
///
/// Umgebender Whitespace wird entfernt, der Rest in Großbuchstaben
/// umgewandelt. Bleibt nach dem Trimmen nichts übrig, liefert die Funktion
/// `None`; die Zeile wird dann verworfen.
pub fn normalize_code(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_uppercase())
    }
}

/// Zerlegt einen mehrzeiligen Eingabeblock in normalisierte Codes.
/// Leere Zeilen werden verworfen, die Reihenfolge bleibt erhalten.
/// Duplikate werden hier nicht entfernt; das ist Sache des Stores.
pub fn normalize_batch(raw: &str) -> Vec<String> {
    raw.lines().filter_map(normalize_code).collect()
}
