//! # src/models/coupon.rs
//!
//! Definiert die Datenstrukturen für einzelne Coupons und deren
//! Lebenszyklus-Zustand innerhalb des Stores.

use serde::{Deserialize, Serialize};

/// Ein einzelner Aktionscode, so wie er im Store geführt und persistiert wird.
///
/// Coupons werden nach der Erfassung nie inhaltlich verändert. Sie wandern
/// lediglich zwischen der aktiven Liste und dem Archiv, bis sie aus dem
/// Archiv endgültig gelöscht werden.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Coupon {
    /// Der normalisierte Code (getrimmt, in Großbuchstaben, nie leer).
    pub code: String,
    /// Eine eindeutige, zufällig erzeugte ID (128 Bit, hex-kodiert).
    /// Dient als Schlüssel für alle Verschiebe- und Lösch-Operationen.
    pub id: String,
    /// Der Zeitpunkt der Aufnahme in den Store im ISO 8601-Format (UTC).
    pub added_at: String,
}

/// Repräsentiert den Lebenszyklus-Zustand eines Coupons im Store.
/// Dieser Status wird nicht im Coupon selbst gespeichert, sondern ergibt
/// sich daraus, in welcher der beiden Listen der Store ihn führt.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CouponStatus {
    /// Der Coupon ist aktiv und kann eingelöst werden.
    Current,
    /// Der Coupon wurde zurückgelegt. Er wird nur noch zu historischen
    /// Zwecken aufbewahrt und kann von dort gelöscht oder reaktiviert werden.
    Archived,
}
