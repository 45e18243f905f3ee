//! # src/services/ids.rs
//!
//! Erzeugung der lokalen Coupon-IDs.

use rand_core::{OsRng, RngCore};

const ID_SIZE: usize = 16;

/// Erzeugt eine neue, zufällige Coupon-ID.
///
/// Die ID besteht aus 128 Bit Zufall vom Betriebssystem und wird als
/// 32-stelliger Hex-String dargestellt. Sie identifiziert eine
/// Coupon-Instanz lokal im Store; bei dieser Breite sind Kollisionen
/// praktisch ausgeschlossen.
pub fn new_coupon_id() -> String {
    let mut bytes = [0u8; ID_SIZE];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}
