//! # src/storage/mod.rs
//!
//! Definiert die Abstraktion für die persistente Speicherung der Coupon-Listen.
//! Dies ermöglicht es, die Kernlogik von der konkreten Speichermethode zu entkoppeln.

use crate::models::coupon::Coupon;
use thiserror::Error;

pub mod file_storage;
pub mod memory;

/// Der feste Schlüssel, unter dem die Liste der aktiven Coupons abgelegt wird.
pub const CURRENT_COUPONS_KEY: &str = "current-coupons";
/// Der feste Schlüssel, unter dem die Liste der archivierten Coupons abgelegt wird.
pub const ARCHIVED_COUPONS_KEY: &str = "archived-coupons";

/// Ein generischer Fehler-Typ für alle Speicheroperationen.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Data is corrupted or has an invalid format: {0}")]
    InvalidFormat(String),

    #[error("Underlying I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("An unexpected error occurred: {0}")]
    Generic(String),
}

/// Die Schnittstelle für persistente Speicherung.
/// Jede Methode ist eine atomare Operation für eine komplette, benannte Liste.
pub trait Storage {
    /// Lädt die unter `key` gespeicherte Coupon-Liste.
    ///
    /// Ein fehlender Schlüssel ist kein Fehler und liefert eine leere Liste.
    /// Nicht dekodierbare Daten liefern `StorageError::InvalidFormat`; ob
    /// daraus ein leerer Zustand wird, entscheidet die Schicht darüber.
    fn load_coupons(&self, key: &str) -> Result<Vec<Coupon>, StorageError>;

    /// Speichert `coupons` unter `key` und ersetzt den vorherigen Wert vollständig.
    fn save_coupons(&mut self, key: &str, coupons: &[Coupon]) -> Result<(), StorageError>;
}
