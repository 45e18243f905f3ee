//! # src/error.rs
//!
//! Definiert den zentralen Fehlertyp für die gesamte coupon_core-Bibliothek.
//! Verwendet `thiserror` zur einfachen Erstellung von aussagekräftigen Fehlern
//! und zur automatischen Konvertierung von untergeordneten Fehlertypen.

use crate::storage::StorageError;
use thiserror::Error;

/// Der zentrale Fehlertyp für alle Operationen in der `coupon_core`-Bibliothek.
///
/// Dieser Enum fasst Fehler aus allen Modulen (Store, Speicher, Serialisierung)
/// an einem Ort zusammen und bildet die einheitliche Fehler-API der Bibliothek.
#[derive(Error, Debug)]
pub enum CouponCoreError {
    /// Ein Fehler, der während einer Speicheroperation (Laden, Speichern) aufgetreten ist.
    #[error("Storage Error: {0}")]
    Storage(#[from] StorageError),

    /// Ein Fehler bei der Verarbeitung von JSON (Serialisierung oder Deserialisierung).
    #[error("JSON Processing Error: {0}")]
    Json(#[from] serde_json::Error),

    /// Ein Fehler bei I/O-Operationen außerhalb des Speicher-Backends.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Der angeforderte Coupon wurde in keiner der beiden Listen gefunden.
    #[error("Coupon with id '{0}' not found in the store.")]
    CouponNotFound(String),

    /// Ein allgemeiner Fehler, der für verschiedene Zwecke verwendet werden kann.
    #[error("Generic error: {0}")]
    Generic(String),
}
