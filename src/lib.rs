//! # coupon_core
//!
//! Die Kernlogik eines lokalen Verwalters für Aktionscodes (Coupons).
//! Diese Bibliothek stellt die Datenstrukturen und Funktionen zum Erfassen,
//! Archivieren und endgültigen Löschen von Coupons bereit. Der gesamte
//! Zustand wird synchron in ein austauschbares Speicher-Backend gespiegelt.

// Deklariert die Hauptmodule der Bibliothek und macht sie öffentlich.
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod store;

// Re-exportiert die wichtigsten öffentlichen Typen für eine einfachere Nutzung.
// Anstatt `coupon_core::store::CouponStore` können Benutzer nun `coupon_core::CouponStore` schreiben.

// Modelle
pub use models::coupon::{Coupon, CouponStatus};

// Store
pub use store::{CouponStore, CouponSummary};

// Speicher-Backends
pub use storage::file_storage::FileStorage;
pub use storage::memory::MemoryStorage;
pub use storage::{Storage, StorageError, ARCHIVED_COUPONS_KEY, CURRENT_COUPONS_KEY};

// Fehler
pub use error::CouponCoreError;
