//! # src/storage/memory.rs
//!
//! Eine In-Memory-Implementierung des `Storage`-Traits für Tests und
//! Einbettungen, die keine Festplatten-Persistenz benötigen.

use super::{Storage, StorageError};
use crate::models::coupon::Coupon;
use std::collections::HashMap;

/// Hält die Listen als serialisierten JSON-Text in einer `HashMap`.
///
/// Die Werte werden genau wie bei `FileStorage` als JSON abgelegt, damit
/// das Dekodier-Verhalten inklusive der Fehlerfälle identisch ist.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    /// Erstellt einen neuen, leeren Speicher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt den rohen Text unter `key`, ohne ihn zu validieren.
    /// Nützlich in Tests, um beschädigte Daten zu simulieren.
    pub fn set_raw(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    /// Gibt den rohen Text unter `key` zurück, falls vorhanden.
    pub fn get_raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl Storage for MemoryStorage {
    fn load_coupons(&self, key: &str) -> Result<Vec<Coupon>, StorageError> {
        match self.values.get(key) {
            None => Ok(Vec::new()),
            Some(text) => serde_json::from_str(text)
                .map_err(|e| StorageError::InvalidFormat(e.to_string())),
        }
    }

    fn save_coupons(&mut self, key: &str, coupons: &[Coupon]) -> Result<(), StorageError> {
        let payload =
            serde_json::to_string(coupons).map_err(|e| StorageError::Generic(e.to_string()))?;
        self.values.insert(key.to_string(), payload);
        Ok(())
    }
}
