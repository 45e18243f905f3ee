//! # src/storage/file_storage.rs
//!
//! Eine Implementierung des `Storage`-Traits, die jede Liste als eigene
//! JSON-Datei (`<key>.json`) in einem Store-Verzeichnis ablegt.

use super::{Storage, StorageError};
use crate::models::coupon::Coupon;
use std::{fs, path::PathBuf};

/// Eine Implementierung des `Storage`-Traits auf Basis des Dateisystems.
///
/// Schreibvorgänge ersetzen den Dateiinhalt als Ganzes: der neue Inhalt
/// wird zuerst in eine temporäre Datei geschrieben und diese dann über die
/// Zieldatei umbenannt. Ein abgebrochener Schreibvorgang hinterlässt so
/// nie eine halb geschriebene Liste.
pub struct FileStorage {
    /// Der Pfad zum Verzeichnis, das die Store-Dateien enthält.
    store_directory: PathBuf,
}

impl FileStorage {
    /// Erstellt eine neue `FileStorage`-Instanz für ein bestimmtes Verzeichnis.
    /// Das Verzeichnis wird erst beim ersten Speichern angelegt.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStorage {
            store_directory: path.into(),
        }
    }

    fn file_path(&self, key: &str) -> PathBuf {
        self.store_directory.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn load_coupons(&self, key: &str) -> Result<Vec<Coupon>, StorageError> {
        let path = self.file_path(key);

        // Ein noch nie beschriebener Schlüssel ist der Normalfall beim
        // ersten Start und liefert eine leere Liste.
        if !path.exists() {
            return Ok(Vec::new());
        }

        let bytes = fs::read(path)?;
        serde_json::from_slice(&bytes).map_err(|e| StorageError::InvalidFormat(e.to_string()))
    }

    fn save_coupons(&mut self, key: &str, coupons: &[Coupon]) -> Result<(), StorageError> {
        fs::create_dir_all(&self.store_directory)?;

        let path = self.file_path(key);
        let tmp_path = self.store_directory.join(format!("{}.json.tmp", key));

        let payload =
            serde_json::to_vec(coupons).map_err(|e| StorageError::Generic(e.to_string()))?;

        fs::write(&tmp_path, payload)?;
        fs::rename(&tmp_path, &path)?;

        Ok(())
    }
}
