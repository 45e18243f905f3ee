//! # src/store/mod.rs
//!
//! Definiert den `CouponStore`, die zentrale Verwaltungsstruktur für die
//! beiden Coupon-Listen. Er kapselt den In-Memory-Zustand (`current`,
//! `archived`) und spiegelt jede Mutation synchron in ein `Storage`-Backend.

// Deklariere die anderen Dateien als Teil dieses Moduls
mod queries;
#[cfg(test)]
mod tests;

pub use queries::CouponSummary;

use crate::error::CouponCoreError;
use crate::models::coupon::Coupon;
use crate::services::{codes, ids, utils};
use crate::storage::{Storage, StorageError, ARCHIVED_COUPONS_KEY, CURRENT_COUPONS_KEY};

/// Die zentrale Verwaltungsstruktur für die beiden Coupon-Listen.
/// Hält den In-Memory-Zustand und interagiert mit dem Speichersystem.
///
/// Alle Mutationen laufen durch diese Struktur, damit beide Listen nach
/// jeder Änderung gemeinsam persistiert werden und konsistent bleiben.
/// Das Backend wird beim Öffnen injiziert; es gibt keinen globalen Zustand.
pub struct CouponStore<S: Storage> {
    storage: S,
    current: Vec<Coupon>,
    archived: Vec<Coupon>,
}

impl<S: Storage> CouponStore<S> {
    /// Öffnet einen Store über dem gegebenen Backend und lädt beide Listen.
    ///
    /// Nicht dekodierbare Daten werden hier bewusst auf eine leere Liste
    /// abgebildet: die Anwendung startet immer mit einem gültigen Zustand,
    /// und der Verlust beschränkt sich auf die lokalen Listen dieses
    /// Geräts. Echte I/O-Fehler werden dagegen weitergereicht.
    ///
    /// Muss genau einmal beim Start aufgerufen werden, bevor andere
    /// Operationen laufen; die Konstruktion ist zugleich das Laden.
    pub fn open(storage: S) -> Result<Self, CouponCoreError> {
        let current = load_or_empty(&storage, CURRENT_COUPONS_KEY)?;
        let archived = load_or_empty(&storage, ARCHIVED_COUPONS_KEY)?;

        Ok(CouponStore {
            storage,
            current,
            archived,
        })
    }

    /// Die aktiven Coupons in Einfüge-Reihenfolge.
    pub fn current(&self) -> &[Coupon] {
        &self.current
    }

    /// Die archivierten Coupons.
    pub fn archived(&self) -> &[Coupon] {
        &self.archived
    }

    /// Prüft, ob ein Code in einer der beiden Listen vorkommt.
    ///
    /// Der Vergleich ist exakt und erwartet die normalisierte Form
    /// (getrimmt, Großbuchstaben). Linearer Scan über beide Listen; bei
    /// den erwarteten Listengrößen völlig ausreichend.
    pub fn exists(&self, code: &str) -> bool {
        self.current
            .iter()
            .chain(self.archived.iter())
            .any(|c| c.code == code)
    }

    /// Nimmt einen mehrzeiligen Eingabeblock entgegen und fügt jede
    /// verwertbare Zeile als neuen Coupon zur aktiven Liste hinzu.
    ///
    /// Jede Zeile wird getrimmt und in Großbuchstaben umgewandelt. Leere
    /// Zeilen und Codes, die bereits in einer der beiden Listen stehen,
    /// werden verworfen. Gibt die Anzahl der aufgenommenen Coupons zurück.
    ///
    /// Nach der Aufnahme werden beide Listen persistiert, auch wenn der
    /// ganze Block verworfen wurde.
    pub fn add_coupons(&mut self, raw_text: &str) -> Result<usize, CouponCoreError> {
        let mut added = 0;

        for code in codes::normalize_batch(raw_text) {
            // Die Prüfung läuft gegen den fortgeschriebenen Zustand, damit
            // auch Duplikate innerhalb derselben Eingabe verworfen werden.
            if self.exists(&code) {
                continue;
            }

            self.current.push(Coupon {
                code,
                id: ids::new_coupon_id(),
                added_at: utils::get_timestamp(),
            });
            added += 1;
        }

        self.persist()?;
        Ok(added)
    }

    /// Verschiebt den Coupon mit der gegebenen ID von der aktiven Liste
    /// ans Ende des Archivs.
    ///
    /// Gibt `Ok(false)` zurück, wenn die ID in der aktiven Liste nicht
    /// vorkommt; der Zustand bleibt dann unverändert und es wird nichts
    /// geschrieben.
    pub fn archive_coupon(&mut self, id: &str) -> Result<bool, CouponCoreError> {
        let index = match self.current.iter().position(|c| c.id == id) {
            Some(i) => i,
            None => return Ok(false),
        };

        let coupon = self.current.remove(index);
        self.archived.push(coupon);

        self.persist()?;
        Ok(true)
    }

    /// Holt den Coupon mit der gegebenen ID aus dem Archiv zurück ans Ende
    /// der aktiven Liste.
    ///
    /// Die ursprüngliche Position in der aktiven Liste wird nicht
    /// wiederhergestellt, nur die Zugehörigkeit.
    pub fn unarchive_coupon(&mut self, id: &str) -> Result<bool, CouponCoreError> {
        let index = match self.archived.iter().position(|c| c.id == id) {
            Some(i) => i,
            None => return Ok(false),
        };

        let coupon = self.archived.remove(index);
        self.current.push(coupon);

        self.persist()?;
        Ok(true)
    }

    /// Entfernt den Coupon mit der gegebenen ID endgültig aus dem Archiv.
    ///
    /// Coupons der aktiven Liste können nicht direkt gelöscht werden; sie
    /// müssen zuerst archiviert werden.
    pub fn delete_coupon(&mut self, id: &str) -> Result<bool, CouponCoreError> {
        let index = match self.archived.iter().position(|c| c.id == id) {
            Some(i) => i,
            None => return Ok(false),
        };

        self.archived.remove(index);

        self.persist()?;
        Ok(true)
    }

    /// Konsumiert den Store und gibt das Backend zurück.
    /// Gedacht für Tests und Einbettungen, die das Backend anschließend
    /// weiterverwenden wollen.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Schreibt beide Listen als Einheit ins Backend.
    /// Läuft nach jeder Mutation, auch wenn nur eine Liste betroffen war.
    ///
    /// Es gibt kein Rollback: schlägt das Schreiben fehl, behält der
    /// In-Memory-Zustand die Mutation und der nächste erfolgreiche
    /// Schreibvorgang synchronisiert beide Seiten wieder.
    fn persist(&mut self) -> Result<(), CouponCoreError> {
        self.storage.save_coupons(CURRENT_COUPONS_KEY, &self.current)?;
        self.storage.save_coupons(ARCHIVED_COUPONS_KEY, &self.archived)?;
        Ok(())
    }
}

/// Lädt eine Liste aus dem Backend und bildet `InvalidFormat` auf eine
/// leere Liste ab. Die Koerzierung ist hier zentralisiert, damit sie als
/// Richtlinie sichtbar und testbar bleibt.
fn load_or_empty<S: Storage>(storage: &S, key: &str) -> Result<Vec<Coupon>, CouponCoreError> {
    match storage.load_coupons(key) {
        Ok(coupons) => Ok(coupons),
        Err(StorageError::InvalidFormat(_)) => Ok(Vec::new()),
        Err(e) => Err(e.into()),
    }
}
