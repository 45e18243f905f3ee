//! # src/store/queries.rs
//!
//! Enthält die Implementierung der `CouponStore`-Methoden, die als
//! "View-Models" dienen. Sie bereiten Daten für die Anzeige in
//! Client-Anwendungen auf.

use super::CouponStore;
use crate::error::CouponCoreError;
use crate::models::coupon::{Coupon, CouponStatus};
use crate::storage::Storage;
use serde::{Deserialize, Serialize};

/// Eine zusammenfassende Ansicht eines Coupons für Listen-Darstellungen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CouponSummary {
    /// Die eindeutige, lokale ID des Coupons im Store.
    pub id: String,
    /// Der normalisierte Code.
    pub code: String,
    /// Der aktuelle Status (`Current` oder `Archived`).
    pub status: CouponStatus,
    /// Der Zeitpunkt der Aufnahme in den Store im ISO 8601-Format.
    pub added_at: String,
}

/// View-Model / Komfort-Funktionen für Client-Anwendungen.
impl<S: Storage> CouponStore<S> {
    /// Gibt eine Liste von Zusammenfassungen der Coupons im Store zurück.
    ///
    /// Ohne Filter kommen erst die aktiven, dann die archivierten Coupons,
    /// jeweils in Einfüge-Reihenfolge. Mit Filter wird nur die jeweilige
    /// Liste geliefert.
    pub fn list_coupons(&self, status_filter: Option<CouponStatus>) -> Vec<CouponSummary> {
        let mut summaries = Vec::new();

        if status_filter != Some(CouponStatus::Archived) {
            summaries.extend(
                self.current()
                    .iter()
                    .map(|c| summarize(c, CouponStatus::Current)),
            );
        }
        if status_filter != Some(CouponStatus::Current) {
            summaries.extend(
                self.archived()
                    .iter()
                    .map(|c| summarize(c, CouponStatus::Archived)),
            );
        }

        summaries
    }

    /// Ruft die Zusammenfassung für einen einzelnen Coupon anhand seiner ID ab.
    ///
    /// # Returns
    /// Ein `Result` mit `CouponSummary` bei Erfolg oder
    /// `CouponCoreError::CouponNotFound`, wenn die ID unbekannt ist.
    pub fn get_coupon_details(&self, id: &str) -> Result<CouponSummary, CouponCoreError> {
        self.list_coupons(None)
            .into_iter()
            .find(|summary| summary.id == id)
            .ok_or_else(|| CouponCoreError::CouponNotFound(id.to_string()))
    }

    /// Gibt die Anzahl der aktiven und der archivierten Coupons zurück,
    /// z.B. für Zähler an Tab-Reitern.
    pub fn counts(&self) -> (usize, usize) {
        (self.current().len(), self.archived().len())
    }
}

fn summarize(coupon: &Coupon, status: CouponStatus) -> CouponSummary {
    CouponSummary {
        id: coupon.id.clone(),
        code: coupon.code.clone(),
        status,
        added_at: coupon.added_at.clone(),
    }
}
