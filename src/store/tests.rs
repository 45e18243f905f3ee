//! # src/store/tests.rs
//! Enthält die Modul-Tests für die `CouponStore`-Struktur. Diese Datei ist
//! bewusst von `mod.rs` getrennt, um die Lesbarkeit zu verbessern.

use crate::models::coupon::CouponStatus;
use crate::storage::memory::MemoryStorage;
use crate::store::CouponStore;

fn open_empty_store() -> CouponStore<MemoryStorage> {
    CouponStore::open(MemoryStorage::new()).expect("opening an empty store must succeed")
}

/// Bündelt die Tests zur Aufnahme-Logik von `add_coupons`.
mod add_logic {
    use super::*;

    /// **Test 1: Normalisierung und Verwerfen leerer Zeilen**
    ///
    /// Prüft, dass jede Zeile getrimmt und in Großbuchstaben umgewandelt
    /// wird und dass Zeilen ohne Inhalt keinen Coupon erzeugen.
    #[test]
    fn test_normalizes_lines_and_drops_empty_ones() {
        // --- Setup ---
        let mut store = open_empty_store();

        // --- Aktion ---
        let added = store.add_coupons("  save20 \n\n   \nWELCOME5").unwrap();

        // --- Erwartetes Ergebnis ---
        assert_eq!(added, 2);
        let codes: Vec<&str> = store.current().iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["SAVE20", "WELCOME5"]);
    }

    /// **Test 2: Deduplizierung innerhalb einer Eingabe**
    ///
    /// Zwei Zeilen, die nach der Normalisierung denselben Code ergeben,
    /// führen nur zu einem Coupon. Die Prüfung läuft gegen den
    /// fortgeschriebenen Zustand, nicht gegen einen Schnappschuss.
    #[test]
    fn test_deduplicates_within_one_batch() {
        // --- Setup ---
        let mut store = open_empty_store();

        // --- Aktion ---
        let added = store.add_coupons("abc\nABC\n  \nxyz").unwrap();

        // --- Erwartetes Ergebnis ---
        assert_eq!(added, 2);
        let codes: Vec<&str> = store.current().iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["ABC", "XYZ"]);
    }

    /// **Test 3: Deduplizierung gegen beide Listen**
    ///
    /// Ein Code, der bereits im Archiv liegt, darf nicht erneut in die
    /// aktive Liste aufgenommen werden.
    #[test]
    fn test_rejects_codes_already_known_in_either_list() {
        // --- Setup ---
        let mut store = open_empty_store();
        store.add_coupons("KEEP\nRETIRE").unwrap();
        let retired_id = store.current()[1].id.clone();
        assert!(store.archive_coupon(&retired_id).unwrap());

        // --- Aktion ---
        let added = store.add_coupons("keep\nretire\nFRESH").unwrap();

        // --- Erwartetes Ergebnis ---
        assert_eq!(added, 1);
        assert_eq!(store.counts(), (2, 1));
        assert!(store.exists("FRESH"));
        // Das Archiv enthält den Code weiterhin genau einmal.
        assert_eq!(store.archived().len(), 1);
        assert_eq!(store.archived()[0].code, "RETIRE");
    }

    /// **Test 4: Jeder Coupon bekommt eine eindeutige ID**
    #[test]
    fn test_fresh_ids_per_coupon() {
        let mut store = open_empty_store();
        store.add_coupons("A\nB\nC").unwrap();

        let mut ids: Vec<&str> = store.current().iter().map(|c| c.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    /// **Test 5: Ein komplett verworfener Block ist kein Fehler**
    #[test]
    fn test_batch_with_nothing_to_add_returns_zero() {
        let mut store = open_empty_store();
        store.add_coupons("ONLY").unwrap();

        let added = store.add_coupons("\n   \nonly\n").unwrap();

        assert_eq!(added, 0);
        assert_eq!(store.counts(), (1, 0));
    }
}

/// Bündelt die Tests für den Lebenszyklus `current ⇄ archived → gelöscht`.
mod lifecycle {
    use super::*;

    /// **Test 1: Archivieren verschiebt ans Ende des Archivs**
    #[test]
    fn test_archive_moves_to_end_of_archive() {
        // --- Setup ---
        let mut store = open_empty_store();
        store.add_coupons("FIRST\nSECOND").unwrap();
        let first_id = store.current()[0].id.clone();

        // --- Aktion ---
        let moved = store.archive_coupon(&first_id).unwrap();

        // --- Erwartetes Ergebnis ---
        assert!(moved);
        assert_eq!(store.counts(), (1, 1));
        assert_eq!(store.current()[0].code, "SECOND");
        assert_eq!(store.archived()[0].code, "FIRST");
        assert_eq!(store.archived()[0].id, first_id);
    }

    /// **Test 2: Reaktivieren stellt die Zugehörigkeit her, nicht die Position**
    ///
    /// Nach Archivieren und Zurückholen steht der Coupon am Ende der
    /// aktiven Liste, nicht an seiner alten Position.
    #[test]
    fn test_unarchive_appends_to_end_of_current() {
        // --- Setup ---
        let mut store = open_empty_store();
        store.add_coupons("FIRST\nSECOND\nTHIRD").unwrap();
        let first_id = store.current()[0].id.clone();
        store.archive_coupon(&first_id).unwrap();

        // --- Aktion ---
        let moved = store.unarchive_coupon(&first_id).unwrap();

        // --- Erwartetes Ergebnis ---
        assert!(moved);
        let codes: Vec<&str> = store.current().iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["SECOND", "THIRD", "FIRST"]);
        assert!(store.archived().is_empty());
    }

    /// **Test 3: Löschen geht nur aus dem Archiv**
    ///
    /// `delete_coupon` auf eine ID der aktiven Liste schlägt fehl und
    /// lässt beide Listen unverändert.
    #[test]
    fn test_delete_refuses_current_coupons() {
        // --- Setup ---
        let mut store = open_empty_store();
        store.add_coupons("ACTIVE").unwrap();
        let id = store.current()[0].id.clone();

        // --- Aktion ---
        let deleted = store.delete_coupon(&id).unwrap();

        // --- Erwartetes Ergebnis ---
        assert!(!deleted);
        assert_eq!(store.counts(), (1, 0));
        assert_eq!(store.current()[0].id, id);
    }

    /// **Test 4: Löschen aus dem Archiv entfernt endgültig**
    #[test]
    fn test_delete_removes_archived_coupon() {
        let mut store = open_empty_store();
        store.add_coupons("GONE").unwrap();
        let id = store.current()[0].id.clone();
        store.archive_coupon(&id).unwrap();

        assert!(store.delete_coupon(&id).unwrap());
        assert_eq!(store.counts(), (0, 0));
        // Der Code ist danach wieder frei.
        assert!(!store.exists("GONE"));
    }

    /// **Test 5: Unbekannte IDs ändern nichts**
    #[test]
    fn test_unknown_ids_are_reported_as_false() {
        let mut store = open_empty_store();
        store.add_coupons("STAY").unwrap();

        assert!(!store.archive_coupon("ffffffffffffffffffffffffffffffff").unwrap());
        assert!(!store.unarchive_coupon("ffffffffffffffffffffffffffffffff").unwrap());
        assert!(!store.delete_coupon("ffffffffffffffffffffffffffffffff").unwrap());
        assert_eq!(store.counts(), (1, 0));
    }

    /// **Test 6: Eine ID gehört immer zu genau einer Liste**
    #[test]
    fn test_membership_is_exclusive_across_moves() {
        let mut store = open_empty_store();
        store.add_coupons("PINGPONG").unwrap();
        let id = store.current()[0].id.clone();

        for _ in 0..3 {
            store.archive_coupon(&id).unwrap();
            let in_current = store.current().iter().any(|c| c.id == id);
            let in_archived = store.archived().iter().any(|c| c.id == id);
            assert!(!in_current && in_archived);

            store.unarchive_coupon(&id).unwrap();
            let in_current = store.current().iter().any(|c| c.id == id);
            let in_archived = store.archived().iter().any(|c| c.id == id);
            assert!(in_current && !in_archived);
        }
    }
}

/// Bündelt die Tests für die View-Model-Funktionen aus `queries.rs`.
mod queries {
    use super::*;
    use crate::error::CouponCoreError;

    #[test]
    fn test_list_coupons_with_and_without_filter() {
        // --- Setup ---
        let mut store = open_empty_store();
        store.add_coupons("A\nB").unwrap();
        let id_b = store.current()[1].id.clone();
        store.archive_coupon(&id_b).unwrap();

        // --- Aktion / Erwartetes Ergebnis ---
        let all = store.list_coupons(None);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].status, CouponStatus::Current);
        assert_eq!(all[1].status, CouponStatus::Archived);

        let current_only = store.list_coupons(Some(CouponStatus::Current));
        assert_eq!(current_only.len(), 1);
        assert_eq!(current_only[0].code, "A");

        let archived_only = store.list_coupons(Some(CouponStatus::Archived));
        assert_eq!(archived_only.len(), 1);
        assert_eq!(archived_only[0].code, "B");
    }

    #[test]
    fn test_get_coupon_details_reports_unknown_ids() {
        let mut store = open_empty_store();
        store.add_coupons("KNOWN").unwrap();
        let id = store.current()[0].id.clone();

        let details = store.get_coupon_details(&id).unwrap();
        assert_eq!(details.code, "KNOWN");
        assert_eq!(details.status, CouponStatus::Current);

        let result = store.get_coupon_details("does-not-exist");
        assert!(matches!(result, Err(CouponCoreError::CouponNotFound(_))));
    }
}

/// Bündelt die Tests zur Koerzierungs-Richtlinie beim Öffnen.
mod open_policy {
    use super::*;
    use crate::storage::{ARCHIVED_COUPONS_KEY, CURRENT_COUPONS_KEY};

    /// **Test 1: Beschädigte Daten werden pro Schlüssel auf leer abgebildet**
    ///
    /// Ein nicht dekodierbarer Wert unter einem Schlüssel darf die Daten
    /// des anderen Schlüssels nicht mitreißen.
    #[test]
    fn test_corrupt_key_is_coerced_to_empty_without_touching_the_other() {
        // --- Setup ---
        // Ein Backend mit gültigem Archiv und beschädigter aktiver Liste.
        let mut backing = MemoryStorage::new();
        {
            let mut store = CouponStore::open(backing.clone()).unwrap();
            store.add_coupons("SURVIVOR").unwrap();
            let id = store.current()[0].id.clone();
            store.archive_coupon(&id).unwrap();
            backing = store.into_storage();
        }
        backing.set_raw(CURRENT_COUPONS_KEY, "not json at all {");

        // --- Aktion ---
        let store = CouponStore::open(backing).unwrap();

        // --- Erwartetes Ergebnis ---
        assert!(store.current().is_empty());
        assert_eq!(store.archived().len(), 1);
        assert_eq!(store.archived()[0].code, "SURVIVOR");
    }

    /// **Test 2: Ein leeres Backend ergibt zwei leere Listen**
    #[test]
    fn test_open_on_empty_backend() {
        let store = open_empty_store();
        assert_eq!(store.counts(), (0, 0));
    }

    /// **Test 3: Beide Schlüssel werden nach jeder Mutation geschrieben**
    #[test]
    fn test_mutations_write_both_keys() {
        let mut store = open_empty_store();
        store.add_coupons("BOTH").unwrap();

        let backing = store.into_storage();
        assert!(backing.get_raw(CURRENT_COUPONS_KEY).is_some());
        assert!(backing.get_raw(ARCHIVED_COUPONS_KEY).is_some());
    }
}
