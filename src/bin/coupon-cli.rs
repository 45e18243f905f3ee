//! # coupon-cli.rs
//!
//! Ein Kommandozeilen-Tool zum Verwalten der lokalen Coupon-Listen.
//!
//! ## Befehle:
//! - `add`: Nimmt neue Codes auf (Argumente oder stdin).
//! - `list`: Zeigt die aktive Liste, das Archiv oder beides an.
//! - `show`: Zeigt einen einzelnen Coupon; der Code steht allein auf der letzten Zeile.
//! - `archive` / `unarchive` / `delete`: Verschieben bzw. Entfernen per ID.
//! - `counts`: Zeigt die Größen beider Listen an.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use coupon_core::{CouponStatus, CouponStore, CouponSummary, FileStorage};
use std::io::Read;
use std::path::PathBuf;

/// Das Haupt-Struct für das CLI-Tool, das von `clap` geparst wird.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Pfad zum Verzeichnis, in dem die Coupon-Listen liegen.
    #[arg(short, long, default_value = "coupon-store")]
    dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Definiert die verfügbaren Unterbefehle.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Nimmt neue Codes in die aktive Liste auf.
    ///
    /// Codes können als Argumente übergeben werden; ohne Argumente wird
    /// mehrzeiliger Text von stdin gelesen (eine Zeile pro Code).
    Add {
        /// Die aufzunehmenden Codes.
        codes: Vec<String>,
    },

    /// Listet Coupons auf.
    List {
        /// Zeigt das Archiv statt der aktiven Liste an.
        #[arg(long)]
        archived: bool,

        /// Zeigt beide Listen an.
        #[arg(long, conflicts_with = "archived")]
        all: bool,
    },

    /// Zeigt die Details eines einzelnen Coupons.
    Show {
        /// Die ID des Coupons.
        id: String,
    },

    /// Verschiebt einen Coupon aus der aktiven Liste ins Archiv.
    Archive {
        /// Die ID des Coupons.
        id: String,
    },

    /// Holt einen Coupon aus dem Archiv zurück in die aktive Liste.
    Unarchive {
        /// Die ID des Coupons.
        id: String,
    },

    /// Löscht einen archivierten Coupon endgültig.
    Delete {
        /// Die ID des Coupons.
        id: String,
    },

    /// Zeigt die Größen beider Listen an.
    Counts,
}

/// Hauptfunktion des Programms.
fn main() -> Result<()> {
    let cli = Cli::parse();

    let storage = FileStorage::new(&cli.dir);
    let mut store = CouponStore::open(storage)
        .with_context(|| format!("Konnte den Store in {} nicht öffnen", cli.dir.display()))?;

    match cli.command {
        Commands::Add { codes } => add(&mut store, codes)?,
        Commands::List { archived, all } => list(&store, archived, all),
        Commands::Show { id } => show(&store, &id)?,
        Commands::Archive { id } => archive(&mut store, &id)?,
        Commands::Unarchive { id } => unarchive(&mut store, &id)?,
        Commands::Delete { id } => delete(&mut store, &id)?,
        Commands::Counts => counts(&store),
    }

    Ok(())
}

/// Logik für den `add`-Befehl.
fn add(store: &mut CouponStore<FileStorage>, codes: Vec<String>) -> Result<()> {
    let raw_text = if codes.is_empty() {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Konnte die Codes nicht von stdin lesen")?;
        buffer
    } else {
        codes.join("\n")
    };

    let added = store.add_coupons(&raw_text)?;
    if added > 0 {
        println!("✅ {} Coupon(s) aufgenommen.", added);
    } else {
        println!("Keine gültigen Coupons zum Aufnehmen.");
    }

    Ok(())
}

/// Logik für den `list`-Befehl.
fn list(store: &CouponStore<FileStorage>, archived: bool, all: bool) {
    let filter = if all {
        None
    } else if archived {
        Some(CouponStatus::Archived)
    } else {
        Some(CouponStatus::Current)
    };

    let summaries = store.list_coupons(filter);
    if summaries.is_empty() {
        match filter {
            Some(CouponStatus::Archived) => println!("Keine archivierten Coupons."),
            Some(CouponStatus::Current) => println!("Keine aktiven Coupons."),
            None => println!("Der Store ist leer."),
        }
        return;
    }

    for summary in summaries {
        println!("{}", format_line(&summary));
    }
}

/// Logik für den `show`-Befehl.
fn show(store: &CouponStore<FileStorage>, id: &str) -> Result<()> {
    let details = store
        .get_coupon_details(id)
        .with_context(|| format!("Coupon '{}' wurde nicht gefunden", id))?;

    println!("ID:          {}", details.id);
    println!("Status:      {}", status_label(details.status));
    println!("Aufgenommen: {}", details.added_at);
    // Der Code steht allein auf der letzten Zeile, damit er sich in
    // Shell-Pipelines weiterreichen lässt (z.B. an die Zwischenablage).
    println!("{}", details.code);

    Ok(())
}

/// Logik für den `archive`-Befehl.
fn archive(store: &mut CouponStore<FileStorage>, id: &str) -> Result<()> {
    if store.archive_coupon(id)? {
        println!("✅ Coupon archiviert.");
        Ok(())
    } else {
        bail!("Kein aktiver Coupon mit der ID '{}'", id);
    }
}

/// Logik für den `unarchive`-Befehl.
fn unarchive(store: &mut CouponStore<FileStorage>, id: &str) -> Result<()> {
    if store.unarchive_coupon(id)? {
        println!("✅ Coupon zurück in die aktive Liste verschoben.");
        Ok(())
    } else {
        bail!("Kein archivierter Coupon mit der ID '{}'", id);
    }
}

/// Logik für den `delete`-Befehl.
fn delete(store: &mut CouponStore<FileStorage>, id: &str) -> Result<()> {
    if store.delete_coupon(id)? {
        println!("🗑️  Coupon endgültig gelöscht.");
        Ok(())
    } else {
        bail!(
            "Kein archivierter Coupon mit der ID '{}'. Aktive Coupons müssen zuerst archiviert werden.",
            id
        );
    }
}

/// Logik für den `counts`-Befehl.
fn counts(store: &CouponStore<FileStorage>) {
    let (current, archived) = store.counts();
    println!("Aktiv:     {}", current);
    println!("Archiviert: {}", archived);
}

fn format_line(summary: &CouponSummary) -> String {
    format!(
        "{}  {}  [{}]  {}",
        summary.id,
        summary.code,
        status_label(summary.status),
        summary.added_at
    )
}

fn status_label(status: CouponStatus) -> &'static str {
    match status {
        CouponStatus::Current => "aktiv",
        CouponStatus::Archived => "archiviert",
    }
}
