//! Ledger validation command

use std::fs::File;
use std::path::Path;

use anyhow::{bail, Context, Result};
use moneta_core::RawTransaction;

/// Read raw records without validating them, picking the parser by extension
fn load_raw(path: &Path) -> Result<Vec<RawTransaction>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let records = if is_json {
        moneta_core::ingest::raw_from_json(file)
    } else {
        moneta_core::ingest::raw_from_csv(file)
    }
    .with_context(|| format!("Failed to read {}", path.display()))?;

    Ok(records)
}

/// `moneta check` - validate every record, reporting each failure
///
/// Unlike `insights`, which stops at the first malformed record, this walks
/// the whole file so a dirty export can be fixed in one pass. Exits nonzero
/// when any record is invalid.
pub fn cmd_check(file: &Path) -> Result<()> {
    let records = load_raw(file)?;

    let mut invalid = 0usize;
    for (i, raw) in records.iter().enumerate() {
        if let Err(e) = raw.validate() {
            invalid += 1;
            eprintln!("record {}: {}", i + 1, e);
        }
    }

    if invalid > 0 {
        bail!("{} of {} records are invalid", invalid, records.len());
    }

    println!("{} records OK", records.len());
    Ok(())
}
