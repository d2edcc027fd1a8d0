//! Population file loading utilities
//!
//! Populations are exchanged as a JSON array of [`PersonRecord`]s.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use crate::error::{GenogramError, Result};
use crate::models::PersonRecord;
use crate::utils::logging::{log_operation_complete, log_operation_start, log_warning};

/// Read a population from a JSON file
pub fn read_persons(path: &Path) -> Result<Vec<PersonRecord>> {
    let start = Instant::now();
    log_operation_start("Reading population from", path.display());

    let file = File::open(path).map_err(|e| GenogramError::io(path, e))?;
    let persons: Vec<PersonRecord> = serde_json::from_reader(BufReader::new(file))?;

    if persons.is_empty() {
        log_warning("Population file contains no records", Some(&path.display()));
    }
    if let Some(person) = persons.iter().find(|p| p.id.trim().is_empty()) {
        return Err(GenogramError::InvalidInput(format!(
            "record without identifier (named '{} {}') in {}",
            person.first_name,
            person.last_name,
            path.display()
        )));
    }

    log_operation_complete("read", path.display(), persons.len(), Some(start.elapsed()));
    Ok(persons)
}

/// Write a population to a JSON file, pretty printed
pub fn write_persons(path: &Path, persons: &[PersonRecord]) -> Result<()> {
    let file = File::create(path).map_err(|e| GenogramError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, persons)?;
    writer
        .write_all(b"\n")
        .and_then(|()| writer.flush())
        .map_err(|e| GenogramError::io(path, e))?;

    log_operation_complete("wrote", path.display(), persons.len(), None);
    Ok(())
}
