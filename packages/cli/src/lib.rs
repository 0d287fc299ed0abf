#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Batch driver for incident-report extraction.
//!
//! Processes a batch of report documents — local files or URLs — strictly
//! sequentially, concatenates the per-document tables row-wise, and writes a
//! single CSV. Batches are all-or-nothing: the first document that fails
//! aborts the whole run before anything is written.

use std::path::{Path, PathBuf};

use blotter_extract::{ExtractError, extract_incidents};
use blotter_fetch::{FetchError, fetch_document};
use blotter_models::IncidentTable;
use blotter_models::table_csv::TableCsvError;

/// Errors that can occur while driving a batch.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// Extraction of one document failed. Aborts the batch.
    #[error("extraction error: {0}")]
    Extract(#[from] ExtractError),

    /// Fetching one URL failed. Aborts the batch.
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Writing the combined CSV failed.
    #[error("CSV error: {0}")]
    Csv(#[from] TableCsvError),

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Extracts every document in `paths`, in order, into one combined table.
///
/// # Errors
///
/// Fail-fast: returns the first [`IngestError::Extract`] encountered and
/// discards tables already accumulated from earlier documents.
pub fn extract_documents(paths: &[PathBuf]) -> Result<IncidentTable, IngestError> {
    let mut combined = IncidentTable::new();
    for path in paths {
        let table = extract_incidents(path)?;
        log::info!("{}: {} record(s)", path.display(), table.len());
        combined.extend(table);
    }
    Ok(combined)
}

/// Fetches every URL in `urls` into `resource_dir`, extracts each saved
/// document, and concatenates the tables in URL order.
///
/// # Errors
///
/// Fail-fast: a non-200 response or a failed extraction aborts the whole
/// batch with no partial table.
pub async fn fetch_documents(
    urls: &[String],
    resource_dir: &Path,
) -> Result<IncidentTable, IngestError> {
    let client = reqwest::Client::new();
    let mut combined = IncidentTable::new();
    for url in urls {
        let fetched = fetch_document(&client, url, resource_dir).await?;
        let table = extract_incidents(&fetched.path)?;
        log::info!("{url}: {} record(s)", table.len());
        combined.extend(table);
    }
    Ok(combined)
}

/// Writes the combined table to `output` as CSV.
///
/// Callers invoke this only after the whole batch succeeded, so a failing
/// batch never leaves a partial CSV behind. A zero-row table still gets its
/// header row.
///
/// # Errors
///
/// Returns [`IngestError::Io`] if the file cannot be created or
/// [`IngestError::Csv`] if encoding fails.
pub fn write_table(table: &IncidentTable, output: &Path) -> Result<(), IngestError> {
    let file = std::fs::File::create(output)?;
    table.write_csv(file)?;
    log::info!("wrote {} record(s) to {}", table.len(), output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_document_aborts_batch() {
        let dir = tempfile::tempdir().unwrap();
        let paths = vec![dir.path().join("no_such_report.pdf")];
        assert!(matches!(
            extract_documents(&paths),
            Err(IngestError::Extract(_))
        ));
    }

    #[test]
    fn corrupt_document_aborts_batch() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("not_a_report.pdf");
        std::fs::write(&bogus, b"this is not a PDF").unwrap();
        assert!(matches!(
            extract_documents(&[bogus]),
            Err(IngestError::Extract(_))
        ));
    }

    #[test]
    fn empty_batch_yields_empty_table() {
        let combined = extract_documents(&[]).unwrap();
        assert!(combined.is_empty());
    }

    #[test]
    fn writes_header_only_csv_for_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("incidents.csv");
        write_table(&IncidentTable::new(), &output).unwrap();
        let text = std::fs::read_to_string(&output).unwrap();
        assert_eq!(
            text,
            "Date / Time,Incident Number,Location,Nature,Incident ORI\n"
        );
    }
}
