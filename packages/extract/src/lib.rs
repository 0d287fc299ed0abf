#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! PDF-to-table extraction pipeline for police incident reports.
//!
//! Police departments publish daily incident logs as paginated PDFs with
//! positionally-laid-out columns. This crate renders each page to
//! layout-preserved text ([`page`]), matches each line against the row
//! grammar ([`line`]), and assembles the surviving matches into an
//! [`IncidentTable`].
//!
//! The primary entry points are [`extract_incidents`] for a file on disk and
//! [`extract_incidents_from_mem`] for an in-memory buffer.

pub mod line;
pub mod page;

use std::path::Path;

use blotter_models::IncidentTable;

/// Number of lines dropped from the front of the combined cross-page line
/// sequence before row parsing.
///
/// The reports open with a document-level title/header block. The skip is
/// applied once to the whole document, never per page: if the first page
/// yields fewer than three lines, the skip deliberately bleeds into the next
/// page's lines.
pub const HEADER_LINES: usize = 3;

/// Errors that can occur during extraction.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The input could not be opened or decoded as a PDF document.
    #[error("document format error: {0}")]
    Document(#[from] pdf_extract::OutputError),

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Assembles an [`IncidentTable`] from already-rendered page texts.
///
/// Content-bearing pages' lines are flattened into one sequence in document
/// order, the first [`HEADER_LINES`] lines of the combined sequence are
/// dropped, and every remaining line is run through [`line::parse_line`].
/// An empty table is a valid result.
pub fn extract_from_pages<I, S>(pages: I) -> IncidentTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut lines: Vec<String> = Vec::new();
    for text in pages {
        let text = text.as_ref();
        if page::page_has_content(text) {
            lines.extend(text.lines().map(ToOwned::to_owned));
        }
    }

    let mut table = IncidentTable::new();
    for row in lines.iter().skip(HEADER_LINES) {
        if let Some(record) = line::parse_line(row) {
            table.push(record);
        } else if line::SKIP_UNMATCHED_LINES {
            log::trace!("dropping unmatched line: {row:?}");
        }
    }
    table
}

/// Extracts all incident records from the PDF at `path`.
///
/// # Errors
///
/// Returns [`ExtractError::Document`] if the file cannot be decoded as a PDF.
/// A document with no matching rows yields an empty table, not an error.
pub fn extract_incidents<P: AsRef<Path>>(path: P) -> Result<IncidentTable, ExtractError> {
    let path = path.as_ref();
    let pages = page::page_texts(path)?;
    let table = extract_from_pages(&pages);
    log::info!("extracted {} record(s) from {}", table.len(), path.display());
    Ok(table)
}

/// Extracts all incident records from an in-memory PDF buffer.
///
/// # Errors
///
/// Returns [`ExtractError::Document`] if the buffer cannot be decoded as a
/// PDF.
pub fn extract_incidents_from_mem(bytes: &[u8]) -> Result<IncidentTable, ExtractError> {
    let pages = page::page_texts_from_mem(bytes)?;
    let table = extract_from_pages(&pages);
    log::info!(
        "extracted {} record(s) from {}-byte buffer",
        table.len(),
        bytes.len()
    );
    Ok(table)
}
