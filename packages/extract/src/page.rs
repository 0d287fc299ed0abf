//! Layout-preserving page text retrieval.
//!
//! Renders each page of a PDF to plain text with horizontal spacing kept
//! approximately intact, so that downstream column heuristics can rely on
//! whitespace runs. Vertical spacing is not preserved: a page maps to a flat
//! sequence of text lines with no blank-line padding.

use std::path::Path;

use crate::ExtractError;

/// Renders every page of the document at `path` to layout-preserved text,
/// one string per page, in document order.
///
/// # Errors
///
/// Returns [`ExtractError::Document`] if the file cannot be opened or decoded
/// as a PDF. Failure is total: no partial page list is returned.
pub fn page_texts<P: AsRef<Path>>(path: P) -> Result<Vec<String>, ExtractError> {
    let path = path.as_ref();
    let pages = pdf_extract::extract_text_by_pages(path)?;
    log::debug!("rendered {} page(s) from {}", pages.len(), path.display());
    Ok(pages)
}

/// Renders every page of an in-memory PDF to layout-preserved text.
///
/// # Errors
///
/// Returns [`ExtractError::Document`] if the buffer cannot be decoded as a
/// PDF.
pub fn page_texts_from_mem(bytes: &[u8]) -> Result<Vec<String>, ExtractError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)?;
    log::debug!(
        "rendered {} page(s) from {}-byte buffer",
        pages.len(),
        bytes.len()
    );
    Ok(pages)
}

/// Page-validity flag: whether a rendered page carries any text.
///
/// A contentless page contributes zero lines to the extraction and is
/// silently skipped; this is not an error.
#[must_use]
pub fn page_has_content(text: &str) -> bool {
    !text.trim().is_empty()
}
