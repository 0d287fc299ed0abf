//! CSV serialization for [`IncidentTable`].
//!
//! Writes a header row with the fixed [`COLUMNS`] names followed by one row
//! per record, with no index column. Reading is the exact inverse; all values
//! come back as strings.

use std::io;

use crate::{COLUMNS, IncidentRecord, IncidentTable};

/// Errors that can occur while reading or writing a table as CSV.
#[derive(Debug, thiserror::Error)]
pub enum TableCsvError {
    /// CSV encoding or decoding failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The header row of the input does not match [`COLUMNS`].
    #[error("unexpected CSV header: expected {expected:?}, found {found:?}")]
    Header {
        /// The required column names.
        expected: Vec<String>,
        /// The column names actually present in the input.
        found: Vec<String>,
    },

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl IncidentTable {
    /// Writes the table to `writer` as CSV with a [`COLUMNS`] header row.
    ///
    /// # Errors
    ///
    /// Returns [`TableCsvError`] if encoding or the underlying write fails.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), TableCsvError> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(COLUMNS)?;
        for record in self {
            wtr.write_record([
                &record.date_time,
                &record.incident_number,
                &record.location,
                &record.nature,
                &record.agency_ori,
            ])?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Reads a table previously written by [`write_csv`](Self::write_csv).
    ///
    /// # Errors
    ///
    /// Returns [`TableCsvError::Header`] if the header row does not match
    /// [`COLUMNS`], or [`TableCsvError::Csv`] if a row fails to decode.
    pub fn read_csv<R: io::Read>(reader: R) -> Result<Self, TableCsvError> {
        let mut rdr = csv::Reader::from_reader(reader);

        let found: Vec<String> = rdr.headers()?.iter().map(ToOwned::to_owned).collect();
        if found != COLUMNS {
            return Err(TableCsvError::Header {
                expected: COLUMNS.iter().map(ToString::to_string).collect(),
                found,
            });
        }

        let mut table = Self::new();
        for result in rdr.records() {
            let row = result?;
            table.push(IncidentRecord {
                date_time: row.get(0).unwrap_or_default().to_owned(),
                incident_number: row.get(1).unwrap_or_default().to_owned(),
                location: row.get(2).unwrap_or_default().to_owned(),
                nature: row.get(3).unwrap_or_default().to_owned(),
                agency_ori: row.get(4).unwrap_or_default().to_owned(),
            });
        }
        Ok(table)
    }
}
