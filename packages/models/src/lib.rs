#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Shared record and table types for incident-report extraction.
//!
//! An [`IncidentRecord`] is one parsed row of a police incident report; an
//! [`IncidentTable`] is an ordered collection of records with a fixed column
//! layout, serializable to and from CSV.

pub mod table_csv;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Column names of an [`IncidentTable`], in serialization order.
pub const COLUMNS: [&str; 5] = [
    "Date / Time",
    "Incident Number",
    "Location",
    "Nature",
    "Incident ORI",
];

/// One reported incident, as parsed from a report row.
///
/// All five fields are non-empty strings when produced by the line parser;
/// a row that would yield fewer than five fields is rejected entirely rather
/// than partially recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidentRecord {
    /// Date and time of the incident in the source format `M/D/YYYY H:MM`
    /// (month, day, and hour may be one or two digits).
    pub date_time: String,
    /// Opaque incident number, free of internal whitespace.
    pub incident_number: String,
    /// Free-text location. May contain internal single spaces.
    pub location: String,
    /// Free-text nature of the incident. May contain internal single spaces.
    pub nature: String,
    /// Originating-agency identifier (ORI), treated as an opaque token.
    pub agency_ori: String,
}

impl IncidentRecord {
    /// Parses [`date_time`](Self::date_time) into a [`NaiveDateTime`].
    ///
    /// Accepts one- or two-digit month, day, and hour. Returns `None` if the
    /// field does not conform to the `M/D/YYYY H:MM` source format.
    #[must_use]
    pub fn parsed_date_time(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.date_time, "%m/%d/%Y %H:%M").ok()
    }
}

/// An ordered table of incident records with the fixed [`COLUMNS`] layout.
///
/// Built fresh per extraction run; tables from multiple documents can be
/// concatenated row-wise with [`extend`](Self::extend) (append order, no
/// deduplication).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncidentTable {
    records: Vec<IncidentRecord>,
}

impl IncidentTable {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Appends one record to the end of the table.
    pub fn push(&mut self, record: IncidentRecord) {
        self.records.push(record);
    }

    /// Appends all rows of `other` to the end of this table, in order.
    pub fn extend(&mut self, other: Self) {
        self.records.extend(other.records);
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the rows as a slice, in table order.
    #[must_use]
    pub fn records(&self) -> &[IncidentRecord] {
        &self.records
    }

    /// Iterates over the rows in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, IncidentRecord> {
        self.records.iter()
    }
}

impl From<Vec<IncidentRecord>> for IncidentTable {
    fn from(records: Vec<IncidentRecord>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a IncidentTable {
    type Item = &'a IncidentRecord;
    type IntoIter = std::slice::Iter<'a, IncidentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(n: &str) -> IncidentRecord {
        IncidentRecord {
            date_time: "1/5/2024 14:32".to_owned(),
            incident_number: n.to_owned(),
            location: "123 Main St".to_owned(),
            nature: "Traffic Stop".to_owned(),
            agency_ori: "ORI001".to_owned(),
        }
    }

    #[test]
    fn extend_appends_in_order() {
        let mut a = IncidentTable::from(vec![record("INC1"), record("INC2")]);
        let b = IncidentTable::from(vec![record("INC3")]);
        a.extend(b);
        assert_eq!(a.len(), 3);
        assert_eq!(a.records()[2].incident_number, "INC3");
    }

    #[test]
    fn parses_unpadded_date_time() {
        let dt = record("INC1").parsed_date_time().unwrap();
        assert_eq!(dt.to_string(), "2024-01-05 14:32:00");
    }

    #[test]
    fn parses_padded_date_time() {
        let mut r = record("INC1");
        r.date_time = "12/31/2023 09:05".to_owned();
        let dt = r.parsed_date_time().unwrap();
        assert_eq!(dt.to_string(), "2023-12-31 09:05:00");
    }

    #[test]
    fn rejects_garbage_date_time() {
        let mut r = record("INC1");
        r.date_time = "not a date".to_owned();
        assert!(r.parsed_date_time().is_none());
    }
}
