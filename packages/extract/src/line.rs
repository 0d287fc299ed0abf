//! Line grammar for incident-report rows.
//!
//! A report row is a run of positionally-laid-out columns: a date-time, an
//! incident number, a location, a nature, and an originating-agency (ORI)
//! code. Location and nature are free text that may contain single spaces,
//! so column boundaries are runs of two or more whitespace characters.

use std::sync::LazyLock;

use blotter_models::IncidentRecord;
use regex::Regex;

/// At most this many grammar matches are kept per line.
pub const MAX_MATCHES_PER_LINE: usize = 1;

/// Whether lines that do not match the grammar are dropped without a
/// diagnostic. Unmatched lines are assumed to be page furniture (headers,
/// footers, continuation fragments), not data.
pub const SKIP_UNMATCHED_LINES: bool = true;

/// The row grammar.
///
/// Captures, in order: date-time (`M/D/YYYY H:MM`), incident number,
/// location, nature, agency ORI. The `regex` crate has no lookaround, so the
/// location/nature boundary is encoded by requiring each free-text capture to
/// start with a non-whitespace character and end at the next run of two or
/// more whitespace characters.
static ROW_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(\d{1,2}/\d{1,2}/\d{4} \d{1,2}:\d{2})\s+(\S+)\s+(\S.*?)\s{2,}(\S.*?)\s{2,}(\S+)",
    )
    .expect("valid regex")
});

/// Parses one line of layout-preserved page text into an [`IncidentRecord`].
///
/// Returns `None` if the line does not match the row grammar. Only the first
/// match on a line is kept ([`MAX_MATCHES_PER_LINE`]).
#[must_use]
pub fn parse_line(line: &str) -> Option<IncidentRecord> {
    ROW_RE
        .captures_iter(line)
        .take(MAX_MATCHES_PER_LINE)
        .next()
        .map(|caps| IncidentRecord {
            date_time: caps[1].to_owned(),
            incident_number: caps[2].to_owned(),
            location: caps[3].to_owned(),
            nature: caps[4].to_owned(),
            agency_ori: caps[5].to_owned(),
        })
}
