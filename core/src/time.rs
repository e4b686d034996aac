//! Time related utils.
//!
//! SAS requests carry their validity window as ISO-8601 strings which are
//! signed verbatim. These helpers exist for callers holding a [`DateTime`]
//! instead of a string.

use chrono::SecondsFormat;
use chrono::Utc;

/// DateTime is the alias for `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

/// Format time into ISO-8601 with second precision: `2022-03-01T08:12:34Z`
///
/// This is the form the storage service documents for `st` and `se`.
pub fn format_iso8601(t: DateTime) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}
