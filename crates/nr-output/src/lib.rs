//! `nr-output` — KPI report writers.
//!
//! | Feature   | Backend     | Destination                                     |
//! |-----------|-------------|-------------------------------------------------|
//! | *(none)*  | Text        | any `io::Write` (stdout in the demo binary)     |
//! | *(none)*  | CSV         | `flow_kpis.csv`, `network_summary.csv`          |
//! | `sqlite`  | SQLite      | `report.db`                                     |
//!
//! All backends implement [`ReportWriter`] and are driven by
//! [`write_report`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use nr_output::{TextWriter, write_report};
//!
//! let report = nr_stats::aggregate(&records, window.duration_secs())?;
//! let mut out = TextWriter::new(std::io::stdout().lock());
//! write_report(&mut out, &report)?;
//! ```

pub mod csv;
pub mod error;
pub mod report;
pub mod row;
pub mod text;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use report::write_report;
pub use row::{FlowKpiRow, NetworkSummaryRow};
pub use text::TextWriter;
pub use writer::ReportWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
