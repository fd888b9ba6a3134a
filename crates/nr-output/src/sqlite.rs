//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `report.db` file in the configured output directory with
//! two tables: `flow_kpis` and `network_summary`.  "No data" KPIs are `NULL`.
//! An existing `report.db` is overwritten, like the CSV files.

use std::path::Path;

use rusqlite::Connection;

use crate::{FlowKpiRow, NetworkSummaryRow, OutputResult};
use crate::writer::ReportWriter;

/// Writes the report to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `report.db` in `dir` and recreate both tables empty.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("report.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             DROP TABLE IF EXISTS flow_kpis;
             DROP TABLE IF EXISTS network_summary;
             CREATE TABLE flow_kpis (
                 flow_id           INTEGER PRIMARY KEY,
                 src_addr          TEXT    NOT NULL,
                 src_port          INTEGER NOT NULL,
                 dst_addr          TEXT    NOT NULL,
                 dst_port          INTEGER NOT NULL,
                 protocol          TEXT    NOT NULL,
                 tx_packets        INTEGER NOT NULL,
                 tx_bytes          INTEGER NOT NULL,
                 offered_mbps      REAL    NOT NULL,
                 rx_packets        INTEGER NOT NULL,
                 rx_bytes          INTEGER NOT NULL,
                 throughput_mbps   REAL,
                 mean_delay_ms     REAL,
                 loss_rate_percent REAL,
                 status            TEXT    NOT NULL
             );
             CREATE TABLE network_summary (
                 total_flows              INTEGER NOT NULL,
                 contributing_flows       INTEGER NOT NULL,
                 mean_throughput_mbps     REAL,
                 mean_delay_ms            REAL,
                 packet_loss_rate_percent REAL,
                 fairness_index           REAL    NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl ReportWriter for SqliteWriter {
    fn write_flows(&mut self, rows: &[FlowKpiRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO flow_kpis \
                 (flow_id, src_addr, src_port, dst_addr, dst_port, protocol, \
                  tx_packets, tx_bytes, offered_mbps, rx_packets, rx_bytes, \
                  throughput_mbps, mean_delay_ms, loss_rate_percent, status) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.flow_id,
                    row.src_addr,
                    row.src_port,
                    row.dst_addr,
                    row.dst_port,
                    row.protocol,
                    row.tx_packets,
                    row.tx_bytes,
                    row.offered_mbps,
                    row.rx_packets,
                    row.rx_bytes,
                    row.throughput_mbps,
                    row.mean_delay_ms,
                    row.loss_rate_percent,
                    row.status,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_summary(&mut self, row: &NetworkSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO network_summary \
             (total_flows, contributing_flows, mean_throughput_mbps, mean_delay_ms, \
              packet_loss_rate_percent, fairness_index) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                row.total_flows,
                row.contributing_flows,
                row.mean_throughput_mbps,
                row.mean_delay_ms,
                row.packet_loss_rate_percent,
                row.fairness_index,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
