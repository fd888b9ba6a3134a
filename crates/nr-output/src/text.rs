//! Human-readable report, one block per flow followed by the summary.
//!
//! ```text
//! Flow 1 (1.0.0.2:49153 -> 7.0.0.2:1235) proto UDP
//!   Tx Packets: 119800
//!   Tx Bytes:   126268000
//!   TxOffered:  16.864 Mbps
//!   Rx Bytes:   126268000
//!   Throughput: 16.864 Mbps
//!   Mean delay:  0.011 ms
//!   Packet loss rate:  0.000 %
//!   Rx Packets: 119800
//!
//!
//!   Mean throughput: 16.864 Mbps
//!   Mean delay: 0.011 ms
//!   Packet loss rate: 0.000 %
//!   Fairness index: 0.000
//! ```
//!
//! "No data" values print as `n/a`.

use std::io::Write;

use crate::{FlowKpiRow, NetworkSummaryRow, OutputResult, ReportWriter};

/// Writes the report as plain text to any `io::Write`.
pub struct TextWriter<W: Write> {
    out:      W,
    finished: bool,
}

impl<W: Write> TextWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, finished: false }
    }

    /// Unwrap the inner sink (e.g. to inspect a `Vec<u8>` in tests).
    pub fn into_inner(self) -> W {
        self.out
    }
}

fn value(v: Option<f64>, unit: &str) -> String {
    match v {
        Some(x) if unit.is_empty() => format!("{x:.3}"),
        Some(x) => format!("{x:.3} {unit}"),
        None => "n/a".to_owned(),
    }
}

impl<W: Write> ReportWriter for TextWriter<W> {
    fn write_flows(&mut self, rows: &[FlowKpiRow]) -> OutputResult<()> {
        for r in rows {
            writeln!(
                self.out,
                "\nFlow {} ({}:{} -> {}:{}) proto {}",
                r.flow_id, r.src_addr, r.src_port, r.dst_addr, r.dst_port, r.protocol
            )?;
            writeln!(self.out, "  Tx Packets: {}", r.tx_packets)?;
            writeln!(self.out, "  Tx Bytes:   {}", r.tx_bytes)?;
            writeln!(self.out, "  TxOffered:  {:.3} Mbps", r.offered_mbps)?;
            writeln!(self.out, "  Rx Bytes:   {}", r.rx_bytes)?;
            writeln!(self.out, "  Throughput: {}", value(r.throughput_mbps, "Mbps"))?;
            writeln!(self.out, "  Mean delay:  {}", value(r.mean_delay_ms, "ms"))?;
            writeln!(self.out, "  Packet loss rate:  {}", value(r.loss_rate_percent, "%"))?;
            writeln!(self.out, "  Rx Packets: {}", r.rx_packets)?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &NetworkSummaryRow) -> OutputResult<()> {
        writeln!(self.out, "\n\n  Mean throughput: {}", value(row.mean_throughput_mbps, "Mbps"))?;
        writeln!(self.out, "  Mean delay: {}", value(row.mean_delay_ms, "ms"))?;
        writeln!(self.out, "  Packet loss rate: {}", value(row.packet_loss_rate_percent, "%"))?;
        writeln!(self.out, "  Fairness index: {}", value(Some(row.fairness_index), ""))?;
        writeln!(
            self.out,
            "  Contributing flows: {} of {}",
            row.contributing_flows, row.total_flows
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
