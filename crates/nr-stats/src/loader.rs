//! CSV loader for recorded flow-monitor output.
//!
//! # CSV format
//!
//! One row per flow, in the order the monitor reported them.
//!
//! ```csv
//! flow_id,src_addr,src_port,dst_addr,dst_port,protocol,tx_packets,tx_bytes,rx_packets,rx_bytes,delay_sum_secs
//! 1,1.0.0.2,49153,7.0.0.2,1235,17,119800,126268000,119800,126268000,1.287
//! 2,1.0.0.2,49154,7.0.0.3,1235,17,119800,126268000,0,0,0
//! ```
//!
//! `protocol` is the IP protocol number (6 = TCP, 17 = UDP).

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use nr_core::FlowId;

use crate::{FiveTuple, Protocol, RawFlowRecord, StatsError, StatsResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct FlowRow {
    flow_id:        u32,
    src_addr:       std::net::IpAddr,
    src_port:       u16,
    dst_addr:       std::net::IpAddr,
    dst_port:       u16,
    protocol:       u8,
    tx_packets:     u64,
    tx_bytes:       u64,
    rx_packets:     u64,
    rx_bytes:       u64,
    delay_sum_secs: f64,
}

impl From<FlowRow> for RawFlowRecord {
    fn from(r: FlowRow) -> Self {
        RawFlowRecord {
            flow:           FlowId(r.flow_id),
            tuple:          FiveTuple {
                src_addr: r.src_addr,
                src_port: r.src_port,
                dst_addr: r.dst_addr,
                dst_port: r.dst_port,
                protocol: Protocol::from(r.protocol),
            },
            tx_packets:     r.tx_packets,
            tx_bytes:       r.tx_bytes,
            rx_packets:     r.rx_packets,
            rx_bytes:       r.rx_bytes,
            delay_sum_secs: r.delay_sum_secs,
        }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load flow records from a CSV file, preserving row order.
pub fn load_records_csv(path: &Path) -> StatsResult<Vec<RawFlowRecord>> {
    let file = std::fs::File::open(path).map_err(StatsError::Io)?;
    load_records_reader(file)
}

/// Like [`load_records_csv`] but accepts any `Read` source.
pub fn load_records_reader<R: Read>(reader: R) -> StatsResult<Vec<RawFlowRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    csv_reader
        .deserialize::<FlowRow>()
        .map(|row| {
            row.map(RawFlowRecord::from)
                .map_err(|e| StatsError::Parse(e.to_string()))
        })
        .collect()
}
