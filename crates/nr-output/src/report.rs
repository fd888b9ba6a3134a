//! `write_report` — bridges a `FlowReport` to any `ReportWriter`.

use nr_stats::{FlowKpi, FlowReport, FlowStatus, NetworkKpi};

use crate::row::{FlowKpiRow, NetworkSummaryRow};
use crate::{OutputResult, ReportWriter};

/// Write every flow (in report order), then the summary, then finish.
pub fn write_report<W: ReportWriter>(writer: &mut W, report: &FlowReport) -> OutputResult<()> {
    let rows: Vec<FlowKpiRow> = report.flows.iter().map(flow_row).collect();
    if !rows.is_empty() {
        writer.write_flows(&rows)?;
    }
    writer.write_summary(&summary_row(&report.network))?;
    writer.finish()
}

fn flow_row(k: &FlowKpi) -> FlowKpiRow {
    FlowKpiRow {
        flow_id:           k.flow.0,
        src_addr:          k.tuple.src_addr.to_string(),
        src_port:          k.tuple.src_port,
        dst_addr:          k.tuple.dst_addr.to_string(),
        dst_port:          k.tuple.dst_port,
        protocol:          k.tuple.protocol.to_string(),
        tx_packets:        k.tx_packets,
        tx_bytes:          k.tx_bytes,
        offered_mbps:      k.offered_mbps,
        rx_packets:        k.rx_packets,
        rx_bytes:          k.rx_bytes,
        throughput_mbps:   k.throughput_mbps,
        mean_delay_ms:     k.mean_delay_ms,
        loss_rate_percent: k.loss_rate_percent,
        status:            match k.status {
            FlowStatus::Delivered    => "delivered",
            FlowStatus::Starved      => "starved",
            FlowStatus::Malformed(_) => "malformed",
        },
    }
}

fn summary_row(n: &NetworkKpi) -> NetworkSummaryRow {
    NetworkSummaryRow {
        total_flows:              n.total_flows as u64,
        contributing_flows:       n.contributing_flows as u64,
        mean_throughput_mbps:     n.mean_throughput_mbps,
        mean_delay_ms:            n.mean_delay_ms,
        packet_loss_rate_percent: n.packet_loss_rate_percent,
        fairness_index:           n.fairness_index,
    }
}
