//! Plain data row types written by report backends.
//!
//! `None` marks a KPI with no defined value ("no data").

/// One flow's KPIs, flattened for writing.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowKpiRow {
    pub flow_id:           u32,
    pub src_addr:          String,
    pub src_port:          u16,
    pub dst_addr:          String,
    pub dst_port:          u16,
    /// `"TCP"`, `"UDP"` or `"proto-<n>"`.
    pub protocol:          String,
    pub tx_packets:        u64,
    pub tx_bytes:          u64,
    pub offered_mbps:      f64,
    pub rx_packets:        u64,
    pub rx_bytes:          u64,
    pub throughput_mbps:   Option<f64>,
    pub mean_delay_ms:     Option<f64>,
    pub loss_rate_percent: Option<f64>,
    /// `"delivered"`, `"starved"` or `"malformed"`.
    pub status:            &'static str,
}

/// The network-wide summary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetworkSummaryRow {
    pub total_flows:              u64,
    pub contributing_flows:       u64,
    pub mean_throughput_mbps:     Option<f64>,
    pub mean_delay_ms:            Option<f64>,
    pub packet_loss_rate_percent: Option<f64>,
    pub fairness_index:           f64,
}
