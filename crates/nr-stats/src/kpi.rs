//! KPI value types.
//!
//! `None` in any KPI field means "no data": the quantity has no defined value
//! for this input, as opposed to a measured zero.

use std::fmt;

use serde::{Deserialize, Serialize};

use nr_core::FlowId;

use crate::{FiveTuple, StatsError};

/// Why a record was rejected.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum MalformedReason {
    /// Packets were received but none were sent.
    NoTransmissions,
    /// More packets received than sent; loss would be negative.
    MoreReceivedThanSent,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::NoTransmissions      => f.write_str("rx_packets > 0 with tx_packets == 0"),
            MalformedReason::MoreReceivedThanSent => f.write_str("rx_packets exceeds tx_packets"),
        }
    }
}

/// How a flow's KPIs were derived.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum FlowStatus {
    /// At least one packet received; KPIs are computed ratios.
    Delivered,
    /// Nothing received; fixed values 0 Mbps, 0 ms, 100 %.
    Starved,
    /// Counters are inconsistent; KPIs are "no data".
    Malformed(MalformedReason),
}

/// Per-flow KPIs, written once from the final counters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlowKpi {
    pub flow:              FlowId,
    pub tuple:             FiveTuple,
    pub tx_packets:        u64,
    pub tx_bytes:          u64,
    pub rx_packets:        u64,
    pub rx_bytes:          u64,
    /// Offered load, from transmitted bytes.  Defined for every flow.
    pub offered_mbps:      f64,
    pub throughput_mbps:   Option<f64>,
    pub mean_delay_ms:     Option<f64>,
    pub loss_rate_percent: Option<f64>,
    pub status:            FlowStatus,
}

impl FlowKpi {
    /// Counts towards the network-wide figures.
    #[inline]
    pub fn is_contributing(&self) -> bool {
        self.status == FlowStatus::Delivered
    }
}

/// Network-wide KPIs over contributing flows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NetworkKpi {
    pub total_flows:              usize,
    pub contributing_flows:       usize,
    pub mean_throughput_mbps:     Option<f64>,
    pub mean_delay_ms:            Option<f64>,
    pub packet_loss_rate_percent: Option<f64>,
    /// Jain's index over contributing flows; 0 when fewer than two contribute.
    pub fairness_index:           f64,
}

/// Result of one aggregation: flows in input order plus the summary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlowReport {
    pub flows:   Vec<FlowKpi>,
    pub network: NetworkKpi,
}

impl FlowReport {
    /// One `MalformedRecord` per rejected flow, in input order.
    pub fn warnings(&self) -> impl Iterator<Item = StatsError> + '_ {
        self.flows.iter().filter_map(|k| match k.status {
            FlowStatus::Malformed(reason) => Some(StatsError::MalformedRecord { flow: k.flow, reason }),
            _ => None,
        })
    }
}
