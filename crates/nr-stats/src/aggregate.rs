//! The flow statistics reduction.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::{
    FlowKpi, FlowReport, FlowStatus, MalformedReason, NetworkKpi, RawFlowRecord, StatsError,
    StatsResult,
};

/// Reduce `records` into per-flow and network KPIs.
///
/// `flow_duration_secs` is the span over which traffic could flow.  The only
/// hard error is a non-positive or non-finite duration; inconsistent records
/// are reported per flow (see [`FlowReport::warnings`]) and excluded from the
/// network figures.
///
/// Pure: the same input always yields the same report.
pub fn aggregate(records: &[RawFlowRecord], flow_duration_secs: f64) -> StatsResult<FlowReport> {
    if !(flow_duration_secs.is_finite() && flow_duration_secs > 0.0) {
        return Err(StatsError::InvalidDuration(flow_duration_secs));
    }

    #[cfg(feature = "parallel")]
    let flows: Vec<FlowKpi> = records
        .par_iter()
        .map(|r| flow_kpi(r, flow_duration_secs))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let flows: Vec<FlowKpi> = records
        .iter()
        .map(|r| flow_kpi(r, flow_duration_secs))
        .collect();

    let report = FlowReport {
        network: network_kpi(&flows, records, flow_duration_secs),
        flows,
    };
    for w in report.warnings() {
        warn!("{w}");
    }
    Ok(report)
}

/// Jain's fairness index `(Σx)² / (n·Σx²)`.
///
/// Returns 0 for fewer than two samples or when every sample is zero.
pub fn jain_fairness(samples: &[f64]) -> f64 {
    if samples.len() < 2 {
        return 0.0;
    }
    let sum: f64 = samples.iter().sum();
    let sum_sq: f64 = samples.iter().map(|x| x * x).sum();
    if sum_sq == 0.0 {
        return 0.0;
    }
    (sum * sum) / (samples.len() as f64 * sum_sq)
}

// ── Per flow ──────────────────────────────────────────────────────────────────

#[inline]
fn mbps(bytes: u64, secs: f64) -> f64 {
    bytes as f64 * 8.0 / secs / 1e6
}

fn flow_kpi(r: &RawFlowRecord, duration: f64) -> FlowKpi {
    let status = if r.rx_packets == 0 {
        FlowStatus::Starved
    } else if r.tx_packets == 0 {
        FlowStatus::Malformed(MalformedReason::NoTransmissions)
    } else if r.rx_packets > r.tx_packets {
        FlowStatus::Malformed(MalformedReason::MoreReceivedThanSent)
    } else {
        FlowStatus::Delivered
    };

    let (throughput_mbps, mean_delay_ms, loss_rate_percent) = match status {
        FlowStatus::Starved => (Some(0.0), Some(0.0), Some(100.0)),
        FlowStatus::Malformed(_) => (None, None, None),
        FlowStatus::Delivered => (
            Some(mbps(r.rx_bytes, duration)),
            Some(1000.0 * r.delay_sum_secs / r.rx_packets as f64),
            Some((r.tx_packets - r.rx_packets) as f64 * 100.0 / r.tx_packets as f64),
        ),
    };

    FlowKpi {
        flow:         r.flow,
        tuple:        r.tuple,
        tx_packets:   r.tx_packets,
        tx_bytes:     r.tx_bytes,
        rx_packets:   r.rx_packets,
        rx_bytes:     r.rx_bytes,
        offered_mbps: mbps(r.tx_bytes, duration),
        throughput_mbps,
        mean_delay_ms,
        loss_rate_percent,
        status,
    }
}

// ── Network ───────────────────────────────────────────────────────────────────

fn network_kpi(flows: &[FlowKpi], records: &[RawFlowRecord], duration: f64) -> NetworkKpi {
    // Counter sums are accumulated in f64; u64 sums overflow on large captures.
    let mut rx_bytes = 0.0f64;
    let mut rx_packets = 0.0f64;
    let mut tx_packets = 0.0f64;
    let mut lost = 0.0f64;
    let mut delay_sum = 0.0;
    let mut throughputs: Vec<f64> = Vec::new();

    for (k, r) in flows.iter().zip(records) {
        if !k.is_contributing() {
            continue;
        }
        rx_bytes += r.rx_bytes as f64;
        rx_packets += r.rx_packets as f64;
        tx_packets += r.tx_packets as f64;
        lost += (r.tx_packets - r.rx_packets) as f64;
        delay_sum += r.delay_sum_secs;
        throughputs.push(k.throughput_mbps.unwrap_or(0.0));
    }

    let contributing = throughputs.len();
    if records.is_empty() {
        warn!("no flow records to aggregate");
    }

    let kpi = if contributing == 0 {
        if !records.is_empty() {
            warn!(flows = records.len(), "no flow received any packet");
        }
        let any_sent = records.iter().any(|r| r.tx_packets > 0);
        NetworkKpi {
            total_flows:              records.len(),
            contributing_flows:       0,
            mean_throughput_mbps:     None,
            mean_delay_ms:            None,
            packet_loss_rate_percent: any_sent.then_some(100.0),
            fairness_index:           0.0,
        }
    } else {
        NetworkKpi {
            total_flows:              records.len(),
            contributing_flows:       contributing,
            mean_throughput_mbps:     Some(rx_bytes * 8.0 / (duration * contributing as f64) / 1e6),
            mean_delay_ms:            Some(delay_sum / rx_packets * 1000.0),
            packet_loss_rate_percent: Some(lost * 100.0 / tx_packets),
            fairness_index:           jain_fairness(&throughputs),
        }
    };

    debug!(?kpi, "network KPIs");
    kpi
}
