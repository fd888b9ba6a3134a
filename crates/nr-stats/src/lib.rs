//! `nr-stats` — flow-monitor counters in, KPIs out.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`record`]    | `RawFlowRecord`, `FiveTuple`, `Protocol`                  |
//! | [`loader`]    | `load_records_csv`, `load_records_reader`                 |
//! | [`kpi`]       | `FlowKpi`, `NetworkKpi`, `FlowReport`, `FlowStatus`       |
//! | [`aggregate`] | `aggregate()`                                             |
//! | [`error`]     | `StatsError`, `StatsResult<T>`                            |
//!
//! # Reduction (summary)
//!
//! ```text
//! per flow, rx > 0:   throughput = rx_bytes·8 / T / 1e6          [Mbps]
//!                     delay      = 1000 · delay_sum / rx_packets [ms]
//!                     loss       = (tx − rx)·100 / tx            [%]
//! per flow, rx = 0:   0 Mbps, 0 ms, 100 %
//!
//! network (F contributing flows, rx > 0 and well-formed):
//!                     throughput = Σrx_bytes·8 / (T·F) / 1e6
//!                     delay      = Σdelay_sum / Σrx_packets · 1000
//!                     loss       = Σ(tx − rx)·100 / Σtx
//!                     fairness   = Jain's index if F > 1, else 0
//! ```
//!
//! `T` is the flow duration: simulated time minus application start.

pub mod aggregate;
pub mod error;
pub mod kpi;
pub mod loader;
pub mod record;


pub use aggregate::{aggregate, jain_fairness};
pub use error::{StatsError, StatsResult};
pub use kpi::{FlowKpi, FlowReport, FlowStatus, MalformedReason, NetworkKpi};
pub use loader::{load_records_csv, load_records_reader};
pub use record::{FiveTuple, Protocol, RawFlowRecord};
