//! `nr-plan` — turns a handful of scenario parameters into the radio plan the
//! simulator is configured with.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`config`]    | `ScenarioConfig`, `BandConfig`, presets, TOML loading     |
//! | [`spectrum`]  | `SpectrumPlan`, `BandPlan`, power-budget formulas         |
//! | [`attach`]    | `AttachmentMap` (round-robin UE → cell)                   |
//! | [`bearer`]    | `PortRange`, `BearerTft`                                  |
//! | [`traffic`]   | `UdpTraffic` source parameters                            |
//! | [`planner`]   | `plan()`, `ScenarioPlan`, `CellRadioConfig`               |
//! | [`error`]     | `PlanError`, `PlanResult<T>`                              |
//!
//! # Planning order
//!
//! ```text
//! ① frequency bounds  — every configured band, before anything is derived
//! ② structure         — cell/terminal counts, band count, bandwidths, classes
//! ③ spectrum          — share_i = bw_i / Σbw_active, power_i = 10·log10(share_i · 20^(P/5))
//! ④ bearers           — one port-keyed TFT per traffic class, on the last active BWP
//! ⑤ cells             — homogeneous per-BWP power, then per-cell overrides
//! ⑥ attachment        — terminal i → cell i mod num_cells
//! ```

pub mod attach;
pub mod bearer;
pub mod config;
pub mod error;
pub mod planner;
pub mod spectrum;
pub mod traffic;

#[cfg(test)]
mod tests;

pub use attach::AttachmentMap;
pub use bearer::{BearerTft, PortRange, build_bearers};
pub use config::{
    BandConfig, FrequencyLimits, PowerOverride, ScenarioConfig, TrafficClassConfig,
    load_scenario_str, load_scenario_toml,
};
pub use error::{PlanError, PlanResult};
pub use planner::{BwpRadioConfig, CellRadioConfig, ScenarioPlan, plan};
pub use spectrum::{BandPlan, SpectrumPlan, band_tx_power_dbm, linear_power_budget};
pub use traffic::UdpTraffic;
