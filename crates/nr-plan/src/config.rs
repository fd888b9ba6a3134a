//! Scenario configuration and TOML loading.
//!
//! # TOML format
//!
//! ```toml
//! num_cells          = 3
//! num_terminals      = 5
//! double_band        = true          # optional, default true
//! total_tx_power_dbm = 55.0
//!
//! [[bands]]
//! center_freq_hz = 28e9
//! bandwidth_hz   = 100e6
//! numerology     = 4
//!
//! [[bands]]
//! center_freq_hz = 28.2e9
//! bandwidth_hz   = 100e6
//! numerology     = 2
//!
//! [[traffic_classes]]
//! name = "voice"
//! port = 1235
//! qos  = "GBR_CONV_VOICE"
//! ```
//!
//! Optional tables and their defaults:
//!
//! | Key                | Default                                        |
//! |--------------------|------------------------------------------------|
//! | `frequency_limits` | `{ min_hz = 0.5e9, max_hz = 100e9 }`           |
//! | `cell_positions`   | empty (simulator places cells)                 |
//! | `power_overrides`  | empty                                          |
//! | `traffic`          | `{ packet_size_bytes = 512, lambda = 10000 }`  |
//! | `window`           | `{ sim_time_secs = 60.0, app_start_secs = 0.1 }` |
//! | `scheduler`        | `"ns3::NrMacSchedulerTdmaRR"`                  |

use std::path::Path;

use serde::{Deserialize, Serialize};

use nr_core::{FlowWindow, Position, QosClass};

use crate::{PlanError, PlanResult, UdpTraffic};

/// One operation band.  Each band carries a single component carrier and a
/// single bandwidth part.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BandConfig {
    pub center_freq_hz: f64,
    pub bandwidth_hz:   f64,
    pub numerology:     u8,
}

/// A traffic class served through its own dedicated bearer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrafficClassConfig {
    pub name: String,
    /// Downlink UDP port the class's TFT matches on.
    pub port: u16,
    pub qos:  QosClass,
}

/// Supported centre-frequency range, inclusive.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrequencyLimits {
    pub min_hz: f64,
    pub max_hz: f64,
}

impl Default for FrequencyLimits {
    fn default() -> Self {
        Self { min_hz: 0.5e9, max_hz: 100e9 }
    }
}

impl FrequencyLimits {
    #[inline]
    pub fn contains(&self, hz: f64) -> bool {
        (self.min_hz..=self.max_hz).contains(&hz)
    }
}

/// Replaces the homogeneous transmit power of one cell on one band.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PowerOverride {
    pub cell:         u32,
    /// Index into the active bands.
    pub band:         usize,
    pub tx_power_dbm: f64,
}

/// Immutable input to [`plan`][crate::plan].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub num_cells:     u32,
    pub num_terminals: u32,

    /// Whether the second entry of `bands` is active.
    #[serde(default = "default_double_band")]
    pub double_band: bool,

    pub bands: Vec<BandConfig>,

    pub total_tx_power_dbm: f64,

    pub traffic_classes: Vec<TrafficClassConfig>,

    #[serde(default)]
    pub frequency_limits: FrequencyLimits,

    /// Cell positions, reused as given.  Empty, or exactly `num_cells` long.
    #[serde(default)]
    pub cell_positions: Vec<Position>,

    #[serde(default)]
    pub power_overrides: Vec<PowerOverride>,

    #[serde(default)]
    pub traffic: UdpTraffic,

    #[serde(default)]
    pub window: FlowWindow,

    /// MAC scheduler type name, passed through to the simulator.
    #[serde(default = "default_scheduler")]
    pub scheduler: String,
}

fn default_double_band() -> bool {
    true
}

fn default_scheduler() -> String {
    "ns3::NrMacSchedulerTdmaRR".to_owned()
}

impl ScenarioConfig {
    /// Bands in use: the first one, plus the second when `double_band` is set.
    pub fn active_bands(&self) -> &[BandConfig] {
        let wanted = if self.double_band { 2 } else { 1 };
        &self.bands[..wanted.min(self.bands.len())]
    }

    /// Low-latency eMBB reference scenario: 2 × 400 MHz at 28 GHz, port 1236.
    pub fn low_latency() -> Self {
        Self {
            bands: vec![
                BandConfig { center_freq_hz: 28e9,   bandwidth_hz: 400e6, numerology: 3 },
                BandConfig { center_freq_hz: 28.2e9, bandwidth_hz: 400e6, numerology: 2 },
            ],
            traffic_classes: vec![TrafficClassConfig {
                name: "low-latency".to_owned(),
                port: 1236,
                qos:  QosClass::NgbrLowLatEmbb,
            }],
            frequency_limits: FrequencyLimits { min_hz: 0.5e9, max_hz: 400e9 },
            traffic: UdpTraffic { packet_size_bytes: 512, lambda: 10_000 },
            ..Self::reference_grid()
        }
    }

    /// Conversational-voice reference scenario: 2 × 100 MHz at 28 GHz, port 1235.
    pub fn voice() -> Self {
        Self {
            bands: vec![
                BandConfig { center_freq_hz: 28e9,   bandwidth_hz: 100e6, numerology: 4 },
                BandConfig { center_freq_hz: 28.2e9, bandwidth_hz: 100e6, numerology: 2 },
            ],
            traffic_classes: vec![TrafficClassConfig {
                name: "voice".to_owned(),
                port: 1235,
                qos:  QosClass::GbrConvVoice,
            }],
            frequency_limits: FrequencyLimits { min_hz: 0.5e9, max_hz: 100e9 },
            traffic: UdpTraffic { packet_size_bytes: 1024, lambda: 10_000 },
            ..Self::reference_grid()
        }
    }

    /// Three cells on a line, five terminals, 55 dBm; shared by both presets.
    fn reference_grid() -> Self {
        Self {
            num_cells:          3,
            num_terminals:      5,
            double_band:        true,
            bands:              Vec::new(),
            total_tx_power_dbm: 55.0,
            traffic_classes:    Vec::new(),
            frequency_limits:   FrequencyLimits::default(),
            cell_positions:     vec![
                Position::new(30.0, 50.0, 10.0),
                Position::new(50.0, 50.0, 10.0),
                Position::new(70.0, 50.0, 10.0),
            ],
            power_overrides:    Vec::new(),
            traffic:            UdpTraffic::default(),
            window:             FlowWindow::default(),
            scheduler:          default_scheduler(),
        }
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// Load a [`ScenarioConfig`] from a TOML file.
pub fn load_scenario_toml(path: &Path) -> PlanResult<ScenarioConfig> {
    let text = std::fs::read_to_string(path).map_err(PlanError::Io)?;
    load_scenario_str(&text)
}

/// Like [`load_scenario_toml`] but parses an in-memory document.
pub fn load_scenario_str(text: &str) -> PlanResult<ScenarioConfig> {
    toml::from_str(text).map_err(|e| PlanError::Parse(e.to_string()))
}
