//! The scenario planner: [`plan`] and its output, [`ScenarioPlan`].

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use tracing::info;

use nr_core::{BwpId, CellId, FlowWindow, Position};

use crate::bearer::build_bearers;
use crate::{
    AttachmentMap, BearerTft, PlanError, PlanResult, ScenarioConfig, SpectrumPlan, UdpTraffic,
};

/// Radio settings of one cell on one BWP.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BwpRadioConfig {
    pub bwp:          BwpId,
    pub numerology:   u8,
    pub tx_power_dbm: f64,
}

/// Everything the simulator needs to configure one cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CellRadioConfig {
    pub cell:     CellId,
    /// As given in the scenario; `None` leaves placement to the simulator.
    pub position: Option<Position>,
    /// One entry per active band, in BWP order.
    pub bwps:     Vec<BwpRadioConfig>,
}

/// Output of [`plan`].  Pure data; applying it is the simulator's job.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioPlan {
    pub spectrum:   SpectrumPlan,
    pub cells:      Vec<CellRadioConfig>,
    pub attachment: AttachmentMap,
    pub bearers:    Vec<BearerTft>,
    pub traffic:    UdpTraffic,
    pub window:     FlowWindow,
    pub scheduler:  String,
}

impl ScenarioPlan {
    /// Transmit power of `cell` on `bwp`, after overrides.
    pub fn cell_tx_power_dbm(&self, cell: CellId, bwp: BwpId) -> Option<f64> {
        self.cells
            .get(cell.index())?
            .bwps
            .get(bwp.index())
            .map(|b| b.tx_power_dbm)
    }
}

/// Derive the full radio plan for `config`.
///
/// Frequencies are checked first; no derived value is computed for a
/// scenario with an out-of-range band.  Any error means no plan at all.
pub fn plan(config: &ScenarioConfig) -> PlanResult<ScenarioPlan> {
    check_frequencies(config)?;
    let num_cells = check_structure(config)?;

    let active = config.active_bands();
    let spectrum = SpectrumPlan::split(active, config.total_tx_power_dbm);

    // Every class rides the last active band: BWP 1 with two bands, BWP 0 otherwise.
    let class_bwp = spectrum
        .last_bwp()
        .ok_or_else(|| PlanError::Config("no active band".into()))?;
    let bearers = build_bearers(&config.traffic_classes, class_bwp)?;

    let cells = cell_configs(config, &spectrum)?;
    let attachment = AttachmentMap::round_robin(config.num_terminals, num_cells);

    info!(
        cells = config.num_cells,
        terminals = config.num_terminals,
        bands = spectrum.bands.len(),
        bearers = bearers.len(),
        "scenario planned"
    );

    Ok(ScenarioPlan {
        spectrum,
        cells,
        attachment,
        bearers,
        traffic:   config.traffic,
        window:    config.window,
        scheduler: config.scheduler.clone(),
    })
}

// ── Validation ────────────────────────────────────────────────────────────────

const MAX_BANDS: usize = 2;

fn check_frequencies(config: &ScenarioConfig) -> PlanResult<()> {
    let limits = config.frequency_limits;
    // Inactive bands are checked too.
    for (band, b) in config.bands.iter().enumerate() {
        if !limits.contains(b.center_freq_hz) {
            return Err(PlanError::InvalidFrequency {
                band,
                center_freq_hz: b.center_freq_hz,
                min_hz:         limits.min_hz,
                max_hz:         limits.max_hz,
            });
        }
    }
    Ok(())
}

fn check_structure(config: &ScenarioConfig) -> PlanResult<NonZeroU32> {
    let num_cells = NonZeroU32::new(config.num_cells)
        .ok_or_else(|| PlanError::Config("num_cells must be at least 1".into()))?;

    if config.num_terminals == 0 {
        return Err(PlanError::Config("num_terminals must be at least 1".into()));
    }

    let wanted = if config.double_band { 2 } else { 1 };
    if config.bands.len() < wanted {
        return Err(PlanError::CountMismatch {
            expected: wanted,
            got:      config.bands.len(),
            what:     "bands",
        });
    }
    // One or two operation bands, never more.
    if config.bands.len() > MAX_BANDS {
        return Err(PlanError::CountMismatch {
            expected: MAX_BANDS,
            got:      config.bands.len(),
            what:     "bands",
        });
    }

    if !config.total_tx_power_dbm.is_finite() {
        return Err(PlanError::Config(format!(
            "total transmit power {} dBm must be finite",
            config.total_tx_power_dbm
        )));
    }

    if let Some(b) = config
        .active_bands()
        .iter()
        .find(|b| !(b.bandwidth_hz.is_finite() && b.bandwidth_hz > 0.0))
    {
        return Err(PlanError::Config(format!(
            "bandwidth {} Hz must be positive",
            b.bandwidth_hz
        )));
    }

    if config.traffic_classes.is_empty() {
        return Err(PlanError::Config("at least one traffic class is required".into()));
    }

    if config.traffic.lambda == 0 {
        return Err(PlanError::Config("traffic lambda must be positive".into()));
    }

    if !config.cell_positions.is_empty() && config.cell_positions.len() != config.num_cells as usize {
        return Err(PlanError::CountMismatch {
            expected: config.num_cells as usize,
            got:      config.cell_positions.len(),
            what:     "cell positions",
        });
    }

    config.window.validate()?;

    Ok(num_cells)
}

// ── Per-cell configuration ────────────────────────────────────────────────────

fn cell_configs(config: &ScenarioConfig, spectrum: &SpectrumPlan) -> PlanResult<Vec<CellRadioConfig>> {
    let homogeneous: Vec<BwpRadioConfig> = spectrum
        .bands
        .iter()
        .map(|b| BwpRadioConfig {
            bwp:          b.bwp,
            numerology:   b.numerology,
            tx_power_dbm: b.tx_power_dbm,
        })
        .collect();

    let mut cells: Vec<CellRadioConfig> = (0..config.num_cells)
        .map(|i| CellRadioConfig {
            cell:     CellId(i),
            position: config.cell_positions.get(i as usize).copied(),
            bwps:     homogeneous.clone(),
        })
        .collect();

    for o in &config.power_overrides {
        let cell = cells.get_mut(o.cell as usize).ok_or_else(|| {
            PlanError::Config(format!(
                "power override for cell {} but the scenario has {} cells",
                o.cell, config.num_cells
            ))
        })?;
        let bwp = cell.bwps.get_mut(o.band).ok_or_else(|| {
            PlanError::Config(format!(
                "power override for band {} but only {} band(s) are active",
                o.band,
                spectrum.bands.len()
            ))
        })?;
        bwp.tx_power_dbm = o.tx_power_dbm;
    }

    Ok(cells)
}
