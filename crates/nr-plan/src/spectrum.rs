//! Bandwidth shares and per-band transmit power.
//!
//! # Power budget
//!
//! The total power budget is spread across active bands in proportion to
//! their bandwidth:
//!
//! ```text
//! budget   = 20^(total_tx_power_dbm / 5)
//! share_i  = bandwidth_i / Σ bandwidth_active
//! power_i  = 10 · log10(share_i · budget)        [dBm]
//! ```
//!
//! `20^(P/5)` is **not** the usual dBm → mW conversion (`10^(P/10)`).  It is
//! the scaling the reference scenarios were calibrated with and is kept
//! verbatim so plans stay comparable with their results.

use serde::{Deserialize, Serialize};
use tracing::debug;

use nr_core::BwpId;

use crate::config::BandConfig;

/// Linear power budget derived from the total transmit power.
///
/// Uses `20^(P/5)`, not the usual `10^(P/10)`.  Existing scenario results
/// depend on this scaling.
#[inline]
pub fn linear_power_budget(total_tx_power_dbm: f64) -> f64 {
    20f64.powf(total_tx_power_dbm / 5.0)
}

/// Transmit power (dBm) for a band holding `share` of the spectrum.
#[inline]
pub fn band_tx_power_dbm(share: f64, budget: f64) -> f64 {
    10.0 * (share * budget).log10()
}

/// Plan for one active band; one BWP per band.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BandPlan {
    pub bwp:            BwpId,
    pub center_freq_hz: f64,
    pub bandwidth_hz:   f64,
    /// Passed through to the simulator untouched.
    pub numerology:     u8,
    /// `bandwidth_hz / total_bandwidth_hz`.
    pub share:          f64,
    /// Homogeneous per-cell transmit power on this band, dBm.
    pub tx_power_dbm:   f64,
}

/// Spectrum split over the active bands.  Inactive bands are absent, not
/// zeroed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpectrumPlan {
    pub bands:               Vec<BandPlan>,
    pub total_bandwidth_hz:  f64,
    pub linear_power_budget: f64,
}

impl SpectrumPlan {
    /// Split `active` bands.  Callers have already checked that `active` is
    /// non-empty and every bandwidth is positive.
    pub fn split(active: &[BandConfig], total_tx_power_dbm: f64) -> Self {
        let total_bandwidth_hz: f64 = active.iter().map(|b| b.bandwidth_hz).sum();
        let budget = linear_power_budget(total_tx_power_dbm);

        let bands = active
            .iter()
            .enumerate()
            .map(|(i, band)| {
                let share = band.bandwidth_hz / total_bandwidth_hz;
                let tx_power_dbm = band_tx_power_dbm(share, budget);
                debug!(bwp = i, share, tx_power_dbm, "band planned");
                BandPlan {
                    bwp:            BwpId(i as u8),
                    center_freq_hz: band.center_freq_hz,
                    bandwidth_hz:   band.bandwidth_hz,
                    numerology:     band.numerology,
                    share,
                    tx_power_dbm,
                }
            })
            .collect();

        Self { bands, total_bandwidth_hz, linear_power_budget: budget }
    }

    /// Sum of all band shares; 1.0 up to rounding.
    pub fn share_sum(&self) -> f64 {
        self.bands.iter().map(|b| b.share).sum()
    }

    pub fn band(&self, bwp: BwpId) -> Option<&BandPlan> {
        self.bands.get(bwp.index())
    }

    /// The highest-indexed active BWP.
    pub fn last_bwp(&self) -> Option<BwpId> {
        self.bands.last().map(|b| b.bwp)
    }
}
