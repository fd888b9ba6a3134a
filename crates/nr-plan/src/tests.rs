//! Unit tests for nr-plan.

use nr_core::{BwpId, CellId, QosClass, TerminalId};

use crate::{BandConfig, ScenarioConfig, TrafficClassConfig};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

fn band(center_freq_hz: f64, bandwidth_hz: f64, numerology: u8) -> BandConfig {
    BandConfig { center_freq_hz, bandwidth_hz, numerology }
}

fn class(name: &str, port: u16, qos: QosClass) -> TrafficClassConfig {
    TrafficClassConfig { name: name.to_owned(), port, qos }
}

/// Two unequal bands so shares are not trivially 0.5.
fn uneven_config() -> ScenarioConfig {
    ScenarioConfig {
        bands: vec![band(3.5e9, 100e6, 1), band(28e9, 300e6, 3)],
        ..ScenarioConfig::voice()
    }
}

// ── Spectrum ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod spectrum {
    use super::*;
    use crate::{band_tx_power_dbm, linear_power_budget, plan};

    #[test]
    fn shares_sum_to_one_over_active_bands() {
        for config in [ScenarioConfig::voice(), ScenarioConfig::low_latency(), uneven_config()] {
            let p = plan(&config).unwrap();
            assert!(approx_eq(p.spectrum.share_sum(), 1.0));
        }
    }

    #[test]
    fn uneven_shares_follow_bandwidth() {
        let p = plan(&uneven_config()).unwrap();
        assert!(approx_eq(p.spectrum.bands[0].share, 0.25));
        assert!(approx_eq(p.spectrum.bands[1].share, 0.75));
        assert!(approx_eq(p.spectrum.total_bandwidth_hz, 400e6));
    }

    #[test]
    fn single_band_has_full_share_and_full_budget() {
        let config = ScenarioConfig { double_band: false, ..ScenarioConfig::voice() };
        let p = plan(&config).unwrap();
        assert_eq!(p.spectrum.bands.len(), 1);
        assert_eq!(p.spectrum.bands[0].share, 1.0);
        assert_eq!(
            p.spectrum.bands[0].tx_power_dbm,
            10.0 * linear_power_budget(55.0).log10()
        );
    }

    #[test]
    fn inactive_band_is_omitted_not_zeroed() {
        let config = ScenarioConfig { double_band: false, ..ScenarioConfig::voice() };
        let p = plan(&config).unwrap();
        assert!(p.spectrum.band(BwpId(1)).is_none());
        assert!(p.cells.iter().all(|c| c.bwps.len() == 1));
    }

    #[test]
    fn power_budget_uses_historical_scaling() {
        // 20^(P/5), not 10^(P/10).
        assert!(approx_eq(linear_power_budget(5.0), 20.0));
        assert!(approx_eq(linear_power_budget(10.0), 400.0));
    }

    #[test]
    fn equal_bands_split_power_evenly() {
        let p = plan(&ScenarioConfig::voice()).unwrap();
        let expected = band_tx_power_dbm(0.5, linear_power_budget(55.0));
        for b in &p.spectrum.bands {
            assert!(approx_eq(b.tx_power_dbm, expected));
        }
        // Halving the share costs 10·log10(2) ≈ 3.01 dB.
        let full = 10.0 * linear_power_budget(55.0).log10();
        assert!(approx_eq(full - expected, 10.0 * 2f64.log10()));
    }

    #[test]
    fn numerology_passes_through() {
        let p = plan(&ScenarioConfig::voice()).unwrap();
        assert_eq!(p.spectrum.bands[0].numerology, 4);
        assert_eq!(p.spectrum.bands[1].numerology, 2);
    }
}

// ── Validation ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod validation {
    use super::*;
    use crate::{PlanError, plan};

    #[test]
    fn rejects_frequency_below_floor() {
        let mut config = ScenarioConfig::voice();
        config.bands[0].center_freq_hz = 0.1e9;
        assert!(matches!(
            plan(&config),
            Err(PlanError::InvalidFrequency { band: 0, .. })
        ));
    }

    #[test]
    fn rejects_frequency_above_ceiling() {
        let mut config = ScenarioConfig::low_latency();
        config.bands[1].center_freq_hz = 500e9;
        assert!(matches!(
            plan(&config),
            Err(PlanError::InvalidFrequency { band: 1, .. })
        ));
    }

    #[test]
    fn ceiling_is_per_scenario() {
        // 200 GHz is fine for the 400 GHz ceiling, not for the 100 GHz one.
        let mut ll = ScenarioConfig::low_latency();
        ll.bands[0].center_freq_hz = 200e9;
        assert!(plan(&ll).is_ok());

        let mut voice = ScenarioConfig::voice();
        voice.bands[0].center_freq_hz = 200e9;
        assert!(matches!(plan(&voice), Err(PlanError::InvalidFrequency { .. })));
    }

    #[test]
    fn inactive_band_frequency_is_still_checked() {
        let mut config = ScenarioConfig { double_band: false, ..ScenarioConfig::voice() };
        config.bands[1].center_freq_hz = 0.1e9;
        assert!(matches!(plan(&config), Err(PlanError::InvalidFrequency { band: 1, .. })));
    }

    #[test]
    fn frequency_checked_before_structure() {
        let mut config = ScenarioConfig::voice();
        config.num_cells = 0;
        config.bands[0].center_freq_hz = f64::NAN;
        assert!(matches!(plan(&config), Err(PlanError::InvalidFrequency { .. })));
    }

    #[test]
    fn rejects_duplicate_port() {
        let mut config = ScenarioConfig::voice();
        config.traffic_classes = vec![
            class("voice", 1235, QosClass::GbrConvVoice),
            class("video", 1235, QosClass::GbrConvVideo),
        ];
        match plan(&config) {
            Err(PlanError::DuplicatePort { port, first, second }) => {
                assert_eq!(port, 1235);
                assert_eq!(first, "voice");
                assert_eq!(second, "video");
            }
            other => panic!("expected DuplicatePort, got {other:?}"),
        }
    }

    #[test]
    fn rejects_zero_cells_and_terminals() {
        let config = ScenarioConfig { num_cells: 0, ..ScenarioConfig::voice() };
        assert!(matches!(plan(&config), Err(PlanError::Config(_))));
        let config = ScenarioConfig { num_terminals: 0, ..ScenarioConfig::voice() };
        assert!(matches!(plan(&config), Err(PlanError::Config(_))));
    }

    #[test]
    fn double_band_needs_two_bands() {
        let mut config = ScenarioConfig::voice();
        config.bands.truncate(1);
        assert!(matches!(
            plan(&config),
            Err(PlanError::CountMismatch { expected: 2, got: 1, what: "bands" })
        ));
    }

    #[test]
    fn rejects_more_than_two_bands() {
        let mut config = ScenarioConfig::voice();
        let extra = config.bands[1].clone();
        config.bands.push(extra);
        assert!(matches!(
            plan(&config),
            Err(PlanError::CountMismatch { expected: 2, got: 3, what: "bands" })
        ));
    }

    #[test]
    fn rejects_non_finite_total_power() {
        for p in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let config = ScenarioConfig { total_tx_power_dbm: p, ..ScenarioConfig::voice() };
            assert!(matches!(plan(&config), Err(PlanError::Config(_))), "accepted {p}");
        }
    }

    #[test]
    fn rejects_non_positive_bandwidth() {
        let mut config = ScenarioConfig::voice();
        config.bands[1].bandwidth_hz = 0.0;
        assert!(matches!(plan(&config), Err(PlanError::Config(_))));
    }

    #[test]
    fn rejects_empty_traffic_classes() {
        let config = ScenarioConfig { traffic_classes: vec![], ..ScenarioConfig::voice() };
        assert!(matches!(plan(&config), Err(PlanError::Config(_))));
    }

    #[test]
    fn rejects_position_count_mismatch() {
        let mut config = ScenarioConfig::voice();
        config.cell_positions.pop();
        assert!(matches!(
            plan(&config),
            Err(PlanError::CountMismatch { what: "cell positions", .. })
        ));
    }

    #[test]
    fn rejects_bad_window() {
        let mut config = ScenarioConfig::voice();
        config.window.app_start_secs = 120.0;
        assert!(matches!(plan(&config), Err(PlanError::Config(_))));
    }
}

// ── Attachment ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod attachment {
    use std::num::NonZeroU32;

    use super::*;
    use crate::{AttachmentMap, plan};

    #[test]
    fn round_robin_for_many_sizes() {
        for cells in 1..=7u32 {
            for terminals in 1..=20u32 {
                let map = AttachmentMap::round_robin(terminals, NonZeroU32::new(cells).unwrap());
                assert_eq!(map.len(), terminals as usize);
                for i in 0..terminals {
                    assert_eq!(map.cell_of(TerminalId(i)), Some(CellId(i % cells)));
                }
            }
        }
    }

    #[test]
    fn reference_scenario_alternates_cells() {
        let p = plan(&ScenarioConfig::voice()).unwrap();
        let cells: Vec<u32> = p.attachment.iter().map(|(_, c)| c.0).collect();
        assert_eq!(cells, vec![0, 1, 2, 0, 1]);
    }

    #[test]
    fn terminals_of_cell() {
        let map = AttachmentMap::round_robin(5, NonZeroU32::new(3).unwrap());
        let t: Vec<TerminalId> = map.terminals_of(CellId(0)).collect();
        assert_eq!(t, vec![TerminalId(0), TerminalId(3)]);
        assert_eq!(map.terminals_of(CellId(2)).count(), 1);
    }

    #[test]
    fn unknown_terminal_has_no_cell() {
        let map = AttachmentMap::round_robin(2, NonZeroU32::new(1).unwrap());
        assert_eq!(map.cell_of(TerminalId(2)), None);
    }
}

// ── Bearers ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod bearers {
    use super::*;
    use crate::{PortRange, build_bearers, plan};

    #[test]
    fn one_bearer_per_class_on_last_bwp() {
        let p = plan(&ScenarioConfig::low_latency()).unwrap();
        assert_eq!(p.bearers.len(), 1);
        let b = &p.bearers[0];
        assert_eq!(b.qos, QosClass::NgbrLowLatEmbb);
        assert_eq!(b.ports, PortRange::single(1236));
        assert_eq!(b.bwp, BwpId(1));
    }

    #[test]
    fn single_band_routes_to_bwp_zero() {
        let config = ScenarioConfig { double_band: false, ..ScenarioConfig::voice() };
        let p = plan(&config).unwrap();
        assert_eq!(p.bearers[0].bwp, BwpId(0));
    }

    #[test]
    fn distinct_ports_coexist() {
        let classes = [
            class("voice", 1235, QosClass::GbrConvVoice),
            class("low-latency", 1236, QosClass::NgbrLowLatEmbb),
        ];
        let bearers = build_bearers(&classes, BwpId(0)).unwrap();
        assert_eq!(bearers.len(), 2);
        assert!(!bearers[0].ports.overlaps(&bearers[1].ports));
    }

    #[test]
    fn port_range_overlap() {
        let a = PortRange { start: 1000, end: 1010 };
        assert!(a.overlaps(&PortRange::single(1010)));
        assert!(!a.overlaps(&PortRange::single(1011)));
        assert!(a.contains(1005));
    }
}

// ── Cells ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod cells {
    use super::*;
    use crate::{PlanError, PowerOverride, plan};

    #[test]
    fn every_cell_gets_same_power_without_overrides() {
        let p = plan(&uneven_config()).unwrap();
        for bwp in [BwpId(0), BwpId(1)] {
            let expected = p.spectrum.band(bwp).unwrap().tx_power_dbm;
            for c in 0..3 {
                assert_eq!(p.cell_tx_power_dbm(CellId(c), bwp), Some(expected));
            }
        }
    }

    #[test]
    fn positions_reused_as_given() {
        let config = ScenarioConfig::voice();
        let p = plan(&config).unwrap();
        for (cell, pos) in p.cells.iter().zip(&config.cell_positions) {
            assert_eq!(cell.position.as_ref(), Some(pos));
        }
    }

    #[test]
    fn no_positions_leaves_placement_open() {
        let config = ScenarioConfig { cell_positions: vec![], ..ScenarioConfig::voice() };
        let p = plan(&config).unwrap();
        assert!(p.cells.iter().all(|c| c.position.is_none()));
    }

    #[test]
    fn override_replaces_one_cell_band() {
        let mut config = ScenarioConfig::voice();
        config.power_overrides = vec![PowerOverride { cell: 1, band: 0, tx_power_dbm: 30.0 }];
        let p = plan(&config).unwrap();
        let homogeneous = p.spectrum.bands[0].tx_power_dbm;
        assert_eq!(p.cell_tx_power_dbm(CellId(1), BwpId(0)), Some(30.0));
        assert_eq!(p.cell_tx_power_dbm(CellId(0), BwpId(0)), Some(homogeneous));
        assert_eq!(p.cell_tx_power_dbm(CellId(1), BwpId(1)), Some(p.spectrum.bands[1].tx_power_dbm));
    }

    #[test]
    fn override_out_of_range_fails() {
        let mut config = ScenarioConfig::voice();
        config.power_overrides = vec![PowerOverride { cell: 3, band: 0, tx_power_dbm: 30.0 }];
        assert!(matches!(plan(&config), Err(PlanError::Config(_))));

        let mut config = ScenarioConfig { double_band: false, ..ScenarioConfig::voice() };
        config.power_overrides = vec![PowerOverride { cell: 0, band: 1, tx_power_dbm: 30.0 }];
        assert!(matches!(plan(&config), Err(PlanError::Config(_))));
    }
}

// ── Traffic ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod traffic {
    use super::*;
    use crate::UdpTraffic;

    #[test]
    fn interval_and_offered_rate() {
        let t = UdpTraffic { packet_size_bytes: 1024, lambda: 10_000 };
        assert!(approx_eq(t.interval_secs(), 0.5));
        assert!(approx_eq(t.offered_rate_mbps(), 1024.0 * 8.0 / 0.5 / 1e6));
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loading {
    use std::io::Write;

    use super::*;
    use crate::{PlanError, load_scenario_str, load_scenario_toml, plan};

    const MINIMAL: &str = r#"
num_cells          = 2
num_terminals      = 4
double_band        = false
total_tx_power_dbm = 40.0

[[bands]]
center_freq_hz = 3.5e9
bandwidth_hz   = 20e6
numerology     = 1

[[traffic_classes]]
name = "voice"
port = 1235
qos  = "GBR_CONV_VOICE"
"#;

    #[test]
    fn minimal_document_takes_defaults() {
        let config = load_scenario_str(MINIMAL).unwrap();
        assert_eq!(config.num_cells, 2);
        assert!(!config.double_band);
        assert_eq!(config.traffic_classes[0].qos, QosClass::GbrConvVoice);
        assert_eq!(config.scheduler, "ns3::NrMacSchedulerTdmaRR");
        assert_eq!(config.frequency_limits.max_hz, 100e9);
        assert!(config.cell_positions.is_empty());
        assert!(plan(&config).is_ok());
    }

    #[test]
    fn double_band_defaults_to_true() {
        let text = MINIMAL.replace("double_band        = false\n", "");
        let config = load_scenario_str(&text).unwrap();
        assert!(config.double_band);
        // Only one band given, so planning rejects it.
        assert!(matches!(plan(&config), Err(PlanError::CountMismatch { .. })));
    }

    #[test]
    fn unknown_qos_is_parse_error() {
        let text = MINIMAL.replace("GBR_CONV_VOICE", "BEST_EFFORT");
        assert!(matches!(load_scenario_str(&text), Err(PlanError::Parse(_))));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MINIMAL.as_bytes()).unwrap();
        let config = load_scenario_toml(file.path()).unwrap();
        assert_eq!(config.num_terminals, 4);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_scenario_toml(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(PlanError::Io(_))));
    }
}
