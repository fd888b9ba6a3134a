//! rr_scenario — round-robin NR scenario, planned and reported end to end.
//!
//! Plans one of the two reference scenarios (or a TOML scenario file),
//! replays flow-monitor counters through [`ReplaySimulator`], and prints the
//! per-flow and network KPIs.  Without `--flows` the bundled voice capture
//! is replayed.
//!
//! # Example
//!
//! ```bash
//! rr_scenario --preset voice
//! rr_scenario --scenario scenarios/low_latency.toml --flows captured.csv --out-dir out/
//! RUST_LOG=debug rr_scenario --plan-json plan.json
//! ```

use std::fs::File;
use std::io::{BufWriter, Cursor};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use nr_output::{CsvWriter, SqliteWriter, TextWriter, write_report};
use nr_plan::{ScenarioConfig, ScenarioPlan, load_scenario_toml};
use nr_run::{ReplaySimulator, RunObserver, ScenarioRunner};
use nr_stats::{FlowReport, RawFlowRecord, load_records_reader};

// ── Constants ─────────────────────────────────────────────────────────────────

const SAMPLE_FLOWS_CSV: &str = include_str!("../scenarios/voice_flows.csv");

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Preset {
    /// GBR conversational voice, 2 × 100 MHz
    Voice,
    /// Non-GBR low-latency eMBB, 2 × 400 MHz
    LowLatency,
}

/// Round-robin NR scenario runner
#[derive(Parser, Debug)]
#[command(name = "rr_scenario")]
#[command(version, about, long_about = None)]
struct Args {
    /// Reference scenario to plan
    #[arg(long, value_enum, default_value = "voice")]
    preset: Preset,

    /// Scenario TOML file; takes precedence over --preset
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Flow-monitor CSV export to replay
    #[arg(long)]
    flows: Option<PathBuf>,

    /// Override the number of cells
    #[arg(long)]
    cells: Option<u32>,

    /// Override the number of terminals
    #[arg(long)]
    terminals: Option<u32>,

    /// Override the simulation end time, in seconds
    #[arg(long)]
    sim_time: Option<f64>,

    /// Directory for flow_kpis.csv, network_summary.csv and report.db
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Write the derived plan as JSON
    #[arg(long)]
    plan_json: Option<PathBuf>,
}

// ── Observer ──────────────────────────────────────────────────────────────────

struct ProgressObserver;

impl RunObserver for ProgressObserver {
    fn on_planned(&mut self, plan: &ScenarioPlan) {
        println!(
            "Spectrum: {} band(s), {:.0} MHz total",
            plan.spectrum.bands.len(),
            plan.spectrum.total_bandwidth_hz / 1e6
        );
        for b in &plan.spectrum.bands {
            println!(
                "  {}: {:.2} GHz, {:.0} MHz, numerology {}, {:.3} dBm",
                b.bwp,
                b.center_freq_hz / 1e9,
                b.bandwidth_hz / 1e6,
                b.numerology,
                b.tx_power_dbm
            );
        }
        for t in &plan.bearers {
            println!(
                "Bearer {}: {} (QCI {}) ports {}-{} on {}",
                t.class,
                t.qos,
                t.qos.qci(),
                t.ports.start,
                t.ports.end,
                t.bwp
            );
        }
        println!(
            "Cells: {}  |  Terminals: {}  |  UDP interval: {:.6} s",
            plan.cells.len(),
            plan.attachment.len(),
            plan.traffic.interval_secs()
        );
    }

    fn on_run_complete(&mut self, records: &[RawFlowRecord]) {
        println!("Collected {} flow record(s)", records.len());
    }

    fn on_report(&mut self, report: &FlowReport) {
        for w in report.warnings() {
            println!("warning: {w}");
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,rr_scenario=info")),
        )
        .init();

    let args = Args::parse();

    // 1. Scenario.
    let mut config = match &args.scenario {
        Some(path) => load_scenario_toml(path)
            .with_context(|| format!("loading scenario {}", path.display()))?,
        None => match args.preset {
            Preset::Voice => ScenarioConfig::voice(),
            Preset::LowLatency => ScenarioConfig::low_latency(),
        },
    };
    if let Some(n) = args.cells {
        config.num_cells = n;
        // Preset positions no longer line up with the cell count.
        config.cell_positions.clear();
    }
    if let Some(n) = args.terminals {
        config.num_terminals = n;
    }
    if let Some(t) = args.sim_time {
        config.window.sim_time_secs = t;
    }

    // 2. Recorded flows.
    let simulator = match &args.flows {
        Some(path) => ReplaySimulator::from_csv(path)
            .with_context(|| format!("loading flows {}", path.display()))?,
        None => ReplaySimulator::from_records(load_records_reader(Cursor::new(SAMPLE_FLOWS_CSV))?),
    };

    info!(
        cells = config.num_cells,
        terminals = config.num_terminals,
        scheduler = %config.scheduler,
        "starting scenario"
    );

    // 3. Plan → replay → aggregate.
    let outcome = ScenarioRunner::new(config, simulator).run(&mut ProgressObserver)?;

    // 4. Report.
    {
        let mut text = TextWriter::new(std::io::stdout().lock());
        write_report(&mut text, &outcome.report)?;
    }

    if let Some(dir) = &args.out_dir {
        write_files(dir, &outcome.report)?;
        println!("\nReport files written to {}", dir.display());
    }

    if let Some(path) = &args.plan_json {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &outcome.plan)?;
        println!("Plan written to {}", path.display());
    }

    Ok(())
}

fn write_files(dir: &Path, report: &FlowReport) -> Result<()> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let mut csv = CsvWriter::new(dir)?;
    write_report(&mut csv, report)?;

    let mut db = SqliteWriter::new(dir)?;
    write_report(&mut db, report)?;
    Ok(())
}
