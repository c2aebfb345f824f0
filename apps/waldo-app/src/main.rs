//! waldo two-link arm simulator CLI.
//!
//! Provides two modes of operation:
//! - `headless`: Run a scripted click session and print the angle readout
//! - `info`: Print workspace crate versions and configuration

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use waldo_core::prelude::*;
use waldo_sim::prelude::*;

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

/// waldo two-link arm simulator.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scripted click session and print the angle readout.
    Headless {
        /// Screen-space click positions as `x,y` pairs (may repeat).
        #[arg(short, long = "click", value_name = "X,Y", value_parser = parse_click)]
        clicks: Vec<(f64, f64)>,

        /// Ticks to keep running after the last click.
        #[arg(short, long, default_value_t = 240)]
        ticks: u64,

        /// Ticks between consecutive clicks.
        #[arg(short, long, default_value_t = 60)]
        gap: u64,

        /// Pace ticks at the configured rate instead of running lockstep.
        #[arg(long)]
        paced: bool,

        /// TOML configuration file.
        #[arg(short = 'f', long)]
        config: Option<PathBuf>,
    },

    /// Print crate information.
    Info,
}

/// Parse a `x,y` pair of screen coordinates.
fn parse_click(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let x: f64 = x.trim().parse().map_err(|_| format!("bad x in `{s}`"))?;
    let y: f64 = y.trim().parse().map_err(|_| format!("bad y in `{s}`"))?;
    Ok((x, y))
}

// ---------------------------------------------------------------------------
// ConsoleRenderer
// ---------------------------------------------------------------------------

/// Renderer that prints the angle readout line, throttled to every
/// `interval` frames plus every out-of-reach flash frame.
struct ConsoleRenderer {
    interval: u64,
    frame: u64,
}

impl ConsoleRenderer {
    const fn new(interval: u64) -> Self {
        Self { interval, frame: 0 }
    }
}

impl Renderer for ConsoleRenderer {
    fn render_frame(&mut self, angles: JointAngles, tint: Tint, _workspace_radius: f64) {
        self.frame += 1;
        let alert = tint == Tint::ReachAlert;
        if alert || self.frame % self.interval == 0 {
            println!(
                "[{:>5}] {}{}",
                self.frame,
                angles,
                if alert { "  (out of reach)" } else { "" }
            );
        }
    }

    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "ConsoleRenderer"
    }
}

// ---------------------------------------------------------------------------
// Mode implementations
// ---------------------------------------------------------------------------

#[allow(clippy::cast_possible_truncation)]
fn run_headless(
    clicks: &[(f64, f64)],
    ticks: u64,
    gap: u64,
    paced: bool,
    config_path: Option<&PathBuf>,
) {
    let config = match config_path {
        Some(path) => SimConfig::from_file(path).expect("failed to load configuration"),
        None => SimConfig::default(),
    };

    let mut script = ScriptedInput::new();
    for &(x, y) in clicks {
        script = script.click(x, y).idle(gap as usize);
    }
    script = script.idle(ticks as usize).quit();
    let max_ticks = script.remaining() as u64 + 10;

    let mut sim = SimBuilder::new()
        .with_config(config)
        .with_input(script)
        .with_renderer(ConsoleRenderer::new(30))
        .build()
        .expect("failed to build simulator");

    let ran = if paced { sim.run_realtime() } else { sim.run(max_ticks) };

    let rig = *sim.app.world().resource::<ArmRig>();
    let wrist = rig.arm.forward(sim.pose());
    let stats = sim.stats();

    println!();
    println!("final pose: {}", sim.pose());
    println!("wrist: ({:.3}, {:.3})  settled: {}", wrist.x, wrist.y, sim.is_settled());
    println!(
        "ran: ticks={ran}, sim_time={}, clicks solved={}, out of reach={}",
        sim.sim_time(),
        stats.clicks_solved,
        stats.clicks_unreachable
    );
}

fn run_info() {
    println!("waldo v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("crates:");
    println!("  waldo-core    {}", env!("CARGO_PKG_VERSION"));
    println!("  waldo-ik      {}", env!("CARGO_PKG_VERSION"));
    println!("  waldo-motion  {}", env!("CARGO_PKG_VERSION"));
    println!("  waldo-sim     {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("edition: 2024");
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Headless {
            clicks,
            ticks,
            gap,
            paced,
            config,
        }) => run_headless(&clicks, ticks, gap, paced, config.as_ref()),
        Some(Commands::Info) => run_info(),
        None => {
            // Default: one reachable click, lockstep.
            run_headless(&[(525.0, 375.0)], 240, 60, false, None);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
