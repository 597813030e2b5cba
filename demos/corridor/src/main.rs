//! corridor — smallest demo for the rust_ped pedestrian framework.
//!
//! 24 agents walk a 20 m × 4 m corridor from left to right and leave through
//! an exit strip at the far end.  Trajectories and per-step summaries are
//! written as CSV to `./output/`.
//!
//! Run with:
//!   cargo run -p corridor --release

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use ped_agent::{AgentSpec, Behaviour, Ellipse, SimpleJourney};
use ped_core::{AgentId, AreaId, Point, ProfileId, SimConfig};
use ped_geometry::{Area, AreaKind, AreaMap, GeometryBuilder};
use ped_model::{GcfmModel, ParameterProfile, ProfileRegistry};
use ped_output::{CsvWriter, TrajectoryObserver};
use ped_sim::{SimObserver, SimulationBuilder};
use ped_spatial::DirectRoutingEngine;

// ── Constants ─────────────────────────────────────────────────────────────────

const AGENT_COUNT: usize = 24;
const SEED: u64 = 42;
const DT_SECS: f64 = 0.05;
const TOTAL_STEPS: u64 = 2_000; // 100 s of simulated time
const SNAPSHOT_INTERVAL_STEPS: u64 = 10; // one frame every 0.5 s

const CORRIDOR_LENGTH: f64 = 20.0;
const CORRIDOR_WIDTH: f64 = 4.0;

const EXIT_AREA: AreaId = AreaId(0);

// ── Scenario construction ─────────────────────────────────────────────────────

fn build_geometry() -> ped_geometry::Geometry {
    let mut builder = GeometryBuilder::new();
    builder.add_wall(Point::ZERO, Point::new(CORRIDOR_LENGTH, 0.0));
    builder.add_wall(
        Point::new(0.0, CORRIDOR_WIDTH),
        Point::new(CORRIDOR_LENGTH, CORRIDOR_WIDTH),
    );
    builder.build()
}

fn build_areas() -> Result<AreaMap> {
    let mut areas = AreaMap::new();
    areas.insert(
        EXIT_AREA,
        Area::rectangle(
            EXIT_AREA,
            AreaKind::Exit,
            Point::new(CORRIDOR_LENGTH - 1.0, 0.0),
            Point::new(CORRIDOR_LENGTH, CORRIDOR_WIDTH),
        )?,
    );
    Ok(areas)
}

/// Brisk commuters and a slower, more cautious population.
fn build_profiles() -> (ProfileRegistry, [ProfileId; 2]) {
    let mut registry = ProfileRegistry::new();
    let brisk = registry.add(ParameterProfile::default());
    let cautious = registry.add(ParameterProfile {
        tau: 0.8,
        ped_range: 0.4,
        ..Default::default()
    });
    (registry, [brisk, cautious])
}

/// Agents start in a 6 × 4 block at the left end, all heading for the middle
/// of the exit strip.  Alternating rows get the cautious profile and a lower
/// desired speed.
fn agent_specs(profiles: &[ProfileId; 2]) -> Vec<AgentSpec> {
    let goal = Point::new(CORRIDOR_LENGTH - 0.5, CORRIDOR_WIDTH / 2.0);
    (0..AGENT_COUNT)
        .map(|i| {
            let col = (i % 6) as f64;
            let row = i / 6;
            let cautious = row % 2 == 1;
            let mut journey = SimpleJourney::new();
            journey.add_waypoint(goal, 0.5);
            AgentSpec {
                pos: Point::new(1.0 + col * 0.6, 0.8 + row as f64 * 0.8),
                v0: if cautious { 1.0 } else { 1.2 },
                ellipse: Ellipse::new(0.2, 0.15).expect("positive semi-axes"),
                behaviour: Behaviour::from(journey),
                profile: profiles[cautious as usize],
            }
        })
        .collect()
}

// ── Progress reporting ────────────────────────────────────────────────────────

/// Forwards everything to the CSV observer and prints evacuation progress.
struct ProgressObserver<O: SimObserver> {
    inner: O,
    total_exited: usize,
}

impl<O: SimObserver> SimObserver for ProgressObserver<O> {
    fn on_step_start(&mut self, step: u64) {
        self.inner.on_step_start(step);
    }

    fn on_agents_exited(&mut self, step: u64, exited: &[AgentId]) {
        self.total_exited += exited.len();
        println!(
            "  step {step:4}: {} agent(s) exited ({} total)",
            exited.len(),
            self.total_exited
        );
        self.inner.on_agents_exited(step, exited);
    }

    fn on_step_end(&mut self, step: u64, agent_count: usize) {
        self.inner.on_step_end(step, agent_count);
    }

    fn on_snapshot(&mut self, clock: &ped_core::SimClock, agents: &ped_agent::AgentArena) {
        self.inner.on_snapshot(clock, agents);
    }

    fn on_sim_end(&mut self, clock: &ped_core::SimClock) {
        self.inner.on_sim_end(clock);
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let config = SimConfig {
        dt_secs: DT_SECS,
        total_steps: TOTAL_STEPS,
        seed: SEED,
        snapshot_interval_steps: SNAPSHOT_INTERVAL_STEPS,
        ..Default::default()
    };

    let (profiles, profile_ids) = build_profiles();
    let mut sim = SimulationBuilder::new(config.clone(), GcfmModel::new(), DirectRoutingEngine)
        .areas(build_areas()?)
        .geometry(build_geometry())
        .profiles(profiles)
        .build()?;
    sim.add_agents(agent_specs(&profile_ids))?;

    let out_dir = Path::new("output");
    fs::create_dir_all(out_dir)?;
    let writer = CsvWriter::new(out_dir)?;
    let mut observer = ProgressObserver {
        inner: TrajectoryObserver::new(writer, config.dt_secs),
        total_exited: 0,
    };

    println!(
        "corridor: {AGENT_COUNT} agents, {TOTAL_STEPS} steps of {DT_SECS} s ({:.0} s simulated)",
        TOTAL_STEPS as f64 * DT_SECS
    );
    let start = Instant::now();
    sim.run(&mut observer)?;
    let wall = start.elapsed();

    if let Some(e) = observer.inner.take_error() {
        eprintln!("output error: {e}");
    }

    println!(
        "done in {:.2} s wall — {} exited, {} still walking — output in {}",
        wall.as_secs_f64(),
        observer.total_exited,
        sim.agent_count(),
        out_dir.display()
    );
    Ok(())
}
