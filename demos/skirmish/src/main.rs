//! skirmish: two waves of units crossing a river map.
//!
//! Spawns a west-side army on the synthetic 64×64 map in `map.rs`, orders
//! every unit to the east edge, then back again once it arrives.  Scheduler
//! statistics are logged every `STATS_INTERVAL_TICKS`.
//!
//! ```text
//! skirmish [config.json]
//! RUST_LOG=debug skirmish
//! ```
//!
//! The optional argument is a JSON `SchedulerConfig`; missing fields take
//! their defaults.  The grid size in the file is ignored: the map is fixed.

mod map;

use std::fs;
use std::time::Instant;

use anyhow::{Context, Result};
use log::{info, warn};

use nav_agent::{AgentSpec, AgentStore, AgentWorld};
use nav_core::{AgentId, WorldPoint};
use nav_grid::{GridConfig, NavigationGrid};
use nav_search::SearchError;
use nav_sim::{SchedulerBuilder, SchedulerConfig, SchedulerObserver};

use map::{CELL, COLS, ROWS};

// ── Constants ─────────────────────────────────────────────────────────────────

const UNIT_COUNT:           usize = 60;
const UNIT_RADIUS:          f32   = 10.0;
const UNIT_SPEED:           f32   = 96.0;
const TICK_SECS:            f32   = 1.0 / 30.0;
const TOTAL_TICKS:          u64   = 3_000;
const STATS_INTERVAL_TICKS: u64   = 300;

// ── Observer ──────────────────────────────────────────────────────────────────

/// Counts outcomes and remembers who arrived this tick so `main` can send
/// them back the other way.
#[derive(Default)]
struct Tally {
    assigned: u64,
    failed:   u64,
    arrived:  Vec<AgentId>,
    total_arrivals: u64,
}

impl SchedulerObserver for Tally {
    fn on_path_assigned(&mut self, _agent: AgentId, _waypoints: &[WorldPoint]) {
        self.assigned += 1;
    }

    fn on_path_failed(&mut self, agent: AgentId, error: &SearchError) {
        self.failed += 1;
        warn!("{agent} has no route: {error}");
    }

    fn on_agent_arrived(&mut self, agent: AgentId) {
        self.arrived.push(agent);
        self.total_arrivals += 1;
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn load_config() -> Result<SchedulerConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(SchedulerConfig::default());
    };
    let text = fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let config = serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?;
    info!("loaded scheduler config from {path}");
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 1. Config and terrain.
    let mut config = load_config()?;
    config.grid = GridConfig::new(COLS, ROWS, CELL);
    let mut grid = NavigationGrid::new(&config.grid)?;
    map::add_terrain(&mut grid);

    let mut scheduler = SchedulerBuilder::new(config)
        .grid(grid)
        .viewport(map::cell_center(COLS as i32 / 2, ROWS as i32 / 2))
        .build()?;

    // 2. Buildings, then units.
    let mut agents = AgentStore::with_capacity(UNIT_COUNT + 64);
    for (center, w, h) in map::buildings() {
        let id = agents.spawn(AgentSpec::building(center, w, h));
        scheduler.on_agent_added(&agents, id)?;
    }
    let mut units = Vec::with_capacity(UNIT_COUNT);
    for (i, pos) in map::west_spawns(UNIT_COUNT).into_iter().enumerate() {
        let spec = AgentSpec::unit(pos, UNIT_RADIUS)
            .speed(UNIT_SPEED)
            .selected(i % 10 == 0)
            .combat(i % 4 == 0);
        let id = agents.spawn(spec);
        scheduler.on_agent_added(&agents, id)?;
        units.push((id, pos));
    }
    info!(
        "map {COLS}×{ROWS}: {} blocked cells ({:.1}%), {} units",
        scheduler.grid().blocked_cell_count(),
        scheduler.grid().occupancy() * 100.0,
        units.len()
    );

    // 3. Opening orders.
    let mut tally = Tally::default();
    for (i, &(id, _)) in units.iter().enumerate() {
        scheduler.command_move(&mut agents, id, map::east_rally(i), &mut tally)?;
    }

    // 4. Tick loop.
    let started = Instant::now();
    let mut heading_east = vec![true; units.len()];
    for _ in 0..TOTAL_TICKS {
        scheduler.update(&mut agents, TICK_SECS, &mut tally);

        for agent in std::mem::take(&mut tally.arrived) {
            let Some(i) = units.iter().position(|&(id, _)| id == agent) else { continue };
            heading_east[i] = !heading_east[i];
            let target = if heading_east[i] { map::east_rally(i) } else { units[i].1 };
            scheduler.command_move(&mut agents, agent, target, &mut tally)?;
        }

        let tick = scheduler.current_tick();
        if tick.0 % STATS_INTERVAL_TICKS == 0 {
            info!("{}", scheduler.stats());
        }
    }

    // 5. Summary.
    let stats = scheduler.stats();
    let moving = units
        .iter()
        .filter(|&&(id, _)| agents.movement(id).is_some_and(|m| m.moving))
        .count();
    info!("{stats}");
    info!(
        "{} ticks in {:.2?}: {} paths assigned, {} failed, {} arrivals, {} recalculations, \
         cache hit rate {:.1}%, {moving} units still moving",
        TOTAL_TICKS,
        started.elapsed(),
        tally.assigned,
        tally.failed,
        tally.total_arrivals,
        stats.recalculations,
        scheduler.cache().hit_rate() * 100.0,
    );
    Ok(())
}
