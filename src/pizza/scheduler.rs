//! Drives the engine from wall-clock time.
//!
//! The scheduler owns every clock; the engine owns none. In
//! [`TickMode::Unified`] a single master clock calls
//! [`SimulationEngine::tick`]. In [`TickMode::PerTier`] each generator tier
//! gets its own clock handle, all started together, and each handle's ticks
//! call [`SimulationEngine::tick_tier`]. Both modes produce the same balance
//! for the same timestamps.

use super::engine::SimulationEngine;
use crate::error::{EngineError, EngineResult};
use crate::time::GameTime;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickMode {
    Unified,
    PerTier,
}

#[derive(Clone, Debug)]
enum Clocks {
    Unified(GameTime),
    PerTier(Vec<GameTime>),
}

#[derive(Clone, Debug)]
pub struct Scheduler {
    clocks: Clocks,
}

impl Scheduler {
    /// One master clock at `ticks_per_sec`.
    pub fn unified(ticks_per_sec: u32) -> Self {
        Self {
            clocks: Clocks::Unified(GameTime::new(ticks_per_sec)),
        }
    }

    /// One clock per tier, all at `ticks_per_sec`.
    pub fn per_tier(tiers: usize, ticks_per_sec: u32) -> Self {
        Self {
            clocks: Clocks::PerTier(vec![GameTime::new(ticks_per_sec); tiers]),
        }
    }

    pub fn for_engine(engine: &SimulationEngine, mode: TickMode, ticks_per_sec: u32) -> Self {
        match mode {
            TickMode::Unified => Self::unified(ticks_per_sec),
            TickMode::PerTier => Self::per_tier(engine.tier_count(), ticks_per_sec),
        }
    }

    /// Cap how many ticks a single frame may apply, on every clock.
    pub fn with_max_catch_up_ticks(mut self, ticks: u32) -> Self {
        self.clocks = match self.clocks {
            Clocks::Unified(clock) => Clocks::Unified(clock.with_max_catch_up_ticks(ticks)),
            Clocks::PerTier(clocks) => Clocks::PerTier(
                clocks
                    .into_iter()
                    .map(|c| c.with_max_catch_up_ticks(ticks))
                    .collect(),
            ),
        };
        self
    }

    pub fn mode(&self) -> TickMode {
        match self.clocks {
            Clocks::Unified(_) => TickMode::Unified,
            Clocks::PerTier(_) => TickMode::PerTier,
        }
    }

    /// Ticks elapsed on the master clock (or on tier 0's handle).
    pub fn total_ticks(&self) -> u64 {
        match &self.clocks {
            Clocks::Unified(clock) => clock.total_ticks,
            Clocks::PerTier(clocks) => clocks.first().map_or(0, |c| c.total_ticks),
        }
    }

    /// Feed a timestamp and apply every tick that has come due.
    /// Returns the number of ticks applied (per tier, in per-tier mode).
    ///
    /// A per-tier scheduler with more clocks than the engine has tiers is
    /// rejected before any clock or balance moves.
    pub fn advance(&mut self, engine: &mut SimulationEngine, now_ms: f64) -> EngineResult<u32> {
        match &mut self.clocks {
            Clocks::Unified(clock) => {
                let ticks = clock.update(now_ms);
                for _ in 0..ticks {
                    engine.tick();
                }
                Ok(ticks)
            }
            Clocks::PerTier(clocks) => {
                let tiers = engine.tier_count();
                if clocks.len() > tiers {
                    return Err(EngineError::UnknownGenerator {
                        index: tiers,
                        tiers,
                    });
                }
                let mut applied = 0u32;
                for (index, clock) in clocks.iter_mut().enumerate() {
                    let ticks = clock.update(now_ms);
                    for _ in 0..ticks {
                        engine.tick_tier(index)?;
                    }
                    applied = applied.max(ticks);
                }
                Ok(applied)
            }
        }
    }
}

impl Default for Scheduler {
    /// Unified, one tick per second.
    fn default() -> Self {
        Self::unified(1)
    }
}
