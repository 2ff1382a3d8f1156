//! Pizza Clicker simulation state definitions.

use super::config::{EngineConfig, Multiplier, TierConfig};

/// A single generator tier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generator {
    base_yield_per_tick: u64,
    current_cost: u64,
    owned_count: u64,
}

impl Generator {
    pub fn new(starting_cost: u64, base_yield_per_tick: u64) -> Self {
        Self {
            base_yield_per_tick,
            current_cost: starting_cost,
            owned_count: 0,
        }
    }

    pub fn base_yield_per_tick(&self) -> u64 {
        self.base_yield_per_tick
    }

    /// Price of one unit right now.
    pub fn current_cost(&self) -> u64 {
        self.current_cost
    }

    pub fn owned_count(&self) -> u64 {
        self.owned_count
    }

    /// Currency this tier yields per tick.
    pub fn yield_per_tick(&self) -> u64 {
        self.owned_count.saturating_mul(self.base_yield_per_tick)
    }

    /// Cost of `quantity` units at the current price, `None` on overflow.
    pub fn total_cost(&self, quantity: u64) -> Option<u64> {
        self.current_cost.checked_mul(quantity)
    }

    /// Applies a completed purchase: one multiplier step, whatever the quantity.
    pub(crate) fn record_purchase(&mut self, quantity: u64, multiplier: Multiplier) {
        self.owned_count = self.owned_count.saturating_add(quantity);
        self.current_cost = multiplier.apply(self.current_cost);
    }
}

/// Lifetime counters. Never read by the rules.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Statistics {
    pub total_clicks: u64,
    pub total_ticks: u64,
    pub earned_all_time: u64,
    pub spent: u64,
    pub purchases: u64,
}

/// Full state owned by a [`super::engine::SimulationEngine`].
#[derive(Clone, Debug)]
pub struct SimulationState {
    pub(crate) currency: u64,
    pub(crate) generators: Vec<Generator>,
    /// Display metadata, index-aligned with `generators`.
    pub(crate) tiers: Vec<TierConfig>,
    pub(crate) click_yield: u64,
    pub(crate) purchase_multiplier: Multiplier,
    pub(crate) stats: Statistics,
}

impl SimulationState {
    /// Builds a fresh state. The config must already be validated.
    pub(crate) fn from_config(config: &EngineConfig) -> Self {
        let generators = config
            .tiers
            .iter()
            .map(|t| Generator::new(t.starting_cost, t.yield_per_tick))
            .collect();

        Self {
            currency: 0,
            generators,
            tiers: config.tiers.clone(),
            click_yield: config.click_yield,
            purchase_multiplier: config.purchase_multiplier,
            stats: Statistics::default(),
        }
    }

    /// Total currency per tick from all generators.
    pub fn yield_per_tick(&self) -> u64 {
        self.generators
            .iter()
            .fold(0u64, |acc, g| acc.saturating_add(g.yield_per_tick()))
    }

    pub(crate) fn earn(&mut self, amount: u64) {
        self.currency = self.currency.saturating_add(amount);
        self.stats.earned_all_time = self.stats.earned_all_time.saturating_add(amount);
    }
}
