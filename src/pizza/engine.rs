//! Pizza Clicker simulation rules. Pure state transitions, fully testable.
//!
//! The engine holds no timers. Time only advances when the owner calls
//! [`SimulationEngine::tick`] (or [`SimulationEngine::tick_tier`] once per
//! tier); see [`super::scheduler`] for the wall-clock side.

use super::config::{EngineConfig, Multiplier, TierConfig};
use super::snapshot::{EngineSnapshot, GeneratorView};
use super::state::{Generator, SimulationState, Statistics};
use crate::error::{ConfigResult, EngineError, EngineResult};

/// Outcome of a successful bulk purchase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PurchaseReceipt {
    pub index: usize,
    pub quantity: u64,
    pub spent: u64,
    pub owned: u64,
    pub new_cost: u64,
    pub currency: u64,
}

pub struct SimulationEngine {
    state: SimulationState,
}

impl SimulationEngine {
    pub fn new(config: &EngineConfig) -> ConfigResult<Self> {
        config.validate()?;
        log::info!(
            "engine: {} tiers, click_yield={}, multiplier={}/{}",
            config.tiers.len(),
            config.click_yield,
            config.purchase_multiplier.numerator,
            config.purchase_multiplier.denominator
        );
        Ok(Self {
            state: SimulationState::from_config(config),
        })
    }

    /// Engine with the five-tier reference economy.
    pub fn reference() -> Self {
        Self {
            state: SimulationState::from_config(&EngineConfig::reference()),
        }
    }

    // ── Commands ────────────────────────────────────────────────

    /// Manual click. Returns the new balance.
    pub fn click(&mut self) -> u64 {
        let amount = self.state.click_yield;
        self.state.earn(amount);
        self.state.stats.total_clicks = self.state.stats.total_clicks.saturating_add(1);
        self.state.currency
    }

    /// Advance one tick: every tier yields `owned * base_yield`.
    /// Returns the new balance.
    pub fn tick(&mut self) -> u64 {
        let produced = self.state.yield_per_tick();
        self.state.earn(produced);
        self.state.stats.total_ticks = self.state.stats.total_ticks.saturating_add(1);
        log::trace!(
            "tick {}: +{} -> {}",
            self.state.stats.total_ticks,
            produced,
            self.state.currency
        );
        self.state.currency
    }

    /// Apply one tier's share of a tick. Calling this for every tier is
    /// equivalent to one [`tick`](Self::tick), except that the tick counter
    /// only advances on the last tier.
    pub fn tick_tier(&mut self, index: usize) -> EngineResult<u64> {
        let produced = self.generator_checked(index)?.yield_per_tick();
        self.state.earn(produced);
        if index + 1 == self.state.generators.len() {
            self.state.stats.total_ticks = self.state.stats.total_ticks.saturating_add(1);
        }
        Ok(self.state.currency)
    }

    /// Buy `quantity` units of tier `index` at the current unit price.
    ///
    /// All or nothing: on error, currency, counts and costs are untouched.
    /// The cost multiplier is applied exactly once, whatever the quantity.
    pub fn purchase(&mut self, index: usize, quantity: u64) -> EngineResult<PurchaseReceipt> {
        if quantity == 0 {
            return Err(EngineError::InvalidQuantity);
        }
        let available = self.state.currency;
        let total = self.generator_checked(index)?.total_cost(quantity);
        let spent = match total {
            Some(cost) if cost <= available => cost,
            needed => {
                log::debug!(
                    "purchase rejected: tier {} x{} needs {:?}, have {}",
                    index,
                    quantity,
                    needed,
                    available
                );
                return Err(EngineError::InsufficientFunds { needed, available });
            }
        };

        let multiplier = self.state.purchase_multiplier;
        self.state.currency -= spent;
        let generator = &mut self.state.generators[index];
        generator.record_purchase(quantity, multiplier);
        let receipt = PurchaseReceipt {
            index,
            quantity,
            spent,
            owned: generator.owned_count(),
            new_cost: generator.current_cost(),
            currency: self.state.currency,
        };

        let stats = &mut self.state.stats;
        stats.spent = stats.spent.saturating_add(spent);
        stats.purchases = stats.purchases.saturating_add(1);

        log::debug!(
            "purchased {} x{} for {} (owned {}, next cost {})",
            self.state.tiers[index].name,
            quantity,
            spent,
            receipt.owned,
            receipt.new_cost
        );
        Ok(receipt)
    }

    // ── Queries ─────────────────────────────────────────────────

    pub fn currency(&self) -> u64 {
        self.state.currency
    }

    pub fn click_yield(&self) -> u64 {
        self.state.click_yield
    }

    pub fn purchase_multiplier(&self) -> Multiplier {
        self.state.purchase_multiplier
    }

    pub fn tier_count(&self) -> usize {
        self.state.generators.len()
    }

    pub fn generators(&self) -> &[Generator] {
        &self.state.generators
    }

    pub fn generator(&self, index: usize) -> Option<&Generator> {
        self.state.generators.get(index)
    }

    pub fn tier(&self, index: usize) -> Option<&TierConfig> {
        self.state.tiers.get(index)
    }

    /// Total currency per tick from all generators.
    pub fn yield_per_tick(&self) -> u64 {
        self.state.yield_per_tick()
    }

    /// `cost * quantity` for a tier, `None` for an unknown tier or overflow.
    pub fn total_cost(&self, index: usize, quantity: u64) -> Option<u64> {
        self.generator(index)?.total_cost(quantity)
    }

    /// Whether [`purchase`](Self::purchase) would succeed right now.
    pub fn can_afford(&self, index: usize, quantity: u64) -> bool {
        quantity > 0
            && self
                .total_cost(index, quantity)
                .is_some_and(|cost| cost <= self.state.currency)
    }

    pub fn stats(&self) -> &Statistics {
        &self.state.stats
    }

    /// Read-only copy of everything a UI needs for one frame.
    pub fn snapshot(&self, quantity: u64) -> EngineSnapshot {
        let generators = self
            .state
            .generators
            .iter()
            .zip(&self.state.tiers)
            .enumerate()
            .map(|(index, (g, tier))| GeneratorView {
                index,
                name: tier.name.clone(),
                buy_label: tier.buy_label.clone(),
                owned_label: tier.owned_label.clone(),
                cost: g.current_cost(),
                owned: g.owned_count(),
                yield_per_tick: g.base_yield_per_tick(),
                total_cost: g.total_cost(quantity),
                affordable: self.can_afford(index, quantity),
            })
            .collect();

        EngineSnapshot {
            currency: self.state.currency,
            yield_per_tick: self.yield_per_tick(),
            quantity,
            generators,
        }
    }

    fn generator_checked(&self, index: usize) -> EngineResult<&Generator> {
        self.state
            .generators
            .get(index)
            .ok_or(EngineError::UnknownGenerator {
                index,
                tiers: self.state.generators.len(),
            })
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut SimulationState {
        &mut self.state
    }
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_tier_engine() -> SimulationEngine {
        let config = EngineConfig {
            click_yield: 5,
            purchase_multiplier: Multiplier::default(),
            tiers: vec![TierConfig::new("Granny", 10, 1)],
        };
        SimulationEngine::new(&config).unwrap()
    }

    #[test]
    fn click_adds_click_yield() {
        let mut engine = SimulationEngine::reference();
        assert_eq!(engine.click(), 5);
        assert_eq!(engine.click(), 10);
        assert_eq!(engine.stats().total_clicks, 2);
    }

    #[test]
    fn tick_without_generators_is_noop() {
        let mut engine = SimulationEngine::reference();
        engine.click();
        assert_eq!(engine.tick(), 5);
        assert_eq!(engine.stats().total_ticks, 1);
    }

    #[test]
    fn tick_sums_all_tiers() {
        let mut engine = SimulationEngine::reference();
        engine.state_mut().generators[0] = owned(10, 1, 3); // 3
        engine.state_mut().generators[2] = owned(1_000, 11, 2); // 22
        engine.state_mut().generators[4] = owned(100_000, 125, 1); // 125
        assert_eq!(engine.yield_per_tick(), 150);
        assert_eq!(engine.tick(), 150);
    }

    #[test]
    fn clicks_then_purchase_then_tick() {
        let mut engine = single_tier_engine();
        for _ in 0..4 {
            engine.click();
        }
        assert_eq!(engine.currency(), 20);

        let receipt = engine.purchase(0, 1).unwrap();
        assert_eq!(receipt.spent, 10);
        assert_eq!(receipt.currency, 10);
        assert_eq!(receipt.owned, 1);
        assert_eq!(receipt.new_cost, 12);

        assert_eq!(engine.tick(), 11);
    }

    #[test]
    fn purchase_insufficient_funds_leaves_state() {
        let mut engine = single_tier_engine();
        engine.state_mut().currency = 5;
        let err = engine.purchase(0, 1).unwrap_err();
        assert_eq!(
            err,
            EngineError::InsufficientFunds {
                needed: Some(10),
                available: 5
            }
        );
        assert_eq!(engine.currency(), 5);
        assert_eq!(engine.generators()[0].current_cost(), 10);
        assert_eq!(engine.generators()[0].owned_count(), 0);
    }

    #[test]
    fn bulk_purchase_applies_multiplier_once() {
        let mut engine = single_tier_engine();
        engine.state_mut().currency = 1_000;
        let receipt = engine.purchase(0, 100).unwrap();
        assert_eq!(receipt.spent, 1_000);
        assert_eq!(receipt.owned, 100);
        assert_eq!(receipt.new_cost, 12);
        assert_eq!(engine.currency(), 0);
    }

    #[test]
    fn purchase_exact_balance_succeeds() {
        let mut engine = single_tier_engine();
        engine.state_mut().currency = 50;
        assert!(engine.can_afford(0, 5));
        assert!(engine.purchase(0, 5).is_ok());
        assert_eq!(engine.currency(), 0);
    }

    #[test]
    fn purchase_unknown_tier() {
        let mut engine = SimulationEngine::reference();
        assert_eq!(
            engine.purchase(5, 1),
            Err(EngineError::UnknownGenerator { index: 5, tiers: 5 })
        );
    }

    #[test]
    fn purchase_zero_quantity() {
        let mut engine = SimulationEngine::reference();
        engine.state_mut().currency = 1_000;
        assert_eq!(engine.purchase(0, 0), Err(EngineError::InvalidQuantity));
        assert_eq!(engine.currency(), 1_000);
        assert!(!engine.can_afford(0, 0));
    }

    #[test]
    fn purchase_overflowing_cost_is_insufficient() {
        let mut engine = SimulationEngine::reference();
        engine.state_mut().currency = u64::MAX;
        let err = engine.purchase(4, u64::MAX).unwrap_err();
        assert_eq!(
            err,
            EngineError::InsufficientFunds {
                needed: None,
                available: u64::MAX
            }
        );
        assert_eq!(engine.currency(), u64::MAX);
    }

    #[test]
    fn repeated_purchases_compound_per_call() {
        let mut engine = single_tier_engine();
        engine.state_mut().currency = 10_000;
        let costs: Vec<u64> = (0..5)
            .map(|_| engine.purchase(0, 1).unwrap().new_cost)
            .collect();
        // 10 -> 12 -> 14 -> 16 -> 19 -> 22
        assert_eq!(costs, vec![12, 14, 16, 19, 22]);
    }

    #[test]
    fn tick_tier_across_all_tiers_equals_tick() {
        let mut a = SimulationEngine::reference();
        let mut b = SimulationEngine::reference();
        for engine in [&mut a, &mut b] {
            engine.state_mut().generators[1] = owned(100, 5, 4);
            engine.state_mut().generators[3] = owned(10_000, 12, 2);
        }
        a.tick();
        for i in 0..b.tier_count() {
            b.tick_tier(i).unwrap();
        }
        assert_eq!(a.currency(), b.currency());
        assert_eq!(a.stats().total_ticks, b.stats().total_ticks);
    }

    #[test]
    fn tick_tier_unknown_index() {
        let mut engine = SimulationEngine::reference();
        assert!(matches!(
            engine.tick_tier(9),
            Err(EngineError::UnknownGenerator { .. })
        ));
    }

    #[test]
    fn stat_counters_saturate() {
        let mut engine = single_tier_engine();
        engine.state_mut().currency = 100;
        engine.state_mut().stats.total_clicks = u64::MAX;
        engine.state_mut().stats.total_ticks = u64::MAX;
        engine.state_mut().stats.purchases = u64::MAX;
        engine.click();
        engine.tick();
        engine.tick_tier(0).unwrap();
        engine.purchase(0, 1).unwrap();
        assert_eq!(engine.stats().total_clicks, u64::MAX);
        assert_eq!(engine.stats().total_ticks, u64::MAX);
        assert_eq!(engine.stats().purchases, u64::MAX);
    }

    #[test]
    fn stats_track_spending() {
        let mut engine = single_tier_engine();
        engine.state_mut().currency = 100;
        engine.purchase(0, 2).unwrap();
        engine.purchase(0, 1).unwrap();
        assert_eq!(engine.stats().spent, 20 + 12);
        assert_eq!(engine.stats().purchases, 2);
    }

    #[test]
    fn snapshot_reports_affordability() {
        let mut engine = SimulationEngine::reference();
        engine.state_mut().currency = 150;
        let snap = engine.snapshot(10);
        assert_eq!(snap.currency, 150);
        assert_eq!(snap.quantity, 10);
        assert!(snap.generators[0].affordable); // 10 * 10
        assert!(!snap.generators[1].affordable); // 100 * 10
        assert_eq!(snap.generators[1].total_cost, Some(1_000));
        assert_eq!(snap.generators[0].name, "Granny");
    }

    #[test]
    fn new_rejects_invalid_config() {
        let mut config = EngineConfig::reference();
        config.click_yield = 0;
        assert!(SimulationEngine::new(&config).is_err());
    }

    fn owned(cost: u64, base_yield: u64, count: u64) -> Generator {
        let mut g = Generator::new(cost, base_yield);
        g.record_purchase(count, Multiplier::new(1, 1));
        g
    }
}
