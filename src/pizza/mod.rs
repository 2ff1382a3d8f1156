//! Pizza Clicker: tap for pizzas, hire generators that bake on their own.

pub mod actions;
pub mod config;
pub mod engine;
pub mod scheduler;
pub mod snapshot;
pub mod state;

#[cfg(test)]
mod simulator;

use crate::error::{ConfigResult, EngineError, EngineResult};
use crate::format::format_count;
use crate::input::InputEvent;

use config::EngineConfig;
use engine::SimulationEngine;
use scheduler::{Scheduler, TickMode};
use snapshot::EngineSnapshot;

/// Bulk quantities offered by the quantity picker.
pub const QUANTITY_CHOICES: [u64; 5] = [1, 5, 10, 50, 100];

const MAX_LOG_ENTRIES: usize = 50;

/// Log entry for the session's feedback line.
#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub text: String,
    pub is_important: bool,
}

/// One play session: the engine, the clocks that drive it, and the bits of
/// UI state (selected quantity, feedback log) that never affect the rules.
pub struct PizzaGame {
    engine: SimulationEngine,
    scheduler: Scheduler,
    quantity_index: usize,
    pub log: Vec<LogEntry>,
}

impl PizzaGame {
    pub fn new() -> Self {
        Self::with_engine(SimulationEngine::reference(), TickMode::Unified)
    }

    pub fn from_config(config: &EngineConfig, mode: TickMode) -> ConfigResult<Self> {
        Ok(Self::with_engine(SimulationEngine::new(config)?, mode))
    }

    fn with_engine(engine: SimulationEngine, mode: TickMode) -> Self {
        let scheduler = Scheduler::for_engine(&engine, mode, 1);
        Self {
            engine,
            scheduler,
            quantity_index: 0,
            log: vec![LogEntry {
                text: "Welcome to Pizza Clicker!".into(),
                is_important: true,
            }],
        }
    }

    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }

    pub fn selected_quantity(&self) -> u64 {
        QUANTITY_CHOICES[self.quantity_index]
    }

    /// Select a quantity by its index in [`QUANTITY_CHOICES`].
    /// Returns false for an out-of-range index.
    pub fn select_quantity(&mut self, choice: usize) -> bool {
        if choice < QUANTITY_CHOICES.len() {
            self.quantity_index = choice;
            true
        } else {
            false
        }
    }

    pub fn cycle_quantity(&mut self) {
        self.quantity_index = (self.quantity_index + 1) % QUANTITY_CHOICES.len();
    }

    /// Handle an input event. Returns true if the event was consumed.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key(c) => self.handle_key(*c),
            InputEvent::Click(id) => self.handle_click(*id),
        }
    }

    fn handle_key(&mut self, key: char) -> bool {
        match key {
            'c' | ' ' => {
                self.engine.click();
                true
            }
            'q' => {
                self.cycle_quantity();
                true
            }
            '1'..='9' => {
                let tier = (key as u8 - b'1') as usize;
                if tier >= self.engine.tier_count() {
                    return false;
                }
                let _ = self.buy(tier);
                true
            }
            _ => false,
        }
    }

    fn handle_click(&mut self, id: u16) -> bool {
        if id == actions::CLICK_PIZZA {
            self.engine.click();
            return true;
        }
        if let Some(offset) = id.checked_sub(actions::SELECT_QUANTITY_BASE) {
            return self.select_quantity(offset as usize);
        }
        if let Some(offset) = id.checked_sub(actions::BUY_GENERATOR_BASE) {
            let tier = offset as usize;
            if tier < self.engine.tier_count() {
                let _ = self.buy(tier);
                return true;
            }
        }
        false
    }

    /// Buy the selected quantity of `tier`, logging the outcome.
    pub fn buy(&mut self, tier: usize) -> EngineResult<()> {
        let quantity = self.selected_quantity();
        match self.engine.purchase(tier, quantity) {
            Ok(receipt) => {
                let name = self
                    .engine
                    .tier(tier)
                    .map(|t| t.name.clone())
                    .unwrap_or_default();
                self.add_log(
                    &format!(
                        "{} x{} purchased! ({} owned, next {})",
                        name,
                        quantity,
                        receipt.owned,
                        format_count(receipt.new_cost)
                    ),
                    false,
                );
                Ok(())
            }
            Err(e @ EngineError::InsufficientFunds { .. }) => {
                self.add_log("Not enough pizzas.", false);
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    /// Feed a wall-clock timestamp; applies due ticks and returns how many.
    pub fn update(&mut self, now_ms: f64) -> EngineResult<u32> {
        self.scheduler.advance(&mut self.engine, now_ms)
    }

    /// Read-only view for rendering, at the selected quantity.
    pub fn snapshot(&self) -> EngineSnapshot {
        self.engine.snapshot(self.selected_quantity())
    }

    pub fn add_log(&mut self, text: &str, is_important: bool) {
        self.log.push(LogEntry {
            text: text.to_string(),
            is_important,
        });
        if self.log.len() > MAX_LOG_ENTRIES {
            self.log.remove(0);
        }
    }
}

impl Default for PizzaGame {
    fn default() -> Self {
        Self::new()
    }
}
