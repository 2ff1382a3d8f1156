//! Engine configuration: generator tiers, click yield and cost growth.
//!
//! A config is plain data. It can be built in code via
//! [`EngineConfig::reference`] or parsed from JSON, and must pass
//! [`EngineConfig::validate`] before an engine accepts it.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Exact rational cost multiplier (`numerator / denominator`).
///
/// Kept as integers so `floor(cost * multiplier)` is reproducible on every
/// platform instead of depending on float rounding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Multiplier {
    pub numerator: u64,
    pub denominator: u64,
}

impl Multiplier {
    pub const fn new(numerator: u64, denominator: u64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// `floor(value * numerator / denominator)`, saturating at `u64::MAX`.
    pub fn apply(&self, value: u64) -> u64 {
        let scaled = value as u128 * self.numerator as u128 / self.denominator as u128;
        u64::try_from(scaled).unwrap_or(u64::MAX)
    }
}

impl Default for Multiplier {
    /// 1.2
    fn default() -> Self {
        Self::new(6, 5)
    }
}

/// One generator tier as configured at startup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TierConfig {
    pub name: String,
    /// Text on the purchase button, e.g. "Hire a Granny".
    #[serde(default)]
    pub buy_label: String,
    /// Text next to the owned count, e.g. "Granny's".
    #[serde(default)]
    pub owned_label: String,
    pub starting_cost: u64,
    pub yield_per_tick: u64,
}

impl TierConfig {
    pub fn new(name: &str, starting_cost: u64, yield_per_tick: u64) -> Self {
        Self {
            name: name.to_string(),
            buy_label: name.to_string(),
            owned_label: name.to_string(),
            starting_cost,
            yield_per_tick,
        }
    }

    pub fn with_labels(mut self, buy_label: &str, owned_label: &str) -> Self {
        self.buy_label = buy_label.to_string();
        self.owned_label = owned_label.to_string();
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub click_yield: u64,
    #[serde(default)]
    pub purchase_multiplier: Multiplier,
    pub tiers: Vec<TierConfig>,
}

impl EngineConfig {
    /// The five-tier Pizza Clicker economy.
    pub fn reference() -> Self {
        Self {
            click_yield: 5,
            purchase_multiplier: Multiplier::default(),
            tiers: vec![
                TierConfig::new("Granny", 10, 1).with_labels("Hire a Granny", "Granny's"),
                TierConfig::new("Italian Chef", 100, 5)
                    .with_labels("Hire a Italian Chef", "Cook's"),
                TierConfig::new("Pizza Farm", 1_000, 11)
                    .with_labels("Buy a Pizza Farm", "Farm's"),
                TierConfig::new("Pizza Factory", 10_000, 12)
                    .with_labels("Buy a Pizza Factory", "Factory's"),
                TierConfig::new("Pizza Lab", 100_000, 125)
                    .with_labels("Buy a Pizza Lab", "Pizza Laboratory"),
            ],
        }
    }

    /// Parse and validate a JSON config. Labels left out of a tier fall
    /// back to its name.
    pub fn from_json(text: &str) -> ConfigResult<Self> {
        let mut config: EngineConfig = serde_json::from_str(text)?;
        for tier in &mut config.tiers {
            if tier.buy_label.is_empty() {
                tier.buy_label = tier.name.clone();
            }
            if tier.owned_label.is_empty() {
                tier.owned_label = tier.name.clone();
            }
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.tiers.is_empty() {
            return Err(ConfigError::NoTiers);
        }
        if self.click_yield == 0 {
            return Err(ConfigError::ZeroClickYield);
        }
        let m = self.purchase_multiplier;
        if m.denominator == 0 || m.numerator < m.denominator {
            return Err(ConfigError::InvalidMultiplier {
                numerator: m.numerator,
                denominator: m.denominator,
            });
        }
        if let Some((index, tier)) = self
            .tiers
            .iter()
            .enumerate()
            .find(|(_, t)| t.starting_cost == 0)
        {
            return Err(ConfigError::ZeroStartingCost {
                index,
                name: tier.name.clone(),
            });
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::reference()
    }
}
