//! Error types for the simulation engine and its configuration.

use thiserror::Error;

/// Why a command was rejected. State is never modified when one of these
/// is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Bulk cost exceeds the current balance (or overflows `u64`).
    #[error("insufficient funds: need {needed:?}, have {available}")]
    InsufficientFunds {
        /// `None` when `cost * quantity` does not fit in a `u64`.
        needed: Option<u64>,
        available: u64,
    },

    #[error("generator {index} does not exist ({tiers} tiers)")]
    UnknownGenerator { index: usize, tiers: usize },

    #[error("purchase quantity must be at least 1")]
    InvalidQuantity,
}

/// Configuration rejected before an engine is built.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("at least one generator tier is required")]
    NoTiers,

    #[error("click yield must be positive")]
    ZeroClickYield,

    #[error("tier {index} ('{name}') has a starting cost of zero")]
    ZeroStartingCost { index: usize, name: String },

    #[error("purchase multiplier {numerator}/{denominator} is invalid (must be >= 1)")]
    InvalidMultiplier { numerator: u64, denominator: u64 },

    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;
pub type ConfigResult<T> = Result<T, ConfigError>;
