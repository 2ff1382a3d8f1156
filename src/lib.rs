//! Pizza Clicker: the incremental-currency simulation behind a clicker game.
//!
//! [`SimulationEngine`] owns the balance and the generator tiers and exposes
//! three commands: click, bulk purchase and tick. Timing lives outside it in
//! [`Scheduler`], and [`PizzaGame`] wires both to normalized input events for
//! a front-end. Rendering is left to the host.

pub mod error;
pub mod format;
pub mod input;
pub mod pizza;
pub mod time;

pub use error::{ConfigError, EngineError};
pub use format::format_count;
pub use input::InputEvent;
pub use pizza::config::{EngineConfig, Multiplier, TierConfig};
pub use pizza::engine::{PurchaseReceipt, SimulationEngine};
pub use pizza::scheduler::{Scheduler, TickMode};
pub use pizza::snapshot::{EngineSnapshot, GeneratorView};
pub use pizza::{PizzaGame, QUANTITY_CHOICES};
