//! Read-only views handed to the presentation layer.
//!
//! Snapshots are copies: holding one never blocks a command, and nothing a
//! renderer does to it reaches the engine. They serialize to JSON for a UI
//! bridge but are not a save format.

use serde::Serialize;

use crate::format::format_count;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GeneratorView {
    pub index: usize,
    pub name: String,
    pub buy_label: String,
    pub owned_label: String,
    /// Unit price.
    pub cost: u64,
    pub owned: u64,
    pub yield_per_tick: u64,
    /// `cost * quantity` for the snapshot's quantity, `None` on overflow.
    pub total_cost: Option<u64>,
    pub affordable: bool,
}

impl GeneratorView {
    /// Purchase button text: the real label once affordable, masked otherwise.
    pub fn button_text(&self) -> String {
        if self.affordable {
            format!("{} {}", self.buy_label, self.cost)
        } else {
            format!("??? {}", self.cost)
        }
    }

    /// Owned-count line: "Granny's 3", or "??" before the first purchase.
    pub fn owned_text(&self) -> String {
        if self.owned > 0 {
            format!("{} {}", self.owned_label, self.owned)
        } else {
            "??".to_string()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EngineSnapshot {
    pub currency: u64,
    pub yield_per_tick: u64,
    /// Bulk quantity the affordability flags were computed for.
    pub quantity: u64,
    pub generators: Vec<GeneratorView>,
}

impl EngineSnapshot {
    pub fn currency_text(&self) -> String {
        format_count(self.currency)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
