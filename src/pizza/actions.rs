//! Semantic action IDs for Pizza Clicker click targets.
//!
//! A front-end registers these against its on-screen regions and reports
//! them back through `InputEvent::Click`.

// ── Core actions ────────────────────────────────────────────────
pub const CLICK_PIZZA: u16 = 0;

// ── Generator purchase (base + tier index) ──────────────────────
pub const BUY_GENERATOR_BASE: u16 = 100;

// ── Bulk quantity picker (base + index into QUANTITY_CHOICES) ───
pub const SELECT_QUANTITY_BASE: u16 = 200;
