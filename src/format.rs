//! Number formatting for display.

const SUFFIXES: [(u64, &str); 4] = [
    (1_000_000_000_000, "T"),
    (1_000_000_000, "B"),
    (1_000_000, "M"),
    (1_000, "k"),
];

/// Abbreviate a count with one decimal place (e.g. 1500 → "1.5k").
/// Values below 1,000 are shown as-is.
pub fn format_count(n: u64) -> String {
    for (threshold, suffix) in SUFFIXES {
        if n >= threshold {
            return format!("{:.1}{}", n as f64 / threshold as f64, suffix);
        }
    }
    n.to_string()
}
