/// Placeholder shown before the first sample lands.
pub const PLACEHOLDER: &str = "-";

/// Ratio as a percentage with exactly one decimal, e.g. `0.4567` -> `"45.7"`.
/// Ties round away from zero (`0.0625` -> `"6.3"`).
pub fn percent_text(ratio: f64) -> String {
    format!("{:.1}", (ratio * 1000.0).round() / 10.0)
}
