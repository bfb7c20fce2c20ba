//! Percentage derivation with explicit null-vs-zero semantics.

/// Derive a percentage from a summed numerator and an optional denominator.
///
/// - `None` denominator (unresolved): `None` — never 0%.
/// - denominator > 0: `value / total * 100`, unrounded.
/// - denominator == 0 with value == 0: `None` — zero-over-zero is
///   undefined, not a measured rate.
/// - denominator == 0 with value > 0: `Some(0.0)` — the denominator was
///   measured, the rate is degenerate but known.
pub fn percentage(value: f64, total: Option<f64>) -> Option<f64> {
    match total {
        None => None,
        Some(total) if total > 0.0 => Some(value / total * 100.0),
        Some(_) if value == 0.0 => None,
        Some(_) => Some(0.0),
    }
}
