//! Numeric reduction

/// Add the numbers left-to-right
///
/// Accumulation starts from positive zero, so `[-0.0]` sums to `0.0`.
/// NaN and infinities propagate under ordinary IEEE-754 rules.
pub fn sum(numbers: &[f64]) -> f64 {
    numbers.iter().fold(0.0, |total, n| total + n)
}
