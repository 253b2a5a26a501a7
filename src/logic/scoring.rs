//! Dart scoring.

/// Segment value of the bullseye.
pub const BULL: i32 = 25;

/// Points for one dart: `value * mult`, except the outer bull (25) and inner bull (50).
///
/// Only multipliers 1 and 2 are special-cased for the bull; `25 x 3` falls through to 75.
/// Inputs are not range-checked; the product saturates instead of overflowing.
pub fn compute_score(value: i32, mult: i32) -> i32 {
    match (value, mult) {
        (BULL, 2) => 50,
        (BULL, 1) => BULL,
        _ => value.saturating_mul(mult),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_segments_multiply() {
        assert_eq!(compute_score(1, 1), 1);
        assert_eq!(compute_score(20, 3), 60);
        assert_eq!(compute_score(19, 2), 38);
    }

    #[test]
    fn bull_scores_25_and_50() {
        assert_eq!(compute_score(25, 1), 25);
        assert_eq!(compute_score(25, 2), 50);
    }

    #[test]
    fn treble_bull_is_not_special_cased() {
        assert_eq!(compute_score(25, 3), 75);
    }

    #[test]
    fn unvalidated_inputs_use_plain_arithmetic() {
        assert_eq!(compute_score(60, 1), 60);
        assert_eq!(compute_score(20, -1), -20);
        assert_eq!(compute_score(i32::MAX, 3), i32::MAX);
    }
}
