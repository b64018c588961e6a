use serde::{Deserialize, Serialize};

/// A closed numeric interval used for linear rescaling.
///
/// Two ranges configure a network: the internal normalized range (default
/// `[-1, 1]`) and the final output range (default `[0, 1]`). Both are design
/// constants exposed as configuration so the same weights can be reused with
/// a different output scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub low: f64,
    pub high: f64,
}

impl Range {
    pub const fn new(low: f64, high: f64) -> Range {
        Range { low, high }
    }

    pub fn span(&self) -> f64 {
        self.high - self.low
    }

    /// A zero-width range cannot be rescaled from (division by zero).
    pub fn is_degenerate(&self) -> bool {
        self.low == self.high
    }
}

/// Linearly maps `x` from the `from` interval onto the `to` interval:
/// `((x - from.low) / from.span()) * to.span() + to.low`.
///
/// `from.low` maps to `to.low`, `from.high` to `to.high`. The caller must
/// ensure `from` is not degenerate.
pub fn rescale(x: f64, from: Range, to: Range) -> f64 {
    (x - from.low) / from.span() * to.span() + to.low
}

#[cfg(test)]
mod tests {
    use super::*;

    const NORM: Range = Range::new(-1.0, 1.0);
    const UNIT: Range = Range::new(0.0, 1.0);

    #[test]
    fn endpoints_map_to_endpoints() {
        assert_eq!(rescale(0.0, UNIT, NORM), -1.0);
        assert_eq!(rescale(1.0, UNIT, NORM), 1.0);
        assert_eq!(rescale(-1.0, NORM, UNIT), 0.0);
        assert_eq!(rescale(1.0, NORM, UNIT), 1.0);
    }

    #[test]
    fn midpoint_maps_to_midpoint() {
        assert_eq!(rescale(0.5, UNIT, NORM), 0.0);
        assert_eq!(rescale(0.0, NORM, UNIT), 0.5);
    }

    #[test]
    fn identity_when_ranges_match() {
        assert_eq!(rescale(0.37, UNIT, UNIT), 0.37);
    }

    #[test]
    fn shifted_source_interval() {
        // [10, 30] onto [-1, 1]: 20 is the midpoint.
        let from = Range::new(10.0, 30.0);
        assert_eq!(rescale(20.0, from, NORM), 0.0);
        assert_eq!(rescale(10.0, from, NORM), -1.0);
    }

    #[test]
    fn degenerate_detection() {
        assert!(Range::new(2.0, 2.0).is_degenerate());
        assert!(!NORM.is_degenerate());
    }

    // Predictions round half away from zero; `f64::round` is that rule.
    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!((0.5f64).round(), 1.0);
        assert_eq!((-0.5f64).round(), -1.0);
        assert_eq!((1.5f64).round(), 2.0);
        assert_eq!((0.49f64).round(), 0.0);
    }
}
