use serde::Serialize;

/// How a weekly allocation amount is rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingPolicy {
    /// Round to the nearest whole currency unit, halves away from zero.
    NearestInteger,
    /// Round up to the next cent.
    CeilToCents,
}

impl RoundingPolicy {
    pub fn apply(self, amount: f64) -> f64 {
        match self {
            RoundingPolicy::NearestInteger => amount.round(),
            RoundingPolicy::CeilToCents => ceil_to_cents(amount),
        }
    }
}

/// Ceil to 2 decimals. Values already at cent precision (within float
/// noise) are returned unchanged, so applying it twice is a no-op.
pub fn ceil_to_cents(amount: f64) -> f64 {
    let scaled = amount * 100.0;
    let nearest = scaled.round();
    if (scaled - nearest).abs() < 1e-6 {
        nearest / 100.0
    } else {
        scaled.ceil() / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_integer() {
        assert_eq!(RoundingPolicy::NearestInteger.apply(59.5), 60.0);
        assert_eq!(RoundingPolicy::NearestInteger.apply(59.49), 59.0);
        assert_eq!(RoundingPolicy::NearestInteger.apply(0.3), 0.0);
    }

    #[test]
    fn test_ceil_to_cents_rounds_up() {
        assert_eq!(ceil_to_cents(10.001), 10.01);
        assert_eq!(ceil_to_cents(33.333333), 33.34);
    }

    #[test]
    fn test_ceil_to_cents_ignores_float_noise() {
        // 60.07 * 100 is 6007.000000000001 in binary floating point
        assert_eq!(ceil_to_cents(60.07), 60.07);
        assert_eq!(ceil_to_cents(0.1 + 0.2), 0.3);
    }

    #[test]
    fn test_ceil_to_cents_is_idempotent() {
        for x in [0.0, 1.0, 12.345, 99.999, 1234.5678, 0.07] {
            let once = ceil_to_cents(x);
            assert_eq!(ceil_to_cents(once), once, "not idempotent for {x}");
        }
    }
}
