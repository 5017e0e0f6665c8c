//! Cost curves and balance bookkeeping shared by every shop.

/// How an item's price evolves with its purchase level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CostCurve {
    /// `floor(base * growth^level)`, growth > 1.
    Scaling { base: f64, growth: f64 },
    /// Purchasable once; unreachable afterwards.
    OneShot { cost: f64 },
}

impl CostCurve {
    /// Price of the next purchase when `level` purchases have been made.
    pub fn cost_at(&self, level: u32) -> f64 {
        match *self {
            CostCurve::Scaling { base, growth } => (base * growth.powf(level as f64)).floor(),
            CostCurve::OneShot { cost } => {
                if level == 0 {
                    cost
                } else {
                    f64::INFINITY
                }
            }
        }
    }
}

/// Whether `balance` covers `cost`. Infinite costs never pass.
pub fn can_afford(balance: f64, cost: f64) -> bool {
    cost.is_finite() && balance >= cost
}

/// Display form of a cost: `None` when sold out.
pub fn display_cost(cost: f64) -> Option<u64> {
    if cost.is_finite() {
        Some(cost as u64)
    } else {
        None
    }
}

/// Clamp a negative or non-finite counter back to zero.
///
/// Correct callers never trip this; a hit means a snapshot was hand-edited
/// or a formula regressed. Returns true when a clamp happened.
pub fn clamp_non_negative(name: &str, value: &mut f64) -> bool {
    if value.is_finite() && *value >= 0.0 {
        return false;
    }
    tracing::warn!(counter = name, value = *value, "resource counter out of range, clamping to zero");
    *value = 0.0;
    true
}

/// Highest purchase level a snapshot may carry. Every curve is already
/// unaffordable long before this.
pub const MAX_LEVEL: u32 = 10_000;

/// Clamp a level counter loaded from outside into `0..=MAX_LEVEL`.
/// Returns true when a clamp happened.
pub fn clamp_level(name: &str, level: &mut u32) -> bool {
    if *level <= MAX_LEVEL {
        return false;
    }
    tracing::warn!(counter = name, value = *level, "level out of range, clamping");
    *level = MAX_LEVEL;
    true
}

/// Format a number with thousands separators (e.g. 1234567 → "1,234,567").
/// Fractions are shown to one decimal place when non-trivial.
pub fn format_number(n: f64) -> String {
    if n < 0.0 {
        return format!("-{}", format_number(-n));
    }
    let whole = n.floor() as u64;
    let frac = n - whole as f64;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let tenths = (frac * 10.0).round() as u8;
    if frac > 0.05 && tenths < 10 {
        format!("{}.{}", grouped, tenths)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaling_cost_floors() {
        let curve = CostCurve::Scaling { base: 15.0, growth: 1.15 };
        assert_eq!(curve.cost_at(0), 15.0);
        assert_eq!(curve.cost_at(1), 17.0); // 17.25
    }

    #[test]
    fn huge_levels_are_unaffordable_not_cheap() {
        let curve = CostCurve::Scaling { base: 10.0, growth: 1.7 };
        assert!(curve.cost_at(5_000).is_infinite());
        assert!(curve.cost_at(1 << 31).is_infinite());
        assert!(curve.cost_at(u32::MAX).is_infinite());
        assert!(!can_afford(f64::MAX, curve.cost_at(u32::MAX)));
    }

    #[test]
    fn clamp_level_caps_corrupt_counts() {
        let mut level = u32::MAX;
        assert!(clamp_level("clickPowerLevel", &mut level));
        assert_eq!(level, MAX_LEVEL);

        let mut level = 12;
        assert!(!clamp_level("clickPowerLevel", &mut level));
        assert_eq!(level, 12);
    }

    #[test]
    fn one_shot_cost_unreachable_after_purchase() {
        let curve = CostCurve::OneShot { cost: 400.0 };
        assert_eq!(curve.cost_at(0), 400.0);
        assert!(curve.cost_at(1).is_infinite());
        assert!(!can_afford(f64::MAX, curve.cost_at(1)));
    }

    #[test]
    fn display_cost_sold_out() {
        assert_eq!(display_cost(17.0), Some(17));
        assert_eq!(display_cost(f64::INFINITY), None);
    }

    #[test]
    fn clamp_fixes_negative_and_nan() {
        let mut v = -3.0;
        assert!(clamp_non_negative("score", &mut v));
        assert_eq!(v, 0.0);

        let mut v = f64::NAN;
        assert!(clamp_non_negative("score", &mut v));
        assert_eq!(v, 0.0);

        let mut v = 12.5;
        assert!(!clamp_non_negative("score", &mut v));
        assert_eq!(v, 12.5);
    }

    #[test]
    fn format_number_groups() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1_000.0), "1,000");
        assert_eq!(format_number(1_234_567.0), "1,234,567");
        assert_eq!(format_number(12.5), "12.5");
        assert_eq!(format_number(-1_500.0), "-1,500");
    }
}
