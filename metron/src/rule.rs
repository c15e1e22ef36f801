//! Conversion rules - linear scale factors and affine function pairs

/// Conversion rule for one unit, relative to its category's base unit
///
/// A linear scale factor is the multiplier that turns one base unit into
/// this unit (1 m = 100 cm, so cm has scale 100). Affine rules carry an
/// explicit forward/inverse pair because the two directions are not
/// reciprocal scalings of one another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnitRule {
    /// `base = value / scale`, `value = base * scale`; the base unit itself has scale 1
    Linear { scale: f64 },
    /// Non-proportional conversion (Temperature)
    Affine {
        to_base: fn(f64) -> f64,
        from_base: fn(f64) -> f64,
    },
}

impl UnitRule {
    /// Check whether this rule needs affine dispatch
    pub fn is_affine(&self) -> bool {
        matches!(self, UnitRule::Affine { .. })
    }

    /// Linear rules invert iff the scale is non-zero; affine rules supply
    /// both directions explicitly and are always invertible
    pub fn is_invertible(&self) -> bool {
        match self {
            UnitRule::Linear { scale } => *scale != 0.0,
            UnitRule::Affine { .. } => true,
        }
    }

    /// Convert a value in this unit to the category base unit
    pub fn to_base(&self, value: f64) -> f64 {
        match self {
            UnitRule::Linear { scale } => value / scale,
            UnitRule::Affine { to_base, .. } => to_base(value),
        }
    }

    /// Convert a base-unit value into this unit
    pub fn from_base(&self, base: f64) -> f64 {
        match self {
            UnitRule::Linear { scale } => base * scale,
            UnitRule::Affine { from_base, .. } => from_base(base),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn double(x: f64) -> f64 {
        x * 2.0
    }

    fn halve(x: f64) -> f64 {
        x / 2.0
    }

    #[test]
    fn test_linear_to_base() {
        // cm has scale 100: 250 cm = 2.5 m
        let cm = UnitRule::Linear { scale: 100.0 };
        assert_eq!(cm.to_base(250.0), 2.5);
    }

    #[test]
    fn test_linear_from_base() {
        let cm = UnitRule::Linear { scale: 100.0 };
        assert_eq!(cm.from_base(2.5), 250.0);
    }

    #[test]
    fn test_affine_dispatch() {
        let rule = UnitRule::Affine {
            to_base: halve,
            from_base: double,
        };
        assert!(rule.is_affine());
        assert_eq!(rule.to_base(10.0), 5.0);
        assert_eq!(rule.from_base(5.0), 10.0);
    }

    #[test]
    fn test_invertibility() {
        assert!(UnitRule::Linear { scale: 0.001 }.is_invertible());
        assert!(!UnitRule::Linear { scale: 0.0 }.is_invertible());
        assert!(UnitRule::Affine {
            to_base: halve,
            from_base: double,
        }
        .is_invertible());
    }
}
