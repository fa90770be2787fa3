use ultraviolet::DVec2;

/// Rescaling helpers missing from `ultraviolet`.
///
/// Both follow the behaviour of the vector type used by the browser demo:
/// a zero vector stays zero when rescaled.
pub trait VecExt {
    /// Returns the vector rescaled to `mag`, or the zero vector unchanged.
    fn with_mag(self, mag: f64) -> Self;

    /// Returns the vector with its length capped at `max`.
    fn limited(self, max: f64) -> Self;
}

impl VecExt for DVec2 {
    fn with_mag(self, mag: f64) -> Self {
        let len = self.mag();
        if len == 0.0 {
            return self;
        }
        self * (1.0 / len) * mag
    }

    fn limited(self, max: f64) -> Self {
        let mag_sq = self.mag_sq();
        if mag_sq > max * max {
            self / mag_sq.sqrt() * max
        } else {
            self
        }
    }
}

/// Clamps `n` into `[low, high]`, preferring `low` when the range is empty.
pub fn constrain(n: f64, low: f64, high: f64) -> f64 {
    n.min(high).max(low)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn with_mag_keeps_direction() {
        let v = DVec2::new(3.0, 4.0).with_mag(10.0);
        assert_relative_eq!(v.x, 6.0, epsilon = 1e-12);
        assert_relative_eq!(v.y, 8.0, epsilon = 1e-12);
    }

    #[test]
    fn with_mag_of_zero_is_zero() {
        assert_eq!(DVec2::zero().with_mag(5.0), DVec2::zero());
    }

    #[test]
    fn limited_only_shrinks() {
        let short = DVec2::new(1.0, 1.0);
        assert_eq!(short.limited(2.5), short);

        let long = DVec2::new(10.0, 10.0).limited(2.5);
        assert_relative_eq!(long.mag(), 2.5, epsilon = 1e-12);
        assert_relative_eq!(long.x, long.y);
    }

    #[test]
    fn constrain_with_inverted_range_returns_low() {
        assert_eq!(constrain(5.0, 0.0, 10.0), 5.0);
        assert_eq!(constrain(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(constrain(11.0, 0.0, 10.0), 10.0);
        assert_eq!(constrain(3.0, 8.0, 2.0), 8.0);
    }
}
