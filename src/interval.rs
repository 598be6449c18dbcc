//! Interval arithmetic for ray parameter ranges and channel clamping.

/// Closed interval [min, max].
#[derive(Debug, Clone, Copy)]
pub struct Interval {
    /// Lower bound of the interval.
    pub min: f32,
    /// Upper bound of the interval.
    pub max: f32,
}

impl Interval {
    /// Create a new interval with the given bounds.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// True if the interval contains `x` (inclusive bounds).
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    /// True if the interval strictly surrounds `x` (exclusive bounds).
    ///
    /// Ray intersection uses this with a small positive `min` so scattered
    /// rays cannot immediately re-hit the surface they started on.
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    /// Clamp `x` into the interval.
    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }
}
