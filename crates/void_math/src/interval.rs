//! Closed scalar intervals

/// Closed interval `[a, b]` on the real line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval1 {
    pub a: f32,
    pub b: f32,
}

impl Interval1 {
    /// Create an interval, the caller keeps `a <= b`
    #[inline]
    pub const fn new(a: f32, b: f32) -> Self {
        Self { a, b }
    }

    /// Endpoints are included
    #[inline]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.a && value <= self.b
    }

    /// Like `contains`, with both endpoints pushed out by `tolerance`
    #[inline]
    pub fn contains_within(&self, value: f32, tolerance: f32) -> bool {
        value >= self.a - tolerance && value <= self.b + tolerance
    }
}
