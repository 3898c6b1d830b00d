//! Linear interpolation with fixed-point truncation
//!
//! Every interpolated component follows the same rule:
//! `start + trunc(fraction * (end - start))`. Truncation, not
//! rounding, keeps the interpolated pixel values consistent with the
//! rest of the integer pipeline. Callers are trusted to supply
//! fractions in `[0, 1]`; no range validation is performed.

use crate::geometry::{Circle, Point};

/// Values that can be linearly interpolated component by component.
///
/// Two variants are provided: `lerp` produces an owned value, while
/// `lerp_into` writes through an exclusive reference so the per-frame
/// hot path can reuse a single live value instead of producing a fresh
/// one on every tick.
pub trait Lerp: Copy {
    /// Interpolate between `self` and `end`, returning a new value
    fn lerp(&self, end: &Self, fraction: f32) -> Self;

    /// Interpolate between `self` and `end`, writing into `out`
    fn lerp_into(&self, end: &Self, fraction: f32, out: &mut Self) {
        *out = self.lerp(end, fraction);
    }
}

#[inline]
fn lerp_i32(start: i32, end: i32, fraction: f32) -> i32 {
    start + (fraction * (end - start) as f32) as i32
}

impl Lerp for i32 {
    fn lerp(&self, end: &Self, fraction: f32) -> Self {
        lerp_i32(*self, *end, fraction)
    }
}

impl Lerp for Point {
    fn lerp(&self, end: &Self, fraction: f32) -> Self {
        Point::new(
            lerp_i32(self.x, end.x, fraction),
            lerp_i32(self.y, end.y, fraction),
        )
    }

    fn lerp_into(&self, end: &Self, fraction: f32, out: &mut Self) {
        out.set(
            lerp_i32(self.x, end.x, fraction),
            lerp_i32(self.y, end.y, fraction),
        );
    }
}

impl Lerp for Circle {
    fn lerp(&self, end: &Self, fraction: f32) -> Self {
        Circle::new(
            lerp_i32(self.x, end.x, fraction),
            lerp_i32(self.y, end.y, fraction),
            lerp_i32(self.radius, end.radius, fraction),
        )
    }

    fn lerp_into(&self, end: &Self, fraction: f32, out: &mut Self) {
        out.set(
            lerp_i32(self.x, end.x, fraction),
            lerp_i32(self.y, end.y, fraction),
            lerp_i32(self.radius, end.radius, fraction),
        );
    }
}

/// A frozen start/end pair sampled by fraction.
///
/// The endpoints are fixed at construction; the reveal session builds
/// one track per animated quantity during its first layout pass and
/// samples them for the rest of the view's life.
#[derive(Clone, Copy, Debug)]
pub struct Track<T: Lerp> {
    start: T,
    end: T,
}

impl<T: Lerp> Track<T> {
    pub fn new(start: T, end: T) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> T {
        self.start
    }

    pub fn end(&self) -> T {
        self.end
    }

    /// Sample at `fraction`, returning an owned value
    pub fn sample(&self, fraction: f32) -> T {
        self.start.lerp(&self.end, fraction)
    }

    /// Sample at `fraction`, writing into `out` in place
    pub fn sample_into(&self, fraction: f32, out: &mut T) {
        self.start.lerp_into(&self.end, fraction, out);
    }
}
