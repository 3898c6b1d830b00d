//! Host view collaborator
//!
//! The layout and input side of the seam: the host hands the view
//! measurement constraints, the parent container's box, and touch
//! events; the view answers with a measured size and asks the host for
//! re-layout and redraw passes as its animation progresses.

use crate::geometry::{EdgeInsets, Point};

// ─────────────────────────────────────────────────────────────────────────────
// Measurement
// ─────────────────────────────────────────────────────────────────────────────

/// Measurement constraints handed down by the layout pass
///
/// Always definite: the host has already resolved this view's assigned
/// box before asking it to measure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Constraints {
    pub width: i32,
    pub height: i32,
}

impl Constraints {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn to_point(self) -> Point {
        Point::new(self.width, self.height)
    }
}

/// The parent container's box, used to compute the fully revealed size
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParentBox {
    /// The container's outer size
    pub size: Point,
    /// The container's own padding
    pub padding: EdgeInsets,
}

impl ParentBox {
    pub fn new(size: Point, padding: EdgeInsets) -> Self {
        Self { size, padding }
    }

    /// Content box after removing the container's padding and the
    /// view's margins
    pub fn content_size(&self, margins: EdgeInsets) -> Point {
        Point::new(
            self.size.x - self.padding.horizontal() - margins.horizontal(),
            self.size.y - self.padding.vertical() - margins.vertical(),
        )
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Touch input
// ─────────────────────────────────────────────────────────────────────────────

/// Touch gesture phase
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    /// Finger down: claims the gesture
    Down,
    /// Finger up: the trigger, when inside the view's bounds
    Up,
}

/// A touch event in view-local coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub x: i32,
    pub y: i32,
}

impl TouchEvent {
    pub fn down(x: i32, y: i32) -> Self {
        Self {
            phase: TouchPhase::Down,
            x,
            y,
        }
    }

    pub fn up(x: i32, y: i32) -> Self {
        Self {
            phase: TouchPhase::Up,
            x,
            y,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Host requests
// ─────────────────────────────────────────────────────────────────────────────

/// Requests the view issues back to its host as side effects
pub trait Host {
    /// Schedule a re-measurement pass
    fn request_layout(&mut self);

    /// Schedule a redraw
    fn request_redraw(&mut self);

    /// Raise the view above its siblings
    fn bring_to_front(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_size_subtracts_padding_and_margins() {
        let parent = ParentBox::new(Point::new(1080, 1920), EdgeInsets::new(16, 24, 16, 24));
        let margins = EdgeInsets::uniform(8);
        assert_eq!(parent.content_size(margins), Point::new(1032, 1856));
    }

    #[test]
    fn test_constraints_to_point() {
        assert_eq!(Constraints::new(320, 240).to_point(), Point::new(320, 240));
    }
}
