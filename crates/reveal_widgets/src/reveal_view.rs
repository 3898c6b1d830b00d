//! Flat-color reveal view
//!
//! The simplest variant: the revealed content is a flat wash of color,
//! with an optional center marker showing the clip circle's origin.
//! The collapsed clip is the inscribed circle of the view's box.

use reveal_core::{
    Circle, Color, Constraints, EdgeInsets, Host, ParentBox, Point, Rect, Surface, TouchEvent,
};

use crate::session::{InitialRadiusRule, RevealSession};
use crate::state::RevealState;

/// Radius of the center marker dot, in pixels
const MARKER_RADIUS: i32 = 2;

/// Flat-color reveal configuration
#[derive(Clone, Copy, Debug)]
pub struct RevealViewConfig {
    /// Fill painted inside the clip
    pub fill: Color,
    /// Center marker stroke color; `None` disables the marker
    pub marker_color: Option<Color>,
    /// Center marker stroke width
    pub marker_width: f32,
    /// Border stroked around the whole view; `None` disables it
    pub outline_color: Option<Color>,
    /// Border stroke width
    pub outline_width: f32,
    /// Animation duration in milliseconds
    pub duration_ms: u32,
}

impl Default for RevealViewConfig {
    fn default() -> Self {
        Self {
            fill: Color::argb8(128, 128, 128, 128),
            marker_color: Some(Color::RED),
            marker_width: 5.0,
            outline_color: Some(Color::RED),
            outline_width: 5.0,
            duration_ms: 300,
        }
    }
}

impl RevealViewConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fill color
    pub fn fill(mut self, color: Color) -> Self {
        self.fill = color;
        self
    }

    /// Set the center marker color
    pub fn marker(mut self, color: Color) -> Self {
        self.marker_color = Some(color);
        self
    }

    /// Disable the center marker
    pub fn without_marker(mut self) -> Self {
        self.marker_color = None;
        self
    }

    /// Set the view border color
    pub fn outline(mut self, color: Color) -> Self {
        self.outline_color = Some(color);
        self
    }

    /// Disable the view border
    pub fn without_outline(mut self) -> Self {
        self.outline_color = None;
        self
    }

    /// Set the animation duration
    pub fn duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Build the view
    pub fn build(self) -> RevealView {
        RevealView::with_config(self)
    }
}

/// A view that reveals a flat color through an expanding clip circle
#[derive(Debug)]
pub struct RevealView {
    session: RevealSession,
    config: RevealViewConfig,
}

impl RevealView {
    pub fn new() -> Self {
        Self::with_config(RevealViewConfig::default())
    }

    pub fn with_config(config: RevealViewConfig) -> Self {
        Self {
            session: RevealSession::new(config.duration_ms, InitialRadiusRule::SmallerExtent, false),
            config,
        }
    }

    pub fn state(&self) -> RevealState {
        self.session.state()
    }

    /// Answer a measurement pass (see `RevealSession::measure`)
    pub fn measure(
        &mut self,
        constraints: Constraints,
        parent: &ParentBox,
        margins: EdgeInsets,
    ) -> Point {
        self.session.measure(constraints, parent, margins)
    }

    /// Record the screen-space bounds assigned by the layout pass
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.session.set_bounds(bounds);
    }

    /// Handle a touch event; returns whether it was consumed
    pub fn on_touch(&mut self, event: TouchEvent, host: &mut dyn Host) -> bool {
        self.session.on_touch(event, host)
    }

    /// Advance the animation by `dt_ms` of frame time
    pub fn tick(&mut self, dt_ms: f32, host: &mut dyn Host) {
        self.session.tick(dt_ms, host);
    }

    /// Stop an in-flight animation, settling at the direction's
    /// endpoint
    pub fn cancel(&mut self, host: &mut dyn Host) {
        self.session.cancel(host);
    }

    /// Draw the current frame
    pub fn draw(&mut self, surface: &mut dyn Surface) {
        if self.session.state() == RevealState::Initial {
            self.session.ensure_tracks();
        }
        match self.session.clip_for_frame() {
            Some(circle) => {
                surface.save();
                surface.clip_circle(circle);
                self.paint(surface, self.session.frame_size(), circle.center());
                surface.restore();
            }
            None => {
                // Fully revealed: no clip
                let marker_at = self.session.circle().center();
                self.paint(surface, self.session.frame_size(), marker_at);
            }
        }
        // Border around the whole view, every frame, never clipped
        if let Some(color) = self.config.outline_color {
            surface.stroke_rect(
                Rect::from_size(self.session.frame_size()),
                color,
                self.config.outline_width,
            );
        }
    }

    fn paint(&self, surface: &mut dyn Surface, size: Point, marker_at: Point) {
        surface.fill_rect(Rect::from_size(size), self.config.fill);
        if let Some(color) = self.config.marker_color {
            surface.stroke_circle(
                Circle::new(marker_at.x, marker_at.y, MARKER_RADIUS),
                color,
                self.config.marker_width,
            );
        }
    }
}

impl Default for RevealView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reveal_core::{RecordingSurface, SurfaceCommand};

    #[derive(Default)]
    struct NullHost;

    impl Host for NullHost {
        fn request_layout(&mut self) {}
        fn request_redraw(&mut self) {}
        fn bring_to_front(&mut self) {}
    }

    fn laid_out_view() -> RevealView {
        let mut view = RevealViewConfig::new().duration_ms(100).build();
        let parent = ParentBox::new(Point::new(800, 600), EdgeInsets::ZERO);
        view.measure(Constraints::new(100, 60), &parent, EdgeInsets::ZERO);
        view.set_bounds(Rect::new(0, 0, 100, 60));
        view
    }

    #[test]
    fn test_initial_draw_clips_to_inscribed_circle() {
        let mut view = laid_out_view();
        let mut surface = RecordingSurface::new();
        view.draw(&mut surface);

        assert!(surface.is_balanced());
        assert_eq!(surface.clips(), vec![Circle::new(50, 30, 30)]);
        assert!(surface
            .commands()
            .iter()
            .any(|cmd| matches!(cmd, SurfaceCommand::FillRect { .. })));
    }

    #[test]
    fn test_animating_draw_clips_to_live_circle() {
        let mut view = laid_out_view();
        let mut host = NullHost;
        let mut surface = RecordingSurface::new();
        view.draw(&mut surface);

        view.on_touch(TouchEvent::up(10, 10), &mut host);
        view.tick(50.0, &mut host);
        assert_eq!(view.state(), RevealState::ExpandingForward);

        surface.clear();
        view.draw(&mut surface);
        assert!(surface.is_balanced());
        assert_eq!(surface.clips().len(), 1);
        assert_ne!(surface.clips()[0], Circle::new(50, 30, 30));
    }

    #[test]
    fn test_final_draw_has_no_clip() {
        let mut view = laid_out_view();
        let mut host = NullHost;
        let mut surface = RecordingSurface::new();
        view.draw(&mut surface);

        view.on_touch(TouchEvent::up(10, 10), &mut host);
        view.tick(200.0, &mut host);
        assert_eq!(view.state(), RevealState::Final);

        surface.clear();
        view.draw(&mut surface);
        assert!(surface.clips().is_empty());
        assert_eq!(
            surface.commands().first(),
            Some(&SurfaceCommand::FillRect {
                rect: Rect::new(0, 0, 800, 600),
                color: Color::argb8(128, 128, 128, 128),
            })
        );
    }

    #[test]
    fn test_outline_strokes_full_bounds_every_state() {
        let mut view = laid_out_view();
        let mut host = NullHost;
        let mut surface = RecordingSurface::new();

        // Collapsed: the border lands after the restore, outside the clip
        view.draw(&mut surface);
        let restore_at = surface
            .commands()
            .iter()
            .position(|cmd| *cmd == SurfaceCommand::Restore)
            .unwrap();
        let outline_at = surface
            .commands()
            .iter()
            .position(|cmd| matches!(cmd, SurfaceCommand::StrokeRect { .. }))
            .unwrap();
        assert!(outline_at > restore_at);
        assert_eq!(
            surface.commands().last(),
            Some(&SurfaceCommand::StrokeRect {
                rect: Rect::new(0, 0, 100, 60),
                color: Color::RED,
                width: 5.0,
            })
        );

        // Fully revealed: the border follows the live size
        view.on_touch(TouchEvent::up(10, 10), &mut host);
        view.tick(200.0, &mut host);
        surface.clear();
        view.draw(&mut surface);
        assert_eq!(
            surface.commands().last(),
            Some(&SurfaceCommand::StrokeRect {
                rect: Rect::new(0, 0, 800, 600),
                color: Color::RED,
                width: 5.0,
            })
        );
    }

    #[test]
    fn test_outline_can_be_disabled() {
        let mut view = RevealViewConfig::new().without_outline().build();
        let parent = ParentBox::new(Point::new(800, 600), EdgeInsets::ZERO);
        view.measure(Constraints::new(100, 60), &parent, EdgeInsets::ZERO);
        let mut surface = RecordingSurface::new();
        view.draw(&mut surface);
        assert!(!surface
            .commands()
            .iter()
            .any(|cmd| matches!(cmd, SurfaceCommand::StrokeRect { .. })));
    }

    #[test]
    fn test_marker_can_be_disabled() {
        let mut view = RevealViewConfig::new().without_marker().build();
        let parent = ParentBox::new(Point::new(800, 600), EdgeInsets::ZERO);
        view.measure(Constraints::new(100, 60), &parent, EdgeInsets::ZERO);
        let mut surface = RecordingSurface::new();
        view.draw(&mut surface);
        assert!(!surface
            .commands()
            .iter()
            .any(|cmd| matches!(cmd, SurfaceCommand::StrokeCircle { .. })));
    }
}
