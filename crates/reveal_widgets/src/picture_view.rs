//! Picture-backed reveal view
//!
//! Reveals a picture instead of a flat color. The picture is decoded
//! and pre-scaled by the host once, at construction time, to fit half
//! the display; per frame the view only computes a centered
//! destination rectangle and blits. The collapsed clip uses the
//! circumscribing half-extent so the picture bleeds into the corners
//! of the collapsed box.

use reveal_core::{
    contain_rect, fit_rect, Color, Constraints, EdgeInsets, Host, ImageId, ParentBox, Point, Rect,
    RevealError, Surface, TouchEvent,
};

use crate::session::{InitialRadiusRule, RevealSession};
use crate::state::RevealState;

/// Picture reveal configuration
///
/// The picture is mandatory: `build` fails with
/// [`RevealError::MissingPicture`] when none was supplied.
#[derive(Clone, Copy, Debug)]
pub struct RevealPictureConfig {
    /// Image handle and its pixel dimensions
    picture: Option<(ImageId, Point)>,
    /// Display size; the picture is pre-scaled to fit half of it
    display_size: Point,
    /// Translucent wash painted behind the picture
    pub scrim: Color,
    /// Backdrop painted once fully revealed
    pub background: Color,
    /// Animation duration in milliseconds
    pub duration_ms: u32,
}

impl Default for RevealPictureConfig {
    fn default() -> Self {
        Self {
            picture: None,
            display_size: Point::ZERO,
            scrim: Color::argb8(70, 128, 128, 128),
            background: Color::WHITE,
            duration_ms: 300,
        }
    }
}

impl RevealPictureConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the picture handle and its pixel dimensions
    pub fn picture(mut self, image: ImageId, size: Point) -> Self {
        self.picture = Some((image, size));
        self
    }

    /// Set the display size used for the one-time prescale
    pub fn display_size(mut self, size: Point) -> Self {
        self.display_size = size;
        self
    }

    /// Set the scrim color
    pub fn scrim(mut self, color: Color) -> Self {
        self.scrim = color;
        self
    }

    /// Set the animation duration
    pub fn duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Build the view; fails fast when no picture was supplied
    pub fn build(self) -> Result<RevealPictureView, RevealError> {
        RevealPictureView::with_config(self)
    }
}

/// A view that reveals a scaled picture through an expanding clip
/// circle
#[derive(Debug)]
pub struct RevealPictureView {
    session: RevealSession,
    config: RevealPictureConfig,
    image: ImageId,
    /// Dimensions after the one-time fit into half the display
    scaled: Point,
}

impl RevealPictureView {
    pub fn with_config(config: RevealPictureConfig) -> Result<Self, RevealError> {
        let (image, image_size) = config.picture.ok_or(RevealError::MissingPicture)?;
        // Contain fit: the prescaled image must sit entirely inside
        // half the display
        let scaled_box = contain_rect(image_size, config.display_size.midpoint());
        Ok(Self {
            session: RevealSession::new(config.duration_ms, InitialRadiusRule::LargerExtent, true),
            config,
            image,
            scaled: Point::new(scaled_box.width, scaled_box.height),
        })
    }

    pub fn state(&self) -> RevealState {
        self.session.state()
    }

    /// Dimensions of the pre-scaled picture
    pub fn scaled_size(&self) -> Point {
        self.scaled
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

    /// Handle a touch event; returns whether it was consumed.
    /// A valid trigger also raises the view above its siblings.
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
                self.paint(surface, self.session.frame_size());
                surface.restore();
            }
            None => {
                // Fully revealed: opaque backdrop, no clip
                let size = self.session.frame_size();
                surface.fill_rect(Rect::from_size(size), self.config.background);
                self.paint(surface, size);
            }
        }
    }

    fn paint(&self, surface: &mut dyn Surface, size: Point) {
        surface.fill_rect(Rect::from_size(size), self.config.scrim);
        surface.draw_image(self.image, fit_rect(self.scaled, size));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reveal_core::{RecordingSurface, SurfaceCommand};

    #[derive(Default)]
    struct NullHost {
        raises: usize,
    }

    impl Host for NullHost {
        fn request_layout(&mut self) {}
        fn request_redraw(&mut self) {}
        fn bring_to_front(&mut self) {
            self.raises += 1;
        }
    }

    fn laid_out_view() -> RevealPictureView {
        let mut view = RevealPictureConfig::new()
            .picture(ImageId(7), Point::new(400, 200))
            .display_size(Point::new(800, 600))
            .duration_ms(100)
            .build()
            .unwrap();
        let parent = ParentBox::new(Point::new(800, 600), EdgeInsets::ZERO);
        view.measure(Constraints::new(100, 60), &parent, EdgeInsets::ZERO);
        view.set_bounds(Rect::new(0, 0, 100, 60));
        view
    }

    #[test]
    fn test_picture_is_mandatory() {
        let result = RevealPictureConfig::new()
            .display_size(Point::new(800, 600))
            .build();
        assert!(matches!(result, Err(RevealError::MissingPicture)));
    }

    #[test]
    fn test_prescale_fits_half_display() {
        let view = laid_out_view();
        // 2:1 image into a 400x300 box spans the width
        assert_eq!(view.scaled_size(), Point::new(400, 200));
    }

    #[test]
    fn test_square_picture_prescale_stays_inside_half_display() {
        let view = RevealPictureConfig::new()
            .picture(ImageId(3), Point::new(400, 400))
            .display_size(Point::new(800, 600))
            .build()
            .unwrap();
        // 400x400 into the 400x300 half-display: height limits
        assert_eq!(view.scaled_size(), Point::new(300, 300));
    }

    #[test]
    fn test_initial_clip_uses_larger_extent() {
        let mut view = laid_out_view();
        let mut surface = RecordingSurface::new();
        view.draw(&mut surface);
        // 100x60 box, larger extent 100 -> radius 50
        assert_eq!(
            surface.clips(),
            vec![reveal_core::Circle::new(50, 30, 50)]
        );
        assert!(surface.is_balanced());
    }

    #[test]
    fn test_paint_centers_image_in_frame() {
        let mut view = laid_out_view();
        let mut host = NullHost::default();
        let mut surface = RecordingSurface::new();
        view.draw(&mut surface);

        view.on_touch(TouchEvent::up(10, 10), &mut host);
        view.tick(200.0, &mut host);
        assert_eq!(view.state(), RevealState::Final);

        surface.clear();
        view.draw(&mut surface);
        assert!(surface.clips().is_empty());
        // 400x200 scaled image into the 800x600 frame: spans the
        // width, centered vertically
        let image_cmd = surface
            .commands()
            .iter()
            .find(|cmd| matches!(cmd, SurfaceCommand::DrawImage { .. }))
            .unwrap();
        assert_eq!(
            image_cmd,
            &SurfaceCommand::DrawImage {
                image: ImageId(7),
                dst: Rect::new(0, 100, 800, 400),
            }
        );
    }

    #[test]
    fn test_trigger_raises_view() {
        let mut view = laid_out_view();
        let mut host = NullHost::default();
        let mut surface = RecordingSurface::new();
        view.draw(&mut surface);

        view.on_touch(TouchEvent::up(10, 10), &mut host);
        assert_eq!(host.raises, 1);
        assert_eq!(view.state(), RevealState::ExpandingForward);
    }
}
