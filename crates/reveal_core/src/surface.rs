//! Drawing surface collaborator
//!
//! The reveal views never touch pixels directly; they describe each
//! frame through the `Surface` trait and the host's renderer carries
//! it out. The trait is the minimal slice a circular reveal needs:
//! a clip-state stack, clip-to-circle intersection, flat fills, and a
//! pre-scaled image blit.
//!
//! `RecordingSurface` implements the trait by recording commands,
//! which is how the widget tests assert draw output without a
//! renderer.

use crate::geometry::{Circle, Rect};

// ─────────────────────────────────────────────────────────────────────────────
// Color
// ─────────────────────────────────────────────────────────────────────────────

/// RGBA color, components in `0.0..=1.0`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    pub const RED: Color = Color::rgba(1.0, 0.0, 0.0, 1.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// From 8-bit ARGB components
    pub fn argb8(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self::rgba(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    pub fn with_alpha(mut self, a: f32) -> Self {
        self.a = a;
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Image handle
// ─────────────────────────────────────────────────────────────────────────────

/// Handle to an image the host has already decoded and scaled
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageId(pub u64);

// ─────────────────────────────────────────────────────────────────────────────
// Surface trait
// ─────────────────────────────────────────────────────────────────────────────

/// Drawing operations the reveal views require from their host
///
/// `save`/`restore` bracket clip changes; `clip_circle` intersects the
/// current clip with a circle, so everything painted until the
/// matching `restore` is confined to it.
pub trait Surface {
    /// Push the current clip state
    fn save(&mut self);

    /// Pop back to the previously saved clip state
    fn restore(&mut self);

    /// Intersect the current clip with a circle
    fn clip_circle(&mut self, circle: Circle);

    /// Flood-fill the current clip region
    fn fill(&mut self, color: Color);

    /// Fill a rectangle
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Stroke a rectangle outline
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32);

    /// Stroke a circle outline
    fn stroke_circle(&mut self, circle: Circle, color: Color, width: f32);

    /// Blit a pre-scaled image into a destination rectangle
    fn draw_image(&mut self, image: ImageId, dst: Rect);
}

// ─────────────────────────────────────────────────────────────────────────────
// Recording surface
// ─────────────────────────────────────────────────────────────────────────────

/// A recorded drawing operation
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceCommand {
    Save,
    Restore,
    ClipCircle(Circle),
    Fill(Color),
    FillRect { rect: Rect, color: Color },
    StrokeRect { rect: Rect, color: Color, width: f32 },
    StrokeCircle { circle: Circle, color: Color, width: f32 },
    DrawImage { image: ImageId, dst: Rect },
}

/// A surface that records commands for later inspection
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<SurfaceCommand>,
    save_depth: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<SurfaceCommand> {
        self.save_depth = 0;
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.save_depth = 0;
    }

    /// True when every `save` has a matching `restore`
    pub fn is_balanced(&self) -> bool {
        self.save_depth == 0
    }

    /// The clip circles recorded, in order
    pub fn clips(&self) -> Vec<Circle> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                SurfaceCommand::ClipCircle(circle) => Some(*circle),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn save(&mut self) {
        self.save_depth += 1;
        self.commands.push(SurfaceCommand::Save);
    }

    fn restore(&mut self) {
        self.save_depth = self.save_depth.saturating_sub(1);
        self.commands.push(SurfaceCommand::Restore);
    }

    fn clip_circle(&mut self, circle: Circle) {
        self.commands.push(SurfaceCommand::ClipCircle(circle));
    }

    fn fill(&mut self, color: Color) {
        self.commands.push(SurfaceCommand::Fill(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(SurfaceCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        self.commands
            .push(SurfaceCommand::StrokeRect { rect, color, width });
    }

    fn stroke_circle(&mut self, circle: Circle, color: Color, width: f32) {
        self.commands.push(SurfaceCommand::StrokeCircle {
            circle,
            color,
            width,
        });
    }

    fn draw_image(&mut self, image: ImageId, dst: Rect) {
        self.commands.push(SurfaceCommand::DrawImage { image, dst });
    }
}
