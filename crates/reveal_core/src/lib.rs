//! Reveal core
//!
//! Foundation types for the circular reveal views:
//!
//! - **Geometry**: integer `Point`/`Circle`/`Rect` pixel types with
//!   in-place mutation for the per-frame live values
//! - **Interpolation**: truncating linear interpolation with owned and
//!   reuse-in-place variants, plus frozen start/end `Track`s
//! - **Surface**: the drawing collaborator trait (clip-to-circle,
//!   fills, image blit) and a command-recording test implementation
//! - **Host**: measurement constraints, touch events, and the
//!   re-layout/redraw request seam
//! - **Errors**: the single fatal configuration failure

pub mod error;
pub mod geometry;
pub mod host;
pub mod lerp;
pub mod surface;

pub use error::RevealError;
pub use geometry::{contain_rect, fit_rect, Circle, EdgeInsets, Point, Rect};
pub use host::{Constraints, Host, ParentBox, TouchEvent, TouchPhase};
pub use lerp::{Lerp, Track};
pub use surface::{Color, ImageId, RecordingSurface, Surface, SurfaceCommand};
