//! Circular reveal widgets
//!
//! Views that expand from their assigned box to fill their parent's
//! content box behind a growing clip circle, and contract back on the
//! next trigger. Two variants share one [`RevealSession`] state
//! machine:
//!
//! - [`RevealView`]: reveals a flat color, clipping to the inscribed
//!   circle of its collapsed box
//! - [`RevealPictureView`]: reveals a pre-scaled picture, clipping to
//!   the circumscribing half-extent and raising itself above its
//!   siblings when triggered
//!
//! Both are platform-neutral: the host supplies layout constraints and
//! touch events through [`reveal_core::Host`] and carries out drawing
//! through [`reveal_core::Surface`].
//!
//! # Example
//!
//! ```
//! use reveal_core::{Constraints, EdgeInsets, ParentBox, Point, RecordingSurface};
//! use reveal_widgets::{RevealView, RevealViewConfig};
//!
//! let mut view = RevealViewConfig::new().duration_ms(200).build();
//! let parent = ParentBox::new(Point::new(800, 600), EdgeInsets::ZERO);
//! view.measure(Constraints::new(100, 60), &parent, EdgeInsets::ZERO);
//!
//! let mut surface = RecordingSurface::new();
//! view.draw(&mut surface);
//! assert!(surface.is_balanced());
//! ```

pub mod picture_view;
pub mod reveal_view;
pub mod session;
pub mod state;

pub use picture_view::{RevealPictureConfig, RevealPictureView};
pub use reveal_view::{RevealView, RevealViewConfig};
pub use session::{InitialRadiusRule, RevealSession};
pub use state::RevealState;

/// Convenience re-exports for wiring a reveal view into a host
pub mod prelude {
    pub use crate::{
        RevealPictureConfig, RevealPictureView, RevealState, RevealView, RevealViewConfig,
    };
    pub use reveal_core::{
        Color, Constraints, EdgeInsets, Host, ImageId, ParentBox, Point, Rect, Surface, TouchEvent,
    };
}
