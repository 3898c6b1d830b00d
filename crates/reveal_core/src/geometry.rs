//! Integer pixel geometry
//!
//! The reveal pipeline measures, clips, and hit-tests in whole pixels,
//! so every type here carries `i32` components. The live size and clip
//! circle are rewritten in place on every animation frame via `set`.

// ─────────────────────────────────────────────────────────────────────────────
// Point
// ─────────────────────────────────────────────────────────────────────────────

/// 2D integer point
///
/// Doubles as a width/height pair: a view's measured size is stored as
/// a `Point` whose `x` is the width and `y` the height.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Overwrite both components in place
    pub fn set(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    /// The smaller of the two components
    pub fn min_extent(&self) -> i32 {
        self.x.min(self.y)
    }

    /// The larger of the two components
    pub fn max_extent(&self) -> i32 {
        self.x.max(self.y)
    }

    /// Midpoint when this point is interpreted as a size
    pub fn midpoint(&self) -> Point {
        Point::new(self.x / 2, self.y / 2)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Circle
// ─────────────────────────────────────────────────────────────────────────────

/// Clip circle: center plus radius, in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Circle {
    pub x: i32,
    pub y: i32,
    pub radius: i32,
}

impl Circle {
    pub const ZERO: Circle = Circle {
        x: 0,
        y: 0,
        radius: 0,
    };

    pub const fn new(x: i32, y: i32, radius: i32) -> Self {
        Self { x, y, radius }
    }

    /// Overwrite all three components in place
    pub fn set(&mut self, x: i32, y: i32, radius: i32) {
        self.x = x;
        self.y = y;
        self.radius = radius;
    }

    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Rect
// ─────────────────────────────────────────────────────────────────────────────

/// Axis-aligned integer rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };

    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rect at the origin spanning `size`
    pub const fn from_size(size: Point) -> Self {
        Rect::new(0, 0, size.x, size.y)
    }

    /// Left/top edges are inside, right/bottom edges are not
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Edge insets
// ─────────────────────────────────────────────────────────────────────────────

/// Per-edge pixel insets: container padding or a view's own margins
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EdgeInsets {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets {
        left: 0,
        top: 0,
        right: 0,
        bottom: 0,
    };

    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Same inset on all four edges
    pub const fn uniform(inset: i32) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    pub fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> i32 {
        self.top + self.bottom
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Center fit
// ─────────────────────────────────────────────────────────────────────────────

/// Aspect-preserving center fit of an image inside a bounding box.
///
/// Portrait images span the full height and are centered horizontally;
/// landscape (and square) images span the full width and are centered
/// vertically. Fractional pixels truncate.
pub fn fit_rect(image: Point, bounds: Point) -> Rect {
    if image.x <= 0 || image.y <= 0 {
        return Rect::ZERO;
    }
    let aspect = image.x as f32 / image.y as f32;
    if aspect < 1.0 {
        let w = (bounds.y as f32 * aspect) as i32;
        let h = bounds.y;
        let disp = (bounds.x - w) / 2;
        Rect::new(disp, 0, w, h)
    } else {
        let w = bounds.x;
        let h = (bounds.x as f32 / aspect) as i32;
        let disp = (bounds.y - h) / 2;
        Rect::new(0, disp, w, h)
    }
}

/// Aspect-preserving contain fit of an image inside a bounding box.
///
/// Unlike [`fit_rect`], the result never overflows `bounds`: the
/// smaller of the two scale factors wins, and the image is centered on
/// both axes. Used for one-time prescaling, where the scaled image
/// must fit entirely inside the target box.
pub fn contain_rect(image: Point, bounds: Point) -> Rect {
    if image.x <= 0 || image.y <= 0 {
        return Rect::ZERO;
    }
    let scale = (bounds.x as f32 / image.x as f32).min(bounds.y as f32 / image.y as f32);
    let w = (image.x as f32 * scale) as i32;
    let h = (image.y as f32 * scale) as i32;
    Rect::new((bounds.x - w) / 2, (bounds.y - h) / 2, w, h)
}
