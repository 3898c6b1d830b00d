//! Reveal session state machine
//!
//! `RevealSession` owns everything the two view variants share: the
//! four-state cycle, the frozen initial/final sizes, the live size and
//! clip circle rewritten each frame, and the two timelines that drive
//! them in lockstep. The variants layer their own painting on top and
//! forward measurement, touch, and frame ticks here.
//!
//! Everything runs on the host's UI thread: touch handling, timeline
//! ticks, and the measure/draw callbacks interleave on one thread, so
//! the live values are plain fields with no synchronization.

use reveal_animation::{Timeline, TimelineEvent, TimelineEvents};
use reveal_core::{Circle, Constraints, EdgeInsets, Host, ParentBox, Point, Rect, Track};
use reveal_core::{TouchEvent, TouchPhase};

use crate::state::RevealState;

/// Which extent of the collapsed box seeds the initial clip radius.
///
/// The flat-color view clips to the inscribed circle of its box
/// (`SmallerExtent`); the picture view clips to the circumscribing
/// half-extent (`LargerExtent`) so the image bleeds to the corners.
/// The fully revealed radius always uses the larger extent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitialRadiusRule {
    SmallerExtent,
    LargerExtent,
}

impl InitialRadiusRule {
    fn radius(self, size: Point) -> i32 {
        match self {
            InitialRadiusRule::SmallerExtent => size.min_extent() / 2,
            InitialRadiusRule::LargerExtent => size.max_extent() / 2,
        }
    }
}

/// The two frozen interpolation tracks, built once on the first
/// `Initial` draw
#[derive(Clone, Copy, Debug)]
struct SessionTracks {
    size: Track<Point>,
    circle: Track<Circle>,
}

/// State machine behind both reveal view variants
#[derive(Debug)]
pub struct RevealSession {
    state: RevealState,
    radius_rule: InitialRadiusRule,
    /// Raise the view above its siblings on a valid trigger
    raise_on_trigger: bool,

    /// Measured size of the collapsed view; recorded while `Initial`
    initial_size: Point,
    /// Parent content box minus this view's margins; recorded while
    /// `Initial`
    final_size: Point,

    /// Live animated size, reported as the measured size while not
    /// `Initial`
    view_size: Point,
    /// Live animated clip circle
    circle: Circle,

    tracks: Option<SessionTracks>,
    size_timeline: Timeline,
    circle_timeline: Timeline,

    /// Screen-space bounds, kept current by the host's layout pass
    bounds: Rect,
}

impl RevealSession {
    pub fn new(duration_ms: u32, radius_rule: InitialRadiusRule, raise_on_trigger: bool) -> Self {
        Self {
            state: RevealState::Initial,
            radius_rule,
            raise_on_trigger,
            initial_size: Point::ZERO,
            final_size: Point::ZERO,
            view_size: Point::ZERO,
            circle: Circle::ZERO,
            tracks: None,
            size_timeline: Timeline::new(duration_ms),
            circle_timeline: Timeline::new(duration_ms),
            bounds: Rect::ZERO,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    /// The size to paint content at for the current frame
    pub fn frame_size(&self) -> Point {
        match self.state {
            RevealState::Initial => self.initial_size,
            _ => self.view_size,
        }
    }

    pub fn initial_size(&self) -> Point {
        self.initial_size
    }

    pub fn final_size(&self) -> Point {
        self.final_size
    }

    pub fn circle(&self) -> Circle {
        self.circle
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Record the screen-space bounds assigned by the layout pass
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Measurement contract
    // ─────────────────────────────────────────────────────────────────────────

    /// Answer a measurement pass.
    ///
    /// While `Initial` the constraints are reported back verbatim and
    /// the collapsed/revealed sizes are recorded from them; in every
    /// other state the live animated size is reported as an exact
    /// measurement, which is what makes the view visually grow and
    /// shrink.
    pub fn measure(
        &mut self,
        constraints: Constraints,
        parent: &ParentBox,
        margins: EdgeInsets,
    ) -> Point {
        match self.state {
            RevealState::Initial => {
                self.initial_size = constraints.to_point();
                self.final_size = parent.content_size(margins);
                self.initial_size
            }
            _ => self.view_size,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Track construction
    // ─────────────────────────────────────────────────────────────────────────

    /// Build the two interpolation tracks from the recorded sizes and
    /// seed the live values. Invoked lazily from the `Initial` draw
    /// path; subsequent calls are no-ops, so the endpoints stay frozen
    /// for the view's whole life.
    pub fn ensure_tracks(&mut self) {
        if self.tracks.is_some() {
            return;
        }

        let initial_center = self.initial_size.midpoint();
        let start_circle = Circle::new(
            initial_center.x,
            initial_center.y,
            self.radius_rule.radius(self.initial_size),
        );
        let final_center = self.final_size.midpoint();
        let end_circle = Circle::new(
            final_center.x,
            final_center.y,
            self.final_size.max_extent() / 2,
        );

        self.view_size = self.initial_size;
        self.circle = start_circle;
        self.tracks = Some(SessionTracks {
            size: Track::new(self.initial_size, self.final_size),
            circle: Track::new(start_circle, end_circle),
        });
        tracing::debug!(
            collapsed = ?self.initial_size,
            revealed = ?self.final_size,
            "reveal tracks built"
        );
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Touch contract
    // ─────────────────────────────────────────────────────────────────────────

    /// Handle a touch event in view-local coordinates.
    ///
    /// A press-down is always claimed; a release triggers only when it
    /// lands inside the view's current screen bounds. Returns whether
    /// the event was consumed.
    pub fn on_touch(&mut self, event: TouchEvent, host: &mut dyn Host) -> bool {
        match event.phase {
            TouchPhase::Down => true,
            TouchPhase::Up => {
                let screen = Point::new(self.bounds.x + event.x, self.bounds.y + event.y);
                if !self.bounds.contains(screen) {
                    return false;
                }
                self.trigger(host);
                if self.raise_on_trigger {
                    host.bring_to_front();
                }
                true
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transition rule
    // ─────────────────────────────────────────────────────────────────────────

    /// Start the reveal from `Initial`, or the un-reveal from `Final`.
    /// An animation already in flight is not interruptible; the call
    /// is then a no-op.
    pub fn trigger(&mut self, _host: &mut dyn Host) {
        match self.state {
            RevealState::Initial => {
                if self.tracks.is_none() {
                    tracing::warn!("reveal trigger ignored: first draw has not run yet");
                    return;
                }
                self.size_timeline.start();
                self.circle_timeline.start();
                self.state = RevealState::ExpandingForward;
                tracing::debug!("reveal expanding");
            }
            RevealState::Final => {
                self.size_timeline.reverse();
                self.circle_timeline.reverse();
                self.state = RevealState::ContractingBackward;
                tracing::debug!("reveal contracting");
            }
            state => {
                tracing::debug!(?state, "reveal trigger ignored mid-flight");
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Frame ticks
    // ─────────────────────────────────────────────────────────────────────────

    /// Advance both timelines by `dt_ms` of frame time, sampling the
    /// tracks into the live size and circle and requesting re-layout
    /// and redraw for every interpolation step and on completion.
    pub fn tick(&mut self, dt_ms: f32, host: &mut dyn Host) {
        if !self.state.is_animating() {
            return;
        }
        let size_events = self.size_timeline.tick(dt_ms);
        let circle_events = self.circle_timeline.tick(dt_ms);
        self.route_events(&size_events, &circle_events, host);
    }

    /// Stop an in-flight animation early.
    ///
    /// The interrupted play direction still settles: the live geometry
    /// snaps to that direction's endpoint and the same transition as a
    /// natural completion runs, so the session always lands in
    /// `Initial` or `Final` rather than sticking mid-flight.
    pub fn cancel(&mut self, host: &mut dyn Host) {
        let size_events = self.size_timeline.cancel();
        let circle_events = self.circle_timeline.cancel();
        self.route_events(&size_events, &circle_events, host);
    }

    fn route_events(
        &mut self,
        size_events: &TimelineEvents,
        circle_events: &TimelineEvents,
        host: &mut dyn Host,
    ) {
        let Some(tracks) = self.tracks else {
            return;
        };

        let mut ticked = false;
        let mut completed = false;
        let terminal = self.size_timeline.direction().terminal_fraction();

        for event in size_events {
            match event {
                TimelineEvent::Tick(fraction) => {
                    tracks.size.sample_into(*fraction, &mut self.view_size);
                    ticked = true;
                }
                TimelineEvent::Ended => completed = true,
                TimelineEvent::Cancelled => {
                    tracks.size.sample_into(terminal, &mut self.view_size);
                    completed = true;
                }
                TimelineEvent::Started => {}
            }
        }
        for event in circle_events {
            match event {
                TimelineEvent::Tick(fraction) => {
                    tracks.circle.sample_into(*fraction, &mut self.circle);
                    ticked = true;
                }
                TimelineEvent::Ended => completed = true,
                TimelineEvent::Cancelled => {
                    tracks.circle.sample_into(terminal, &mut self.circle);
                    completed = true;
                }
                TimelineEvent::Started => {}
            }
        }

        if completed {
            let next = match self.state {
                RevealState::ExpandingForward => RevealState::Final,
                RevealState::ContractingBackward => RevealState::Initial,
                state => state,
            };
            if next != self.state {
                tracing::debug!(from = ?self.state, to = ?next, "reveal settled");
                self.state = next;
            }
            host.request_layout();
            host.request_redraw();
        } else if ticked {
            host.request_layout();
            host.request_redraw();
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Draw geometry
    // ─────────────────────────────────────────────────────────────────────────

    /// The clip circle for the current frame, or `None` once fully
    /// revealed
    pub fn clip_for_frame(&self) -> Option<Circle> {
        match self.state {
            RevealState::Initial => {
                let center = self.initial_size.midpoint();
                Some(Circle::new(
                    center.x,
                    center.y,
                    self.radius_rule.radius(self.initial_size),
                ))
            }
            RevealState::ExpandingForward | RevealState::ContractingBackward => Some(self.circle),
            RevealState::Final => None,
        }
    }
}
