//! Fixed-duration timeline driver
//!
//! A `Timeline` turns elapsed frame time into a normalized fraction in
//! `[0, 1]` over a configured duration, playing forward or in reverse.
//! It has no thread or scheduler of its own: the host's frame loop
//! calls `tick(dt_ms)` and reacts to the events each tick returns.
//! Keeping the events as returned values (rather than registered
//! callbacks) keeps the whole pipeline single-threaded `&mut self`
//! with no re-entrancy.

use smallvec::SmallVec;

/// Playback direction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayDirection {
    /// Fraction runs 0 → 1
    Forward,
    /// Fraction runs 1 → 0
    Reverse,
}

impl PlayDirection {
    /// The fraction this direction finishes at
    pub fn terminal_fraction(self) -> f32 {
        match self {
            PlayDirection::Forward => 1.0,
            PlayDirection::Reverse => 0.0,
        }
    }
}

/// Lifecycle events produced by a timeline tick
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TimelineEvent {
    /// First tick after a start or reverse
    Started,
    /// Interpolation step with the current fraction
    Tick(f32),
    /// The timeline reached its terminal fraction
    Ended,
    /// The timeline was stopped before reaching its terminal fraction
    Cancelled,
}

/// Per-tick event buffer; a single tick emits at most three events
/// (`Started`, `Tick`, `Ended`)
pub type TimelineEvents = SmallVec<[TimelineEvent; 3]>;

/// A fixed-duration linear fraction producer with reverse playback
#[derive(Clone, Debug)]
pub struct Timeline {
    /// Duration in milliseconds
    duration_ms: u32,
    /// Elapsed position in milliseconds, clamped to `[0, duration]`
    current_ms: f32,
    direction: PlayDirection,
    playing: bool,
    /// Pending `Started` emission for the next tick
    starting: bool,
}

impl Timeline {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            current_ms: 0.0,
            direction: PlayDirection::Forward,
            playing: false,
            starting: false,
        }
    }

    /// Play forward from the beginning, fraction 0 → 1
    pub fn start(&mut self) {
        self.current_ms = 0.0;
        self.direction = PlayDirection::Forward;
        self.playing = true;
        self.starting = true;
        tracing::debug!(duration_ms = self.duration_ms, "timeline started");
    }

    /// Play in reverse from the end, fraction 1 → 0
    pub fn reverse(&mut self) {
        self.current_ms = self.duration_ms as f32;
        self.direction = PlayDirection::Reverse;
        self.playing = true;
        self.starting = true;
        tracing::debug!(duration_ms = self.duration_ms, "timeline reversed");
    }

    /// Stop a running timeline without reaching its end.
    ///
    /// The fraction freezes where it was; the returned events carry a
    /// single `Cancelled` if the timeline was actually running.
    pub fn cancel(&mut self) -> TimelineEvents {
        let mut events = TimelineEvents::new();
        if self.playing {
            self.playing = false;
            self.starting = false;
            events.push(TimelineEvent::Cancelled);
            tracing::debug!(fraction = self.fraction(), "timeline cancelled");
        }
        events
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn direction(&self) -> PlayDirection {
        self.direction
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Current fraction in `[0, 1]`; exact at the extremes
    pub fn fraction(&self) -> f32 {
        if self.duration_ms == 0 {
            return self.direction.terminal_fraction();
        }
        (self.current_ms / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    /// Advance by `dt_ms` of frame time.
    ///
    /// A finishing tick always yields the exact terminal fraction
    /// before `Ended`, so observers land precisely on the endpoint
    /// value.
    pub fn tick(&mut self, dt_ms: f32) -> TimelineEvents {
        let mut events = TimelineEvents::new();
        if !self.playing {
            return events;
        }

        if self.starting {
            self.starting = false;
            events.push(TimelineEvent::Started);
        }

        let duration = self.duration_ms as f32;
        let finished = match self.direction {
            PlayDirection::Forward => {
                self.current_ms = (self.current_ms + dt_ms).min(duration);
                self.current_ms >= duration
            }
            PlayDirection::Reverse => {
                self.current_ms = (self.current_ms - dt_ms).max(0.0);
                self.current_ms <= 0.0
            }
        };

        events.push(TimelineEvent::Tick(self.fraction()));
        if finished {
            self.playing = false;
            events.push(TimelineEvent::Ended);
            tracing::debug!(direction = ?self.direction, "timeline ended");
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fractions(events: &TimelineEvents) -> Vec<f32> {
        events
            .iter()
            .filter_map(|event| match event {
                TimelineEvent::Tick(fraction) => Some(*fraction),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_forward_reaches_exact_endpoint() {
        let mut timeline = Timeline::new(100);
        timeline.start();

        let events = timeline.tick(60.0);
        assert!(events.contains(&TimelineEvent::Started));
        assert_eq!(fractions(&events), vec![0.6]);

        let events = timeline.tick(60.0);
        assert_eq!(fractions(&events), vec![1.0]);
        assert_eq!(events.last(), Some(&TimelineEvent::Ended));
        assert!(!timeline.is_playing());
    }

    #[test]
    fn test_tick_precedes_ended() {
        let mut timeline = Timeline::new(50);
        timeline.start();
        let events = timeline.tick(200.0);
        let tick_at = events
            .iter()
            .position(|e| matches!(e, TimelineEvent::Tick(_)))
            .unwrap();
        let ended_at = events
            .iter()
            .position(|e| *e == TimelineEvent::Ended)
            .unwrap();
        assert!(tick_at < ended_at);
    }

    #[test]
    fn test_reverse_runs_one_to_zero() {
        let mut timeline = Timeline::new(100);
        timeline.reverse();
        assert_eq!(timeline.fraction(), 1.0);

        let events = timeline.tick(25.0);
        assert_eq!(fractions(&events), vec![0.75]);

        let events = timeline.tick(100.0);
        assert_eq!(fractions(&events), vec![0.0]);
        assert_eq!(events.last(), Some(&TimelineEvent::Ended));
    }

    #[test]
    fn test_idle_timeline_emits_nothing() {
        let mut timeline = Timeline::new(100);
        assert!(timeline.tick(16.0).is_empty());

        timeline.start();
        timeline.tick(200.0);
        // Finished; further ticks are silent
        assert!(timeline.tick(16.0).is_empty());
    }

    #[test]
    fn test_cancel_freezes_fraction() {
        let mut timeline = Timeline::new(100);
        timeline.start();
        timeline.tick(40.0);

        let events = timeline.cancel();
        assert_eq!(events.as_slice(), &[TimelineEvent::Cancelled]);
        assert!(!timeline.is_playing());
        assert_eq!(timeline.fraction(), 0.4);

        // Cancelling an idle timeline is a no-op
        assert!(timeline.cancel().is_empty());
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let mut timeline = Timeline::new(0);
        timeline.start();
        let events = timeline.tick(16.0);
        assert_eq!(fractions(&events), vec![1.0]);
        assert_eq!(events.last(), Some(&TimelineEvent::Ended));
    }

    #[test]
    fn test_restart_after_completion() {
        let mut timeline = Timeline::new(100);
        timeline.start();
        timeline.tick(200.0);
        assert!(!timeline.is_playing());

        timeline.reverse();
        assert!(timeline.is_playing());
        let events = timeline.tick(50.0);
        assert!(events.contains(&TimelineEvent::Started));
        assert_eq!(fractions(&events), vec![0.5]);
    }
}
