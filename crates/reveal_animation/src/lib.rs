//! Reveal animation driver
//!
//! Fixed-duration timelines with linear fraction progression, reverse
//! playback, and value-based lifecycle events. The host frame loop is
//! the only scheduler: it calls `Timeline::tick` with elapsed frame
//! time and routes the returned events.

pub mod timeline;

pub use timeline::{PlayDirection, Timeline, TimelineEvent, TimelineEvents};
