use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The visible time window of one layout pass. `now` is carried for
/// today-marker rendering and equals the reference instant of the pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub now: NaiveDate,
}

impl TimeWindow {
    /// Degenerate zero-span window centered on `now`. Produced when the
    /// task collection carries no usable dates at all.
    pub fn at(now: NaiveDate) -> Self {
        Self {
            start: now,
            end: now,
            now,
        }
    }
}

/// Granularity of a timebar segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Month,
    Week,
}

/// One labeled span on the calendar axis. `start` and `end` are inclusive
/// dates; week segments are clipped at their month's last day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimebarSegment {
    pub id: String,
    pub label: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub kind: SegmentKind,
}

/// Zoom factor bounded between a minimum and maximum.
///
/// `min <= factor <= max` holds after construction and after every
/// transition; zooming past a bound is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomState {
    pub factor: f32,
    pub min: f32,
    pub max: f32,
}

impl ZoomState {
    pub fn new(factor: f32, min: f32, max: f32) -> Self {
        Self {
            factor: factor.clamp(min, max),
            min,
            max,
        }
    }

    /// Increase the factor by 20%, clamped at the maximum.
    pub fn zoom_in(&mut self) {
        self.factor = (self.factor * 1.2).min(self.max);
    }

    /// Decrease the factor by 20%, clamped at the minimum.
    pub fn zoom_out(&mut self) {
        self.factor = (self.factor / 1.2).max(self.min);
    }
}

impl Default for ZoomState {
    fn default() -> Self {
        Self::new(1.0, 1.0, 20.0)
    }
}
