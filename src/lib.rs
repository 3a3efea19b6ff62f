//! Hierarchical timeline layout engine for Gantt-style rendering.
//!
//! Converts a flat collection of task records into a time-scaled track
//! tree (project → task → subtask), a padded visible time window, and a
//! month/week calendar axis. The engine is synchronous and pure: every
//! pass recomputes the full structure from the task collection plus the
//! host-owned [`layout::ToggleState`] and [`model::ZoomState`], and never
//! fails — malformed dates, unknown statuses, and missing project fields
//! all degrade to defined defaults.
//!
//! Rendering, persistence, and data fetching are the host's concern; the
//! crate only produces the renderable structure and maps interaction
//! events (zoom, toggle, click) back onto it.

pub mod engine;
pub mod io;
pub mod layout;
pub mod model;

pub use engine::GanttEngine;
pub use layout::{layout, layout_at, GanttLayout, ToggleState};
pub use model::{
    ColorToken, Element, ElementSource, ElementStyle, Priority, PropertyBag, PropertyValue,
    SegmentKind, SelectValue, Subtask, Task, TimeWindow, TimebarSegment, Track, TrackId, ZoomState,
};
