pub mod properties;
pub mod task;
pub mod timeline;
pub mod track;

pub use properties::{PropertyBag, PropertyValue, SelectValue};
pub use task::{Priority, Subtask, Task};
pub use timeline::{SegmentKind, TimeWindow, TimebarSegment, ZoomState};
pub use track::{ColorToken, Element, ElementSource, ElementStyle, ParseTrackIdError, Track, TrackId};
