use crate::layout::{self, GanttLayout, ToggleState};
use crate::model::{ElementSource, ParseTrackIdError, Task, TrackId, ZoomState};

/// Host-facing façade bundling the two pieces of state that survive
/// across layout passes. The host owns an instance, feeds interaction
/// events into it, and recomputes the layout on demand; the engine never
/// stores or mutates the task collection itself.
#[derive(Debug, Clone, Default)]
pub struct GanttEngine {
    pub toggles: ToggleState,
    pub zoom: ZoomState,
}

impl GanttEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the full render payload from the current task collection
    /// and interaction state.
    pub fn layout(&self, tasks: &[Task]) -> GanttLayout {
        layout::layout(tasks, &self.toggles)
    }

    pub fn zoom_in(&mut self) {
        self.zoom.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.zoom.zoom_out();
    }

    /// Flip the open/closed state of a track, given the id string a
    /// rendering surface reports back.
    pub fn toggle_open(&mut self, track_id: &str) -> Result<(), ParseTrackIdError> {
        let id: TrackId = track_id.parse()?;
        self.toggles.toggle(id);
        Ok(())
    }

    /// Resolve a clicked element to the domain record behind it.
    pub fn element_clicked<'a>(
        &self,
        current: &'a GanttLayout,
        element_id: &str,
    ) -> Option<&'a ElementSource> {
        layout::resolve_source(&current.tracks, element_id)
    }
}
