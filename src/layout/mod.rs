//! The layout passes: date-range inference, project grouping, track
//! construction, and calendar-axis generation. Everything here is a pure
//! function over the task collection plus the host-owned toggle state;
//! a full pass never mutates its inputs.

mod calendar;
pub mod date_range;
pub mod grouping;
pub mod router;
pub mod status;
pub mod timebar;
pub mod toggle;
pub mod tracks;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{Task, TimeWindow, TimebarSegment, Track};

pub use date_range::compute_window;
pub use grouping::{group_tasks, resolve_project_name, ProjectGroup, FALLBACK_GROUP};
pub use router::{find_element, resolve_source};
pub use status::{status_color, status_progress};
pub use timebar::generate_timebar;
pub use toggle::ToggleState;
pub use tracks::build_tracks;

/// The complete render payload of one layout pass, handed to an external
/// rendering surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GanttLayout {
    pub tracks: Vec<Track>,
    pub window: TimeWindow,
    pub timebar: Vec<TimebarSegment>,
}

/// Run a full layout pass against the current local date.
pub fn layout(tasks: &[Task], toggles: &ToggleState) -> GanttLayout {
    layout_at(tasks, toggles, chrono::Local::now().date_naive())
}

/// Run a full layout pass against an explicit reference date. Pure and
/// total: any task collection produces a valid, renderable structure.
pub fn layout_at(tasks: &[Task], toggles: &ToggleState, today: NaiveDate) -> GanttLayout {
    let window = compute_window(tasks, today);
    let groups = group_tasks(tasks);
    let tracks = build_tracks(&groups, toggles, today);
    let timebar = generate_timebar(&window);
    tracing::debug!(
        tasks = tasks.len(),
        tracks = tracks.len(),
        segments = timebar.len(),
        "layout pass complete"
    );
    GanttLayout {
        tracks,
        window,
        timebar,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use crate::model::{PropertyValue, SelectValue};

    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn empty_input_yields_empty_tracks_and_zero_span_window() {
        let result = layout_at(&[], &ToggleState::new(), d(2024, 6, 1));
        assert!(result.tracks.is_empty());
        assert_eq!(result.window.start, result.window.end);
        assert_eq!(result.window.now, d(2024, 6, 1));
    }

    #[test]
    fn single_dated_task_produces_the_padded_window() {
        let mut task = Task::new("t");
        task.created_time = Some(Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap());

        let result = layout_at(&[task], &ToggleState::new(), d(2024, 3, 20));
        assert_eq!(result.window.start, d(2024, 2, 1));
        assert_eq!(result.window.end, d(2024, 5, 31));

        // Timebar walks Feb through May inclusive.
        let month_labels: Vec<&str> = result
            .timebar
            .iter()
            .filter(|s| s.kind == crate::model::SegmentKind::Month)
            .map(|s| s.label.as_str())
            .collect();
        assert_eq!(
            month_labels,
            vec!["Feb 2024", "Mar 2024", "Apr 2024", "May 2024"]
        );
    }

    #[test]
    fn grouping_fallbacks_shape_the_tree() {
        let mut select = Task::new("in Alpha");
        select
            .properties
            .insert("Project", PropertyValue::Select(SelectValue::new("Alpha")));
        let mut sectioned = Task::new("in Beta");
        sectioned.section = Some("Beta".into());
        let orphan = Task::new("nowhere");

        let result = layout_at(
            &[select, sectioned, orphan],
            &ToggleState::new(),
            d(2024, 6, 1),
        );
        let titles: Vec<&str> = result.tracks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(result.tracks.len(), 3);
        assert!(titles[0].ends_with("Alpha"));
        assert!(titles[1].ends_with("Beta"));
        assert!(titles[2].ends_with(FALLBACK_GROUP));
    }

    #[test]
    fn layout_serializes_to_a_render_payload() {
        let mut task = Task::new("t");
        task.created_time = Some(Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap());

        let result = layout_at(&[task], &ToggleState::new(), d(2024, 3, 20));
        let json = serde_json::to_string(&result).unwrap();
        let restored: GanttLayout = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, result);
    }
}
