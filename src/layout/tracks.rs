use chrono::{Duration, NaiveDate};

use crate::model::{
    ColorToken, Element, ElementSource, ElementStyle, Priority, Subtask, Task, Track, TrackId,
};

use super::grouping::ProjectGroup;
use super::status::{status_color, status_progress};
use super::toggle::ToggleState;

/// Prefix marking project-level rows in the rendered hierarchy.
const PROJECT_MARKER: &str = "\u{1F4C1}";

/// Synthetic duration for a task whose end is missing or not after its
/// start.
const FALLBACK_TASK_DAYS: i64 = 7;

/// Subtasks carry no dates of their own; they render as a fixed short
/// span anchored at the parent's start.
const SUBTASK_SPAN_DAYS: i64 = 3;

/// Build the project → task → subtask track tree for the given groups.
/// `today` anchors tasks that carry no creation date.
pub fn build_tracks(groups: &[ProjectGroup<'_>], toggles: &ToggleState, today: NaiveDate) -> Vec<Track> {
    groups
        .iter()
        .enumerate()
        .map(|(group_idx, group)| {
            let id = TrackId::Project(group_idx);
            Track {
                id,
                title: format!("{PROJECT_MARKER} {}", group.name),
                has_children: true,
                is_open: toggles.is_open(id),
                elements: Vec::new(),
                children: group
                    .tasks
                    .iter()
                    .enumerate()
                    .map(|(task_idx, task)| {
                        build_task_track(group_idx, task_idx, task, toggles, today)
                    })
                    .collect(),
            }
        })
        .collect()
}

fn build_task_track(
    group_idx: usize,
    task_idx: usize,
    task: &Task,
    toggles: &ToggleState,
    today: NaiveDate,
) -> Track {
    let id = TrackId::Task(group_idx, task_idx);
    let (start, end) = task_interval(task, today);

    let status = task.status.as_deref();
    let progress = status_progress(status, task.completed);
    let style = ElementStyle {
        color: status_color(status, task.completed),
        emphasized: matches!(task.priority, Some(Priority::High)),
        muted: false,
    };
    let element = Element {
        id: id.to_string(),
        title: task.title.clone(),
        start,
        end,
        style,
        tooltip: format!(
            "{} · {} · {}%",
            task.title,
            status.unwrap_or("No status"),
            progress
        ),
        source: ElementSource::Task { task: task.clone() },
    };

    let children: Vec<Track> = task
        .subtasks
        .iter()
        .enumerate()
        .map(|(sub_idx, subtask)| {
            build_subtask_track(group_idx, task_idx, sub_idx, task, subtask, start, toggles)
        })
        .collect();

    Track {
        id,
        title: task.title.clone(),
        has_children: !children.is_empty(),
        is_open: toggles.is_open(id),
        elements: vec![element],
        children,
    }
}

fn build_subtask_track(
    group_idx: usize,
    task_idx: usize,
    sub_idx: usize,
    parent: &Task,
    subtask: &Subtask,
    parent_start: NaiveDate,
    toggles: &ToggleState,
) -> Track {
    let id = TrackId::Subtask(group_idx, task_idx, sub_idx);
    let element = Element {
        id: id.to_string(),
        title: subtask.title.clone(),
        start: parent_start,
        end: parent_start + Duration::days(SUBTASK_SPAN_DAYS),
        style: ElementStyle {
            color: ColorToken::Neutral,
            emphasized: false,
            muted: true,
        },
        tooltip: format!("Subtask: {}", subtask.title),
        source: ElementSource::Subtask {
            parent_id: parent.id,
            subtask: subtask.clone(),
        },
    };
    Track {
        id,
        title: subtask.title.clone(),
        has_children: false,
        is_open: toggles.is_open(id),
        elements: vec![element],
        children: Vec::new(),
    }
}

/// Start and corrected end of a task bar. The start is the creation date,
/// falling back to `today`. The end prefers the due date, then the last
/// edit; when the result is not strictly after the start it is replaced
/// with start + 7 days.
fn task_interval(task: &Task, today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = task
        .created_time
        .map(|t| t.date_naive())
        .unwrap_or(today);
    let end = match task
        .due_date
        .or(task.last_edited_time)
        .map(|t| t.date_naive())
    {
        Some(end) if end > start => end,
        _ => start + Duration::days(FALLBACK_TASK_DAYS),
    };
    (start, end)
}
