use crate::model::{PropertyValue, Task};

/// Name used when no project can be resolved for a task.
pub const FALLBACK_GROUP: &str = "General Tasks";

/// Property names probed for a project assignment, in order.
const PROJECT_KEYS: [&str; 2] = ["Project", "project"];

/// A named bucket of tasks sharing a resolved project identity. Borrows
/// from the input collection; groups appear in first-seen order and tasks
/// keep their input order within a group.
#[derive(Debug, Clone)]
pub struct ProjectGroup<'a> {
    pub name: String,
    pub tasks: Vec<&'a Task>,
}

/// Partition tasks into project groups.
pub fn group_tasks(tasks: &[Task]) -> Vec<ProjectGroup<'_>> {
    let mut groups: Vec<ProjectGroup> = Vec::new();
    for task in tasks {
        let name = resolve_project_name(task);
        match groups.iter_mut().find(|g| g.name == name) {
            Some(group) => group.tasks.push(task),
            None => groups.push(ProjectGroup {
                name,
                tasks: vec![task],
            }),
        }
    }
    tracing::debug!(tasks = tasks.len(), groups = groups.len(), "grouped tasks");
    groups
}

/// Resolve the project name for one task via the ordered fallback chain:
/// string-valued `Project`/`project` field, then select-valued, then the
/// first element of a list-valued field, then the section label, then
/// [`FALLBACK_GROUP`]. Total: always returns a non-empty name.
pub fn resolve_project_name(task: &Task) -> String {
    let candidates: Vec<&PropertyValue> = PROJECT_KEYS
        .into_iter()
        .filter_map(|key| task.properties.get(key))
        .collect();

    for value in &candidates {
        if let PropertyValue::Text(s) = value {
            if !s.trim().is_empty() {
                return s.clone();
            }
        }
    }
    for value in &candidates {
        if let PropertyValue::Select(sel) = value {
            if !sel.name.trim().is_empty() {
                return sel.name.clone();
            }
        }
    }
    for value in &candidates {
        if let PropertyValue::Many(items) = value {
            match items.first() {
                Some(PropertyValue::Text(s)) if !s.trim().is_empty() => return s.clone(),
                Some(PropertyValue::Select(sel)) if !sel.name.trim().is_empty() => {
                    return sel.name.clone()
                }
                _ => {}
            }
        }
    }

    match &task.section {
        Some(section) if !section.trim().is_empty() => section.clone(),
        _ => FALLBACK_GROUP.to_string(),
    }
}
