use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::properties::PropertyBag;

/// Priority bucket of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Urgent,
    High,
    Medium,
    Low,
}

impl Priority {
    /// Parse a priority label leniently. Unrecognized labels map to `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "urgent" | "critical" => Some(Self::Urgent),
            "high" => Some(Self::High),
            "medium" | "med" | "normal" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }
}

/// A named sub-item of a task. Subtasks carry no dates of their own;
/// the layout synthesizes a short bar anchored at the parent's start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subtask {
    #[serde(alias = "name")]
    pub title: String,
}

impl Subtask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// A single task record as supplied by the host's data layer.
///
/// Immutable for the duration of one layout pass. Timestamp fields decode
/// leniently: an unparseable value becomes `None` rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, deserialize_with = "lenient::priority")]
    pub priority: Option<Priority>,
    #[serde(default, deserialize_with = "lenient::instant")]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient::instant")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient::instant")]
    pub last_edited_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub properties: PropertyBag,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
}

impl Task {
    /// Create a task with a fresh id and everything else empty.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            status: None,
            completed: false,
            priority: None,
            created_time: None,
            due_date: None,
            last_edited_time: None,
            section: None,
            properties: PropertyBag::new(),
            subtasks: Vec::new(),
        }
    }
}

/// Try parsing an instant from several common representations.
pub fn parse_instant(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc());
    }
    for fmt in &["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y", "%d-%m-%Y", "%d.%m.%Y", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
        }
    }
    None
}

/// Deserializers that swallow malformed values instead of failing the
/// whole record.
mod lenient {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use super::Priority;

    pub fn instant<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<Value> = Option::deserialize(deserializer)?;
        Ok(match raw {
            Some(Value::String(s)) => super::parse_instant(&s),
            _ => None,
        })
    }

    pub fn priority<'de, D>(deserializer: D) -> Result<Option<Priority>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(Priority::parse))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parse_instant_accepts_rfc3339_and_plain_dates() {
        let dt = parse_instant("2024-03-15T08:30:00Z").unwrap();
        assert_eq!(dt.hour(), 8);

        let d = parse_instant("2024-03-15").unwrap();
        assert_eq!(d.date_naive(), NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());

        let slash = parse_instant("15/03/2024").unwrap();
        assert_eq!(slash.date_naive(), d.date_naive());
    }

    #[test]
    fn parse_instant_rejects_garbage() {
        assert!(parse_instant("not a date").is_none());
        assert!(parse_instant("").is_none());
    }

    #[test]
    fn task_decodes_with_lenient_fields() {
        let json = r#"{
            "id": "6f9619ff-8b86-d011-b42d-00c04fc964ff",
            "title": "Write report",
            "status": "In Progress",
            "priority": "HIGH",
            "createdTime": "2024-03-15T08:30:00Z",
            "dueDate": "definitely not a date",
            "lastEditedTime": null
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.priority, Some(Priority::High));
        assert!(task.created_time.is_some());
        assert!(task.due_date.is_none());
        assert!(task.last_edited_time.is_none());
        assert!(task.subtasks.is_empty());
    }

    #[test]
    fn subtask_accepts_name_alias() {
        let sub: Subtask = serde_json::from_str(r#"{"name": "Draft outline"}"#).unwrap();
        assert_eq!(sub.title, "Draft outline");
    }

    #[test]
    fn unknown_priority_decodes_to_none() {
        let json = r#"{
            "id": "6f9619ff-8b86-d011-b42d-00c04fc964ff",
            "title": "t",
            "priority": "P1"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.priority, None);
    }
}
