use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::task::{Subtask, Task};

/// Identifies a node in the rendered hierarchy by its position in the
/// layout: group index, then task index within the group, then subtask
/// index within the task. Positions are stable for a given input order,
/// so toggle state keyed by `TrackId` survives recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum TrackId {
    Project(usize),
    Task(usize, usize),
    Subtask(usize, usize, usize),
}

impl TrackId {
    /// Level default for open/closed state: projects start expanded,
    /// tasks and subtasks start collapsed.
    pub fn default_open(self) -> bool {
        matches!(self, TrackId::Project(_))
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackId::Project(g) => write!(f, "project-{g}"),
            TrackId::Task(g, t) => write!(f, "task-{g}-{t}"),
            TrackId::Subtask(g, t, s) => write!(f, "subtask-{g}-{t}-{s}"),
        }
    }
}

/// A track id string from the host did not match any known shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a valid track id: {0:?}")]
pub struct ParseTrackIdError(pub String);

impl FromStr for TrackId {
    type Err = ParseTrackIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseTrackIdError(s.to_string());
        let (kind, rest) = s.split_once('-').ok_or_else(err)?;
        let indices: Vec<usize> = rest
            .split('-')
            .map(str::parse)
            .collect::<Result<_, _>>()
            .map_err(|_| err())?;
        match (kind, indices.as_slice()) {
            ("project", [g]) => Ok(TrackId::Project(*g)),
            ("task", [g, t]) => Ok(TrackId::Task(*g, *t)),
            ("subtask", [g, t, sub]) => Ok(TrackId::Subtask(*g, *t, *sub)),
            _ => Err(err()),
        }
    }
}

impl From<TrackId> for String {
    fn from(id: TrackId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for TrackId {
    type Error = ParseTrackIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// One of the fixed categorical bar colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    Blue,
    Green,
    Red,
    Gray,
    Purple,
    /// Muted tone reserved for subtask bars.
    Neutral,
}

impl ColorToken {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorToken::Blue => "blue",
            ColorToken::Green => "green",
            ColorToken::Red => "red",
            ColorToken::Gray => "gray",
            ColorToken::Purple => "purple",
            ColorToken::Neutral => "neutral",
        }
    }
}

/// Visual style of an element bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementStyle {
    pub color: ColorToken,
    /// Accented border for high-priority tasks.
    pub emphasized: bool,
    /// Subtask bars render slimmer and dimmer than task bars.
    pub muted: bool,
}

/// Back-reference from a rendered bar to the domain record it came from,
/// captured at build time so the host never re-searches its collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ElementSource {
    Task { task: Task },
    Subtask { parent_id: Uuid, subtask: Subtask },
}

/// A single time-boxed bar attached to a track.
///
/// `end` is always strictly after `start`; the builder synthesizes a
/// duration when the source dates are inverted or missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: String,
    pub title: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub style: ElementStyle,
    pub tooltip: String,
    pub source: ElementSource,
}

/// A node in the rendered hierarchy. Each track exclusively owns its
/// elements and children; project tracks carry no element, task and
/// subtask tracks carry exactly one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: TrackId,
    pub title: String,
    pub has_children: bool,
    pub is_open: bool,
    pub elements: Vec<Element>,
    pub children: Vec<Track>,
}
