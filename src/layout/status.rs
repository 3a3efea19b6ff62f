use crate::model::ColorToken;

/// Map a status string and completion flag to a bar color. Total and
/// pure: a set completion flag always wins, and unrecognized statuses
/// land in the default category.
pub fn status_color(status: Option<&str>, completed: bool) -> ColorToken {
    if completed {
        return ColorToken::Green;
    }
    match status.unwrap_or("").trim().to_lowercase().as_str() {
        "in progress" | "doing" => ColorToken::Blue,
        "done" | "completed" => ColorToken::Green,
        "blocked" | "stuck" => ColorToken::Red,
        "to do" | "todo" | "not started" => ColorToken::Gray,
        _ => ColorToken::Purple,
    }
}

/// Rough percentage estimate for tooltips, derived from status alone.
pub fn status_progress(status: Option<&str>, completed: bool) -> u8 {
    if completed {
        return 100;
    }
    match status.unwrap_or("").trim().to_lowercase().as_str() {
        "done" | "completed" => 100,
        "in progress" | "doing" => 50,
        _ => 0,
    }
}
