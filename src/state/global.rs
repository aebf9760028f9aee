//! Global Application State
//!
//! Reactive snapshot cache using Leptos signals. The server owns all data;
//! the client keeps the last full snapshot and replaces it wholesale after
//! every write.

use chrono::NaiveDate;
use leptos::*;

/// Global application state provided to all components
#[derive(Clone)]
pub struct AppState {
    /// Courses from the last snapshot
    pub courses: RwSignal<Vec<Course>>,
    /// Flat assignment list from the last snapshot
    pub assignments: RwSignal<Vec<Assignment>>,
    /// Planner settings from the last snapshot
    pub settings: RwSignal<Settings>,
    /// Server-computed counters
    pub stats: RwSignal<Stats>,
    /// Global loading state (advisory overlay, not a lock)
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    /// When the snapshot was last replaced (epoch millis)
    pub last_refresh: RwSignal<Option<i64>>,
}

/// A course as returned by the syllabus-ingest endpoints
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Course {
    #[serde(default)]
    pub course_name: String,
    #[serde(default)]
    pub course_code: String,
    #[serde(default)]
    pub instructor: String,
    #[serde(default)]
    pub assignments: Vec<Assignment>,
}

/// A single assignment. There is no stable ID on the wire; the
/// `(name, course)` pair is the only identity the API offers.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Assignment {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    pub course_code: String,
    /// Due date in `YYYY-MM-DD` form
    #[serde(default)]
    pub due_date: String,
    /// Grade weight in percent
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub estimated_hours: f64,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Completion in percent, 0-100
    #[serde(default)]
    pub progress: f64,
}

impl Assignment {
    /// Due date parsed from the wire format, if well-formed.
    pub fn due(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.due_date, "%Y-%m-%d").ok()
    }
}

/// Planner settings, replaced wholesale on save. Server-side extras such as
/// `calendar_filename` are ignored on deserialize and never sent back.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Settings {
    #[serde(default = "defaults::hours_per_day")]
    pub hours_per_day: i64,
    #[serde(default = "defaults::risk_threshold")]
    pub risk_threshold: i64,
    #[serde(default = "defaults::notification_lead_days")]
    pub notification_lead_days: i64,
    #[serde(default)]
    pub email_enabled: bool,
    #[serde(default)]
    pub email_to: String,
    #[serde(default)]
    pub email_schedule_enabled: bool,
}

mod defaults {
    pub fn hours_per_day() -> i64 {
        4
    }

    pub fn risk_threshold() -> i64 {
        20
    }

    pub fn notification_lead_days() -> i64 {
        3
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hours_per_day: defaults::hours_per_day(),
            risk_threshold: defaults::risk_threshold(),
            notification_lead_days: defaults::notification_lead_days(),
            email_enabled: false,
            email_to: String::new(),
            email_schedule_enabled: false,
        }
    }
}

/// Server-computed counters shown on the dashboard
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub total_courses: usize,
    #[serde(default)]
    pub total_assignments: usize,
    #[serde(default)]
    pub completed_assignments: usize,
}

/// The full-state payload of `GET /state`
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub assignments: Vec<Assignment>,
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub stats: Stats,
}

/// Provide global state to the component tree
pub fn provide_app_state() {
    let state = AppState {
        courses: create_rw_signal(Vec::new()),
        assignments: create_rw_signal(Vec::new()),
        settings: create_rw_signal(Settings::default()),
        stats: create_rw_signal(Stats::default()),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
        last_refresh: create_rw_signal(None),
    };

    provide_context(state);
}

impl AppState {
    /// Replace the cached snapshot wholesale. There is deliberately no merge
    /// path: partial updates would need identity the API does not provide.
    pub fn apply_snapshot(&self, snapshot: Snapshot) {
        self.courses.set(snapshot.courses);
        self.assignments.set(snapshot.assignments);
        self.settings.set(snapshot.settings);
        self.stats.set(snapshot.stats);
        self.last_refresh
            .set(Some(chrono::Utc::now().timestamp_millis()));
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }

    /// Clear error message
    pub fn clear_error(&self) {
        self.error.set(None);
    }
}

/// Assignments due within `[today, today + days)` and not yet complete,
/// sorted by due date ascending. Assignments with unparseable due dates are
/// excluded.
pub fn upcoming_assignments(
    assignments: &[Assignment],
    today: NaiveDate,
    days: i64,
) -> Vec<Assignment> {
    let horizon = today + chrono::Duration::days(days);

    let mut upcoming: Vec<Assignment> = assignments
        .iter()
        .filter(|a| a.progress < 100.0)
        .filter(|a| a.due().map(|d| d >= today && d < horizon).unwrap_or(false))
        .cloned()
        .collect();

    upcoming.sort_by_key(Assignment::due);
    upcoming
}

/// Whole days between today and the due date.
pub fn days_left(due: NaiveDate, today: NaiveDate) -> i64 {
    (due - today).num_days()
}

/// Clamp a raw progress entry to the 0-100 range the API expects.
pub fn clamp_progress(raw: f64) -> i64 {
    raw.clamp(0.0, 100.0) as i64
}

/// Snapshot position of the first assignment matching the `(name, course)`
/// pair. The progress endpoint addresses assignments by this position, so a
/// duplicate pair routes the update to the first match.
pub fn assignment_position(assignments: &[Assignment], name: &str, course: &str) -> Option<usize> {
    assignments
        .iter()
        .position(|a| a.name == name && a.course == course)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment(name: &str, due: &str, progress: f64) -> Assignment {
        Assignment {
            name: name.to_string(),
            course: "CS 101".to_string(),
            due_date: due.to_string(),
            progress,
            ..Default::default()
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 1).unwrap()
    }

    #[test]
    fn upcoming_sorted_by_due_date() {
        let list = vec![
            assignment("Essay", "2025-10-05", 0.0),
            assignment("Quiz", "2025-10-02", 50.0),
        ];

        let upcoming = upcoming_assignments(&list, today(), 7);
        assert_eq!(upcoming.len(), 2);
        assert_eq!(upcoming[0].name, "Quiz");
        assert_eq!(upcoming[1].name, "Essay");
    }

    #[test]
    fn upcoming_excludes_completed_and_out_of_window() {
        let list = vec![
            assignment("Done", "2025-10-03", 100.0),
            assignment("Past", "2025-09-30", 0.0),
            // today + 7 sits outside the half-open window
            assignment("Far", "2025-10-08", 0.0),
            assignment("Today", "2025-10-01", 0.0),
            assignment("Mystery", "soon", 0.0),
        ];

        let upcoming = upcoming_assignments(&list, today(), 7);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].name, "Today");
    }

    #[test]
    fn days_left_counts_whole_days() {
        let due = NaiveDate::from_ymd_opt(2025, 10, 4).unwrap();
        assert_eq!(days_left(due, today()), 3);
        assert_eq!(days_left(today(), today()), 0);
    }

    #[test]
    fn progress_clamps_to_range() {
        assert_eq!(clamp_progress(150.0), 100);
        assert_eq!(clamp_progress(-5.0), 0);
        assert_eq!(clamp_progress(42.9), 42);
    }

    #[test]
    fn assignment_position_matches_first_pair() {
        let mut list = vec![
            assignment("Essay", "2025-10-05", 0.0),
            assignment("Essay", "2025-10-12", 0.0),
        ];
        list[1].course = "MATH 200".to_string();

        assert_eq!(assignment_position(&list, "Essay", "CS 101"), Some(0));
        assert_eq!(assignment_position(&list, "Essay", "MATH 200"), Some(1));
        assert_eq!(assignment_position(&list, "Essay", "BIO 110"), None);
    }

    #[test]
    fn settings_defaults_match_server_seed() {
        let settings = Settings::default();
        assert_eq!(settings.hours_per_day, 4);
        assert_eq!(settings.risk_threshold, 20);
        assert_eq!(settings.notification_lead_days, 3);
        assert!(!settings.email_enabled);
    }
}
