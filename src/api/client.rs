//! HTTP API Client
//!
//! Functions for communicating with the CourseSync REST API. One async
//! function per endpoint; no retries, timeouts, or request deduplication.

use gloo_net::http::{Request, Response};
use std::collections::HashMap;

use crate::state::global::{AppState, Settings, Snapshot};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "/api";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("coursesync_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item("coursesync_api_url", url);
        }
    }
}

// ============ Response Types ============

/// Error body shape shared by every endpoint. FastAPI-style handlers use
/// `detail`, application-level failures use `error`.
#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    detail: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Outcome body of the mutation endpoints. A 2xx response can still carry
/// `success: false` with an application error message.
#[derive(Debug, serde::Deserialize)]
pub struct MutationOutcome {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct WorkloadAnalysis {
    #[serde(default)]
    pub total_hours: f64,
    #[serde(default)]
    pub risk_weeks: Vec<serde_json::Value>,
    #[serde(default)]
    pub priority_assignments: Vec<serde_json::Value>,
    /// Hours per week label, e.g. `"Week 3" -> 18.5`
    #[serde(default)]
    pub weekly_breakdown: HashMap<String, f64>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

#[derive(Debug, serde::Deserialize)]
pub struct WorkloadResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub analysis: Option<WorkloadAnalysis>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct StudyTask {
    #[serde(default)]
    pub task: String,
    #[serde(default)]
    pub assignment: String,
    #[serde(default)]
    pub hours: f64,
    #[serde(default)]
    pub priority: Option<String>,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct StudySchedule {
    /// Tasks keyed by `YYYY-MM-DD` date
    #[serde(default)]
    pub daily_schedule: HashMap<String, Vec<StudyTask>>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

#[derive(Debug, serde::Deserialize)]
pub struct ScheduleResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub schedule: Option<StudySchedule>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct NotificationItem {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub send_at: Option<String>,
    #[serde(default)]
    pub urgency: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
pub struct NotificationsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub notifications: Option<Vec<NotificationItem>>,
    #[serde(default)]
    pub error: Option<String>,
}

// ============ API Functions ============

/// Extract the server's error message from a non-2xx response.
async fn error_message(response: Response) -> String {
    match response.json::<ApiErrorBody>().await {
        Ok(body) => body
            .detail
            .or(body.error)
            .unwrap_or_else(|| "Request failed".to_string()),
        Err(_) => "Request failed".to_string(),
    }
}

/// Fetch the full application snapshot
pub async fn fetch_state() -> Result<Snapshot, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/state", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the snapshot and replace the client cache wholesale.
///
/// Called after every successful mutation. A failed refetch leaves the
/// previous snapshot in place; the caller surfaces the error.
pub async fn refresh_state(state: &AppState) -> Result<(), String> {
    let snapshot = fetch_state().await?;
    state.apply_snapshot(snapshot);
    Ok(())
}

/// Add a course from pasted syllabus text
pub async fn add_syllabus_text(
    syllabus_text: &str,
    semester_start: &str,
) -> Result<MutationOutcome, String> {
    #[derive(serde::Serialize)]
    struct SyllabusTextRequest {
        syllabus_text: String,
        semester_start: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/syllabus/text", api_base))
        .json(&SyllabusTextRequest {
            syllabus_text: syllabus_text.to_string(),
            semester_start: semester_start.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Add a course by scraping a course page URL
pub async fn add_syllabus_url(url: &str, semester_start: &str) -> Result<MutationOutcome, String> {
    #[derive(serde::Serialize)]
    struct SyllabusUrlRequest {
        url: String,
        semester_start: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/syllabus/url", api_base))
        .json(&SyllabusUrlRequest {
            url: url.to_string(),
            semester_start: semester_start.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Add a course from an uploaded syllabus PDF.
///
/// Multipart upload: the browser supplies the boundary content-type, so no
/// JSON header is set here.
pub async fn add_syllabus_pdf(
    file: &web_sys::File,
    semester_start: &str,
) -> Result<MutationOutcome, String> {
    let form = web_sys::FormData::new().map_err(|e| format!("Form build error: {:?}", e))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| format!("Form build error: {:?}", e))?;

    let api_base = get_api_base();

    let response = Request::post(&format!(
        "{}/syllabus/pdf?semester_start={}",
        api_base, semester_start
    ))
    .body(form)
    .map_err(|e| format!("Request build error: {}", e))?
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Delete a course by its position in the snapshot
pub async fn delete_course(index: usize) -> Result<MutationOutcome, String> {
    let api_base = get_api_base();

    let response = Request::delete(&format!("{}/course/{}", api_base, index))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Update an assignment's progress by its position in the snapshot
pub async fn update_progress(
    assignment_index: usize,
    progress: i64,
) -> Result<MutationOutcome, String> {
    #[derive(serde::Serialize)]
    struct ProgressRequest {
        assignment_index: usize,
        progress: i64,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/progress", api_base))
        .json(&ProgressRequest {
            assignment_index,
            progress,
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the server-computed workload analysis
pub async fn fetch_workload() -> Result<WorkloadResponse, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/workload", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Generate a study schedule for the given daily study budget
pub async fn fetch_schedule(hours_per_day: i64) -> Result<ScheduleResponse, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!(
        "{}/schedule?hours_per_day={}",
        api_base, hours_per_day
    ))
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch pending smart notifications
pub async fn fetch_notifications() -> Result<NotificationsResponse, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/notifications", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch current planner settings
pub async fn fetch_settings() -> Result<Settings, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/settings", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Save planner settings (full replacement)
pub async fn save_settings(settings: &Settings) -> Result<(), String> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/settings", api_base))
        .json(settings)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    Ok(())
}

/// Download the assignment calendar as raw `.ics` bytes
pub async fn download_calendar() -> Result<Vec<u8>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/calendar", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .binary()
        .await
        .map_err(|e| format!("Download error: {}", e))
}
