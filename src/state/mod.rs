//! State Management
//!
//! Global snapshot cache and pure view helpers.

pub mod global;

pub use global::{provide_app_state, AppState, Assignment, Course, Settings, Snapshot, Stats};
