//! Pages
//!
//! Top-level page components for each route.

pub mod assignments;
pub mod courses;
pub mod dashboard;
pub mod notifications;
pub mod schedule;
pub mod settings;
pub mod workload;

pub use assignments::Assignments;
pub use courses::Courses;
pub use dashboard::Dashboard;
pub use notifications::Notifications;
pub use schedule::Schedule;
pub use settings::Settings;
pub use workload::Workload;
