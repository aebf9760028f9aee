//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod loading;
pub mod nav;
pub mod stat_card;
pub mod toast;

pub use loading::{Loading, LoadingOverlay};
pub use nav::Nav;
pub use stat_card::StatCard;
pub use toast::Toast;
