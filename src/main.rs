//! CourseSync Dashboard
//!
//! Browser client for the CourseSync course-management API, built with
//! Leptos (WASM).
//!
//! # Features
//!
//! - Course ingestion from pasted text, URLs, or PDF uploads
//! - Assignment tracking with inline progress updates
//! - Workload analysis and study-schedule views
//! - Smart notifications and calendar export
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All syllabus parsing, workload scoring, scheduling and
//! notification logic lives behind the REST API; this crate renders the
//! returned snapshots and posts user actions back.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
