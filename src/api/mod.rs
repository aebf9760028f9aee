//! HTTP API
//!
//! Typed wrappers over the CourseSync REST endpoints.

pub mod client;

pub use client::*;
