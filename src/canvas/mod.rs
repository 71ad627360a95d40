//! Canvas LMS, the assignment provider

pub mod client;
pub mod models;

pub use client::CanvasClient;
pub use models::{Assignment, Course};
