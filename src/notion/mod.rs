//! Notion, the task store
//!
//! - `client` - REST client for the database query and page endpoints
//! - `models` - task records and query outcomes
//! - `properties` - request bodies in the destination database's schema

pub mod client;
pub mod models;
pub mod properties;

pub use client::{NotionClient, NOTION_VERSION};
pub use models::{NewTask, TitleLookup};
