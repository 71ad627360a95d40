//! Abstraction layers for the remote services
//!
//! This module provides trait-based abstractions for the assignment provider
//! (Canvas) and the task store (Notion) so the sync driver can be exercised
//! against in-memory mocks.

pub mod provider;
pub mod store;

pub use provider::{AssignmentProvider, MockAssignmentProvider, ProviderCall};
pub use store::{MockTaskStore, StoreCall, TaskStore};
