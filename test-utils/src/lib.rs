//! Task API Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the task
//! API. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Factories inserting entities with unique defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_task_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_task_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let task = factory::create_task(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
