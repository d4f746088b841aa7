//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible, unique defaults, reducing boilerplate in
//! tests. Each entity has its own factory module with both a `Factory` struct for
//! customization and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let task = factory::create_task(&db).await?;
//!
//! // Using builder pattern for customization
//! let task = factory::task::TaskFactory::new(&db)
//!     .title("Buy milk")
//!     .completed(true)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod task;

pub use task::create_task;
