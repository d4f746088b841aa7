//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models to
//! maintain separation between the data layer and business logic layer.

pub mod task;
