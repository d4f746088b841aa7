//! SeaORM entity definitions for the task database schema.

pub mod prelude;

pub mod task;
