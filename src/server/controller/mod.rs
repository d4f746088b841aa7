//! HTTP request handlers.

pub mod task;
