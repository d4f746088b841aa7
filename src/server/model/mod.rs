//! Domain models and operation parameters used inside the server.

pub mod task;
