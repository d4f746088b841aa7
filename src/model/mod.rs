//! Request and response payloads exchanged over the REST interface.

pub mod api;
pub mod task;
