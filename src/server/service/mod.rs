//! Service layer for business logic and orchestration.
//!
//! This module sits between the controller (API) layer and the data (repository) layer.
//! Services implement business rules, work with domain models rather than DTOs or entity
//! models, and translate missing records into domain errors.

pub mod task;
