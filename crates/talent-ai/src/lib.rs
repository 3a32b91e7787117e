//! Core library for the talent-ai hiring service.
//!
//! The `workflows::hiring` module owns the deterministic scoring rubric, the
//! capacity-bounded selection set, and the ranking pipeline that orders a
//! candidate pool against the current selection state. Transport wiring lives
//! in the `talent-ai-api` service crate.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
