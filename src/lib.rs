//! SiteForge API Library
//!
//! Multi-agent website orchestration: a coordinator decomposes incoming
//! tasks into ordered subtasks, routes each to the best-suited specialist
//! worker by capability score, and records all cross-worker communication.
//! The HTTP layer in [`api`] exposes the orchestrator over a small JSON API.

pub mod agents;
pub mod api;
