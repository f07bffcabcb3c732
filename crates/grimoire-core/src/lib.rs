//! Grimoire Core Library
//!
//! Idea organization engine for the Grimoire magic-performance assistant:
//! clusters, duplicate candidates, tag suggestions and priority scores over a
//! snapshot of a user's saved ideas.

pub mod cluster;
pub mod config;
pub mod error;
pub mod format;
pub mod idea;
pub mod library;
pub mod logging;
pub mod organize;
pub mod priority;
pub mod records;
pub mod similarity;
pub mod tags;
pub mod text;

pub use organize::{organize, OrganizationResult, Organizer};
