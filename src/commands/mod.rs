//! Command implementations for grimoire

pub mod clusters;
pub mod dispatch;
pub mod duplicates;
pub mod format;
pub mod organize;
pub mod rank;
pub mod score;
pub mod tags;
