#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited

pub mod error;
pub mod types;
pub mod curve;
pub mod cards;
pub mod rng;
pub mod brief;
pub mod persist;

pub mod engine {
    pub mod draw;
    pub mod level;
}

// Re-exports: stable minimal API surface for external callers
pub use crate::brief::Brief;
pub use crate::cards::{load_catalog_from_json, Card, Catalog};
pub use crate::curve::LevelCurve;
pub use crate::engine::draw::{draw_all, reroll, DrawResult};
pub use crate::engine::level::{
    add_points, compute_stats, deduct_points, level, threshold, UserProgress, UserStats,
};
pub use crate::error::{CatalogError, EngineError, PersistError};
pub use crate::persist::{load_snapshot, save_snapshot, ProgressStore};
pub use crate::rng::{rng_for_draw, rng_from_entropy};
pub use crate::types::{Category, CategoryStyle, Difficulty};
