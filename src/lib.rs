//! PointLogic crate root: re-exports and module wiring.
//!
//! PointLogic is a visual verification tool for a proximity-weighting
//! algorithm. The user places scatter points and up to five paths on a canvas;
//! a scoring pass then classifies every path vertex by how close the scatter
//! points come to it and to its adjacent segments.
//!
//! - `data`: geometry, point collections, the scoring engine and the session
//! - `controllers`: shared single-writer handle over a session
//! - `events`: change notifications emitted by the controller
//! - `config`: window and scoring configuration
//! - `app` / `panels`: the egui/eframe front end

pub mod app;
pub mod config;
pub mod controllers;
pub mod data;
pub mod error;
pub mod events;
pub mod panels;

pub use app::{run_pointlogic, PointLogicApp};
pub use config::{PointLogicConfig, ScoringConfig};
pub use controllers::SessionController;
pub use data::geometry::{closest_point_on_segment, segment_distance, squared_distance, Point2D};
pub use data::paths::{Path, PathId, PathVertex, Status};
pub use data::points::{ScatterPoint, ScatterPoints};
pub use data::scoring::{score_all, score_path, DampeningBands, ScoringParams};
pub use data::session::{Session, Target};
pub use error::{PointLogicError, Result};
pub use events::{EventKind, SessionEvent};
