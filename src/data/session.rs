//! In-memory session state: scatter points, the five paths, and click routing.
//!
//! [`Session`] is the boundary the input collaborator talks to. Every operation
//! runs to completion and leaves the state fully derived, so a redraw only needs
//! to read it back.

use serde::{Deserialize, Serialize};

use crate::data::export::SessionSnapshot;
use crate::data::geometry::Point2D;
use crate::data::paths::{Path, PathId, Paths};
use crate::data::points::ScatterPoints;
use crate::data::scoring::{score_all, ScoringParams};

/// Where new clicks go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    /// Clicks add scatter points. `over` keeps a path on screen while doing so.
    Scatter { over: Option<PathId> },
    /// Clicks add vertices to this path.
    Path(PathId),
}

impl Default for Target {
    fn default() -> Self {
        Target::Scatter { over: None }
    }
}

impl Target {
    /// Plain scatter target with no path on screen.
    pub const SCATTER: Target = Target::Scatter { over: None };

    /// The path that is displayed for this target, if any.
    pub fn viewed_path(self) -> Option<PathId> {
        match self {
            Target::Scatter { over } => over,
            Target::Path(id) => Some(id),
        }
    }

    pub fn is_scatter(self) -> bool {
        matches!(self, Target::Scatter { .. })
    }

    /// Force (or release) scatter routing while keeping the viewed path.
    pub fn with_scatter_forced(self, forced: bool) -> Target {
        match (self, forced) {
            (Target::Path(id), true) => Target::Scatter { over: Some(id) },
            (Target::Scatter { over: Some(id) }, false) => Target::Path(id),
            (t, _) => t,
        }
    }

    /// Target after picking `view` in the selector (`None` = scatter points).
    /// Forced scatter routing carries over to the newly viewed path.
    pub fn select(self, view: Option<PathId>) -> Target {
        match view {
            None => Target::SCATTER,
            Some(id) if self.is_scatter_forced() => Target::Scatter { over: Some(id) },
            Some(id) => Target::Path(id),
        }
    }

    /// Whether scatter routing is forced on top of a selected path.
    pub fn is_scatter_forced(self) -> bool {
        matches!(self, Target::Scatter { over: Some(_) })
    }
}

/// Full editable state of one verification session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    scatter: ScatterPoints,
    paths: Paths,
    target: Target,
    last_run: Option<ScoringParams>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Read access ─────────────────────────────────────────────────────

    pub fn scatter_points(&self) -> &ScatterPoints {
        &self.scatter
    }

    pub fn paths(&self) -> &Paths {
        &self.paths
    }

    pub fn path(&self, id: PathId) -> &Path {
        self.paths.get(id)
    }

    pub fn target(&self) -> Target {
        self.target
    }

    /// Parameters of the scoring run currently shown, if any.
    pub fn last_run(&self) -> Option<&ScoringParams> {
        self.last_run.as_ref()
    }

    pub fn has_run(&self) -> bool {
        self.last_run.is_some()
    }

    /// Whether `undo_last(target)` would remove anything.
    pub fn can_undo(&self, target: Target) -> bool {
        match target {
            Target::Scatter { .. } => !self.scatter.is_empty(),
            Target::Path(id) => !self.paths.get(id).is_empty(),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(self)
    }

    // ── Mutations ───────────────────────────────────────────────────────

    pub fn set_target(&mut self, target: Target) {
        self.target = target;
    }

    /// Add a point at the active target. Returns `false` when the point was ignored.
    pub fn add_point(&mut self, x: f64, y: f64) -> bool {
        match self.target {
            Target::Scatter { .. } => self.add_scatter_point(x, y),
            Target::Path(id) => self.push_vertex(id, x, y),
        }
    }

    /// Returns `false` for non-finite coordinates, which are ignored.
    pub fn add_scatter_point(&mut self, x: f64, y: f64) -> bool {
        if !accept_coords(x, y) {
            return false;
        }
        let seq = self.scatter.push(x, y);
        tracing::debug!(seq, x, y, "added scatter point");
        self.rescore();
        true
    }

    /// Append a vertex to the path with the raw id `path_id`.
    /// Unknown ids and non-finite coordinates are ignored and return `false`.
    pub fn add_path_vertex(&mut self, path_id: u32, x: f64, y: f64) -> bool {
        match PathId::new(path_id) {
            Some(id) => self.push_vertex(id, x, y),
            None => {
                tracing::debug!(path_id, "ignoring vertex for unknown path");
                false
            }
        }
    }

    /// Remove the most recent element of `target`. Returns `false` when it was empty.
    pub fn undo_last(&mut self, target: Target) -> bool {
        let removed = match target {
            Target::Scatter { .. } => self.scatter.pop().is_some(),
            Target::Path(id) => self.paths.get_mut(id).pop().is_some(),
        };
        if removed {
            tracing::debug!(?target, "undid last point");
            self.rescore();
        }
        removed
    }

    /// Remove every element of `target`. Returns `false` when it was already empty.
    pub fn reset_target(&mut self, target: Target) -> bool {
        if !self.can_undo(target) {
            return false;
        }
        match target {
            Target::Scatter { .. } => self.scatter.clear(),
            Target::Path(id) => self.paths.get_mut(id).clear(),
        }
        tracing::debug!(?target, "reset target");
        self.rescore();
        true
    }

    /// Score every path and keep doing so after each change until colors are reset.
    pub fn run_scoring(&mut self, params: ScoringParams) {
        self.last_run = Some(params);
        self.rescore();
    }

    /// Put every vertex back to `Unset` / 0 and stop live re-scoring.
    pub fn reset_colors(&mut self) {
        self.last_run = None;
        self.paths.clear_scores();
    }

    fn push_vertex(&mut self, id: PathId, x: f64, y: f64) -> bool {
        if !accept_coords(x, y) {
            return false;
        }
        let seq = self.paths.get_mut(id).push(x, y);
        tracing::debug!(path = %id, seq, x, y, "added path vertex");
        self.rescore();
        true
    }

    fn rescore(&mut self) {
        if let Some(params) = self.last_run {
            score_all(&mut self.paths, self.scatter.as_slice(), &params);
        }
    }
}

fn accept_coords(x: f64, y: f64) -> bool {
    let ok = Point2D::new(x, y).is_finite();
    if !ok {
        tracing::warn!(x, y, "ignoring point with non-finite coordinates");
    }
    ok
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forcing_scatter_keeps_viewed_path() {
        let id = PathId::new(3).unwrap();
        let forced = Target::Path(id).with_scatter_forced(true);
        assert_eq!(forced, Target::Scatter { over: Some(id) });
        assert_eq!(forced.viewed_path(), Some(id));
        assert_eq!(forced.with_scatter_forced(false), Target::Path(id));
        assert_eq!(Target::SCATTER.with_scatter_forced(false), Target::SCATTER);
    }

    #[test]
    fn non_finite_points_are_dropped() {
        let mut s = Session::new();
        assert!(!s.add_scatter_point(f64::NAN, 1.0));
        assert!(!s.add_path_vertex(1, 0.0, f64::INFINITY));
        assert!(s.scatter_points().is_empty());
        assert!(s.path(PathId::new(1).unwrap()).is_empty());
    }
}
