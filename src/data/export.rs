//! Read-only snapshots of a session and their text renderings.
//!
//! Used by the "Save" action (which logs the JSON form) and by the coordinate
//! list, which shows the same rows as [`write_coordinates_csv`].

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::data::paths::{Path, PathId, Status};
use crate::data::points::ScatterPoint;
use crate::data::scoring::{format_weight, ScoringParams};
use crate::data::session::{Session, Target};
use crate::error::Result;

/// Everything a redraw or an export needs, detached from the live session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub taken_at: DateTime<Utc>,
    pub target: Target,
    pub scoring: Option<ScoringParams>,
    pub scatter_points: Vec<ScatterPoint>,
    pub paths: Vec<Path>,
}

impl SessionSnapshot {
    pub fn capture(session: &Session) -> Self {
        Self {
            taken_at: Utc::now(),
            target: session.target(),
            scoring: session.last_run().copied(),
            scatter_points: session.scatter_points().as_slice().to_vec(),
            paths: session.paths().iter().cloned().collect(),
        }
    }
}

/// Who a coordinate row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOwner {
    Scatter,
    Path(PathId),
}

/// One line of the coordinate list.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateRow {
    pub owner: RowOwner,
    pub seq: u32,
    pub x: f64,
    pub y: f64,
    /// Only set for path vertices.
    pub weight: Option<f64>,
    pub status: Option<Status>,
}

impl CoordinateRow {
    /// Short label as drawn on the canvas, e.g. `M-2` or `W1-3`.
    pub fn label(&self) -> String {
        match self.owner {
            RowOwner::Scatter => format!("M-{}", self.seq),
            RowOwner::Path(id) => format!("W{}-{}", id, self.seq),
        }
    }
}

/// Scatter points first, then every path in id order.
pub fn coordinate_rows(snapshot: &SessionSnapshot) -> Vec<CoordinateRow> {
    let scatter = snapshot.scatter_points.iter().map(|p| CoordinateRow {
        owner: RowOwner::Scatter,
        seq: p.seq,
        x: p.x,
        y: p.y,
        weight: None,
        status: None,
    });
    let vertices = snapshot.paths.iter().flat_map(|path| {
        path.vertices.iter().map(|v| CoordinateRow {
            owner: RowOwner::Path(v.path_id),
            seq: v.seq,
            x: v.x,
            y: v.y,
            weight: Some(v.weight),
            status: Some(v.status),
        })
    });
    scatter.chain(vertices).collect()
}

/// Pretty JSON of the snapshot.
pub fn snapshot_to_json(snapshot: &SessionSnapshot) -> Result<String> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

/// Write the coordinate rows as CSV.
pub fn write_coordinates_csv<W: Write>(mut w: W, snapshot: &SessionSnapshot) -> Result<()> {
    writeln!(w, "label,x,y,weight,status")?;
    for row in coordinate_rows(snapshot) {
        let weight = row.weight.map(format_weight).unwrap_or_default();
        let status = row.status.map(|s| s.to_string()).unwrap_or_default();
        writeln!(w, "{},{},{},{},{}", row.label(), row.x, row.y, weight, status)?;
    }
    Ok(())
}
