//! Paths ("ways"): five fixed polylines of scored vertices.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data::geometry::Point2D;

/// Number of path slots available for the lifetime of a session.
pub const PATH_COUNT: u8 = 5;

/// Identifier of one of the fixed path slots, always in `1..=PATH_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PathId(u8);

impl PathId {
    /// Returns `None` for ids outside `1..=PATH_COUNT`.
    pub fn new(id: u32) -> Option<Self> {
        if (1..=PATH_COUNT as u32).contains(&id) {
            Some(PathId(id as u8))
        } else {
            None
        }
    }

    pub fn get(self) -> u32 {
        self.0 as u32
    }

    /// All path ids in ascending order.
    pub fn all() -> impl Iterator<Item = PathId> {
        (1..=PATH_COUNT).map(PathId)
    }

    fn index(self) -> usize {
        self.0 as usize - 1
    }
}

impl TryFrom<u32> for PathId {
    type Error = String;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        PathId::new(id).ok_or_else(|| format!("path id {id} is outside 1..={PATH_COUNT}"))
    }
}

impl From<PathId> for u32 {
    fn from(id: PathId) -> Self {
        id.get()
    }
}

impl fmt::Display for PathId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Classification of a vertex after a scoring pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    /// No scoring pass has run (gray).
    #[default]
    Unset,
    /// A scatter point lies within threshold of the vertex itself (blue).
    Contact,
    /// Accumulated segment score reached the align threshold (green).
    Aligned,
    /// Scored, but below the align threshold (red).
    Unaligned,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Unset => "Unset",
            Status::Contact => "Contact",
            Status::Aligned => "Aligned",
            Status::Unaligned => "Unaligned",
        };
        f.write_str(s)
    }
}

/// One point of a path together with its cached score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathVertex {
    pub x: f64,
    pub y: f64,
    /// 1-based position within the path.
    pub seq: u32,
    pub path_id: PathId,
    /// Score of the last scoring pass, 0 until one runs.
    #[serde(with = "crate::data::scoring::weight_serde")]
    pub weight: f64,
    pub status: Status,
}

impl PathVertex {
    pub fn pos(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    /// Drop the cached score.
    pub fn clear_score(&mut self) {
        self.weight = 0.0;
        self.status = Status::Unset;
    }
}

/// An ordered polyline. Vertices are appended and removed at the end only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub id: PathId,
    pub vertices: Vec<PathVertex>,
}

impl Path {
    pub fn new(id: PathId) -> Self {
        Self {
            id,
            vertices: Vec::new(),
        }
    }

    /// Append a vertex and return its `seq`.
    pub fn push(&mut self, x: f64, y: f64) -> u32 {
        let seq = self.vertices.len() as u32 + 1;
        self.vertices.push(PathVertex {
            x,
            y,
            seq,
            path_id: self.id,
            weight: 0.0,
            status: Status::Unset,
        });
        seq
    }

    /// Remove the last vertex. Returns `None` when empty.
    pub fn pop(&mut self) -> Option<PathVertex> {
        let removed = self.vertices.pop();
        if removed.is_some() {
            for (idx, v) in self.vertices.iter_mut().enumerate() {
                v.seq = idx as u32 + 1;
            }
        }
        removed
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn clear_scores(&mut self) {
        self.vertices.iter_mut().for_each(PathVertex::clear_score);
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex positions in order.
    pub fn positions(&self) -> Vec<Point2D> {
        self.vertices.iter().map(PathVertex::pos).collect()
    }
}

/// The fixed set of paths, indexed by [`PathId`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paths {
    paths: Vec<Path>,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            paths: PathId::all().map(Path::new).collect(),
        }
    }
}

impl Paths {
    pub fn get(&self, id: PathId) -> &Path {
        &self.paths[id.index()]
    }

    pub fn get_mut(&mut self, id: PathId) -> &mut Path {
        &mut self.paths[id.index()]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Path> {
        self.paths.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Path> {
        self.paths.iter_mut()
    }

    pub fn clear_scores(&mut self) {
        self.paths.iter_mut().for_each(Path::clear_scores);
    }
}
