//! User-placed scatter points.
//!
//! The collection behaves as a stack: points are appended with the next `seq`
//! and only the most recent one can be undone. `seq` always equals the 1-based
//! position in the collection.

use serde::{Deserialize, Serialize};

use crate::data::geometry::Point2D;

/// A reference point placed by the user, independent of any path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    /// 1-based insertion rank.
    pub seq: u32,
}

impl ScatterPoint {
    pub fn pos(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }
}

/// Ordered scatter point collection with gap-free sequence numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoints {
    points: Vec<ScatterPoint>,
}

impl ScatterPoints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point and return its `seq`.
    pub fn push(&mut self, x: f64, y: f64) -> u32 {
        let seq = self.points.len() as u32 + 1;
        self.points.push(ScatterPoint { x, y, seq });
        seq
    }

    /// Remove the most recent point. Returns `None` when empty.
    pub fn pop(&mut self) -> Option<ScatterPoint> {
        let removed = self.points.pop();
        if removed.is_some() {
            self.renumber();
        }
        removed
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn as_slice(&self) -> &[ScatterPoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScatterPoint> {
        self.points.iter()
    }

    fn renumber(&mut self) {
        for (idx, p) in self.points.iter_mut().enumerate() {
            p.seq = idx as u32 + 1;
        }
    }
}

impl<'a> IntoIterator for &'a ScatterPoints {
    type Item = &'a ScatterPoint;
    type IntoIter = std::slice::Iter<'a, ScatterPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
