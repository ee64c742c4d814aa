//! Proximity scoring and classification of path vertices.
//!
//! For every vertex of a path the engine looks at the scatter points in three
//! stages:
//!
//! 1. **Contact**: a scatter point within `threshold` of the vertex marks it
//!    [`Status::Contact`] and adds the align threshold to its weight once. That
//!    point is not scored again against this vertex.
//! 2. **Claim exclusion** (optional): a scatter point within `threshold` of any
//!    *other* vertex of the path belongs to that vertex and is skipped here.
//! 3. **Segment projection**: each remaining point is projected onto the one or
//!    two segments adjacent to the vertex. A projection within `threshold`
//!    contributes `align_threshold * proj_len / seg_len`, where `proj_len` is
//!    measured from the projection to the far end of the segment, so points
//!    landing close to the vertex count more. The contribution is optionally
//!    damped by how well the movement from the previous scatter point lines up
//!    with the segment.
//!
//! Vertices that are not in contact end up [`Status::Aligned`] when their
//! weight reaches the align threshold and [`Status::Unaligned`] otherwise.

use serde::{Deserialize, Serialize};

use crate::data::geometry::{acute_angle_deg, closest_point_on_segment, distance, Point2D};
use crate::data::paths::{Path, Paths, Status};
use crate::data::points::ScatterPoint;

/// Angle bands for damping segment contributions by movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DampeningBands {
    /// Angles up to this many degrees keep the full contribution.
    pub full_deg: f64,
    /// Angles up to this many degrees are scaled by `partial`.
    pub partial_deg: f64,
    pub partial: f64,
    /// Factor for anything steeper than `partial_deg`.
    pub weak: f64,
}

impl Default for DampeningBands {
    fn default() -> Self {
        Self {
            full_deg: 30.0,
            partial_deg: 60.0,
            partial: 0.7,
            weak: 0.3,
        }
    }
}

impl DampeningBands {
    /// Multiplicative factor for an acute angle in degrees.
    pub fn factor(&self, angle_deg: f64) -> f64 {
        if angle_deg <= self.full_deg {
            1.0
        } else if angle_deg <= self.partial_deg {
            self.partial
        } else {
            self.weak
        }
    }
}

/// Parameters of one scoring pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringParams {
    /// Radius for direct contact and for projected contact.
    pub threshold: f64,
    /// Cutoff for [`Status::Aligned`], also the weight granted by a contact.
    #[serde(with = "weight_serde")]
    pub align_threshold: f64,
    /// Skip scatter points that are in contact with another vertex of the path.
    pub exclude_claimed_points: bool,
    /// Direction damping; `None` disables it.
    pub angular_dampening: Option<DampeningBands>,
}

impl ScoringParams {
    /// Parameters with claim exclusion and default direction damping enabled.
    pub fn new(threshold: f64, align_threshold: f64) -> Self {
        Self {
            threshold,
            align_threshold,
            exclude_claimed_points: true,
            angular_dampening: Some(DampeningBands::default()),
        }
    }

    pub fn with_claim_exclusion(mut self, enabled: bool) -> Self {
        self.exclude_claimed_points = enabled;
        self
    }

    pub fn with_dampening(mut self, bands: Option<DampeningBands>) -> Self {
        self.angular_dampening = bands;
        self
    }

    /// Inclusive radius test on a Euclidean distance.
    #[inline]
    fn within(&self, d: f64) -> bool {
        d <= self.threshold
    }
}

/// Score every vertex of `path` against `scatter` and cache the result on the vertex.
///
/// Rerunning with the same inputs writes the same values.
pub fn score_path(path: &mut Path, scatter: &[ScatterPoint], params: &ScoringParams) {
    let positions = path.positions();
    for (idx, vertex) in path.vertices.iter_mut().enumerate() {
        let (weight, status) = score_vertex(&positions, idx, scatter, params);
        vertex.weight = weight;
        vertex.status = status;
    }
    tracing::debug!(
        path = %path.id,
        vertices = path.vertices.len(),
        contact = count(path, Status::Contact),
        aligned = count(path, Status::Aligned),
        unaligned = count(path, Status::Unaligned),
        "scored path"
    );
}

/// Score every path.
pub fn score_all(paths: &mut Paths, scatter: &[ScatterPoint], params: &ScoringParams) {
    for path in paths.iter_mut() {
        score_path(path, scatter, params);
    }
}

/// Weight as shown next to a vertex: `∞` for an infinite weight, three decimals otherwise.
pub fn format_weight(weight: f64) -> String {
    if weight.is_infinite() {
        "∞".to_string()
    } else {
        format!("{weight:.3}")
    }
}

/// Serde adapter for weights: finite values as numbers, infinities as `"∞"` / `"-∞"`.
///
/// JSON has no infinity, and `serde_json` would otherwise write `null`.
pub mod weight_serde {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, ser: S) -> Result<S::Ok, S::Error> {
        if value.is_infinite() {
            ser.serialize_str(if *value > 0.0 { "∞" } else { "-∞" })
        } else {
            ser.serialize_f64(*value)
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Num(f64),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<f64, D::Error> {
        match Repr::deserialize(de)? {
            Repr::Num(v) => Ok(v),
            Repr::Text(s) => match s.as_str() {
                "∞" | "inf" => Ok(f64::INFINITY),
                "-∞" | "-inf" => Ok(f64::NEG_INFINITY),
                other => Err(serde::de::Error::custom(format!("invalid weight `{other}`"))),
            },
        }
    }
}

fn count(path: &Path, status: Status) -> usize {
    path.vertices.iter().filter(|v| v.status == status).count()
}

fn score_vertex(
    positions: &[Point2D],
    idx: usize,
    scatter: &[ScatterPoint],
    params: &ScoringParams,
) -> (f64, Status) {
    let p = positions[idx];
    let neighbors = [
        idx.checked_sub(1).map(|i| positions[i]),
        positions.get(idx + 1).copied(),
    ];

    let mut weight = 0.0;
    let mut contact = false;

    for mp in scatter {
        let m = mp.pos();

        if params.within(distance(m, p)) {
            if !contact {
                contact = true;
                weight += params.align_threshold;
            }
            continue;
        }

        if params.exclude_claimed_points
            && positions
                .iter()
                .enumerate()
                .any(|(j, q)| j != idx && params.within(distance(m, *q)))
        {
            continue;
        }

        for n in neighbors.into_iter().flatten() {
            let foot = closest_point_on_segment(m, p, n);
            if !params.within(distance(foot, m)) {
                continue;
            }
            let seg_len = distance(p, n);
            if seg_len == 0.0 {
                continue;
            }
            let share = distance(foot, n) / seg_len;
            if share == 0.0 {
                continue;
            }
            let factor = direction_factor(scatter, mp, p.to(n), params);
            weight += params.align_threshold * share * factor;
        }
    }

    let status = if contact {
        Status::Contact
    } else if weight >= params.align_threshold {
        Status::Aligned
    } else {
        Status::Unaligned
    };
    (weight, status)
}

fn direction_factor(
    scatter: &[ScatterPoint],
    mp: &ScatterPoint,
    segment_dir: Point2D,
    params: &ScoringParams,
) -> f64 {
    let Some(bands) = params.angular_dampening else {
        return 1.0;
    };
    scatter
        .iter()
        .find(|q| q.seq + 1 == mp.seq)
        .and_then(|prev| acute_angle_deg(prev.pos().to(mp.pos()), segment_dir))
        .map_or(1.0, |angle| bands.factor(angle))
}
