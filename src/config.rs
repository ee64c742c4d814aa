//! Configuration for the PointLogic window and its scoring defaults.
//!
//! The serializable part can be loaded from a YAML (`.yaml`/`.yml`) or JSON file.
//! Values that only make sense at runtime (native window options, an external
//! controller) are skipped by serde and set from code.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::controllers::SessionController;
use crate::data::scoring::{DampeningBands, ScoringParams};
use crate::error::{PointLogicError, Result};

// ─────────────────────────────────────────────────────────────────────────────
// Scoring
// ─────────────────────────────────────────────────────────────────────────────

/// Scoring inputs edited in the control panel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Contact / projection radius in canvas units. Default: `50.0`.
    pub threshold: f64,
    /// "Aligned" cutoff and contact weight. Default: `0.05`. May be `"∞"`.
    #[serde(with = "crate::data::scoring::weight_serde")]
    pub align_threshold: f64,
    /// Skip scatter points already in contact with another vertex. Default: `true`.
    pub exclude_claimed_points: bool,
    /// Damp segment contributions by movement direction. Default: `true`.
    pub angular_dampening: bool,
    /// Angle bands used when `angular_dampening` is on.
    pub dampening: DampeningBands,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            threshold: 50.0,
            align_threshold: 0.05,
            exclude_claimed_points: true,
            angular_dampening: true,
            dampening: DampeningBands::default(),
        }
    }
}

impl ScoringConfig {
    /// Parameters for one scoring pass.
    pub fn params(&self) -> ScoringParams {
        ScoringParams::new(self.threshold, self.align_threshold)
            .with_claim_exclusion(self.exclude_claimed_points)
            .with_dampening(self.angular_dampening.then_some(self.dampening))
    }

    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(PointLogicError::invalid_config(
                "threshold",
                format!("must be a finite, non-negative distance (got {})", self.threshold),
            ));
        }
        // An infinite align threshold is allowed; the canvas shows it as ∞.
        if self.align_threshold.is_nan() || self.align_threshold < 0.0 {
            return Err(PointLogicError::invalid_config(
                "align_threshold",
                format!("must be non-negative (got {})", self.align_threshold),
            ));
        }
        let b = &self.dampening;
        if !(0.0..=90.0).contains(&b.full_deg) || !(b.full_deg..=90.0).contains(&b.partial_deg) {
            return Err(PointLogicError::invalid_config(
                "dampening",
                "angle bands must satisfy 0 <= full_deg <= partial_deg <= 90",
            ));
        }
        if !(0.0..=1.0).contains(&b.partial) || !(0.0..=1.0).contains(&b.weak) {
            return Err(PointLogicError::invalid_config(
                "dampening",
                "factors must lie in [0, 1]",
            ));
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// PointLogicConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PointLogicConfig {
    /// Native window title.
    pub title: String,
    /// Logical canvas size `[width, height]`. Default: `[800, 500]`.
    pub canvas_size: [f64; 2],
    pub scoring: ScoringConfig,
    /// Draw scatter points on top of the viewed path. Display only.
    pub show_scatter_overlay: bool,

    /// Optional eframe native-window options.
    #[serde(skip)]
    pub native_options: Option<eframe::NativeOptions>,
    /// Optional controller shared with code outside the UI.
    #[serde(skip)]
    pub controller: Option<SessionController>,
}

impl Default for PointLogicConfig {
    fn default() -> Self {
        Self {
            title: "PointLogic".to_string(),
            canvas_size: [800.0, 500.0],
            scoring: ScoringConfig::default(),
            show_scatter_overlay: false,
            native_options: None,
            controller: None,
        }
    }
}

impl std::fmt::Debug for PointLogicConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointLogicConfig")
            .field("title", &self.title)
            .field("canvas_size", &self.canvas_size)
            .field("scoring", &self.scoring)
            .field("show_scatter_overlay", &self.show_scatter_overlay)
            .field("native_options", &self.native_options.is_some())
            .field("controller", &self.controller.is_some())
            .finish()
    }
}

impl PointLogicConfig {
    /// Parse YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let cfg: Self = serde_yaml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load from a file; the extension picks the format (YAML for `.yaml`/`.yml`, JSON otherwise).
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let is_yaml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));
        let cfg = if is_yaml {
            Self::from_yaml_str(&text)?
        } else {
            Self::from_json_str(&text)?
        };
        tracing::info!(path = %path.display(), "loaded configuration");
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        let [w, h] = self.canvas_size;
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return Err(PointLogicError::invalid_config(
                "canvas_size",
                format!("must be positive (got [{w}, {h}])"),
            ));
        }
        self.scoring.validate()
    }
}
