//! Main application module for PointLogic.
//!
//! | Sub-module   | Responsibility |
//! | ------------ | -------------- |
//! | [`update`]   | Per-frame state pull, sidebar and canvas rendering |
//! | [`run`]      | Top-level [`run_pointlogic()`] entry point |

mod run;
mod update;

pub use run::run_pointlogic;

use crate::config::PointLogicConfig;
use crate::controllers::SessionController;
use crate::panels::{
    CanvasPanel, ControlsPanel, CoordinatesPanel, Panel, TargetPanel, ViewSettings,
};

/// Standalone PointLogic application that implements [`eframe::App`].
///
/// All edits go through the [`SessionController`]; each frame the app pulls a
/// fresh snapshot and redraws from it, so nothing is cached between frames
/// except widget state.
pub struct PointLogicApp {
    /// Handle to the session; may be shared with code outside the UI.
    pub controller: SessionController,
    /// Scoring inputs and display toggles.
    pub settings: ViewSettings,
    pub canvas: CanvasPanel,
    /// Panels stacked in the right sidebar, top to bottom.
    pub side_panels: Vec<Box<dyn Panel>>,
}

impl PointLogicApp {
    /// Create an app from a configuration, reusing its controller when one is set.
    pub fn with_config(cfg: &PointLogicConfig) -> Self {
        Self {
            controller: cfg.controller.clone().unwrap_or_default(),
            settings: ViewSettings {
                scoring: cfg.scoring.clone(),
                show_scatter_overlay: cfg.show_scatter_overlay,
                canvas_size: cfg.canvas_size,
            },
            canvas: CanvasPanel::default(),
            side_panels: vec![
                Box::new(TargetPanel::default()),
                Box::new(ControlsPanel::default()),
                Box::new(CoordinatesPanel::default()),
            ],
        }
    }
}
