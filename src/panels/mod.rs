pub mod canvas_ui;
pub mod controls_ui;
pub mod coordinates_ui;
pub mod panel_trait;
pub mod target_ui;

pub use canvas_ui::CanvasPanel;
pub use controls_ui::ControlsPanel;
pub use coordinates_ui::CoordinatesPanel;
pub use panel_trait::{Panel, PanelContext, PanelState, ViewSettings};
pub use target_ui::TargetPanel;
