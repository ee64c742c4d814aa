use egui::Ui;

use crate::config::ScoringConfig;
use crate::controllers::SessionController;
use crate::data::export::SessionSnapshot;

/// Visibility and labelling shared by every sidebar panel.
#[derive(Debug, Clone)]
pub struct PanelState {
    pub title: &'static str,
    pub icon: Option<&'static str>,
    pub visible: bool,
}

impl PanelState {
    pub fn new(title: &'static str, icon: &'static str) -> Self {
        Self {
            title,
            icon: Some(icon),
            visible: true,
        }
    }
}

/// Display and scoring settings edited through the UI.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSettings {
    pub scoring: ScoringConfig,
    /// Draw scatter points on top of the viewed path.
    pub show_scatter_overlay: bool,
    /// Logical canvas size `[width, height]`.
    pub canvas_size: [f64; 2],
}

/// What a panel gets to work with for one frame.
pub struct PanelContext<'a> {
    pub controller: &'a SessionController,
    /// State pulled from the controller at the start of the frame.
    pub snapshot: &'a SessionSnapshot,
    pub settings: &'a mut ViewSettings,
}

pub trait Panel {
    fn state(&self) -> &PanelState;
    fn state_mut(&mut self) -> &mut PanelState;

    fn title(&self) -> &'static str {
        self.state().title
    }

    fn title_and_icon(&self) -> String {
        match self.state().icon {
            Some(icon) => format!("{icon} {}", self.title()),
            None => self.title().to_string(),
        }
    }

    fn render_panel(&mut self, ui: &mut Ui, ctx: &mut PanelContext<'_>);
}
