use egui::Ui;
use egui_phosphor::regular::{MAP_PIN, PATH};

use super::panel_trait::{Panel, PanelContext, PanelState};
use crate::data::paths::PathId;

/// Picks what the canvas shows and where clicks go.
#[derive(Debug, Clone)]
pub struct TargetPanel {
    state: PanelState,
}

impl Default for TargetPanel {
    fn default() -> Self {
        Self {
            state: PanelState::new("Target", PATH),
        }
    }
}

impl Panel for TargetPanel {
    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, ctx: &mut PanelContext<'_>) {
        let current = ctx.snapshot.target;
        let viewed = current.viewed_path();

        ui.horizontal_wrapped(|ui| {
            let mine = ui.selectable_label(viewed.is_none(), format!("{MAP_PIN} My points"));
            if mine.clicked() {
                ctx.controller.set_target(current.select(None));
            }
            for id in PathId::all() {
                let resp = ui.selectable_label(viewed == Some(id), format!("Way {id}"));
                if resp.clicked() {
                    ctx.controller.set_target(current.select(Some(id)));
                }
            }
        });

        let mut forced = current.is_scatter_forced();
        let resp = ui
            .add_enabled(viewed.is_some(), egui::Checkbox::new(&mut forced, "Place my points"))
            .on_hover_text("Clicks add scatter points while the selected way stays on screen");
        if resp.changed() {
            ctx.controller.set_target(current.with_scatter_forced(forced));
        }

        let writing = if current.is_scatter() {
            "my points".to_string()
        } else {
            format!("way {}", viewed.map_or(0, PathId::get))
        };
        ui.label(egui::RichText::new(format!("Clicks add to {writing}")).weak());
    }
}
