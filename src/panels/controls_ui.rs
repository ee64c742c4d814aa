use egui::Ui;
use egui_phosphor::regular::{ARROW_COUNTER_CLOCKWISE, BROOM, FLOPPY_DISK, PLAY, SLIDERS, TRASH};

use super::panel_trait::{Panel, PanelContext, PanelState};
use crate::data::export::snapshot_to_json;

/// Scoring inputs, display toggles and the session actions.
#[derive(Debug, Clone)]
pub struct ControlsPanel {
    state: PanelState,
    pub error: Option<String>,
}

impl Default for ControlsPanel {
    fn default() -> Self {
        Self {
            state: PanelState::new("Controls", SLIDERS),
            error: None,
        }
    }
}

impl Panel for ControlsPanel {
    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, ctx: &mut PanelContext<'_>) {
        let before = ctx.settings.scoring.clone();
        let scoring = &mut ctx.settings.scoring;

        egui::Grid::new("scoring_inputs")
            .num_columns(2)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                ui.label("Threshold:");
                ui.add(
                    egui::DragValue::new(&mut scoring.threshold)
                        .speed(1.0)
                        .range(0.0..=f64::MAX),
                );
                ui.end_row();

                ui.label("Green cutoff:");
                ui.add(
                    egui::DragValue::new(&mut scoring.align_threshold)
                        .speed(0.01)
                        .range(0.0..=f64::MAX)
                        .max_decimals(3),
                );
                ui.end_row();
            });

        ui.checkbox(&mut ctx.settings.show_scatter_overlay, "Show my points on way");
        ui.checkbox(
            &mut ctx.settings.scoring.exclude_claimed_points,
            "Skip points claimed by other way-points",
        );
        ui.checkbox(&mut ctx.settings.scoring.angular_dampening, "Damp by movement direction");

        // Keep live results in step with the inputs once a run is active.
        if ctx.settings.scoring != before && ctx.snapshot.scoring.is_some() {
            ctx.controller.run_scoring(ctx.settings.scoring.params());
        }

        ui.separator();

        ui.horizontal(|ui| {
            if ui.button(format!("{PLAY} Execute")).clicked() {
                match ctx.settings.scoring.validate() {
                    Ok(()) => {
                        self.error = None;
                        ctx.controller.run_scoring(ctx.settings.scoring.params());
                    }
                    Err(e) => self.error = Some(e.to_string()),
                }
            }
            if ui.button(format!("{BROOM} Reset colors")).clicked() {
                ctx.controller.reset_colors();
            }
        });

        let target = ctx.snapshot.target;
        let can_undo = ctx.controller.with_session(|s| s.can_undo(target));
        ui.horizontal(|ui| {
            if ui.button(format!("{FLOPPY_DISK} Save")).clicked() {
                match snapshot_to_json(ctx.snapshot) {
                    Ok(json) => tracing::info!(snapshot = %json, "saved session"),
                    Err(e) => {
                        tracing::warn!(error = %e, "failed to serialize session");
                        self.error = Some(e.to_string());
                    }
                }
            }
            if ui
                .add_enabled(can_undo, egui::Button::new(format!("{ARROW_COUNTER_CLOCKWISE} Undo")))
                .clicked()
            {
                ctx.controller.undo_last(target);
            }
            if ui.button(format!("{TRASH} Reset")).clicked() {
                ctx.controller.reset_target(target);
            }
        });

        if let Some(err) = &self.error {
            ui.colored_label(egui::Color32::LIGHT_RED, err);
        }
    }
}
