//! Per-frame update logic for [`PointLogicApp`].

use eframe::egui;

use crate::panels::PanelContext;

use super::PointLogicApp;

impl eframe::App for PointLogicApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Pull the state once; panels read this snapshot and write through the controller.
        let snapshot = self.controller.snapshot();

        let mut panels = std::mem::take(&mut self.side_panels);
        egui::SidePanel::right("pointlogic_sidebar")
            .resizable(true)
            .default_width(360.0)
            .min_width(260.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let mut pctx = PanelContext {
                        controller: &self.controller,
                        snapshot: &snapshot,
                        settings: &mut self.settings,
                    };
                    for p in panels.iter_mut() {
                        let title = p.title_and_icon();
                        let open = p.state().visible;
                        let resp = egui::CollapsingHeader::new(title)
                            .id_salt(p.title())
                            .open(Some(open))
                            .show(ui, |ui| p.render_panel(ui, &mut pctx));
                        if resp.header_response.clicked() {
                            p.state_mut().visible = !open;
                        }
                    }
                });
            });
        self.side_panels = panels;

        egui::CentralPanel::default().show(ctx, |ui| {
            let status = match self.canvas.last_click {
                Some([x, y]) => format!("Last click: ({x:.1}, {y:.1})"),
                None => "Click the canvas to place a point".to_string(),
            };
            ui.label(egui::RichText::new(status).weak());
            let mut pctx = PanelContext {
                controller: &self.controller,
                snapshot: &snapshot,
                settings: &mut self.settings,
            };
            self.canvas.render_panel(ui, &mut pctx);
        });
    }
}
