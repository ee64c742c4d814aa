//! Top-level entry point for running PointLogic as a native window.

use eframe::egui;

use crate::config::PointLogicConfig;

use super::PointLogicApp;

/// Launch PointLogic in a native window.
///
/// Builds a [`PointLogicApp`] from `cfg`, installs the Phosphor icon font and
/// enters the eframe event loop. Blocks until the window is closed.
pub fn run_pointlogic(mut cfg: PointLogicConfig) -> eframe::Result<()> {
    let app = PointLogicApp::with_config(&cfg);

    let title = cfg.title.clone();
    let mut opts = cfg.native_options.take().unwrap_or_default();
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts.viewport.clone().with_inner_size(egui::vec2(1280.0, 760.0));
    }

    tracing::info!(title = %title, "starting PointLogic window");
    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}
