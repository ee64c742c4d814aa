use egui::{Color32, Ui};
use egui_plot::{Line, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use super::panel_trait::PanelContext;
use crate::data::geometry::{distance, Point2D};
use crate::data::paths::{Path, Status};
use crate::data::points::ScatterPoint;
use crate::data::scoring::format_weight;

const VERTEX_RADIUS: f32 = 6.0;
const SCATTER_RADIUS: f32 = 8.0;
const LABEL_OFFSET: f64 = 10.0;
const DISC_SEGMENTS: usize = 48;

/// Fill color of a vertex by status.
pub fn status_color(status: Status) -> Color32 {
    match status {
        Status::Unset => Color32::GRAY,
        Status::Contact => Color32::from_rgb(40, 90, 255),
        Status::Aligned => Color32::from_rgb(30, 170, 60),
        Status::Unaligned => Color32::from_rgb(220, 40, 40),
    }
}

/// The drawing surface: shows the viewed path and scatter points and turns
/// clicks into new points at the active target.
#[derive(Debug, Clone, Default)]
pub struct CanvasPanel {
    /// Last click in canvas coordinates, for the status line.
    pub last_click: Option<[f64; 2]>,
}

impl CanvasPanel {
    pub fn render_panel(&mut self, ui: &mut Ui, ctx: &mut PanelContext<'_>) {
        let [w, h] = ctx.settings.canvas_size;
        let snapshot = ctx.snapshot;
        let threshold = ctx.settings.scoring.threshold;
        let viewed = snapshot
            .target
            .viewed_path()
            .and_then(|id| snapshot.paths.iter().find(|p| p.id == id));
        let show_scatter = viewed.is_none() || ctx.settings.show_scatter_overlay;

        let plot = Plot::new("pointlogic_canvas")
            .data_aspect(1.0)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .allow_double_click_reset(false)
            .include_x(0.0)
            .include_x(w)
            .include_y(0.0)
            .include_y(h);

        let scored_threshold = snapshot.scoring.map(|p| p.threshold);
        let plot_response = plot.show(ui, |plot_ui| {
            if let Some(path) = viewed {
                if let Some(t) = scored_threshold {
                    draw_band(plot_ui, path, t);
                }
                draw_path(plot_ui, path, threshold);
            }
            if show_scatter {
                draw_scatter(plot_ui, &snapshot.scatter_points);
            }
        });

        if plot_response.response.clicked() {
            if let Some(screen_pos) = plot_response.response.interact_pointer_pos() {
                let pos = plot_response.transform.value_from_position(screen_pos);
                self.last_click = Some([pos.x, pos.y]);
                ctx.controller.add_point(pos.x, pos.y);
            }
        }
    }
}

fn disc(center: [f64; 2], radius: f64) -> Vec<[f64; 2]> {
    (0..DISC_SEGMENTS)
        .map(|i| {
            let a = i as f64 / DISC_SEGMENTS as f64 * std::f64::consts::TAU;
            [center[0] + radius * a.cos(), center[1] + radius * a.sin()]
        })
        .collect()
}

/// Corners of the rectangle covering everything within `half_width` of segment `a -> b`.
/// `None` for a zero-length segment or a non-positive width.
fn band_quad(a: Point2D, b: Point2D, half_width: f64) -> Option<[[f64; 2]; 4]> {
    let len = distance(a, b);
    if len == 0.0 || half_width <= 0.0 {
        return None;
    }
    let d = a.to(b);
    let (nx, ny) = (-d.y / len * half_width, d.x / len * half_width);
    Some([
        [a.x + nx, a.y + ny],
        [b.x + nx, b.y + ny],
        [b.x - nx, b.y - ny],
        [a.x - nx, a.y - ny],
    ])
}

/// Translucent band `2 * threshold` wide along the path, shown once scoring ran.
fn draw_band(plot_ui: &mut egui_plot::PlotUi, path: &Path, threshold: f64) {
    let name = format!("Way {} band", path.id);
    for pair in path.vertices.windows(2) {
        if let Some(quad) = band_quad(pair[0].pos(), pair[1].pos(), threshold) {
            plot_ui.polygon(
                Polygon::new(name.clone(), PlotPoints::from(quad.to_vec()))
                    .fill_color(Color32::from_rgba_unmultiplied(0, 120, 255, 24))
                    .stroke(egui::Stroke::NONE),
            );
        }
    }
}

fn draw_path(plot_ui: &mut egui_plot::PlotUi, path: &Path, threshold: f64) {
    let name = format!("Way {}", path.id);
    let pts: Vec<[f64; 2]> = path.vertices.iter().map(|v| [v.x, v.y]).collect();

    // Threshold radius around every vertex.
    if threshold > 0.0 {
        for p in &pts {
            let poly = Polygon::new(format!("{name} radius"), PlotPoints::from(disc(*p, threshold)))
                .fill_color(Color32::from_rgba_unmultiplied(255, 11, 25, 20))
                .stroke(egui::Stroke::NONE);
            plot_ui.polygon(poly);
        }
    }

    if pts.len() > 1 {
        plot_ui.line(Line::new(name.clone(), pts.clone()).color(Color32::GRAY).width(1.0));
    }

    for v in &path.vertices {
        plot_ui.points(
            Points::new(name.clone(), vec![[v.x, v.y]])
                .radius(VERTEX_RADIUS)
                .filled(true)
                .color(status_color(v.status)),
        );
        let txt = format!("W{}-{} (w:{})", v.path_id, v.seq, format_weight(v.weight));
        plot_ui.text(
            Text::new(
                format!("{name} label"),
                PlotPoint::new(v.x + LABEL_OFFSET, v.y),
                egui::RichText::new(txt).size(12.0),
            )
            .anchor(egui::Align2::LEFT_CENTER),
        );
    }
}

fn draw_scatter(plot_ui: &mut egui_plot::PlotUi, scatter: &[ScatterPoint]) {
    if scatter.is_empty() {
        return;
    }
    let pts: Vec<[f64; 2]> = scatter.iter().map(|p| [p.x, p.y]).collect();
    plot_ui.points(
        Points::new("My points", pts)
            .radius(SCATTER_RADIUS)
            .filled(true)
            .color(Color32::DARK_GRAY),
    );
    for p in scatter {
        plot_ui.text(
            Text::new(
                "My points label",
                PlotPoint::new(p.x + LABEL_OFFSET, p.y),
                egui::RichText::new(format!("M-{}", p.seq)).size(12.0),
            )
            .anchor(egui::Align2::LEFT_CENTER),
        );
    }
}
