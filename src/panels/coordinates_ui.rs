use egui::Ui;
use egui_phosphor::regular::LIST;
use egui_table::{HeaderRow as EgHeaderRow, Table, TableDelegate};

use super::panel_trait::{Panel, PanelContext, PanelState};
use crate::data::export::{coordinate_rows, CoordinateRow};
use crate::data::scoring::format_weight;
use crate::panels::canvas_ui::status_color;

/// Raw coordinates of every scatter point and path vertex.
#[derive(Debug, Clone)]
pub struct CoordinatesPanel {
    state: PanelState,
}

impl Default for CoordinatesPanel {
    fn default() -> Self {
        Self {
            state: PanelState::new("Coordinates", LIST),
        }
    }
}

struct RowsDelegate<'a> {
    rows: &'a [CoordinateRow],
}

impl TableDelegate for RowsDelegate<'_> {
    fn header_cell_ui(&mut self, ui: &mut egui::Ui, cell: &egui_table::HeaderCellInfo) {
        let text = match cell.col_range.start {
            0 => "Point",
            1 => "x",
            2 => "y",
            3 => "Weight",
            4 => "Status",
            _ => "",
        };
        ui.add_space(4.0);
        ui.strong(text);
    }

    fn cell_ui(&mut self, ui: &mut egui::Ui, cell: &egui_table::CellInfo) {
        let Some(row) = self.rows.get(cell.row_nr as usize) else {
            return;
        };
        ui.add_space(4.0);
        match cell.col_nr {
            0 => {
                ui.label(row.label());
            }
            1 => {
                ui.label(format!("{:.1}", row.x));
            }
            2 => {
                ui.label(format!("{:.1}", row.y));
            }
            3 => {
                if let Some(w) = row.weight {
                    ui.label(format_weight(w));
                }
            }
            4 => {
                if let Some(s) = row.status {
                    ui.colored_label(status_color(s), s.to_string());
                }
            }
            _ => {}
        }
    }
}

impl Panel for CoordinatesPanel {
    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, ctx: &mut PanelContext<'_>) {
        let rows = coordinate_rows(ctx.snapshot);
        if rows.is_empty() {
            ui.label(egui::RichText::new("No points yet. Click the canvas to add some.").weak());
            return;
        }
        let mut delegate = RowsDelegate { rows: &rows };
        let cols = vec![
            egui_table::Column::new(70.0),
            egui_table::Column::new(60.0),
            egui_table::Column::new(60.0),
            egui_table::Column::new(60.0),
            egui_table::Column::new(80.0),
        ];
        let avail_w = ui.available_width();
        let height = ui.available_height().min(320.0);
        let (rect, _resp) =
            ui.allocate_exact_size(egui::vec2(avail_w, height), egui::Sense::hover());
        let ui_builder = egui::UiBuilder::new()
            .max_rect(rect)
            .layout(egui::Layout::left_to_right(egui::Align::Min));
        let mut table_ui = ui.new_child(ui_builder);
        Table::new()
            .id_salt("coordinates_table")
            .num_rows(rows.len() as u64)
            .columns(cols)
            .headers(vec![EgHeaderRow::new(22.0)])
            .show(&mut table_ui, &mut delegate);
    }
}
