//! Chart Viewer Widget
//! Central scrollable panel displaying the planned charts for the current records.
//! Supports responsive multi-column layout based on available width.

use crate::charts::{ChartPlan, ChartPlotter, PlotStyle};
use crate::data::RecordSet;
use egui::{Color32, RichText, ScrollArea};
use log::debug;

/// Chart card configuration
const CHART_SPACING: f32 = 15.0;
const CARD_CHROME: f32 = 60.0; // Title, margins and border around the plot
const CHART_WIDTH: f32 = 560.0; // Fixed width for each chart card

const CARD_BORDER: Color32 = Color32::from_rgb(100, 149, 237);

/// Scrollable chart display area with responsive multi-column layout.
#[derive(Default)]
pub struct ChartViewer {
    records: Option<RecordSet>,
    plan: ChartPlan,
}

impl ChartViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all charts
    pub fn clear(&mut self) {
        self.records = None;
        self.plan = ChartPlan::default();
    }

    /// Replace the charted records, `None` shows the placeholder.
    pub fn set_records(&mut self, records: Option<&RecordSet>) {
        let Some(records) = records else {
            self.clear();
            return;
        };

        self.plan = ChartPlan::for_records(records);
        self.records = Some(records.clone());
        debug!("Chart plan: {:?}", self.plan.kinds());
    }

    /// Draw the chart viewer with responsive multi-column layout
    pub fn show(&mut self, ui: &mut egui::Ui, style: &PlotStyle) {
        let Some(records) = self.records.as_ref().filter(|_| !self.plan.is_empty()) else {
            ui.centered_and_justified(|ui| {
                ui.label(
                    RichText::new("Paste your data to see the charts")
                        .size(20.0)
                        .color(Color32::GRAY),
                );
            });
            return;
        };

        // Calculate how many columns fit in available width
        let avail_width = ui.available_width();
        let card_total_width = CHART_WIDTH + CHART_SPACING;
        let num_columns = ((avail_width / card_total_width).floor() as usize).max(1);

        let total_items = self.plan.charts.len();
        let total_rows = total_items.div_ceil(num_columns);
        let row_height = style.height + CARD_CHROME + CHART_SPACING;

        let charts = &self.plan.charts;

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show_rows(ui, row_height, total_rows, |ui, row_range| {
                for row in row_range {
                    ui.horizontal(|ui| {
                        for col in 0..num_columns {
                            let idx = row * num_columns + col;
                            if let Some(spec) = charts.get(idx) {
                                Self::draw_chart_card(ui, |ui| {
                                    ui.label(
                                        RichText::new(spec.kind.title())
                                            .size(16.0)
                                            .strong()
                                            .color(CARD_BORDER),
                                    );
                                    ui.add_space(6.0);
                                    ChartPlotter::draw_chart(ui, spec, records, style);
                                });
                                ui.add_space(CHART_SPACING);
                            }
                        }
                    });
                    ui.add_space(CHART_SPACING);
                }
            });
    }

    /// Draw a single chart card with fixed width
    fn draw_chart_card(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
        egui::Frame::none()
            .rounding(8.0)
            .stroke(egui::Stroke::new(1.5, CARD_BORDER))
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(CHART_WIDTH - 24.0);
                ui.vertical(add_contents);
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::validate;

    #[test]
    fn test_records_drive_plan_and_clear_resets() {
        let records = validate(r#"[{"name":"A","value":1,"x":1,"y":2}]"#)
            .result
            .unwrap();
        let mut viewer = ChartViewer::new();

        viewer.set_records(Some(&records));
        assert_eq!(viewer.plan.charts.len(), 6);
        assert_eq!(
            viewer.plan.charts.last().map(|c| c.kind.title()),
            Some("Scatter Chart")
        );
        assert!(viewer.records.is_some());

        viewer.set_records(None);
        assert!(viewer.plan.is_empty());
        assert!(viewer.records.is_none());
    }
}
