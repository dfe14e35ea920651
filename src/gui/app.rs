//! Chartify Paste Main Application
//! Main window with input panel and chart viewer.

use crate::data::InputState;
use crate::gui::input_panel::EXAMPLE_DATA;
use crate::gui::{ChartViewer, InputPanel, InputPanelAction};
use egui::SidePanel;
use log::info;

/// Main application window.
pub struct ChartPasteApp {
    input_panel: InputPanel,
    chart_viewer: ChartViewer,
    state: InputState,
}

impl ChartPasteApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        info!("Chartify Paste ready");
        Self {
            input_panel: InputPanel::new(),
            chart_viewer: ChartViewer::new(),
            state: InputState::Empty,
        }
    }

    /// Revalidate the whole input and refresh the charts. Runs once per edit.
    fn apply_input(&mut self) {
        self.state.update(&self.input_panel.text);
        self.chart_viewer.set_records(self.state.records());
    }

    fn handle_action(&mut self, action: InputPanelAction) {
        match action {
            InputPanelAction::TextChanged => self.apply_input(),
            InputPanelAction::LoadExample => {
                self.input_panel.set_text(EXAMPLE_DATA);
                self.apply_input();
            }
            InputPanelAction::Clear => {
                self.input_panel.set_text("");
                self.apply_input();
            }
            InputPanelAction::None => {}
        }
    }
}

impl eframe::App for ChartPasteApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - Input Panel
        SidePanel::left("input_panel")
            .min_width(360.0)
            .max_width(520.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.input_panel.show(ui, &self.state);
                    self.handle_action(action);
                });
            });

        // Central panel - Chart Viewer
        let style = self.input_panel.settings.plot_style();
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui, &style);
        });
    }
}
