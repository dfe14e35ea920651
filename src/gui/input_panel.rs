//! Input Panel Widget
//! Left side panel with the data editor, validation feedback and display settings.

use crate::charts::PlotStyle;
use crate::data::{InputState, Trace};
use egui::{Color32, RichText, ScrollArea};

/// Example data set offered as hint text and by the "Load example" button.
pub const EXAMPLE_DATA: &str = r#"[
  { "name": "January", "value": 100 },
  { "name": "February", "value": 120 },
  { "name": "March", "value": 140 },
  { "name": "April", "value": 160 },
  { "name": "May", "value": 180 },
  { "name": "June", "value": 200 }
]"#;

const ERROR_COLOR: Color32 = Color32::from_rgb(220, 53, 69);
const OK_COLOR: Color32 = Color32::from_rgb(40, 167, 69);

/// Presentation settings. Never affect validation or chart selection.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySettings {
    pub chart_height: f32,
    pub show_legend: bool,
    pub show_grid: bool,
    pub show_trace: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        let style = PlotStyle::default();
        Self {
            chart_height: style.height,
            show_legend: style.show_legend,
            show_grid: style.show_grid,
            show_trace: true,
        }
    }
}

impl DisplaySettings {
    pub fn plot_style(&self) -> PlotStyle {
        PlotStyle {
            height: self.chart_height,
            show_legend: self.show_legend,
            show_grid: self.show_grid,
        }
    }
}

/// Left side panel holding the raw input text.
#[derive(Default)]
pub struct InputPanel {
    pub text: String,
    pub settings: DisplaySettings,
}

impl InputPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the editor text; the caller revalidates.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    /// Draw the input panel
    pub fn show(&mut self, ui: &mut egui::Ui, state: &InputState) -> InputPanelAction {
        let mut action = InputPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("📊 Chartify Paste")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("JSON data to charts")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Data Section =====
        ui.horizontal(|ui| {
            ui.label(RichText::new("📋 Data").size(14.0).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("Clear").clicked() {
                    action = InputPanelAction::Clear;
                }
                if ui.small_button("Load example").clicked() {
                    action = InputPanelAction::LoadExample;
                }
            });
        });
        ui.add_space(5.0);

        let hint = format!("Paste your data array here...\n\nExample:\n{}", EXAMPLE_DATA);
        let editor = egui::TextEdit::multiline(&mut self.text)
            .code_editor()
            .desired_rows(18)
            .desired_width(f32::INFINITY)
            .hint_text(hint);
        if ui.add(editor).changed() {
            action = InputPanelAction::TextChanged;
        }

        ui.add_space(8.0);
        Self::draw_status(ui, state);

        ui.add_space(10.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Display Section =====
        ui.label(RichText::new("⚙️ Display").size(14.0).strong());
        ui.add_space(5.0);
        ui.add(
            egui::Slider::new(&mut self.settings.chart_height, 180.0..=480.0)
                .text("Chart height"),
        );
        ui.horizontal(|ui| {
            ui.checkbox(&mut self.settings.show_legend, "Legend");
            ui.checkbox(&mut self.settings.show_grid, "Grid");
            ui.checkbox(&mut self.settings.show_trace, "Debug log");
        });

        if self.settings.show_trace {
            if let Some(trace) = state.trace() {
                ui.add_space(10.0);
                ui.separator();
                ui.add_space(5.0);
                Self::draw_trace(ui, trace);
            }
        }

        action
    }

    /// Error banner or record summary for the current state.
    fn draw_status(ui: &mut egui::Ui, state: &InputState) {
        if let Some(error) = state.error() {
            egui::Frame::none()
                .fill(ERROR_COLOR.gamma_multiply(0.15))
                .stroke(egui::Stroke::new(1.0, ERROR_COLOR))
                .rounding(5.0)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(
                        RichText::new(format!("Error: {}", error))
                            .size(12.0)
                            .color(ERROR_COLOR),
                    );
                    ui.label(
                        RichText::new(error.category())
                            .size(10.0)
                            .color(Color32::GRAY),
                    );
                });
        } else if let Some(records) = state.records() {
            ui.label(
                RichText::new(format!("✓ {} records ready", records.len()))
                    .size(12.0)
                    .color(OK_COLOR),
            );
        } else {
            ui.label(
                RichText::new("Waiting for input")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        }
    }

    fn draw_trace(ui: &mut egui::Ui, trace: &Trace) {
        let rendered = trace.render();

        ui.horizontal(|ui| {
            ui.label(RichText::new("🐞 Debug log").size(14.0).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("Copy").clicked() {
                    ui.ctx().copy_text(rendered.clone());
                }
            });
        });
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ScrollArea::vertical()
                    .id_salt("trace_scroll")
                    .max_height(240.0)
                    .show(ui, |ui| {
                        ui.label(RichText::new(rendered).monospace().size(11.0));
                    });
            });
    }
}

/// Actions triggered by the input panel
#[derive(Debug, Clone, PartialEq)]
pub enum InputPanelAction {
    None,
    TextChanged,
    LoadExample,
    Clear,
}
