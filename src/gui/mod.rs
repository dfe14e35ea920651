//! GUI module - User interface components

mod app;
mod chart_viewer;
mod input_panel;

pub use app::ChartPasteApp;
pub use chart_viewer::ChartViewer;
pub use input_panel::{InputPanel, InputPanelAction};
