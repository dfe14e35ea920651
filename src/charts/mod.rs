//! Charts module - Chart selection and rendering

mod geometry;
mod plotter;
mod selection;

pub use plotter::{ChartPlotter, PlotStyle};
pub use selection::ChartPlan;
