//! Chart Plotter Module
//! Draws planned charts from a record set using egui_plot.

use crate::charts::geometry::{
    category_offsets, pie_slices, polar, radar_vertex, slice_polygon, spoke_angle,
};
use crate::charts::selection::{ChartKind, ChartSpec, Mark, SeriesSpec, RADAR_DOMAIN};
use crate::data::RecordSet;
use egui::{Color32, RichText, Stroke};
use egui_plot::{
    Bar, BarChart, GridMark, Legend, Line, Plot, PlotPoint, PlotPoints, Points, Polygon, Text,
};

/// Primary series color (`value`).
pub const VALUE_COLOR: Color32 = Color32::from_rgb(136, 132, 216);
/// Secondary series color (`profit`).
pub const PROFIT_COLOR: Color32 = Color32::from_rgb(130, 202, 157);
/// Overlay line color in the composed chart.
pub const ACCENT_COLOR: Color32 = Color32::from_rgb(255, 115, 0);
const GUIDE_COLOR: Color32 = Color32::from_rgb(160, 160, 160);

/// Pie slice palette, cycled by record index.
pub const PIE_PALETTE: [Color32; 6] = [
    Color32::from_rgb(0, 136, 254),   // Blue
    Color32::from_rgb(0, 196, 159),   // Teal
    Color32::from_rgb(255, 187, 40),  // Yellow
    Color32::from_rgb(255, 128, 66),  // Orange
    Color32::from_rgb(136, 132, 216), // Lavender
    Color32::from_rgb(130, 202, 157), // Green
];

const PIE_SEGMENTS: usize = 96;
const RADAR_LEVELS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];

/// Presentation options shared by every chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotStyle {
    pub height: f32,
    pub show_legend: bool,
    pub show_grid: bool,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            height: 280.0,
            show_legend: true,
            show_grid: true,
        }
    }
}

/// Draws charts described by a `ChartSpec`.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Color of the pie slice for the record at `index`.
    pub fn slice_color(index: usize) -> Color32 {
        PIE_PALETTE[index % PIE_PALETTE.len()]
    }

    /// `(index, number)` pairs for a field; records without a number are skipped.
    pub fn series_values(records: &RecordSet, key: &str) -> Vec<(usize, f64)> {
        records
            .iter()
            .enumerate()
            .filter_map(|(i, r)| r.number(key).map(|v| (i, v)))
            .collect()
    }

    /// Splits `(index, number)` pairs into runs of consecutive indices.
    pub fn contiguous_runs(values: &[(usize, f64)]) -> Vec<Vec<[f64; 2]>> {
        let mut runs: Vec<Vec<[f64; 2]>> = Vec::new();
        let mut previous: Option<usize> = None;
        for &(i, v) in values {
            let point = [i as f64, v];
            match runs.last_mut() {
                Some(run) if previous.is_some_and(|p| p + 1 == i) => run.push(point),
                _ => runs.push(vec![point]),
            }
            previous = Some(i);
        }
        runs
    }

    /// `[x, y]` points for every record carrying both fields as numbers.
    pub fn scatter_points(records: &RecordSet, x_key: &str, y_key: &str) -> Vec<[f64; 2]> {
        records
            .iter()
            .filter_map(|r| Some([r.number(x_key)?, r.number(y_key)?]))
            .collect()
    }

    /// Axis label for a category tick, empty between categories.
    pub fn category_label(labels: &[String], value: f64) -> String {
        let idx = value.round();
        if idx < 0.0 || (value - idx).abs() > 1e-6 {
            return String::new();
        }
        labels.get(idx as usize).cloned().unwrap_or_default()
    }

    pub fn draw_chart(ui: &mut egui::Ui, spec: &ChartSpec, records: &RecordSet, style: &PlotStyle) {
        match spec.kind {
            ChartKind::Bar
            | ChartKind::Line
            | ChartKind::Area
            | ChartKind::Composed => Self::draw_category_chart(ui, spec, records, style),
            ChartKind::Pie => Self::draw_pie_chart(ui, spec, records, style),
            ChartKind::Scatter => Self::draw_scatter_chart(ui, spec, records, style),
            ChartKind::Radar => Self::draw_radar_chart(ui, spec, records, style),
        }
    }

    /// Bar, line, area and composed charts: `name` on x, series on y.
    fn draw_category_chart(
        ui: &mut egui::Ui,
        spec: &ChartSpec,
        records: &RecordSet,
        style: &PlotStyle,
    ) {
        let labels = records.names();
        let count = labels.len();

        let bar_series: Vec<&SeriesSpec> =
            spec.series.iter().filter(|s| s.mark == Mark::Bar).collect();
        let (offsets, bar_width) = category_offsets(bar_series.len());

        let plot = Plot::new(format!("{:?}_chart", spec.kind))
            .height(style.height)
            .show_grid(style.show_grid)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .x_axis_label("name")
            .include_y(0.0)
            .include_x(-0.5)
            .include_x(count as f64 - 0.5)
            .x_grid_spacer(move |_input| {
                (0..count)
                    .map(|i| GridMark {
                        value: i as f64,
                        step_size: 1.0,
                    })
                    .collect()
            })
            .x_axis_formatter(move |mark, _range| Self::category_label(&labels, mark.value));
        let plot = if style.show_legend {
            plot.legend(Legend::default())
        } else {
            plot
        };

        plot.show(ui, |plot_ui| {
            let mut bar_idx = 0;
            for series in &spec.series {
                let values = Self::series_values(records, series.key);
                match series.mark {
                    Mark::Bar => {
                        let offset = offsets[bar_idx];
                        bar_idx += 1;
                        let bars: Vec<Bar> = values
                            .iter()
                            .map(|&(i, v)| {
                                Bar::new(i as f64 + offset, v)
                                    .width(bar_width)
                                    .fill(series.color)
                            })
                            .collect();
                        plot_ui.bar_chart(
                            BarChart::new(bars).color(series.color).name(series.key),
                        );
                    }
                    Mark::Line | Mark::Area => {
                        // Records missing the field break the line.
                        let runs = Self::contiguous_runs(&values);
                        for (run_idx, run) in runs.into_iter().enumerate() {
                            let mut line = Line::new(PlotPoints::from(run))
                                .color(series.color)
                                .width(2.0);
                            if run_idx == 0 {
                                line = line.name(series.key);
                            }
                            if series.mark == Mark::Area {
                                line = line.fill(0.0_f32);
                            }
                            plot_ui.line(line);
                        }

                        let markers: PlotPoints =
                            values.iter().map(|&(i, v)| [i as f64, v]).collect();
                        plot_ui.points(Points::new(markers).radius(3.0).color(series.color));
                    }
                    _ => {}
                }
            }
        });
    }

    /// `value` sliced by `name`, slice colors cycling through the palette.
    fn draw_pie_chart(ui: &mut egui::Ui, spec: &ChartSpec, records: &RecordSet, style: &PlotStyle) {
        let Some(series) = spec.series.first() else {
            return;
        };
        let values: Vec<f64> = records
            .iter()
            .map(|r| r.number(series.key).unwrap_or(0.0))
            .collect();
        let slices = pie_slices(&values);

        if slices.is_empty() {
            ui.label(RichText::new("Nothing to slice: all values are zero or negative").italics());
            return;
        }

        let names = records.names();

        let plot = Plot::new("Pie_chart")
            .height(style.height)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .data_aspect(1.0)
            .show_axes(false)
            .show_grid(false)
            .allow_drag(false)
            .allow_zoom(false)
            .include_x(-1.4)
            .include_x(1.4)
            .include_y(-1.3)
            .include_y(1.3);
        let plot = if style.show_legend {
            plot.legend(Legend::default())
        } else {
            plot
        };

        plot.show(ui, |plot_ui| {
            for slice in &slices {
                let color = Self::slice_color(slice.index);
                let outline: PlotPoints =
                    slice_polygon(slice, 1.0, PIE_SEGMENTS).into_iter().collect();
                plot_ui.polygon(
                    Polygon::new(outline)
                        .fill_color(color)
                        .stroke(Stroke::new(1.0, Color32::WHITE))
                        .name(&names[slice.index]),
                );

                let [lx, ly] = polar(slice.mid_angle(), 1.15);
                plot_ui.text(Text::new(
                    PlotPoint::new(lx, ly),
                    RichText::new(format!(
                        "{} {:.0}%",
                        names[slice.index],
                        slice.fraction * 100.0
                    ))
                    .size(11.0),
                ));
            }
        });
    }

    /// `x` vs `y` for every record carrying both as numbers.
    fn draw_scatter_chart(
        ui: &mut egui::Ui,
        spec: &ChartSpec,
        records: &RecordSet,
        style: &PlotStyle,
    ) {
        let color = spec.series.first().map(|s| s.color).unwrap_or(VALUE_COLOR);
        let x_key = spec.series.first().map(|s| s.key).unwrap_or("x");
        let y_key = spec.series.get(1).map(|s| s.key).unwrap_or("y");
        let points = PlotPoints::from(Self::scatter_points(records, x_key, y_key));

        let plot = Plot::new("Scatter_chart")
            .height(style.height)
            .show_grid(style.show_grid)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .x_axis_label(x_key)
            .y_axis_label(y_key);
        let plot = if style.show_legend {
            plot.legend(Legend::default())
        } else {
            plot
        };

        plot.show(ui, |plot_ui| {
            plot_ui.points(
                Points::new(points)
                    .radius(5.0)
                    .color(color)
                    .name(format!("{} / {}", x_key, y_key)),
            );
        });
    }

    /// `value` on one spoke per `name`, normalised into the fixed domain.
    fn draw_radar_chart(
        ui: &mut egui::Ui,
        spec: &ChartSpec,
        records: &RecordSet,
        style: &PlotStyle,
    ) {
        let Some(series) = spec.series.first() else {
            return;
        };
        let domain = spec.y_domain.unwrap_or(RADAR_DOMAIN);
        let names = records.names();
        let count = names.len();
        let values = Self::series_values(records, series.key);

        let plot = Plot::new("Radar_chart")
            .height(style.height)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .data_aspect(1.0)
            .show_axes(false)
            .show_grid(false)
            .allow_drag(false)
            .allow_zoom(false)
            .include_x(-1.35)
            .include_x(1.35)
            .include_y(-1.25)
            .include_y(1.25);
        let plot = if style.show_legend {
            plot.legend(Legend::default())
        } else {
            plot
        };

        plot.show(ui, |plot_ui| {
            // Concentric guides, one per level of the domain.
            for level in RADAR_LEVELS {
                let ring: PlotPoints = (0..=count.max(3) * 8)
                    .map(|i| polar(spoke_angle(i, count.max(3) * 8), level))
                    .collect();
                plot_ui.line(Line::new(ring).color(GUIDE_COLOR).width(0.5));

                let [tx, ty] = polar(0.0, level);
                let tick = domain.0 + (domain.1 - domain.0) * level;
                plot_ui.text(Text::new(
                    PlotPoint::new(tx + 0.06, ty),
                    RichText::new(format!("{:.0}", tick)).size(9.0),
                ));
            }

            for (i, name) in names.iter().enumerate() {
                let tip = polar(spoke_angle(i, count), 1.0);
                plot_ui.line(
                    Line::new(PlotPoints::from(vec![[0.0, 0.0], tip]))
                        .color(GUIDE_COLOR)
                        .width(0.5),
                );
                let [lx, ly] = polar(spoke_angle(i, count), 1.15);
                plot_ui.text(Text::new(
                    PlotPoint::new(lx, ly),
                    RichText::new(name).size(11.0),
                ));
            }

            let vertices: Vec<[f64; 2]> = values
                .iter()
                .map(|&(i, v)| radar_vertex(i, count, v, domain))
                .collect();
            if vertices.is_empty() {
                return;
            }
            plot_ui.polygon(
                Polygon::new(PlotPoints::from(vertices.clone()))
                    .fill_color(series.color.gamma_multiply(0.5))
                    .stroke(Stroke::new(2.0, series.color))
                    .name(series.key),
            );
            plot_ui.points(
                Points::new(PlotPoints::from(vertices))
                    .radius(3.0)
                    .color(series.color),
            );
        });
    }
}
