//! Chart Selection Module
//! Decides which charts to draw for a record set and how their series map to fields.
//!
//! Optional fields (`profit`, `x`/`y`, `fullMark`) are detected on the first
//! record only. A set whose first record lacks a field suppresses the
//! matching series or chart even if later records carry it.

use crate::charts::plotter::{ACCENT_COLOR, PROFIT_COLOR, VALUE_COLOR};
use crate::data::RecordSet;
use egui::Color32;

/// Fixed radius domain of the radar chart.
pub const RADAR_DOMAIN: (f64, f64) = (0.0, 100.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
    Area,
    Pie,
    Composed,
    Scatter,
    Radar,
}

impl ChartKind {
    pub fn title(&self) -> &'static str {
        match self {
            ChartKind::Bar => "Bar Chart",
            ChartKind::Line => "Line Chart",
            ChartKind::Area => "Area Chart",
            ChartKind::Pie => "Pie Chart",
            ChartKind::Composed => "Composed Chart",
            ChartKind::Scatter => "Scatter Chart",
            ChartKind::Radar => "Radar Chart",
        }
    }
}

/// How a series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Bar,
    Line,
    Area,
    Point,
    Slice,
    Polygon,
}

/// One series: a field key and how to draw it.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSpec {
    pub key: &'static str,
    pub mark: Mark,
    pub color: Color32,
}

impl SeriesSpec {
    fn new(key: &'static str, mark: Mark, color: Color32) -> Self {
        Self { key, mark, color }
    }
}

/// Declarative description of one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub series: Vec<SeriesSpec>,
    /// Fixed value-axis domain, `None` for auto bounds.
    pub y_domain: Option<(f64, f64)>,
}

impl ChartSpec {
    fn new(kind: ChartKind, series: Vec<SeriesSpec>) -> Self {
        Self {
            kind,
            series,
            y_domain: None,
        }
    }
}

/// Ordered list of charts to draw for one record set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartPlan {
    pub charts: Vec<ChartSpec>,
}

impl ChartPlan {
    pub fn for_records(records: &RecordSet) -> Self {
        let Some(first) = records.first() else {
            return Self::default();
        };

        let has_profit = first.has_field("profit");
        let has_xy = first.has_field("x") && first.has_field("y");
        let has_full_mark = first.has_field("fullMark");

        let with_profit = |mark: Mark| {
            let mut series = vec![SeriesSpec::new("value", mark, VALUE_COLOR)];
            if has_profit {
                series.push(SeriesSpec::new("profit", mark, PROFIT_COLOR));
            }
            series
        };

        let mut charts = vec![
            ChartSpec::new(ChartKind::Bar, with_profit(Mark::Bar)),
            ChartSpec::new(ChartKind::Line, with_profit(Mark::Line)),
            ChartSpec::new(ChartKind::Area, with_profit(Mark::Area)),
            ChartSpec::new(
                ChartKind::Pie,
                vec![SeriesSpec::new("value", Mark::Slice, VALUE_COLOR)],
            ),
        ];

        let mut composed = vec![
            SeriesSpec::new("value", Mark::Bar, VALUE_COLOR),
            SeriesSpec::new("value", Mark::Line, ACCENT_COLOR),
        ];
        if has_profit {
            composed.push(SeriesSpec::new("profit", Mark::Area, PROFIT_COLOR));
        }
        charts.push(ChartSpec::new(ChartKind::Composed, composed));

        if has_xy {
            charts.push(ChartSpec::new(
                ChartKind::Scatter,
                vec![
                    SeriesSpec::new("x", Mark::Point, VALUE_COLOR),
                    SeriesSpec::new("y", Mark::Point, VALUE_COLOR),
                ],
            ));
        }

        if has_full_mark {
            charts.push(ChartSpec {
                y_domain: Some(RADAR_DOMAIN),
                ..ChartSpec::new(
                    ChartKind::Radar,
                    vec![SeriesSpec::new("value", Mark::Polygon, VALUE_COLOR)],
                )
            });
        }

        Self { charts }
    }

    pub fn kinds(&self) -> Vec<ChartKind> {
        self.charts.iter().map(|c| c.kind).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }
}
