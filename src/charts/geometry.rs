//! Chart Geometry Module
//! Plot-space math for charts egui_plot has no primitive for (pie, radar)
//! and for grouped bars.

use std::f64::consts::{FRAC_PI_2, TAU};

/// One pie slice. Angles are radians, clockwise from 12 o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    /// Index of the record the slice belongs to.
    pub index: usize,
    pub start: f64,
    pub end: f64,
    /// Share of the total in [0, 1].
    pub fraction: f64,
}

impl Slice {
    pub fn mid_angle(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

/// Point at `radius` on a clockwise-from-top angle.
pub fn polar(angle: f64, radius: f64) -> [f64; 2] {
    let theta = FRAC_PI_2 - angle;
    [radius * theta.cos(), radius * theta.sin()]
}

/// Split a full turn proportionally to `values`.
/// Negative values count as zero; a zero total yields no slices.
pub fn pie_slices(values: &[f64]) -> Vec<Slice> {
    let largest = values.iter().fold(0.0_f64, |acc, &v| acc.max(v));
    if largest <= 0.0 || !largest.is_finite() {
        return Vec::new();
    }

    // Scaled by the largest value so the total cannot overflow.
    let clamped: Vec<f64> = values.iter().map(|v| v.max(0.0) / largest).collect();
    let total: f64 = clamped.iter().sum();

    let mut start = 0.0;
    clamped
        .iter()
        .enumerate()
        .filter(|(_, &v)| v > 0.0)
        .map(|(index, &v)| {
            let fraction = v / total;
            let end = start + fraction * TAU;
            let slice = Slice {
                index,
                start,
                end,
                fraction,
            };
            start = end;
            slice
        })
        .collect()
}

/// Closed outline of a slice: center, arc points, back to center.
pub fn slice_polygon(slice: &Slice, radius: f64, segments: usize) -> Vec<[f64; 2]> {
    let sweep = slice.end - slice.start;
    let steps = ((segments as f64 * sweep / TAU).ceil() as usize).max(1);

    let mut points = Vec::with_capacity(steps + 2);
    points.push([0.0, 0.0]);
    for i in 0..=steps {
        let angle = slice.start + sweep * i as f64 / steps as f64;
        points.push(polar(angle, radius));
    }
    points
}

/// Vertex of `value` on spoke `index` of `count`, normalised into `domain`
/// so that the domain maximum lands on the unit circle.
pub fn radar_vertex(index: usize, count: usize, value: f64, domain: (f64, f64)) -> [f64; 2] {
    let (lo, hi) = domain;
    let span = hi - lo;
    let radius = if span > 0.0 { (value - lo) / span } else { 0.0 };
    polar(spoke_angle(index, count), radius)
}

pub fn spoke_angle(index: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    TAU * index as f64 / count as f64
}

/// Centre offsets for `series_count` bars sharing one category slot,
/// plus the width of each bar.
pub fn category_offsets(series_count: usize) -> (Vec<f64>, f64) {
    const GROUP_WIDTH: f64 = 0.8;

    if series_count == 0 {
        return (Vec::new(), 0.0);
    }
    let width = GROUP_WIDTH / series_count as f64;
    let offsets = (0..series_count)
        .map(|i| -GROUP_WIDTH / 2.0 + width * (i as f64 + 0.5))
        .collect();
    (offsets, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_pie_slices_cover_full_turn() {
        let slices = pie_slices(&[100.0, 120.0, 140.0]);
        assert_eq!(slices.len(), 3);
        assert!(close(slices[0].start, 0.0));
        assert!(close(slices.last().unwrap().end, TAU));
        assert!(close(slices.iter().map(|s| s.fraction).sum::<f64>(), 1.0));
        assert!(close(slices[0].end, slices[1].start));
    }

    #[test]
    fn test_pie_skips_non_positive_values_but_keeps_indices() {
        let slices = pie_slices(&[10.0, 0.0, -5.0, 30.0]);
        let indices: Vec<usize> = slices.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 3]);
        assert!(close(slices[1].fraction, 0.75));

        assert!(pie_slices(&[0.0, -1.0]).is_empty());
        assert!(pie_slices(&[]).is_empty());
    }

    #[test]
    #[allow(overflowing_literals)]
    fn test_pie_handles_values_whose_sum_overflows() {
        let slices = pie_slices(&[1e308, 1e308, 2e307]);
        assert_eq!(slices.len(), 3);
        assert!(close(slices[0].fraction, 1e308 / 2.2e308));
        assert!(close(slices[2].fraction, 2e307 / 2.2e308));
        assert!(close(slices.last().unwrap().end, TAU));
    }

    #[test]
    fn test_slice_polygon_starts_at_center() {
        let slices = pie_slices(&[1.0, 1.0]);
        let outline = slice_polygon(&slices[0], 1.0, 64);

        assert_eq!(outline[0], [0.0, 0.0]);
        let top = outline[1];
        assert!(close(top[0], 0.0) && close(top[1], 1.0));
        let bottom = *outline.last().unwrap();
        assert!(close(bottom[0], 0.0) && close(bottom[1], -1.0));
    }

    #[test]
    fn test_polar_goes_clockwise_from_top() {
        let right = polar(FRAC_PI_2, 2.0);
        assert!(close(right[0], 2.0) && close(right[1], 0.0));
    }

    #[test]
    fn test_radar_vertex_normalises_into_domain() {
        let top = radar_vertex(0, 4, 100.0, (0.0, 100.0));
        assert!(close(top[0], 0.0) && close(top[1], 1.0));

        let right = radar_vertex(1, 4, 50.0, (0.0, 100.0));
        assert!(close(right[0], 0.5) && close(right[1], 0.0));

        let degenerate = radar_vertex(2, 4, 50.0, (10.0, 10.0));
        assert!(close(degenerate[0], 0.0) && close(degenerate[1], 0.0));
    }

    #[test]
    fn test_category_offsets_are_centered() {
        let (offsets, width) = category_offsets(2);
        assert!(close(width, 0.4));
        assert!(close(offsets[0], -0.2));
        assert!(close(offsets[1], 0.2));

        let (single, width) = category_offsets(1);
        assert!(close(single[0], 0.0));
        assert!(close(width, 0.8));
    }
}
