//! Point-annotation placement. Picks a pixel offset per point from fixed tables
//! keyed by local density, so neighbouring labels tend to land on different sides
//! of the line. Best effort only, overlaps are reduced, not eliminated.

use crate::model::Point;

/// Assumed x-spacing when a series has a single point.
pub const SINGLE_POINT_SPACING: f64 = 100.0;

const BASE_DISTANCE: i32 = 8;

const VERY_CROWDED_OFFSETS: [(i32, i32); 8] = [
    (5, 20),
    (-30, 15),
    (25, -8),
    (-20, -20),
    (35, 5),
    (-35, 25),
    (15, -25),
    (-15, 30),
];

const CROWDED_OFFSETS: [(i32, i32); 6] =
    [(5, 15), (-25, 12), (20, -5), (-15, -15), (30, 8), (-20, 20)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Bottom,
    Top,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelPlacement {
    pub point: Point,
    /// Horizontal pixel offset, positive is to the right.
    pub dx: i32,
    /// Vertical pixel offset, positive is above the point.
    pub dy: i32,
    pub h_align: HAlign,
    pub v_align: VAlign,
    pub nearby: usize,
}

/// Computes one placement per point, in input order. Claims-series offsets are
/// vertically mirrored so actual and claims annotations bias to opposite sides.
pub fn placements(points: &[Point], is_actual: bool) -> Vec<LabelPlacement> {
    if points.is_empty() {
        return Vec::new();
    }

    let avg_spacing = if points.len() > 1 {
        let x_min = points.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
        let x_max = points.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
        (x_max - x_min) / (points.len() - 1) as f64
    } else {
        SINGLE_POINT_SPACING
    };

    let y_min = points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
    let y_max = points.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);
    let y_range = y_max - y_min;

    points
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| {
            let nearby = points
                .iter()
                .enumerate()
                .filter(|&(j, other)| i != j && (x - other.0).abs() < avg_spacing * 0.5)
                .count();

            let (mut dx, mut dy) = if nearby > 2 {
                VERY_CROWDED_OFFSETS[i % VERY_CROWDED_OFFSETS.len()]
            } else if nearby > 1 {
                CROWDED_OFFSETS[i % CROWDED_OFFSETS.len()]
            } else if nearby > 0 {
                match i % 3 {
                    0 => (5, BASE_DISTANCE),
                    1 => (-20, BASE_DISTANCE + 5),
                    _ => (15, -BASE_DISTANCE + 3),
                }
            } else if is_actual {
                (5, BASE_DISTANCE)
            } else {
                (5, -BASE_DISTANCE)
            };
            if !is_actual && nearby > 0 {
                dy = -dy;
            }

            // Close consecutive y-values need extra separation.
            if i > 0 && (y - points[i - 1].1).abs() < y_range * 0.1 {
                dy += if dy > 0 { 10 } else { -10 };
                dx += if i % 2 == 0 { 10 } else { -15 };
            }

            let h_align = if dx >= 0 { HAlign::Left } else { HAlign::Right };
            let v_align = if dy >= 0 { VAlign::Bottom } else { VAlign::Top };

            LabelPlacement {
                point: (x, y),
                dx,
                dy,
                h_align,
                v_align,
                nearby,
            }
        })
        .collect()
}
