use crate::descriptors::{self, MetricDescriptor};
use crate::errors::{AppError, Result};
use crate::labels::{self, HAlign, VAlign};
use crate::model::{ClaimsDocument, Point};
use indexmap::IndexMap;
use plotters::coord::ranged1d::{AsRangedCoord, Ranged, ValueFormatter};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

macro_rules! hexcolour {
    ($colour:literal) => {
        RGBColor(
            (($colour & 0xFF0000) >> 16) as u8,
            (($colour & 0x00FF00) >> 8) as u8,
            ($colour & 0x0000FF) as u8,
        )
    };
}

// Fixed role colours: blue for measured data, purple for claimed/reference.
const ACTUAL_COLOUR: RGBColor = hexcolour!(0x2E86AB);
const CLAIMED_COLOUR: RGBColor = hexcolour!(0xA23B72);

const COMPARISON_SIZE: (u32, u32) = (2000, 1000);
const SUMMARY_WIDTH: u32 = 1400;
const SUMMARY_PANEL_HEIGHT: u32 = 500;

#[derive(Debug, PartialEq)]
struct Bounds {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

fn bounds(actual: &[Point], claims: &[Point]) -> Bounds {
    let mut b = Bounds {
        x_min: f64::INFINITY,
        x_max: f64::NEG_INFINITY,
        y_min: f64::INFINITY,
        y_max: f64::NEG_INFINITY,
    };
    for &(x, y) in actual.iter().chain(claims.iter()) {
        b.x_min = b.x_min.min(x);
        b.x_max = b.x_max.max(x);
        b.y_min = b.y_min.min(y);
        b.y_max = b.y_max.max(y);
    }
    if !b.x_min.is_finite() {
        // No points at all, draw empty axes over a unit range.
        return Bounds {
            x_min: 0.0,
            x_max: 1.0,
            y_min: 0.0,
            y_max: 1.0,
        };
    }
    b
}

fn padded(min: f64, max: f64) -> (f64, f64) {
    let span = max - min;
    let pad = if span > 0.0 {
        span * 0.05
    } else {
        (min.abs() * 0.1).max(1.0)
    };
    (min - pad, max + pad)
}

/// Positive x-range for the log panel. Concurrency levels are expected to be
/// >= 1 but the input is not validated.
fn log_x_range(b: &Bounds) -> (f64, f64) {
    let lo = if b.x_min > 0.0 { b.x_min * 0.9 } else { 0.1 };
    let hi = if b.x_max > lo { b.x_max * 1.1 } else { lo * 10.0 };
    (lo, hi)
}

fn anchor(h: HAlign, v: VAlign) -> Pos {
    let hpos = match h {
        HAlign::Left => HPos::Left,
        HAlign::Right => HPos::Right,
    };
    let vpos = match v {
        VAlign::Bottom => VPos::Bottom,
        VAlign::Top => VPos::Top,
    };
    Pos::new(hpos, vpos)
}

#[allow(clippy::too_many_arguments)]
fn draw_panel<XR>(
    area: &DrawingArea<BitMapBackend, Shift>,
    panel_title: &str,
    x_desc: &str,
    desc: &MetricDescriptor,
    x_range: XR,
    y_range: std::ops::Range<f64>,
    actual: &[Point],
    claims: &[Point],
    with_point_labels: bool,
    legend_labels: (&str, &str),
) -> Result<()>
where
    XR: AsRangedCoord<Value = f64>,
    XR::CoordDescType: Ranged<ValueType = f64> + ValueFormatter<f64>,
{
    let mut chart = ChartBuilder::on(area)
        .caption(panel_title, ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, y_range)
        .map_err(AppError::plot)?;

    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc(&desc.y_label)
        .axis_desc_style(("sans-serif", 16))
        .draw()
        .map_err(AppError::plot)?;

    chart
        .draw_series(LineSeries::new(
            actual.iter().copied(),
            ACTUAL_COLOUR.stroke_width(3),
        ))
        .map_err(AppError::plot)?
        .label(legend_labels.0)
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], ACTUAL_COLOUR.stroke_width(3)));

    chart
        .draw_series(
            actual
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 5, ACTUAL_COLOUR.filled())),
        )
        .map_err(AppError::plot)?;

    // Claims go on as given, no interpolation onto the actual x-values.
    if !claims.is_empty() {
        chart
            .draw_series(DashedLineSeries::new(
                claims.iter().copied(),
                8,
                6,
                CLAIMED_COLOUR.stroke_width(3),
            ))
            .map_err(AppError::plot)?
            .label(legend_labels.1)
            .legend(|(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], CLAIMED_COLOUR.stroke_width(3))
            });

        chart
            .draw_series(claims.iter().map(|&(x, y)| {
                EmptyElement::at((x, y)) + Rectangle::new([(-5, -5), (5, 5)], CLAIMED_COLOUR.filled())
            }))
            .map_err(AppError::plot)?;
    }

    if with_point_labels {
        for (series, is_actual, colour) in
            [(actual, true, ACTUAL_COLOUR), (claims, false, CLAIMED_COLOUR)]
        {
            if series.is_empty() {
                continue;
            }
            let placed = labels::placements(series, is_actual);
            // Label every second point, alternating between the two series.
            let parity = if is_actual { 0 } else { 1 };
            chart
                .draw_series(placed.iter().enumerate().filter(|(i, _)| i % 2 == parity).map(
                    |(_, p)| {
                        let style = TextStyle::from(("sans-serif", 13).into_font())
                            .color(&colour)
                            .pos(anchor(p.h_align, p.v_align));
                        let text =
                            format!("({}, {:.1})", p.point.0 as i64, p.point.1);
                        // Screen y grows downward, placement dy means "up".
                        EmptyElement::at(p.point) + Text::new(text, (p.dx, -p.dy), style)
                    },
                ))
                .map_err(AppError::plot)?;
        }
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.95))
        .border_style(BLACK)
        .label_font(("sans-serif", 14))
        .draw()
        .map_err(AppError::plot)?;

    Ok(())
}

/// Renders `<metric_name>_comparison.png`: the same data on a linear and a
/// logarithmic concurrency axis, side by side.
pub fn comparison_chart(
    metric_name: &str,
    actual: &[Point],
    claims: &[Point],
    output_dir: &Path,
) -> Result<PathBuf> {
    let desc = descriptors::lookup(metric_name);
    let path = output_dir.join(format!("{metric_name}_comparison.png"));

    let backend_path = path.clone();
    let root = BitMapBackend::new(&backend_path, COMPARISON_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(AppError::plot)?;
    let root = root
        .titled(
            &format!("{} - Performance Comparison", desc.title),
            ("sans-serif", 32),
        )
        .map_err(AppError::plot)?;

    let b = bounds(actual, claims);
    let (x_lo, x_hi) = padded(b.x_min, b.x_max);
    let (y_lo, y_hi) = padded(b.y_min, b.y_max);
    let (log_lo, log_hi) = log_x_range(&b);

    let panels = root.split_evenly((1, 2));

    let legends = ("Actual Performance", "Claimed/Reference Performance");
    draw_panel(
        &panels[0],
        "Linear Scale",
        "Concurrency Level",
        &desc,
        x_lo..x_hi,
        y_lo..y_hi,
        actual,
        claims,
        true,
        legends,
    )?;

    if let Some(note) = &desc.note {
        panels[0]
            .draw(&Text::new(
                note.clone(),
                (110, 70),
                ("sans-serif", 16).into_font().color(&BLACK),
            ))
            .map_err(AppError::plot)?;
    }

    draw_panel(
        &panels[1],
        "Log Scale",
        "Concurrency Level (Log Scale)",
        &desc,
        (log_lo..log_hi).log_scale(),
        y_lo..y_hi,
        actual,
        claims,
        true,
        legends,
    )?;

    root.present().map_err(AppError::plot)?;
    info!("generated {}", path.display());
    Ok(path)
}

/// Renders `summary_comparison.png`: one stacked panel per key metric present
/// in the document. Returns `None` when none of the key metrics are present.
pub fn summary_chart(
    metrics: &IndexMap<String, Vec<Point>>,
    claims: &ClaimsDocument,
    output_dir: &Path,
) -> Result<Option<PathBuf>> {
    let available: Vec<&str> = descriptors::KEY_METRICS
        .iter()
        .copied()
        .filter(|m| metrics.contains_key(*m))
        .collect();
    if available.is_empty() {
        warn!("no key metrics available for summary plot");
        return Ok(None);
    }

    let path = output_dir.join("summary_comparison.png");
    let height = SUMMARY_PANEL_HEIGHT * available.len() as u32;
    let backend_path = path.clone();
    let root = BitMapBackend::new(&backend_path, (SUMMARY_WIDTH, height)).into_drawing_area();
    root.fill(&WHITE).map_err(AppError::plot)?;
    let root = root
        .titled("Performance Comparison Summary", ("sans-serif", 32))
        .map_err(AppError::plot)?;

    let panels = root.split_evenly((available.len(), 1));
    let empty = Vec::new();

    for (panel, name) in panels.iter().zip(&available) {
        let desc = descriptors::lookup(name);
        let actual = &metrics[*name];
        let claims_series = claims.get(*name).unwrap_or(&empty);

        let b = bounds(actual, claims_series);
        let (x_lo, x_hi) = padded(b.x_min, b.x_max);
        let (y_lo, y_hi) = padded(b.y_min, b.y_max);

        draw_panel(
            panel,
            &desc.title,
            "Concurrency Level",
            &desc,
            x_lo..x_hi,
            y_lo..y_hi,
            actual,
            claims_series,
            false,
            ("Actual", "Claimed"),
        )?;
    }

    root.present().map_err(AppError::plot)?;
    info!("generated {}", path.display());
    Ok(Some(path))
}
