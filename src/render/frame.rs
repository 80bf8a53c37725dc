//! Plotters drawing of a computed `FramePlan`.
//!
//! All chart furniture lives here: axes, the dual-mandate target box,
//! tenure polygons/lines, the current-point highlight, the "We are here"
//! annotation, the date badge, and the legend. Any backend failure
//! surfaces as a render error (exit code 4).

use plotters::chart::ChartContext;
use plotters::coord::Shift;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::domain::{RenderConfig, TenurePath, TimeSeriesPoint};
use crate::error::AppError;
use crate::render::plan::{FramePlan, PathState};

/// Whether the frame belongs to the animation or is the standalone preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    Animation,
    Preview,
}

type Chart2d<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

fn render_err(e: impl std::fmt::Display) -> AppError {
    AppError::render(format!("Drawing failed: {e}"))
}

fn rgb((r, g, b): (u8, u8, u8)) -> RGBColor {
    RGBColor(r, g, b)
}

/// 50% darker variant used for polygon outlines.
fn darker(color: RGBColor) -> RGBColor {
    RGBColor(color.0 / 2, color.1 / 2, color.2 / 2)
}

/// Draw one complete frame onto `area`.
///
/// Pure with respect to its inputs: the same plan, dataset, and config
/// always produce the same pixels.
pub fn draw_frame<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    kind: FrameKind,
    plan: &FramePlan,
    paths: &[TenurePath],
    points: &[TimeSeriesPoint],
    config: &RenderConfig,
) -> Result<(), AppError> {
    area.fill(&WHITE).map_err(render_err)?;

    let title = frame_title(kind, plan, paths, points);
    let mut chart = ChartBuilder::on(area)
        .margin(12)
        .caption(title, ("sans-serif", 24))
        .x_label_area_size(42)
        .y_label_area_size(48)
        .build_cartesian_2d(
            config.x_range.0..config.x_range.1,
            config.y_range.0..config.y_range.1,
        )
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc("Unemployment Rate (%)")
        .y_desc("Core CPI YoY (%)")
        .bold_line_style(BLACK.mix(0.12))
        .light_line_style(TRANSPARENT)
        .draw()
        .map_err(render_err)?;

    draw_target_zone(&mut chart, config)?;

    for (path, state) in paths.iter().zip(&plan.states) {
        match *state {
            PathState::Completed => draw_completed(&mut chart, path)?,
            PathState::Growing { upto } => draw_growing(&mut chart, path, upto)?,
            PathState::Pending => {}
        }
    }

    if plan.highlight_current {
        draw_current_marker(&mut chart, plan.current, paths, points)?;
    }
    if plan.annotate_here {
        draw_here_annotation(&mut chart, points)?;
    }

    draw_date_badge(&mut chart, plan, points, config)?;
    if kind == FrameKind::Preview {
        draw_preview_badge(&mut chart, config)?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK.mix(0.4))
        .label_font(("sans-serif", 14))
        .draw()
        .map_err(render_err)?;

    Ok(())
}

/// Title line for a frame.
pub fn frame_title(
    kind: FrameKind,
    plan: &FramePlan,
    paths: &[TenurePath],
    points: &[TimeSeriesPoint],
) -> String {
    match kind {
        FrameKind::Preview => {
            let from = points
                .first()
                .map(|p| p.date.format("%Y").to_string())
                .unwrap_or_default();
            let to = points
                .last()
                .map(|p| p.date.format("%Y").to_string())
                .unwrap_or_default();
            format!("Phillips Curve Evolution by Fed Chair ({from}-{to})")
        }
        FrameKind::Animation => {
            let date = points
                .get(plan.current)
                .map(|p| p.date.format("%Y-%m").to_string())
                .unwrap_or_default();
            let chair = paths
                .iter()
                .find(|p| p.first_idx <= plan.current && plan.current <= p.last_idx())
                .map(|p| p.tenure.name.as_str())
                .unwrap_or("");
            format!("Phillips Curve Path - {date} ({chair})")
        }
    }
}

fn draw_target_zone<DB: DrawingBackend>(
    chart: &mut Chart2d<'_, DB>,
    config: &RenderConfig,
) -> Result<(), AppError> {
    let zone = config.target_zone;
    let corners = [
        (zone.unemployment.0, zone.inflation.0),
        (zone.unemployment.1, zone.inflation.1),
    ];
    let grey = RGBColor(128, 128, 128);

    chart
        .draw_series(std::iter::once(Rectangle::new(corners, grey.mix(0.5).filled())))
        .map_err(render_err)?;
    chart
        .draw_series(std::iter::once(Rectangle::new(corners, BLACK.stroke_width(2))))
        .map_err(render_err)?;

    let center = (
        (zone.unemployment.0 + zone.unemployment.1) / 2.0,
        (zone.inflation.0 + zone.inflation.1) / 2.0,
    );
    let style =
        TextStyle::from(("sans-serif", 14).into_font()).pos(Pos::new(HPos::Center, VPos::Center));
    chart
        .draw_series(std::iter::once(Text::new("Fed Target".to_string(), center, style)))
        .map_err(render_err)?;

    Ok(())
}

fn draw_completed<DB: DrawingBackend>(
    chart: &mut Chart2d<'_, DB>,
    path: &TenurePath,
) -> Result<(), AppError> {
    let color = rgb(path.tenure.color);
    let pts: Vec<(f64, f64)> = path.xy().collect();

    chart
        .draw_series(std::iter::once(Polygon::new(pts.clone(), color.mix(0.3).filled())))
        .map_err(render_err)?
        .label(path.tenure.name.as_str())
        .legend(move |(x, y)| Circle::new((x, y), 4, color.filled()));

    // Close the outline back to the path's first point.
    let mut outline = pts;
    if let Some(&first) = outline.first() {
        outline.push(first);
    }
    chart
        .draw_series(std::iter::once(PathElement::new(
            outline,
            darker(color).stroke_width(2),
        )))
        .map_err(render_err)?;

    Ok(())
}

fn draw_growing<DB: DrawingBackend>(
    chart: &mut Chart2d<'_, DB>,
    path: &TenurePath,
    upto: usize,
) -> Result<(), AppError> {
    let color = rgb(path.tenure.color);
    let pts: Vec<(f64, f64)> = path.xy().take(upto).collect();

    if pts.len() > 1 {
        chart
            .draw_series(LineSeries::new(pts.iter().copied(), color.stroke_width(2)))
            .map_err(render_err)?;
    }
    chart
        .draw_series(pts.iter().map(|&(x, y)| Circle::new((x, y), 3, color.filled())))
        .map_err(render_err)?
        .label(path.tenure.name.as_str())
        .legend(move |(x, y)| Circle::new((x, y), 4, color.filled()));

    Ok(())
}

/// Ring around the point the animation just reached.
fn draw_current_marker<DB: DrawingBackend>(
    chart: &mut Chart2d<'_, DB>,
    current: usize,
    paths: &[TenurePath],
    points: &[TimeSeriesPoint],
) -> Result<(), AppError> {
    let Some(point) = points.get(current) else {
        return Ok(());
    };
    let color = paths
        .iter()
        .find(|p| p.first_idx <= current && current <= p.last_idx())
        .map(|p| rgb(p.tenure.color))
        .unwrap_or(BLACK);

    chart
        .draw_series(std::iter::once(Circle::new(
            (point.unemployment, point.inflation),
            6,
            color.stroke_width(3),
        )))
        .map_err(render_err)?;

    Ok(())
}

/// "We are here" on the dataset's most recent point, with an arrow from the
/// label down to the point.
fn draw_here_annotation<DB: DrawingBackend>(
    chart: &mut Chart2d<'_, DB>,
    points: &[TimeSeriesPoint],
) -> Result<(), AppError> {
    let Some(last) = points.last() else {
        return Ok(());
    };
    let target = (last.unemployment, last.inflation);
    let label_at = (target.0 + 1.5, target.1 + 1.0);
    let tip = (target.0 + 0.12, target.1 + 0.08);
    let tail = (label_at.0 - 0.1, label_at.1 - 0.1);

    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![tail, tip],
            BLACK.stroke_width(2),
        )))
        .map_err(render_err)?;
    chart
        .draw_series(std::iter::once(Polygon::new(
            arrow_head(tail, tip, 0.28),
            BLACK.filled(),
        )))
        .map_err(render_err)?;

    let style =
        TextStyle::from(("sans-serif", 16).into_font()).pos(Pos::new(HPos::Left, VPos::Center));
    chart
        .draw_series(std::iter::once(Text::new(
            "We are here".to_string(),
            label_at,
            style,
        )))
        .map_err(render_err)?;

    Ok(())
}

/// Large "Mon YYYY" readout in the upper-right corner.
fn draw_date_badge<DB: DrawingBackend>(
    chart: &mut Chart2d<'_, DB>,
    plan: &FramePlan,
    points: &[TimeSeriesPoint],
    config: &RenderConfig,
) -> Result<(), AppError> {
    let Some(point) = points.get(plan.current) else {
        return Ok(());
    };
    let badge_color = BLACK.mix(0.7);
    let style = TextStyle::from(("sans-serif", 30).into_font())
        .color(&badge_color)
        .pos(Pos::new(HPos::Right, VPos::Top));
    let at = (config.x_range.1 - 0.3, config.y_range.1 - 0.4);

    chart
        .draw_series(std::iter::once(Text::new(
            point.date.format("%b %Y").to_string(),
            at,
            style,
        )))
        .map_err(render_err)?;

    Ok(())
}

fn draw_preview_badge<DB: DrawingBackend>(
    chart: &mut Chart2d<'_, DB>,
    config: &RenderConfig,
) -> Result<(), AppError> {
    // Offset to the right so it clears the legend box.
    let at = (config.x_range.0 + 3.6, config.y_range.1 - 0.4);
    let style = TextStyle::from(("sans-serif", 20).into_font())
        .color(&RED)
        .pos(Pos::new(HPos::Left, VPos::Top));

    chart
        .draw_series(std::iter::once(Text::new("PREVIEW".to_string(), at, style)))
        .map_err(render_err)?;

    Ok(())
}

/// Triangle for an arrow head pointing from `tail` into `tip`, `size` long
/// in data units.
fn arrow_head(tail: (f64, f64), tip: (f64, f64), size: f64) -> Vec<(f64, f64)> {
    let (dx, dy) = (tail.0 - tip.0, tail.1 - tip.1);
    let len = (dx * dx + dy * dy).sqrt();
    if len < f64::EPSILON {
        return vec![tip, tip, tip];
    }
    let (ux, uy) = (dx / len, dy / len);
    let (px, py) = (-uy, ux);
    let base = (tip.0 + ux * size, tip.1 + uy * size);

    vec![
        tip,
        (base.0 + px * size * 0.45, base.1 + py * size * 0.45),
        (base.0 - px * size * 0.45, base.1 - py * size * 0.45),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ChairTenure;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, 1).unwrap()
    }

    fn sample_paths() -> (Vec<TenurePath>, Vec<TimeSeriesPoint>) {
        let points: Vec<TimeSeriesPoint> = (0u32..3)
            .map(|i| TimeSeriesPoint {
                date: date(2022, 1 + i),
                unemployment: 4.0 + f64::from(i) / 10.0,
                inflation: 5.0,
            })
            .collect();
        let paths = vec![TenurePath {
            tenure: ChairTenure {
                name: "Jerome Powell".to_string(),
                start: date(2018, 2),
                end: None,
                color: (166, 86, 40),
            },
            points: points.clone(),
            first_idx: 0,
        }];
        (paths, points)
    }

    #[test]
    fn animation_title_names_date_and_chair() {
        let (paths, points) = sample_paths();
        let plan = FramePlan::at(1, &paths, points.len(), &RenderConfig::default());
        let title = frame_title(FrameKind::Animation, &plan, &paths, &points);
        assert_eq!(title, "Phillips Curve Path - 2022-02 (Jerome Powell)");
    }

    #[test]
    fn preview_title_spans_the_dataset() {
        let (paths, points) = sample_paths();
        let plan = FramePlan::preview(&paths, points.len());
        let title = frame_title(FrameKind::Preview, &plan, &paths, &points);
        assert_eq!(title, "Phillips Curve Evolution by Fed Chair (2022-2022)");
    }

    #[test]
    fn arrow_head_is_anchored_at_the_tip() {
        let head = arrow_head((2.0, 2.0), (1.0, 1.0), 0.3);
        assert_eq!(head.len(), 3);
        assert_eq!(head[0], (1.0, 1.0));

        // The two barbs sit symmetrically around the shaft.
        let mid = (
            (head[1].0 + head[2].0) / 2.0,
            (head[1].1 + head[2].1) / 2.0,
        );
        let shaft = ((mid.0 - 1.0) / (2.0 - 1.0), (mid.1 - 1.0) / (2.0 - 1.0));
        assert!((shaft.0 - shaft.1).abs() < 1e-12);
    }
}
