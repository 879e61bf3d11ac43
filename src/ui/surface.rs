//! Wireframes and shaded surfaces projected onto a braille canvas.

use super::chart::padded;
use super::colorbar::draw_colorbar;
use super::formatters::format_axis_label;
use super::ThemeColors;
use crate::plot::projection::{light_intensity, triangle_normal};
use crate::plot::style::stride_indices;
use crate::plot::{Axes, Camera, PlotKind, Point3, Series, SeriesData};
use crate::util::{blend, shade};
use ndarray::Array2;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Context, Line as CanvasLine, Points},
        Block, Borders, Clear, Paragraph,
    },
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Height of the z axis relative to the unit x/y square.
const Z_SCALE: f64 = 0.8;

/// Maps data coordinates into the box `[-1, 1]^2 x [-Z_SCALE, Z_SCALE]`.
#[derive(Debug, Clone, Copy)]
struct UnitBox {
    x: (f64, f64),
    y: (f64, f64),
    z: (f64, f64),
}

impl UnitBox {
    fn from_axes(axes: &Axes) -> Option<Self> {
        let x = axes.x_range()?;
        let y = axes.y_range()?;
        let (z_lo, z_hi) = axes.z_range()?;
        let x = if x.1 > x.0 { x } else { padded(x.0, x.1, 0.0) };
        let y = if y.1 > y.0 { y } else { padded(y.0, y.1, 0.0) };
        let z = if z_hi > z_lo { (z_lo, z_hi) } else { padded(z_lo, z_hi, 0.0) };
        Some(Self { x, y, z })
    }

    fn point(&self, x: f64, y: f64, z: f64) -> Point3 {
        let unit = |v: f64, (lo, hi): (f64, f64)| 2.0 * (v - lo) / (hi - lo) - 1.0;
        Point3::new(unit(x, self.x), unit(y, self.y), Z_SCALE * unit(z, self.z))
    }

    fn height(&self, z: f64) -> f64 {
        (z - self.z.0) / (self.z.1 - self.z.0)
    }
}

fn box_corner(sx: f64, sy: f64, sz: f64) -> Point3 {
    Point3::new(sx, sy, sz * Z_SCALE)
}

/// Canvas bounds framing the projected box with square braille dots.
fn canvas_bounds(camera: &Camera, area: Rect) -> ([f64; 2], [f64; 2]) {
    let mut xs = (f64::INFINITY, f64::NEG_INFINITY);
    let mut ys = (f64::INFINITY, f64::NEG_INFINITY);
    for sx in [-1.0, 1.0] {
        for sy in [-1.0, 1.0] {
            for sz in [-1.0, 1.0] {
                let (px, py) = camera.project(box_corner(sx, sy, sz));
                xs = (xs.0.min(px), xs.1.max(px));
                ys = (ys.0.min(py), ys.1.max(py));
            }
        }
    }
    let (x0, x1) = padded(xs.0, xs.1, 0.08);
    let (y0, y1) = padded(ys.0, ys.1, 0.08);

    // Braille cells are 2x4 dots and terminal cells about twice as tall as
    // wide, so a dot is square when both axes use the same units per dot.
    let dots_x = (area.width.max(1) as f64) * 2.0;
    let dots_y = (area.height.max(1) as f64) * 4.0;
    let per_dot = ((x1 - x0) / dots_x).max((y1 - y0) / dots_y);
    let (cx, cy) = ((x0 + x1) / 2.0, (y0 + y1) / 2.0);
    let (hw, hh) = (per_dot * dots_x / 2.0, per_dot * dots_y / 2.0);

    ([cx - hw, cx + hw], [cy - hh, cy + hh])
}

/// Draw a 3D axes: bounding box, every series, colorbar and legend.
pub(super) fn draw_surface_axes(
    f: &mut Frame<'_>,
    area: Rect,
    axes: &Axes,
    camera: Camera,
    colors: &ThemeColors,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .title(format!(" {} ", axes.title().unwrap_or("Plot")))
        .title_style(Style::default().fg(colors.heading))
        .style(Style::default().bg(colors.bg));

    let Some(unit) = UnitBox::from_axes(axes) else {
        let para = Paragraph::new("No data to display")
            .style(Style::default().fg(colors.text))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(para, area);
        return;
    };

    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.width < 4 || inner.height < 4 {
        return;
    }

    // Reserve one line per colorbar above the canvas
    let colored: Vec<&Series> = axes
        .series()
        .iter()
        .filter(|s| s.color_field.is_some())
        .collect();
    let bar_rows = (colored.len() as u16).min(inner.height / 4);
    let canvas_area = Rect {
        x: inner.x,
        y: inner.y + bar_rows,
        width: inner.width,
        height: inner.height - bar_rows,
    };

    for (row, series) in colored.iter().take(bar_rows as usize).enumerate() {
        if let Some(field) = &series.color_field {
            let bar_area = Rect {
                x: inner.x,
                y: inner.y + row as u16,
                width: inner.width,
                height: 1,
            };
            draw_colorbar(f, bar_area, field, &series.label, colors);
        }
    }

    let (x_bounds, y_bounds) = canvas_bounds(&camera, canvas_area);
    let dot = (x_bounds[1] - x_bounds[0]) / (canvas_area.width.max(1) as f64 * 2.0);

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .background_color(colors.bg)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            draw_box(ctx, &camera, &unit, colors);
            ctx.layer();
            for series in axes.series() {
                match series.kind {
                    PlotKind::Wireframe => draw_mesh(ctx, &camera, &unit, series, dot, colors),
                    PlotKind::Surface | PlotKind::ColorMappedSurface => {
                        draw_faces(ctx, &camera, &unit, series, dot, colors)
                    },
                    // Flat kinds never reach 3D axes.
                    PlotKind::Line | PlotKind::Scatter => {},
                }
                ctx.layer();
            }
        });
    f.render_widget(canvas, canvas_area);

    draw_legend(f, canvas_area, axes, colors);
}

/// Floor of the bounding box, the back vertical edge and range labels.
fn draw_box(ctx: &mut Context<'_>, camera: &Camera, unit: &UnitBox, colors: &ThemeColors) {
    let floor = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];
    for k in 0..floor.len() {
        let (ax, ay) = floor[k];
        let (bx, by) = floor[(k + 1) % floor.len()];
        segment(ctx, camera, box_corner(ax, ay, -1.0), box_corner(bx, by, -1.0), colors.axis);
    }

    // The vertical edge furthest from the viewer never hides the surface.
    let (back_x, back_y) = floor
        .iter()
        .copied()
        .max_by(|a, b| {
            camera
                .depth(box_corner(a.0, a.1, 0.0))
                .total_cmp(&camera.depth(box_corner(b.0, b.1, 0.0)))
        })
        .unwrap_or((-1.0, 1.0));
    segment(
        ctx,
        camera,
        box_corner(back_x, back_y, -1.0),
        box_corner(back_x, back_y, 1.0),
        colors.axis,
    );

    let labels = [
        (box_corner(-1.0, -1.0, -1.0), format!("x={}", format_axis_label(unit.x.0))),
        (box_corner(1.0, -1.0, -1.0), format!("x={}", format_axis_label(unit.x.1))),
        (box_corner(1.0, 1.0, -1.0), format!("y={}", format_axis_label(unit.y.1))),
        (box_corner(back_x, back_y, 1.0), format!("z={}", format_axis_label(unit.z.1))),
    ];
    for (p, text) in labels {
        let (x, y) = camera.project(p);
        ctx.print(x, y, Line::styled(text, Style::default().fg(colors.label)));
    }
}

fn segment(ctx: &mut Context<'_>, camera: &Camera, a: Point3, b: Point3, color: Color) {
    let (x1, y1) = camera.project(a);
    let (x2, y2) = camera.project(b);
    ctx.draw(&CanvasLine {
        x1,
        y1,
        x2,
        y2,
        color,
    });
}

fn surface_arrays(series: &Series) -> Option<(&Array2<f64>, &Array2<f64>, &Array2<f64>)> {
    match &series.data {
        SeriesData::Surface { xs, ys, zs } => Some((xs, ys, zs)),
        SeriesData::Curve { .. } => None,
    }
}

fn unit_points(unit: &UnitBox, xs: &Array2<f64>, ys: &Array2<f64>, zs: &Array2<f64>) -> Array2<Point3> {
    Array2::from_shape_fn(zs.dim(), |idx| unit.point(xs[idx], ys[idx], zs[idx]))
}

fn is_finite(p: &Point3) -> bool {
    p.x.is_finite() && p.y.is_finite() && p.z.is_finite()
}

/// Mesh lines along every `rstride`-th row and `cstride`-th column.
fn draw_mesh(
    ctx: &mut Context<'_>,
    camera: &Camera,
    unit: &UnitBox,
    series: &Series,
    dot: f64,
    colors: &ThemeColors,
) {
    let Some((xs, ys, zs)) = surface_arrays(series) else {
        return;
    };
    let (rows, cols) = zs.dim();
    let points = unit_points(unit, xs, ys, zs);
    let color = blend(
        series.style.color.unwrap_or(colors.text),
        colors.bg,
        series.style.opacity,
    );
    let width = series.style.line_width.max(1) as usize;

    let mut stroke = |a: Point3, b: Point3| {
        if !is_finite(&a) || !is_finite(&b) {
            return;
        }
        let (x1, y1) = camera.project(a);
        let (x2, y2) = camera.project(b);
        // Thicker strokes repeat the line one dot lower each time.
        for k in 0..width {
            let off = k as f64 * dot;
            ctx.draw(&CanvasLine {
                x1,
                y1: y1 - off,
                x2,
                y2: y2 - off,
                color,
            });
        }
    };

    for i in stride_indices(rows, series.style.row_step()) {
        for j in 1..cols {
            stroke(points[[i, j - 1]], points[[i, j]]);
        }
    }
    for j in stride_indices(cols, series.style.col_step()) {
        for i in 1..rows {
            stroke(points[[i - 1, j]], points[[i, j]]);
        }
    }
}

/// A projected quad waiting to be painted.
struct Face {
    corners: [(f64, f64); 4],
    depth: f64,
    color: Color,
}

/// Filled quads painted back to front.
fn draw_faces(
    ctx: &mut Context<'_>,
    camera: &Camera,
    unit: &UnitBox,
    series: &Series,
    dot: f64,
    colors: &ThemeColors,
) {
    let Some((xs, ys, zs)) = surface_arrays(series) else {
        return;
    };
    let (rows, cols) = zs.dim();
    let points = unit_points(unit, xs, ys, zs);
    let row_idx = stride_indices(rows, series.style.row_step());
    let col_idx = stride_indices(cols, series.style.col_step());

    let mut faces = Vec::with_capacity(row_idx.len() * col_idx.len());
    for r in row_idx.windows(2) {
        for c in col_idx.windows(2) {
            let (i0, i1, j0, j1) = (r[0], r[1], c[0], c[1]);
            let quad = [
                points[[i0, j0]],
                points[[i0, j1]],
                points[[i1, j1]],
                points[[i1, j0]],
            ];
            if !quad.iter().all(is_finite) {
                continue;
            }

            let base = match &series.color_field {
                Some(field) => field.colors[[i0, j0]],
                None => {
                    let light = light_intensity(triangle_normal(quad[0], quad[1], quad[3]));
                    let color = series.style.color.unwrap_or_else(|| {
                        let mean_z = (zs[[i0, j0]] + zs[[i0, j1]] + zs[[i1, j1]] + zs[[i1, j0]]) / 4.0;
                        series.style.palette.color(unit.height(mean_z))
                    });
                    shade(color, light)
                },
            };

            faces.push(Face {
                corners: quad.map(|p| camera.project(p)),
                depth: quad.iter().map(|&p| camera.depth(p)).sum::<f64>() / 4.0,
                color: blend(base, colors.bg, series.style.opacity),
            });
        }
    }

    // Painter's algorithm: furthest faces first
    faces.sort_by(|a, b| b.depth.total_cmp(&a.depth));

    let mut coords = Vec::new();
    for face in &faces {
        fill_quad(&mut coords, &face.corners, dot);
        ctx.draw(&Points {
            coords: &coords,
            color: face.color,
        });
    }
}

/// Sample a projected quad densely enough to cover every dot it touches.
fn fill_quad(coords: &mut Vec<(f64, f64)>, corners: &[(f64, f64); 4], dot: f64) {
    let extent = |a: (f64, f64), b: (f64, f64)| (a.0 - b.0).abs().max((a.1 - b.1).abs());
    let longest = extent(corners[0], corners[1])
        .max(extent(corners[1], corners[2]))
        .max(extent(corners[2], corners[3]))
        .max(extent(corners[3], corners[0]));
    let steps = ((longest / dot.max(f64::EPSILON)).ceil() as usize + 1).clamp(2, 48);

    coords.clear();
    let [p00, p01, p11, p10] = *corners;
    for a in 0..steps {
        let u = a as f64 / (steps - 1) as f64;
        for b in 0..steps {
            let v = b as f64 / (steps - 1) as f64;
            let x = (1.0 - u) * ((1.0 - v) * p00.0 + v * p01.0) + u * ((1.0 - v) * p10.0 + v * p11.0);
            let y = (1.0 - u) * ((1.0 - v) * p00.1 + v * p01.1) + u * ((1.0 - v) * p10.1 + v * p11.1);
            coords.push((x, y));
        }
    }
}

/// Legend box in the top right corner for series without a colorbar.
fn draw_legend(f: &mut Frame<'_>, area: Rect, axes: &Axes, colors: &ThemeColors) {
    let entries: Vec<(&str, Color)> = axes
        .series()
        .iter()
        .filter(|s| s.color_field.is_none())
        .map(|s| {
            let color = s.style.color.unwrap_or_else(|| s.style.palette.color(0.6));
            (s.label.as_str(), color)
        })
        .collect();
    if entries.is_empty() {
        return;
    }

    let width = entries.iter().map(|(label, _)| label.width()).max().unwrap_or(0) as u16 + 4;
    let height = entries.len() as u16 + 2;
    if width > area.width / 2 || height > area.height / 2 {
        return;
    }
    let legend_area = Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height,
    };

    let lines: Vec<Line<'_>> = entries
        .iter()
        .map(|(label, color)| {
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(*color)),
                Span::styled(*label, Style::default().fg(colors.text)),
            ])
        })
        .collect();

    f.render_widget(Clear, legend_area);
    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .style(Style::default().bg(colors.bg)),
        ),
        legend_area,
    );
}
