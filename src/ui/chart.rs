//! Line and scatter charts for flat axes.

use super::formatters::tick_labels;
use super::ThemeColors;
use crate::plot::{Axes, PlotKind, SeriesData};
use crate::util::blend;
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::Style,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition, Paragraph},
    Frame,
};

/// Widen a range by `frac` of its length on both sides; a single value
/// gets a unit margin.
pub(super) fn padded(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = max - min;
    if span.abs() < 1e-12 {
        (min - 1.0, max + 1.0)
    } else {
        (min - span * frac, max + span * frac)
    }
}

/// Draw every curve of `axes` as a braille chart with a legend.
pub(super) fn draw_chart(f: &mut Frame<'_>, area: Rect, axes: &Axes, colors: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .title(format!(" {} ", axes.title().unwrap_or("Plot")))
        .title_style(Style::default().fg(colors.heading))
        .style(Style::default().bg(colors.bg));

    let (Some((x_min, x_max)), Some((y_lo, y_hi))) = (axes.x_range(), axes.y_range()) else {
        let para = Paragraph::new("No data to display")
            .style(Style::default().fg(colors.text))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(para, area);
        return;
    };

    // Add padding to avoid edge clipping - 15% margin
    let (y_min, y_max) = padded(y_lo, y_hi, 0.15);
    let (x_min, x_max) = if x_max > x_min {
        (x_min, x_max)
    } else {
        padded(x_min, x_max, 0.0)
    };

    // Keep only finite points
    let points: Vec<Vec<(f64, f64)>> = axes
        .series()
        .iter()
        .map(|s| match &s.data {
            SeriesData::Curve { x, y } => x
                .iter()
                .zip(y.iter())
                .filter(|(x, y)| x.is_finite() && y.is_finite())
                .map(|(&x, &y)| (x, y))
                .collect(),
            SeriesData::Surface { .. } => Vec::new(),
        })
        .collect();

    let datasets: Vec<Dataset<'_>> = axes
        .series()
        .iter()
        .zip(points.iter())
        .map(|(s, data)| {
            let graph_type = match s.kind {
                PlotKind::Scatter => GraphType::Scatter,
                _ => GraphType::Line,
            };
            let color = s.style.color.unwrap_or(colors.text);
            Dataset::default()
                .name(s.label.as_str())
                .marker(s.style.marker())
                .graph_type(graph_type)
                .style(Style::default().fg(blend(color, colors.bg, s.style.opacity)))
                .data(data)
        })
        .collect();

    let x_axis = Axis::default()
        .title("x")
        .style(Style::default().fg(colors.label))
        .bounds([x_min, x_max])
        .labels(tick_labels(x_min, x_max));

    let y_axis = Axis::default()
        .title("f(x)")
        .style(Style::default().fg(colors.label))
        .bounds([y_min, y_max])
        .labels(tick_labels(y_min, y_max));

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(x_axis)
        .y_axis(y_axis)
        .legend_position(Some(LegendPosition::TopRight))
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));

    f.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding() {
        assert_eq!(padded(0.0, 10.0, 0.1), (-1.0, 11.0));
        assert_eq!(padded(3.0, 3.0, 0.15), (2.0, 4.0));
    }
}
