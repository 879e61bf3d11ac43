//! Colorbar for color-mapped surfaces.

use super::formatters::format_axis_label;
use super::ThemeColors;
use crate::plot::ColorField;
use ratatui::{buffer::Buffer, layout::Rect, style::Color, Frame};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Write `text` starting at column `x`, clipped at `right`. Returns the
/// column after the last written character.
fn put_str(buf: &mut Buffer, mut x: u16, y: u16, right: u16, text: &str, fg: Color, bg: Color) -> u16 {
    for ch in text.chars() {
        let width = ch.width().unwrap_or(0).max(1) as u16;
        if x + width > right {
            break;
        }
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_char(ch).set_fg(fg).set_bg(bg);
        }
        x += width;
    }
    x
}

/// Draw a one-line colorbar: `|label| min ████████ max`.
pub(super) fn draw_colorbar(
    f: &mut Frame<'_>,
    area: Rect,
    field: &ColorField,
    label: &str,
    colors: &ThemeColors,
) {
    if area.width < 8 || area.height == 0 {
        return;
    }

    let min_label = format_axis_label(field.min);
    let max_label = format_axis_label(field.max);
    let title = format!("|{}|", label);

    let reserved = title.width() + min_label.width() + max_label.width() + 3;
    let colorbar_width = 40.min((area.width as usize).saturating_sub(reserved));
    let total = reserved + colorbar_width;
    let y = area.y;
    let right = area.x + area.width;
    let mut x = area.x + ((area.width as usize).saturating_sub(total) / 2) as u16;

    let buf = f.buffer_mut();
    x = put_str(buf, x, y, right, &title, colors.text, colors.bg) + 1;
    x = put_str(buf, x, y, right, &min_label, colors.label, colors.bg) + 1;

    // A degenerate field paints its single fallback color across the bar.
    for i in 0..colorbar_width {
        if x >= right {
            break;
        }
        let t = i as f64 / colorbar_width.saturating_sub(1).max(1) as f64;
        let color = if field.is_degenerate() {
            field.fallback_color()
        } else {
            field.palette.color(t)
        };
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_char('█').set_fg(color).set_bg(colors.bg);
        }
        x += 1;
    }

    put_str(buf, x + 1, y, right, &max_label, colors.label, colors.bg);
}
