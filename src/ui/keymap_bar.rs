//! Keymap help bar UI component.

use crate::plot::Projection;
use crate::ui::{Theme, ThemeColors};
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub(super) fn draw_keymap(
    f: &mut Frame<'_>,
    area: Rect,
    projection: Projection,
    theme: Theme,
    colors: &ThemeColors,
) {
    let keymap_text = match projection {
        Projection::Cartesian => format!("T:theme ({}) | q/Esc:close", theme.name()),
        Projection::ThreeD => format!(
            "hjkl/←↓↑→:rotate | r:reset view | T:theme ({}) | q/Esc:close",
            theme.name()
        ),
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}
