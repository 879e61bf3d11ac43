//! Interactive full-screen viewer.

use super::Renderer;
use crate::error::{PlotError, Result};
use crate::plot::{Axes, Projection};
use crate::ui::{self, Theme, View};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Camera step per key press, in radians.
const ROTATE_STEP: f64 = 0.1;

/// Opens the plot on the alternate screen and blocks until it is closed.
#[derive(Debug, Clone, Default)]
pub struct TerminalRenderer {
    theme: Theme,
}

impl TerminalRenderer {
    /// Create a renderer with the default theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

impl Renderer for TerminalRenderer {
    fn show(&mut self, axes: &Axes) -> Result<()> {
        // Setup terminal
        enable_raw_mode().map_err(|e| PlotError::Terminal(e.to_string()))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let mut view = View {
            theme: self.theme,
            interactive: true,
            ..View::of(axes)
        };
        let res = run_viewer(&mut terminal, axes, &mut view);

        // Restore terminal
        disable_raw_mode().map_err(|e| PlotError::Terminal(e.to_string()))?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        // Keep the theme the user picked for the next plot
        self.theme = view.theme;
        tracing::info!("Viewer closed");
        res
    }
}

fn run_viewer<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    axes: &Axes,
    view: &mut View,
) -> Result<()> {
    let rotatable = axes.projection() == Projection::ThreeD;

    loop {
        terminal.draw(|f| ui::draw(f, axes, &*view))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match (key.modifiers, key.code) {
            // Close
            (_, KeyCode::Esc) | (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(()),
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Ok(()),

            // Theme
            (_, KeyCode::Char('T')) => {
                view.theme = view.theme.next();
            },

            // Rotate with hjkl or arrows
            (KeyModifiers::NONE, KeyCode::Left) | (KeyModifiers::NONE, KeyCode::Char('h'))
                if rotatable =>
            {
                view.camera.rotate(-ROTATE_STEP, 0.0);
            },
            (KeyModifiers::NONE, KeyCode::Right) | (KeyModifiers::NONE, KeyCode::Char('l'))
                if rotatable =>
            {
                view.camera.rotate(ROTATE_STEP, 0.0);
            },
            (KeyModifiers::NONE, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k'))
                if rotatable =>
            {
                view.camera.rotate(0.0, ROTATE_STEP);
            },
            (KeyModifiers::NONE, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j'))
                if rotatable =>
            {
                view.camera.rotate(0.0, -ROTATE_STEP);
            },
            (KeyModifiers::NONE, KeyCode::Char('r')) => {
                view.camera = axes.camera();
            },

            _ => {},
        }
    }
}
