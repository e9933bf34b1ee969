//! Rendering surfaces for the board.
//!
//! The scheduler only ever asks for two kinds of frame: a few lines of text
//! in one colour, or the arrivals view. Each call redraws the whole panel.

mod terminal;

pub use terminal::{PANEL_COLUMNS, TerminalDisplay};

use crate::domain::{Arrival, Color};

/// A full-frame output device.
///
/// Rendering is fire-and-forget: an implementation that fails to draw logs
/// the problem itself, the scheduler never sees it.
pub trait BoardDisplay {
    /// Draw `lines` top to bottom in `color`.
    fn render_lines(&mut self, lines: &[&str], color: Color);

    /// Draw the arrivals view: status swatch, title and one row per arrival.
    fn render_arrivals(&mut self, page: &[Arrival], status_color: Color);
}

impl<D: BoardDisplay + ?Sized> BoardDisplay for &mut D {
    fn render_lines(&mut self, lines: &[&str], color: Color) {
        (**self).render_lines(lines, color);
    }

    fn render_arrivals(&mut self, page: &[Arrival], status_color: Color) {
        (**self).render_arrivals(page, status_color);
    }
}
