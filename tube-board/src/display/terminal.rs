//! Terminal rendering of the 128x64 panel.
//!
//! Text is laid out on the panel's character grid (6 px glyphs, so 21
//! columns) and coloured with ANSI true-colour escapes.

use std::io::{self, Stdout, Write};

use tracing::warn;

use crate::domain::{Arrival, Color};

use super::BoardDisplay;

/// Characters per panel row.
pub const PANEL_COLUMNS: usize = 21;

/// Column where the due text starts (x = 100 px on the panel).
const DUE_COLUMN: usize = 16;

const STATUS_SWATCH: &str = "\u{25a0}";
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const RESET: &str = "\x1b[0m";

/// Draws frames to a terminal (or any writer).
pub struct TerminalDisplay<W: Write> {
    out: W,
    title: String,
    ansi: bool,
}

impl TerminalDisplay<Stdout> {
    /// Draw to stdout with colour.
    pub fn stdout(title: impl Into<String>) -> Self {
        Self::new(io::stdout(), title)
    }
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W, title: impl Into<String>) -> Self {
        Self {
            out,
            title: title.into(),
            ansi: true,
        }
    }

    /// Disable escape sequences; each frame is written as plain lines.
    pub fn plain(mut self) -> Self {
        self.ansi = false;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.ansi {
            format!(
                "\x1b[38;2;{};{};{}m{text}{}",
                color.r, color.g, color.b, RESET
            )
        } else {
            text.to_string()
        }
    }

    fn write_frame(&mut self, rows: &[String]) {
        let mut frame = String::new();
        if self.ansi {
            frame.push_str(CLEAR_SCREEN);
        }
        for row in rows {
            frame.push_str(row);
            frame.push('\n');
        }

        let result = self
            .out
            .write_all(frame.as_bytes())
            .and_then(|()| self.out.flush());
        if let Err(e) = result {
            warn!(error = %e, "Failed to draw frame");
        }
    }
}

impl<W: Write> BoardDisplay for TerminalDisplay<W> {
    fn render_lines(&mut self, lines: &[&str], color: Color) {
        let rows: Vec<String> = lines
            .iter()
            .flat_map(|line| wrap(line, PANEL_COLUMNS))
            .map(|row| self.paint(&row, color))
            .collect();
        self.write_frame(&rows);
    }

    fn render_arrivals(&mut self, page: &[Arrival], status_color: Color) {
        let header = format!(
            "{} {}",
            self.paint(STATUS_SWATCH, status_color),
            self.paint(&truncate(&self.title, PANEL_COLUMNS - 2), Color::HEADER)
        );

        let mut rows = Vec::with_capacity(page.len() + 1);
        rows.push(header);
        rows.extend(page.iter().map(|a| self.paint(&arrival_row(a), Color::TEXT)));
        self.write_frame(&rows);
    }
}

/// One arrivals row: destination on the left, due text in its own column.
fn arrival_row(arrival: &Arrival) -> String {
    let dest = truncate(&arrival.short_destination(), DUE_COLUMN - 1);
    format!("{dest:<width$}{}", arrival.due_text(), width = DUE_COLUMN)
}

fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Greedy word wrap. Words longer than a row are split.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !current.is_empty() {
                rows.push(std::mem::take(&mut current));
            }
            let rest = word.split_off(width);
            rows.push(word.into_iter().collect());
            word = rest;
        }

        let current_len = current.chars().count();
        if !current.is_empty() && current_len + 1 + word.len() > width {
            rows.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.extend(word);
    }

    if !current.is_empty() || rows.is_empty() {
        rows.push(current);
    }
    rows
}
