// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Drawing the controller's display into a ratatui frame.
//!
//! The view is a verbatim presentation of [`DisplayText`]: a rendered frame
//! becomes styled half-block lines, an error message becomes wrapped plain
//! text, and a blank display leaves the cleared screen alone.

use meridian_core::{DisplayText, MapController, TextImage, HALF_BLOCK};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn render(frame: &mut Frame, controller: &MapController) {
    let area = frame.area();
    match controller.display() {
        DisplayText::Blank => {}
        DisplayText::Frame(image) => {
            frame.render_widget(Paragraph::new(to_text(image)), area);
        }
        DisplayText::Notice(message) => {
            frame.render_widget(
                Paragraph::new(message.as_str()).wrap(Wrap { trim: false }),
                area,
            );
        }
    }
}

/// Converts a half-block frame into ratatui lines. Runs of identically
/// colored cells collapse into one span.
pub fn to_text(image: &TextImage) -> Text<'static> {
    let mut lines = Vec::with_capacity(image.rows().len());
    for row in image.rows() {
        let mut spans: Vec<Span<'static>> = Vec::new();
        let mut run_style: Option<Style> = None;
        let mut run = String::new();
        for cell in row {
            let style = Style::default()
                .fg(Color::Rgb(cell.top.r, cell.top.g, cell.top.b))
                .bg(Color::Rgb(cell.bottom.r, cell.bottom.g, cell.bottom.b));
            if run_style != Some(style) {
                if let Some(style) = run_style.take() {
                    spans.push(Span::styled(std::mem::take(&mut run), style));
                }
                run_style = Some(style);
            }
            run.push(HALF_BLOCK);
        }
        if let Some(style) = run_style {
            spans.push(Span::styled(run, style));
        }
        lines.push(Line::from(spans));
    }
    Text::from(lines)
}
