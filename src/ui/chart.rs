//! Comparison chart rendering.
//!
//! Each chart ranks a handful of countries on one metric. Bar lengths come
//! from the clamped relative-magnitude formula; on the page's first reveal
//! the bars sweep in with the same ease-out curve as the counters, staggered
//! per row.

use std::time::Instant;

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::content::Chart;
use crate::numeric::{compute_bar_width, ease_out_cubic, DEFAULT_BAR_FLOOR};
use crate::ui::ThemeColors;

/// Seconds before the first bar starts sweeping.
const REVEAL_DELAY: f64 = 0.2;
/// Additional delay per row, for the staggered entrance.
const REVEAL_STAGGER: f64 = 0.1;
/// Sweep length in seconds.
const REVEAL_DURATION: f64 = 1.0;

/// How far a row's sweep has progressed, eased, in `[0, 1]`.
fn reveal_factor(revealed_at: Option<Instant>, now: Instant, row: usize) -> f64 {
    let Some(start) = revealed_at else {
        return 0.0;
    };
    let elapsed = now.saturating_duration_since(start).as_secs_f64();
    let delay = REVEAL_DELAY + REVEAL_STAGGER * row as f64;
    ease_out_cubic((elapsed - delay) / REVEAL_DURATION)
}

/// Render a chart as styled lines of the given width.
pub(super) fn chart_lines(
    chart: &Chart,
    revealed_at: Option<Instant>,
    now: Instant,
    width: u16,
    colors: &ThemeColors,
) -> Vec<Line<'static>> {
    let width = width as usize;
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        chart.title.clone(),
        Style::default()
            .fg(colors.heading)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        chart.label.clone(),
        Style::default().fg(colors.label),
    )));
    lines.push(Line::from(""));

    for (i, row) in chart.rows.iter().enumerate() {
        let (name_fg, value_fg, fill_bg) = if row.highlight {
            (colors.accent, colors.accent, colors.bar_highlight)
        } else {
            (colors.label, colors.text, colors.bar_fill)
        };

        // Country on the left, value right-aligned.
        let gap = width
            .saturating_sub(row.country.width() + row.value.width())
            .max(1);
        lines.push(Line::from(vec![
            Span::styled(row.country.clone(), Style::default().fg(name_fg)),
            Span::raw(" ".repeat(gap)),
            Span::styled(row.value.clone(), Style::default().fg(value_fg)),
        ]));

        // The bar itself, note text inside the filled portion.
        let target = compute_bar_width(row.magnitude(), chart.max_value, DEFAULT_BAR_FLOOR);
        let swept = target * reveal_factor(revealed_at, now, i);
        let filled = ((width as f64) * swept / 100.0).round() as usize;
        let filled = filled.min(width);

        lines.push(Line::from(vec![
            Span::styled(
                fit_to_width(&row.note, filled),
                Style::default().fg(colors.bg).bg(fill_bg),
            ),
            Span::styled(
                " ".repeat(width - filled),
                Style::default().bg(colors.bar_bg),
            ),
        ]));
        lines.push(Line::from(""));
    }

    lines
}

/// Truncate or pad `text` to exactly `cells` display columns.
fn fit_to_width(text: &str, cells: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > cells {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str(&" ".repeat(cells - used));
    out
}
