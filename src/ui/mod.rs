//! User interface rendering.

mod chart;
mod form_view;
mod keymap_bar;
mod pages;
mod status_bar;
mod theme;

use std::time::Instant;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

pub use theme::ThemeColors;

use crate::app::{App, Page};

/// Widest a comparison bar track gets, in cells.
const MAX_CHART_WIDTH: u16 = 72;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &mut App, now: Instant) {
    let colors = ThemeColors::from_theme(&app.theme);

    // Main layout: nav tabs, content, status bar, key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    // Navigation tabs
    let titles = Page::ALL.map(|p| app.page_title(p));
    let tabs = Tabs::new(titles.to_vec())
        .select(app.page.index())
        .style(Style::default().fg(colors.label).bg(colors.bg))
        .highlight_style(
            Style::default()
                .fg(colors.accent)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, chunks[0]);

    // Content area
    let content_area = chunks[1];
    let inner_width = content_area.width.saturating_sub(4);
    let chart_width = inner_width.min(MAX_CHART_WIDTH).max(10);

    let lines = match app.page {
        Page::Home => pages::home_lines(&app.deck.home, &mut app.home_anim, now, &colors),
        Page::About => pages::about_lines(&app.deck.about, &colors),
        Page::Opportunity => pages::opportunity_lines(&app.deck.opportunity, &colors),
        Page::WhyParaguay => pages::why_paraguay_lines(
            &app.deck.why_paraguay,
            &mut app.why_anim,
            now,
            chart_width,
            &colors,
        ),
        Page::Contact => form_view::contact_lines(&app.deck.contact, &app.form, &colors),
    };

    let title = format!(" {} ", app.page_title(app.page));
    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .style(Style::default().bg(colors.bg)),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    f.render_widget(paragraph, content_area);

    // Status bar
    status_bar::draw_status(f, chunks[2], &app.status, &colors);

    // Key map bar
    keymap_bar::draw_keymap(f, chunks[3], app.form_editing, &colors);
}
