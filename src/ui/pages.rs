//! Content page rendering: Home, About, Opportunity, Why Paraguay.

use std::time::Instant;

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::app::PageAnimations;
use crate::content::{AboutPage, Blurb, HomePage, OpportunityPage, Stat, WhyParaguayPage};
use crate::ui::{chart, ThemeColors};

/// The small uppercase section label the site puts above every section.
fn section_label(text: &str, colors: &ThemeColors) -> Line<'static> {
    Line::from(Span::styled(
        text.to_uppercase(),
        Style::default().fg(colors.accent),
    ))
}

fn heading(text: &str, colors: &ThemeColors) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(colors.heading)
            .add_modifier(Modifier::BOLD),
    ))
}

fn body(text: &str, colors: &ThemeColors) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(colors.text),
    ))
}

/// A dash-led list item, as the site renders bullet rows.
fn list_item(text: &str, colors: &ThemeColors) -> Line<'static> {
    Line::from(vec![
        Span::styled("— ", Style::default().fg(colors.accent)),
        Span::styled(text.to_string(), Style::default().fg(colors.text)),
    ])
}

fn blurb_lines(blurbs: &[Blurb], colors: &ThemeColors) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for blurb in blurbs {
        lines.push(heading(&blurb.title, colors));
        lines.push(body(&blurb.desc, colors));
        lines.push(Line::from(""));
    }
    lines
}

/// One animated stat: counter value, caption, elaboration.
fn stat_lines(
    stat: &Stat,
    counter_text: String,
    colors: &ThemeColors,
) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            counter_text,
            Style::default()
                .fg(colors.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            stat.label.to_uppercase(),
            Style::default().fg(colors.heading),
        )),
        Line::from(Span::styled(
            stat.desc.clone(),
            Style::default().fg(colors.label),
        )),
        Line::from(""),
    ]
}

/// Render the animated stats block for a page.
fn stats_block(
    stats: &[Stat],
    anim: &mut PageAnimations,
    now: Instant,
    colors: &ThemeColors,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, stat) in stats.iter().enumerate() {
        let text = match anim.counters.get_mut(i) {
            Some(counter) => counter.display(now),
            None => stat.value.clone(),
        };
        lines.extend(stat_lines(stat, text, colors));
    }
    lines
}

/// Home page.
pub(super) fn home_lines(
    page: &HomePage,
    anim: &mut PageAnimations,
    now: Instant,
    colors: &ThemeColors,
) -> Vec<Line<'static>> {
    let mut lines = vec![
        section_label(&page.tagline, colors),
        Line::from(""),
        heading(&page.headline, colors),
        body(&page.subtitle, colors),
        Line::from(""),
        body(&page.who_we_are, colors),
        Line::from(""),
    ];
    lines.extend(stats_block(&page.stats, anim, now, colors));
    lines.extend(blurb_lines(&page.services, colors));
    lines.push(heading(&page.closing_title, colors));
    lines.push(body(&page.closing_description, colors));
    lines
}

/// About page.
pub(super) fn about_lines(page: &AboutPage, colors: &ThemeColors) -> Vec<Line<'static>> {
    let mut lines = vec![
        section_label(&page.tagline, colors),
        Line::from(""),
        heading(&page.title, colors),
        Line::from(""),
    ];
    for paragraph in &page.body {
        lines.push(body(paragraph, colors));
        lines.push(Line::from(""));
    }
    lines.extend(blurb_lines(&page.principles, colors));
    lines.push(section_label(&page.team_label, colors));
    lines.push(Line::from(""));
    lines.extend(blurb_lines(&page.team, colors));
    lines
}

/// Opportunity page.
pub(super) fn opportunity_lines(
    page: &OpportunityPage,
    colors: &ThemeColors,
) -> Vec<Line<'static>> {
    let mut lines = vec![
        section_label(&page.tagline, colors),
        Line::from(""),
        heading(&page.title, colors),
        body(&page.overview, colors),
        Line::from(""),
    ];
    for point in &page.points {
        lines.push(list_item(point, colors));
    }
    lines.push(Line::from(""));
    lines.extend(blurb_lines(&page.services, colors));
    for milestone in &page.timeline {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<12}", milestone.date),
                Style::default().fg(colors.accent),
            ),
            Span::styled(milestone.event.clone(), Style::default().fg(colors.text)),
        ]));
    }
    lines
}

/// Why-Paraguay page: macro stats then the comparison charts.
pub(super) fn why_paraguay_lines(
    page: &WhyParaguayPage,
    anim: &mut PageAnimations,
    now: Instant,
    width: u16,
    colors: &ThemeColors,
) -> Vec<Line<'static>> {
    let mut lines = vec![
        section_label(&page.tagline, colors),
        Line::from(""),
        heading(&page.title, colors),
        body(&page.overview, colors),
        Line::from(""),
    ];
    let revealed_at = anim.revealed_at;
    lines.extend(stats_block(&page.stats, anim, now, colors));
    for chart in &page.charts {
        lines.extend(chart::chart_lines(chart, revealed_at, now, width, colors));
        lines.push(Line::from(""));
    }
    for advantage in &page.advantages {
        lines.push(list_item(advantage, colors));
    }
    lines
}
