//! Contact page rendering: the form, its inline errors, and the outcome
//! banner.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::content::ContactPage;
use crate::form::{Field, FormState, SubmitStatus};
use crate::ui::ThemeColors;

/// Fixed display width of a field input box.
const FIELD_WIDTH: usize = 42;

fn field_label(field: Field, page: &ContactPage) -> &str {
    let labels = &page.form;
    match field {
        Field::Name => &labels.name,
        Field::Email => &labels.email,
        Field::Company => &labels.company,
        Field::Country => &labels.country,
        Field::Message => &labels.message,
    }
}

/// One form field: label, input box, optional inline error.
fn field_lines(
    field: Field,
    page: &ContactPage,
    form: &FormState,
    colors: &ThemeColors,
) -> Vec<Line<'static>> {
    let focused = form.focus == field;
    let mut text = form.text(field, &page.countries);
    if focused && field != Field::Country {
        text.push('▏');
    }

    // Pad to the box width; long input shows its tail.
    let shown = tail_to_width(&text, FIELD_WIDTH);
    let box_style = if focused {
        Style::default().fg(colors.focus_fg).bg(colors.focus_bg)
    } else {
        Style::default().fg(colors.text).bg(colors.bar_bg)
    };

    let mut lines = vec![
        Line::from(Span::styled(
            field_label(field, page).to_string(),
            Style::default().fg(colors.label),
        )),
        Line::from(Span::styled(shown, box_style)),
    ];

    if let Some(message) = form.error_for(field) {
        lines.push(Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(colors.error),
        )));
    }
    lines.push(Line::from(""));
    lines
}

/// Contact page.
pub(super) fn contact_lines(
    page: &ContactPage,
    form: &FormState,
    colors: &ThemeColors,
) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            page.tagline.to_uppercase(),
            Style::default().fg(colors.accent),
        )),
        Line::from(""),
        Line::from(Span::styled(
            page.title.clone(),
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            page.subtitle.clone(),
            Style::default().fg(colors.text),
        )),
        Line::from(""),
    ];

    for field in Field::ALL {
        lines.extend(field_lines(field, page, form, colors));
    }

    // Outcome banner.
    let labels = &page.form;
    match form.status {
        SubmitStatus::Success => lines.push(Line::from(Span::styled(
            labels.success.clone(),
            Style::default().fg(colors.success),
        ))),
        SubmitStatus::Error => lines.push(Line::from(Span::styled(
            labels.error.clone(),
            Style::default().fg(colors.error),
        ))),
        SubmitStatus::Submitting => lines.push(Line::from(Span::styled(
            labels.sending.clone(),
            Style::default().fg(colors.label),
        ))),
        SubmitStatus::Idle => {}
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        format!("[ {} ]", labels.submit),
        Style::default()
            .fg(colors.accent)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    // The firm's contact card, also copyable with 'y'.
    lines.push(Line::from(Span::styled(
        page.email.clone(),
        Style::default().fg(colors.label),
    )));
    lines.push(Line::from(Span::styled(
        page.phone.clone(),
        Style::default().fg(colors.label),
    )));
    lines.push(Line::from(Span::styled(
        page.address.clone(),
        Style::default().fg(colors.label),
    )));

    lines
}

/// Keep the last `cells` display columns of `text`, padded to exactly that
/// width.
fn tail_to_width(text: &str, cells: usize) -> String {
    let mut tail = text.to_string();
    while tail.width() > cells {
        tail.remove(0);
    }
    let pad = cells - tail.width();
    tail.push_str(&" ".repeat(pad));
    tail
}
