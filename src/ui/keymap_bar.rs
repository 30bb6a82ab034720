//! Keymap help bar UI component.

use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

use crate::ui::ThemeColors;

/// Draw the keymap help bar.
pub(super) fn draw_keymap(f: &mut Frame<'_>, area: Rect, form_mode: bool, colors: &ThemeColors) {
    let keymap_text = if form_mode {
        "Tab/↓:next field | Shift-Tab/↑:prev | Space:cycle country | Enter:submit | Esc:back | type to edit"
    } else {
        "q:quit | h/l or ←/→:page | 1-5:jump | j/k:scroll | y:copy contact | T:theme | Enter:edit form"
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}
