use crate::app::form::Field;
use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

/// Display position of a byte cursor: (row, column in cells).
pub fn cursor_position(text: &str, cursor: usize) -> (u16, u16) {
    let before = &text[..cursor.min(text.len())];
    let row = before.matches('\n').count();
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let col = before[line_start..].width();
    (row as u16, col as u16)
}

/// Render one text field (single-line or the multi-line message area).
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, field: Field) {
    let focused = state.focus == Focus::Field(field);
    let (border_style, border_type) = if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };
    // The message area keeps the card colour; single-line inputs are grey
    let bg = if field == Field::Message {
        Theme::BG_CARD
    } else {
        Theme::BG_INPUT
    };

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .title_style(if focused {
            Theme::label_focused()
        } else {
            Theme::label()
        })
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1))
        .style(Theme::input(bg));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let text = state.form.get(field);
    let (row, col) = if focused {
        cursor_position(text, state.editor.cursor)
    } else {
        (0, 0)
    };

    // Scroll so the cursor stays inside the visible window
    let scroll_y = row.saturating_sub(inner.height - 1);
    let scroll_x = col.saturating_sub(inner.width - 1);

    let paragraph = Paragraph::new(text)
        .style(Theme::input(bg))
        .scroll((scroll_y, scroll_x));
    frame.render_widget(paragraph, inner);

    if focused {
        let cursor_x = inner.x + col - scroll_x;
        let cursor_y = inner.y + row - scroll_y;
        frame.set_cursor_position((cursor_x.min(inner.right() - 1), cursor_y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_position_single_line() {
        assert_eq!(cursor_position("hello", 0), (0, 0));
        assert_eq!(cursor_position("hello", 3), (0, 3));
        assert_eq!(cursor_position("hello", 5), (0, 5));
    }

    #[test]
    fn test_cursor_position_multi_line() {
        let text = "hi\nthere";
        assert_eq!(cursor_position(text, 2), (0, 2));
        assert_eq!(cursor_position(text, 3), (1, 0));
        assert_eq!(cursor_position(text, text.len()), (1, 5));
    }

    #[test]
    fn test_cursor_position_wide_chars() {
        // Each CJK character occupies two cells
        let text = "日本";
        assert_eq!(cursor_position(text, text.len()), (0, 4));
    }
}
