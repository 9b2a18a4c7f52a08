use crate::app::form::{Field, Gender};
use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Gender radio group. Exactly one option is marked when a value is set.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == Focus::Field(Field::Gender);
    let (border_style, border_type) = if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };

    let block = Block::default()
        .title(format!(" {} ", Field::Gender.label()))
        .title_style(if focused {
            Theme::label_focused()
        } else {
            Theme::label()
        })
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1))
        .style(Theme::card());

    let selected = state.form.selected_gender();
    let mut spans: Vec<Span> = Vec::new();
    for option in Gender::OPTIONS {
        let is_selected = selected == Some(option);
        let (mark, style) = if is_selected {
            ("(●) ", Theme::radio_selected())
        } else {
            ("( ) ", Theme::radio_normal())
        };
        spans.push(Span::styled(mark, style));
        spans.push(Span::styled(option.label(), style));
        spans.push(Span::raw("    "));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
