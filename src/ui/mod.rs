mod fieldset;
mod input_box;
mod layout;
mod status_bar;
mod theme;

use crate::app::form::Field;
use crate::app::state::{AppState, Focus};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let form_layout =
        layout::compute_layout(area, state.config.ui.max_width, state.error.is_some());

    frame.render_widget(Block::default().style(Theme::backdrop()), area);

    let card = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::card_border())
        .style(Theme::card());
    frame.render_widget(card, form_layout.card);

    frame.render_widget(
        Paragraph::new(state.config.ui.title.as_str()).style(Theme::title()),
        form_layout.title,
    );

    input_box::render(frame, form_layout.name, state, Field::Name);
    input_box::render(frame, form_layout.email, state, Field::Email);
    fieldset::render(frame, form_layout.gender, state);
    input_box::render(frame, form_layout.message, state, Field::Message);

    if let (Some(area), Some(error)) = (form_layout.error, state.error.as_deref()) {
        let paragraph = Paragraph::new(error)
            .style(Theme::error_message())
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    render_submit_button(frame, form_layout.submit, state);
    status_bar::render(frame, form_layout.status_bar, state);
}

fn render_submit_button(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == Focus::Submit;
    let label = &state.config.ui.submit_label;
    let width = (label.chars().count() as u16 + 4).min(area.width);
    let button_area = Rect::new(area.x, area.y, width, area.height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::button(focused))
        .style(Theme::button(focused));
    let paragraph = Paragraph::new(label.as_str())
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, button_area);
}
