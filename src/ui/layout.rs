use ratatui::layout::{Constraint, Direction, Layout, Rect};

const TITLE_HEIGHT: u16 = 2;
const INPUT_HEIGHT: u16 = 3;
const FIELDSET_HEIGHT: u16 = 3;
const MESSAGE_MIN_HEIGHT: u16 = 7;
const ERROR_HEIGHT: u16 = 2;
const BUTTON_HEIGHT: u16 = 3;

pub struct FormLayout {
    pub card: Rect,
    pub title: Rect,
    pub name: Rect,
    pub email: Rect,
    pub gender: Rect,
    pub message: Rect,
    /// Present only while there is an error to show.
    pub error: Option<Rect>,
    pub submit: Rect,
    pub status_bar: Rect,
}

/// Height of the card including its border and padding rows.
fn card_height(with_error: bool) -> u16 {
    let error = if with_error { ERROR_HEIGHT } else { 0 };
    2 + 2
        + TITLE_HEIGHT
        + INPUT_HEIGHT * 2
        + FIELDSET_HEIGHT
        + MESSAGE_MIN_HEIGHT
        + error
        + BUTTON_HEIGHT
}

/// Centre a `width` x `height` rect inside `area`, shrinking to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width - w) / 2;
    let y = area.y + (area.height - h) / 2;
    Rect::new(x, y, w, h)
}

pub fn compute_layout(area: Rect, max_width: u16, with_error: bool) -> FormLayout {
    // Main vertical split: backdrop | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Backdrop with the card
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let backdrop = main_chunks[0];
    let status_bar = main_chunks[1];

    // Leave a two-column margin around the card when there is room
    let card_width = max_width.min(backdrop.width.saturating_sub(4)).max(20);
    let card = centered(backdrop, card_width, card_height(with_error));

    // Border (1) + padding (1) on every side
    let inner = Rect::new(
        card.x.saturating_add(2),
        card.y.saturating_add(2),
        card.width.saturating_sub(4),
        card.height.saturating_sub(4),
    );

    let mut constraints = vec![
        Constraint::Length(TITLE_HEIGHT),
        Constraint::Length(INPUT_HEIGHT),
        Constraint::Length(INPUT_HEIGHT),
        Constraint::Length(FIELDSET_HEIGHT),
        Constraint::Min(3),
    ];
    if with_error {
        constraints.push(Constraint::Length(ERROR_HEIGHT));
    }
    constraints.push(Constraint::Length(BUTTON_HEIGHT));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let (error, submit) = if with_error {
        (Some(chunks[5]), chunks[6])
    } else {
        (None, chunks[5])
    };

    FormLayout {
        card,
        title: chunks[0],
        name: chunks[1],
        email: chunks[2],
        gender: chunks[3],
        message: chunks[4],
        error,
        submit,
        status_bar,
    }
}
