use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

const HINTS: [(&str, &str); 4] = [
    ("Tab", "next"),
    ("Enter", "submit"),
    ("^S", "send"),
    ("Esc", "quit"),
];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let line = Line::from(status_spans(area.width, state));
    let paragraph = Paragraph::new(line).style(Theme::status_bar());
    frame.render_widget(paragraph, area);
}

fn status_spans(width: u16, state: &AppState) -> Vec<Span<'static>> {
    let mut parts: Vec<Span> = Vec::new();

    for (key, what) in HINTS {
        parts.push(Span::styled(format!(" {} ", key), Theme::status_key()));
        parts.push(Span::styled(format!("{} ", what), Theme::status_bar()));
    }

    // Pad so the status text sits at the right edge
    let status = format!(" {} ", state.status_line());
    let used: usize = parts.iter().map(|s| s.width()).sum();
    let remaining = (width as usize).saturating_sub(used + status.width());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(status, Theme::status_bar()));
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn total_width(spans: &[Span]) -> usize {
        spans.iter().map(|s| s.width()).sum()
    }

    #[test]
    fn test_status_fills_bar_exactly() {
        let state = AppState::new(AppConfig::default());
        assert_eq!(total_width(&status_spans(80, &state)), 80);
    }

    #[test]
    fn test_non_ascii_status_stays_right_aligned() {
        let mut state = AppState::new(AppConfig::default());
        state.status_message = Some("Submission failed: délai dépassé".into());
        let spans = status_spans(90, &state);
        assert_eq!(total_width(&spans), 90);
        assert!(spans.last().unwrap().content.ends_with("dépassé "));
    }
}
