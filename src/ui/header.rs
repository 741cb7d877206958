use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK, STATUS_PENDING,
};
use crate::ui::wallets::ViewState;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// Top bar: app name, endpoint and request status.
pub struct Header<'a> {
    endpoint: &'a str,
    state: &'a ViewState,
    tick: u64,
}

impl<'a> Header<'a> {
    pub fn new(endpoint: &'a str, state: &'a ViewState, tick: u64) -> Self {
        Self {
            endpoint,
            state,
            tick,
        }
    }

    pub fn widget(&self) -> Paragraph<'a> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let (indicator, status_color) = match self.state {
            ViewState::Uninitialized => (SPINNER[(self.tick % 4) as usize], STATUS_PENDING),
            ViewState::Loaded(_) => ("●", STATUS_OK),
            ViewState::Failed(_) => ("●", STATUS_ERROR),
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "walletview",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(self.endpoint, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(indicator, Style::default().fg(status_color)),
            Span::styled(" ", text_style),
            Span::styled(self.state.label(), Style::default().fg(status_color)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
