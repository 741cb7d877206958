use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{GLOBAL_BORDER, STATUS_ERROR, STATUS_OK};
use crate::ui::wallets::ViewState;
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let state = app.view().state();
    frame.render_widget(Header::new(app.endpoint(), state, app.tick()).widget(), header);
    frame.render_widget(Clear, body);
    frame.render_widget(body_widget(state), body);
    frame.render_widget(Footer::widget(footer), footer);
}

/// The single text slot. Payload and failure share it; only the frame
/// around it says which one it is.
fn body_widget(state: &ViewState) -> Paragraph<'static> {
    let (title, border) = match state {
        ViewState::Uninitialized => ("Wallets", GLOBAL_BORDER),
        ViewState::Loaded(_) => ("Wallets", STATUS_OK),
        ViewState::Failed(_) => ("Request failed", STATUS_ERROR),
    };

    Paragraph::new(state.render_text())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(Span::styled(format!(" {} ", title), Style::default().fg(border)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
}
