use ratatui::layout::{Constraint, Layout, Rect};

/// Splits the screen into header, body and footer.
///
/// Header and footer are three rows each; the body takes what's left
/// and collapses to zero height on tiny terminals.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(header_height),
        Constraint::Fill(1),
        Constraint::Length(footer_height),
    ])
    .areas(area);
    (header, body, footer)
}
