use ratatui::{
    prelude::{Alignment, Constraint, Direction, Frame, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use suite_core::{
    catalog::NAV_SECTIONS,
    theme::{Element, Theme},
};

/// The menu overlay: navigation anchors over a cleared modal. While this
/// is up the page ignores scroll input; choosing an anchor dismisses it.
pub fn render_menu_overlay(frame: &mut Frame, area: Rect, theme: &Theme, cursor: usize) {
    let block = Block::new()
        .title(" Menu ")
        .borders(Borders::ALL)
        .style(theme.ratatui_style(Element::Accent));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(NAV_SECTIONS.len() as u16),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner_area);

    let items: Vec<Line> = NAV_SECTIONS
        .iter()
        .enumerate()
        .map(|(row, section)| {
            let style = if row == cursor {
                theme.highlight_style()
            } else {
                theme.text_style()
            };
            Line::styled(format!("  {section}"), style)
        })
        .collect();
    frame.render_widget(Paragraph::new(items), chunks[0]);

    let action = Paragraph::new("[Up/Down] Navigate | [Enter] Go | [Esc] Close")
        .alignment(Alignment::Center)
        .style(theme.muted_style());
    frame.render_widget(action, chunks[2]);
}
