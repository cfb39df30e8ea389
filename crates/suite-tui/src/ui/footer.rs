use ratatui::{
    prelude::{Alignment, Frame, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use suite_core::theme::{Element, Theme};

pub fn render_footer(frame: &mut Frame, area: Rect, theme: &Theme, last_tick: Option<&str>) {
    let footer_block = Block::default()
        .borders(Borders::ALL)
        .style(theme.border_style());

    let inner_area = footer_block.inner(area);

    let mut spans = vec![
        Span::raw("[T]"),
        Span::styled("heme | ", theme.ratatui_style(Element::Inactive)),
        Span::raw("[M]"),
        Span::styled("enu | ", theme.ratatui_style(Element::Inactive)),
        Span::raw("[B]"),
        Span::styled("illing | ", theme.ratatui_style(Element::Inactive)),
        Span::raw("[I]"),
        Span::styled("ndustry | ", theme.ratatui_style(Element::Inactive)),
        Span::raw("[Tab]"),
        Span::styled(" Panels | ", theme.ratatui_style(Element::Inactive)),
        Span::raw("[P]"),
        Span::styled("ause | ", theme.ratatui_style(Element::Inactive)),
        Span::raw("[Q]"),
        Span::styled("uit", theme.ratatui_style(Element::Inactive)),
    ];
    if let Some(stamp) = last_tick {
        spans.push(Span::styled(
            format!("   live {stamp}"),
            theme.ratatui_style(Element::Secondary),
        ));
    }

    let footer_paragraph = Paragraph::new(Line::from(spans).alignment(Alignment::Center))
        .style(theme.text_style());

    frame.render_widget(footer_block, area);
    frame.render_widget(footer_paragraph, inner_area);
}
