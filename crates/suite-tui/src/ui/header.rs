use ratatui::{
    prelude::{Alignment, Frame, Rect},
    text::{Line, Span},
    widgets::{block::Title, Block, Borders, Paragraph},
};
use suite_core::{
    catalog::NAV_SECTIONS,
    theme::{Element, Theme, ThemeVariant},
};

/// Navbar chrome. Renders tall with the tagline until the page scrolls
/// past the threshold, then compacts to the brand-and-nav row.
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    variant: ThemeVariant,
    scrolled: bool,
    menu_open: bool,
) {
    let title = Title::from(" COMMANDSUITE ").alignment(Alignment::Left);

    let mut nav_spans = vec![Span::raw(" ")];
    for section in NAV_SECTIONS {
        nav_spans.push(Span::styled(section, theme.ratatui_style(Element::Inactive)));
        nav_spans.push(Span::raw("  "));
    }
    nav_spans.push(Span::styled(
        if variant.is_dark() { "[dark]" } else { "[light]" },
        theme.ratatui_style(Element::Secondary),
    ));
    if menu_open {
        nav_spans.push(Span::raw(" "));
        nav_spans.push(Span::styled("MENU", theme.highlight_style()));
    }

    let mut lines = vec![Line::from(nav_spans)];
    if !scrolled {
        lines.push(Line::styled(
            " Enterprise AI Agents for Intelligent Automation",
            theme.ratatui_style(Element::Accent),
        ));
        lines.push(Line::styled(
            " Request a demo today",
            theme.muted_style(),
        ));
    }

    let header = Paragraph::new(lines)
        .style(theme.text_style())
        .alignment(Alignment::Left)
        .block(
            Block::new()
                .borders(Borders::ALL)
                .title(title)
                .style(theme.ratatui_style(Element::Title)),
        );

    frame.render_widget(header, area);
}
