//! The scrollable page body: hero, capabilities, dashboard, workflow,
//! industries, and pricing, composed as styled lines from one view
//! snapshot. Section start offsets are recorded as the lines are pushed so
//! navigation can jump straight to an anchor.

use ratatui::text::{Line, Span};
use suite_core::{
    catalog::{CAPABILITIES, INDUSTRIES, WORKFLOW_NODES},
    compose::ViewState,
    selection::DashboardTab,
    telemetry::AgentStatus,
    theme::{Element, Theme},
};

/// Rows the hero block occupies at the top of the page; the viewport
/// watcher observes exactly this extent.
pub const HERO_HEIGHT: u16 = 10;

pub struct Page {
    pub lines: Vec<Line<'static>>,
    /// `(nav section, first line)` in page order.
    pub sections: Vec<(&'static str, u16)>,
}

impl Page {
    /// Scroll offset of a navigation anchor.
    pub fn section_offset(&self, name: &str) -> Option<u16> {
        self.sections
            .iter()
            .find(|(section, _)| *section == name)
            .map(|(_, offset)| *offset)
    }
}

pub fn build_page(view: &ViewState<'_>, theme: &Theme, agent_cursor: usize) -> Page {
    let mut page = Page {
        lines: Vec::new(),
        sections: Vec::new(),
    };

    push_hero(&mut page, view, theme);
    push_capabilities(&mut page, theme);
    push_dashboard(&mut page, view, theme, agent_cursor);
    push_workflow(&mut page, theme);
    push_industries(&mut page, view, theme);
    push_pricing(&mut page, view, theme);

    page.lines.push(Line::default());
    page.lines.push(Line::styled(
        "  (c) 2024 Command Suite AI Inc. All rights reserved.",
        theme.muted_style(),
    ));

    page
}

fn push_hero(page: &mut Page, view: &ViewState<'_>, theme: &Theme) {
    // Until the entrance latch fires the whole block renders dimmed, the
    // terminal stand-in for the fade-up animation.
    let entered = view.scroll.hero_visible;
    let style = |element| {
        if entered {
            theme.ratatui_style(element)
        } else {
            theme.muted_style()
        }
    };

    page.lines.push(Line::default());
    page.lines
        .push(Line::styled("  * v4.2 Enterprise Ready", style(Element::Secondary)));
    page.lines.push(Line::default());
    page.lines
        .push(Line::styled("  Enterprise AI Agents for", style(Element::Title)));
    page.lines
        .push(Line::styled("  Intelligent Automation", style(Element::Accent)));
    page.lines.push(Line::default());
    page.lines.push(Line::styled(
        "  Orchestrate, manage, and scale specialized AI agents designed",
        style(Element::Text),
    ));
    page.lines.push(Line::styled(
        "  for mission-critical business workflows.",
        style(Element::Text),
    ));
    page.lines.push(Line::default());
    page.lines.push(Line::styled(
        "  [ Get Started Now ]   [ Schedule Strategy Call ]",
        style(Element::Accent),
    ));

    debug_assert_eq!(page.lines.len(), HERO_HEIGHT as usize);
}

fn push_capabilities(page: &mut Page, theme: &Theme) {
    push_section_header(page, theme, "Platform", "Strategic AI Capabilities");
    for capability in CAPABILITIES {
        page.lines.push(Line::from(vec![
            Span::styled("  + ", theme.ratatui_style(Element::Secondary)),
            Span::styled(capability.title, theme.ratatui_style(Element::Accent)),
        ]));
        page.lines.push(Line::styled(
            format!("    {}", capability.desc),
            theme.text_style(),
        ));
    }
}

fn push_dashboard(page: &mut Page, view: &ViewState<'_>, theme: &Theme, agent_cursor: usize) {
    push_section_header(page, theme, "Solutions", "Agent Command Center");

    // Tab rail.
    let mut spans = vec![Span::raw("  ")];
    let mut tabs = tab_order().into_iter().peekable();
    while let Some(tab) = tabs.next() {
        let style = if tab == view.active_tab {
            theme.ratatui_style(Element::Active)
        } else {
            theme.ratatui_style(Element::Inactive)
        };
        spans.push(Span::styled(format!(" {tab} "), style));
        if tabs.peek().is_some() {
            spans.push(Span::styled("|", theme.border_style()));
        }
    }
    page.lines.push(Line::from(spans));
    page.lines.push(Line::default());

    page.lines.push(Line::styled(
        format!("  {}", view.active_tab),
        theme.title_style(),
    ));
    page.lines.push(Line::styled(
        "  AGENT IDENTIFICATION        STATUS      EFFICIENCY   TASKS",
        theme.muted_style(),
    ));

    for (row, agent) in view.agents.iter().enumerate() {
        let selected = row == agent_cursor;
        let marker = if selected { "> " } else { "  " };
        let name_style = if selected {
            theme.highlight_style()
        } else {
            theme.text_style()
        };
        let (badge, badge_element) = status_badge(agent.status);
        let efficiency = agent.efficiency.as_deref().unwrap_or("N/A");

        page.lines.push(Line::from(vec![
            Span::styled(format!("{marker}{:<26}", agent.name), name_style),
            Span::styled(format!("{badge:<12}"), theme.ratatui_style(badge_element)),
            Span::styled(format!("{efficiency:<13}"), theme.text_style()),
            Span::styled(format_count(agent.tasks), theme.text_style()),
        ]));
        page.lines.push(Line::styled(
            format!("    {}", agent.kind),
            theme.muted_style(),
        ));
    }
}

fn push_workflow(page: &mut Page, theme: &Theme) {
    push_section_header(page, theme, "Workflow", "Autonomous Orchestration");

    let mut title_spans = vec![Span::raw("  ")];
    let mut kind_line = String::from("  ");
    let mut nodes = WORKFLOW_NODES.iter().peekable();
    while let Some(node) = nodes.next() {
        let element = if node.active {
            Element::Accent
        } else {
            Element::Inactive
        };
        title_spans.push(Span::styled(
            format!("[{}]", node.title),
            theme.ratatui_style(element),
        ));
        kind_line.push_str(&format!("{:<16}", node.kind));
        if nodes.peek().is_some() {
            title_spans.push(Span::styled("------", theme.border_style()));
        }
    }
    page.lines.push(Line::from(title_spans));
    page.lines
        .push(Line::styled(kind_line, theme.muted_style()));
}

fn push_industries(page: &mut Page, view: &ViewState<'_>, theme: &Theme) {
    push_section_header(page, theme, "Industries", "Solutions by Sector");

    let mut spans = vec![Span::raw("  ")];
    for industry in INDUSTRIES {
        let style = if industry.name == view.industry.name {
            theme.ratatui_style(Element::Active)
        } else {
            theme.ratatui_style(Element::Inactive)
        };
        spans.push(Span::styled(format!(" {} ", industry.name), style));
        spans.push(Span::raw(" "));
    }
    page.lines.push(Line::from(spans));
    page.lines.push(Line::default());

    page.lines.push(Line::styled(
        format!("  * {} Solutions", view.industry.name),
        theme.ratatui_style(Element::Secondary),
    ));
    page.lines
        .push(Line::styled(format!("  {}", view.industry.title), theme.title_style()));
    page.lines
        .push(Line::styled(format!("  {}", view.industry.desc), theme.text_style()));
    for highlight in view.industry.highlights {
        page.lines.push(Line::from(vec![
            Span::styled("    v ", theme.ratatui_style(Element::Success)),
            Span::styled(highlight, theme.text_style()),
        ]));
    }
}

fn push_pricing(page: &mut Page, view: &ViewState<'_>, theme: &Theme) {
    push_section_header(page, theme, "Pricing", "Scalable Enterprise Pricing");

    let (monthly_style, annual_style) = if view.annual_billing {
        (theme.muted_style(), theme.ratatui_style(Element::Accent))
    } else {
        (theme.ratatui_style(Element::Accent), theme.muted_style())
    };
    page.lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled("Monthly", monthly_style),
        Span::styled(
            if view.annual_billing { " --o> " } else { " <o-- " },
            theme.border_style(),
        ),
        Span::styled("Annual", annual_style),
    ]));
    page.lines.push(Line::default());

    for row in &view.pricing {
        let name_element = if row.highlight {
            Element::Accent
        } else {
            Element::Text
        };
        let marker = if row.highlight { " *" } else { "" };
        page.lines.push(Line::styled(
            format!("  {}{marker}", row.name),
            theme.ratatui_style(name_element),
        ));
        let price = match row.price {
            Some(amount) => format!("    ${}/mo", format_count(u64::from(amount))),
            None => "    Custom".to_string(),
        };
        page.lines
            .push(Line::styled(price, theme.title_style()));
        for feature in row.features {
            page.lines.push(Line::styled(
                format!("      - {feature}"),
                theme.text_style(),
            ));
        }
        page.lines.push(Line::default());
    }
}

fn push_section_header(page: &mut Page, theme: &Theme, section: &'static str, subtitle: &str) {
    page.lines.push(Line::default());
    let offset = page.lines.len() as u16;
    page.sections.push((section, offset));
    page.lines.push(Line::from(vec![
        Span::styled("--- ", theme.border_style()),
        Span::styled(section.to_uppercase(), theme.ratatui_style(Element::Secondary)),
        Span::styled(" --- ", theme.border_style()),
        Span::styled(subtitle.to_string(), theme.title_style()),
    ]));
    page.lines.push(Line::default());
}

pub fn tab_order() -> Vec<DashboardTab> {
    use strum::IntoEnumIterator;
    DashboardTab::iter().collect()
}

fn status_badge(status: AgentStatus) -> (&'static str, Element) {
    match status {
        AgentStatus::Active => ("ACTIVE", Element::Success),
        AgentStatus::Paused => ("PAUSED", Element::Warning),
        AgentStatus::Training => ("TRAINING", Element::Info),
    }
}

/// Thousands-separated counter, e.g. `3201` renders as `3,201`.
fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use suite_core::{
        compose::Dashboard, overlay::FlagLock, preference::PreferenceStore,
        viewport::ViewportWatcher,
    };

    fn test_dashboard() -> Dashboard {
        let path = std::env::temp_dir().join(format!(
            "commandsuite-page-{}.toml",
            std::process::id()
        ));
        Dashboard::new(
            PreferenceStore::load(path),
            ViewportWatcher::degraded(),
            Box::new(FlagLock::new().handle()),
        )
    }

    #[test]
    fn format_count_inserts_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(842), "842");
        assert_eq!(format_count(3201), "3,201");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn page_records_every_nav_section() {
        let dashboard = test_dashboard();
        let page = build_page(&dashboard.view(), &Theme::default(), 0);
        for section in ["Platform", "Solutions", "Industries", "Pricing"] {
            assert!(page.section_offset(section).is_some(), "missing {section}");
        }
        assert!(page.section_offset("Careers").is_none());
    }

    #[test]
    fn hero_occupies_its_declared_extent() {
        let dashboard = test_dashboard();
        let page = build_page(&dashboard.view(), &Theme::default(), 0);
        // The first section starts right after the hero block.
        assert!(page.sections[0].1 >= HERO_HEIGHT);
    }

    #[test]
    fn tab_order_matches_reference_rail() {
        let labels: Vec<String> = tab_order().iter().map(ToString::to_string).collect();
        assert_eq!(
            labels,
            vec![
                "Overview",
                "Active Agents",
                "Workflows",
                "Compliance",
                "Settings"
            ]
        );
    }
}
