use super::{footer::render_footer, header::render_header, menu::render_menu_overlay, page};
use anyhow::Result;
use chrono::Local;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    prelude::{Constraint, CrosstermBackend, Direction, Layout, Rect, Terminal},
    widgets::{Block, Borders, Clear, Paragraph},
};
use std::io::Stdout;
use std::time::{Duration, Instant};
use tracing::debug;
use suite_core::{
    catalog::NAV_SECTIONS,
    compose::Dashboard,
    overlay::FlagLock,
    random::Lcg,
    selection::DashboardTab,
    theme::{Element, Theme},
};

const SCROLL_STEP: u16 = 2;

pub struct App {
    dashboard: Dashboard,
    theme: Theme,
    scroll_lock: FlagLock,
    rng: Lcg,
    scroll_offset: u16,
    body_height: u16,
    page_length: u16,
    nav_offsets: Vec<(&'static str, u16)>,
    agent_cursor: usize,
    menu_cursor: usize,
    last_tick_stamp: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(dashboard: Dashboard, scroll_lock: FlagLock) -> Self {
        let theme = Theme::new(dashboard.theme_variant());
        Self {
            dashboard,
            theme,
            scroll_lock,
            rng: Lcg::from_entropy(),
            scroll_offset: 0,
            body_height: 0,
            page_length: 0,
            nav_offsets: Vec::new(),
            agent_cursor: 0,
            menu_cursor: 0,
            last_tick_stamp: None,
            should_quit: false,
        }
    }

    pub async fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        self.dashboard.start_telemetry(Instant::now());
        while !self.should_quit {
            if self.dashboard.poll_telemetry(Instant::now(), &mut self.rng) > 0 {
                self.last_tick_stamp = Some(Local::now().format("%H:%M:%S").to_string());
            }
            self.draw(terminal)?;
            self.handle_events()?;
        }
        debug!("shutting down");
        self.dashboard.teardown();
        Ok(())
    }

    fn draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        terminal.draw(|frame| {
            let area = frame.size();

            let background = Block::new()
                .borders(Borders::NONE)
                .style(self.theme.ratatui_style(Element::Background));
            frame.render_widget(background, area);

            let header_height = if self.dashboard.scroll_state().scrolled {
                3
            } else {
                5
            };
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(header_height),
                    Constraint::Min(0),
                    Constraint::Length(3),
                ])
                .split(area);

            // The watcher sees exactly the geometry the page is drawn with.
            self.body_height = chunks[1].height;
            self.dashboard
                .observe_scroll(self.scroll_offset, self.body_height);

            let view = self.dashboard.view();
            let built = page::build_page(&view, &self.theme, self.agent_cursor);
            self.page_length = built.lines.len() as u16;
            self.nav_offsets = built.sections.clone();

            render_header(
                frame,
                chunks[0],
                &self.theme,
                view.theme,
                view.scroll.scrolled,
                view.menu_open,
            );

            let body = Paragraph::new(built.lines)
                .style(self.theme.text_style())
                .scroll((self.scroll_offset, 0));
            frame.render_widget(body, chunks[1]);

            render_footer(frame, chunks[2], &self.theme, self.last_tick_stamp.as_deref());

            if view.menu_open {
                let modal_area = centered_modal(area, 40, 9);
                frame.render_widget(Clear, modal_area);
                render_menu_overlay(frame, modal_area, &self.theme, self.menu_cursor);
            }
        })?;
        Ok(())
    }

    fn handle_events(&mut self) -> Result<()> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if self.dashboard.menu_open() {
                        self.handle_menu_key(key.code);
                    } else {
                        self.handle_page_key(key.code);
                    }
                }
            }
        }
        Ok(())
    }

    fn handle_menu_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Char('m') => self.dashboard.close_menu(),
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up => self.menu_cursor = self.menu_cursor.saturating_sub(1),
            KeyCode::Down => {
                self.menu_cursor = (self.menu_cursor + 1).min(NAV_SECTIONS.len() - 1);
            }
            KeyCode::Enter => {
                let section = NAV_SECTIONS[self.menu_cursor];
                self.dashboard.nav_chosen();
                if let Some(offset) = self
                    .nav_offsets
                    .iter()
                    .find(|(name, _)| *name == section)
                    .map(|(_, offset)| *offset)
                {
                    self.scroll_offset = offset.min(self.max_scroll());
                }
            }
            _ => {}
        }
    }

    fn handle_page_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('t') => {
                // Preference persists before the palette swap is visible.
                let variant = self.dashboard.toggle_theme();
                self.theme.set_variant(variant);
            }
            KeyCode::Char('m') => self.dashboard.toggle_menu(),
            KeyCode::Char('b') => self.dashboard.toggle_billing(),
            KeyCode::Char('i') => self.dashboard.cycle_industry(),
            KeyCode::Tab => {
                let next = next_tab(self.dashboard.selection().active_tab());
                self.dashboard.select_tab(next);
            }
            KeyCode::Char(digit @ '1'..='5') => {
                let order = page::tab_order();
                let index = digit as usize - '1' as usize;
                self.dashboard.select_tab(order[index]);
            }
            KeyCode::Up => self.agent_cursor = self.agent_cursor.saturating_sub(1),
            KeyCode::Down => {
                let last = self.dashboard.agents().len().saturating_sub(1);
                self.agent_cursor = (self.agent_cursor + 1).min(last);
            }
            KeyCode::Char('p') | KeyCode::Enter => {
                if let Some(agent) = self.dashboard.agents().get(self.agent_cursor) {
                    self.dashboard.toggle_agent(agent.id);
                }
            }
            KeyCode::Char('j') => self.scroll_by(SCROLL_STEP as i32),
            KeyCode::Char('k') => self.scroll_by(-(SCROLL_STEP as i32)),
            KeyCode::PageDown => self.scroll_by(i32::from(self.body_height)),
            KeyCode::PageUp => self.scroll_by(-i32::from(self.body_height)),
            KeyCode::Home => self.scroll_by(i32::MIN / 2),
            _ => {}
        }
    }

    fn scroll_by(&mut self, delta: i32) {
        // Scroll input is suppressed while the overlay holds the lock.
        if self.scroll_lock.is_locked() {
            return;
        }
        let current = i32::from(self.scroll_offset);
        let next = current.saturating_add(delta).max(0) as u16;
        self.scroll_offset = next.min(self.max_scroll());
        self.dashboard
            .observe_scroll(self.scroll_offset, self.body_height);
    }

    fn max_scroll(&self) -> u16 {
        self.page_length.saturating_sub(self.body_height)
    }
}

fn next_tab(tab: DashboardTab) -> DashboardTab {
    let order = page::tab_order();
    let position = order.iter().position(|candidate| *candidate == tab).unwrap_or(0);
    order[(position + 1) % order.len()]
}

/// Modal centered in `area`, clamped to the terminal.
fn centered_modal(area: Rect, width: u16, height: u16) -> Rect {
    let modal_width = width.min(area.width);
    let modal_height = height.min(area.height);
    Rect::new(
        (area.width.saturating_sub(modal_width)) / 2,
        (area.height.saturating_sub(modal_height)) / 2,
        modal_width,
        modal_height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_cycle_visits_every_panel_and_wraps() {
        let mut tab = DashboardTab::Overview;
        let mut seen = vec![tab];
        for _ in 0..4 {
            tab = next_tab(tab);
            seen.push(tab);
        }
        assert_eq!(seen.len(), 5);
        assert_eq!(next_tab(tab), DashboardTab::Overview);
    }

    #[test]
    fn modal_fits_inside_small_terminals() {
        let area = Rect::new(0, 0, 20, 6);
        let modal = centered_modal(area, 40, 9);
        assert!(modal.width <= area.width);
        assert!(modal.height <= area.height);
    }
}
