use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{stdout, Stdout};
use suite_core::{
    compose::Dashboard,
    overlay::FlagLock,
    preference::PreferenceStore,
    viewport::{HeroExtent, ViewportWatcher},
};
use tracing_subscriber::EnvFilter;

mod ui;
use ui::app::App;
use ui::page;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let preference = PreferenceStore::load_default();
    let scroll_lock = FlagLock::new();
    let viewport = ViewportWatcher::with_hero(HeroExtent {
        top: 0,
        height: page::HERO_HEIGHT,
    });
    let dashboard = Dashboard::new(preference, viewport, Box::new(scroll_lock.handle()));

    let mut terminal = init_terminal()?;
    let mut app = App::new(dashboard, scroll_lock);

    let result = app.run(&mut terminal).await;

    restore_terminal(&mut terminal)?;

    result
}

/// Log to stderr only when COMMANDSUITE_LOG is set, so the alternate
/// screen stays clean in normal use.
fn init_tracing() {
    if std::env::var_os("COMMANDSUITE_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_env("COMMANDSUITE_LOG"))
            .with_writer(std::io::stderr)
            .init();
    }
}

fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
