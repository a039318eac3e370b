//! Core TUI application state and event loop.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};

use modocs_core::DocumentManager;
use modocs_shared::load_config;
use modocs_storage::JsonFileStore;

use crate::screens::{ScreenAction, ScreenId, Screens};
use crate::widgets::{centered_rect, status_bar};

/// Application state.
pub(crate) struct App {
    /// Currently active screen tab.
    pub active_tab: usize,
    /// Available screens.
    pub tabs: Vec<ScreenId>,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Status message shown in bottom bar.
    pub status: String,
    /// Whether help overlay is visible.
    pub show_help: bool,
    /// Quit-time unsaved-changes prompt.
    pub quit_prompt: bool,
    /// Per-screen state.
    pub screens: Screens,
}

impl App {
    fn new() -> Result<Self> {
        let config = load_config()?;
        let store = JsonFileStore::new(config.resolved_store_path()?);
        let manager = Arc::new(DocumentManager::new(Arc::new(store)));

        Ok(Self {
            active_tab: 0,
            tabs: vec![ScreenId::Wizard, ScreenId::Documents],
            should_quit: false,
            status: "Ready — press ? for help".to_string(),
            show_help: false,
            quit_prompt: false,
            screens: Screens::new(manager, &config),
        })
    }

    fn current_tab(&self) -> ScreenId {
        self.tabs[self.active_tab]
    }

    fn is_editing(&self) -> bool {
        self.screens.is_editing(self.current_tab())
    }

    /// Quit, or raise the unsaved-changes prompt first.
    fn request_quit(&mut self) {
        if self.screens.wizard.has_unsaved_changes() {
            self.quit_prompt = true;
        } else {
            self.should_quit = true;
        }
    }
}

/// Entry point — sets up terminal, runs event loop, restores terminal.
pub(crate) fn run() -> Result<()> {
    // Setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    let mut app = App::new()?;

    loop {
        // Background work: auto-save and store-change refresh.
        app.screens.wizard.tick();
        app.screens.documents.tick();

        terminal.draw(|f| draw(f, &app))?;

        // Poll for events with 100ms timeout for responsive UI
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                handle_key(&mut app, key.code, key.modifiers);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    // The quit prompt consumes everything until answered.
    if app.quit_prompt {
        match code {
            KeyCode::Char('s') | KeyCode::Char('S') => {
                app.screens.wizard.save_draft_now();
                app.should_quit = true;
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                app.should_quit = true;
            }
            KeyCode::Esc => {
                app.quit_prompt = false;
                app.status = "Quit cancelled.".to_string();
            }
            _ => {}
        }
        return;
    }

    // Global keybindings (always active)
    match code {
        KeyCode::Char('q') | KeyCode::Char('c')
            if modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.request_quit();
            return;
        }
        KeyCode::Char('q') if !app.is_editing() => {
            app.request_quit();
            return;
        }
        KeyCode::Char('?') if !app.is_editing() => {
            app.show_help = !app.show_help;
            return;
        }
        KeyCode::Esc if app.show_help => {
            app.show_help = false;
            return;
        }
        // Tab navigation with number keys
        KeyCode::Char(c @ '1'..='2') if !app.is_editing() => {
            let idx = (c as usize) - ('1' as usize);
            if idx < app.tabs.len() {
                app.active_tab = idx;
                app.status = format!("{}", app.tabs[idx]);
            }
            return;
        }
        KeyCode::Tab if !app.is_editing() => {
            app.active_tab = (app.active_tab + 1) % app.tabs.len();
            app.status = format!("{}", app.tabs[app.active_tab]);
            return;
        }
        KeyCode::BackTab if !app.is_editing() => {
            app.active_tab = if app.active_tab == 0 {
                app.tabs.len() - 1
            } else {
                app.active_tab - 1
            };
            app.status = format!("{}", app.tabs[app.active_tab]);
            return;
        }
        _ => {}
    }

    // If help is showing, consume any key to dismiss
    if app.show_help {
        app.show_help = false;
        return;
    }

    // Delegate to current screen
    let action = app.screens.handle_key(app.current_tab(), code, modifiers);
    match action {
        ScreenAction::None => {}
        ScreenAction::Status(message) => app.status = message,
        ScreenAction::Edit(doc) => {
            app.status = format!("Editing \"{}\"", doc.display_title());
            app.screens.wizard.start_edit(doc);
            app.active_tab = 0;
        }
    }
}

fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    // Tab bar
    let tab_titles: Vec<Line> = app.tabs.iter().map(|s| Line::from(format!("{s}"))).collect();

    let tabs = Tabs::new(tab_titles)
        .block(Block::default().borders(Borders::ALL).title(" MoDocs "))
        .select(app.active_tab)
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .divider(" │ ");

    f.render_widget(tabs, chunks[0]);

    // Content area — delegate to screen
    app.screens.draw(app.current_tab(), f, chunks[1]);

    // Status bar
    let bar = status_bar(&app.status);
    f.render_widget(bar, chunks[2]);

    // Overlays
    if app.show_help {
        draw_help_overlay(f);
    }
    if app.quit_prompt {
        draw_quit_prompt(f);
    }
}

fn draw_help_overlay(f: &mut Frame) {
    let area = centered_rect(60, 60, f.area());

    let help_text = vec![
        Line::from("Keybindings").style(Style::default().add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from("  1-2          Switch to screen"),
        Line::from("  Tab/S-Tab    Next/previous screen"),
        Line::from("  ?            Toggle this help"),
        Line::from("  q / Ctrl-C   Quit"),
        Line::from(""),
        Line::from("Create wizard:").style(Style::default().add_modifier(Modifier::BOLD)),
        Line::from("  Enter        Choose / edit field"),
        Line::from("  n / b        Next / previous step"),
        Line::from("  g            Generate preview"),
        Line::from("  s            Save completed document"),
        Line::from("  J/t/h/w      Export json/text/html/doc"),
        Line::from(""),
        Line::from("Documents:").style(Style::default().add_modifier(Modifier::BOLD)),
        Line::from("  /            Search by title or author"),
        Line::from("  f            Cycle type filter"),
        Line::from("  Enter        Edit selected document"),
        Line::from("  d            Delete (with confirmation)"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help — press any key to close ")
                .style(Style::default().bg(Color::DarkGray)),
        )
        .style(Style::default().fg(Color::White).bg(Color::DarkGray));

    // Clear background
    f.render_widget(ratatui::widgets::Clear, area);
    f.render_widget(help, area);
}

fn draw_quit_prompt(f: &mut Frame) {
    let area = centered_rect(50, 20, f.area());

    let text = vec![
        Line::from("Save your work?").style(Style::default().add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from("You have unsaved changes. Save this document"),
        Line::from("as \"In Progress\" before leaving?"),
        Line::from(""),
        Line::from("  s  Save and quit"),
        Line::from("  d  Discard and quit"),
        Line::from("  Esc  Keep working"),
    ];

    let prompt = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Unsaved changes ")
                .style(Style::default().bg(Color::DarkGray)),
        )
        .style(Style::default().fg(Color::White).bg(Color::DarkGray));

    f.render_widget(ratatui::widgets::Clear, area);
    f.render_widget(prompt, area);
}
