//! Document manager screen: search, filter, edit, delete.
//!
//! Lists completed documents from the store; store change notifications
//! (auto-saves, saves from the wizard) refresh the list automatically.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use tokio::sync::broadcast;

use modocs_core::DocumentManager;
use modocs_shared::{DocId, Document, DocumentKind};
use modocs_storage::StoreEvent;

use super::ScreenAction;

pub(crate) struct DocumentsScreen {
    manager: Arc<DocumentManager>,
    events: broadcast::Receiver<StoreEvent>,
    docs: Vec<Document>,
    selected: usize,
    search: String,
    editing_search: bool,
    /// `None` is "All Types"; otherwise an index into [`DocumentKind::ALL`].
    filter: Option<usize>,
    confirm_delete: Option<DocId>,
    status: String,
    loaded: bool,
}

impl DocumentsScreen {
    pub(crate) fn new(manager: Arc<DocumentManager>) -> Self {
        let events = manager.subscribe();
        Self {
            manager,
            events,
            docs: Vec::new(),
            selected: 0,
            search: String::new(),
            editing_search: false,
            filter: None,
            confirm_delete: None,
            status: "Enter edits the selected document, d deletes, / searches.".into(),
            loaded: false,
        }
    }

    pub(crate) fn is_editing(&self) -> bool {
        self.editing_search
    }

    /// Refresh on first draw and whenever the store reports a change.
    pub(crate) fn tick(&mut self) {
        let mut changed = !self.loaded;
        while self.events.try_recv().is_ok() {
            changed = true;
        }
        if changed {
            self.refresh();
        }
    }

    fn refresh(&mut self) {
        self.loaded = true;
        let kind = self.filter.map(|i| DocumentKind::ALL[i]);
        match self.manager.search(&self.search, kind) {
            Ok(docs) => {
                self.docs = docs;
                if self.selected >= self.docs.len() {
                    self.selected = self.docs.len().saturating_sub(1);
                }
            }
            Err(e) => self.status = format!("Load failed: {e}"),
        }
    }

    pub(crate) fn handle_key(&mut self, code: KeyCode, _modifiers: KeyModifiers) -> ScreenAction {
        if self.editing_search {
            match code {
                KeyCode::Esc | KeyCode::Enter => self.editing_search = false,
                KeyCode::Backspace => {
                    self.search.pop();
                    self.refresh();
                }
                KeyCode::Char(c) => {
                    self.search.push(c);
                    self.refresh();
                }
                _ => {}
            }
            return ScreenAction::None;
        }

        if let Some(id) = self.confirm_delete.clone() {
            match code {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    self.confirm_delete = None;
                    match self.manager.delete(&id) {
                        Ok(true) => self.status = "Document deleted.".into(),
                        Ok(false) => self.status = "Document was already gone.".into(),
                        Err(e) => self.status = format!("Delete failed: {e}"),
                    }
                    self.refresh();
                }
                _ => {
                    self.confirm_delete = None;
                    self.status = "Delete cancelled.".into();
                }
            }
            return ScreenAction::None;
        }

        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                if self.selected > 0 {
                    self.selected -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.docs.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Char('/') => self.editing_search = true,
            KeyCode::Char('f') => {
                self.filter = match self.filter {
                    None => Some(0),
                    Some(i) if i + 1 < DocumentKind::ALL.len() => Some(i + 1),
                    Some(_) => None,
                };
                self.refresh();
            }
            KeyCode::Char('r') => {
                self.refresh();
                self.status = format!("{} document(s).", self.docs.len());
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(doc) = self.docs.get(self.selected) {
                    self.confirm_delete = Some(doc.id.clone());
                }
            }
            KeyCode::Enter | KeyCode::Char('e') => {
                if let Some(doc) = self.docs.get(self.selected) {
                    return ScreenAction::Edit(doc.clone());
                }
            }
            _ => {}
        }
        ScreenAction::None
    }

    pub(crate) fn draw(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Search + filter
                Constraint::Min(1),    // List
                Constraint::Length(1), // Status
            ])
            .split(area);

        // Search / filter bar
        let filter_label = match self.filter {
            None => "All Types".to_string(),
            Some(i) => DocumentKind::ALL[i].label().to_string(),
        };
        let search_style = if self.editing_search {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let bar = Paragraph::new(format!(
            "Search: {}    Filter (f): {filter_label}",
            if self.search.is_empty() && !self.editing_search {
                "(press / to search by title or author)".to_string()
            } else {
                self.search.clone()
            }
        ))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Document Manager ")
                .border_style(search_style),
        );
        f.render_widget(bar, chunks[0]);

        // Document list
        if self.docs.is_empty() {
            let empty = Paragraph::new(
                "No completed documents found.\n\n\
                 Use the Create tab to build one, or press r to reload.",
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" Documents "));
            f.render_widget(empty, chunks[1]);
        } else {
            let items: Vec<ListItem> = self
                .docs
                .iter()
                .enumerate()
                .map(|(i, doc)| {
                    let style = if i == self.selected {
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    };
                    let prefix = if i == self.selected { "▸ " } else { "  " };
                    let amount = doc
                        .body
                        .total_amount()
                        .map(|a| format!("  ${a:.2}"))
                        .unwrap_or_default();
                    ListItem::new(format!(
                        "{prefix}{}  [{}]  {} · {}{amount}",
                        doc.display_title(),
                        doc.body.kind_label(),
                        doc.author,
                        doc.created_at.format("%Y-%m-%d"),
                    ))
                    .style(style)
                })
                .collect();

            let list = List::new(items).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" Documents ({}) ", self.docs.len())),
            );
            f.render_widget(list, chunks[1]);
        }

        // Status / delete confirmation
        let status = if let Some(id) = &self.confirm_delete {
            let title = self
                .docs
                .iter()
                .find(|d| &d.id == id)
                .map(|d| d.display_title())
                .unwrap_or_else(|| id.to_string());
            format!("Delete \"{title}\"? This cannot be undone. y confirms, any other key cancels.")
        } else {
            self.status.clone()
        };
        let status_p = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
        f.render_widget(status_p, chunks[2]);
    }
}
