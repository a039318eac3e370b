//! The four-step creation wizard screen.
//!
//! Step 1 picks the document type (with a custom name for "Other"),
//! step 2 the tone, step 3 edits the schema-driven field list with inline
//! validation errors, and step 4 shows the rendered preview with export
//! actions. A quiet-period auto-save persists in-progress drafts in the
//! background.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

use modocs_core::{
    AutosavePolicy, AutosaveTimer, Clock, DocumentManager, GENERATE_DELAY, SystemClock, Wizard,
    WizardStep,
};
use modocs_schema::{FieldInput, FieldSpec, fields_for};
use modocs_shared::{AppConfig, Document, DocumentKind, Tone, expand_home};

use super::ScreenAction;

pub(crate) struct WizardScreen {
    manager: Arc<DocumentManager>,
    wizard: Wizard,
    autosave: AutosaveTimer,
    clock: SystemClock,
    export_dir: PathBuf,
    author: String,
    default_tone: Tone,
    /// Step-1 cursor into [`DocumentKind::ALL`].
    type_index: usize,
    /// Step-3 cursor: 0 is the title, then the schema fields.
    field_index: usize,
    editing: bool,
    input: String,
    preview_scroll: u16,
    generating_until: Option<Instant>,
    status: String,
}

impl WizardScreen {
    pub(crate) fn new(manager: Arc<DocumentManager>, config: &AppConfig) -> Self {
        let default_tone: Tone = config.defaults.tone.parse().unwrap_or_default();
        Self {
            manager,
            wizard: Wizard::new(config.defaults.author.clone(), default_tone),
            autosave: AutosaveTimer::new(AutosavePolicy::from_millis(config.autosave.quiet_ms)),
            clock: SystemClock,
            export_dir: expand_home(&config.defaults.export_dir)
                .unwrap_or_else(|_| PathBuf::from(".")),
            author: config.defaults.author.clone(),
            default_tone,
            type_index: 0,
            field_index: 0,
            editing: false,
            input: String::new(),
            preview_scroll: 0,
            generating_until: None,
            status: "Pick a document type and press Enter, then n for the next step.".into(),
        }
    }

    /// Deep link from the Documents tab: jump straight to the details step.
    pub(crate) fn start_edit(&mut self, doc: Document) {
        self.type_index = DocumentKind::ALL
            .iter()
            .position(|k| *k == doc.kind())
            .unwrap_or(0);
        self.status = format!("Editing \"{}\".", doc.display_title());
        self.wizard = Wizard::edit(doc);
        self.field_index = 0;
        self.editing = false;
        self.preview_scroll = 0;
        self.generating_until = None;
    }

    pub(crate) fn is_editing(&self) -> bool {
        self.editing
    }

    pub(crate) fn has_unsaved_changes(&self) -> bool {
        self.wizard.has_unsaved_changes()
    }

    /// Persist the current draft immediately (quit-time save).
    pub(crate) fn save_draft_now(&mut self) {
        let now = self.clock.now();
        if let Some(snapshot) = self.wizard.snapshot_in_progress(now) {
            if self.manager.autosave_in_progress(&snapshot).is_ok() {
                self.wizard.mark_saved();
            }
        }
        self.autosave.reset();
    }

    /// Background auto-save: called from the app loop on every tick.
    /// Best-effort — failures are logged, never surfaced.
    pub(crate) fn tick(&mut self) {
        let now = self.clock.now();
        if !self.autosave.due(now) {
            return;
        }
        self.autosave.reset();

        if let Some(snapshot) = self.wizard.snapshot_in_progress(now) {
            match self.manager.autosave_in_progress(&snapshot) {
                Ok(true) => self.status = "Draft auto-saved.".into(),
                Ok(false) => {}
                Err(e) => tracing::debug!(error = %e, "auto-save failed"),
            }
        }
    }

    // -----------------------------------------------------------------------
    // Input
    // -----------------------------------------------------------------------

    pub(crate) fn handle_key(&mut self, code: KeyCode, _modifiers: KeyModifiers) -> ScreenAction {
        if self.editing {
            self.handle_edit_key(code);
            return ScreenAction::None;
        }

        match self.wizard.step() {
            WizardStep::SelectType => self.handle_select_type_key(code),
            WizardStep::SelectTone => self.handle_select_tone_key(code),
            WizardStep::FillDetails => self.handle_details_key(code),
            WizardStep::Preview => return self.handle_preview_key(code),
        }
        ScreenAction::None
    }

    fn handle_edit_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.editing = false;
                self.input.clear();
            }
            KeyCode::Enter => self.commit_edit(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => self.input.push(c),
            _ => {}
        }
    }

    fn handle_select_type_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                if self.type_index > 0 {
                    self.type_index -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.type_index + 1 < DocumentKind::ALL.len() {
                    self.type_index += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let kind = DocumentKind::ALL[self.type_index];
                if self.wizard.kind() == Some(kind) && kind == DocumentKind::Other {
                    // Second Enter on "Other" edits the custom name.
                    self.editing = true;
                    self.input = self.custom_kind_value();
                } else {
                    self.wizard.select_kind(kind, self.clock.now());
                    self.status = if kind == DocumentKind::Other {
                        "Press Enter again to name the custom type.".into()
                    } else {
                        format!("{kind} selected — press n to continue.")
                    };
                }
            }
            KeyCode::Char('n') | KeyCode::Right => {
                if self.wizard.next() {
                    self.status = "Choose a tone with ←/→, then n.".into();
                } else {
                    self.status = self.first_error();
                }
            }
            _ => {}
        }
    }

    fn handle_select_tone_key(&mut self, code: KeyCode) {
        let current = self
            .wizard
            .document()
            .map(|d| d.tone)
            .unwrap_or(self.default_tone);
        let index = Tone::ALL.iter().position(|t| *t == current).unwrap_or(0);

        match code {
            KeyCode::Left | KeyCode::Char('h') => {
                let index = if index == 0 { Tone::ALL.len() - 1 } else { index - 1 };
                self.wizard.set_tone(Tone::ALL[index], self.clock.now());
                self.touch();
            }
            KeyCode::Right | KeyCode::Char('l') => {
                let index = (index + 1) % Tone::ALL.len();
                self.wizard.set_tone(Tone::ALL[index], self.clock.now());
                self.touch();
            }
            KeyCode::Char('n') | KeyCode::Enter => {
                if self.wizard.next() {
                    self.status =
                        "Fill in the details. Enter edits a field, g generates the preview."
                            .into();
                }
            }
            KeyCode::Char('b') | KeyCode::Esc => self.wizard.back(),
            _ => {}
        }
    }

    fn handle_details_key(&mut self, code: KeyCode) {
        let field_count = 1 + self.current_fields().len();
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                if self.field_index > 0 {
                    self.field_index -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.field_index + 1 < field_count {
                    self.field_index += 1;
                }
            }
            KeyCode::Enter => self.begin_field_edit(),
            KeyCode::Left | KeyCode::Right => self.cycle_choice(code == KeyCode::Right),
            KeyCode::Char('g') | KeyCode::Char('n') => {
                if self.wizard.generate() {
                    self.generating_until = Some(Instant::now() + GENERATE_DELAY);
                    self.preview_scroll = 0;
                    self.status =
                        "Preview ready. s saves, j/t/h/w export, b goes back.".into();
                } else {
                    self.status = self.first_error();
                }
            }
            KeyCode::Char('b') | KeyCode::Esc => self.wizard.back(),
            _ => {}
        }
    }

    fn handle_preview_key(&mut self, code: KeyCode) -> ScreenAction {
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.preview_scroll = self.preview_scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.preview_scroll = self.preview_scroll.saturating_add(1);
            }
            KeyCode::Char('s') => return self.save_completed(),
            KeyCode::Char('e') | KeyCode::Char('b') | KeyCode::Esc => {
                self.wizard.back();
            }
            KeyCode::Char('t') => return self.export("txt"),
            KeyCode::Char('h') => return self.export("html"),
            KeyCode::Char('w') => return self.export("doc"),
            KeyCode::Char('J') => return self.export("json"),
            KeyCode::Char('N') => {
                self.wizard = Wizard::new(self.author.clone(), self.default_tone);
                self.field_index = 0;
                self.type_index = 0;
                self.status = "New document — pick a type.".into();
            }
            _ => {}
        }
        ScreenAction::None
    }

    // -----------------------------------------------------------------------
    // Edit helpers
    // -----------------------------------------------------------------------

    fn begin_field_edit(&mut self) {
        if self.field_index == 0 {
            self.input = self
                .wizard
                .document()
                .map(|d| d.title.clone())
                .unwrap_or_default();
            self.editing = true;
            return;
        }

        let Some(spec) = self.selected_spec() else {
            return;
        };
        if matches!(spec.input, FieldInput::Choice(_)) {
            self.cycle_choice(true);
            return;
        }
        self.input = self.field_value(&spec);
        self.editing = true;
    }

    fn commit_edit(&mut self) {
        let now = self.clock.now();
        let value = std::mem::take(&mut self.input);

        if self.wizard.step() == WizardStep::SelectType {
            self.wizard.set_custom_kind(&value, now);
            self.editing = false;
            self.touch();
            return;
        }

        if self.field_index == 0 {
            self.wizard.set_title(&value, now);
            self.editing = false;
            self.touch();
            return;
        }

        let Some(spec) = self.selected_spec() else {
            self.editing = false;
            return;
        };

        let json_value = match spec.input {
            FieldInput::Number => {
                if value.trim().is_empty() {
                    serde_json::Value::from(0.0)
                } else {
                    match value.trim().parse::<f64>() {
                        Ok(n) => serde_json::Value::from(n),
                        Err(_) => {
                            self.status = format!("{} must be a number.", spec.label);
                            self.input = value;
                            return;
                        }
                    }
                }
            }
            _ => serde_json::Value::from(value.clone()),
        };

        match self.wizard.set_field(spec.path, json_value, now) {
            Ok(()) => {
                self.editing = false;
                self.touch();
            }
            Err(e) => self.status = e.to_string(),
        }
    }

    fn cycle_choice(&mut self, forward: bool) {
        let Some(spec) = self.selected_spec() else {
            return;
        };
        let FieldInput::Choice(options) = spec.input else {
            return;
        };

        let current = self.field_value(&spec);
        let index = options.iter().position(|o| *o == current);
        let next = match (index, forward) {
            (Some(i), true) => (i + 1) % options.len(),
            (Some(i), false) => (i + options.len() - 1) % options.len(),
            (None, _) => 0,
        };

        if self
            .wizard
            .set_field(
                spec.path,
                serde_json::Value::from(options[next]),
                self.clock.now(),
            )
            .is_ok()
        {
            self.touch();
        }
    }

    fn touch(&mut self) {
        self.autosave.touch(self.clock.now());
    }

    // -----------------------------------------------------------------------
    // Save & export
    // -----------------------------------------------------------------------

    fn save_completed(&mut self) -> ScreenAction {
        let now = self.clock.now();
        let Some(doc) = self.wizard.finalize(now) else {
            self.status = "Nothing to save yet.".into();
            return ScreenAction::None;
        };

        match self.manager.save_completed(doc, now) {
            Ok(saved) => {
                self.wizard.mark_saved();
                self.autosave.reset();
                ScreenAction::Status(format!(
                    "\"{}\" saved — see the Documents tab. N starts a new document.",
                    saved.display_title()
                ))
            }
            Err(e) => ScreenAction::Status(format!("Save failed: {e}")),
        }
    }

    fn export(&mut self, ext: &str) -> ScreenAction {
        let Some(doc) = self.wizard.document() else {
            return ScreenAction::None;
        };

        let content = match ext {
            "json" => match modocs_export::document_json(doc) {
                Ok(json) => json,
                Err(e) => return ScreenAction::Status(format!("Export failed: {e}")),
            },
            "html" => modocs_export::document_html(doc),
            "doc" => modocs_export::document_word(doc),
            _ => modocs_export::document_text(doc),
        };

        let path = self
            .export_dir
            .join(format!("{}.{ext}", modocs_export::file_stem(doc)));
        match modocs_export::write_artifact(&path, content.as_bytes()) {
            Ok(result) => ScreenAction::Status(format!(
                "Exported {} ({} bytes). PDF export: modocs export {} --format pdf",
                result.path.display(),
                result.size_bytes,
                doc.id,
            )),
            Err(e) => ScreenAction::Status(format!("Export failed: {e}")),
        }
    }

    // -----------------------------------------------------------------------
    // Field plumbing
    // -----------------------------------------------------------------------

    fn current_fields(&self) -> &'static [FieldSpec] {
        self.wizard.kind().map(fields_for).unwrap_or(&[])
    }

    fn selected_spec(&self) -> Option<FieldSpec> {
        if self.field_index == 0 {
            return None;
        }
        self.current_fields().get(self.field_index - 1).copied()
    }

    fn field_value(&self, spec: &FieldSpec) -> String {
        let Some(doc) = self.wizard.document() else {
            return String::new();
        };
        match doc.body.get_field(spec.path) {
            Some(serde_json::Value::String(s)) => s,
            Some(serde_json::Value::Number(n)) => {
                let v = n.as_f64().unwrap_or(0.0);
                if v == 0.0 { String::new() } else { format!("{v}") }
            }
            _ => String::new(),
        }
    }

    fn custom_kind_value(&self) -> String {
        match self.wizard.document().map(|d| &d.body) {
            Some(modocs_shared::DocumentBody::Other(fields)) => fields.custom_type.clone(),
            _ => String::new(),
        }
    }

    fn first_error(&self) -> String {
        self.wizard
            .errors()
            .values()
            .next()
            .cloned()
            .unwrap_or_else(|| "Fix the highlighted fields first.".into())
    }

    // -----------------------------------------------------------------------
    // Drawing
    // -----------------------------------------------------------------------

    pub(crate) fn draw(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2), // Step indicator
                Constraint::Min(1),    // Step body
                Constraint::Length(3), // Edit box / hint
                Constraint::Length(1), // Screen status
            ])
            .split(area);

        self.draw_step_indicator(f, chunks[0]);

        match self.wizard.step() {
            WizardStep::SelectType => self.draw_select_type(f, chunks[1]),
            WizardStep::SelectTone => self.draw_select_tone(f, chunks[1]),
            WizardStep::FillDetails => self.draw_details(f, chunks[1]),
            WizardStep::Preview => self.draw_preview(f, chunks[1]),
        }

        if self.editing {
            let label = if self.wizard.step() == WizardStep::SelectType {
                " Custom Document Type ".to_string()
            } else if self.field_index == 0 {
                " Title ".to_string()
            } else {
                self.selected_spec()
                    .map(|s| format!(" {} ", s.label))
                    .unwrap_or_else(|| " Edit ".into())
            };
            let input = Paragraph::new(self.input.as_str()).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(label)
                    .border_style(Style::default().fg(Color::Yellow)),
            );
            f.render_widget(input, chunks[2]);
        } else {
            let hint = match self.wizard.step() {
                WizardStep::SelectType => "↑/↓ select · Enter choose · n next",
                WizardStep::SelectTone => "←/→ change tone · n next · b back",
                WizardStep::FillDetails => "↑/↓ field · Enter edit · g generate · b back",
                WizardStep::Preview => {
                    "↑/↓ scroll · s save · J/t/h/w export · e edit · N new"
                }
            };
            let hint_p = Paragraph::new(hint)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            f.render_widget(hint_p, chunks[2]);
        }

        let status = Paragraph::new(self.status.as_str())
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(status, chunks[3]);
    }

    fn draw_step_indicator(&self, f: &mut Frame, area: Rect) {
        let current = self.wizard.step();
        let spans: Vec<Span> = [
            WizardStep::SelectType,
            WizardStep::SelectTone,
            WizardStep::FillDetails,
            WizardStep::Preview,
        ]
        .iter()
        .flat_map(|step| {
            let style = if *step == current {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            vec![
                Span::styled(format!("{}. {}", step.number(), step.title()), style),
                Span::raw("   "),
            ]
        })
        .collect();

        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn draw_select_type(&self, f: &mut Frame, area: Rect) {
        let selected_kind = self.wizard.kind();
        let items: Vec<ListItem> = DocumentKind::ALL
            .iter()
            .enumerate()
            .map(|(i, kind)| {
                let cursor = if i == self.type_index { "▸ " } else { "  " };
                let marker = if selected_kind == Some(*kind) { "●" } else { "○" };
                let mut label = format!("{cursor}{marker} {kind}");
                if *kind == DocumentKind::Other {
                    let custom = self.custom_kind_value();
                    if !custom.is_empty() {
                        label.push_str(&format!(" — {custom}"));
                    }
                }
                let style = if i == self.type_index {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(label).style(style)
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Document Type "),
        );
        f.render_widget(list, area);

        self.draw_error_overlay(f, area, "documentType");
        self.draw_error_overlay(f, area, "customType");
    }

    fn draw_select_tone(&self, f: &mut Frame, area: Rect) {
        let current = self
            .wizard
            .document()
            .map(|d| d.tone)
            .unwrap_or(self.default_tone);

        let mut lines = vec![Line::from("")];
        let spans: Vec<Span> = Tone::ALL
            .iter()
            .flat_map(|tone| {
                let style = if *tone == current {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                vec![Span::styled(format!("< {tone} >"), style), Span::raw("  ")]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            modocs_template::styled(modocs_template::Slot::Closing, current),
            Style::default().fg(Color::DarkGray),
        )));

        let block = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(" Tone "));
        f.render_widget(block, area);
    }

    fn draw_details(&self, f: &mut Frame, area: Rect) {
        let errors = self.wizard.errors();
        let doc_title = self
            .wizard
            .document()
            .map(|d| d.title.clone())
            .unwrap_or_default();

        let mut items: Vec<ListItem> = Vec::with_capacity(1 + self.current_fields().len());
        items.push(self.field_item(
            0,
            "Title *",
            &doc_title,
            "e.g., Q4 2024 Consulting Agreement",
            errors.get("title"),
        ));

        for (i, spec) in self.current_fields().iter().enumerate() {
            let label = if spec.required {
                format!("{} *", spec.label)
            } else {
                spec.label.to_string()
            };
            let value = self.field_value(spec);
            items.push(self.field_item(
                i + 1,
                &label,
                &value,
                spec.hint,
                errors.get(&spec.dotted()),
            ));
        }

        let title = self
            .wizard
            .kind()
            .map(|k| format!(" {} Details ", k.label()))
            .unwrap_or_else(|| " Details ".into());
        let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(list, area);
    }

    fn field_item(
        &self,
        index: usize,
        label: &str,
        value: &str,
        hint: &str,
        error: Option<&String>,
    ) -> ListItem<'static> {
        let cursor = if index == self.field_index { "▸ " } else { "  " };
        let shown = if value.is_empty() {
            Span::styled(format!("({hint})"), Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(first_line(value))
        };

        let mut spans = vec![
            Span::raw(cursor.to_string()),
            Span::styled(
                format!("{label}: "),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            shown,
        ];
        if let Some(message) = error {
            spans.push(Span::styled(
                format!("  ✗ {message}"),
                Style::default().fg(Color::Red),
            ));
        }

        let style = if index == self.field_index {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        ListItem::new(Line::from(spans)).style(style)
    }

    fn draw_preview(&self, f: &mut Frame, area: Rect) {
        if let Some(until) = self.generating_until {
            if Instant::now() < until {
                let wait = Paragraph::new("Generating document…")
                    .alignment(Alignment::Center)
                    .block(Block::default().borders(Borders::ALL).title(" Preview "));
                f.render_widget(wait, area);
                return;
            }
        }

        let Some(doc) = self.wizard.document() else {
            return;
        };

        let text = modocs_export::document_text(doc);
        let title = format!(
            " Preview — {} · {} tone ",
            doc.display_title(),
            doc.tone
        );
        let preview = Paragraph::new(text)
            .scroll((self.preview_scroll, 0))
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(preview, area);
    }

    fn draw_error_overlay(&self, f: &mut Frame, area: Rect, key: &str) {
        if let Some(message) = self.wizard.errors().get(key) {
            let rect = Rect {
                x: area.x + 2,
                y: area.bottom().saturating_sub(2),
                width: area.width.saturating_sub(4),
                height: 1,
            };
            f.render_widget(
                Paragraph::new(format!("✗ {message}")).style(Style::default().fg(Color::Red)),
                rect,
            );
        }
    }
}

/// Only the first line of a multiline value fits the field list.
fn first_line(value: &str) -> String {
    match value.split('\n').next() {
        Some(line) if line.len() < value.len() => format!("{line}…"),
        _ => value.to_string(),
    }
}
