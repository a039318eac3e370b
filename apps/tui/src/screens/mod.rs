//! TUI screen definitions.
//!
//! Each screen corresponds to a tab in the TUI and encapsulates its
//! own state and rendering logic.

mod documents;
mod wizard;

use std::fmt;
use std::sync::Arc;

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::prelude::*;

use modocs_core::DocumentManager;
use modocs_shared::{AppConfig, Document};

pub(crate) use documents::DocumentsScreen;
pub(crate) use wizard::WizardScreen;

/// Screen identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScreenId {
    Wizard,
    Documents,
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wizard => write!(f, "Create"),
            Self::Documents => write!(f, "Documents"),
        }
    }
}

/// Cross-screen effect of a key press, handled by the app loop.
pub(crate) enum ScreenAction {
    None,
    /// Open the wizard at the details step for an existing document.
    Edit(Document),
    /// Update the app status bar.
    Status(String),
}

/// Per-screen state and behaviour.
pub(crate) struct Screens {
    pub wizard: WizardScreen,
    pub documents: DocumentsScreen,
}

impl Screens {
    pub(crate) fn new(manager: Arc<DocumentManager>, config: &AppConfig) -> Self {
        Self {
            wizard: WizardScreen::new(Arc::clone(&manager), config),
            documents: DocumentsScreen::new(manager),
        }
    }

    /// Whether the given screen has an active text input field.
    pub(crate) fn is_editing(&self, id: ScreenId) -> bool {
        match id {
            ScreenId::Wizard => self.wizard.is_editing(),
            ScreenId::Documents => self.documents.is_editing(),
        }
    }

    pub(crate) fn draw(&self, id: ScreenId, f: &mut Frame, area: Rect) {
        match id {
            ScreenId::Wizard => self.wizard.draw(f, area),
            ScreenId::Documents => self.documents.draw(f, area),
        }
    }

    pub(crate) fn handle_key(
        &mut self,
        id: ScreenId,
        code: KeyCode,
        modifiers: KeyModifiers,
    ) -> ScreenAction {
        match id {
            ScreenId::Wizard => self.wizard.handle_key(code, modifiers),
            ScreenId::Documents => self.documents.handle_key(code, modifiers),
        }
    }
}
